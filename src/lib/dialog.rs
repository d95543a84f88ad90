//! Blocking browser notices. The login and reset flows use these for the
//! "login failed" hint and the reset confirmation, matching the page's
//! alert-style UX. Off wasm the notice is a no-op so domain tests can run
//! natively.

#[cfg(target_arch = "wasm32")]
pub fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn notify(_message: &str) {}
