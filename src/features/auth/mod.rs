//! Auth feature module covering the login decision, the localStorage user
//! store, and the two-step password-reset flow. It keeps validation and
//! persistence logic out of the UI so both are testable without a rendered
//! page.
//!
//! None of this is a security boundary: localStorage is readable and
//! writable by the end user, and the stored digests are a demo convenience
//! (see `policy`). Nothing here should be promoted to a real control without
//! an actual server-side trust boundary.
//!
//! Flow Overview: login validates the form, checks the demo credential, then
//! falls back to the stored users. Reset verifies the username exists, then
//! collects and persists a new password.

pub(crate) mod crypto;
pub(crate) mod login;
pub(crate) mod policy;
pub(crate) mod reset;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod store;
