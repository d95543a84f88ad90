//! Login decision logic, separated from the form markup so the ordering and
//! short-circuit rules are testable without a rendered page.
//!
//! Flow Overview: presence checks (username first), then the hardcoded demo
//! credential, then the persisted user store. A storage failure propagates to
//! the caller, which reports it and treats the attempt as failed, matching
//! the page's recover-and-stay-put error handling.

use crate::app_lib::AppError;
use crate::features::auth::policy;
use crate::features::auth::store::{StoragePort, UserStore};

pub const MSG_ENTER_USERNAME: &str = "Please enter username.";
pub const MSG_ENTER_PASSWORD: &str = "Please enter password.";
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid username or password.";
pub const MSG_LOGIN_FAILED_NOTICE: &str =
    "Login failed: invalid username or password. (Demo default: admin / 12345)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    MissingUsername,
    MissingPassword,
    Authenticated,
    InvalidCredentials,
}

impl LoginOutcome {
    /// Inline message for a failed outcome; `None` when authenticated.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LoginOutcome::MissingUsername => Some(MSG_ENTER_USERNAME),
            LoginOutcome::MissingPassword => Some(MSG_ENTER_PASSWORD),
            LoginOutcome::InvalidCredentials => Some(MSG_INVALID_CREDENTIALS),
            LoginOutcome::Authenticated => None,
        }
    }
}

/// Decides a login attempt over trimmed inputs. Presence failures
/// short-circuit before any storage access; the demo credential matches
/// regardless of store contents.
pub fn authenticate<S: StoragePort>(
    store: &UserStore<S>,
    username: &str,
    password: &str,
) -> Result<LoginOutcome, AppError> {
    let username = username.trim();
    let password = password.trim();

    if username.is_empty() {
        return Ok(LoginOutcome::MissingUsername);
    }
    if password.is_empty() {
        return Ok(LoginOutcome::MissingPassword);
    }

    if policy::is_demo_credential(username, password) {
        return Ok(LoginOutcome::Authenticated);
    }

    if store.verify(username, password)? {
        Ok(LoginOutcome::Authenticated)
    } else {
        Ok(LoginOutcome::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginOutcome, authenticate};
    use crate::app_lib::AppError;
    use crate::features::auth::store::{MemoryStorage, StoragePort, UserStore};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts reads so tests can assert a path never touched storage.
    #[derive(Clone, Default)]
    struct CountingPort {
        inner: MemoryStorage,
        reads: Rc<Cell<usize>>,
    }

    impl StoragePort for CountingPort {
        fn read(&self, key: &str) -> Result<Option<String>, AppError> {
            self.reads.set(self.reads.get() + 1);
            self.inner.read(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
            self.inner.write(key, value)
        }
    }

    fn store() -> UserStore<MemoryStorage> {
        UserStore::new(MemoryStorage::default(), "gt_users")
    }

    #[test]
    fn demo_credential_succeeds_with_an_empty_store() {
        let store = store();
        assert_eq!(
            authenticate(&store, "admin", "12345"),
            Ok(LoginOutcome::Authenticated)
        );
    }

    #[test]
    fn missing_username_short_circuits_without_storage_access() {
        let port = CountingPort::default();
        let reads = port.reads.clone();
        let store = UserStore::new(port, "gt_users");

        assert_eq!(
            authenticate(&store, "   ", "secret"),
            Ok(LoginOutcome::MissingUsername)
        );
        assert_eq!(reads.get(), 0);
    }

    #[test]
    fn missing_password_is_reported_after_username() {
        let store = store();
        assert_eq!(
            authenticate(&store, "maria", ""),
            Ok(LoginOutcome::MissingPassword)
        );
        assert_eq!(
            authenticate(&store, "", ""),
            Ok(LoginOutcome::MissingUsername)
        );
    }

    #[test]
    fn stored_user_authenticates_and_wrong_password_does_not() {
        let store = store();
        store.save("maria", "sunset4").expect("save");
        assert_eq!(
            authenticate(&store, "maria", "sunset4"),
            Ok(LoginOutcome::Authenticated)
        );
        assert_eq!(
            authenticate(&store, "maria", "sunrise"),
            Ok(LoginOutcome::InvalidCredentials)
        );
        assert_eq!(
            authenticate(&store, "nobody", "sunset4"),
            Ok(LoginOutcome::InvalidCredentials)
        );
    }

    #[test]
    fn inputs_are_trimmed_before_matching() {
        let store = store();
        store.save("maria", "sunset4").expect("save");
        assert_eq!(
            authenticate(&store, "  maria  ", "  sunset4  "),
            Ok(LoginOutcome::Authenticated)
        );
        assert_eq!(
            authenticate(&store, " admin ", " 12345 "),
            Ok(LoginOutcome::Authenticated)
        );
    }

    #[test]
    fn failed_outcomes_carry_their_field_messages() {
        assert_eq!(
            LoginOutcome::MissingUsername.message(),
            Some("Please enter username.")
        );
        assert_eq!(
            LoginOutcome::MissingPassword.message(),
            Some("Please enter password.")
        );
        assert_eq!(
            LoginOutcome::InvalidCredentials.message(),
            Some("Invalid username or password.")
        );
        assert_eq!(LoginOutcome::Authenticated.message(), None);
    }

    #[test]
    fn failure_notice_names_the_demo_credential() {
        assert!(super::MSG_LOGIN_FAILED_NOTICE.contains("admin / 12345"));
    }

    #[test]
    fn corrupt_slot_surfaces_a_storage_error() {
        let port = MemoryStorage::default();
        port.write("gt_users", "{broken").expect("write");
        let store = UserStore::new(port, "gt_users");
        assert!(authenticate(&store, "maria", "sunset4").is_err());
    }
}
