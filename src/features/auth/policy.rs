//! Demo conveniences kept behind one seam: the hardcoded login credential
//! and the seeded default account. Both exist so the page works out of the
//! box; removing this module (and its call sites) removes every demo
//! shortcut without touching validation or storage.

use crate::app_lib::AppError;
use crate::features::auth::store::{StoragePort, UserStore};

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "12345";

/// Exact match against the hardcoded demo credential pair.
pub fn is_demo_credential(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}

/// Inserts the default account on first load; later loads are no-ops so a
/// reset password for the demo user is never clobbered.
pub fn seed_demo_user<S: StoragePort>(store: &UserStore<S>) -> Result<(), AppError> {
    if store.contains(DEMO_USERNAME)? {
        return Ok(());
    }
    store.save(DEMO_USERNAME, DEMO_PASSWORD)
}

#[cfg(test)]
mod tests {
    use super::{DEMO_PASSWORD, DEMO_USERNAME, is_demo_credential, seed_demo_user};
    use crate::features::auth::store::{MemoryStorage, UserStore};

    #[test]
    fn demo_credential_requires_exact_match() {
        assert!(is_demo_credential(DEMO_USERNAME, DEMO_PASSWORD));
        assert!(!is_demo_credential("admin", "123456"));
        assert!(!is_demo_credential("Admin", DEMO_PASSWORD));
    }

    #[test]
    fn seed_inserts_once_and_never_overwrites() {
        let store = UserStore::new(MemoryStorage::default(), "gt_users");
        seed_demo_user(&store).expect("seed");
        assert_eq!(store.verify(DEMO_USERNAME, DEMO_PASSWORD), Ok(true));

        // A user-chosen password survives a later seed call.
        store.save(DEMO_USERNAME, "newpass").expect("save");
        seed_demo_user(&store).expect("seed again");
        assert_eq!(store.verify(DEMO_USERNAME, "newpass"), Ok(true));
        assert_eq!(store.verify(DEMO_USERNAME, DEMO_PASSWORD), Ok(false));
    }
}
