//! User store persisted in browser localStorage. Persistence hides behind the
//! small `StoragePort` trait so validation logic never touches `web_sys`
//! directly and the store is testable with an in-memory backend.
//!
//! Layout: one slot holding a JSON object mapping usernames to lowercase hex
//! SHA-256 digests. An absent slot reads as "no users". No versioning, no
//! migration, no deletes; a password reset overwrites the digest in place.

use crate::app_lib::AppError;
use crate::features::auth::crypto;
use std::collections::BTreeMap;

/// Key-value persistence seam for the user mapping.
pub trait StoragePort {
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;
    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// `StoragePort` backed by `window.localStorage`.
///
/// Off wasm it reads empty and drops writes so the crate compiles and the
/// domain tests run natively; the in-browser build is the real backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl StoragePort for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| AppError::Storage(format!("failed to read slot {key}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("failed to write slot {key}")))
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, AppError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
        .ok_or_else(|| AppError::Storage("localStorage is unavailable".to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
impl StoragePort for BrowserStorage {
    fn read(&self, _key: &str) -> Result<Option<String>, AppError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), AppError> {
        Ok(())
    }
}

/// In-memory `StoragePort` for tests.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Username -> password-digest mapping persisted through a `StoragePort`.
#[derive(Clone, Debug)]
pub struct UserStore<S: StoragePort> {
    port: S,
    slot: String,
}

impl<S: StoragePort> UserStore<S> {
    pub fn new(port: S, slot: impl Into<String>) -> Self {
        Self {
            port,
            slot: slot.into(),
        }
    }

    /// Decodes the full mapping. An absent slot is an empty mapping, not an
    /// error; an undecodable slot is surfaced as a serialization error.
    pub fn load_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        match self.port.read(&self.slot)? {
            None => Ok(BTreeMap::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|err| {
                AppError::Serialization(format!("user store slot is not valid JSON: {err}"))
            }),
        }
    }

    /// Hashes `password` and inserts or overwrites the record for `username`,
    /// persisting the full mapping back to the slot.
    pub fn save(&self, username: &str, password: &str) -> Result<(), AppError> {
        let mut users = self.load_all()?;
        users.insert(username.to_string(), crypto::digest_hex(password));
        let encoded = serde_json::to_string(&users).map_err(|err| {
            AppError::Serialization(format!("failed to encode user store: {err}"))
        })?;
        self.port.write(&self.slot, &encoded)
    }

    /// Checks `password` against the stored digest. An absent username is
    /// `Ok(false)`; the digest comparison is exact string equality.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let users = self.load_all()?;
        match users.get(username) {
            None => Ok(false),
            Some(stored) => Ok(stored == &crypto::digest_hex(password)),
        }
    }

    /// Username lookup without a password check (reset flow, step 1).
    pub fn contains(&self, username: &str) -> Result<bool, AppError> {
        Ok(self.load_all()?.contains_key(username))
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStorage, StoragePort, UserStore};

    fn store() -> UserStore<MemoryStorage> {
        UserStore::new(MemoryStorage::default(), "gt_users")
    }

    #[test]
    fn verify_is_false_for_absent_usernames() {
        let store = store();
        assert_eq!(store.verify("nobody", "anything"), Ok(false));
    }

    #[test]
    fn save_then_verify_round_trips() {
        let store = store();
        store.save("maria", "sunset4").expect("save");
        assert_eq!(store.verify("maria", "sunset4"), Ok(true));
        assert_eq!(store.verify("maria", "sunset4x"), Ok(false));
    }

    #[test]
    fn save_overwrites_existing_record() {
        let store = store();
        store.save("maria", "first").expect("save");
        store.save("maria", "second").expect("save");
        assert_eq!(store.verify("maria", "first"), Ok(false));
        assert_eq!(store.verify("maria", "second"), Ok(true));
        assert_eq!(store.load_all().expect("load").len(), 1);
    }

    #[test]
    fn usernames_are_case_sensitive() {
        let store = store();
        store.save("Maria", "sunset4").expect("save");
        assert_eq!(store.contains("Maria"), Ok(true));
        assert_eq!(store.contains("maria"), Ok(false));
    }

    #[test]
    fn slot_holds_json_object_of_hex_digests() {
        let port = MemoryStorage::default();
        let store = UserStore::new(port.clone(), "gt_users");
        store.save("maria", "sunset4").expect("save");

        let raw = port.read("gt_users").expect("read").expect("slot present");
        let decoded: std::collections::BTreeMap<String, String> =
            serde_json::from_str(&raw).expect("slot is JSON");
        let digest = decoded.get("maria").expect("record present");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, &crate::features::auth::crypto::digest_hex("sunset4"));
    }

    #[test]
    fn undecodable_slot_is_a_serialization_error() {
        let port = MemoryStorage::default();
        port.write("gt_users", "not json").expect("write");
        let store = UserStore::new(port, "gt_users");
        assert!(matches!(
            store.load_all(),
            Err(crate::app_lib::AppError::Serialization(_))
        ));
    }
}
