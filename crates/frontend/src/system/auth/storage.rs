use contracts::enums::UserRole;
use contracts::system::session::{ROLE_KEY, SESSION_KEYS, TOKEN_KEY};

use crate::shared::storage::{BrowserStorage, KeyValueStorage};

/// Persisted login session (bearer token and role code)
#[derive(Debug, Clone, Default)]
pub struct SessionStore<S = BrowserStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored bearer token; an empty value counts as no token.
    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    pub fn role_code(&self) -> Option<String> {
        self.read(ROLE_KEY)
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role_code().and_then(|code| UserRole::from_code(&code))
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.role() == Some(role)
    }

    pub fn save(&self, token: &str, role: UserRole) {
        for (key, value) in [(TOKEN_KEY, token), (ROLE_KEY, role.code())] {
            if let Err(e) = self.storage.set_item(key, value) {
                log::warn!("Failed to persist session key '{}': {}", key, e);
            }
        }
    }

    /// Removes token and role. Storage failures are ignored.
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            if let Err(e) = self.storage.remove_item(key) {
                log::debug!("Failed to remove session key '{}': {}", key, e);
            }
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage
            .get_item(key)
            .ok()
            .flatten()
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_save_and_clear() {
        let storage = MemoryStorage::new();
        let session = SessionStore::new(storage.clone());
        session.save("abc", UserRole::EvmStaff);

        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(storage.get_item("role").unwrap().as_deref(), Some("EVM_STAFF"));
        assert!(session.has_role(UserRole::EvmStaff));

        session.clear();
        assert_eq!(session.token(), None);
        assert_eq!(session.role(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let storage = MemoryStorage::new();
        storage.set_item("token", "").unwrap();
        storage.set_item("role", "JANITOR").unwrap();
        let session = SessionStore::new(storage);
        assert_eq!(session.token(), None);
        assert_eq!(session.role_code().as_deref(), Some("JANITOR"));
        assert_eq!(session.role(), None);
    }
}
