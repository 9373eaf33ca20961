//! Session Store
//!
//! Persists the access token and user profile in browser `localStorage`.

use crate::models::User;

pub const TOKEN_KEY: &str = "access_token";
pub const USER_KEY: &str = "user";

/// Minimal string key/value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("localStorage write failed: {:?}", e))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Persisted credentials
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore<K> {
    backend: K,
}

impl<K: KeyValueStore> SessionStore<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    /// Read the persisted session. Empty values or a stored `null` user
    /// mean no session; unreadable user data is also purged.
    pub fn load(&self) -> Option<StoredSession> {
        let token = self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let raw_user = self.backend.get(USER_KEY).filter(|u| !u.is_empty())?;

        match serde_json::from_str::<Option<User>>(&raw_user) {
            Ok(Some(user)) => Some(StoredSession { token, user }),
            Ok(None) => None,
            Err(e) => {
                log::error!("[SESSION] Discarding unreadable stored user: {}", e);
                self.clear();
                None
            }
        }
    }

    pub fn save(&self, token: &str, user: &User) {
        let raw_user = match serde_json::to_string(user) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("[SESSION] Could not serialize user: {}", e);
                return;
            }
        };
        for (key, value) in [(TOKEN_KEY, token), (USER_KEY, raw_user.as_str())] {
            if let Err(e) = self.backend.set(key, value) {
                log::warn!("[SESSION] {}: {}", key, e);
            }
        }
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}
