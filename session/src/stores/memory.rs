//! In-memory session storage.

use crate::providers::SessionStorage;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Process-local session storage.
///
/// The default storage for tests and for embeddings that do not want
/// persistence across restarts. Clones share the same underlying map, so a
/// clone handed to a token source observes writes made through the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with key/value pairs.
    #[must_use]
    pub fn seeded<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: Arc::new(Mutex::new(values)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means another thread panicked mid-write;
        // the map itself is still usable.
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> crate::error::Result<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> crate::error::Result<()> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Test code can use expect
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn set_get_remove_round_trip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get(keys::TOKEN), None);

        storage.set(keys::TOKEN, "tok-1").expect("set succeeds");
        assert_eq!(storage.get(keys::TOKEN), Some("tok-1".to_string()));

        storage.remove(keys::TOKEN).expect("remove succeeds");
        assert_eq!(storage.get(keys::TOKEN), None);
    }

    #[test]
    fn clones_share_the_underlying_map() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();

        storage.set(keys::TOKEN, "tok-1").expect("set succeeds");
        assert_eq!(clone.get(keys::TOKEN), Some("tok-1".to_string()));
    }

    #[test]
    fn removing_an_absent_key_is_not_an_error() {
        let storage = MemoryStorage::new();
        assert!(storage.remove(keys::PROFILE).is_ok());
    }
}
