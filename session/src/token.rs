//! Token source backed by session storage.

use crate::keys;
use crate::providers::SessionStorage;
use std::sync::Arc;
use studyhub_client::token::TokenSource;
use studyhub_client::types::AccessToken;

/// A [`TokenSource`] that reads the persisted token on every request.
///
/// This is the wiring seam that breaks the store ↔ client cycle: the API
/// client needs a token before the session store exists, and the store's
/// own gateway calls need the token the login chain just persisted. Both
/// read through here, so "current token" always means "what storage holds
/// right now" — including a value written by another browsing context.
#[derive(Debug, Clone)]
pub struct StorageTokenSource<S> {
    storage: Arc<S>,
}

impl<S> StorageTokenSource<S> {
    /// Wrap shared storage.
    #[must_use]
    pub const fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }
}

impl<S: SessionStorage> TokenSource for StorageTokenSource<S> {
    fn access_token(&self) -> Option<AccessToken> {
        self.storage.get(keys::TOKEN).map(AccessToken::new)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Test code can use expect
mod tests {
    use super::*;
    use crate::stores::MemoryStorage;

    #[test]
    fn reads_the_current_token_on_every_call() {
        let storage = Arc::new(MemoryStorage::new());
        let source = StorageTokenSource::new(Arc::clone(&storage));

        assert!(source.access_token().is_none());

        storage.set(keys::TOKEN, "tok-1").expect("set succeeds");
        assert_eq!(source.access_token(), Some(AccessToken::new("tok-1")));

        storage.remove(keys::TOKEN).expect("remove succeeds");
        assert!(source.access_token().is_none());
    }
}
