//! Watch-channel backed in-memory session cache.

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::ports::{SessionCache, SessionCacheError};
use crate::domain::user::User;

/// In-memory single-slot cache.
///
/// The watch channel gives the port its push-style read: writes go through
/// `send_replace`, which serializes concurrent callers (last write wins) and
/// wakes every receiver on each update.
#[derive(Debug)]
pub struct InMemorySessionCache {
    slot: watch::Sender<Option<User>>,
}

impl InMemorySessionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self { slot }
    }
}

impl Default for InMemorySessionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionCache for InMemorySessionCache {
    async fn cache(&self, user: User) -> Result<(), SessionCacheError> {
        self.slot.send_replace(Some(user));
        Ok(())
    }

    fn watch(&self) -> watch::Receiver<Option<User>> {
        self.slot.subscribe()
    }

    async fn clear(&self) -> Result<(), SessionCacheError> {
        self.slot.send_replace(None);
        Ok(())
    }
}
