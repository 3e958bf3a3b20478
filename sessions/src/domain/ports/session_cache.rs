//! Driven port for single-slot storage of the current user.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::watch;

use crate::domain::user::User;

/// Faults raised by session cache adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionCacheError {
    /// Backing storage could not be read or written.
    #[error("session store io failed: {message}")]
    Io { message: String },
    /// The record could not be encoded or decoded for storage.
    #[error("session record encoding failed: {message}")]
    Encoding { message: String },
}

impl SessionCacheError {
    /// IO fault with the given description.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Encoding fault with the given description.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }
}

/// Port for the local session cache.
///
/// The cache holds at most one record. Writes serialize (last write wins)
/// and every update is observable through the watch receiver, including the
/// transition back to `None` on [`SessionCache::clear`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionCache: Send + Sync {
    /// Store `user` as the current user, overwriting any previous record.
    async fn cache(&self, user: User) -> Result<(), SessionCacheError>;

    /// Live view of the stored record, re-evaluated on every change.
    fn watch(&self) -> watch::Receiver<Option<User>>;

    /// Remove the stored record. Idempotent when the slot is already empty.
    async fn clear(&self) -> Result<(), SessionCacheError>;
}
