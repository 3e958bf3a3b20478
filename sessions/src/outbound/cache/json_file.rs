//! JSON-file backed session cache.
//!
//! Persists the single user slot as one JSON document so the session
//! survives restarts. Writes serialize behind an async mutex and feed the
//! same watch channel the in-memory adapter uses, so readers get the live
//! view regardless of which adapter backs the port.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::{Mutex, watch};
use tracing::warn;

use crate::domain::ports::{SessionCache, SessionCacheError};
use crate::domain::user::User;

/// Durable single-slot cache stored at one filesystem path.
#[derive(Debug)]
pub struct JsonFileSessionCache {
    path: PathBuf,
    slot: watch::Sender<Option<User>>,
    write_lock: Mutex<()>,
}

impl JsonFileSessionCache {
    /// Open the cache, loading any record stored at `path`.
    ///
    /// A missing file starts the cache empty. An unreadable record also
    /// starts it empty (with a warning): a session cache is rebuilt by the
    /// next login, so refusing to open would only trade a re-login for an
    /// outage.
    ///
    /// # Errors
    ///
    /// Returns an IO fault when the file exists but cannot be read.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, SessionCacheError> {
        let path = path.into();
        let stored = match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<User>(&bytes) {
                Ok(user) => Some(user),
                Err(error) => {
                    warn!(
                        path = %path.display(),
                        error = %error,
                        "stored session record unreadable; starting empty"
                    );
                    None
                }
            },
            Err(error) if error.kind() == io::ErrorKind::NotFound => None,
            Err(error) => return Err(SessionCacheError::io(error.to_string())),
        };
        let (slot, _) = watch::channel(stored);
        Ok(Self {
            path,
            slot,
            write_lock: Mutex::new(()),
        })
    }

    /// Path backing this cache.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

#[async_trait]
impl SessionCache for JsonFileSessionCache {
    async fn cache(&self, user: User) -> Result<(), SessionCacheError> {
        let _guard = self.write_lock.lock().await;
        let encoded = serde_json::to_vec_pretty(&user)
            .map_err(|error| SessionCacheError::encoding(error.to_string()))?;
        fs::write(&self.path, encoded)
            .await
            .map_err(|error| SessionCacheError::io(error.to_string()))?;
        self.slot.send_replace(Some(user));
        Ok(())
    }

    fn watch(&self) -> watch::Receiver<Option<User>> {
        self.slot.subscribe()
    }

    async fn clear(&self) -> Result<(), SessionCacheError> {
        let _guard = self.write_lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(error) => return Err(SessionCacheError::io(error.to_string())),
        }
        self.slot.send_replace(None);
        Ok(())
    }
}
