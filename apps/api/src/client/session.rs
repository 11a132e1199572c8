//! The client-side session record and where it is kept between runs.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::client::error::ClientError;
use crate::models::user::UserType;

/// What the client remembers about a logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSession {
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub token: String,
}

/// Persistence for the current [`ClientSession`]. Holds at most one session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self) -> Result<Option<ClientSession>, ClientError>;
    async fn save(&self, session: &ClientSession) -> Result<(), ClientError>;
    async fn clear(&self) -> Result<(), ClientError>;
}

/// Stores the session as a JSON file. A missing or unreadable file means
/// no session.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> ClientError {
    ClientError::Storage(format!("{action} {}: {err}", path.display()))
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<ClientSession>, ClientError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(storage_error("reading", &self.path, e)),
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!("Ignoring corrupt session file {}: {e}", self.path.display());
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &ClientSession) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("creating", parent, e))?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| storage_error("encoding", &self.path, e))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| storage_error("writing", &self.path, e))?;
        debug!("Session for {} saved to {}", session.email, self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error("removing", &self.path, e)),
        }
    }
}

/// Keeps the session in memory only.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<ClientSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<ClientSession>, ClientError> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, session: &ClientSession) -> Result<(), ClientError> {
        *self.slot.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ClientError> {
        *self.slot.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ClientSession {
        ClientSession {
            email: "r@example.com".to_string(),
            user_type: UserType::Recruiter,
            token: "abc123".to_string(),
        }
    }

    #[test]
    fn test_session_wire_format() {
        let value = serde_json::to_value(session()).unwrap();
        assert_eq!(value["type"], "recruiter");
        assert_eq!(value["token"], "abc123");
    }

    #[tokio::test]
    async fn test_file_store_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

        assert_eq!(store.load().await.unwrap(), None);
        store.save(&session()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(session()));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
        // clearing twice is fine
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let store = FileSessionStore::new(&path);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemorySessionStore::new();
        store.save(&session()).await.unwrap();
        assert_eq!(store.load().await.unwrap().map(|s| s.token), Some("abc123".to_string()));
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
