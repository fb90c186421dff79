//! Domain ports defining the edges of the hexagon.
//!
//! The record store is the only driven adapter. The trait exposes strongly
//! typed errors so adapters map their failures into predictable variants
//! instead of returning `anyhow::Result`.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use super::User;

/// Errors surfaced by a record-store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Reading, writing, or creating the backing file failed.
    #[error("record store I/O failed for {path}: {message}")]
    Io { path: String, message: String },
    /// The backing file holds something other than a JSON array of records.
    #[error("record store file {path} is malformed: {message}")]
    Parse { path: String, message: String },
}

impl StorageError {
    /// Helper for I/O failures.
    pub fn io(path: impl Into<String>, source: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Helper for serialisation failures.
    pub fn parse(path: impl Into<String>, source: &serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

/// Durable storage of the full user-record collection.
///
/// Every mutation rewrites the complete set; there is no incremental
/// update. Implementations must preserve insertion order so lookups keep
/// their earliest-written-wins semantics.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Ensure the backing storage exists. Idempotent; never touches
    /// existing records.
    async fn initialize(&self) -> Result<(), StorageError>;

    /// Return every record in storage order; empty when nothing is stored.
    async fn read_all(&self) -> Result<Vec<User>, StorageError>;

    /// Replace the stored record set with `records`.
    async fn write_all(&self, records: &[User]) -> Result<(), StorageError>;
}

/// In-memory store backing unit tests and handler fixtures.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    records: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    /// Store seeded with `records`.
    pub fn with_records(records: Vec<User>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn initialize(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<User>, StorageError> {
        Ok(self.records.lock().await.clone())
    }

    async fn write_all(&self, records: &[User]) -> Result<(), StorageError> {
        *self.records.lock().await = records.to_vec();
        Ok(())
    }
}
