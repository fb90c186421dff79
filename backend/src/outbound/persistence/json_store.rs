//! JSON-file record store.
//!
//! Records live in a single pretty-printed JSON array. Every write replaces
//! the whole file by writing a temporary sibling and renaming it over the
//! original, so a reader never observes a partially written array. The
//! check-then-act race between concurrent writers is closed one layer up,
//! where the account service serialises mutating calls.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::domain::User;
use crate::domain::ports::{StorageError, UserStore};

/// [`UserStore`] adapter over a single JSON array file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Adapter for the record file at `path`. Call
    /// [`UserStore::initialize`] before serving traffic.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn initialize(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|err| StorageError::io(self.display_path(), &err))?;
            }
        }
        match fs::try_exists(&self.path).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                debug!(path = %self.path.display(), "creating empty record file");
                self.write_all(&[]).await
            }
            Err(err) => Err(StorageError::io(self.display_path(), &err)),
        }
    }

    async fn read_all(&self) -> Result<Vec<User>, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StorageError::io(self.display_path(), &err)),
        };
        if bytes.iter().all(|byte| byte.is_ascii_whitespace()) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes).map_err(|err| StorageError::parse(self.display_path(), &err))
    }

    async fn write_all(&self, records: &[User]) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(records)
            .map_err(|err| StorageError::parse(self.display_path(), &err))?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, &json)
            .await
            .map_err(|err| StorageError::io(staging.display().to_string(), &err))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|err| StorageError::io(self.display_path(), &err))?;
        Ok(())
    }
}
