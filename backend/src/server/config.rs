//! HTTP server configuration object.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) data_file: PathBuf,
}

impl ServerConfig {
    /// Construct a server configuration from the bind address and the
    /// record-file path.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, data_file: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr,
            data_file: data_file.into(),
        }
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Path of the JSON record file.
    #[must_use]
    pub fn data_file(&self) -> &Path {
        self.data_file.as_path()
    }
}
