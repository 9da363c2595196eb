//! Process configuration
//!
//! Built once at startup and shared read-only with every request.

use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
    /// Workspace root published as the container hierarchy
    pub workspace: PathBuf,
    /// Base site identifier to advertise instead of the Host header
    /// (useful behind a reverse proxy)
    pub external_base: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 3000,
            workspace: PathBuf::from("./workspace"),
            external_base: None,
        }
    }
}
