//! Stub server configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Port the processing service listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// Largest accepted request body (16 MiB).
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Runtime settings for `paper-parser serve`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// JSON fixture to serve instead of the built-in sample paper
    pub fixture: Option<PathBuf>,
    /// Artificial processing time before answering
    pub delay: Duration,
    /// When set, every upload fails with this message
    pub fail_with: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            fixture: None,
            delay: Duration::ZERO,
            fail_with: None,
        }
    }
}
