//! HTTP API module.
//!
//! This module provides the stub HTTP server and its response types.

pub mod server;
pub mod types;

pub use server::{router, start_server, AppState};
pub use types::*;
