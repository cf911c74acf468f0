//! # Paper Parser stub - development stand-in for the PDF processing service
//!
//! The frontend posts exam papers to `POST /api/process-pdf`. The real
//! service extracts questions from the PDF; this crate answers with canned
//! question data instead, so the frontend can be developed and tested
//! without it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Multipart  │────▶│ Validation  │────▶│   Fixture   │
//! │  `file`     │     │ (name, size)│     │ + metadata  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paper_parser::{config::ServerConfig, server::start_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     start_server(ServerConfig::default()).await.unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Server settings
//! - [`fixture`] - Canned responses
//! - [`api`] - HTTP API server

pub mod config;
pub mod error;
pub mod fixture;
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{ServerConfig, DEFAULT_PORT, MAX_UPLOAD_BYTES};
pub use error::{FixtureError, FixtureResult, ServerError, ServerResult};
pub use fixture::Fixture;
pub use api::{router, AppState, HealthResponse, error_response};

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
