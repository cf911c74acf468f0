//! Backend and browser services.
//!
//! # Services
//!
//! - [`upload`] - PDF upload to the processing endpoint
//! - [`export`] - JSON download of a processing result

pub mod upload;
pub mod export;

pub use upload::*;
pub use export::*;
