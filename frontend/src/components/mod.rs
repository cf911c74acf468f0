//! UI Components for the Past Paper Parser application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF file upload with drag & drop
//! - [`LoadingPanel`] - Spinner while the paper is processed
//! - [`ErrorPanel`] - Error message with retry
//! - [`ResultsSection`] - Expandable question cards and JSON export
//! - [`QuestionDetail`] - Detailed view of a single question
//! - [`MetadataPanel`] - Processing information

mod hero;
mod upload;
mod loading;
mod error_panel;
mod results;
mod question_detail;
mod metadata;
mod footer;

pub use hero::*;
pub use upload::*;
pub use loading::*;
pub use error_panel::*;
pub use results::*;
pub use question_detail::*;
pub use metadata::*;
pub use footer::*;
