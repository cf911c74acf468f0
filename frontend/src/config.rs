//! Application configuration.
//!
//! Centralized configuration for the Past Paper Parser frontend.
//! Everything is fixed at compile time; the app reads no environment.

/// Backend API base URL.
///
/// The PDF processing service (or the stub server during development).
pub const BACKEND_URL: &str = "http://localhost:5000";

/// Path of the PDF processing endpoint on [`BACKEND_URL`].
pub const PROCESS_PDF_PATH: &str = "/api/process-pdf";

/// Client-side timeout for the processing request, in milliseconds.
///
/// 5 minutes. Large papers can take a while on the service side.
pub const REQUEST_TIMEOUT_MS: u32 = 300_000;

/// The only MIME type accepted by the upload control.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Multipart field name carrying the PDF bytes.
pub const UPLOAD_FIELD: &str = "file";

/// Number of characters shown in a collapsed question card.
pub const PREVIEW_CHAR_LIMIT: usize = 100;

/// File name used for the JSON export.
pub const EXPORT_FILE_NAME: &str = "parsed-questions.json";

/// Shown when the selected file is not a PDF.
pub const INVALID_FILE_TYPE_MESSAGE: &str = "Please upload a PDF file";

/// Shown when a request fails without a server-provided message.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to process PDF. Please try again.";

/// Full URL of the processing endpoint.
pub fn process_pdf_url() -> String {
    format!("{}{}", BACKEND_URL, PROCESS_PDF_PATH)
}
