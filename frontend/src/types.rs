//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Processing service response structures
//! - **Display Types** - Card and option view models
//! - **Error Types** - Frontend error handling

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

use crate::config::{GENERIC_ERROR_MESSAGE, PREVIEW_CHAR_LIMIT};

// =============================================================================
// API Response Types
// =============================================================================

/// A number-or-string field.
///
/// The processing service is loose about types: marks come back as `"1"`
/// from one extractor and `1` from another.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Whether the value carries anything worth displaying.
    ///
    /// Zero and the empty string count as absent.
    pub fn is_present(&self) -> bool {
        match self {
            Scalar::Integer(n) => *n != 0,
            Scalar::Float(n) => *n != 0.0,
            Scalar::Text(s) => !s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// One extracted exam question.
///
/// Every field is read leniently: a value of an unexpected type is treated
/// as absent instead of failing the whole payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Question {
    /// Number printed on the paper
    #[serde(default, deserialize_with = "lenient")]
    pub question_number: Option<Scalar>,
    /// "Multiple Choice", "Short Answer", ...
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub kind: Option<String>,
    /// Full question text
    #[serde(default, deserialize_with = "lenient")]
    pub question: Option<String>,
    /// Answer options, in paper order
    #[serde(default, deserialize_with = "lenient_options")]
    pub options: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub correct_answer: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub marks: Option<Scalar>,
}

/// Metadata about the processed document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "lenient")]
    pub total_pages: Option<Scalar>,
    /// Seconds spent on the service side
    #[serde(default, deserialize_with = "lenient")]
    pub processing_time: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub extraction_method: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_questions: Option<Scalar>,
    /// Name of the uploaded file as seen by the service
    #[serde(default, deserialize_with = "lenient")]
    pub filename: Option<String>,
}

/// Read any JSON value, keeping it only if it has the expected type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Options as display strings.
///
/// Numbers and booleans are shown as written; `null`, arrays and objects
/// are skipped.
fn lenient_options<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let options = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        _ => return Ok(None),
    };
    Ok(Some(options))
}

/// Typed view over the service payload, used only for deserialization.
#[derive(Deserialize)]
struct Payload {
    #[serde(default)]
    questions: Option<Vec<Question>>,
    #[serde(default, deserialize_with = "lenient")]
    metadata: Option<Metadata>,
}

/// Response from the PDF processing endpoint.
///
/// Keeps the JSON object exactly as received next to the typed view,
/// so the export reproduces fields this app never reads.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadResult {
    pub questions: Vec<Question>,
    pub metadata: Option<Metadata>,
    raw: Value,
}

impl UploadResult {
    /// Build a result from the JSON body returned by the service.
    pub fn from_value(raw: Value) -> AppResult<Self> {
        if !raw.is_object() {
            return Err(AppError::Parse("expected a JSON object".to_string()));
        }

        let payload: Payload =
            serde_json::from_value(raw.clone()).map_err(|e| AppError::Parse(e.to_string()))?;

        Ok(Self {
            questions: payload.questions.unwrap_or_default(),
            metadata: payload.metadata,
            raw,
        })
    }

    /// The payload as received.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// One card per question, in payload order.
    pub fn cards(&self) -> Vec<QuestionCard> {
        self.questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionCard {
                index,
                title: question.title(index),
                kind: question.kind_label().to_string(),
                preview: question.preview(),
                question: question.clone(),
            })
            .collect()
    }
}

// =============================================================================
// Display Types
// =============================================================================

/// Collapsed representation of a question in the results grid.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionCard {
    /// Position in the payload (0-based)
    pub index: usize,
    /// "Question 3"
    pub title: String,
    /// Type badge
    pub kind: String,
    /// Truncated question text
    pub preview: String,
    pub question: Question,
}

/// A single rendered option of a question.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionRow {
    pub text: String,
    pub is_correct: bool,
}

impl Question {
    /// Card title, falling back to the 1-based position.
    pub fn title(&self, index: usize) -> String {
        match self.question_number.as_ref().filter(|n| n.is_present()) {
            Some(number) => format!("Question {}", number),
            None => format!("Question {}", index + 1),
        }
    }

    pub fn kind_label(&self) -> &str {
        self.kind
            .as_deref()
            .filter(|k| !k.is_empty())
            .unwrap_or("Multiple Choice")
    }

    /// Question text cut to [`PREVIEW_CHAR_LIMIT`] characters.
    pub fn preview(&self) -> String {
        match self.question.as_deref().filter(|q| !q.is_empty()) {
            Some(text) => truncate_chars(text, PREVIEW_CHAR_LIMIT),
            None => "No question text found".to_string(),
        }
    }

    /// Correct answer as displayed, if there is one.
    pub fn correct_answer(&self) -> Option<String> {
        self.correct_answer
            .as_ref()
            .filter(|a| a.is_present())
            .map(ToString::to_string)
    }

    pub fn marks(&self) -> Option<&Scalar> {
        self.marks.as_ref().filter(|m| m.is_present())
    }

    /// Options with the correct one flagged.
    ///
    /// Only the first option equal to the correct answer is flagged, even
    /// if the paper repeats it.
    pub fn option_rows(&self) -> Vec<OptionRow> {
        let options = self.options.as_deref().unwrap_or_default();
        let correct = self
            .correct_answer()
            .and_then(|answer| options.iter().position(|o| *o == answer));

        options
            .iter()
            .enumerate()
            .map(|(idx, text)| OptionRow {
                text: text.clone(),
                is_correct: correct == Some(idx),
            })
            .collect()
    }
}

impl Metadata {
    /// Label/value pairs for the "Processing Information" panel.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();

        if let Some(pages) = self.total_pages.as_ref().filter(|v| v.is_present()) {
            entries.push(("Total Pages", pages.to_string()));
        }
        if let Some(time) = self.processing_time.as_ref().filter(|v| v.is_present()) {
            entries.push(("Processing Time", format!("{}s", time)));
        }
        if let Some(method) = self.extraction_method.as_deref().filter(|m| !m.is_empty()) {
            entries.push(("Extraction Method", method.to_string()));
        }
        if let Some(total) = self.total_questions.as_ref().filter(|v| v.is_present()) {
            entries.push(("Total Questions", total.to_string()));
        }
        if let Some(name) = self.filename.as_deref().filter(|n| !n.is_empty()) {
            entries.push(("File", name.to_string()));
        }

        entries
    }
}

/// Keep the first `limit` characters, appending `...` when something was cut.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Rejected before any request was made.
    Validation(String),
    /// Request could not be built.
    Upload(String),
    /// Connection failure.
    Network(String),
    /// No response within the configured time (milliseconds).
    Timeout(u32),
    /// Non-success HTTP status, with the service's `error` field if any.
    Service { status: u16, message: Option<String> },
    /// Response body is not a usable payload.
    Parse(String),
    /// JSON export failed.
    Export(String),
}

impl AppError {
    /// Text shown to the user for this error.
    ///
    /// Only validation errors and messages supplied by the service are
    /// shown verbatim; everything else gets the generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Service {
                message: Some(msg), ..
            } => msg.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Timeout(ms) => write!(f, "Request timed out after {}s", ms / 1000),
            AppError::Service { status, message } => match message {
                Some(msg) => write!(f, "Server error ({}): {}", status, msg),
                None => write!(f, "Server error ({})", status),
            },
            AppError::Parse(msg) => write!(f, "Failed to parse response: {}", msg),
            AppError::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
