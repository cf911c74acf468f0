//! Canned processing results.
//!
//! The stub never looks inside the uploaded PDF. It answers every upload
//! with a fixture document, stamped with the file name and the time spent.

use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{FixtureError, FixtureResult};

/// A response document in the processing service's format.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    document: Value,
}

impl Fixture {
    /// Validate a document: an object whose `questions` is an array.
    pub fn from_value(document: Value) -> FixtureResult<Self> {
        let object = document
            .as_object()
            .ok_or_else(|| FixtureError::InvalidShape("expected a JSON object".to_string()))?;

        match object.get("questions") {
            Some(Value::Array(_)) => Ok(Self { document }),
            Some(_) => Err(FixtureError::InvalidShape(
                "`questions` must be an array".to_string(),
            )),
            None => Err(FixtureError::InvalidShape(
                "missing `questions` field".to_string(),
            )),
        }
    }

    pub fn load(path: &Path) -> FixtureResult<Self> {
        let content = fs::read_to_string(path)?;
        let document: Value = serde_json::from_str(&content)?;
        Self::from_value(document)
    }

    /// Built-in sample paper.
    pub fn sample() -> Self {
        Self {
            document: json!({
                "questions": [
                    {
                        "question_number": 1,
                        "type": "Multiple Choice",
                        "question": "Which of the following is the SI unit of force?",
                        "options": ["Joule", "Newton", "Watt", "Pascal"],
                        "correct_answer": "Newton",
                        "marks": "1"
                    },
                    {
                        "question_number": 2,
                        "type": "Multiple Choice",
                        "question": "A car accelerates uniformly from rest to 20 m/s in 5 seconds. What is its acceleration?",
                        "options": ["2 m/s²", "4 m/s²", "5 m/s²", "100 m/s²"],
                        "correct_answer": "4 m/s²",
                        "marks": "1"
                    },
                    {
                        "question_number": 3,
                        "type": "Short Answer",
                        "question": "Describe how the resistance of a filament lamp changes as the current through it increases, and explain why this happens in terms of the behaviour of the ions in the metal lattice. [3 marks]",
                        "options": [],
                        "correct_answer": "",
                        "marks": "3"
                    },
                    {
                        "question_number": 4,
                        "type": "Short Answer",
                        "question": "State the law of conservation of energy. [1 mark]",
                        "options": [],
                        "correct_answer": "",
                        "marks": "1"
                    }
                ],
                "metadata": {
                    "total_pages": 6,
                    "total_questions": 4,
                    "extraction_method": "fixture"
                }
            }),
        }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn question_count(&self) -> usize {
        self.document["questions"].as_array().map_or(0, Vec::len)
    }

    /// Response body for an upload named `filename`.
    ///
    /// Adds `processing_time` (seconds, two decimals) and `filename` to the
    /// fixture's metadata, keeping whatever else it holds.
    pub fn respond(&self, filename: &str, elapsed: Duration) -> Value {
        let mut document = self.document.clone();

        let mut metadata = match document.get("metadata") {
            Some(Value::Object(existing)) => existing.clone(),
            _ => Map::new(),
        };
        let seconds = (elapsed.as_secs_f64() * 100.0).round() / 100.0;
        metadata.insert("processing_time".to_string(), json!(seconds));
        metadata.insert("filename".to_string(), json!(filename));

        document["metadata"] = Value::Object(metadata);
        document
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::sample()
    }
}

/// Strip any directory part a client put in the multipart file name.
pub fn sanitize_filename(name: &str) -> String {
    name.rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_sample_is_valid() {
        let sample = Fixture::sample();
        assert_eq!(sample.question_count(), 4);
        assert!(Fixture::from_value(sample.document().clone()).is_ok());
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(matches!(
            Fixture::from_value(json!([])),
            Err(FixtureError::InvalidShape(_))
        ));
        assert!(matches!(
            Fixture::from_value(json!({ "questions": {} })),
            Err(FixtureError::InvalidShape(_))
        ));
        assert!(matches!(
            Fixture::from_value(json!({ "metadata": {} })),
            Err(FixtureError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"questions": [{{"question": "What is 2 + 2?"}}]}}"#).unwrap();

        let fixture = Fixture::load(file.path()).unwrap();
        assert_eq!(fixture.question_count(), 1);
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        assert!(matches!(Fixture::load(file.path()), Err(FixtureError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Fixture::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(FixtureError::Io(_))));
    }

    #[test]
    fn test_respond_merges_metadata() {
        let body = Fixture::sample().respond("physics.pdf", Duration::from_millis(1234));

        assert_eq!(body["metadata"]["filename"], "physics.pdf");
        assert_eq!(body["metadata"]["processing_time"], 1.23);
        assert_eq!(body["metadata"]["total_pages"], 6);
        assert_eq!(body["questions"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_respond_without_metadata() {
        let fixture = Fixture::from_value(json!({ "questions": [], "metadata": null })).unwrap();
        let body = fixture.respond("empty.pdf", Duration::ZERO);

        assert_eq!(body["metadata"]["filename"], "empty.pdf");
        assert_eq!(body["metadata"]["processing_time"], 0.0);
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("paper.pdf"), "paper.pdf");
        assert_eq!(sanitize_filename("../../etc/paper.pdf"), "paper.pdf");
        assert_eq!(sanitize_filename("C:\\Users\\me\\exam.PDF"), "exam.PDF");
        assert_eq!(sanitize_filename(""), "");
    }
}
