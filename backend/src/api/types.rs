//! REST API types shared with the frontend.
//!
//! Success bodies are fixture documents (see [`crate::fixture`]); only the
//! error and health bodies are defined here.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Response of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Create an error response.
///
/// The frontend shows the `error` field verbatim.
pub fn error_response(error: &str) -> Value {
    json!({ "error": error })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let body = error_response("No file provided");
        assert_eq!(body, json!({ "error": "No file provided" }));
    }

    #[test]
    fn test_health_serialization() {
        let body = serde_json::to_value(HealthResponse::healthy()).unwrap();
        assert_eq!(body, json!({ "status": "healthy" }));
    }
}
