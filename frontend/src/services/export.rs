//! Client-side JSON export of a processing result.

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::config::EXPORT_FILE_NAME;
use crate::{AppError, AppResult, UploadResult};

/// Pretty-printed JSON of the payload exactly as the service sent it.
pub fn to_pretty_json(result: &UploadResult) -> AppResult<String> {
    serde_json::to_string_pretty(result.raw()).map_err(|e| AppError::Export(e.to_string()))
}

/// `data:` URI for an already-serialized JSON document.
pub fn json_data_uri(json: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(json).into();
    format!("data:application/json;charset=utf-8,{}", encoded)
}

/// Trigger a browser download of `result` as [`EXPORT_FILE_NAME`].
pub fn download_json(result: &UploadResult) -> AppResult<()> {
    let json = to_pretty_json(result)?;

    let anchor: HtmlAnchorElement = gloo_utils::document()
        .create_element("a")
        .map_err(|e| AppError::Export(format!("Failed to create link: {:?}", e)))?
        .dyn_into()
        .map_err(|_| AppError::Export("Created element is not an anchor".to_string()))?;

    anchor.set_href(&json_data_uri(&json));
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();

    log::info!("💾 Exported {} questions to {}", result.questions.len(), EXPORT_FILE_NAME);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_export_round_trips_payload() {
        let payload = json!({
            "questions": [
                {
                    "question_number": 1,
                    "question": "Which of these is a noble gas?",
                    "options": ["Neon", "Nitrogen"],
                    "correct_answer": "Neon",
                    "marks": "1",
                    "type": "Multiple Choice",
                    "page": 3
                }
            ],
            "metadata": {
                "total_pages": 2,
                "processing_time": 0.84,
                "extraction_method": null,
                "filename": "chemistry.pdf"
            },
            "warnings": ["page 2 is a scan"]
        });

        let result = UploadResult::from_value(payload.clone()).unwrap();
        let exported = to_pretty_json(&result).unwrap();
        let reparsed: Value = serde_json::from_str(&exported).unwrap();

        assert_eq!(reparsed, payload);
    }

    #[test]
    fn test_export_is_indented() {
        let result = UploadResult::from_value(json!({ "questions": [] })).unwrap();
        let exported = to_pretty_json(&result).unwrap();
        assert_eq!(exported, "{\n  \"questions\": []\n}");
    }

    #[test]
    fn test_export_keeps_service_key_order() {
        let body = r#"{"questions":[{"question_number":1,"question":"Q","options":["A"]}],"metadata":{"total_pages":1}}"#;
        let payload: Value = serde_json::from_str(body).unwrap();

        let result = UploadResult::from_value(payload).unwrap();
        let exported = to_pretty_json(&result).unwrap();

        let questions = exported.find("\"questions\"").unwrap();
        let metadata = exported.find("\"metadata\"").unwrap();
        assert!(questions < metadata);

        let number = exported.find("\"question_number\"").unwrap();
        let text = exported.find("\"question\":").unwrap();
        let options = exported.find("\"options\"").unwrap();
        assert!(number < text && text < options);
    }
}
