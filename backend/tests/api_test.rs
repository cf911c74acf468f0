use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use paper_parser::{router, AppState, Fixture};
use serde_json::{json, Value};
use tower::ServiceExt;

const BOUNDARY: &str = "paperparserboundary";

fn app() -> Router {
    router(AppState::new(Fixture::sample()))
}

/// Multipart body with one part named `field`.
fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/process-pdf")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .expect("request build should succeed")
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.expect("router should respond");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, json)
}

#[tokio::test]
async fn health_reports_healthy() {
    let req = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .expect("request build should succeed");

    let (status, body) = send(app(), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn pdf_upload_returns_fixture_with_metadata() {
    let req = upload_request(multipart_body("file", "physics.pdf", b"%PDF-1.7 fake"));

    let (status, body) = send(app(), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["metadata"]["filename"], "physics.pdf");
    assert!(body["metadata"]["processing_time"].is_number());
    assert_eq!(body["metadata"]["total_pages"], 6);
}

#[tokio::test]
async fn upload_errors_carry_json_message() {
    let cases = [
        (multipart_body("document", "paper.pdf", b"%PDF"), "No file provided"),
        (multipart_body("file", "", b"%PDF"), "No file selected"),
        (multipart_body("file", "notes.txt", b"hello"), "File must be a PDF"),
    ];

    for (body, expected) in cases {
        let (status, json) = send(app(), upload_request(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "expected 400 for {expected}");
        assert_eq!(json, json!({ "error": expected }));
    }
}

#[tokio::test]
async fn non_multipart_request_is_rejected() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/process-pdf")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .expect("request build should succeed");

    let (status, body) = send(app(), req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn uppercase_extension_is_accepted() {
    let req = upload_request(multipart_body("file", "EXAM.PDF", b"%PDF"));

    let (status, body) = send(app(), req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadata"]["filename"], "EXAM.PDF");
}

#[tokio::test]
async fn failure_mode_returns_server_error() {
    let app = router(AppState::new(Fixture::sample()).failing_with("corrupt xref table"));
    let req = upload_request(multipart_body("file", "paper.pdf", b"%PDF"));

    let (status, body) = send(app, req).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Processing failed: corrupt xref table");
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let content = vec![b'x'; paper_parser::MAX_UPLOAD_BYTES + 1024];
    let req = upload_request(multipart_body("file", "huge.pdf", &content));

    let (status, body) = send(app(), req).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "File exceeds the 16 MB upload limit");
}
