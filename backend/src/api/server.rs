//! HTTP Server standing in for the PDF processing service.
//!
//! Accepts uploads with the same validation as the real service, then
//! answers with a fixture instead of parsing the document.
//!
//! # API Endpoints
//!
//! | Method | Path               | Description                          |
//! |--------|--------------------|--------------------------------------|
//! | GET    | `/api/health`      | Health check                         |
//! | POST   | `/api/process-pdf` | Upload a PDF, receive question data  |

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use std::{net::SocketAddr, sync::Arc, time::{Duration, Instant}};
use tower_http::cors::CorsLayer;

use super::types::HealthResponse;
use crate::config::{ServerConfig, MAX_UPLOAD_BYTES};
use crate::error::{ServerError, ServerResult};
use crate::fixture::{sanitize_filename, Fixture};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    fixture: Arc<Fixture>,
    delay: Duration,
    fail_with: Option<Arc<str>>,
}

impl AppState {
    pub fn new(fixture: Fixture) -> Self {
        Self {
            fixture: Arc::new(fixture),
            delay: Duration::ZERO,
            fail_with: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(Arc::from(message.into()));
        self
    }

    /// Build the state described by `config`, loading its fixture file.
    pub fn from_config(config: &ServerConfig) -> ServerResult<Self> {
        let fixture = match &config.fixture {
            Some(path) => Fixture::load(path)?,
            None => Fixture::sample(),
        };

        let mut state = Self::new(fixture).with_delay(config.delay);
        if let Some(message) = &config.fail_with {
            state = state.failing_with(message.clone());
        }
        Ok(state)
    }
}

/// Routes and middleware, without binding a socket.
pub fn router(state: AppState) -> Router {
    // Permissive CORS: the frontend is served by trunk on another port
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/process-pdf", post(process_pdf))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let state = AppState::from_config(&config)?;
    let questions = state.fixture.question_count();
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("🚀 Stub server running on http://localhost:{}", config.port);
    tracing::info!("   POST /api/process-pdf - Upload PDF ({} canned questions)", questions);
    tracing::info!("   GET  /api/health      - Health check");
    if !config.delay.is_zero() {
        tracing::info!("   Simulated processing time: {:?}", config.delay);
    }
    if let Some(message) = &config.fail_with {
        tracing::warn!("   Every upload will fail with: {}", message);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// The `file` part of an upload.
struct UploadedFile {
    name: String,
    size: usize,
}

async fn read_upload(multipart: &mut Multipart) -> ServerResult<Option<UploadedFile>> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let name = sanitize_filename(field.file_name().unwrap_or_default());
        let bytes = field.bytes().await.map_err(multipart_error)?;
        upload = Some(UploadedFile {
            name,
            size: bytes.len(),
        });
    }

    Ok(upload)
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> ServerError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::PayloadTooLarge
    } else {
        ServerError::BadRequest(format!("Multipart error: {}", err.body_text()))
    }
}

/// Upload PDF endpoint
async fn process_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ServerResult<Json<Value>> {
    let started = Instant::now();

    let mut multipart = multipart.map_err(|rejection| {
        tracing::warn!("Rejected upload: {}", rejection.body_text());
        ServerError::BadRequest("No file provided".to_string())
    })?;

    let file = read_upload(&mut multipart)
        .await?
        .ok_or_else(|| ServerError::BadRequest("No file provided".to_string()))?;

    if file.name.is_empty() {
        return Err(ServerError::BadRequest("No file selected".to_string()));
    }
    if !file.name.to_lowercase().ends_with(".pdf") {
        return Err(ServerError::BadRequest("File must be a PDF".to_string()));
    }

    tracing::info!("📄 New upload: {} ({} bytes)", file.name, file.size);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    if let Some(message) = &state.fail_with {
        tracing::error!("❌ Simulated failure for {}", file.name);
        return Err(ServerError::ProcessingFailed(message.to_string()));
    }

    let body = state.fixture.respond(&file.name, started.elapsed());
    tracing::info!(
        "✅ Answered {} with {} questions",
        file.name,
        state.fixture.question_count()
    );

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_state_from_default_config() {
        let state = AppState::from_config(&ServerConfig::default()).unwrap();
        assert_eq!(state.fixture.question_count(), 4);
        assert!(state.delay.is_zero());
        assert!(state.fail_with.is_none());
    }

    #[test]
    fn test_state_from_missing_fixture() {
        let config = ServerConfig {
            fixture: Some(PathBuf::from("/definitely/not/here.json")),
            ..ServerConfig::default()
        };
        assert!(matches!(
            AppState::from_config(&config),
            Err(ServerError::Fixture(_))
        ));
    }

    #[test]
    fn test_state_failure_mode() {
        let config = ServerConfig {
            fail_with: Some("scanner offline".into()),
            delay: Duration::from_millis(250),
            ..ServerConfig::default()
        };
        let state = AppState::from_config(&config).unwrap();
        assert_eq!(state.fail_with.as_deref(), Some("scanner offline"));
        assert_eq!(state.delay, Duration::from_millis(250));
    }
}
