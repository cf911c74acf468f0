//! HTTP service uploading PDF exam papers to the processing backend.
//!
//! The browser-specific parts (the `File` handle, `fetch`) sit behind
//! [`SelectedFile`] and [`PdfService`], so [`submit_pdf`] can be driven
//! with fakes in native tests.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde_json::Value;
use web_sys::{AbortController, File, FormData};

use crate::config::{
    process_pdf_url, INVALID_FILE_TYPE_MESSAGE, PDF_MIME_TYPE, REQUEST_TIMEOUT_MS, UPLOAD_FIELD,
};
use crate::{AppError, AppResult, UploadResult};

/// A file picked or dropped by the user.
pub trait SelectedFile {
    fn name(&self) -> String;
    /// MIME type reported by the browser (may be empty).
    fn mime_type(&self) -> String;
}

impl SelectedFile for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Something able to turn a PDF into question data.
#[allow(async_fn_in_trait)]
pub trait PdfService {
    type File: SelectedFile;

    async fn process_pdf(&self, file: Self::File) -> AppResult<UploadResult>;
}

/// Receives the outcome of an upload.
///
/// Implemented by the root controller's callbacks.
pub trait UploadEvents {
    fn loading_changed(&self, loading: bool);
    fn processed(&self, result: UploadResult);
    fn failed(&self, message: String);
}

/// Reject anything that is not a PDF before touching the network.
pub fn validate_pdf(file: &impl SelectedFile) -> AppResult<()> {
    if file.mime_type() == PDF_MIME_TYPE {
        Ok(())
    } else {
        Err(AppError::Validation(INVALID_FILE_TYPE_MESSAGE.to_string()))
    }
}

/// Validate `file`, send it to `service` and report to `events`.
///
/// Loading is signalled only for files that pass validation, and is always
/// cleared once the request settles.
pub async fn submit_pdf<S, E>(service: &S, file: S::File, events: &E)
where
    S: PdfService,
    E: UploadEvents,
{
    if let Err(e) = validate_pdf(&file) {
        log::warn!("Rejected {} ({:?}): {}", file.name(), file.mime_type(), e);
        events.failed(e.user_message());
        return;
    }

    log::info!("📤 Uploading {}...", file.name());
    events.loading_changed(true);

    match service.process_pdf(file).await {
        Ok(result) => {
            log::info!("✅ Processing complete: {} questions", result.questions.len());
            events.processed(result);
        }
        Err(e) => {
            log::error!("❌ Error processing file: {}", e);
            events.failed(e.user_message());
        }
    }

    events.loading_changed(false);
}

/// Extract the `error` field from a failure body, if it has one.
pub fn server_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .as_str()
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}

/// `fetch`-based implementation talking to the real endpoint.
#[derive(Clone, Debug)]
pub struct HttpPdfService {
    url: String,
    timeout_ms: u32,
}

impl HttpPdfService {
    pub fn new(url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            url: url.into(),
            timeout_ms,
        }
    }
}

impl Default for HttpPdfService {
    fn default() -> Self {
        Self::new(process_pdf_url(), REQUEST_TIMEOUT_MS)
    }
}

impl PdfService for HttpPdfService {
    type File = File;

    async fn process_pdf(&self, file: File) -> AppResult<UploadResult> {
        let form_data =
            FormData::new().map_err(|e| AppError::Upload(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
            .map_err(|e| AppError::Upload(format!("Failed to append file: {:?}", e)))?;

        // Abort the whole exchange, body included, once the deadline passes.
        let controller =
            AbortController::new().map_err(|e| AppError::Upload(format!("Failed to create AbortController: {:?}", e)))?;
        let signal = controller.signal();
        let _deadline = Timeout::new(self.timeout_ms, move || controller.abort());

        let timed_out_or = |err: AppError| {
            if signal.aborted() {
                AppError::Timeout(self.timeout_ms)
            } else {
                err
            }
        };

        let request = Request::post(&self.url)
            .abort_signal(Some(&signal))
            .body(form_data)
            .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| timed_out_or(AppError::Network(e.to_string())))?;

        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(timed_out_or(AppError::Service {
                status: response.status(),
                message: server_error_message(&body),
            }));
        }

        let value = response
            .json::<Value>()
            .await
            .map_err(|e| timed_out_or(AppError::Parse(e.to_string())))?;

        UploadResult::from_value(value)
    }
}
