//! HTTP client for the extraction backend.
//!
//! Issues one multipart POST per submission with a bounded timeout and
//! classifies every failure into one of three user-facing categories:
//! the backend rejected the request, the backend never answered, or the
//! request could not be constructed at all.

mod health;
mod response;

pub use health::HealthProbe;
pub use response::{GENERIC_DECODE_FAILURE, GENERIC_REJECTION};

use std::time::Instant;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::BackendConfig;
use crate::models::{CandidateFile, ExtractionResult};

/// User-facing message for connectivity failures.
pub const UNREACHABLE_MESSAGE: &str =
    "No response from server. Please check if the backend is running.";

/// Errors produced by a failed extraction request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    /// The backend answered and declined or failed processing.
    #[error("{0}")]
    ServerRejected(String),

    /// The request went out but no response arrived within the timeout, or
    /// the backend could not be reached at all.
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,

    /// The request could not be constructed or sent in a well-formed state.
    #[error("{0}")]
    ClientFault(String),
}

/// Client for the `extract-text` endpoint.
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    client: Client,
    base_url: String,
}

impl ExtractionClient {
    /// Create a client from backend configuration.
    pub fn new(config: &BackendConfig) -> Self {
        let client = Client::builder()
            .timeout(config.extract_timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Extract text from a candidate file.
    ///
    /// One POST, no retry; the configured timeout bounds the call. The
    /// multipart body carries a single `file` part with the candidate's
    /// name and declared media type.
    pub async fn extract(&self, file: &CandidateFile) -> Result<ExtractionResult, ExtractError> {
        let request_id = Uuid::new_v4();

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(|e| ExtractError::ClientFault(e.to_string()))?;
        let form = Form::new().part("file", part);

        let url = format!("{}/extract-text", self.base_url);
        debug!(%request_id, name = %file.name, bytes = file.byte_size(), "submitting extraction request");

        let start = Instant::now();
        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(classify_transport_error)?;
        debug!(
            %request_id,
            %status,
            duration_ms = start.elapsed().as_millis() as u64,
            "extraction response received"
        );

        if !status.is_success() {
            let message = response::rejection_message(&body);
            warn!(%request_id, %status, %message, "extraction rejected by backend");
            return Err(ExtractError::ServerRejected(message));
        }

        response::decode_success(&body).map_err(|e| {
            warn!(%request_id, error = %e, "extraction response missing required fields");
            ExtractError::ServerRejected(GENERIC_DECODE_FAILURE.to_string())
        })
    }
}

/// Map a transport error onto the three-way taxonomy.
///
/// A timeout or connection failure means no response was obtained; anything
/// else means the request never went out in a well-formed state.
fn classify_transport_error(err: reqwest::Error) -> ExtractError {
    if err.is_timeout() || err.is_connect() {
        ExtractError::Unreachable
    } else {
        ExtractError::ClientFault(err.to_string())
    }
}
