//! Core `SubmissionClient` trait and the HTTP implementation.
//!
//! `HttpSubmissionClient` talks to the verification backend:
//! `POST /signup` and `POST /login` with a multipart body, `GET /health` for
//! a preflight.  All connection details come from [`BackendConfig`].

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::audio::{AudioSample, MediaType};
use crate::config::{BackendConfig, CaptureConfig};

use super::credentials::CredentialBundle;
use super::error::SubmissionError;
use super::response::{self, SubmissionResult};

// ---------------------------------------------------------------------------
// SubmissionClient trait
// ---------------------------------------------------------------------------

/// One-shot enrollment and verification.
///
/// Each call performs exactly one exchange and never retries; retry policy
/// belongs to the caller.  Implementors must be `Send + Sync` so they can be
/// held behind an `Arc<dyn SubmissionClient>`.
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    /// Register a new user with their voice phrase.
    async fn enroll(&self, bundle: CredentialBundle) -> SubmissionResult;

    /// Authenticate an existing user with their voice phrase.
    async fn verify(&self, email: &str, password: &str, sample: AudioSample) -> SubmissionResult;
}

// ---------------------------------------------------------------------------
// HttpSubmissionClient
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Operation {
    Signup,
    Login,
}

impl Operation {
    fn path(self) -> &'static str {
        match self {
            Operation::Signup => "/signup",
            Operation::Login => "/login",
        }
    }

    fn fallback_reason(self) -> &'static str {
        match self {
            Operation::Signup => "Signup failed",
            Operation::Login => "Login failed",
        }
    }
}

/// Multipart client for the verification backend.
///
/// The audio payload is forwarded byte for byte.  Its part is declared with
/// the sample's negotiated media type unless the capture config names an
/// override.
pub struct HttpSubmissionClient {
    client: reqwest::Client,
    base_url: String,
    max_upload_bytes: usize,
    declared_media_type: Option<MediaType>,
}

impl HttpSubmissionClient {
    /// Build a client from application config.
    ///
    /// The HTTP client carries the per-request timeout from
    /// `backend.timeout_secs`.  A default (no-timeout) client is used if the
    /// builder fails.
    pub fn from_config(backend: &BackendConfig, capture: &CaptureConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(backend.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: backend.base_url.trim_end_matches('/').to_string(),
            max_upload_bytes: backend.max_upload_bytes,
            declared_media_type: capture.declared_media_type.clone().map(MediaType::new),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`; any 2xx counts as healthy.
    pub async fn health(&self) -> Result<(), SubmissionError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            log::debug!("backend healthy at {url}");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(response::rejection(
                status.as_u16(),
                &body,
                "Health check failed",
            ))
        }
    }

    fn audio_part(&self, sample: AudioSample) -> Result<Part, SubmissionError> {
        if sample.len() > self.max_upload_bytes {
            return Err(SubmissionError::PayloadTooLarge {
                size: sample.len(),
                limit: self.max_upload_bytes,
            });
        }

        let (declared, file_name) = match &self.declared_media_type {
            Some(declared) => (
                declared.clone(),
                format!("recording.{}", declared.file_extension()),
            ),
            None => (sample.media_type().clone(), sample.file_name()),
        };

        Part::bytes(sample.into_payload())
            .file_name(file_name)
            .mime_str(declared.as_str())
            .map_err(|_| SubmissionError::InvalidMediaType(declared.to_string()))
    }

    async fn submit(&self, op: Operation, form: Form) -> SubmissionResult {
        let url = format!("{}{}", self.base_url, op.path());
        log::info!("submitting {op:?} to {url}");

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            log::info!("{op:?} accepted ({status})");
            response::success(status.as_u16(), &body)
        } else {
            // A response arrived, so an unreadable body still counts as a
            // rejection.
            let body = response.text().await.unwrap_or_default();
            let err = response::rejection(status.as_u16(), &body, op.fallback_reason());
            log::warn!("{op:?} rejected ({status}): {err}");
            Err(err)
        }
    }
}

#[async_trait]
impl SubmissionClient for HttpSubmissionClient {
    async fn enroll(&self, bundle: CredentialBundle) -> SubmissionResult {
        let CredentialBundle {
            credentials,
            sample,
        } = bundle;
        let audio = self.audio_part(sample)?;

        let mut form = Form::new();
        if let Some(name) = credentials.name {
            form = form.text("name", name);
        }
        let form = form
            .text("email", credentials.email)
            .text("password", credentials.password)
            .part("audio", audio);

        self.submit(Operation::Signup, form).await
    }

    async fn verify(&self, email: &str, password: &str, sample: AudioSample) -> SubmissionResult {
        let audio = self.audio_part(sample)?;

        let form = Form::new()
            .text("email", email.to_owned())
            .text("password", password.to_owned())
            .part("audio", audio);

        self.submit(Operation::Login, form).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
