//! Form driver: capture engine → sample → credential bundle → client.
//!
//! [`AuthForm`] owns a [`CaptureEngine`] and the typed identity fields, and
//! holds at most one finished sample (plus its preview).  Submissions check
//! every precondition before the client is touched:
//!
//! ```text
//! submit_signup / submit_login
//!   ├─ recording in progress   → FormError::StillRecording
//!   ├─ empty name/email/pass   → FormError::MissingField
//!   ├─ no sample               → FormError::MissingSample
//!   └─ take sample, revoke its preview
//!        └─▶ client.enroll / client.verify   (exactly one call)
//!              ├─ Ok  → Succeeded, user record kept for the view
//!              └─ Err → Failed, reason shown verbatim
//! ```
//!
//! The sample is consumed by the submission whatever its outcome; a retry
//! needs a fresh recording.

use std::sync::Arc;

use thiserror::Error;

use crate::audio::{AudioSample, CaptureEngine, CaptureError, Microphone, PreviewLocator};
use crate::client::{
    CredentialBundle, Credentials, SubmissionClient, SubmissionError, SubmissionSuccess,
    UserRecord,
};

use super::state::{AuthMode, FormState, FormView};

// ---------------------------------------------------------------------------
// FormError
// ---------------------------------------------------------------------------

/// Why a form action did not go through.  `Display` is user-facing.
#[derive(Debug, Error)]
pub enum FormError {
    /// A required text field is empty.
    #[error("please enter your {0}")]
    MissingField(&'static str),

    /// No finished recording is available.
    #[error("please record your voice phrase")]
    MissingSample,

    /// A recording is still in progress.
    #[error("stop the recording before submitting")]
    StillRecording,

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

// ---------------------------------------------------------------------------
// AuthForm
// ---------------------------------------------------------------------------

/// A sign-up or sign-in form with a voice phrase.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use voice_auth::audio::{CaptureEngine, CpalMicrophone};
/// use voice_auth::client::HttpSubmissionClient;
/// use voice_auth::config::AppConfig;
/// use voice_auth::flow::{AuthForm, AuthMode};
///
/// # async fn example() -> Result<(), voice_auth::flow::FormError> {
/// let config = AppConfig::default();
/// let client = HttpSubmissionClient::from_config(&config.backend, &config.capture);
/// let engine = CaptureEngine::new(CpalMicrophone::from_config(&config.capture));
///
/// let mut form = AuthForm::new(AuthMode::SignIn, engine, Arc::new(client));
/// form.set_email("ada@example.org");
/// form.set_password("s3cret");
/// form.start_capture().await?;
/// // ... user speaks ...
/// form.stop_capture().await?;
/// let ok = form.submit_login().await?;
/// println!("{:?}", ok.message());
/// # Ok(())
/// # }
/// ```
pub struct AuthForm<M: Microphone> {
    mode: AuthMode,
    engine: CaptureEngine<M>,
    client: Arc<dyn SubmissionClient>,
    name: String,
    email: String,
    password: String,
    sample: Option<AudioSample>,
    preview: Option<PreviewLocator>,
    state: FormState,
    error_message: Option<String>,
    user: Option<UserRecord>,
}

impl<M: Microphone> AuthForm<M> {
    pub fn new(mode: AuthMode, engine: CaptureEngine<M>, client: Arc<dyn SubmissionClient>) -> Self {
        Self {
            mode,
            engine,
            client,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            sample: None,
            preview: None,
            state: FormState::Idle,
            error_message: None,
            user: None,
        }
    }

    // -----------------------------------------------------------------------
    // Fields
    // -----------------------------------------------------------------------

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switch between sign-up and sign-in.  Typed fields and any recorded
    /// sample are kept.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.error_message = None;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn has_sample(&self) -> bool {
        self.sample.is_some()
    }

    pub fn preview(&self) -> Option<&PreviewLocator> {
        self.preview.as_ref()
    }

    pub fn view(&self) -> FormView {
        FormView {
            mode: self.mode,
            state: self.state,
            error_message: self.error_message.clone(),
            preview_url: self.preview.as_ref().map(|p| p.url().to_owned()),
            buffered_bytes: self.engine.buffered_bytes(),
            recording_secs: self
                .engine
                .recording_duration()
                .map(|d| d.as_secs_f32())
                .unwrap_or(0.0),
            sample_bytes: self.sample.as_ref().map(AudioSample::len),
            user: self.user.clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Capture
    // -----------------------------------------------------------------------

    /// Begin a new recording.  Any earlier sample and its preview are
    /// dropped.
    pub async fn start_capture(&mut self) -> Result<(), FormError> {
        if self.engine.is_recording() {
            return Err(CaptureError::AlreadyRecording.into());
        }
        self.drop_sample();
        self.error_message = None;

        match self.engine.start().await {
            Ok(()) => {
                self.state = FormState::Recording;
                Ok(())
            }
            Err(e) => Err(self.capture_failed(e)),
        }
    }

    /// Finish the recording, keep the sample and create its preview.
    pub async fn stop_capture(&mut self) -> Result<(), FormError> {
        match self.engine.stop().await {
            Ok(sample) => self.adopt(sample),
            // Not recording: nothing changed, so leave the form as it is.
            Err(CaptureError::NotRecording) => Err(CaptureError::NotRecording.into()),
            Err(e) => Err(self.capture_failed(e)),
        }
    }

    /// Keep buffered counts current and pick up an automatic stop.
    ///
    /// Returns `true` when the recording limit ended the recording and a
    /// sample is now available.
    pub async fn poll_capture(&mut self) -> Result<bool, FormError> {
        if let Err(e) = self.engine.poll().await {
            return Err(self.capture_failed(e));
        }

        match self.engine.take_finished() {
            Some(sample) => self.adopt(sample).map(|()| true),
            None => Ok(false),
        }
    }

    /// Throw away the recording (in progress or finished) and start over.
    pub fn reset_capture(&mut self) {
        self.engine.discard();
        self.sample = None;
        self.preview = None;
        self.error_message = None;
        self.state = FormState::Idle;
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Enroll with name, email, password and the recorded phrase.
    pub async fn submit_signup(&mut self) -> Result<SubmissionSuccess, FormError> {
        self.submit(AuthMode::SignUp).await
    }

    /// Authenticate with email, password and the recorded phrase.
    pub async fn submit_login(&mut self) -> Result<SubmissionSuccess, FormError> {
        self.submit(AuthMode::SignIn).await
    }

    async fn submit(&mut self, mode: AuthMode) -> Result<SubmissionSuccess, FormError> {
        let bundle = match self.take_bundle(mode) {
            Ok(bundle) => bundle,
            Err(e) => {
                self.error_message = Some(e.to_string());
                return Err(e);
            }
        };

        log::info!(
            "form: submitting {} ({} bytes of {})",
            mode.label(),
            bundle.sample.len(),
            bundle.sample.media_type()
        );

        let result = match mode {
            AuthMode::SignUp => self.client.enroll(bundle).await,
            AuthMode::SignIn => {
                let CredentialBundle {
                    credentials,
                    sample,
                } = bundle;
                self.client
                    .verify(&credentials.email, &credentials.password, sample)
                    .await
            }
        };

        match result {
            Ok(ok) => {
                self.state = FormState::Succeeded;
                self.error_message = None;
                self.user = ok.user();
                Ok(ok)
            }
            Err(e) => {
                log::warn!("form: {} failed: {e}", mode.label());
                self.state = FormState::Failed;
                self.error_message = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Check every precondition, then move the sample out of the form.
    ///
    /// Nothing is taken unless every check passes.
    fn take_bundle(&mut self, mode: AuthMode) -> Result<CredentialBundle, FormError> {
        if self.engine.is_recording() {
            return Err(FormError::StillRecording);
        }
        if mode.needs_name() && self.name.trim().is_empty() {
            return Err(FormError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(FormError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(FormError::MissingField("password"));
        }
        let sample = self.sample.take().ok_or(FormError::MissingSample)?;

        if let Some(preview) = self.preview.take() {
            self.engine.revoke_preview(preview.sample_id());
        }

        let mut credentials = Credentials::new(self.email.trim(), self.password.clone());
        if mode.needs_name() {
            credentials = credentials.with_name(self.name.trim());
        }
        Ok(CredentialBundle::new(credentials, sample))
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn adopt(&mut self, sample: AudioSample) -> Result<(), FormError> {
        self.state = FormState::HasSample;
        let preview = self.engine.preview(&sample);
        self.sample = Some(sample);

        match preview {
            Ok(locator) => {
                log::debug!("form: preview at {}", locator.url());
                self.preview = Some(locator);
                Ok(())
            }
            // The sample is still usable without a preview.
            Err(e) => {
                self.error_message = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    fn drop_sample(&mut self) {
        if let Some(preview) = self.preview.take() {
            self.engine.revoke_preview(preview.sample_id());
        }
        self.sample = None;
    }

    fn capture_failed(&mut self, e: CaptureError) -> FormError {
        self.state = FormState::Failed;
        self.error_message = Some(e.to_string());
        e.into()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
