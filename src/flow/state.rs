//! Form state and the read-only view a front end renders.
//!
//! [`FormState`] is the form's own phase.  It is coarser than the capture
//! engine's state machine: everything a screen needs to pick a widget.
//!
//! [`FormView`] is a snapshot built on demand by
//! [`AuthForm::view`](super::AuthForm::view).

use crate::client::UserRecord;

// ---------------------------------------------------------------------------
// AuthMode
// ---------------------------------------------------------------------------

/// Which backend operation the form submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Enrollment: name, email, password and a voice phrase.
    SignUp,
    /// Verification: email, password and a voice phrase.
    #[default]
    SignIn,
}

impl AuthMode {
    /// Whether the `name` field is part of this form.
    pub fn needs_name(&self) -> bool {
        matches!(self, AuthMode::SignUp)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::SignUp => "Sign up",
            AuthMode::SignIn => "Sign in",
        }
    }
}

// ---------------------------------------------------------------------------
// FormState
// ---------------------------------------------------------------------------

/// Phases of one sign-up or sign-in attempt.
///
/// ```text
/// Idle ──start_capture──▶ Recording ──stop_capture──▶ HasSample
///                                                        │
///                              ┌───────── submit ────────┘
///                              ▼
///                    Succeeded │ Failed
/// any ──reset_capture──▶ Idle
/// capture error ──▶ Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Recording,
    /// A finished sample is waiting to be submitted.
    HasSample,
    Succeeded,
    /// Capture or submission failed; see `FormView::error_message`.
    Failed,
}

impl FormState {
    /// Returns `true` while the microphone is held.
    ///
    /// ```
    /// use voice_auth::flow::FormState;
    ///
    /// assert!(FormState::Recording.is_busy());
    /// assert!(!FormState::HasSample.is_busy());
    /// assert!(!FormState::Failed.is_busy());
    /// ```
    pub fn is_busy(&self) -> bool {
        matches!(self, FormState::Recording)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormState::Idle => "Ready to record",
            FormState::Recording => "Recording",
            FormState::HasSample => "Recorded",
            FormState::Succeeded => "Done",
            FormState::Failed => "Error",
        }
    }
}

// ---------------------------------------------------------------------------
// FormView
// ---------------------------------------------------------------------------

/// Snapshot of everything the form renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormView {
    pub mode: AuthMode,
    pub state: FormState,

    /// Shown when `state == FormState::Failed`, and after a rejected
    /// precondition.
    pub error_message: Option<String>,

    /// `file://` URL of the preview for the current sample.
    pub preview_url: Option<String>,

    /// Bytes buffered by the active recording as of the last poll.
    pub buffered_bytes: usize,

    /// Elapsed time of the active recording.
    pub recording_secs: f32,

    /// Size of the finished sample waiting to be submitted.
    pub sample_bytes: Option<usize>,

    /// The user record returned by the last successful submission.
    pub user: Option<UserRecord>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
