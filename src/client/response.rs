//! Interpreting backend responses.
//!
//! A success keeps the whole JSON body, so callers can read fields this
//! crate does not model.  Typed accessors cover the fields the verification
//! backend is known to return.

use serde::Deserialize;
use serde_json::Value;

use super::error::SubmissionError;

/// Outcome of one enrollment or verification exchange.
pub type SubmissionResult = Result<SubmissionSuccess, SubmissionError>;

/// The user record returned on a successful login.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A 2xx response and its decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionSuccess {
    pub status: u16,
    pub body: Value,
}

impl SubmissionSuccess {
    /// The `user` object, if present and well formed.
    pub fn user(&self) -> Option<UserRecord> {
        match self.body.get("user") {
            Some(user) if user.is_object() => serde_json::from_value(user.clone()).ok(),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Voice similarity score reported on login.
    pub fn similarity(&self) -> Option<f64> {
        self.body.get("similarity").and_then(Value::as_f64)
    }

    /// The phrase the backend heard on enrollment.
    pub fn transcription(&self) -> Option<&str> {
        self.body.get("transcription").and_then(Value::as_str)
    }
}

/// Build the failure for a non-success status.
///
/// The reason is the body's `error` string when there is a non-empty one,
/// otherwise `fallback`.
pub(crate) fn rejection(status: u16, body: &str, fallback: &str) -> SubmissionError {
    let reason = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| fallback.to_owned());

    SubmissionError::ServerRejected { status, reason }
}

/// Decode a success body; anything but JSON is an invalid response.
pub(crate) fn success(status: u16, body: &str) -> SubmissionResult {
    let body: Value =
        serde_json::from_str(body).map_err(|e| SubmissionError::InvalidResponse(e.to_string()))?;
    Ok(SubmissionSuccess { status, body })
}
