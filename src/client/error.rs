//! Submission failures.

use thiserror::Error;

/// Why a submission did not succeed.  `Display` is what the user sees.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// No response at all: connection refused, DNS failure, timeout.
    /// Safe for the caller to retry.
    #[error("could not reach the server: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.  `reason` is the
    /// server-supplied message, shown verbatim.
    #[error("{reason}")]
    ServerRejected { status: u16, reason: String },

    /// A success status whose body was not the expected JSON.
    #[error("unexpected response from server: {0}")]
    InvalidResponse(String),

    /// The sample exceeds the configured upload limit; nothing was sent.
    #[error("recording is too large to upload ({size} bytes, limit {limit})")]
    PayloadTooLarge { size: usize, limit: usize },

    /// The declared media type is not a valid MIME string; nothing was sent.
    #[error("invalid audio media type: {0}")]
    InvalidMediaType(String),
}

impl SubmissionError {
    /// Transport failures are the only ones a retry can fix.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmissionError::Transport(_))
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SubmissionError::Transport("request timed out".into())
        } else {
            SubmissionError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_displays_reason_verbatim() {
        let err = SubmissionError::ServerRejected {
            status: 401,
            reason: "voice mismatch".into(),
        };
        assert_eq!(err.to_string(), "voice mismatch");
    }

    #[test]
    fn only_transport_is_retryable() {
        assert!(SubmissionError::Transport("refused".into()).is_retryable());
        assert!(!SubmissionError::ServerRejected {
            status: 500,
            reason: "boom".into()
        }
        .is_retryable());
        assert!(!SubmissionError::InvalidResponse("html".into()).is_retryable());
        assert!(!SubmissionError::PayloadTooLarge { size: 2, limit: 1 }.is_retryable());
    }
}
