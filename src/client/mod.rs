//! Submission client: credentials plus one voice sample to the backend.
//!
//! ```text
//! CredentialBundle ──enroll()──▶ POST /signup (multipart)
//! email, password, sample ──verify()──▶ POST /login (multipart)
//!     → 2xx JSON   → SubmissionSuccess
//!     → non-2xx    → SubmissionError::ServerRejected (server reason or generic)
//!     → no answer  → SubmissionError::Transport
//! ```
//!
//! Every call is exactly one exchange; nothing is retried here.

pub mod credentials;
pub mod error;
pub mod response;
pub mod submit;

pub use credentials::{CredentialBundle, Credentials};
pub use error::SubmissionError;
pub use response::{SubmissionResult, SubmissionSuccess, UserRecord};
pub use submit::{HttpSubmissionClient, SubmissionClient};
