//! Identity fields and the bundle handed to the submission client.

use std::fmt;

use crate::audio::AudioSample;

/// Identity fields typed into the form.
///
/// `Debug` redacts the password.
#[derive(Clone, Default)]
pub struct Credentials {
    /// Full name; only sent on enrollment.
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: None,
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Credentials plus one recording.  Consumed by a single submission.
#[derive(Debug)]
pub struct CredentialBundle {
    pub credentials: Credentials,
    pub sample: AudioSample,
}

impl CredentialBundle {
    pub fn new(credentials: Credentials, sample: AudioSample) -> Self {
        Self {
            credentials,
            sample,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("a@example.org", "hunter2").with_name("Ada");
        let shown = format!("{creds:?}");
        assert!(shown.contains("a@example.org"));
        assert!(shown.contains("Ada"));
        assert!(!shown.contains("hunter2"));
    }
}
