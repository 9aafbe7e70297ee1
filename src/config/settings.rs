//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across tasks.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// BackendConfig
// ---------------------------------------------------------------------------

/// Connection settings for the verification backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the backend; `/signup`, `/login` and `/health` are
    /// appended to it.
    pub base_url: String,
    /// Maximum seconds to wait for a response before the exchange is
    /// treated as a transport failure.
    pub timeout_secs: u64,
    /// Largest audio payload the client will upload, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".into(),
            timeout_secs: 30,
            max_upload_bytes: 16 * 1024 * 1024,
        }
    }
}

// ---------------------------------------------------------------------------
// CaptureConfig
// ---------------------------------------------------------------------------

/// Recording limit used when `max_recording_secs` is unusable.
pub const DEFAULT_MAX_RECORDING_SECS: f32 = 30.0;

/// Settings for microphone capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Input device name; `None` means the system default.
    pub device: Option<String>,
    /// Recording stops automatically after this many seconds.  Zero,
    /// negative, non-finite or overflowing values fall back to
    /// [`DEFAULT_MAX_RECORDING_SECS`].
    pub max_recording_secs: f32,
    /// Media type declared on the uploaded audio part.  `None` sends the
    /// codec negotiated with the device.
    pub declared_media_type: Option<String>,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            device: None,
            max_recording_secs: DEFAULT_MAX_RECORDING_SECS,
            declared_media_type: None,
        }
    }
}

impl CaptureConfig {
    /// The recording limit as a [`Duration`], never unlimited.
    pub fn max_recording(&self) -> Duration {
        let secs = self.max_recording_secs;
        let parsed = if secs > 0.0 {
            Duration::try_from_secs_f32(secs).ok()
        } else {
            None
        };
        parsed.unwrap_or_else(|| {
            log::warn!(
                "max_recording_secs = {secs} is not a usable limit; \
                 using {DEFAULT_MAX_RECORDING_SECS}s"
            );
            Duration::from_secs_f32(DEFAULT_MAX_RECORDING_SECS)
        })
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use voice_auth::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Verification backend settings.
    pub backend: BackendConfig,
    /// Microphone capture settings.
    pub capture: CaptureConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet so
    /// callers never need to special-case a missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
