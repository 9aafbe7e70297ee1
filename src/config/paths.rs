//! Cross-platform application paths using the `dirs` crate.
//!
//! Layout:
//!
//! Config dir (settings):
//!   Windows: %APPDATA%\voice-auth\
//!   macOS:   ~/Library/Application Support/voice-auth/
//!   Linux:   ~/.config/voice-auth/
//!
//! Cache dir (preview files):
//!   Windows: %LOCALAPPDATA%\voice-auth\previews\
//!   macOS:   ~/Library/Caches/voice-auth/previews/
//!   Linux:   ~/.cache/voice-auth/previews/

use std::path::PathBuf;

/// Holds all resolved application directory/file paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    /// Directory for `settings.toml`.
    pub config_dir: PathBuf,
    /// Full path to `settings.toml`.
    pub settings_file: PathBuf,
    /// Directory where preview locators place their playable files.
    pub preview_dir: PathBuf,
}

impl AppPaths {
    const APP_NAME: &'static str = "voice-auth";

    /// Resolves all paths using the `dirs` crate.
    ///
    /// Falls back to the current directory (config) or the system temp dir
    /// (previews) if the platform cannot provide a standard path.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);

        let preview_dir = dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(Self::APP_NAME)
            .join("previews");

        let settings_file = config_dir.join("settings.toml");

        Self {
            config_dir,
            settings_file,
            preview_dir,
        }
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
