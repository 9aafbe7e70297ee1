//! Configuration module for voice-auth.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the backend and
//! the capture engine, `AppPaths` for cross-platform directories, and TOML
//! persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, BackendConfig, CaptureConfig};
