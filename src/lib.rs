//! Voice-authenticated signup and login.
//!
//! The crate is split into two layers plus the glue that drives them:
//!
//! * [`audio`]: the capture engine. It owns the microphone, the recording
//!   state machine and the preview locators.
//! * [`client`]: the submission client, one multipart exchange per
//!   enrollment or verification against the backend.
//! * [`flow`]: form state that drives the capture engine and hands
//!   finished bundles to the client once its preconditions hold.
//! * [`config`]: TOML-backed settings.

pub mod audio;
pub mod client;
pub mod config;
pub mod flow;
