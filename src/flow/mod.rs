//! Form layer sitting between a front end and the capture/submission core.
//!
//! [`AuthForm`] is what a front end talks to.  It never submits a bundle
//! with an empty required field or without a finished recording.

pub mod runner;
pub mod state;

pub use runner::{AuthForm, FormError};
pub use state::{AuthMode, FormState, FormView};
