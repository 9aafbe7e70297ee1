//! The host seam between the capture engine and a microphone.
//!
//! A [`Microphone`] hands out [`InputDevice`]s.  A device pushes
//! [`DeviceEvent`]s into the sink it is started with, and drops every clone
//! of that sink when it is released.  The engine relies on that last point:
//! once a device is released, the event channel closes after the final
//! fragment, which is how `stop()` knows the flush is complete.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::sample::MediaType;

/// Something the device reports while recording.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceEvent {
    /// An encoded audio fragment, in arrival order.
    Data(Vec<u8>),
    /// The device failed; no further data should be trusted.
    Fault(String),
}

/// Sending half handed to a device on start.
pub type EventSink = mpsc::UnboundedSender<DeviceEvent>;

/// Errors raised while acquiring or starting a device.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("no input device found")]
    NoDevice,

    #[error("microphone access denied: {0}")]
    Denied(String),

    #[error("audio backend error: {0}")]
    Backend(String),
}

/// Grants access to input devices.
///
/// Acquisition may suspend (for example on a permission prompt).  Devices are
/// used from a single task, so neither the future nor the device needs to be
/// `Send`.
#[async_trait(?Send)]
pub trait Microphone {
    async fn acquire(&self) -> Result<Box<dyn InputDevice>, DeviceError>;
}

/// An exclusively held input device.
pub trait InputDevice {
    /// Codec of the fragments this device produces.
    fn media_type(&self) -> MediaType;

    /// Begin delivering events into `sink`.
    fn start(&mut self, sink: EventSink) -> Result<(), DeviceError>;

    /// Stop the hardware and drop every sender held by the device.
    fn release(self: Box<Self>);
}
