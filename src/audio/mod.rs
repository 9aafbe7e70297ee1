//! Capture engine: microphone acquisition → fragments → finished sample.
//!
//! # Pipeline
//!
//! ```text
//! Microphone::acquire → InputDevice::start(sink)
//!     → DeviceEvent::Data (mpsc, arrival order) → RecordingSession
//!     → stop(): release device, drain to close → AudioSample
//!     → preview(): PreviewLocator (revocable temp file)
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use voice_auth::audio::{CaptureEngine, CpalMicrophone};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut engine = CaptureEngine::new(CpalMicrophone::default());
//!     engine.start().await.unwrap();
//!     tokio::time::sleep(std::time::Duration::from_secs(3)).await;
//!     let sample = engine.stop().await.unwrap();
//!     println!("captured {} bytes of {}", sample.len(), sample.media_type());
//! }
//! ```

pub mod capture;
pub mod device;
pub mod engine;
pub mod pcm;
pub mod preview;
pub mod sample;

#[cfg(test)]
pub mod testing;

pub use capture::CpalMicrophone;
pub use device::{DeviceError, DeviceEvent, EventSink, InputDevice, Microphone};
pub use engine::{CaptureEngine, CaptureError, CapturePhase, CaptureStatus};
pub use pcm::{decode_l16, encode_pcm16, stereo_to_mono, wav_stream_header, WAV_HEADER_LEN};
pub use preview::{PreviewLocator, PreviewStore};
pub use sample::{AudioSample, MediaType, SampleId};
