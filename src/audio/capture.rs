//! Microphone access via `cpal`.
//!
//! [`CpalMicrophone`] implements [`Microphone`] on top of the default cpal
//! host.  Each acquisition opens the configured input device and negotiates
//! its preferred stream configuration.  The resulting [`CpalInputDevice`]
//! emits a streaming WAV header as its first fragment, then downmixes every
//! callback buffer to mono 16-bit PCM.  The concatenated fragments form an
//! `audio/wav` file that any ffmpeg-based decoder can open.
//!
//! Releasing the device drops the `cpal::Stream`, which drops both callbacks
//! and with them every clone of the sink.

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SizedSample};

use crate::config::CaptureConfig;

use super::device::{DeviceError, DeviceEvent, EventSink, InputDevice, Microphone};
use super::pcm::{encode_pcm16, stereo_to_mono, wav_stream_header};
use super::sample::MediaType;

// ---------------------------------------------------------------------------
// CpalMicrophone
// ---------------------------------------------------------------------------

/// Grants cpal input devices, by name or the host default.
#[derive(Debug, Clone, Default)]
pub struct CpalMicrophone {
    device_name: Option<String>,
}

impl CpalMicrophone {
    /// `None` selects the system default input device.
    pub fn new(device_name: Option<String>) -> Self {
        Self { device_name }
    }

    pub fn from_config(config: &CaptureConfig) -> Self {
        Self::new(config.device.clone())
    }

    fn find_device(&self) -> Result<cpal::Device, DeviceError> {
        let host = cpal::default_host();

        match &self.device_name {
            None => host.default_input_device().ok_or(DeviceError::NoDevice),
            Some(wanted) => host
                .input_devices()
                .map_err(|e| DeviceError::Backend(e.to_string()))?
                .find(|d| d.name().map(|n| &n == wanted).unwrap_or(false))
                .ok_or(DeviceError::NoDevice),
        }
    }
}

#[async_trait(?Send)]
impl Microphone for CpalMicrophone {
    async fn acquire(&self) -> Result<Box<dyn InputDevice>, DeviceError> {
        let device = self.find_device()?;

        // Hosts that gate microphone access report it here.
        let supported = device
            .default_input_config()
            .map_err(|e| DeviceError::Denied(e.to_string()))?;

        let name = device.name().unwrap_or_else(|_| "unknown".into());
        let sample_format = supported.sample_format();
        let channels = supported.channels();
        let sample_rate = supported.sample_rate().0;
        let config: cpal::StreamConfig = supported.into();

        log::info!(
            "microphone acquired: {name} ({sample_rate} Hz, {channels} ch, {sample_format:?})"
        );

        Ok(Box::new(CpalInputDevice {
            device,
            config,
            sample_format,
            sample_rate,
            channels,
            stream: None,
        }))
    }
}

// ---------------------------------------------------------------------------
// CpalInputDevice
// ---------------------------------------------------------------------------

/// An opened cpal input device.  The stream exists between `start` and
/// `release`.
pub struct CpalInputDevice {
    device: cpal::Device,
    config: cpal::StreamConfig,
    sample_format: cpal::SampleFormat,
    sample_rate: u32,
    channels: u16,
    stream: Option<cpal::Stream>,
}

impl CpalInputDevice {
    fn build_stream<T>(&self, sink: EventSink) -> Result<cpal::Stream, cpal::BuildStreamError>
    where
        T: SizedSample,
        f32: FromSample<T>,
    {
        let channels = self.channels;
        let data_sink = sink.clone();

        self.device.build_input_stream(
            &self.config,
            move |data: &[T], _: &cpal::InputCallbackInfo| {
                if let Some(fragment) = encode_frames(data, channels) {
                    // The receiver is gone only after the session ended.
                    let _ = data_sink.send(DeviceEvent::Data(fragment));
                }
            },
            move |err: cpal::StreamError| {
                log::error!("cpal stream error: {err}");
                let _ = sink.send(DeviceEvent::Fault(err.to_string()));
            },
            None,
        )
    }
}

impl InputDevice for CpalInputDevice {
    fn media_type(&self) -> MediaType {
        MediaType::wav()
    }

    fn start(&mut self, sink: EventSink) -> Result<(), DeviceError> {
        // The header must precede every sample fragment.
        let header = wav_stream_header(&stream_spec(self.sample_rate));
        sink.send(DeviceEvent::Data(header))
            .map_err(|_| DeviceError::Backend("event sink closed before start".into()))?;

        let stream = match self.sample_format {
            cpal::SampleFormat::F32 => self.build_stream::<f32>(sink),
            cpal::SampleFormat::I16 => self.build_stream::<i16>(sink),
            cpal::SampleFormat::U16 => self.build_stream::<u16>(sink),
            other => {
                return Err(DeviceError::Backend(format!(
                    "unsupported sample format {other:?}"
                )))
            }
        }
        .map_err(|e| DeviceError::Backend(e.to_string()))?;

        stream
            .play()
            .map_err(|e| DeviceError::Backend(e.to_string()))?;

        self.stream = Some(stream);
        Ok(())
    }

    fn release(self: Box<Self>) {
        if let Some(stream) = self.stream {
            if let Err(e) = stream.pause() {
                log::debug!("pausing cpal stream on release failed: {e}");
            }
            drop(stream);
        }
        log::debug!("microphone released");
    }
}

// ---------------------------------------------------------------------------
// Framing
// ---------------------------------------------------------------------------

/// WAV layout of every cpal session: mono, 16-bit integer PCM.
pub(super) fn stream_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Turn one interleaved callback buffer into a PCM fragment.
///
/// Returns `None` when the buffer holds no complete frame.
pub(super) fn encode_frames<T>(data: &[T], channels: u16) -> Option<Vec<u8>>
where
    T: Sample,
    f32: FromSample<T>,
{
    let samples: Vec<f32> = data.iter().map(|&s| s.to_sample::<f32>()).collect();
    let mono = stereo_to_mono(&samples, channels);
    if mono.is_empty() {
        return None;
    }
    Some(encode_pcm16(&mono))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
