//! Scripted microphone used by the engine and form tests.
//!
//! Each acquisition yields a device that replays a fixed script: its
//! fragments (and optional fault) are emitted on `start`, and its tail
//! fragments are emitted while it is being released, the way a browser
//! recorder delivers its last buffer on stop.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::capture::{encode_frames, stream_spec};
use super::device::{DeviceError, DeviceEvent, EventSink, InputDevice, Microphone};
use super::pcm::wav_stream_header;
use super::sample::MediaType;

/// Shared acquisition counters, readable after the microphone has been
/// moved into an engine.
#[derive(Debug, Clone, Default)]
pub struct DeviceCounters {
    acquired: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
}

impl DeviceCounters {
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Devices acquired and not yet released.
    pub fn held(&self) -> usize {
        self.acquired().saturating_sub(self.released())
    }
}

#[derive(Debug, Clone)]
pub struct ScriptedMicrophone {
    media_type: MediaType,
    fragments: Vec<Vec<u8>>,
    tail: Vec<Vec<u8>>,
    fault: Option<String>,
    denied: Option<String>,
    hold_sink: bool,
    held_sinks: Arc<Mutex<Vec<EventSink>>>,
    counters: DeviceCounters,
}

impl ScriptedMicrophone {
    pub fn new(media_type: MediaType) -> Self {
        Self {
            media_type,
            fragments: Vec::new(),
            tail: Vec::new(),
            fault: None,
            denied: None,
            hold_sink: false,
            held_sinks: Arc::default(),
            counters: DeviceCounters::default(),
        }
    }

    /// A microphone that frames interleaved `i16` buffers exactly as
    /// `CpalInputDevice` does: a streaming WAV header, then one mono PCM
    /// fragment per buffer.
    pub fn cpal_shaped(sample_rate: u32, channels: u16, buffers: Vec<Vec<i16>>) -> Self {
        let mut fragments = vec![wav_stream_header(&stream_spec(sample_rate))];
        fragments.extend(buffers.iter().filter_map(|b| encode_frames(b, channels)));
        Self::new(MediaType::wav()).with_fragments(fragments)
    }

    /// A microphone whose every acquisition is refused.
    pub fn denied(reason: &str) -> Self {
        let mut mic = Self::new(MediaType::webm_opus());
        mic.denied = Some(reason.into());
        mic
    }

    pub fn with_fragments(mut self, fragments: Vec<Vec<u8>>) -> Self {
        self.fragments = fragments;
        self
    }

    /// A fragment emitted during release.
    pub fn with_tail(mut self, fragment: Vec<u8>) -> Self {
        self.tail.push(fragment);
        self
    }

    /// A fault emitted on start, after the scripted fragments.
    pub fn with_fault(mut self, reason: &str) -> Self {
        self.fault = Some(reason.into());
        self
    }

    /// Keep a clone of the sink alive after release, so the event channel
    /// never closes.
    pub fn holding_sink_after_release(mut self) -> Self {
        self.hold_sink = true;
        self
    }

    pub fn counters(&self) -> DeviceCounters {
        self.counters.clone()
    }
}

#[async_trait(?Send)]
impl Microphone for ScriptedMicrophone {
    async fn acquire(&self) -> Result<Box<dyn InputDevice>, DeviceError> {
        if let Some(reason) = &self.denied {
            return Err(DeviceError::Denied(reason.clone()));
        }
        self.counters.acquired.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(ScriptedDevice {
            script: self.clone(),
            sink: None,
        }))
    }
}

struct ScriptedDevice {
    script: ScriptedMicrophone,
    sink: Option<EventSink>,
}

impl InputDevice for ScriptedDevice {
    fn media_type(&self) -> MediaType {
        self.script.media_type.clone()
    }

    fn start(&mut self, sink: EventSink) -> Result<(), DeviceError> {
        for fragment in &self.script.fragments {
            let _ = sink.send(DeviceEvent::Data(fragment.clone()));
        }
        if let Some(reason) = &self.script.fault {
            let _ = sink.send(DeviceEvent::Fault(reason.clone()));
        }
        self.sink = Some(sink);
        Ok(())
    }

    fn release(mut self: Box<Self>) {
        if let Some(sink) = self.sink.take() {
            for fragment in &self.script.tail {
                let _ = sink.send(DeviceEvent::Data(fragment.clone()));
            }
            if self.script.hold_sink {
                if let Ok(mut held) = self.script.held_sinks.lock() {
                    held.push(sink);
                }
            }
        }
        self.script.counters.released.fetch_add(1, Ordering::SeqCst);
    }
}
