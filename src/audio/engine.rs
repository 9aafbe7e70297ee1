//! The capture engine: microphone ownership and the recording state machine.
//!
//! ```text
//! Idle ──start()──▶ Recording ──stop()──▶ Stopped
//!   ▲                   │                    │
//!   │                   └──device fault──▶ Error
//!   └──────────── discard() from any state ◀─┘
//! ```
//!
//! `start()` is also accepted from `Stopped` and `Error`; it opens a brand-new
//! session.  Only one [`RecordingSession`] exists at a time, enforced by the
//! state machine through `&mut self` rather than by locking.
//!
//! # Flush before finalize
//!
//! `stop()` releases the device first.  Releasing drops every sender of the
//! session's event channel, so draining the receiver until it reports closed
//! observes every fragment the device emitted, including any produced by
//! the stop itself.  Only then are the fragments concatenated.

use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::sync::mpsc;

use super::device::{DeviceEvent, InputDevice, Microphone};
use super::preview::{PreviewLocator, PreviewStore};
use super::sample::{AudioSample, MediaType, SampleId};

/// Upper bound on how long `stop()` waits for a released device to close
/// its event channel.
const FLUSH_TIMEOUT: Duration = Duration::from_secs(2);

// ---------------------------------------------------------------------------
// CaptureError
// ---------------------------------------------------------------------------

/// Errors reported by [`CaptureEngine`].  `Display` is user-facing.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The host denied access or has no microphone.
    #[error("microphone unavailable: {0}")]
    DeviceUnavailable(String),

    /// `start()` was called while a recording is in progress.
    #[error("a recording is already in progress")]
    AlreadyRecording,

    /// `stop()` was called outside `Recording`.
    #[error("no recording is in progress")]
    NotRecording,

    /// The session ended without a single byte of audio.
    #[error("no audio was captured; please record again")]
    EmptyRecording,

    /// The device failed while recording.
    #[error("microphone failed during recording: {0}")]
    Device(String),

    /// A preview file could not be written.
    #[error("failed to create preview: {0}")]
    Preview(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Phase / status
// ---------------------------------------------------------------------------

/// Raw state-machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    Idle,
    Recording,
    Stopped,
    Error,
}

/// What a form should render for the capture widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureStatus {
    Idle,
    Recording,
    HasSample,
    Error(String),
}

// ---------------------------------------------------------------------------
// RecordingSession
// ---------------------------------------------------------------------------

/// One microphone acquisition, from `start()` to `stop()`/`discard()`.
///
/// Dropping a session releases its device, so every exit path (including
/// errors and early returns) gives the microphone back.
struct RecordingSession {
    device: Option<Box<dyn InputDevice>>,
    events: mpsc::UnboundedReceiver<DeviceEvent>,
    fragments: Vec<Vec<u8>>,
    buffered_bytes: usize,
    media_type: MediaType,
    started_at: Instant,
    fault: Option<String>,
}

impl RecordingSession {
    fn new(
        device: Box<dyn InputDevice>,
        events: mpsc::UnboundedReceiver<DeviceEvent>,
        media_type: MediaType,
    ) -> Self {
        Self {
            device: Some(device),
            events,
            fragments: Vec::new(),
            buffered_bytes: 0,
            media_type,
            started_at: Instant::now(),
            fault: None,
        }
    }

    fn absorb(&mut self, event: DeviceEvent) {
        match event {
            DeviceEvent::Data(bytes) if bytes.is_empty() => {}
            DeviceEvent::Data(bytes) => {
                self.buffered_bytes += bytes.len();
                self.fragments.push(bytes);
            }
            DeviceEvent::Fault(reason) => {
                // Keep the first fault; later ones are usually consequences.
                self.fault.get_or_insert(reason);
            }
        }
    }

    /// Pull in whatever has already arrived without waiting.
    fn drain_ready(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.absorb(event);
        }
    }

    fn release_device(&mut self) {
        if let Some(device) = self.device.take() {
            device.release();
        }
    }

    fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Release the device, wait for the channel to close and hand back the
    /// ordered fragments.
    async fn finish(mut self) -> Result<(Vec<Vec<u8>>, MediaType), String> {
        self.release_device();

        let flushed = tokio::time::timeout(FLUSH_TIMEOUT, async {
            while let Some(event) = self.events.recv().await {
                self.absorb(event);
            }
        })
        .await;

        if flushed.is_err() {
            return Err("device did not flush its final audio".into());
        }
        if let Some(fault) = self.fault.take() {
            return Err(fault);
        }

        Ok((
            std::mem::take(&mut self.fragments),
            self.media_type.clone(),
        ))
    }
}

impl Drop for RecordingSession {
    fn drop(&mut self) {
        self.release_device();
    }
}

// ---------------------------------------------------------------------------
// CaptureEngine
// ---------------------------------------------------------------------------

enum State {
    Idle,
    Recording(RecordingSession),
    Stopped,
    Error(String),
}

/// Owns one microphone and at most one active recording session.
///
/// # Example
///
/// ```rust,no_run
/// use voice_auth::audio::{CaptureEngine, CpalMicrophone};
///
/// # async fn example() -> Result<(), voice_auth::audio::CaptureError> {
/// let mut engine = CaptureEngine::new(CpalMicrophone::default());
/// engine.start().await?;
/// // ... user speaks ...
/// let sample = engine.stop().await?;
/// let preview = engine.preview(&sample)?;
/// println!("{} bytes, play at {}", sample.len(), preview.url());
/// # Ok(())
/// # }
/// ```
pub struct CaptureEngine<M: Microphone> {
    microphone: M,
    state: State,
    previews: PreviewStore,
    max_recording: Option<Duration>,
    finished: Option<AudioSample>,
}

impl<M: Microphone> CaptureEngine<M> {
    pub fn new(microphone: M) -> Self {
        Self {
            microphone,
            state: State::Idle,
            previews: PreviewStore::default(),
            max_recording: None,
            finished: None,
        }
    }

    /// Put preview files in `dir` instead of the system temp dir.
    pub fn with_preview_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.previews = PreviewStore::new(Some(dir.into()));
        self
    }

    /// Stop automatically once a recording has run for `limit`; see
    /// [`poll`](Self::poll).
    pub fn with_max_recording(mut self, limit: Duration) -> Self {
        self.max_recording = Some(limit);
        self
    }

    // -----------------------------------------------------------------------
    // Observers
    // -----------------------------------------------------------------------

    pub fn phase(&self) -> CapturePhase {
        match self.state {
            State::Idle => CapturePhase::Idle,
            State::Recording(_) => CapturePhase::Recording,
            State::Stopped => CapturePhase::Stopped,
            State::Error(_) => CapturePhase::Error,
        }
    }

    pub fn status(&self) -> CaptureStatus {
        match &self.state {
            State::Idle => CaptureStatus::Idle,
            State::Recording(_) => CaptureStatus::Recording,
            State::Stopped => CaptureStatus::HasSample,
            State::Error(reason) => CaptureStatus::Error(reason.clone()),
        }
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, State::Recording(_))
    }

    /// Bytes buffered by the active session as of the last `poll()`.
    pub fn buffered_bytes(&self) -> usize {
        match &self.state {
            State::Recording(session) => session.buffered_bytes,
            _ => 0,
        }
    }

    /// Elapsed time of the active session.
    pub fn recording_duration(&self) -> Option<Duration> {
        match &self.state {
            State::Recording(session) => Some(session.elapsed()),
            _ => None,
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Acquire the microphone and begin buffering fragments.
    ///
    /// # Errors
    ///
    /// [`CaptureError::AlreadyRecording`] when a session is active (the
    /// session is left untouched); [`CaptureError::DeviceUnavailable`] when
    /// the host refuses, in which case the engine enters `Error`.
    pub async fn start(&mut self) -> Result<(), CaptureError> {
        if self.is_recording() {
            log::warn!("capture: start() while already recording");
            return Err(CaptureError::AlreadyRecording);
        }
        self.finished = None;

        let mut device = match self.microphone.acquire().await {
            Ok(device) => device,
            Err(e) => {
                let reason = e.to_string();
                self.fail(reason.clone());
                return Err(CaptureError::DeviceUnavailable(reason));
            }
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let media_type = device.media_type();

        if let Err(e) = device.start(tx) {
            device.release();
            let reason = e.to_string();
            self.fail(reason.clone());
            return Err(CaptureError::DeviceUnavailable(reason));
        }

        log::info!("capture: recording started ({media_type})");
        self.state = State::Recording(RecordingSession::new(device, rx, media_type));
        Ok(())
    }

    /// Finish the active recording and return the sample.
    ///
    /// The device is released whether or not finalization succeeds.
    ///
    /// # Errors
    ///
    /// [`CaptureError::NotRecording`] outside `Recording` (state unchanged,
    /// no device touched); [`CaptureError::Device`] or
    /// [`CaptureError::EmptyRecording`] when the session cannot produce a
    /// sample, in which case the engine enters `Error`.
    pub async fn stop(&mut self) -> Result<AudioSample, CaptureError> {
        let session = match std::mem::replace(&mut self.state, State::Idle) {
            State::Recording(session) => session,
            other => {
                self.state = other;
                return Err(CaptureError::NotRecording);
            }
        };

        self.finalize(session).await
    }

    /// Release the device (if held), revoke every preview and return to
    /// `Idle`.  Safe to call in any state, any number of times.
    pub fn discard(&mut self) {
        let previous = std::mem::replace(&mut self.state, State::Idle);
        if matches!(previous, State::Recording(_)) {
            log::info!("capture: recording discarded");
        }
        drop(previous);

        self.finished = None;
        let revoked = self.previews.revoke_all();
        if revoked > 0 {
            log::debug!("capture: revoked {revoked} preview(s)");
        }
    }

    /// Absorb fragments that have already arrived and enforce the recording
    /// limit.
    ///
    /// A device fault moves the engine to `Error` immediately.  When the
    /// limit is reached the session is stopped and its sample is parked for
    /// [`take_finished`](Self::take_finished).  Outside `Recording` this is
    /// a no-op.
    pub async fn poll(&mut self) -> Result<(), CaptureError> {
        let over_limit = match &mut self.state {
            State::Recording(session) => {
                session.drain_ready();
                if let Some(reason) = session.fault.take() {
                    self.fail(reason.clone());
                    return Err(CaptureError::Device(reason));
                }
                self.max_recording
                    .is_some_and(|limit| session.elapsed() >= limit)
            }
            _ => return Ok(()),
        };

        if over_limit {
            log::info!("capture: recording limit reached, stopping");
            let sample = self.stop().await?;
            self.finished = Some(sample);
        }
        Ok(())
    }

    /// Take the sample produced by an automatic stop, if any.
    pub fn take_finished(&mut self) -> Option<AudioSample> {
        self.finished.take()
    }

    // -----------------------------------------------------------------------
    // Previews
    // -----------------------------------------------------------------------

    /// Create a playable locator for `sample`, replacing any earlier one.
    pub fn preview(&mut self, sample: &AudioSample) -> Result<PreviewLocator, CaptureError> {
        Ok(self.previews.create(sample)?)
    }

    /// Revoke the locator for `id`.  Returns `false` if none was live.
    pub fn revoke_preview(&mut self, id: SampleId) -> bool {
        self.previews.revoke(id)
    }

    pub fn live_previews(&self) -> usize {
        self.previews.live_count()
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn finalize(&mut self, session: RecordingSession) -> Result<AudioSample, CaptureError> {
        let (fragments, media_type) = match session.finish().await {
            Ok(parts) => parts,
            Err(reason) => {
                self.fail(reason.clone());
                return Err(CaptureError::Device(reason));
            }
        };

        let count = fragments.len();
        match AudioSample::from_fragments(fragments, media_type) {
            Some(sample) => {
                log::info!(
                    "capture: recording stopped ({} bytes in {count} fragments)",
                    sample.len()
                );
                self.state = State::Stopped;
                Ok(sample)
            }
            None => {
                self.fail(CaptureError::EmptyRecording.to_string());
                Err(CaptureError::EmptyRecording)
            }
        }
    }

    fn fail(&mut self, reason: String) {
        log::error!("capture error: {reason}");
        // Replacing a recording state drops its session and frees the device.
        self.state = State::Error(reason);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::ScriptedMicrophone;
    use tempfile::tempdir;

    fn engine(mic: ScriptedMicrophone) -> CaptureEngine<ScriptedMicrophone> {
        CaptureEngine::new(mic)
    }

    // ---- start / stop ------------------------------------------------------

    #[tokio::test]
    async fn three_fragments_make_one_sample() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus()).with_fragments(vec![
            vec![1; 1000],
            vec![2; 2000],
            vec![3; 500],
        ]);
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        let sample = engine.stop().await.unwrap();

        assert_eq!(sample.len(), 3500);
        assert_eq!(sample.media_type(), &MediaType::webm_opus());
        assert_eq!(engine.phase(), CapturePhase::Stopped);
        assert_eq!(engine.status(), CaptureStatus::HasSample);
    }

    #[tokio::test]
    async fn payload_is_ordered_concatenation() {
        let fragments: Vec<Vec<u8>> = (0u8..20).map(|i| vec![i; (i as usize % 7) + 1]).collect();
        let expected: Vec<u8> = fragments.concat();
        let mut engine = engine(
            ScriptedMicrophone::new(MediaType::l16(16_000, 1)).with_fragments(fragments),
        );

        engine.start().await.unwrap();
        let sample = engine.stop().await.unwrap();

        assert_eq!(sample.payload(), expected.as_slice());
    }

    #[tokio::test]
    async fn stop_observes_fragments_flushed_on_release() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus())
            .with_fragments(vec![vec![1; 10]])
            .with_tail(vec![9; 5]);
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        let sample = engine.stop().await.unwrap();

        assert_eq!(sample.len(), 15);
        assert_eq!(&sample.payload()[10..], &[9; 5]);
    }

    #[tokio::test]
    async fn stop_releases_device() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus()).with_fragments(vec![vec![0; 8]]);
        let counters = mic.counters();
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        assert_eq!(counters.held(), 1);

        engine.stop().await.unwrap();
        assert_eq!(counters.held(), 0);
    }

    #[tokio::test]
    async fn stop_on_idle_is_not_recording() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus());
        let counters = mic.counters();
        let mut engine = engine(mic);

        let err = engine.stop().await.unwrap_err();

        assert!(matches!(err, CaptureError::NotRecording));
        assert_eq!(counters.acquired(), 0);
        assert_eq!(engine.phase(), CapturePhase::Idle);
    }

    #[tokio::test]
    async fn stop_twice_is_not_recording() {
        let mut engine = engine(
            ScriptedMicrophone::new(MediaType::webm_opus()).with_fragments(vec![vec![1]]),
        );
        engine.start().await.unwrap();
        engine.stop().await.unwrap();

        assert!(matches!(
            engine.stop().await.unwrap_err(),
            CaptureError::NotRecording
        ));
        assert_eq!(engine.phase(), CapturePhase::Stopped);
    }

    #[tokio::test]
    async fn double_start_is_already_recording() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus()).with_fragments(vec![vec![1; 4]]);
        let counters = mic.counters();
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        let err = engine.start().await.unwrap_err();

        assert!(matches!(err, CaptureError::AlreadyRecording));
        assert_eq!(counters.acquired(), 1);
        assert_eq!(counters.held(), 1);
        assert!(engine.is_recording());

        // The first session is intact.
        assert_eq!(engine.stop().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn restart_after_stop_opens_new_session() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus()).with_fragments(vec![vec![5; 3]]);
        let counters = mic.counters();
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        let first = engine.stop().await.unwrap();
        engine.start().await.unwrap();
        let second = engine.stop().await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(second.len(), 3);
        assert_eq!(counters.acquired(), 2);
        assert_eq!(counters.held(), 0);
    }

    // ---- failures ----------------------------------------------------------

    #[tokio::test]
    async fn denied_microphone_is_device_unavailable() {
        let mut engine = engine(ScriptedMicrophone::denied("permission denied"));

        let err = engine.start().await.unwrap_err();

        assert!(matches!(err, CaptureError::DeviceUnavailable(ref r) if r.contains("permission denied")));
        assert_eq!(engine.phase(), CapturePhase::Error);
        assert!(matches!(engine.status(), CaptureStatus::Error(_)));
    }

    #[tokio::test]
    async fn empty_recording_is_an_error_and_releases() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus());
        let counters = mic.counters();
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        let err = engine.stop().await.unwrap_err();

        assert!(matches!(err, CaptureError::EmptyRecording));
        assert_eq!(engine.phase(), CapturePhase::Error);
        assert_eq!(counters.held(), 0);
    }

    #[tokio::test]
    async fn fault_surfaces_on_stop_and_releases() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus())
            .with_fragments(vec![vec![1; 10]])
            .with_fault("buffer overrun");
        let counters = mic.counters();
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        let err = engine.stop().await.unwrap_err();

        assert!(matches!(err, CaptureError::Device(ref r) if r == "buffer overrun"));
        assert_eq!(engine.phase(), CapturePhase::Error);
        assert_eq!(counters.held(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_gives_up_on_a_device_that_never_flushes() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus())
            .with_fragments(vec![vec![1; 16]])
            .holding_sink_after_release();
        let counters = mic.counters();
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        let err = engine.stop().await.unwrap_err();

        assert!(matches!(err, CaptureError::Device(ref r) if r.contains("flush")));
        assert_eq!(engine.phase(), CapturePhase::Error);
        assert_eq!(counters.held(), 0);
    }

    #[tokio::test]
    async fn fault_surfaces_on_poll() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus()).with_fault("device unplugged");
        let counters = mic.counters();
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        let err = engine.poll().await.unwrap_err();

        assert!(matches!(err, CaptureError::Device(_)));
        assert_eq!(
            engine.status(),
            CaptureStatus::Error("device unplugged".into())
        );
        assert_eq!(counters.held(), 0);
    }

    #[tokio::test]
    async fn start_recovers_from_error() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus()).with_fault("glitch");
        let counters = mic.counters();
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        assert!(engine.stop().await.is_err());
        assert_eq!(engine.phase(), CapturePhase::Error);

        engine.start().await.unwrap();
        assert_eq!(engine.phase(), CapturePhase::Recording);
        assert_eq!(counters.held(), 1);
    }

    // ---- discard -----------------------------------------------------------

    #[tokio::test]
    async fn discard_is_idempotent_and_releases() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus()).with_fragments(vec![vec![1; 4]]);
        let counters = mic.counters();
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        engine.discard();
        engine.discard();

        assert_eq!(counters.held(), 0);
        assert_eq!(engine.phase(), CapturePhase::Idle);
        assert!(matches!(
            engine.stop().await.unwrap_err(),
            CaptureError::NotRecording
        ));
    }

    #[test]
    fn discard_on_fresh_engine_is_noop() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus());
        let counters = mic.counters();
        let mut engine = engine(mic);

        engine.discard();

        assert_eq!(counters.acquired(), 0);
        assert_eq!(engine.phase(), CapturePhase::Idle);
    }

    #[tokio::test]
    async fn dropping_engine_releases_device() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus());
        let counters = mic.counters();
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        drop(engine);

        assert_eq!(counters.held(), 0);
    }

    // ---- poll / limit ------------------------------------------------------

    #[tokio::test]
    async fn poll_tracks_buffered_bytes() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus())
            .with_fragments(vec![vec![0; 100], vec![0; 28]]);
        let mut engine = engine(mic);

        engine.start().await.unwrap();
        assert_eq!(engine.buffered_bytes(), 0);

        engine.poll().await.unwrap();
        assert_eq!(engine.buffered_bytes(), 128);
        assert!(engine.recording_duration().is_some());
    }

    #[tokio::test]
    async fn poll_stops_at_limit() {
        let mic = ScriptedMicrophone::new(MediaType::webm_opus()).with_fragments(vec![vec![4; 64]]);
        let counters = mic.counters();
        let mut engine = engine(mic).with_max_recording(Duration::ZERO);

        engine.start().await.unwrap();
        engine.poll().await.unwrap();

        assert_eq!(engine.phase(), CapturePhase::Stopped);
        assert_eq!(counters.held(), 0);
        let sample = engine.take_finished().expect("auto-stopped sample");
        assert_eq!(sample.len(), 64);
        assert!(engine.take_finished().is_none());
    }

    #[tokio::test]
    async fn poll_outside_recording_is_noop() {
        let mut engine = engine(ScriptedMicrophone::new(MediaType::webm_opus()));
        engine.poll().await.unwrap();
        assert_eq!(engine.phase(), CapturePhase::Idle);
    }

    // ---- previews ----------------------------------------------------------

    #[tokio::test]
    async fn preview_is_single_per_sample_and_revoked_on_discard() {
        let dir = tempdir().unwrap();
        let mic = ScriptedMicrophone::new(MediaType::webm_opus()).with_fragments(vec![vec![1; 32]]);
        let mut engine = engine(mic).with_preview_dir(dir.path());

        engine.start().await.unwrap();
        let sample = engine.stop().await.unwrap();

        let first = engine.preview(&sample).unwrap();
        let second = engine.preview(&sample).unwrap();
        assert!(!first.path().exists());
        assert!(second.path().exists());
        assert_eq!(engine.live_previews(), 1);

        engine.discard();
        assert!(!second.path().exists());
        assert_eq!(engine.live_previews(), 0);
    }

    #[tokio::test]
    async fn revoke_preview_by_sample_id() {
        let dir = tempdir().unwrap();
        let mic = ScriptedMicrophone::new(MediaType::webm_opus()).with_fragments(vec![vec![1; 8]]);
        let mut engine = engine(mic).with_preview_dir(dir.path());

        engine.start().await.unwrap();
        let sample = engine.stop().await.unwrap();
        let locator = engine.preview(&sample).unwrap();

        assert!(engine.revoke_preview(sample.id()));
        assert!(!locator.path().exists());
        assert!(!engine.revoke_preview(sample.id()));
    }
}
