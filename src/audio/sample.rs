//! Finished recordings and their media-type tags.
//!
//! An [`AudioSample`] is only ever built by the capture engine when a
//! recording is stopped.  It is deliberately not `Clone`: the sample moves
//! from the engine to the caller and from the caller to the submission
//! client, so exactly one owner holds the bytes at any time.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// ---------------------------------------------------------------------------
// MediaType
// ---------------------------------------------------------------------------

/// A MIME type describing the codec of an audio payload.
///
/// The raw string is kept as negotiated (parameters included) so it can be
/// forwarded to the backend untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaType(String);

impl MediaType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Linear 16-bit PCM, big-endian (RFC 2586).
    pub fn l16(sample_rate: u32, channels: u16) -> Self {
        Self(format!("audio/L16; rate={sample_rate}; channels={channels}"))
    }

    /// A RIFF/WAV container, as produced by the cpal device.
    pub fn wav() -> Self {
        Self("audio/wav".into())
    }

    /// The WebM/Opus tag browsers negotiate for `MediaRecorder`.
    pub fn webm_opus() -> Self {
        Self("audio/webm;codecs=opus".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `type/subtype` without parameters, lower-cased.
    ///
    /// ```
    /// use voice_auth::audio::MediaType;
    ///
    /// assert_eq!(MediaType::l16(48_000, 1).essence(), "audio/l16");
    /// assert_eq!(MediaType::webm_opus().essence(), "audio/webm");
    /// ```
    pub fn essence(&self) -> String {
        self.0
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }

    /// Value of a `key=value` parameter, matched case-insensitively.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.0.split(';').skip(1).find_map(|p| {
            let (key, value) = p.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().trim_matches('"'))
        })
    }

    /// File extension used for uploads and preview files.
    pub fn file_extension(&self) -> &'static str {
        match self.essence().as_str() {
            "audio/webm" => "webm",
            "audio/ogg" => "ogg",
            "audio/wav" | "audio/wave" | "audio/x-wav" => "wav",
            "audio/mpeg" => "mp3",
            "audio/mp4" => "m4a",
            "audio/flac" => "flac",
            "audio/l16" => "pcm",
            _ => "bin",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// SampleId
// ---------------------------------------------------------------------------

/// Process-unique identity of an [`AudioSample`], used to key previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleId(u64);

impl SampleId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sample-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// AudioSample
// ---------------------------------------------------------------------------

/// An immutable, finalized recording.
#[derive(Debug)]
pub struct AudioSample {
    id: SampleId,
    payload: Vec<u8>,
    media_type: MediaType,
}

impl AudioSample {
    /// Concatenate `fragments` in order into one sample.
    ///
    /// Returns `None` when the fragments hold no bytes at all.
    pub(crate) fn from_fragments(fragments: Vec<Vec<u8>>, media_type: MediaType) -> Option<Self> {
        let total: usize = fragments.iter().map(Vec::len).sum();
        if total == 0 {
            return None;
        }

        let mut payload = Vec::with_capacity(total);
        for fragment in fragments {
            payload.extend_from_slice(&fragment);
        }

        Some(Self {
            id: SampleId::next(),
            payload,
            media_type,
        })
    }

    pub fn id(&self) -> SampleId {
        self.id
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// Payload length in bytes; always non-zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// `recording.<ext>` with the extension derived from the media type.
    pub fn file_name(&self) -> String {
        format!("recording.{}", self.media_type.file_extension())
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
