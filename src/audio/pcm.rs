//! PCM channel mixing and the WAV stream framing used by cpal devices.
//!
//! The cpal callback delivers interleaved frames at whatever layout the
//! device prefers.  A device session becomes a self-describing WAV stream:
//!
//! 1. [`wav_stream_header`]: sent once, as the first fragment.
//! 2. [`stereo_to_mono`]: downmix each callback buffer to mono.
//! 3. [`encode_pcm16`]: quantise to 16-bit little-endian PCM, the WAV
//!    sample layout.
//!
//! Concatenating the fragments in arrival order yields a playable file.
//!
//! [`decode_l16`] reads big-endian `audio/L16` payloads so previews of such
//! samples can be wrapped in a WAV container.

// ---------------------------------------------------------------------------
// stereo_to_mono
// ---------------------------------------------------------------------------

/// Mix interleaved multi-channel audio down to mono by averaging all channels.
///
/// The output length is `samples.len() / channels`.
///
/// * If `channels == 1` the input slice is returned as an owned `Vec`.
/// * If `channels == 0` an empty vector is returned.
///
/// # Example
///
/// ```rust
/// use voice_auth::audio::stereo_to_mono;
///
/// let stereo = vec![0.5_f32, -0.5, 0.2, -0.2]; // L R L R
/// let mono = stereo_to_mono(&stereo, 2);
/// assert_eq!(mono.len(), 2);
/// assert!((mono[0] - 0.0).abs() < 1e-6);
/// ```
pub fn stereo_to_mono(samples: &[f32], channels: u16) -> Vec<f32> {
    match channels {
        0 => Vec::new(),
        1 => samples.to_vec(),
        n => {
            let n = n as usize;
            samples
                .chunks_exact(n)
                .map(|frame| frame.iter().sum::<f32>() / n as f32)
                .collect()
        }
    }
}

// ---------------------------------------------------------------------------
// WAV stream framing
// ---------------------------------------------------------------------------

/// Length of the header produced by [`wav_stream_header`].
pub const WAV_HEADER_LEN: usize = 44;

/// A canonical 44-byte PCM WAV header for a stream of unknown length.
///
/// Both the RIFF size and the `data` size are `0xFFFFFFFF`, which decoders
/// read as "until end of input".  Only integer PCM is described; the
/// `sample_format` of `spec` is ignored.
///
/// ```rust
/// use voice_auth::audio::wav_stream_header;
///
/// let spec = hound::WavSpec {
///     channels: 1,
///     sample_rate: 48_000,
///     bits_per_sample: 16,
///     sample_format: hound::SampleFormat::Int,
/// };
/// let header = wav_stream_header(&spec);
/// assert_eq!(&header[..4], b"RIFF");
/// assert_eq!(&header[8..12], b"WAVE");
/// ```
pub fn wav_stream_header(spec: &hound::WavSpec) -> Vec<u8> {
    let block_align = spec.channels * spec.bits_per_sample / 8;
    let byte_rate = spec.sample_rate * u32::from(block_align);

    let mut out = Vec::with_capacity(WAV_HEADER_LEN);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&u32::MAX.to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&spec.channels.to_le_bytes());
    out.extend_from_slice(&spec.sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&spec.bits_per_sample.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&u32::MAX.to_le_bytes());
    out
}

/// Quantise `samples` in `[-1.0, 1.0]` to little-endian `i16` bytes.
///
/// Out-of-range input is clamped; two bytes are produced per sample.
///
/// ```rust
/// use voice_auth::audio::encode_pcm16;
///
/// assert_eq!(encode_pcm16(&[0.0, 1.0, -1.0]), vec![0x00, 0x00, 0xff, 0x7f, 0x01, 0x80]);
/// ```
pub fn encode_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 2);
    for &s in samples {
        let v = (s.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
        out.extend_from_slice(&v.to_le_bytes());
    }
    out
}

// ---------------------------------------------------------------------------
// L16
// ---------------------------------------------------------------------------

/// Read big-endian `i16` samples out of an `audio/L16` payload.
///
/// A trailing odd byte is ignored.
pub fn decode_l16(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_be_bytes([pair[0], pair[1]]))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
