//! Scoped, revocable preview locators.
//!
//! A preview turns an [`AudioSample`] into something a host player can open:
//! a temporary file and its `file://` URL.  The [`PreviewStore`] owns every
//! file it creates and holds at most one per sample.  Creating a new preview
//! for a sample revokes the old one.  Files are deleted on revoke and when
//! the store is dropped.
//!
//! `audio/L16` payloads are wrapped in a WAV container so that ordinary
//! players can open them; every other codec is written verbatim.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::pcm::decode_l16;
use super::sample::{AudioSample, MediaType, SampleId};

/// A handle to a live preview.  Cheap to clone; it does not own the file.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewLocator {
    sample_id: SampleId,
    path: PathBuf,
    url: String,
}

impl PreviewLocator {
    pub fn sample_id(&self) -> SampleId {
        self.sample_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Owner of all preview files created for one capture engine.
#[derive(Debug, Default)]
pub struct PreviewStore {
    dir: Option<PathBuf>,
    live: HashMap<SampleId, NamedTempFile>,
}

impl PreviewStore {
    /// `dir` is where preview files go; `None` uses the system temp dir.
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir,
            live: HashMap::new(),
        }
    }

    /// Write a playable copy of `sample` and return its locator.
    ///
    /// Any locator previously created for the same sample is revoked first.
    pub fn create(&mut self, sample: &AudioSample) -> io::Result<PreviewLocator> {
        if self.revoke(sample.id()) {
            log::debug!("replacing stale preview for {}", sample.id());
        }

        let wav_spec = l16_wav_spec(sample.media_type());
        let extension = if wav_spec.is_some() {
            "wav"
        } else {
            sample.media_type().file_extension()
        };

        let suffix = format!(".{extension}");
        let mut builder = tempfile::Builder::new();
        builder.prefix("preview-").suffix(&suffix);
        let mut file = match &self.dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                builder.tempfile_in(dir)?
            }
            None => builder.tempfile()?,
        };

        match wav_spec {
            Some(spec) => write_wav(&mut file, spec, sample.payload())?,
            None => {
                file.write_all(sample.payload())?;
                file.flush()?;
            }
        }

        let path = file.path().to_path_buf();
        let locator = PreviewLocator {
            sample_id: sample.id(),
            url: format!("file://{}", path.display()),
            path,
        };
        self.live.insert(sample.id(), file);

        log::debug!("preview created for {}: {}", sample.id(), locator.url);
        Ok(locator)
    }

    /// Delete the preview for `id`.  Returns `false` if none was live.
    pub fn revoke(&mut self, id: SampleId) -> bool {
        match self.live.remove(&id) {
            Some(file) => {
                if let Err(e) = file.close() {
                    log::warn!("failed to delete preview for {id}: {e}");
                }
                true
            }
            None => false,
        }
    }

    /// Delete every live preview and return how many there were.
    pub fn revoke_all(&mut self) -> usize {
        let ids: Vec<SampleId> = self.live.keys().copied().collect();
        ids.into_iter().filter(|id| self.revoke(*id)).count()
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

fn l16_wav_spec(media_type: &MediaType) -> Option<hound::WavSpec> {
    if media_type.essence() != "audio/l16" {
        return None;
    }
    let sample_rate = media_type.param("rate")?.parse().ok()?;
    let channels = media_type
        .param("channels")
        .and_then(|c| c.parse().ok())
        .unwrap_or(1);

    Some(hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    })
}

fn write_wav(file: &mut NamedTempFile, spec: hound::WavSpec, payload: &[u8]) -> io::Result<()> {
    let to_io = |e: hound::Error| io::Error::other(e);

    let mut writer = hound::WavWriter::new(io::BufWriter::new(file.as_file_mut()), spec)
        .map_err(to_io)?;
    for sample in decode_l16(payload) {
        writer.write_sample(sample).map_err(to_io)?;
    }
    writer.finalize().map_err(to_io)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
