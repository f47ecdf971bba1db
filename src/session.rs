//! Avatar session: the current seed and document, and the operations a
//! shell drives from its input events
//!
//! A session is either idle (no document) or ready (one document). A
//! successful generation replaces the document wholesale; an empty seed
//! returns to idle; a failed generation leaves the state untouched.

use std::fs;
use std::path::Path;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::document::VectorDocument;
use crate::error::{ExportError, GenerationError};
use crate::export::{self, ExportFormat, RasterConfig};
use crate::seed::Seed;
use crate::source::AvatarSource;

/// Borrowed view of the session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentState<'a> {
    Idle,
    Ready {
        seed: &'a Seed,
        document: &'a VectorDocument,
    },
}

#[derive(Debug)]
struct Current {
    seed: Seed,
    document: VectorDocument,
}

/// Holds the document generated for the latest seed
#[derive(Debug)]
pub struct AvatarSession<S> {
    source: S,
    current: Option<Current>,
    raster: RasterConfig,
}

impl<S: AvatarSource> AvatarSession<S> {
    /// Create an idle session around `source`
    pub fn new(source: S) -> Self {
        Self {
            source,
            current: None,
            raster: RasterConfig::default(),
        }
    }

    /// Set the raster configuration used by [`save`](Self::save) and as the
    /// fit policy of [`export_raster`](Self::export_raster)
    pub fn with_raster_config(mut self, config: RasterConfig) -> Self {
        self.raster = config;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn raster_config(&self) -> &RasterConfig {
        &self.raster
    }

    pub fn state(&self) -> DocumentState<'_> {
        match &self.current {
            Some(current) => DocumentState::Ready {
                seed: &current.seed,
                document: &current.document,
            },
            None => DocumentState::Idle,
        }
    }

    pub fn document(&self) -> Option<&VectorDocument> {
        self.current.as_ref().map(|c| &c.document)
    }

    pub fn seed(&self) -> Option<&Seed> {
        self.current.as_ref().map(|c| &c.seed)
    }

    pub fn is_ready(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the current document and return to idle
    pub fn clear(&mut self) {
        if self.current.take().is_some() {
            debug!("cleared current avatar");
        }
    }

    /// React to new seed text
    ///
    /// Empty text clears the session and returns `Ok(None)`. On failure the
    /// previous document is kept.
    pub fn on_seed_changed(
        &mut self,
        text: &str,
    ) -> Result<Option<&VectorDocument>, GenerationError> {
        match Seed::new(text) {
            Some(seed) => self.regenerate(seed).map(Some),
            None => {
                self.clear();
                Ok(None)
            }
        }
    }

    /// Pick a random seed and generate its avatar
    pub fn on_random_requested(&mut self) -> Result<(Seed, &VectorDocument), GenerationError> {
        self.on_random_requested_with(&mut rand::rng())
    }

    /// Like [`on_random_requested`](Self::on_random_requested) with a
    /// caller-supplied generator
    pub fn on_random_requested_with<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Seed, &VectorDocument), GenerationError> {
        let seed = Seed::random_with(rng);
        debug!(seed = %seed, "random seed requested");
        let document = self.regenerate(seed.clone())?;
        Ok((seed, document))
    }

    fn regenerate(&mut self, seed: Seed) -> Result<&VectorDocument, GenerationError> {
        match self.source.generate(&seed) {
            Ok(document) => {
                debug!(seed = %seed, bytes = document.len(), "generated avatar");
                let current = self.current.insert(Current { seed, document });
                Ok(&current.document)
            }
            Err(err) => {
                warn!(seed = %seed, error = %err, "avatar generation failed, keeping previous avatar");
                Err(err)
            }
        }
    }

    fn require_document(&self) -> Result<&VectorDocument, ExportError> {
        self.document().ok_or_else(|| {
            debug!("export requested with no avatar");
            ExportError::NothingToExport
        })
    }

    /// The current document's bytes, unmodified
    pub fn export_vector(&self) -> Result<Vec<u8>, ExportError> {
        Ok(export::vector_bytes(self.require_document()?))
    }

    /// PNG of the current document at `width × height`, using the session's
    /// fit policy
    pub fn export_raster(&self, width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
        self.export_raster_with(&self.raster.with_size(width, height))
    }

    /// PNG of the current document with an explicit raster configuration
    pub fn export_raster_with(&self, config: &RasterConfig) -> Result<Vec<u8>, ExportError> {
        let document = self.require_document()?;
        Ok(export::raster_bytes(document, config)?)
    }

    /// Write the current document as SVG to `path`
    pub fn save_vector(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let bytes = self.export_vector()?;
        write_file(path.as_ref(), &bytes)
    }

    /// Render and write a PNG to `path`; nothing is written if rendering fails
    pub fn save_raster(
        &self,
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
    ) -> Result<(), ExportError> {
        let bytes = self.export_raster(width, height)?;
        write_file(path.as_ref(), &bytes)
    }

    /// Write the current document in the format named by the extension of
    /// `path`, rasters at the session's configured size
    pub fn save(&self, path: impl AsRef<Path>) -> Result<ExportFormat, ExportError> {
        let path = path.as_ref();
        self.require_document()?;
        let format = ExportFormat::from_path(path).ok_or_else(|| ExportError::UnknownFormat {
            path: path.to_path_buf(),
        })?;
        self.save_as(path, format)?;
        Ok(format)
    }

    /// Write the current document to `path` in an explicit format
    pub fn save_as(&self, path: impl AsRef<Path>, format: ExportFormat) -> Result<(), ExportError> {
        match format {
            ExportFormat::Svg => self.save_vector(path),
            ExportFormat::Png => {
                let bytes = self.export_raster_with(&self.raster)?;
                write_file(path.as_ref(), &bytes)
            }
        }
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    fs::write(path, bytes).map_err(|source| {
        warn!(path = %path.display(), error = %source, "failed to write avatar");
        ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "saved avatar");
    Ok(())
}
