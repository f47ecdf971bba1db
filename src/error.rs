//! Error types for generation, export and configuration

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::export::RenderError;
use crate::palette::PaletteError;

/// Failure reported by an [`AvatarSource`](crate::source::AvatarSource)
#[derive(Debug, Error)]
#[error("failed to generate avatar for seed '{seed}': {reason}")]
pub struct GenerationError {
    pub seed: String,
    pub reason: String,
}

impl GenerationError {
    pub fn new(seed: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned by the export operations of a session
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export requested while no avatar has been generated
    #[error("nothing to export: no avatar has been generated")]
    NothingToExport,

    /// Rasterization failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Writing the exported file failed
    #[error("failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No export format could be inferred from the destination path
    #[error("cannot infer export format from '{}' (expected .svg or .png)", .path.display())]
    UnknownFormat { path: PathBuf },
}

impl ExportError {
    /// Whether this is the informational "nothing to export" condition
    /// rather than a real failure
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::NothingToExport | Self::UnknownFormat { .. })
    }
}

/// Top-level error for callers that drive the whole pipeline
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        Error::Export(ExportError::Render(err))
    }
}
