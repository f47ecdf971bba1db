//! Export of vector documents as SVG bytes or PNG rasters

pub mod error;
pub mod raster;

pub use error::RenderError;
pub use raster::{raster_bytes, FitMode, RasterConfig, DEFAULT_RASTER_SIZE};

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::document::VectorDocument;

/// File formats a document can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    /// Infer the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()?.to_str()?.parse().ok()
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "png" => Ok(ExportFormat::Png),
            other => Err(format!("unknown format '{}' (expected svg or png)", other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// The document's UTF-8 bytes, unmodified
pub fn vector_bytes(document: &VectorDocument) -> Vec<u8> {
    document.as_bytes().to_vec()
}
