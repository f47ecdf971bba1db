//! Error types for raster export

use thiserror::Error;

/// Errors that can occur while rasterizing a vector document
#[derive(Debug, Error)]
pub enum RenderError {
    /// The document is not valid SVG
    #[error("failed to parse vector document: {0}")]
    Parse(#[source] resvg::usvg::Error),

    /// The requested canvas cannot be allocated
    #[error("cannot allocate a {width}x{height} canvas")]
    InvalidCanvas { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("failed to encode PNG: {0}")]
    Encode(String),
}
