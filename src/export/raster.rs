//! Rasterization of vector documents to PNG

use std::fmt;
use std::str::FromStr;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use serde::Deserialize;
use tracing::debug;

use super::RenderError;
use crate::document::VectorDocument;

/// Width and height of the default raster export
pub const DEFAULT_RASTER_SIZE: u32 = 1024;

/// How a vector graphic is mapped onto the raster canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Scale each axis independently to fill the canvas
    #[default]
    Stretch,
    /// Uniform scale, centered; uncovered area stays transparent
    Contain,
}

impl FitMode {
    /// Transform mapping a `src_w × src_h` graphic onto a `dst_w × dst_h` canvas
    pub fn transform(self, src_w: f32, src_h: f32, dst_w: u32, dst_h: u32) -> Transform {
        let sx = dst_w as f32 / src_w;
        let sy = dst_h as f32 / src_h;
        match self {
            FitMode::Stretch => Transform::from_scale(sx, sy),
            FitMode::Contain => {
                let scale = sx.min(sy);
                let tx = (dst_w as f32 - src_w * scale) / 2.0;
                let ty = (dst_h as f32 - src_h * scale) / 2.0;
                Transform::from_row(scale, 0.0, 0.0, scale, tx, ty)
            }
        }
    }
}

impl FromStr for FitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stretch" => Ok(FitMode::Stretch),
            "contain" => Ok(FitMode::Contain),
            other => Err(format!(
                "unknown fit mode '{}' (expected stretch or contain)",
                other
            )),
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FitMode::Stretch => "stretch",
            FitMode::Contain => "contain",
        })
    }
}

/// Configuration for raster export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Fit policy for non-matching aspect ratios
    pub fit: FitMode,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_RASTER_SIZE,
            height: DEFAULT_RASTER_SIZE,
            fit: FitMode::default(),
        }
    }
}

impl RasterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the fit policy
    pub fn with_fit(mut self, fit: FitMode) -> Self {
        self.fit = fit;
        self
    }
}

/// Render `document` onto a transparent canvas and encode it as PNG
///
/// The parsed tree and the pixmap are owned by this call and dropped on every
/// return path.
pub fn raster_bytes(document: &VectorDocument, config: &RasterConfig) -> Result<Vec<u8>, RenderError> {
    let tree = Tree::from_str(document.as_str(), &Options::default()).map_err(RenderError::Parse)?;

    // Pixmap::new zero-fills, so the canvas starts fully transparent
    let mut pixmap = Pixmap::new(config.width, config.height).ok_or(RenderError::InvalidCanvas {
        width: config.width,
        height: config.height,
    })?;

    let size = tree.size();
    let transform = config
        .fit
        .transform(size.width(), size.height(), config.width, config.height);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))?;
    debug!(
        width = config.width,
        height = config.height,
        fit = %config.fit,
        bytes = png.len(),
        "rasterized vector document"
    );
    Ok(png)
}
