//! Built-in generator: a mirrored mosaic on a round background
//!
//! Every visual choice is read from the SHA-256 digest of the seed:
//!
//! | digest bytes | used for                       |
//! |--------------|--------------------------------|
//! | 0            | background color               |
//! | 1            | mosaic color                   |
//! | 2            | ring color                     |
//! | 3 (bit 0)    | whether the ring is drawn      |
//! | 4..          | mosaic cells, one bit per cell |

use sha2::{Digest, Sha256};

use super::config::MAX_GRID;
use super::svg::SvgBuilder;
use super::{AvatarConfig, AvatarSource};
use crate::document::VectorDocument;
use crate::error::GenerationError;
use crate::palette::Palette;
use crate::seed::Seed;

/// Offset of the first mosaic byte in the digest
const CELL_BITS_OFFSET: usize = 4;

/// Ring stroke width as a fraction of the canvas size
const RING_WIDTH: f64 = 0.04;

/// Deterministic avatar generator built on a palette and a seed digest
#[derive(Debug, Clone, Default)]
pub struct IdenticonSource {
    config: AvatarConfig,
    palette: Palette,
}

impl IdenticonSource {
    pub fn new(config: AvatarConfig, palette: Palette) -> Self {
        Self { config, palette }
    }

    /// Set the avatar configuration
    pub fn with_config(mut self, config: AvatarConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn config(&self) -> &AvatarConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl AvatarSource for IdenticonSource {
    fn generate(&self, seed: &Seed) -> Result<VectorDocument, GenerationError> {
        if !(self.config.size.is_finite() && self.config.size > 0.0) {
            return Err(GenerationError::new(
                seed.as_str(),
                format!("invalid canvas size {}", self.config.size),
            ));
        }
        self.palette
            .validate()
            .map_err(|e| GenerationError::new(seed.as_str(), e.to_string()))?;

        let digest = Sha256::digest(seed.as_bytes());
        let size = self.config.size;
        let grid = self.config.grid.clamp(1, MAX_GRID);
        let padding = self.config.padding.clamp(0.0, 0.45);

        let background = self.palette.background(digest[0]);
        let foreground = self.palette.foreground(digest[1], background);
        let accent = self.palette.accent(digest[2]);
        let draw_ring = digest[3] & 1 == 1;

        let mut builder = SvgBuilder::new(self.config.clone());
        builder.set_title(seed.as_str());

        let center = size / 2.0;
        builder.add_circle(
            Some("background"),
            center,
            center,
            center,
            &format!(r#" fill="{}""#, background),
        );

        let origin = size * padding;
        let cell = (size - 2.0 * origin) / grid as f64;
        builder.start_group(Some("mosaic"), &format!(r#" fill="{}""#, foreground));
        for (row, col) in mosaic_cells(&digest, grid) {
            builder.add_rect(
                None,
                origin + col as f64 * cell,
                origin + row as f64 * cell,
                cell,
                cell,
                "",
            );
        }
        builder.end_group();

        if draw_ring {
            let width = size * RING_WIDTH;
            builder.add_circle(
                Some("ring"),
                center,
                center,
                center - width / 2.0,
                &format!(
                    r#" fill="none" stroke="{}" stroke-width="{}""#,
                    accent,
                    super::svg::fmt_num(width)
                ),
            );
        }

        VectorDocument::new(builder.build())
            .ok_or_else(|| GenerationError::new(seed.as_str(), "generator produced no output"))
    }
}

/// Filled `(row, col)` cells of a horizontally mirrored `grid × grid` mosaic
///
/// Never empty: when the digest sets no cell, the innermost column is filled.
fn mosaic_cells(digest: &[u8], grid: usize) -> Vec<(usize, usize)> {
    let half = grid.div_ceil(2);
    let bit = |row: usize, col: usize| {
        let index = row * half + col;
        let byte = digest[CELL_BITS_OFFSET + index / 8];
        (byte >> (index % 8)) & 1 == 1
    };

    let mut set: Vec<(usize, usize)> = (0..grid)
        .flat_map(|row| (0..half).map(move |col| (row, col)))
        .filter(|&(row, col)| bit(row, col))
        .collect();
    if set.is_empty() {
        set = (0..grid).map(|row| (row, half - 1)).collect();
    }

    let mut cells = Vec::with_capacity(set.len() * 2);
    for (row, col) in set {
        cells.push((row, col));
        let mirrored = grid - 1 - col;
        if mirrored != col {
            cells.push((row, mirrored));
        }
    }
    cells.sort_unstable();
    cells
}
