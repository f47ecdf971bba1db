//! Color palettes for the built-in avatar generator
//!
//! A palette is three ordered color lists. Order matters: the generator picks
//! colors by index, so reordering a palette changes every avatar drawn with it.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or validating palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Palette has no {0} colors")]
    Empty(&'static str),
    #[error("Invalid color '{0}' (expected #rgb or #rrggbb)")]
    InvalidColor(String),
}

/// Ordered color lists used to paint avatars
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Colors for the round background
    pub backgrounds: Vec<String>,
    /// Colors for the mosaic
    pub foregrounds: Vec<String>,
    /// Colors for the accent ring; falls back to foregrounds when empty
    pub accents: Vec<String>,
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    colors: TomlColors,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlColors {
    backgrounds: Vec<String>,
    foregrounds: Vec<String>,
    #[serde(default)]
    accents: Vec<String>,
}

/// Default palette - soft material backgrounds with saturated foregrounds
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "default"
description = "Soft backgrounds, saturated mosaics"

[colors]
backgrounds = [
    "#e3f2fd", "#fce4ec", "#e8f5e9", "#fff3e0",
    "#ede7f6", "#e0f7fa", "#fffde7", "#efebe9",
]
foregrounds = [
    "#1565c0", "#ad1457", "#2e7d32", "#e65100",
    "#4527a0", "#00838f", "#f9a825", "#4e342e",
    "#c62828", "#283593",
]
accents = ["#333333", "#ff9800", "#2196f3", "#4caf50", "#f44336"]
"##;

impl Palette {
    /// Load palette from TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load palette from TOML string
    pub fn from_toml(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        let palette = Palette {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            backgrounds: parsed.colors.backgrounds,
            foregrounds: parsed.colors.foregrounds,
            accents: parsed.colors.accents,
        };
        palette.validate()?;
        Ok(palette)
    }

    /// Check that both required lists are non-empty and every color is hex
    pub fn validate(&self) -> Result<(), PaletteError> {
        if self.backgrounds.is_empty() {
            return Err(PaletteError::Empty("background"));
        }
        if self.foregrounds.is_empty() {
            return Err(PaletteError::Empty("foreground"));
        }
        for color in self
            .backgrounds
            .iter()
            .chain(&self.foregrounds)
            .chain(&self.accents)
        {
            if !is_hex_color(color) {
                return Err(PaletteError::InvalidColor(color.clone()));
            }
        }
        Ok(())
    }

    /// Background color for a selector byte
    pub fn background(&self, selector: u8) -> &str {
        pick(&self.backgrounds, selector)
    }

    /// Foreground color for a selector byte, avoiding `background` when the
    /// palette offers any alternative
    pub fn foreground(&self, selector: u8, background: &str) -> &str {
        let len = self.foregrounds.len();
        let start = selector as usize % len;
        (0..len)
            .map(|offset| self.foregrounds[(start + offset) % len].as_str())
            .find(|color| !color.eq_ignore_ascii_case(background))
            .unwrap_or(&self.foregrounds[start])
    }

    /// Accent color for a selector byte
    pub fn accent(&self, selector: u8) -> &str {
        if self.accents.is_empty() {
            pick(&self.foregrounds, selector)
        } else {
            pick(&self.accents, selector)
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_toml(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

fn pick(colors: &[String], selector: u8) -> &str {
    &colors[selector as usize % colors.len()]
}

fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
