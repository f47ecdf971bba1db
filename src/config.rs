//! Settings file support
//!
//! Every key is optional; missing keys keep the library defaults.
//!
//! ```toml
//! [avatar]
//! size = 240
//! grid = 5
//! padding = 0.2
//! palette = "palettes/mono.toml"
//!
//! [raster]
//! width = 1024
//! height = 1024
//! fit = "contain"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::export::{FitMode, RasterConfig};
use crate::source::AvatarConfig;

/// Errors that can occur when loading a settings file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Settings loaded from a TOML file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub avatar: AvatarSettings,
    #[serde(default)]
    pub raster: RasterSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AvatarSettings {
    pub size: Option<f64>,
    pub grid: Option<usize>,
    pub padding: Option<f64>,
    pub standalone: Option<bool>,
    pub pretty_print: Option<bool>,
    /// Palette file, relative paths resolved against the settings file
    pub palette: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RasterSettings {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fit: Option<FitMode>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings = Self::from_toml(&content)?;
        if let Some(palette) = settings.avatar.palette.take() {
            settings.avatar.palette = Some(match path.parent() {
                Some(dir) if palette.is_relative() => dir.join(palette),
                _ => palette,
            });
        }
        Ok(settings)
    }

    /// Load settings from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay the avatar settings on `base`
    pub fn avatar_config(&self, base: AvatarConfig) -> AvatarConfig {
        let mut config = base;
        if let Some(size) = self.avatar.size {
            config = config.with_size(size);
        }
        if let Some(grid) = self.avatar.grid {
            config = config.with_grid(grid);
        }
        if let Some(padding) = self.avatar.padding {
            config = config.with_padding(padding);
        }
        if let Some(standalone) = self.avatar.standalone {
            config = config.with_standalone(standalone);
        }
        if let Some(pretty) = self.avatar.pretty_print {
            config = config.with_pretty_print(pretty);
        }
        config
    }

    /// Overlay the raster settings on `base`
    pub fn raster_config(&self, base: RasterConfig) -> RasterConfig {
        RasterConfig {
            width: self.raster.width.unwrap_or(base.width),
            height: self.raster.height.unwrap_or(base.height),
            fit: self.raster.fit.unwrap_or(base.fit),
        }
    }
}
