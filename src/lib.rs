//! Text Avatar - deterministic avatars derived from text
//!
//! This library turns a seed string into an SVG avatar, keeps the latest one
//! in a session and exports it as the unmodified SVG bytes or as a PNG raster.
//!
//! # Example
//!
//! ```rust
//! use text_avatar::{AvatarSession, IdenticonSource};
//!
//! let mut session = AvatarSession::new(IdenticonSource::default());
//! session.on_seed_changed("abc123").unwrap();
//!
//! let svg = session.export_vector().unwrap();
//! assert!(String::from_utf8(svg).unwrap().contains("<svg"));
//!
//! let png = session.export_raster(64, 64).unwrap();
//! assert!(png.starts_with(b"\x89PNG"));
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod palette;
pub mod seed;
pub mod session;
pub mod source;

pub use config::{ConfigError, Settings};
pub use document::VectorDocument;
pub use error::{Error, ExportError, GenerationError};
pub use export::{ExportFormat, FitMode, RasterConfig, RenderError};
pub use palette::{Palette, PaletteError};
pub use seed::Seed;
pub use session::{AvatarSession, DocumentState};
pub use source::{verify_source, AvatarConfig, AvatarSource, IdenticonSource};

/// Generate an avatar with the built-in generator and default configuration
///
/// Returns `Ok(None)` for empty text.
///
/// # Example
///
/// ```rust
/// let a = text_avatar::generate("xyz").unwrap().unwrap();
/// let b = text_avatar::generate("xyz").unwrap().unwrap();
/// assert_eq!(a, b);
///
/// assert!(text_avatar::generate("").unwrap().is_none());
/// ```
pub fn generate(text: &str) -> Result<Option<VectorDocument>, GenerationError> {
    generate_with(&IdenticonSource::default(), text)
}

/// Generate an avatar for `text` with any source
pub fn generate_with<S: AvatarSource>(
    source: &S,
    text: &str,
) -> Result<Option<VectorDocument>, GenerationError> {
    match Seed::new(text) {
        Some(seed) => source.generate(&seed).map(Some),
        None => Ok(None),
    }
}

/// Build a session around the built-in generator from settings
///
/// Loads the palette named in the settings, if any.
pub fn session_from_settings(
    settings: &Settings,
) -> Result<AvatarSession<IdenticonSource>, Error> {
    let palette = match &settings.avatar.palette {
        Some(path) => Palette::from_file(path)?,
        None => Palette::default(),
    };
    let source = IdenticonSource::new(settings.avatar_config(AvatarConfig::default()), palette);
    Ok(AvatarSession::new(source)
        .with_raster_config(settings.raster_config(RasterConfig::default())))
}
