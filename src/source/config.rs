//! Configuration for the built-in avatar generator

/// Largest supported mosaic grid; the digest has enough bits for this size
pub const MAX_GRID: usize = 15;

/// Configuration options for generated avatars
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarConfig {
    /// Width and height of the canvas in SVG user units
    pub size: f64,

    /// Number of mosaic cells per side
    pub grid: usize,

    /// Inset of the mosaic as a fraction of the canvas size
    pub padding: f64,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "avatar-" for "avatar-mosaic")
    pub class_prefix: Option<String>,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            size: 240.0,
            grid: 5,
            padding: 0.2,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("avatar-".to_string()),
        }
    }
}

impl AvatarConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the mosaic grid, clamped to `1..=MAX_GRID`
    pub fn with_grid(mut self, grid: usize) -> Self {
        self.grid = grid.clamp(1, MAX_GRID);
        self
    }

    /// Set the mosaic inset, clamped to `0.0..=0.45`
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.clamp(0.0, 0.45);
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
