//! Export formats for palettes.
//!
//! # Supported Formats
//!
//! - **CSS**: custom properties, one `--color-{palette}-{tint}` per tint
//! - **JSON**: ordered shade lists, tint name to hex
//!
//! # Example
//!
//! ```
//! use tintramp::color::Color;
//! use tintramp::export::to_stylesheet;
//! use tintramp::models::{PaletteBuild, PaletteSettings};
//!
//! let seed = Color::from_hex("#3b82f6").unwrap();
//! let palette = PaletteBuild::from_seed(seed, PaletteSettings::default());
//! assert!(to_stylesheet(&palette).contains("--color-blue-500:#3b82f6;"));
//! ```

pub mod css;
pub mod json;

pub use css::*;
pub use json::*;

use thiserror::Error;

/// Common error type for export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Options for export operations.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pretty print output (with indentation)
    pub pretty: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}
