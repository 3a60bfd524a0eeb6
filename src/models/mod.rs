//! Data models for palettes, tints and their settings

mod palette;
mod settings;

// Re-export all public types
pub use palette::{PaletteBuild, TintBuild};
pub use settings::{Bound, PaletteSettings};
