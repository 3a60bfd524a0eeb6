//! CSS custom property export.
//!
//! Every tint becomes `--color-{slug}-{tint name}:{hex};` where the slug is the
//! palette name lowercased with runs of other characters collapsed to `-`.

use crate::collection::PaletteCollection;
use crate::models::PaletteBuild;

/// Property-safe form of a palette name: `"Sky Blue"` becomes `"sky-blue"`.
pub fn palette_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Custom property declarations for every tint, lightest first, one per line.
pub fn to_stylesheet(palette: &PaletteBuild) -> String {
    let slug = palette_slug(&palette.name);
    palette
        .tints
        .iter()
        .map(|tint| format!("--color-{}-{}:{};", slug, palette_slug(&tint.name), tint.color))
        .collect::<Vec<String>>()
        .join("\n")
}

/// A `:root` rule declaring the tints of every palette in collection order.
pub fn collection_stylesheet(collection: &PaletteCollection) -> String {
    let mut css = String::from(":root {\n");
    for palette in collection.iter() {
        for line in to_stylesheet(palette).lines() {
            css.push_str("  ");
            css.push_str(line);
            css.push('\n');
        }
    }
    css.push('}');
    css
}
