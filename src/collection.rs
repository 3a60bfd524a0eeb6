//! Ordered collection of palettes.
//!
//! Palettes are values; edits produce new palettes that are swapped back in by
//! id with [`PaletteCollection::replace`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::models::{PaletteBuild, PaletteSettings};

/// Palettes of a design system, in display order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteCollection {
    palettes: Vec<PaletteBuild>,
}

impl PaletteCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh palette around `seed` and return its id.
    pub fn add_from_seed(&mut self, seed: Color, settings: PaletteSettings) -> String {
        let palette = PaletteBuild::from_seed(seed, settings);
        let id = palette.id.clone();
        debug!("added palette {} ({})", palette.name, id);
        self.palettes.push(palette);
        id
    }

    /// Insert a companion of palette `source_id` seeded with `color` right after it.
    ///
    /// Returns the new palette's id, or `None` when `source_id` is unknown.
    pub fn create_from_existing(&mut self, source_id: &str, color: Color) -> Option<String> {
        let position = self.position(source_id)?;
        let palette = PaletteBuild::from_existing(&self.palettes[position], color);
        let id = palette.id.clone();
        debug!("added palette {} ({}) after {}", palette.name, id, source_id);
        self.palettes.insert(position + 1, palette);
        Some(id)
    }

    /// Swap in `palette` for the entry with the same id.
    ///
    /// Returns `false` and leaves the collection unchanged when the id is unknown.
    pub fn replace(&mut self, palette: PaletteBuild) -> bool {
        match self.position(&palette.id) {
            Some(position) => {
                self.palettes[position] = palette;
                true
            }
            None => {
                debug!("no palette {} to replace", palette.id);
                false
            }
        }
    }

    /// Remove and return the palette with `id`.
    pub fn delete(&mut self, id: &str) -> Option<PaletteBuild> {
        let position = self.position(id)?;
        Some(self.palettes.remove(position))
    }

    pub fn get(&self, id: &str) -> Option<&PaletteBuild> {
        self.palettes.iter().find(|palette| palette.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.palettes.iter().position(|palette| palette.id == id)
    }

    /// Palette shown side by side with `id`: the first other palette.
    pub fn comparator_for(&self, id: &str) -> Option<&PaletteBuild> {
        self.palettes.iter().find(|palette| palette.id != id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteBuild> {
        self.palettes.iter()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

impl From<Vec<PaletteBuild>> for PaletteCollection {
    fn from(palettes: Vec<PaletteBuild>) -> Self {
        Self { palettes }
    }
}
