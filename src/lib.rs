//! Tintramp - Library for generating and editing perceptual color ramps
//!
//! This library provides functionality to:
//! - Derive an ordered light-to-dark ramp of tints from one seed color
//! - Keep the ramp consistent while tints are edited or pinned as anchors
//! - Name tints, recommend companion palettes and project chart series
//! - Export palettes as CSS custom properties or JSON

pub mod chart;
pub mod cli;
pub mod collection;
pub mod color;
pub mod config;
pub mod edit;
pub mod export;
pub mod hues;
pub mod models;
pub mod naming;
pub mod ramp;
pub mod recommend;

#[cfg(feature = "wasm")]
pub mod wasm;
