//! Configuration module for tintramp
//!
//! Provides types, discovery and loading for `tintramp.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
