//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive data loading, playback, the
//! chart and logging, plus helpers to load them from disk and environment.

mod load;
mod schema;

pub use load::*;
pub use schema::*;
