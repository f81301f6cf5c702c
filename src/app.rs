//! Application module: exposes the app model owned by the frame loop.
//!
//! The `App` model lives in `app::model` and holds the loaded sessions, their
//! precomputed traces and the playback clock.

mod model;

pub use model::*;
