//! Recorded BPM sessions.
//!
//! A session file holds one series of `{ "time": "MM:SS", "bpm": number|null }`
//! samples. Two series are loaded at startup ("solo" and "group") and stay
//! read-only for the rest of the run.

mod error;
mod load;
mod model;
mod timestamp;

pub use model::*;
pub use timestamp::*;
