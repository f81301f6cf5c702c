//! Signal derivation over loaded sessions.
//!
//! BPM is treated as a step function of time; the HRV proxy is the absolute
//! change of that step function from one second to the next.

mod duration;
mod hrv;
mod step;

pub use duration::*;
pub use hrv::*;
