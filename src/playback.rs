//! Playback timing: the looping clock and the speed control.
//!
//! The clock turns wall-clock time into a logical "elapsed seconds" cursor
//! inside the recording; the speed control is the user-facing multiplier.

mod clock;
mod speed;

pub use clock::*;
pub use speed::*;

#[cfg(test)]
mod tests;
