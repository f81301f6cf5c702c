use std::time::{Duration, Instant};

/// Result of advancing the clock by one frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Playback is inside the recording at this second.
    Running(u64),
    /// The cursor reached the end; the clock restarted and nothing should be
    /// drawn this frame.
    Wrapped,
}

/// Logical seconds covered after `since_start` of wall-clock time at `speed`.
pub fn elapsed_seconds(since_start: Duration, speed: f64) -> u64 {
    // `as` saturates; a NaN product becomes 0.
    (since_start.as_secs_f64() * speed).floor() as u64
}

/// Looping playback clock: a start instant and a speed multiplier.
///
/// There is no paused state. The start instant moves only when the clock is
/// created and when it wraps.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    start: Instant,
    speed: f64,
}

impl PlaybackClock {
    pub fn new(start: Instant, speed: f64) -> Self {
        let speed = if is_valid_speed(speed) { speed } else { 1.0 };
        Self { start, speed }
    }

    #[cfg(test)]
    pub fn start(&self) -> Instant {
        self.start
    }

    #[cfg(test)]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Change the multiplier. Non-positive or non-finite values are ignored.
    ///
    /// The new speed applies to the whole span since `start`, so the cursor
    /// jumps when the speed changes.
    pub fn set_speed(&mut self, speed: f64) -> bool {
        if !is_valid_speed(speed) {
            return false;
        }
        self.speed = speed;
        true
    }

    pub fn elapsed_seconds(&self, now: Instant) -> u64 {
        elapsed_seconds(now.saturating_duration_since(self.start), self.speed)
    }

    /// Advance to `now`, wrapping when the cursor reaches `duration`.
    pub fn tick(&mut self, now: Instant, duration: u32) -> Tick {
        let elapsed = self.elapsed_seconds(now);
        if elapsed >= u64::from(duration) {
            self.start = now;
            Tick::Wrapped
        } else {
            Tick::Running(elapsed)
        }
    }
}

fn is_valid_speed(speed: f64) -> bool {
    speed.is_finite() && speed > 0.0
}
