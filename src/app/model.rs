//! Application model types: `App` and `FrameOutcome`.
//!
//! Everything the renderer needs lives here. Sessions, duration and traces are
//! fixed after construction; the clock and speed control change per frame.

use std::time::{Duration, Instant};

use crate::config::PlaybackSettings;
use crate::playback::{PlaybackClock, SpeedControl, Tick};
use crate::session::Sessions;
use crate::signal::{HrvTrace, compute_duration};

/// What the frame loop should do this iteration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Draw the chart with the cursor at this second.
    Render(u64),
    /// The clock wrapped; draw nothing this frame.
    Skip,
}

/// The main application model.
pub struct App {
    pub sessions: Sessions,
    /// Recording length in seconds; also the loop period.
    pub duration: u32,
    pub solo_trace: HrvTrace,
    pub group_trace: HrvTrace,

    clock: PlaybackClock,
    speed: SpeedControl,
    launched: Instant,
}

impl App {
    /// Create a new `App` from loaded `sessions`, starting playback at `now`.
    pub fn new(sessions: Sessions, playback: &PlaybackSettings, now: Instant) -> Self {
        let duration = compute_duration(&[&sessions.solo, &sessions.group]);
        let solo_trace = HrvTrace::build(&sessions.solo, duration);
        let group_trace = HrvTrace::build(&sessions.group, duration);

        let speed = SpeedControl::new(playback);
        let clock = PlaybackClock::new(now, speed.value());

        if sessions.solo.is_empty() && sessions.group.is_empty() {
            tracing::warn!("both sessions are empty; nothing will be drawn");
        }
        tracing::info!(
            duration,
            seconds = solo_trace.len(),
            speed = speed.value(),
            "playback ready"
        );

        Self {
            sessions,
            duration,
            solo_trace,
            group_trace,
            clock,
            speed,
            launched: now,
        }
    }

    /// Advance the playback clock to `now`.
    pub fn advance(&mut self, now: Instant) -> FrameOutcome {
        match self.clock.tick(now, self.duration) {
            Tick::Running(elapsed) => FrameOutcome::Render(elapsed),
            Tick::Wrapped => {
                tracing::debug!(duration = self.duration, "playback wrapped");
                FrameOutcome::Skip
            }
        }
    }

    pub fn speed(&self) -> &SpeedControl {
        &self.speed
    }

    #[cfg(test)]
    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    /// Wall-clock time since the app started; drives the trace glow.
    pub fn since_launch(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.launched)
    }

    pub fn speed_up(&mut self) {
        let v = self.speed.increase();
        self.apply_speed(v);
    }

    pub fn slow_down(&mut self) {
        let v = self.speed.decrease();
        self.apply_speed(v);
    }

    pub fn reset_speed(&mut self) {
        let v = self.speed.reset();
        self.apply_speed(v);
    }

    fn apply_speed(&mut self, v: f64) {
        if self.clock.set_speed(v) {
            tracing::debug!(speed = v, "speed changed");
        }
    }
}
