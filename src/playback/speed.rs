use crate::config::PlaybackSettings;

/// The speed "slider": a bounded multiplier moved in fixed steps.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedControl {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    default: f64,
}

impl SpeedControl {
    /// Build from validated playback settings.
    pub fn new(settings: &PlaybackSettings) -> Self {
        let min = settings.min_speed;
        let max = settings.max_speed;
        let default = settings.default_speed.clamp(min, max);
        Self {
            value: default,
            min,
            max,
            step: settings.speed_step,
            default,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// One step faster. Returns the new value.
    pub fn increase(&mut self) -> f64 {
        self.set(self.value + self.step)
    }

    /// One step slower. Returns the new value.
    pub fn decrease(&mut self) -> f64 {
        self.set(self.value - self.step)
    }

    /// Back to the configured default.
    pub fn reset(&mut self) -> f64 {
        self.value = self.default;
        self.value
    }

    /// Position of the current value between `min` and `max`, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 1.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }

    // Snap to the step grid anchored at `min` so repeated steps don't drift
    // (0.1 + 0.2 != 0.3), then drop the float dust left by the multiply.
    fn set(&mut self, raw: f64) -> f64 {
        let steps = ((raw - self.min) / self.step).round();
        let snapped = ((self.min + steps * self.step) * 1e9).round() / 1e9;
        self.value = snapped.clamp(self.min, self.max);
        self.value
    }
}
