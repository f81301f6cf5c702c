use crate::session::Series;

use super::step::bpm_at_second;

/// HRV proxy at `second`: `|bpm(second) - bpm(second - 1)|`.
///
/// Zero whenever either side has no reading yet.
pub fn hrv_proxy(series: &Series, second: i64) -> f64 {
    let prev = second
        .checked_sub(1)
        .and_then(|s| bpm_at_second(series, s));
    match (bpm_at_second(series, second), prev) {
        (Some(now), Some(prev)) => (now - prev).abs(),
        _ => 0.0,
    }
}

/// Clamp a proxy value into `[0, ceiling]` for plotting.
pub fn display_value(proxy: f64, ceiling: f64) -> f64 {
    proxy.max(0.0).min(ceiling)
}

/// Per-second HRV proxy values for `0..=duration`, computed once at load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HrvTrace {
    values: Vec<f64>,
}

impl HrvTrace {
    pub fn build(series: &Series, duration: u32) -> Self {
        let values = (0..=i64::from(duration))
            .map(|second| hrv_proxy(series, second))
            .collect();
        Self { values }
    }

    /// Unclamped proxy at `second`, if it lies inside the recording.
    pub fn value_at(&self, second: u64) -> Option<f64> {
        usize::try_from(second)
            .ok()
            .and_then(|i| self.values.get(i))
            .copied()
    }

    /// Chart points `(second, clamped proxy)` for seconds `1..=upto`.
    pub fn points(&self, upto: u64, ceiling: f64) -> Vec<(f64, f64)> {
        let end = usize::try_from(upto)
            .unwrap_or(usize::MAX)
            .min(self.values.len().saturating_sub(1));

        (1..=end)
            .map(|i| (i as f64, display_value(self.values[i], ceiling)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
