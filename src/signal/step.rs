use crate::session::Series;

/// BPM in effect at `second`.
///
/// Scans the whole series and keeps the *last* sample (in series order) that
/// has a BPM and a timestamp `<= second`, so a later entry overrides an
/// earlier one even when timestamps go backwards. `None` before the first
/// valid reading, and for negative seconds.
pub fn bpm_at_second(series: &Series, second: i64) -> Option<f64> {
    series
        .valid_samples()
        .filter(|(time, _)| i64::from(time.as_secs()) <= second)
        .last()
        .map(|(_, bpm)| bpm)
}
