use crate::session::Series;

/// Recording length in seconds: the latest timestamp carrying a BPM across
/// all `series`. Dropout samples never extend it. `0` when nothing qualifies.
pub fn compute_duration(series: &[&Series]) -> u32 {
    series
        .iter()
        .flat_map(|s| s.valid_samples())
        .map(|(time, _)| time.as_secs())
        .max()
        .unwrap_or(0)
}
