use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/hrv-replay/config.toml` or `~/.config/hrv-replay/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `HRV_REPLAY__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub playback: PlaybackSettings,
    pub chart: ChartSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory holding the session files. The first command-line argument
    /// overrides it.
    pub dir: PathBuf,
    /// Solo session file, relative to `dir` unless absolute.
    pub solo_file: PathBuf,
    /// Group session file, relative to `dir` unless absolute.
    pub group_file: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            solo_file: PathBuf::from("solo.json"),
            group_file: PathBuf::from("group.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Speed multiplier at startup and after a reset.
    pub default_speed: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Increment applied per key press.
    pub speed_step: f64,
    /// Frame period (milliseconds). 16 is roughly 60 frames per second.
    pub frame_interval_ms: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            default_speed: 1.0,
            min_speed: 0.1,
            max_speed: 4.0,
            speed_step: 0.1,
            frame_interval_ms: 16,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Display ceiling for the HRV proxy. Larger values are drawn at the top.
    pub max_hrv: f64,
    /// Spacing of the y-axis labels.
    pub hrv_tick_step: f64,
    /// Preferred spacing of the time-axis labels (seconds).
    pub time_tick_seconds: u32,
    /// Upper bound on the number of time-axis labels.
    pub max_time_labels: usize,

    /// Trace hues in degrees (0-360).
    pub solo_hue: f64,
    pub group_hue: f64,
    /// Trace saturation (0-100).
    pub saturation: f64,

    /// Brightness range (0-100) the traces pulse through.
    pub glow_min: f64,
    pub glow_max: f64,
    /// Divisor applied to milliseconds before taking the sine of the pulse.
    pub glow_period_ms: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            max_hrv: 10.0,
            hrv_tick_step: 2.0,
            time_tick_seconds: 5,
            max_time_labels: 12,
            solo_hue: 210.0,
            group_hue: 0.0,
            saturation: 80.0,
            glow_min: 40.0,
            glow_max: 100.0,
            glow_period_ms: 200.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Title of the header box above the chart.
    pub header_text: String,
    /// Whether the key help line is shown in the footer.
    pub show_controls: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " hrv-replay · solo vs group ".to_string(),
            show_controls: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log file. Defaults to `$XDG_STATE_HOME/hrv-replay/hrv-replay.log`.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}
