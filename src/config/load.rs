use std::{env, path::PathBuf};

use super::schema::Settings;

const MAX_TIME_LABELS: usize = 256;
const MAX_HRV_TICKS: u32 = 100;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment variables
/// (prefix `HRV_REPLAY__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("HRV_REPLAY")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Check that loaded values make sense together.
    pub fn validate(&self) -> Result<(), String> {
        let p = &self.playback;
        for (name, v) in [
            ("playback.min_speed", p.min_speed),
            ("playback.max_speed", p.max_speed),
            ("playback.default_speed", p.default_speed),
            ("playback.speed_step", p.speed_step),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(format!("{name} must be a positive number"));
            }
        }
        if p.min_speed > p.max_speed {
            return Err("playback.min_speed must be <= playback.max_speed".to_string());
        }
        if p.default_speed < p.min_speed || p.default_speed > p.max_speed {
            return Err("playback.default_speed must lie within [min_speed, max_speed]".to_string());
        }
        if p.frame_interval_ms == 0 {
            return Err("playback.frame_interval_ms must be >= 1".to_string());
        }

        let c = &self.chart;
        if !c.max_hrv.is_finite() || c.max_hrv <= 0.0 {
            return Err("chart.max_hrv must be a positive number".to_string());
        }
        if !c.hrv_tick_step.is_finite() || c.hrv_tick_step <= 0.0 {
            return Err("chart.hrv_tick_step must be a positive number".to_string());
        }
        if c.time_tick_seconds == 0 {
            return Err("chart.time_tick_seconds must be >= 1".to_string());
        }
        if c.max_time_labels < 2 || c.max_time_labels > MAX_TIME_LABELS {
            return Err(format!(
                "chart.max_time_labels must lie within [2, {MAX_TIME_LABELS}]"
            ));
        }
        if c.max_hrv / c.hrv_tick_step > f64::from(MAX_HRV_TICKS) {
            return Err(format!(
                "chart.max_hrv / chart.hrv_tick_step must be <= {MAX_HRV_TICKS}"
            ));
        }
        if c.glow_min > c.glow_max {
            return Err("chart.glow_min must be <= chart.glow_max".to_string());
        }
        if !c.glow_period_ms.is_finite() || c.glow_period_ms <= 0.0 {
            return Err("chart.glow_period_ms must be a positive number".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `HRV_REPLAY_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("HRV_REPLAY_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/hrv-replay/config.toml`
/// or `~/.config/hrv-replay/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("hrv-replay").join("config.toml"))
}

/// Compute the default log path under `$XDG_STATE_HOME/hrv-replay/hrv-replay.log`
/// or `~/.local/state/hrv-replay/hrv-replay.log`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("hrv-replay").join("hrv-replay.log"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(xdg) = env::var_os(var) {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
