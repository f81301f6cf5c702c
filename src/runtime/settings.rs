use crate::config;

/// Load and validate settings, falling back to defaults.
///
/// Config is optional, so a broken file must not prevent startup. Logging is
/// not up yet when this runs; the returned warning is logged by the caller.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                config::Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}
