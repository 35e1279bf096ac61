#![forbid(unsafe_code)]

//! Host settings: the interaction config embedded in the page and the
//! monotonic clock fed to the controller.

use std::time::Duration;

use retrofolio_core::InteractionConfig;
use tracing::{Level, warn};
use web_time::Instant;

/// Id of the optional `<script type="application/json">` carrying config.
pub const CONFIG_SCRIPT_ID: &str = "retrofolio-config";

/// Parse the embedded config. Absent or blank payloads yield defaults;
/// malformed payloads are logged and also yield defaults.
#[must_use]
pub fn config_from_script(payload: Option<&str>) -> InteractionConfig {
    let Some(json) = payload.map(str::trim).filter(|json| !json.is_empty()) else {
        return InteractionConfig::default();
    };
    match InteractionConfig::from_json(json) {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "ignoring embedded config");
            InteractionConfig::default()
        }
    }
}

/// Query parameter selecting the console log level (`?log=debug`).
pub const LOG_QUERY_KEY: &str = "log";

/// Log level requested by the page URL's query string, `INFO` otherwise.
#[must_use]
pub fn log_level_from_query(search: &str) -> Level {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == LOG_QUERY_KEY)
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(Level::INFO)
}

/// Milliseconds since the host started, as the controller's `now`.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    #[must_use]
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// `setTimeout` delay for a deadline, saturating at the browser maximum.
#[must_use]
pub fn timeout_millis(deadline: Duration, now: Duration) -> u32 {
    const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;
    let wait = deadline.saturating_sub(now).as_millis();
    u32::try_from(wait).map_or(MAX_TIMEOUT_MS, |ms| ms.min(MAX_TIMEOUT_MS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_or_blank_payload_uses_defaults() {
        assert_eq!(config_from_script(None), InteractionConfig::default());
        assert_eq!(config_from_script(Some("  \n")), InteractionConfig::default());
    }

    #[test]
    fn payload_overrides_selected_fields() {
        let config = config_from_script(Some(r#"{ "trail_length": 4, "resize_debounce": 50 }"#));
        assert_eq!(config.trail_length, 4);
        assert_eq!(config.resize_debounce, Duration::from_millis(50));
        assert_eq!(config.activation_delay, Duration::from_millis(2000));
    }

    #[test]
    fn malformed_payload_falls_back() {
        assert_eq!(
            config_from_script(Some("{ trail_length: ")),
            InteractionConfig::default()
        );
    }

    #[test]
    fn log_level_comes_from_query() {
        assert_eq!(log_level_from_query(""), Level::INFO);
        assert_eq!(log_level_from_query("?log=debug"), Level::DEBUG);
        assert_eq!(log_level_from_query("?x=1&log=TRACE"), Level::TRACE);
        assert_eq!(log_level_from_query("?log=loud"), Level::INFO);
    }

    #[test]
    fn clock_is_monotonic() {
        let clock = Clock::start();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn timeout_rounds_past_deadlines_to_zero() {
        let now = Duration::from_millis(500);
        assert_eq!(timeout_millis(Duration::from_millis(200), now), 0);
        assert_eq!(timeout_millis(Duration::from_millis(650), now), 150);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX / 2000), now), i32::MAX as u32);
    }
}
