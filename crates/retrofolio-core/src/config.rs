#![forbid(unsafe_code)]

//! Tuning knobs for every interaction the controller drives.
//!
//! The defaults reproduce the portfolio's shipped behavior. Hosts may override
//! any subset from JSON; missing fields keep their defaults and out-of-range
//! values are clamped by [`InteractionConfig::validated`].
//!
//! # Timing Defaults
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `activation_delay` | 2000ms | Loading grace period before decorative features start |
//! | `theme_transition` | 300ms | Body transition applied around a theme flip |
//! | `filter_fade` | 300ms | Fade-out before a filtered card leaves layout |
//! | `submit_sending` | 1500ms | Simulated network time |
//! | `submit_sent` | 2000ms | "Message Sent!" hold before reset |
//! | `resize_debounce` | 150ms | Quiet period before resize handling runs |
//! | `easter_egg_duration` | 5000ms | Rainbow mode lifetime |
//!
//! # Example
//!
//! ```
//! use retrofolio_core::config::InteractionConfig;
//!
//! let config = InteractionConfig::from_json(r#"{ "trail_length": 12, "trail_ease": 4.0 }"#)
//!     .expect("valid json");
//! assert_eq!(config.trail_length, 12);
//! // Ease factors above 1.0 overshoot; they are clamped.
//! assert_eq!(config.trail_ease, 1.0);
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Upper bound on cursor trail markers.
pub const MAX_TRAIL_LENGTH: usize = 64;

/// Smallest ease factor that still converges visibly.
pub const MIN_TRAIL_EASE: f64 = 0.01;

/// Smallest loading tick; a zero tick would never yield.
pub const MIN_LOADING_TICK: Duration = Duration::from_millis(1);

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Hero-title typewriter settings. Disabled unless present in the config.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Full title text.
    pub text: String,
    /// Trailing part of `text` rendered inside the gradient span.
    pub highlight: String,
    /// Delay before the first character.
    #[serde(with = "duration_ms")]
    pub start_delay: Duration,
    /// Delay between characters.
    #[serde(with = "duration_ms")]
    pub char_interval: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            highlight: String::new(),
            start_delay: Duration::from_millis(1000),
            char_interval: Duration::from_millis(100),
        }
    }
}

/// Thresholds, factors and timings for the page controller.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Fixed header height subtracted from scroll targets (px).
    pub header_height: f64,
    /// Widths at or below this are treated as mobile (px).
    pub desktop_breakpoint: f64,
    /// Scroll offset past which the header blur deepens (px).
    pub header_blur_threshold: f64,
    /// Scroll offset past which scrolling down hides the header (px).
    pub header_hide_threshold: f64,
    /// Lookahead added to the scroll offset when picking the active section (px).
    pub nav_lookahead: f64,

    /// Maximum shape translation per unit of speed (px).
    pub parallax_strength: f64,
    /// Speed added per shape layer.
    pub parallax_speed_step: f64,
    /// Maximum pixel-grid translation (px).
    pub grid_strength: f64,

    /// Pointer offset divided by this gives the tilt angle (deg).
    pub tilt_divisor: f64,
    /// CSS perspective distance (px).
    pub tilt_perspective: f64,
    /// Lift applied while a card is tilted (px).
    pub tilt_lift: f64,

    /// Number of cursor trail markers.
    pub trail_length: usize,
    /// Fraction of the gap each marker closes per frame.
    pub trail_ease: f64,

    #[serde(with = "duration_ms")]
    pub activation_delay: Duration,
    #[serde(with = "duration_ms")]
    pub theme_transition: Duration,
    /// Reveal animation delay per project card index.
    #[serde(with = "duration_ms")]
    pub reveal_stagger: Duration,
    #[serde(with = "duration_ms")]
    pub skill_fill_delay: Duration,
    /// Fade-in delay per card index when filtering.
    #[serde(with = "duration_ms")]
    pub filter_stagger: Duration,
    #[serde(with = "duration_ms")]
    pub filter_fade: Duration,
    #[serde(with = "duration_ms")]
    pub submit_sending: Duration,
    #[serde(with = "duration_ms")]
    pub submit_sent: Duration,
    #[serde(with = "duration_ms")]
    pub banner_enter_delay: Duration,
    #[serde(with = "duration_ms")]
    pub banner_visible: Duration,
    #[serde(with = "duration_ms")]
    pub banner_exit: Duration,
    #[serde(with = "duration_ms")]
    pub loading_tick: Duration,
    /// Largest progress increment per loading tick (percent).
    pub loading_max_step: f64,
    #[serde(with = "duration_ms")]
    pub loading_hold: Duration,
    #[serde(with = "duration_ms")]
    pub loading_fade: Duration,
    /// Seed for the loading progress generator.
    pub loading_seed: u64,
    #[serde(with = "duration_ms")]
    pub easter_egg_duration: Duration,
    #[serde(with = "duration_ms")]
    pub resize_debounce: Duration,

    /// Hero typewriter; `None` leaves the title untouched.
    pub typewriter: Option<TypewriterConfig>,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            header_height: 70.0,
            desktop_breakpoint: 768.0,
            header_blur_threshold: 100.0,
            header_hide_threshold: 100.0,
            nav_lookahead: 100.0,
            parallax_strength: 50.0,
            parallax_speed_step: 0.5,
            grid_strength: 10.0,
            tilt_divisor: 10.0,
            tilt_perspective: 1000.0,
            tilt_lift: 10.0,
            trail_length: 8,
            trail_ease: 0.3,
            activation_delay: Duration::from_millis(2000),
            theme_transition: Duration::from_millis(300),
            reveal_stagger: Duration::from_millis(100),
            skill_fill_delay: Duration::from_millis(300),
            filter_stagger: Duration::from_millis(50),
            filter_fade: Duration::from_millis(300),
            submit_sending: Duration::from_millis(1500),
            submit_sent: Duration::from_millis(2000),
            banner_enter_delay: Duration::from_millis(100),
            banner_visible: Duration::from_millis(3900),
            banner_exit: Duration::from_millis(300),
            loading_tick: Duration::from_millis(100),
            loading_max_step: 15.0,
            loading_hold: Duration::from_millis(800),
            loading_fade: Duration::from_millis(500),
            loading_seed: 0x5eed_f011_0c0d_e5a1,
            easter_egg_duration: Duration::from_millis(5000),
            resize_debounce: Duration::from_millis(150),
            typewriter: None,
        }
    }
}

impl InteractionConfig {
    /// Parse a JSON override. Unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Set the number of trail markers.
    #[must_use]
    pub fn with_trail_length(mut self, length: usize) -> Self {
        self.trail_length = length;
        self
    }

    /// Set the mobile/desktop breakpoint.
    #[must_use]
    pub fn with_desktop_breakpoint(mut self, width: f64) -> Self {
        self.desktop_breakpoint = width;
        self
    }

    /// Set the resize debounce window.
    #[must_use]
    pub fn with_resize_debounce(mut self, quiet: Duration) -> Self {
        self.resize_debounce = quiet;
        self
    }

    /// Enable the hero typewriter.
    #[must_use]
    pub fn with_typewriter(mut self, typewriter: TypewriterConfig) -> Self {
        self.typewriter = Some(typewriter);
        self
    }

    /// Clamp values to ranges the controller can animate.
    ///
    /// - `trail_length` clamped to `0..=64`
    /// - `trail_ease` clamped to `0.01..=1.0`
    /// - `tilt_divisor` at least `1.0`
    /// - `loading_max_step` clamped to `1.0..=100.0`
    /// - `loading_tick` at least 1ms
    /// - non-finite distances replaced by their defaults
    #[must_use]
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        for (value, fallback) in [
            (&mut self.header_height, defaults.header_height),
            (&mut self.desktop_breakpoint, defaults.desktop_breakpoint),
            (&mut self.header_blur_threshold, defaults.header_blur_threshold),
            (&mut self.header_hide_threshold, defaults.header_hide_threshold),
            (&mut self.nav_lookahead, defaults.nav_lookahead),
            (&mut self.parallax_strength, defaults.parallax_strength),
            (&mut self.parallax_speed_step, defaults.parallax_speed_step),
            (&mut self.grid_strength, defaults.grid_strength),
            (&mut self.tilt_perspective, defaults.tilt_perspective),
            (&mut self.tilt_lift, defaults.tilt_lift),
        ] {
            if !value.is_finite() {
                *value = fallback;
            }
        }
        self.trail_length = self.trail_length.min(MAX_TRAIL_LENGTH);
        self.trail_ease = if self.trail_ease.is_finite() {
            self.trail_ease.clamp(MIN_TRAIL_EASE, 1.0)
        } else {
            defaults.trail_ease
        };
        self.tilt_divisor = if self.tilt_divisor.is_finite() {
            self.tilt_divisor.max(1.0)
        } else {
            defaults.tilt_divisor
        };
        self.loading_max_step = if self.loading_max_step.is_finite() {
            self.loading_max_step.clamp(1.0, 100.0)
        } else {
            defaults.loading_max_step
        };
        self.loading_tick = self.loading_tick.max(MIN_LOADING_TICK);
        self
    }

    /// Whether `width` counts as a desktop viewport.
    #[must_use]
    pub fn is_desktop(&self, width: f64) -> bool {
        width > self.desktop_breakpoint
    }
}

/// Serde adapter: durations as integer milliseconds.
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = InteractionConfig::from_json("{}").unwrap();
        assert_eq!(config, InteractionConfig::default());
    }

    #[test]
    fn durations_parse_as_milliseconds() {
        let config =
            InteractionConfig::from_json(r#"{"filter_fade": 450, "resize_debounce": 0}"#).unwrap();
        assert_eq!(config.filter_fade, Duration::from_millis(450));
        assert_eq!(config.resize_debounce, Duration::ZERO);
    }

    #[test]
    fn validation_clamps_trail_and_loading() {
        let config = InteractionConfig {
            trail_length: 500,
            trail_ease: 0.0,
            tilt_divisor: 0.0,
            loading_max_step: 900.0,
            loading_tick: Duration::ZERO,
            ..InteractionConfig::default()
        }
        .validated();
        assert_eq!(config.trail_length, MAX_TRAIL_LENGTH);
        assert_eq!(config.trail_ease, MIN_TRAIL_EASE);
        assert_eq!(config.tilt_divisor, 1.0);
        assert_eq!(config.loading_max_step, 100.0);
        assert_eq!(config.loading_tick, MIN_LOADING_TICK);
    }

    #[test]
    fn non_finite_distances_fall_back() {
        let config = InteractionConfig {
            header_height: f64::NAN,
            desktop_breakpoint: f64::INFINITY,
            ..InteractionConfig::default()
        }
        .validated();
        assert_eq!(config.header_height, 70.0);
        assert_eq!(config.desktop_breakpoint, 768.0);
    }

    #[test]
    fn typewriter_section_is_optional() {
        let config = InteractionConfig::from_json(
            r#"{"typewriter": {"text": "Hello, I'm Ada", "highlight": "Ada"}}"#,
        )
        .unwrap();
        let tw = config.typewriter.expect("typewriter configured");
        assert_eq!(tw.highlight, "Ada");
        assert_eq!(tw.char_interval, Duration::from_millis(100));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(InteractionConfig::from_json("{ trail_length: }").is_err());
    }

    #[test]
    fn breakpoint_is_exclusive() {
        let config = InteractionConfig::default();
        assert!(!config.is_desktop(768.0));
        assert!(config.is_desktop(769.0));
    }
}
