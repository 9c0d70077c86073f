use std::time::Duration;

use log::Level;

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_DURATION_MS: u64 = 1_000;
pub const DEFAULT_STAGGER_INTERVAL_MS: u64 = 150;
pub const DEFAULT_CARD_TRANSITION_MS: u64 = 500;
pub const DEFAULT_SKILL_FILL_MS: u64 = 1_500;
pub const DEFAULT_SKILL_FILL_DELAY_MS: u64 = 500;
pub const DEFAULT_CONFIRMATION_MS: u64 = 3_000;
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const TRANSITION_MS_BOUNDS: (u64, u64) = (0, 10_000);
const STAGGER_INTERVAL_MS_BOUNDS: (u64, u64) = (0, 2_000);
const CONFIRMATION_MS_BOUNDS: (u64, u64) = (500, 60_000);

/// Timing knobs for every animated surface on the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub reveal_threshold: f64,
    pub reveal_duration: Duration,
    pub stagger_interval: Duration,
    pub card_transition: Duration,
    pub skill_fill: Duration,
    pub skill_fill_delay: Duration,
    pub confirmation: Duration,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_duration: Duration::from_millis(DEFAULT_REVEAL_DURATION_MS),
            stagger_interval: Duration::from_millis(DEFAULT_STAGGER_INTERVAL_MS),
            card_transition: Duration::from_millis(DEFAULT_CARD_TRANSITION_MS),
            skill_fill: Duration::from_millis(DEFAULT_SKILL_FILL_MS),
            skill_fill_delay: Duration::from_millis(DEFAULT_SKILL_FILL_DELAY_MS),
            confirmation: Duration::from_millis(DEFAULT_CONFIRMATION_MS),
        }
    }
}

impl MotionConfig {
    /// Builds the configuration from `data-*` attributes on the mount point.
    /// `lookup` receives the attribute name without the `data-` prefix.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let reveal_threshold = parse_f64_with_bounds(
            lookup("reveal-threshold"),
            DEFAULT_REVEAL_THRESHOLD,
            REVEAL_THRESHOLD_BOUNDS,
        );
        let reveal_duration_ms = parse_u64_with_bounds(
            lookup("reveal-duration-ms"),
            DEFAULT_REVEAL_DURATION_MS,
            TRANSITION_MS_BOUNDS,
        );
        let stagger_interval_ms = parse_u64_with_bounds(
            lookup("stagger-interval-ms"),
            DEFAULT_STAGGER_INTERVAL_MS,
            STAGGER_INTERVAL_MS_BOUNDS,
        );
        let card_transition_ms = parse_u64_with_bounds(
            lookup("card-transition-ms"),
            DEFAULT_CARD_TRANSITION_MS,
            TRANSITION_MS_BOUNDS,
        );
        let skill_fill_ms = parse_u64_with_bounds(
            lookup("skill-fill-ms"),
            DEFAULT_SKILL_FILL_MS,
            TRANSITION_MS_BOUNDS,
        );
        let skill_fill_delay_ms = parse_u64_with_bounds(
            lookup("skill-fill-delay-ms"),
            DEFAULT_SKILL_FILL_DELAY_MS,
            TRANSITION_MS_BOUNDS,
        );
        let confirmation_ms = parse_u64_with_bounds(
            lookup("confirmation-ms"),
            DEFAULT_CONFIRMATION_MS,
            CONFIRMATION_MS_BOUNDS,
        );

        Self {
            reveal_threshold,
            reveal_duration: Duration::from_millis(reveal_duration_ms),
            stagger_interval: Duration::from_millis(stagger_interval_ms),
            card_transition: Duration::from_millis(card_transition_ms),
            skill_fill: Duration::from_millis(skill_fill_ms),
            skill_fill_delay: Duration::from_millis(skill_fill_delay_ms),
            confirmation: Duration::from_millis(confirmation_ms),
        }
    }

    /// Collapses every animation to zero length. The confirmation delay is a
    /// message timeout, not an animation, so it stays.
    pub fn reduced(self) -> Self {
        Self {
            reveal_duration: Duration::ZERO,
            stagger_interval: Duration::ZERO,
            card_transition: Duration::ZERO,
            skill_fill: Duration::ZERO,
            skill_fill_delay: Duration::ZERO,
            ..self
        }
    }
}

pub fn parse_log_level(value: Option<String>, default: Level) -> Level {
    match value
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default()
        .as_str()
    {
        "error" => Level::Error,
        "warn" => Level::Warn,
        "info" => Level::Info,
        "debug" => Level::Debug,
        "trace" => Level::Trace,
        _ => default,
    }
}

/// CSS time literal, e.g. `1000ms`.
pub fn css_millis(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

fn parse_u64_with_bounds(value: Option<String>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds(value: Option<String>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_attributes_use_defaults() {
        let config = MotionConfig::from_attributes(|_| None);

        assert_eq!(config, MotionConfig::default());
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.stagger_interval, Duration::from_millis(150));
        assert_eq!(config.confirmation, Duration::from_millis(3_000));
    }

    #[test]
    fn attributes_within_bounds_override_defaults() {
        let config = MotionConfig::from_attributes(lookup_from(&[
            ("reveal-threshold", "0.25"),
            ("stagger-interval-ms", " 90 "),
            ("confirmation-ms", "1500"),
        ]));

        assert_eq!(config.reveal_threshold, 0.25);
        assert_eq!(config.stagger_interval, Duration::from_millis(90));
        assert_eq!(config.confirmation, Duration::from_millis(1_500));
    }

    #[test]
    fn out_of_bounds_or_garbage_values_fall_back() {
        let config = MotionConfig::from_attributes(lookup_from(&[
            ("reveal-threshold", "1.5"),
            ("reveal-duration-ms", "-3"),
            ("stagger-interval-ms", "fast"),
            ("confirmation-ms", "10"),
        ]));

        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn reduced_motion_zeroes_animations_but_keeps_confirmation() {
        let config = MotionConfig::default().reduced();

        assert_eq!(config.reveal_duration, Duration::ZERO);
        assert_eq!(config.stagger_interval, Duration::ZERO);
        assert_eq!(config.skill_fill_delay, Duration::ZERO);
        assert_eq!(config.confirmation, Duration::from_millis(DEFAULT_CONFIRMATION_MS));
        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
    }

    #[test]
    fn log_level_parsing_is_case_insensitive_with_default() {
        assert_eq!(parse_log_level(Some("DEBUG".into()), Level::Info), Level::Debug);
        assert_eq!(parse_log_level(Some("verbose".into()), Level::Info), Level::Info);
        assert_eq!(parse_log_level(None, Level::Warn), Level::Warn);
    }

    #[test]
    fn css_millis_formats_whole_milliseconds() {
        assert_eq!(css_millis(Duration::from_millis(1_500)), "1500ms");
        assert_eq!(css_millis(Duration::ZERO), "0ms");
    }
}
