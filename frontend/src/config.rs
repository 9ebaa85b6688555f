//! Tunable timings and storage keys.
//!
//! Defaults match the shipped site. Two knobs can be overridden at build time
//! with `BIMARZ_TRANSITION_MS` and `BIMARZ_RIPPLE_MS`.

pub const THEME_STORAGE_KEY: &str = "theme";
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Element id of the last slide's own scroll container.
pub const LAST_PAGE_CONTENT_ID: &str = "page-7-content";

pub const TOTAL_PAGES: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    pub total_pages: u8,
    pub transition_cooldown_ms: f64,
    pub wheel_debounce_ms: f64,
    pub swipe_threshold_px: f64,
    pub flythrough_step_ms: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            total_pages: TOTAL_PAGES,
            transition_cooldown_ms: 800.0,
            wheel_debounce_ms: 50.0,
            swipe_threshold_px: 50.0,
            flythrough_step_ms: 120.0,
        }
    }
}

impl NavConfig {
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(ms) = parse_ms(option_env!("BIMARZ_TRANSITION_MS")) {
            config.transition_cooldown_ms = ms;
        }
        config
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleConfig {
    /// Delay between the ripple starting and the theme actually flipping.
    pub flip_delay_ms: f64,
    pub duration_ms: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            flip_delay_ms: 150.0,
            duration_ms: 500.0,
        }
    }
}

impl RippleConfig {
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(ms) = parse_ms(option_env!("BIMARZ_RIPPLE_MS")) {
            config.duration_ms = ms;
            config.flip_delay_ms = config.flip_delay_ms.min(ms);
        }
        config
    }
}

fn parse_ms(raw: Option<&str>) -> Option<f64> {
    let value = raw?.trim().parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        log::warn!("Ignoring invalid timing override {:?}", raw);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ms_accepts_plain_numbers() {
        assert_eq!(parse_ms(Some("1200")), Some(1200.0));
        assert_eq!(parse_ms(Some(" 35.5 ")), Some(35.5));
    }

    #[test]
    fn parse_ms_rejects_garbage_and_negatives() {
        assert_eq!(parse_ms(None), None);
        assert_eq!(parse_ms(Some("fast")), None);
        assert_eq!(parse_ms(Some("-5")), None);
    }

    #[test]
    fn ripple_flip_happens_inside_the_ripple() {
        let config = RippleConfig::default();
        assert!(config.flip_delay_ms < config.duration_ms);
    }
}
