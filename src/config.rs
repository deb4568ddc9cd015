//! Build-time configuration
//!
//! Boards with a different RF front end can override the tuning bounds at
//! build time through environment variables read by `build.rs`:
//!
//! - `RADIO_TUNING_MIN_HZ` - lowest tunable frequency
//! - `RADIO_TUNING_MAX_HZ` - highest tunable frequency
//! - `RADIO_TUNING_RESET_HZ` - tuned frequency after a reset
//!
//! Unset or unparsable values fall back to the built-in limits.

use radio_settings_core::settings::limits::{
    TUNED_FREQUENCY_RESET_HZ, TUNING_MAX_HZ, TUNING_MIN_HZ, TUNING_RANGE,
};
use radio_settings_core::RangeGuard;

/// Settings store configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsConfig {
    /// Tuning bounds and reset frequency of the RF front end
    pub tuning: RangeGuard<i64>,
}

impl SettingsConfig {
    /// Configuration from the build environment
    pub fn from_build_env() -> Self {
        Self::from_strings(
            env!("RADIO_TUNING_MIN_HZ"),
            env!("RADIO_TUNING_MAX_HZ"),
            env!("RADIO_TUNING_RESET_HZ"),
        )
    }

    /// Configuration from textual bounds
    ///
    /// Each empty or unparsable value takes its built-in default. If the
    /// result is inconsistent (min above max, or reset outside the bounds)
    /// the built-in range is used as a whole.
    pub fn from_strings(min: &str, max: &str, reset: &str) -> Self {
        let min = min.trim().parse::<i64>().unwrap_or(TUNING_MIN_HZ);
        let max = max.trim().parse::<i64>().unwrap_or(TUNING_MAX_HZ);
        let reset = reset.trim().parse::<i64>().unwrap_or(TUNED_FREQUENCY_RESET_HZ);

        if min > max || reset < min || reset > max {
            crate::log_warn!("Inconsistent tuning range, using built-in limits");
            return Self::default();
        }

        Self {
            tuning: RangeGuard::new(min, max, reset),
        }
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            tuning: TUNING_RANGE,
        }
    }
}
