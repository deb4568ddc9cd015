//! Valid ranges, reset values and sentinels for every stored setting

use crate::range::RangeGuard;

/// Tuned frequency substituted for an invalid stored value (Hz)
pub const TUNED_FREQUENCY_RESET_HZ: i64 = 100_000_000;

/// Lowest frequency the RF front end can tune (Hz)
pub const TUNING_MIN_HZ: i64 = 1_000_000;

/// Highest frequency the RF front end can tune (Hz)
pub const TUNING_MAX_HZ: i64 = 7_200_000_000;

/// Default tuning bounds; boards with other front ends override them
pub const TUNING_RANGE: RangeGuard<i64> =
    RangeGuard::new(TUNING_MIN_HZ, TUNING_MAX_HZ, TUNED_FREQUENCY_RESET_HZ);

/// Reference clock correction (parts per billion)
pub const CORRECTION_PPB: RangeGuard<i32> = RangeGuard::new(-99_000, 99_000, 0);

/// Tone mix ratio (percent)
pub const TONE_MIX: RangeGuard<i32> = RangeGuard::new(10, 99, 20);

/// AFSK mark tone (Hz)
pub const AFSK_MARK: RangeGuard<i32> = RangeGuard::new(1, 4000, 1200);

/// AFSK space tone (Hz)
pub const AFSK_SPACE: RangeGuard<i32> = RangeGuard::new(1, 4000, 2200);

/// Modem baud rate
pub const MODEM_BAUDRATE: RangeGuard<i32> = RangeGuard::new(50, 9600, 1200);

/// Modem message repeat count
pub const MODEM_REPEAT: RangeGuard<i32> = RangeGuard::new(1, 99, 5);

/// Clock output reset frequency (kHz)
pub const CLKOUT_FREQUENCY_RESET: u32 = 10_000;

/// Clock output frequency (kHz), stored inside the UI configuration word
pub const CLKOUT_FREQUENCY: RangeGuard<u32> = RangeGuard::new(10, 60_000, CLKOUT_FREQUENCY_RESET);

/// Stored modem bandwidth; kept in the record but not range-checked
pub const MODEM_BANDWIDTH_DEFAULT: i32 = 15_000;

/// Sentinel stored next to a valid touch calibration
pub const TOUCH_CALIBRATION_MAGIC: u32 = 0x074A_F82F;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_values_lie_within_their_ranges() {
        assert!(TUNING_RANGE.contains(TUNING_RANGE.reset()));
        assert!(CORRECTION_PPB.contains(CORRECTION_PPB.reset()));
        assert!(TONE_MIX.contains(TONE_MIX.reset()));
        assert!(AFSK_MARK.contains(AFSK_MARK.reset()));
        assert!(AFSK_SPACE.contains(AFSK_SPACE.reset()));
        assert!(MODEM_BAUDRATE.contains(MODEM_BAUDRATE.reset()));
        assert!(MODEM_REPEAT.contains(MODEM_REPEAT.reset()));
        assert!(CLKOUT_FREQUENCY.contains(CLKOUT_FREQUENCY.reset()));
    }

    #[test]
    fn test_clkout_range_fits_sixteen_bits() {
        assert!(CLKOUT_FREQUENCY.maximum() <= u16::MAX as u32);
    }
}
