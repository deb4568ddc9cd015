//! Packed UI/hardware configuration word
//!
//! One 32-bit cell shared by both cores. The layout is a fixed contract:
//!
//! ```text
//! bit  31 30 29 28 27 26 25 24 23 22 21 20 | 19 ........ 4 | 3 | 2 1 0
//!      -------- boolean flags (UiFlags) ---   clkout kHz    -   backlight
//! ```
//!
//! Bit 3 is unused and preserved by every write. All setters are
//! read-modify-write on the whole word.

use super::limits::{CLKOUT_FREQUENCY, CLKOUT_FREQUENCY_RESET};
use crate::bitfield::BitField;
use bitflags::bitflags;

/// Backlight timer index (0 = disabled, 1..=7 = table entry)
pub const BACKLIGHT_TIMER: BitField = BitField::new(0, 3);

/// Clock output frequency in kHz
pub const CLKOUT_FREQUENCY_FIELD: BitField = BitField::new(4, 16);

/// Backlight timeout in seconds for indices 1..=7
pub const BACKLIGHT_TIMER_SECONDS: [u32; 7] = [5, 15, 30, 60, 180, 300, 600];

bitflags! {
    /// Boolean options of the configuration word
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct UiFlags: u32 {
        /// Show the return icon in touchscreen menus
        const SHOW_RETURN_ICON = 1 << 20;
        /// Load the last saved app settings when an app starts
        const LOAD_APP_SETTINGS = 1 << 21;
        /// Save app settings when an app closes
        const SAVE_APP_SETTINGS = 1 << 22;
        /// Show enlarged QR codes
        const BIGGER_QR_CODE = 1 << 23;
        /// Ignore the touchscreen
        const DISABLE_TOUCHSCREEN = 1 << 24;
        /// Hide the clock on the home screen
        const HIDE_CLOCK = 1 << 25;
        /// Show the date next to the clock
        const CLOCK_WITH_DATE = 1 << 26;
        /// Drive the clock output pin
        const CLKOUT_ENABLED = 1 << 27;
        /// Mute the speaker
        const SPEAKER_DISABLED = 1 << 28;
        /// Stealth mode
        const STEALTH_MODE = 1 << 29;
        /// Require login at boot
        const LOGIN_REQUIRED = 1 << 30;
        /// Show the splash screen at boot
        const SHOW_SPLASH = 1 << 31;
    }
}

// Subfields sit below the flags without overlapping each other
const _: () = assert!(
    BACKLIGHT_TIMER.offset() + BACKLIGHT_TIMER.width() <= CLKOUT_FREQUENCY_FIELD.offset()
);
const _: () = assert!(
    CLKOUT_FREQUENCY_FIELD.offset() + CLKOUT_FREQUENCY_FIELD.width()
        <= UiFlags::all().bits().trailing_zeros()
);
const _: () = assert!(BACKLIGHT_TIMER_SECONDS.len() == BACKLIGHT_TIMER.max_value() as usize);

/// The packed configuration word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiConfig(u32);

impl UiConfig {
    /// Factory configuration: splash shown, speaker muted, clock output at
    /// its reset frequency, backlight timer at its longest setting
    pub const DEFAULT: Self = Self(
        BACKLIGHT_TIMER.set(
            CLKOUT_FREQUENCY_FIELD.set(
                UiFlags::SHOW_SPLASH.union(UiFlags::SPEAKER_DISABLED).bits(),
                CLKOUT_FREQUENCY_RESET,
            ),
            7,
        ),
    );

    /// Wrap a raw word
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw word
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The boolean flags currently set
    pub fn flags(self) -> UiFlags {
        UiFlags::from_bits_truncate(self.0)
    }

    /// Test a single flag
    pub fn flag(self, flag: UiFlags) -> bool {
        UiFlags::from_bits_retain(self.0).contains(flag)
    }

    /// Clear `flag`, then set it again if `value` is true
    pub fn set_flag(&mut self, flag: UiFlags, value: bool) {
        let mut flags = UiFlags::from_bits_retain(self.0);
        flags.set(flag, value);
        self.0 = flags.bits();
    }

    /// Raw backlight timer index (0..=7)
    pub fn backlight_index(self) -> u8 {
        BACKLIGHT_TIMER.get(self.0) as u8
    }

    /// Backlight timeout in seconds, `None` when the timer is disabled
    pub fn backlight_timer(self) -> Option<u32> {
        match self.backlight_index() {
            0 => None,
            index => BACKLIGHT_TIMER_SECONDS.get(usize::from(index) - 1).copied(),
        }
    }

    /// Store a backlight timer index; only the low three bits are kept
    pub fn set_backlight_timer(&mut self, index: u32) {
        self.0 = BACKLIGHT_TIMER.set(self.0, index);
    }

    /// Clock output subfield exactly as stored, without validation
    pub fn peek_clkout_frequency(self) -> u32 {
        CLKOUT_FREQUENCY_FIELD.get(self.0)
    }

    /// Clock output frequency in kHz
    ///
    /// An out-of-range subfield is rewritten to the reset value in place
    /// before it is returned; no other bit of the word changes.
    pub fn clkout_frequency(&mut self) -> u32 {
        let mut frequency = self.peek_clkout_frequency();
        if CLKOUT_FREQUENCY.reset_if_outside(&mut frequency) {
            self.0 = CLKOUT_FREQUENCY_FIELD.set(self.0, frequency);
        }
        frequency
    }

    /// Clip `frequency` into range and store it in the subfield
    pub fn set_clkout_frequency(&mut self, frequency: u32) {
        self.0 = CLKOUT_FREQUENCY_FIELD.set(self.0, CLKOUT_FREQUENCY.clip(frequency));
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_layout() {
        assert_eq!((BACKLIGHT_TIMER.offset(), BACKLIGHT_TIMER.width()), (0, 3));
        assert_eq!(
            (CLKOUT_FREQUENCY_FIELD.offset(), CLKOUT_FREQUENCY_FIELD.width()),
            (4, 16)
        );
        assert_eq!(UiFlags::all().bits().trailing_zeros(), 20);
        // Bit 3 belongs to nobody
        assert_eq!(
            (BACKLIGHT_TIMER.mask() | CLKOUT_FREQUENCY_FIELD.mask() | UiFlags::all().bits()) & (1 << 3),
            0
        );
    }

    #[test]
    fn test_default_word() {
        assert_eq!(
            UiConfig::DEFAULT.bits(),
            (1 << 31) | (1 << 28) | (10_000 << 4) | 7
        );
        assert_eq!(
            UiConfig::DEFAULT.flags(),
            UiFlags::SHOW_SPLASH | UiFlags::SPEAKER_DISABLED
        );
    }

    #[test]
    fn test_flags_are_independent() {
        let patterns = [0u32, u32::MAX, 0xA5A5_A5A5, UiConfig::DEFAULT.bits()];

        for start in patterns {
            for flag in UiFlags::all().iter() {
                for value in [false, true] {
                    let mut config = UiConfig::from_bits(start);
                    config.set_flag(flag, value);

                    assert_eq!(config.flag(flag), value);
                    assert_eq!(
                        config.bits() & !flag.bits(),
                        start & !flag.bits(),
                        "setting {:?} disturbed other bits",
                        flag
                    );
                }
            }
        }
    }

    #[test]
    fn test_flags_pairwise() {
        for a in UiFlags::all().iter() {
            for b in UiFlags::all().iter() {
                if a == b {
                    continue;
                }
                let mut config = UiConfig::from_bits(0);
                config.set_flag(b, true);
                config.set_flag(a, true);
                config.set_flag(a, false);
                assert!(config.flag(b));
                assert!(!config.flag(a));
            }
        }
    }

    #[test]
    fn test_backlight_mapping() {
        let mut config = UiConfig::from_bits(0);
        assert_eq!(config.backlight_timer(), None);

        let expected = [5, 15, 30, 60, 180, 300, 600];
        for (index, seconds) in (1u32..=7).zip(expected) {
            config.set_backlight_timer(index);
            assert_eq!(config.backlight_timer(), Some(seconds));
        }
    }

    #[test]
    fn test_backlight_setter_keeps_low_bits_only() {
        let mut config = UiConfig::from_bits(0xFFFF_FFF8);
        config.set_backlight_timer(0b1010);
        assert_eq!(config.backlight_index(), 0b010);
        assert_eq!(config.bits() & !0b111, 0xFFFF_FFF8);
    }

    #[test]
    fn test_clkout_self_heal() {
        let start = UiConfig::DEFAULT.bits();
        let mut config = UiConfig::from_bits(CLKOUT_FREQUENCY_FIELD.set(start, 0));

        assert_eq!(config.peek_clkout_frequency(), 0);
        assert_eq!(config.clkout_frequency(), 10_000);
        assert_eq!(config.peek_clkout_frequency(), 10_000);
        assert_eq!(
            config.bits() & !CLKOUT_FREQUENCY_FIELD.mask(),
            start & !CLKOUT_FREQUENCY_FIELD.mask()
        );
    }

    #[test]
    fn test_clkout_above_range_heals() {
        let mut config = UiConfig::from_bits(CLKOUT_FREQUENCY_FIELD.set(0, 0xFFFF));
        assert_eq!(config.clkout_frequency(), 10_000);
    }

    #[test]
    fn test_clkout_setter_clips() {
        let mut config = UiConfig::from_bits(u32::MAX);
        config.set_clkout_frequency(100_000);
        assert_eq!(config.clkout_frequency(), 60_000);

        config.set_clkout_frequency(1);
        assert_eq!(config.clkout_frequency(), 10);
        assert_eq!(config.bits() | CLKOUT_FREQUENCY_FIELD.mask(), u32::MAX);
    }

    #[test]
    fn test_clkout_in_range_read_is_pure() {
        let mut config = UiConfig::DEFAULT;
        config.set_clkout_frequency(25_000);
        let before = config;
        assert_eq!(config.clkout_frequency(), 25_000);
        assert_eq!(config, before);
    }
}
