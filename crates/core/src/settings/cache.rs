//! Working copy of the backup region
//!
//! [`SettingsCache`] holds one [`RegionImage`] and exposes a typed accessor
//! pair per setting. Accessors read and write the image's words at the
//! record's fixed offsets, so the flat word view and the typed view always
//! describe the same bytes.
//!
//! The cache only touches a backup region in [`SettingsCache::init`] and
//! [`SettingsCache::persist`]; everything else is plain memory access.
//!
//! # Validate-and-repair reads
//!
//! Getters of range-checked settings take `&mut self`: a stored value
//! outside its range is overwritten with the reset value before it is
//! returned. Setters saturate instead of rejecting. Use
//! [`SettingsCache::record`] for a read that never modifies the cache.

use super::calibration::TouchCalibration;
use super::limits::{
    AFSK_MARK, AFSK_SPACE, CORRECTION_PPB, MODEM_BAUDRATE, MODEM_REPEAT, TONE_MIX,
    TOUCH_CALIBRATION_MAGIC, TUNING_RANGE,
};
use super::record::{offset, word_index, SerialFormat, SettingsRecord, RECORD_SIZE};
use super::region::{RegionImage, DATA_WORDS};
use super::ui_config::{UiConfig, UiFlags};
use crate::range::RangeGuard;
use crate::traits::{ClockCorrection, RegionRead, RegionWrite};

/// Where the cache content came from at the last synchronization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheSource {
    /// Copied from a region that passed validation
    Region,
    /// Factory defaults
    Defaults,
}

/// In-memory settings mirror
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsCache {
    image: RegionImage,
    tuning: RangeGuard<i64>,
}

macro_rules! ui_flag_accessors {
    ($( $(#[$doc:meta])* $get:ident, $set:ident => $flag:ident; )*) => {
        $(
            $(#[$doc])*
            pub fn $get(&self) -> bool {
                self.ui_config().flag(UiFlags::$flag)
            }

            $(#[$doc])*
            pub fn $set(&mut self, value: bool) {
                let mut config = self.ui_config();
                config.set_flag(UiFlags::$flag, value);
                self.set_ui_config(config);
            }
        )*
    };
}

impl SettingsCache {
    /// Create a cache holding factory defaults
    pub fn new() -> Self {
        Self::with_tuning_range(TUNING_RANGE)
    }

    /// Create a cache for a front end with different tuning bounds
    ///
    /// The guard's reset value is also the default tuned frequency.
    pub fn with_tuning_range(tuning: RangeGuard<i64>) -> Self {
        let mut cache = Self {
            image: RegionImage::zeroed(),
            tuning,
        };
        cache.defaults();
        cache
    }

    /// Tuning bounds applied to the tuned frequency
    pub fn tuning_range(&self) -> RangeGuard<i64> {
        self.tuning
    }

    // ------------------------------------------------------------------
    // Synchronization
    // ------------------------------------------------------------------

    /// Load from `region` if its checksum holds, otherwise load defaults
    pub fn init<R: RegionRead + ?Sized>(&mut self, region: &R) -> CacheSource {
        if region.is_valid() {
            self.image = region.snapshot();
            CacheSource::Region
        } else {
            self.defaults();
            CacheSource::Defaults
        }
    }

    /// Replace the whole cache with factory defaults
    ///
    /// Does not touch any backup region.
    pub fn defaults(&mut self) {
        let record = SettingsRecord {
            tuned_frequency: self.tuning.reset(),
            ..SettingsRecord::DEFAULT
        };
        self.image = RegionImage::from_words(record.to_words());
    }

    /// Checksum the cache and copy it into `region`
    pub fn persist<W: RegionWrite + ?Sized>(&mut self, region: &mut W) {
        self.image.persist_to(region);
    }

    /// The cache as a region image
    pub fn image(&self) -> &RegionImage {
        &self.image
    }

    /// The cache's data words
    pub fn words(&self) -> &[u32; DATA_WORDS] {
        self.image.words()
    }

    /// Decode every field as stored, without validation or repair
    pub fn record(&self) -> SettingsRecord {
        SettingsRecord::from_words(self.image.words())
    }

    /// Overwrite the cache with `record`, zero-filling unused words
    ///
    /// Words past the record are left as they are.
    pub fn load_record(&mut self, record: &SettingsRecord) {
        let len = word_index(RECORD_SIZE);
        self.image.words_mut()[..len].copy_from_slice(&record.to_words()[..len]);
    }

    // ------------------------------------------------------------------
    // Raw word access
    // ------------------------------------------------------------------

    fn word(&self, byte_offset: usize) -> u32 {
        self.image.words()[word_index(byte_offset)]
    }

    fn set_word(&mut self, byte_offset: usize, value: u32) {
        self.image.words_mut()[word_index(byte_offset)] = value;
    }

    fn guarded_i32(&mut self, byte_offset: usize, guard: RangeGuard<i32>) -> i32 {
        let mut value = self.word(byte_offset) as i32;
        if guard.reset_if_outside(&mut value) {
            self.set_word(byte_offset, value as u32);
        }
        value
    }

    fn set_clipped_i32(&mut self, byte_offset: usize, guard: RangeGuard<i32>, value: i32) {
        self.set_word(byte_offset, guard.clip(value) as u32);
    }

    // ------------------------------------------------------------------
    // Range-checked scalars
    // ------------------------------------------------------------------

    /// Tuned frequency in Hz
    pub fn tuned_frequency(&mut self) -> i64 {
        let low = u64::from(self.word(offset::TUNED_FREQUENCY));
        let high = u64::from(self.word(offset::TUNED_FREQUENCY + 4));
        let mut value = ((high << 32) | low) as i64;
        if self.tuning.reset_if_outside(&mut value) {
            self.store_tuned_frequency(value);
        }
        value
    }

    /// Set the tuned frequency, saturating to the tuning bounds
    pub fn set_tuned_frequency(&mut self, hz: i64) {
        let clipped = self.tuning.clip(hz);
        self.store_tuned_frequency(clipped);
    }

    fn store_tuned_frequency(&mut self, hz: i64) {
        let bits = hz as u64;
        self.set_word(offset::TUNED_FREQUENCY, bits as u32);
        self.set_word(offset::TUNED_FREQUENCY + 4, (bits >> 32) as u32);
    }

    /// Reference clock correction in parts per billion
    pub fn correction_ppb(&mut self) -> i32 {
        self.guarded_i32(offset::CORRECTION_PPB, CORRECTION_PPB)
    }

    /// Set the correction and forward the clipped value to `clock`
    pub fn set_correction_ppb<C: ClockCorrection + ?Sized>(&mut self, ppb: i32, clock: &mut C) {
        let clipped = CORRECTION_PPB.clip(ppb);
        self.set_word(offset::CORRECTION_PPB, clipped as u32);
        clock.set_reference_ppb(clipped);
    }

    /// Tone mix ratio
    pub fn tone_mix(&mut self) -> i32 {
        self.guarded_i32(offset::TONE_MIX, TONE_MIX)
    }

    pub fn set_tone_mix(&mut self, value: i32) {
        self.set_clipped_i32(offset::TONE_MIX, TONE_MIX, value);
    }

    /// AFSK mark tone in Hz
    pub fn afsk_mark_freq(&mut self) -> i32 {
        self.guarded_i32(offset::AFSK_MARK, AFSK_MARK)
    }

    pub fn set_afsk_mark(&mut self, hz: i32) {
        self.set_clipped_i32(offset::AFSK_MARK, AFSK_MARK, hz);
    }

    /// AFSK space tone in Hz
    pub fn afsk_space_freq(&mut self) -> i32 {
        self.guarded_i32(offset::AFSK_SPACE, AFSK_SPACE)
    }

    pub fn set_afsk_space(&mut self, hz: i32) {
        self.set_clipped_i32(offset::AFSK_SPACE, AFSK_SPACE, hz);
    }

    pub fn modem_baudrate(&mut self) -> i32 {
        self.guarded_i32(offset::MODEM_BAUDRATE, MODEM_BAUDRATE)
    }

    pub fn set_modem_baudrate(&mut self, baud: i32) {
        self.set_clipped_i32(offset::MODEM_BAUDRATE, MODEM_BAUDRATE, baud);
    }

    /// Number of times a modem message is repeated (1..=99)
    pub fn modem_repeat(&mut self) -> u8 {
        self.guarded_i32(offset::MODEM_REPEAT, MODEM_REPEAT) as u8
    }

    pub fn set_modem_repeat(&mut self, count: u32) {
        let count = i32::try_from(count).unwrap_or(i32::MAX);
        self.set_clipped_i32(offset::MODEM_REPEAT, MODEM_REPEAT, count);
    }

    // ------------------------------------------------------------------
    // Touch calibration
    // ------------------------------------------------------------------

    /// Touch calibration
    ///
    /// If the sentinel does not match, the default calibration and the
    /// sentinel are written first.
    pub fn touch_calibration(&mut self) -> TouchCalibration {
        if self.word(offset::TOUCH_CALIBRATION_MAGIC) != TOUCH_CALIBRATION_MAGIC {
            self.set_touch_calibration(&TouchCalibration::default());
        }
        self.record().touch_calibration
    }

    /// Store a calibration and mark it valid
    pub fn set_touch_calibration(&mut self, calibration: &TouchCalibration) {
        let bytes = calibration.to_bytes();
        for (i, chunk) in bytes.chunks_exact(4).enumerate() {
            let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            self.set_word(offset::TOUCH_CALIBRATION + i * 4, word);
        }
        self.set_word(offset::TOUCH_CALIBRATION_MAGIC, TOUCH_CALIBRATION_MAGIC);
    }

    // ------------------------------------------------------------------
    // Unvalidated passthroughs
    // ------------------------------------------------------------------

    pub fn serial_format(&self) -> SerialFormat {
        SerialFormat::from_word(self.word(offset::SERIAL_FORMAT))
    }

    pub fn set_serial_format(&mut self, format: SerialFormat) {
        self.set_word(offset::SERIAL_FORMAT, format.to_word());
    }

    pub fn pocsag_last_address(&self) -> u32 {
        self.word(offset::POCSAG_LAST_ADDRESS)
    }

    pub fn set_pocsag_last_address(&mut self, address: u32) {
        self.set_word(offset::POCSAG_LAST_ADDRESS, address);
    }

    pub fn pocsag_ignore_address(&self) -> u32 {
        self.word(offset::POCSAG_IGNORE_ADDRESS)
    }

    pub fn set_pocsag_ignore_address(&mut self, address: u32) {
        self.set_word(offset::POCSAG_IGNORE_ADDRESS, address);
    }

    /// Hardware configuration byte (CPLD selection)
    pub fn hardware_config(&self) -> u8 {
        self.word(offset::HARDWARE_CONFIG) as u8
    }

    /// Replace the low byte; the upper bytes of the word are kept
    pub fn set_hardware_config(&mut self, value: u8) {
        let word = self.word(offset::HARDWARE_CONFIG);
        self.set_word(offset::HARDWARE_CONFIG, (word & !0xFF) | u32::from(value));
    }

    // ------------------------------------------------------------------
    // UI configuration word
    // ------------------------------------------------------------------

    /// The configuration word as stored
    pub fn ui_config(&self) -> UiConfig {
        UiConfig::from_bits(self.word(offset::UI_CONFIG))
    }

    fn set_ui_config(&mut self, config: UiConfig) {
        self.set_word(offset::UI_CONFIG, config.bits());
    }

    ui_flag_accessors! {
        /// Return icon in touchscreen menus
        show_gui_return_icon, set_gui_return_icon => SHOW_RETURN_ICON;
        /// Load last saved app settings on app start
        load_app_settings, set_load_app_settings => LOAD_APP_SETTINGS;
        /// Save app settings on app close
        save_app_settings, set_save_app_settings => SAVE_APP_SETTINGS;
        /// Enlarged QR codes
        show_bigger_qr_code, set_show_bigger_qr_code => BIGGER_QR_CODE;
        /// Touchscreen input ignored
        disable_touchscreen, set_disable_touchscreen => DISABLE_TOUCHSCREEN;
        /// Clock hidden on the home screen
        hide_clock, set_clock_hidden => HIDE_CLOCK;
        /// Date shown with the clock
        clock_with_date, set_clock_with_date => CLOCK_WITH_DATE;
        /// Clock output pin driven
        clkout_enabled, set_clkout_enabled => CLKOUT_ENABLED;
        /// Speaker muted
        speaker_disabled, set_speaker_disabled => SPEAKER_DISABLED;
        /// Stealth mode
        stealth_mode, set_stealth_mode => STEALTH_MODE;
        /// Login required at boot
        login_required, set_login_required => LOGIN_REQUIRED;
        /// Splash screen at boot
        show_splash, set_show_splash => SHOW_SPLASH;
    }

    /// Backlight timeout in seconds, `None` when disabled
    pub fn backlight_timer(&self) -> Option<u32> {
        self.ui_config().backlight_timer()
    }

    /// Store a backlight timer index (0 disables, 1..=7 select a timeout)
    pub fn set_backlight_timer(&mut self, index: u32) {
        let mut config = self.ui_config();
        config.set_backlight_timer(index);
        self.set_ui_config(config);
    }

    /// Clock output frequency in kHz, repaired in place if out of range
    pub fn clkout_freq(&mut self) -> u32 {
        let mut config = self.ui_config();
        let frequency = config.clkout_frequency();
        self.set_ui_config(config);
        frequency
    }

    pub fn set_clkout_freq(&mut self, frequency: u32) {
        let mut config = self.ui_config();
        config.set_clkout_frequency(frequency);
        self.set_ui_config(config);
    }
}

impl Default for SettingsCache {
    fn default() -> Self {
        Self::new()
    }
}
