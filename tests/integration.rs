//! Host integration tests for the settings store
//!
//! Exercises the manager against the mock backup RAM the way the two cores
//! use it: the application unit owns the writer, the peer unit reads.

use proptest::prelude::*;
use radio_settings::config::SettingsConfig;
use radio_settings::platform::mock::{MockBackupRam, MockBackupRamWriter, MockClockCorrection};
use radio_settings::platform::{PlatformError, RegionRead};
use radio_settings::settings::{SettingsManager, SyncState};
use radio_settings::{CacheSource, RegionImage, SettingsCache, SettingsRecord, TouchCalibration};
use radio_settings_core::settings::limits::TUNED_FREQUENCY_RESET_HZ;
use radio_settings_core::settings::record::word_index;
use radio_settings_core::settings::{CHECK_WORD_INDEX, DATA_WORDS, RECORD_SIZE, REGION_SIZE};

fn boot(ram: &MockBackupRam) -> SettingsManager<MockBackupRamWriter<'_>> {
    let mut manager = SettingsManager::new(ram.writer(), (), &SettingsConfig::default());
    manager.init();
    manager
}

#[test]
fn fresh_device_boots_with_defaults() {
    let ram = MockBackupRam::new();
    let mut manager = boot(&ram);

    assert_eq!(manager.state(), SyncState::Defaults);
    let settings = manager.settings_mut();
    assert_eq!(settings.tuned_frequency(), TUNED_FREQUENCY_RESET_HZ);
    assert_eq!(settings.tone_mix(), 20);
    assert_eq!(settings.afsk_mark_freq(), 1200);
    assert_eq!(settings.afsk_space_freq(), 2200);
    assert_eq!(settings.modem_baudrate(), 1200);
    assert_eq!(settings.modem_repeat(), 5);
    assert_eq!(settings.clkout_freq(), 10_000);
    assert_eq!(settings.backlight_timer(), Some(600));
    assert!(settings.show_splash());
    assert!(settings.speaker_disabled());
    assert!(!settings.show_gui_return_icon());
    assert!(!settings.stealth_mode());
}

#[test]
fn defaults_are_not_written_back() {
    let ram = MockBackupRam::new();
    let manager = boot(&ram);

    assert_eq!(manager.state(), SyncState::Defaults);
    assert_eq!(ram.image_write_count(), 0);
    assert_eq!(ram.contents(), RegionImage::zeroed());
    assert!(!ram.is_valid());
}

#[test]
fn settings_survive_reboot() {
    let ram = MockBackupRam::new();
    {
        let mut manager = boot(&ram);
        let settings = manager.settings_mut();
        settings.set_tuned_frequency(433_920_000);
        settings.set_afsk_mark(1300);
        settings.set_clock_hidden(true);
        settings.set_backlight_timer(4);
        settings.set_clkout_freq(25_000);
        settings.set_pocsag_last_address(0x0012_3456);
        manager.persist();
    }

    let mut manager = boot(&ram);
    assert_eq!(manager.state(), SyncState::Loaded);
    let settings = manager.settings_mut();
    assert_eq!(settings.tuned_frequency(), 433_920_000);
    assert_eq!(settings.afsk_mark_freq(), 1300);
    assert!(settings.hide_clock());
    assert_eq!(settings.backlight_timer(), Some(60));
    assert_eq!(settings.clkout_freq(), 25_000);
    assert_eq!(settings.pocsag_last_address(), 0x0012_3456);
}

#[test]
fn corrupted_region_falls_back_to_defaults() {
    let ram = MockBackupRam::new();
    {
        let mut manager = boot(&ram);
        manager.settings_mut().set_tone_mix(80);
        manager.persist();
    }
    assert!(ram.is_valid());

    ram.inject_corruption(24, 1 << 7).unwrap();

    let mut manager = boot(&ram);
    assert_eq!(manager.state(), SyncState::Defaults);
    assert_eq!(manager.settings_mut().tone_mix(), 20);
}

#[test]
fn corrupted_check_word_falls_back_to_defaults() {
    let ram = MockBackupRam::new();
    boot(&ram).persist();

    ram.inject_corruption(CHECK_WORD_INDEX, 0x8000_0000).unwrap();
    assert_eq!(boot(&ram).state(), SyncState::Defaults);
}

#[test]
fn power_loss_during_persist_falls_back_to_defaults() {
    let ram = MockBackupRam::new();
    {
        let mut manager = boot(&ram);
        manager.settings_mut().set_modem_baudrate(2400);
        manager.persist();
    }

    let mut manager = boot(&ram);
    manager.settings_mut().set_modem_baudrate(9600);
    ram.simulate_power_loss(DATA_WORDS / 2);
    manager.persist();
    drop(manager);

    let mut manager = boot(&ram);
    assert_eq!(manager.state(), SyncState::Defaults);
    assert_eq!(manager.settings_mut().modem_baudrate(), 1200);
}

#[test]
fn peer_reader_sees_owner_image() {
    let ram = MockBackupRam::new();
    let mut owner = boot(&ram);
    owner.settings_mut().set_stealth_mode(true);
    owner.settings_mut().set_touch_calibration(&TouchCalibration {
        a: 250,
        e: 330,
        ..TouchCalibration::default()
    });
    owner.persist();

    let mut peer = SettingsManager::new(ram.reader(), (), &SettingsConfig::default());
    assert_eq!(peer.init(), CacheSource::Region);
    assert!(peer.settings().stealth_mode());
    assert_eq!(peer.settings_mut().touch_calibration().a, 250);
    assert_eq!(peer.settings().image(), owner.settings().image());
}

#[test]
fn clock_correction_is_forwarded_and_persisted() {
    let ram = MockBackupRam::new();
    {
        let mut manager =
            SettingsManager::new(ram.writer(), MockClockCorrection::new(), &SettingsConfig::default());
        manager.init();
        manager.set_correction_ppb(-1500);
        assert_eq!(manager.clock().last_ppb(), Some(-1500));
        manager.persist();
    }

    let mut manager = boot(&ram);
    assert_eq!(manager.settings_mut().correction_ppb(), -1500);
}

#[test]
fn out_of_range_values_heal_after_reload() {
    let ram = MockBackupRam::new();
    {
        let mut manager = boot(&ram);
        manager.settings_mut().set_tone_mix(50);
        manager.persist();
    }

    // A stale value that passes the checksum but not the range
    let mut image = ram.contents();
    image.words_mut()[24] = 500;
    image.set_check_value(image.compute_check_value());
    let ram = MockBackupRam::with_image(&image);

    let mut manager = boot(&ram);
    assert_eq!(manager.state(), SyncState::Loaded);
    assert_eq!(manager.settings_mut().tone_mix(), 20);
    assert!(manager.is_dirty());
    manager.persist();
    assert_eq!(ram.contents().words()[24], 20);
}

#[test]
fn raw_dump_must_match_region_size() {
    assert_eq!(
        MockBackupRam::from_bytes(&[0u8; REGION_SIZE - 4]).err(),
        Some(PlatformError::RegionSize {
            expected: REGION_SIZE,
            actual: REGION_SIZE - 4,
        })
    );
}

#[test]
fn custom_tuning_range_applies() {
    let config = SettingsConfig::from_strings("50000000", "1000000000", "145000000");
    let ram = MockBackupRam::new();
    let mut manager = SettingsManager::new(ram.writer(), (), &config);
    manager.init();

    assert_eq!(manager.settings_mut().tuned_frequency(), 145_000_000);
    manager.settings_mut().set_tuned_frequency(2_400_000_000);
    assert_eq!(manager.settings_mut().tuned_frequency(), 1_000_000_000);
}

proptest! {
    #[test]
    fn persisted_image_reloads_unchanged(words in prop::array::uniform32(any::<u32>()), tail in prop::array::uniform31(any::<u32>())) {
        let mut data = [0u32; DATA_WORDS];
        data[..32].copy_from_slice(&words);
        data[32..].copy_from_slice(&tail);

        let ram = MockBackupRam::new();
        let mut cache = SettingsCache::new();
        let mut image = RegionImage::from_words(data);
        image.persist_to(&mut ram.writer());

        prop_assert_eq!(cache.init(&ram), CacheSource::Region);
        prop_assert_eq!(cache.words(), &data);
    }

    #[test]
    fn setters_never_store_out_of_range(tone in any::<i32>(), mark in any::<i32>(), baud in any::<i32>(), repeat in any::<u32>()) {
        let ram = MockBackupRam::new();
        let mut manager = boot(&ram);
        let settings = manager.settings_mut();
        settings.set_tone_mix(tone);
        settings.set_afsk_mark(mark);
        settings.set_modem_baudrate(baud);
        settings.set_modem_repeat(repeat);
        manager.persist();

        let record = boot(&ram).settings().record();
        prop_assert!((10..=99).contains(&record.tone_mix));
        prop_assert!((1..=4000).contains(&record.afsk_mark_freq));
        prop_assert!((50..=9600).contains(&record.modem_baudrate));
        prop_assert!((1..=99).contains(&record.modem_repeat));
    }

    #[test]
    fn typed_record_view_is_lossless(words in prop::array::uniform32(any::<u32>()), tail in prop::array::uniform31(any::<u32>())) {
        let mut data = [0u32; DATA_WORDS];
        data[..32].copy_from_slice(&words);
        data[32..].copy_from_slice(&tail);

        let len = word_index(RECORD_SIZE);
        let encoded = SettingsRecord::from_words(&data).to_words();
        prop_assert_eq!(&encoded[..len], &data[..len]);

        let mut image = RegionImage::from_words(data);
        image.set_check_value(image.compute_check_value());
        let mut cache = SettingsCache::new();
        cache.init(&image);
        let record = cache.record();
        cache.load_record(&record);
        prop_assert_eq!(cache.words(), &data);
    }
}
