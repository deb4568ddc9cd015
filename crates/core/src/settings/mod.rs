//! Backup-RAM settings store
//!
//! This module provides the byte layout, checksum and cache for the settings
//! shared by both cores. Platform-specific region access (memory-mapped
//! backup RAM, mocks) is in the root crate.

pub mod cache;
pub mod calibration;
pub mod crc;
pub mod limits;
pub mod record;
pub mod region;
pub mod ui_config;

pub use cache::{CacheSource, SettingsCache};
pub use calibration::{CalibrationPoint, TouchCalibration};
pub use crc::{calculate_crc32, checksum_words, RegionChecksum};
pub use record::{BitOrder, Parity, SerialFormat, SettingsRecord, RECORD_SIZE};
pub use region::{RegionImage, CHECK_WORD_INDEX, DATA_WORDS, REGION_SIZE, REGION_WORDS};
pub use ui_config::{UiConfig, UiFlags, BACKLIGHT_TIMER_SECONDS};
