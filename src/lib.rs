#![cfg_attr(not(test), no_std)]

//! radio_settings - Persistent settings store for the radio's backup RAM
//!
//! This library binds the pure settings logic of `radio_settings_core` to
//! the battery-backed register file of the LPC43xx, and provides a mock
//! region for host testing.

// Platform abstraction layer (backup RAM access)
pub mod platform;

// Logging macros
pub mod core;

// Build-time configuration
pub mod config;

// Settings manager
pub mod settings;

pub use radio_settings_core::settings::{
    CacheSource, RegionImage, SettingsCache, SettingsRecord, TouchCalibration, UiConfig, UiFlags,
};
pub use radio_settings_core::RangeGuard;
