//! Settings store wiring
//!
//! Binds the pure [`SettingsCache`](radio_settings_core::SettingsCache) to a
//! backup region and a clock-correction sink.

pub mod manager;

pub use manager::{SettingsManager, SyncState};
