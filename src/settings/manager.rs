//! Settings manager
//!
//! Owns the backup region handle, the clock-correction sink and the cache.
//! Constructed once at startup; the application unit gets a manager over a
//! writable region, the peer unit one over a read-only region handle.
//!
//! # Example
//!
//! ```
//! use radio_settings::config::SettingsConfig;
//! use radio_settings::platform::mock::MockBackupRam;
//! use radio_settings::settings::{SettingsManager, SyncState};
//!
//! let ram = MockBackupRam::new();
//! let mut manager = SettingsManager::new(ram.writer(), (), &SettingsConfig::default());
//!
//! manager.init();
//! assert_eq!(manager.state(), SyncState::Defaults);
//!
//! manager.settings_mut().set_tone_mix(50);
//! manager.persist();
//! assert!(!manager.is_dirty());
//! ```

use crate::config::SettingsConfig;
use radio_settings_core::settings::{CacheSource, SettingsCache};
use radio_settings_core::traits::{ClockCorrection, RegionRead, RegionWrite};

/// Synchronization state of the cache with respect to the region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// `init` has not run yet; the cache holds defaults
    Uninitialized,
    /// Cache was loaded from a valid region
    Loaded,
    /// Cache holds factory defaults
    Defaults,
}

impl From<CacheSource> for SyncState {
    fn from(source: CacheSource) -> Self {
        match source {
            CacheSource::Region => SyncState::Loaded,
            CacheSource::Defaults => SyncState::Defaults,
        }
    }
}

/// Settings cache bound to a backup region and a clock-correction sink
pub struct SettingsManager<R, C = ()> {
    region: R,
    clock: C,
    cache: SettingsCache,
    state: SyncState,
    dirty: bool,
}

impl<R: RegionRead, C: ClockCorrection> SettingsManager<R, C> {
    /// Create a manager; the cache holds defaults until [`Self::init`]
    pub fn new(region: R, clock: C, config: &SettingsConfig) -> Self {
        Self {
            region,
            clock,
            cache: SettingsCache::with_tuning_range(config.tuning),
            state: SyncState::Uninitialized,
            dirty: false,
        }
    }

    /// Load the cache from the region, or defaults if it fails validation
    ///
    /// Defaults are not written back; the region keeps its content until
    /// the next [`Self::persist`].
    pub fn init(&mut self) -> CacheSource {
        let source = self.cache.init(&self.region);
        match source {
            CacheSource::Region => crate::log_info!("Settings loaded from backup RAM"),
            CacheSource::Defaults => {
                crate::log_warn!("Backup RAM failed validation, using defaults")
            }
        }
        self.state = source.into();
        self.dirty = false;
        source
    }

    /// Reset the cache to factory defaults without touching the region
    pub fn defaults(&mut self) {
        crate::log_info!("Settings reset to defaults");
        self.cache.defaults();
        self.state = SyncState::Defaults;
        self.dirty = true;
    }

    /// Current synchronization state
    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Check if the cache changed since the last init or persist
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read-only view of the cache
    pub fn settings(&self) -> &SettingsCache {
        &self.cache
    }

    /// Mutable view of the cache; marks it dirty
    pub fn settings_mut(&mut self) -> &mut SettingsCache {
        self.dirty = true;
        &mut self.cache
    }

    /// Store the frequency correction and forward it to the clock generator
    pub fn set_correction_ppb(&mut self, ppb: i32) {
        crate::log_trace!("Clock correction {} ppb", ppb);
        self.cache.set_correction_ppb(ppb, &mut self.clock);
        self.dirty = true;
    }

    /// Clock-correction sink
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Release the region handle, the sink and the cache
    pub fn into_parts(self) -> (R, C, SettingsCache) {
        (self.region, self.clock, self.cache)
    }
}

impl<R: RegionWrite, C: ClockCorrection> SettingsManager<R, C> {
    /// Checksum the cache and copy it to the region
    pub fn persist(&mut self) {
        self.cache.persist(&mut self.region);
        crate::log_debug!("Settings persisted to backup RAM");
        self.dirty = false;
    }
}
