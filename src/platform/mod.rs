//! Platform abstraction layer
//!
//! This module provides backup region access for the supported targets.
//! The access traits themselves live in `radio_settings_core::traits`.

pub mod error;
pub mod memory_map;

// Platform implementations (feature-gated)
#[cfg(feature = "lpc43xx")]
pub mod lpc43xx;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use radio_settings_core::traits::{ClockCorrection, RegionRead, RegionWrite};
