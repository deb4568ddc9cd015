//! Mock platform implementation for testing
//!
//! This module provides an in-memory backup region that can be used for
//! testing without actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```
//! use radio_settings::platform::mock::MockBackupRam;
//! use radio_settings::platform::RegionRead;
//!
//! let ram = MockBackupRam::new();
//! // A fresh all-zero region never passes validation
//! assert!(!ram.is_valid());
//! ```

#![cfg(any(test, feature = "mock"))]

mod backup_ram;

pub use backup_ram::{MockBackupRam, MockBackupRamReader, MockBackupRamWriter};
pub use radio_settings_core::traits::MockClockCorrection;
