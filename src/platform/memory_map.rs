//! Backup RAM location
//!
//! ```text
//! [Backup registers]  0x4004_1000 - 0x4004_1100 (256 B)
//!   word 0..=62   settings record
//!   word 63       check word
//! ```

use radio_settings_core::settings::REGION_SIZE;

/// Base address of the battery-backed registers
pub const BACKUP_RAM_BASE: usize = 0x4004_1000;

/// Capacity of the battery-backed registers in bytes
pub const BACKUP_RAM_SIZE: usize = 256;

// The settings image must fill the backup registers exactly
const _: () = assert!(REGION_SIZE == BACKUP_RAM_SIZE);
