//! LPC43xx platform implementation
//!
//! Both Cortex cores of the LPC43xx see the battery-backed registers at the
//! same address. The core that owns the settings takes the writer handle
//! once at startup; the other core only ever gets a reader.

mod backup_ram;

pub use backup_ram::{BackupRam, BackupRamReader};
