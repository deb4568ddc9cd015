//! Memory-mapped backup registers
//!
//! All accesses are volatile word reads/writes. There is no hardware
//! locking between the two cores: only the core holding [`BackupRam`] may
//! write, and it should be the only core calling `persist`.

use crate::platform::memory_map::BACKUP_RAM_BASE;
use core::ptr;
use radio_settings_core::settings::{RegionImage, CHECK_WORD_INDEX, REGION_WORDS};
use radio_settings_core::traits::{RegionRead, RegionWrite};

/// Writer capability for the backup registers
pub struct BackupRam {
    base: *mut u32,
}

/// Read-only view of the backup registers, for the non-owning core
#[derive(Clone, Copy)]
pub struct BackupRamReader {
    base: *const u32,
}

impl BackupRam {
    /// Take the writer handle for the on-chip backup registers
    ///
    /// # Safety
    ///
    /// At most one `BackupRam` may exist across both cores for the lifetime
    /// of the program.
    pub unsafe fn take() -> Self {
        Self::from_ptr(BACKUP_RAM_BASE as *mut u32)
    }

    /// Bind a writer handle to an arbitrary region
    ///
    /// # Safety
    ///
    /// `base` must be word aligned and valid for reads and writes of
    /// `REGION_WORDS` words for the lifetime of the program, and no other
    /// writer handle may exist for it.
    pub const unsafe fn from_ptr(base: *mut u32) -> Self {
        Self { base }
    }

    /// Read-only handle to the same region
    pub fn reader(&self) -> BackupRamReader {
        BackupRamReader {
            base: self.base as *const u32,
        }
    }
}

impl BackupRamReader {
    /// Reader for the on-chip backup registers
    ///
    /// Reading is always allowed, so any number of readers may exist.
    pub fn new() -> Self {
        Self {
            base: BACKUP_RAM_BASE as *const u32,
        }
    }
}

impl Default for BackupRamReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionRead for BackupRamReader {
    fn read_word(&self, index: usize) -> u32 {
        assert!(index < REGION_WORDS);
        // SAFETY: base points at REGION_WORDS words of backup RAM and
        // index was bounds-checked above
        unsafe { ptr::read_volatile(self.base.add(index)) }
    }
}

impl RegionRead for BackupRam {
    fn read_word(&self, index: usize) -> u32 {
        self.reader().read_word(index)
    }
}

impl RegionWrite for BackupRam {
    fn write_word(&mut self, index: usize, value: u32) {
        assert!(index < REGION_WORDS);
        // SAFETY: see from_ptr; this handle is the only writer
        unsafe { ptr::write_volatile(self.base.add(index), value) }
    }

    fn write_image(&mut self, image: &RegionImage) {
        // Keep local interrupt handlers from observing a half-copied image.
        // This does not serialize against the other core.
        critical_section::with(|_| {
            for (index, &word) in image.words().iter().enumerate() {
                self.write_word(index, word);
            }
            self.write_word(CHECK_WORD_INDEX, image.check_value());
        });
    }
}
