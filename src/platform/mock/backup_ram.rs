//! Mock backup RAM implementation for testing
//!
//! Provides an in-memory backup region shared by two simulated cores.

use crate::platform::{PlatformError, Result};
use core::cell::{Cell, RefCell};
use radio_settings_core::settings::{RegionImage, CHECK_WORD_INDEX, REGION_SIZE, REGION_WORDS};
use radio_settings_core::traits::{RegionRead, RegionWrite};

/// Mock backup RAM
///
/// Simulates the battery-backed registers in memory. Supports:
/// - Handing out a writer and readers that share the same storage
/// - Corruption injection for testing self-healing
/// - Power-loss simulation during a full image copy
///
/// # Example
///
/// ```
/// use radio_settings::platform::mock::MockBackupRam;
/// use radio_settings::platform::{RegionRead, RegionWrite};
/// use radio_settings_core::RegionImage;
///
/// let ram = MockBackupRam::new();
/// let mut writer = ram.writer();
/// let reader = ram.reader();
///
/// let mut image = RegionImage::zeroed();
/// image.persist_to(&mut writer);
///
/// assert!(reader.is_valid());
/// assert_eq!(ram.image_write_count(), 1);
/// ```
#[derive(Debug)]
pub struct MockBackupRam {
    /// Region storage, check word last
    words: RefCell<[u32; REGION_WORDS]>,
    /// Words still written by the next image copy before power is lost
    power_loss_after: Cell<Option<usize>>,
    /// Number of full image copies started
    image_writes: Cell<u32>,
}

impl MockBackupRam {
    /// Create an all-zero region, as found on a fresh device
    pub fn new() -> Self {
        Self {
            words: RefCell::new([0; REGION_WORDS]),
            power_loss_after: Cell::new(None),
            image_writes: Cell::new(0),
        }
    }

    /// Create a region holding `image`
    pub fn with_image(image: &RegionImage) -> Self {
        let ram = Self::new();
        ram.store_image(image, REGION_WORDS);
        ram
    }

    /// Create a region from a raw byte dump
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::RegionSize` unless `bytes` is exactly the
    /// region size.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = RegionImage::from_bytes(bytes).ok_or(PlatformError::RegionSize {
            expected: REGION_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self::with_image(&image))
    }

    /// Get region contents (for test verification)
    pub fn contents(&self) -> RegionImage {
        self.snapshot()
    }

    /// Flip bits of one word (for testing error recovery)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidWordIndex` for an index past the
    /// check word.
    pub fn inject_corruption(&self, index: usize, xor_mask: u32) -> Result<()> {
        let mut words = self.words.borrow_mut();
        let word = words
            .get_mut(index)
            .ok_or(PlatformError::InvalidWordIndex(index))?;
        *word ^= xor_mask;
        Ok(())
    }

    /// Simulate power loss during the next image copy
    ///
    /// Only the first `words_written` words of the next full copy reach
    /// the region; the rest keep their old content.
    pub fn simulate_power_loss(&self, words_written: usize) {
        self.power_loss_after.set(Some(words_written));
    }

    /// Number of full image copies started
    pub fn image_write_count(&self) -> u32 {
        self.image_writes.get()
    }

    /// Writer handle sharing this storage
    pub fn writer(&self) -> MockBackupRamWriter<'_> {
        MockBackupRamWriter { ram: self }
    }

    /// Reader handle sharing this storage
    pub fn reader(&self) -> MockBackupRamReader<'_> {
        MockBackupRamReader { ram: self }
    }

    fn load(&self, index: usize) -> u32 {
        self.words.borrow()[index]
    }

    fn store(&self, index: usize, value: u32) {
        self.words.borrow_mut()[index] = value;
    }

    fn store_image(&self, image: &RegionImage, limit: usize) {
        let mut words = self.words.borrow_mut();
        let source = image
            .words()
            .iter()
            .copied()
            .chain(core::iter::once(image.check_value()));
        for (slot, value) in words.iter_mut().zip(source).take(limit) {
            *slot = value;
        }
    }

    fn copy_image(&self, image: &RegionImage) {
        self.image_writes.set(self.image_writes.get() + 1);
        let limit = self.power_loss_after.take().unwrap_or(REGION_WORDS);
        self.store_image(image, limit);
    }
}

impl Default for MockBackupRam {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionRead for MockBackupRam {
    fn read_word(&self, index: usize) -> u32 {
        self.load(index)
    }
}

impl RegionWrite for MockBackupRam {
    fn write_word(&mut self, index: usize, value: u32) {
        self.store(index, value);
    }

    fn write_image(&mut self, image: &RegionImage) {
        self.copy_image(image);
    }
}

/// Writer handle borrowed from a [`MockBackupRam`]
#[derive(Debug)]
pub struct MockBackupRamWriter<'a> {
    ram: &'a MockBackupRam,
}

impl RegionRead for MockBackupRamWriter<'_> {
    fn read_word(&self, index: usize) -> u32 {
        self.ram.load(index)
    }
}

impl RegionWrite for MockBackupRamWriter<'_> {
    fn write_word(&mut self, index: usize, value: u32) {
        self.ram.store(index, value);
    }

    fn write_image(&mut self, image: &RegionImage) {
        self.ram.copy_image(image);
    }
}

/// Read-only handle borrowed from a [`MockBackupRam`]
#[derive(Debug, Clone, Copy)]
pub struct MockBackupRamReader<'a> {
    ram: &'a MockBackupRam,
}

impl RegionRead for MockBackupRamReader<'_> {
    fn read_word(&self, index: usize) -> u32 {
        self.ram.load(index)
    }
}
