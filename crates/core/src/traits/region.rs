//! Backup region access traits
//!
//! The backup region is shared by both cores without hardware locking.
//! Access is split into two capabilities so the single-writer convention
//! can be expressed in types:
//!
//! - [`RegionRead`]: read words, validate the check word, take a snapshot
//! - [`RegionWrite`]: additionally overwrite words (only the owning core)
//!
//! Word indices run from `0` to [`REGION_WORDS`]` - 1`; the last index
//! ([`CHECK_WORD_INDEX`]) holds the check word.

use crate::settings::crc::RegionChecksum;
use crate::settings::region::{RegionImage, CHECK_WORD_INDEX, DATA_WORDS, REGION_WORDS};

/// Read access to a backup region
pub trait RegionRead {
    /// Read one word
    ///
    /// Implementations may panic if `index >= REGION_WORDS`.
    fn read_word(&self, index: usize) -> u32;

    /// Copy the whole region into an in-memory image
    fn snapshot(&self) -> RegionImage {
        let mut image = RegionImage::zeroed();
        for (index, word) in image.words_mut().iter_mut().enumerate() {
            *word = self.read_word(index);
        }
        image.set_check_value(self.read_word(CHECK_WORD_INDEX));
        image
    }

    /// Recompute the checksum over the data words and compare it with the
    /// stored check word
    fn is_valid(&self) -> bool {
        let mut crc = RegionChecksum::new();
        for index in 0..DATA_WORDS {
            crc.process_word(self.read_word(index));
        }
        crc.checksum() == self.read_word(CHECK_WORD_INDEX)
    }
}

/// Write access to a backup region
pub trait RegionWrite: RegionRead {
    /// Overwrite one word
    ///
    /// Implementations may panic if `index >= REGION_WORDS`.
    fn write_word(&mut self, index: usize, value: u32);

    /// Copy a full image, data words first and the check word last
    fn write_image(&mut self, image: &RegionImage) {
        for (index, &word) in image.words().iter().enumerate() {
            self.write_word(index, word);
        }
        self.write_word(CHECK_WORD_INDEX, image.check_value());
    }
}

impl<T: RegionRead + ?Sized> RegionRead for &T {
    fn read_word(&self, index: usize) -> u32 {
        (**self).read_word(index)
    }
}

impl<T: RegionRead + ?Sized> RegionRead for &mut T {
    fn read_word(&self, index: usize) -> u32 {
        (**self).read_word(index)
    }
}

impl<T: RegionWrite + ?Sized> RegionWrite for &mut T {
    fn write_word(&mut self, index: usize, value: u32) {
        (**self).write_word(index, value)
    }

    fn write_image(&mut self, image: &RegionImage) {
        (**self).write_image(image)
    }
}

const _: () = assert!(CHECK_WORD_INDEX == REGION_WORDS - 1);
