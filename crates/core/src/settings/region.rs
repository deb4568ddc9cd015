//! Backup region image
//!
//! A [`RegionImage`] is the byte-exact content of the nonvolatile backup
//! region: [`DATA_WORDS`] data words followed by one check word. It is both
//! the cache's working copy and a [`RegionWrite`] target in its own right.
//!
//! # Layout
//!
//! ```text
//! [word 0 .. word 62]  settings record, little-endian, zero tail
//! [word 63]            CRC-32 over words 0..=62
//! ```

use super::crc::checksum_words;
use crate::traits::{RegionRead, RegionWrite};

/// Number of data words
pub const DATA_WORDS: usize = 63;

/// Total words including the check word
pub const REGION_WORDS: usize = DATA_WORDS + 1;

/// Index of the check word
pub const CHECK_WORD_INDEX: usize = DATA_WORDS;

/// Size of the data area in bytes
pub const DATA_SIZE: usize = DATA_WORDS * 4;

/// Size of the whole region in bytes
pub const REGION_SIZE: usize = REGION_WORDS * 4;

/// In-memory copy of the backup region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionImage {
    words: [u32; DATA_WORDS],
    check_value: u32,
}

impl RegionImage {
    /// All-zero image (fails validation)
    pub const fn zeroed() -> Self {
        Self {
            words: [0; DATA_WORDS],
            check_value: 0,
        }
    }

    /// Image holding `words` with a zero check word
    pub const fn from_words(words: [u32; DATA_WORDS]) -> Self {
        Self {
            words,
            check_value: 0,
        }
    }

    /// Data words
    pub fn words(&self) -> &[u32; DATA_WORDS] {
        &self.words
    }

    /// Mutable data words
    pub fn words_mut(&mut self) -> &mut [u32; DATA_WORDS] {
        &mut self.words
    }

    /// Stored check word
    pub fn check_value(&self) -> u32 {
        self.check_value
    }

    /// Overwrite the stored check word
    pub fn set_check_value(&mut self, value: u32) {
        self.check_value = value;
    }

    /// Checksum of the current data words
    pub fn compute_check_value(&self) -> u32 {
        checksum_words(&self.words)
    }

    /// Update the check word from the current data, then copy every word
    /// (data and check) to `dst`
    ///
    /// This is the only write path into nonvolatile storage. It is not
    /// transactional: an interrupted copy leaves `dst` mixed, and the check
    /// word decides validity afterwards.
    pub fn persist_to<W: RegionWrite + ?Sized>(&mut self, dst: &mut W) {
        self.check_value = self.compute_check_value();
        dst.write_image(self);
    }

    /// Serialize the full region (little-endian words)
    pub fn to_bytes(&self) -> [u8; REGION_SIZE] {
        let mut buf = [0u8; REGION_SIZE];
        for (chunk, word) in buf.chunks_exact_mut(4).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        buf[DATA_SIZE..].copy_from_slice(&self.check_value.to_le_bytes());
        buf
    }

    /// Deserialize a full region
    ///
    /// Returns `None` unless `buf` is exactly [`REGION_SIZE`] bytes.
    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() != REGION_SIZE {
            return None;
        }

        let mut image = Self::zeroed();
        for (word, chunk) in image.words.iter_mut().zip(buf.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        image.check_value = u32::from_le_bytes([
            buf[DATA_SIZE],
            buf[DATA_SIZE + 1],
            buf[DATA_SIZE + 2],
            buf[DATA_SIZE + 3],
        ]);
        Some(image)
    }
}

impl Default for RegionImage {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl RegionRead for RegionImage {
    fn read_word(&self, index: usize) -> u32 {
        if index == CHECK_WORD_INDEX {
            self.check_value
        } else {
            self.words[index]
        }
    }

    fn snapshot(&self) -> RegionImage {
        *self
    }
}

impl RegionWrite for RegionImage {
    fn write_word(&mut self, index: usize, value: u32) {
        if index == CHECK_WORD_INDEX {
            self.check_value = value;
        } else {
            self.words[index] = value;
        }
    }

    fn write_image(&mut self, image: &RegionImage) {
        *self = *image;
    }
}

const _: () = assert!(REGION_SIZE == core::mem::size_of::<RegionImage>());
