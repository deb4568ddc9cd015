//! CRC32 calculation for backup region validation
//!
//! The region check word is a non-reflected CRC-32 (polynomial 0x04C11DB7,
//! init 0xFFFFFFFF, xorout 0xFFFFFFFF), fed one byte at a time with each
//! data word split little-endian. Both cores must agree on this exactly.

use crc::{Crc, Digest, CRC_32_BZIP2};

/// CRC-32/BZIP2: poly 0x04C11DB7, init/xorout 0xFFFFFFFF, no reflection
static CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_BZIP2);

/// Incremental checksum over region words
pub struct RegionChecksum {
    digest: Digest<'static, u32>,
}

impl RegionChecksum {
    /// Start a new checksum
    pub fn new() -> Self {
        Self {
            digest: CRC32.digest(),
        }
    }

    /// Feed one byte
    pub fn process_byte(&mut self, byte: u8) {
        self.digest.update(&[byte]);
    }

    /// Feed one word, least significant byte first
    pub fn process_word(&mut self, word: u32) {
        for byte in word.to_le_bytes() {
            self.process_byte(byte);
        }
    }

    /// Finish and return the checksum
    pub fn checksum(self) -> u32 {
        self.digest.finalize()
    }
}

impl Default for RegionChecksum {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate the checksum of a word slice
pub fn checksum_words(words: &[u32]) -> u32 {
    let mut crc = RegionChecksum::new();
    for &word in words {
        crc.process_word(word);
    }
    crc.checksum()
}

/// Calculate the checksum of a byte slice
pub fn calculate_crc32(data: &[u8]) -> u32 {
    CRC32.checksum(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_known_values() {
        let test_cases = [
            (b"" as &[u8], 0x00000000u32),
            (b"123456789", 0xFC891918),
        ];

        for (data, expected) in test_cases {
            assert_eq!(calculate_crc32(data), expected);
        }
    }

    #[test]
    fn test_zero_region_reference_value() {
        let words = [0u32; 63];
        assert_eq!(checksum_words(&words), 0x8F9A_C665);
    }

    #[test]
    fn test_words_are_fed_little_endian() {
        let words = [0x3433_3231u32, 0x3837_3635];
        let mut bytes = [0u8; 8];
        bytes[..4].copy_from_slice(b"1234");
        bytes[4..].copy_from_slice(b"5678");
        assert_eq!(checksum_words(&words), calculate_crc32(&bytes));
    }

    #[test]
    fn test_single_bit_flip_changes_checksum() {
        let mut words = [0u32; 63];
        let reference = checksum_words(&words);

        for index in 0..words.len() {
            for bit in 0..32 {
                words[index] ^= 1 << bit;
                assert_ne!(
                    checksum_words(&words),
                    reference,
                    "flip of word {} bit {} went undetected",
                    index,
                    bit
                );
                words[index] ^= 1 << bit;
            }
        }
    }

    #[test]
    fn test_byte_and_word_feeds_agree() {
        let mut by_byte = RegionChecksum::new();
        for byte in [0x78, 0x56, 0x34, 0x12] {
            by_byte.process_byte(byte);
        }
        let mut by_word = RegionChecksum::new();
        by_word.process_word(0x1234_5678);

        assert_eq!(by_byte.checksum(), by_word.checksum());
    }
}
