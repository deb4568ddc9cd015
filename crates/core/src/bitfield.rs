//! Packed bit-field descriptor
//!
//! Describes one multi-bit group inside a 32-bit word by its offset and
//! width, so every field is read and written with the same masking logic.

/// A contiguous group of bits inside a `u32`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitField {
    offset: u32,
    width: u32,
}

impl BitField {
    /// Describe `width` bits starting at bit `offset` (0 = least significant)
    ///
    /// Panics at compile time when used in a `const` whose field does not
    /// fit in 32 bits.
    pub const fn new(offset: u32, width: u32) -> Self {
        assert!(width > 0 && offset + width <= 32);
        Self { offset, width }
    }

    /// Bit position of the least significant bit
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Number of bits in the field
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Largest value the field can hold
    pub const fn max_value(&self) -> u32 {
        if self.width == 32 {
            u32::MAX
        } else {
            (1 << self.width) - 1
        }
    }

    /// Mask of the field's bits in place
    pub const fn mask(&self) -> u32 {
        self.max_value() << self.offset
    }

    /// Extract the field from `word`
    pub const fn get(&self, word: u32) -> u32 {
        (word & self.mask()) >> self.offset
    }

    /// Return `word` with the field replaced by `value`
    ///
    /// Bits of `value` beyond the field width are discarded; bits of `word`
    /// outside the field are kept.
    pub const fn set(&self, word: u32, value: u32) -> u32 {
        (word & !self.mask()) | ((value & self.max_value()) << self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOW3: BitField = BitField::new(0, 3);
    const MID16: BitField = BitField::new(4, 16);

    #[test]
    fn test_masks() {
        assert_eq!(LOW3.mask(), 0x0000_0007);
        assert_eq!(MID16.mask(), 0x000F_FFF0);
        assert_eq!(BitField::new(0, 32).mask(), u32::MAX);
    }

    #[test]
    fn test_get_extracts_field() {
        let word = 0xABCD_1235;
        assert_eq!(LOW3.get(word), 5);
        assert_eq!(MID16.get(word), 0xD123);
    }

    #[test]
    fn test_set_preserves_other_bits() {
        let word = 0xFFFF_FFFF;
        let updated = MID16.set(word, 0);
        assert_eq!(updated, 0xFFF0_000F);

        let updated = LOW3.set(0xFFFF_FFF8, 0b101);
        assert_eq!(updated, 0xFFFF_FFFD);
    }

    #[test]
    fn test_set_truncates_wide_values() {
        assert_eq!(LOW3.set(0, 0xFF), 0b111);
        assert_eq!(MID16.set(0, 0x1_0001), 0x10);
    }
}
