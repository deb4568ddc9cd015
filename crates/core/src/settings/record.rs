//! Settings record and its wire layout
//!
//! The record occupies the start of the backup region's data words. Field
//! order and widths are shared by both cores; any change here breaks every
//! image already stored in backup RAM.
//!
//! # Layout
//!
//! All fields are little-endian and word aligned.
//!
//! ```text
//! offset  size  field
//!      0     8  tuned frequency (i64, Hz)
//!      8     4  correction (i32, ppb)
//!     12     4  touch calibration sentinel
//!     16    28  touch calibration
//!     44     4  reserved (legacy modem definition index)
//!     48     4  serial format
//!     52     4  modem bandwidth
//!     56     4  AFSK mark (Hz)
//!     60     4  AFSK space (Hz)
//!     64     4  modem baud rate
//!     68     4  modem repeat count
//!     72    12  reserved (three legacy words)
//!     84     4  UI configuration word
//!     88     4  POCSAG last address
//!     92     4  POCSAG ignore address
//!     96     4  tone mix
//!    100     4  hardware configuration (low byte significant)
//! ```

use super::calibration::{TouchCalibration, CALIBRATION_SIZE};
use super::limits::{
    AFSK_MARK, AFSK_SPACE, CORRECTION_PPB, MODEM_BANDWIDTH_DEFAULT, MODEM_BAUDRATE, MODEM_REPEAT,
    TONE_MIX, TOUCH_CALIBRATION_MAGIC, TUNED_FREQUENCY_RESET_HZ,
};
use super::region::{DATA_SIZE, DATA_WORDS};
use super::ui_config::UiConfig;

/// Byte offsets of each field
pub mod offset {
    pub const TUNED_FREQUENCY: usize = 0;
    pub const CORRECTION_PPB: usize = 8;
    pub const TOUCH_CALIBRATION_MAGIC: usize = 12;
    pub const TOUCH_CALIBRATION: usize = 16;
    pub const MODEM_DEF_INDEX: usize = 44;
    pub const SERIAL_FORMAT: usize = 48;
    pub const MODEM_BANDWIDTH: usize = 52;
    pub const AFSK_MARK: usize = 56;
    pub const AFSK_SPACE: usize = 60;
    pub const MODEM_BAUDRATE: usize = 64;
    pub const MODEM_REPEAT: usize = 68;
    pub const LEGACY: usize = 72;
    pub const UI_CONFIG: usize = 84;
    pub const POCSAG_LAST_ADDRESS: usize = 88;
    pub const POCSAG_IGNORE_ADDRESS: usize = 92;
    pub const TONE_MIX: usize = 96;
    pub const HARDWARE_CONFIG: usize = 100;
}

/// Serialized record size in bytes
pub const RECORD_SIZE: usize = 104;

const _: () = assert!(RECORD_SIZE <= DATA_SIZE);
const _: () = assert!(offset::TOUCH_CALIBRATION + CALIBRATION_SIZE == offset::MODEM_DEF_INDEX);
const _: () = assert!(offset::HARDWARE_CONFIG + 4 == RECORD_SIZE);

/// Word index of a word-aligned byte offset
pub const fn word_index(byte_offset: usize) -> usize {
    byte_offset / 4
}

/// Serial parity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Parity {
    #[default]
    None = 0,
    Even = 1,
    Odd = 2,
}

impl Parity {
    /// Decode a stored byte; unknown values read as no parity
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Parity::Even,
            2 => Parity::Odd,
            _ => Parity::None,
        }
    }
}

/// Serial bit order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum BitOrder {
    #[default]
    LsbFirst = 0,
    MsbFirst = 1,
}

impl BitOrder {
    /// Decode a stored byte; unknown values read as LSB first
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            1 => BitOrder::MsbFirst,
            _ => BitOrder::LsbFirst,
        }
    }
}

/// Modem serial framing, one byte per field
///
/// Bytes are kept exactly as stored. [`SerialFormat::parity`] and
/// [`SerialFormat::bit_order`] decode them; unknown values stay in the word
/// until a new format is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerialFormat {
    data_bits: u8,
    parity: u8,
    stop_bits: u8,
    bit_order: u8,
}

impl SerialFormat {
    pub const fn new(data_bits: u8, parity: Parity, stop_bits: u8, bit_order: BitOrder) -> Self {
        Self {
            data_bits,
            parity: parity as u8,
            stop_bits,
            bit_order: bit_order as u8,
        }
    }

    pub fn data_bits(self) -> u8 {
        self.data_bits
    }

    /// Parity, unknown bytes read as no parity
    pub fn parity(self) -> Parity {
        Parity::from_raw(self.parity)
    }

    pub fn stop_bits(self) -> u8 {
        self.stop_bits
    }

    /// Bit order, unknown bytes read as LSB first
    pub fn bit_order(self) -> BitOrder {
        BitOrder::from_raw(self.bit_order)
    }

    /// Pack into one little-endian word
    pub fn to_word(self) -> u32 {
        u32::from_le_bytes([self.data_bits, self.parity, self.stop_bits, self.bit_order])
    }

    /// Unpack from one little-endian word
    pub fn from_word(word: u32) -> Self {
        let [data_bits, parity, stop_bits, bit_order] = word.to_le_bytes();
        Self {
            data_bits,
            parity,
            stop_bits,
            bit_order,
        }
    }
}

/// Typed view of everything stored in the backup region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsRecord {
    pub tuned_frequency: i64,
    pub correction_ppb: i32,
    pub touch_calibration_magic: u32,
    pub touch_calibration: TouchCalibration,
    /// Reserved; preserved verbatim
    pub modem_def_index: u32,
    pub serial_format: SerialFormat,
    pub modem_bandwidth: i32,
    pub afsk_mark_freq: i32,
    pub afsk_space_freq: i32,
    pub modem_baudrate: i32,
    pub modem_repeat: i32,
    /// Reserved; preserved verbatim
    pub legacy: [u32; 3],
    pub ui_config: UiConfig,
    pub pocsag_last_address: u32,
    pub pocsag_ignore_address: u32,
    pub tone_mix: i32,
    /// Only the low byte is significant; the rest is preserved verbatim
    pub hardware_config: u32,
}

impl SettingsRecord {
    /// Factory settings
    pub const DEFAULT: Self = Self {
        tuned_frequency: TUNED_FREQUENCY_RESET_HZ,
        correction_ppb: CORRECTION_PPB.reset(),
        touch_calibration_magic: TOUCH_CALIBRATION_MAGIC,
        touch_calibration: TouchCalibration::NOMINAL,
        modem_def_index: 0,
        serial_format: SerialFormat::new(0, Parity::None, 0, BitOrder::LsbFirst),
        modem_bandwidth: MODEM_BANDWIDTH_DEFAULT,
        afsk_mark_freq: AFSK_MARK.reset(),
        afsk_space_freq: AFSK_SPACE.reset(),
        modem_baudrate: MODEM_BAUDRATE.reset(),
        modem_repeat: MODEM_REPEAT.reset(),
        legacy: [0; 3],
        ui_config: UiConfig::DEFAULT,
        pocsag_last_address: 0,
        pocsag_ignore_address: 0,
        tone_mix: TONE_MIX.reset(),
        hardware_config: 0,
    };

    /// Serialize to the wire layout
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];
        put(&mut buf, offset::TUNED_FREQUENCY, &self.tuned_frequency.to_le_bytes());
        put(&mut buf, offset::CORRECTION_PPB, &self.correction_ppb.to_le_bytes());
        put(
            &mut buf,
            offset::TOUCH_CALIBRATION_MAGIC,
            &self.touch_calibration_magic.to_le_bytes(),
        );
        put(&mut buf, offset::TOUCH_CALIBRATION, &self.touch_calibration.to_bytes());
        put(&mut buf, offset::MODEM_DEF_INDEX, &self.modem_def_index.to_le_bytes());
        put(&mut buf, offset::SERIAL_FORMAT, &self.serial_format.to_word().to_le_bytes());
        put(&mut buf, offset::MODEM_BANDWIDTH, &self.modem_bandwidth.to_le_bytes());
        put(&mut buf, offset::AFSK_MARK, &self.afsk_mark_freq.to_le_bytes());
        put(&mut buf, offset::AFSK_SPACE, &self.afsk_space_freq.to_le_bytes());
        put(&mut buf, offset::MODEM_BAUDRATE, &self.modem_baudrate.to_le_bytes());
        put(&mut buf, offset::MODEM_REPEAT, &self.modem_repeat.to_le_bytes());
        for (i, word) in self.legacy.iter().enumerate() {
            put(&mut buf, offset::LEGACY + i * 4, &word.to_le_bytes());
        }
        put(&mut buf, offset::UI_CONFIG, &self.ui_config.bits().to_le_bytes());
        put(
            &mut buf,
            offset::POCSAG_LAST_ADDRESS,
            &self.pocsag_last_address.to_le_bytes(),
        );
        put(
            &mut buf,
            offset::POCSAG_IGNORE_ADDRESS,
            &self.pocsag_ignore_address.to_le_bytes(),
        );
        put(&mut buf, offset::TONE_MIX, &self.tone_mix.to_le_bytes());
        put(
            &mut buf,
            offset::HARDWARE_CONFIG,
            &self.hardware_config.to_le_bytes(),
        );
        buf
    }

    /// Deserialize from the wire layout
    ///
    /// Values are taken as stored; range checks happen in the cache
    /// accessors, not here.
    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() < RECORD_SIZE {
            return None;
        }

        let mut legacy = [0u32; 3];
        for (i, word) in legacy.iter_mut().enumerate() {
            *word = get_u32(buf, offset::LEGACY + i * 4);
        }

        Some(Self {
            tuned_frequency: get_i64(buf, offset::TUNED_FREQUENCY),
            correction_ppb: get_i32(buf, offset::CORRECTION_PPB),
            touch_calibration_magic: get_u32(buf, offset::TOUCH_CALIBRATION_MAGIC),
            touch_calibration: TouchCalibration::from_bytes(&buf[offset::TOUCH_CALIBRATION..])?,
            modem_def_index: get_u32(buf, offset::MODEM_DEF_INDEX),
            serial_format: SerialFormat::from_word(get_u32(buf, offset::SERIAL_FORMAT)),
            modem_bandwidth: get_i32(buf, offset::MODEM_BANDWIDTH),
            afsk_mark_freq: get_i32(buf, offset::AFSK_MARK),
            afsk_space_freq: get_i32(buf, offset::AFSK_SPACE),
            modem_baudrate: get_i32(buf, offset::MODEM_BAUDRATE),
            modem_repeat: get_i32(buf, offset::MODEM_REPEAT),
            legacy,
            ui_config: UiConfig::from_bits(get_u32(buf, offset::UI_CONFIG)),
            pocsag_last_address: get_u32(buf, offset::POCSAG_LAST_ADDRESS),
            pocsag_ignore_address: get_u32(buf, offset::POCSAG_IGNORE_ADDRESS),
            tone_mix: get_i32(buf, offset::TONE_MIX),
            hardware_config: get_u32(buf, offset::HARDWARE_CONFIG),
        })
    }

    /// Serialize into a full data-word array, zero-filling the tail
    pub fn to_words(&self) -> [u32; DATA_WORDS] {
        let mut words = [0u32; DATA_WORDS];
        for (word, chunk) in words.iter_mut().zip(self.to_bytes().chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }

    /// Deserialize from a data-word array
    pub fn from_words(words: &[u32; DATA_WORDS]) -> Self {
        let mut buf = [0u8; RECORD_SIZE];
        for (chunk, word) in buf.chunks_exact_mut(4).zip(words.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        // buf is exactly RECORD_SIZE bytes, so decoding cannot fail
        Self::from_bytes(&buf).unwrap_or(Self::DEFAULT)
    }
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn put(buf: &mut [u8], at: usize, bytes: &[u8]) {
    buf[at..at + bytes.len()].copy_from_slice(bytes);
}

fn get_u32(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

fn get_i32(buf: &[u8], at: usize) -> i32 {
    get_u32(buf, at) as i32
}

fn get_i64(buf: &[u8], at: usize) -> i64 {
    let low = u64::from(get_u32(buf, at));
    let high = u64::from(get_u32(buf, at + 4));
    ((high << 32) | low) as i64
}
