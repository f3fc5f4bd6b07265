//! Fletcher-16, Fletcher-32 and Fletcher-64.
//!
//! Two running sums modulo `2^w - 1` over `w`-bit words, concatenated as
//! `(sum2 << w) | sum1`. Input whose length is not a multiple of the word
//! size is zero-padded to the next word; multi-byte words are read
//! least-significant byte first regardless of host.

mod fletcher;

pub use fletcher::Fletcher;

pub trait FletcherDigest {
    /// Update digest with data
    fn update(&mut self, data: &[u8]);

    /// Returns the checksum in the low `2 * word_bits` bits
    fn digest(&self) -> u64;
}

/// Word width of a Fletcher checksum, named after the checksum width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FletcherWidth {
    Fletcher16,
    Fletcher32,
    Fletcher64,
}

impl FletcherWidth {
    pub const fn word_bits(self) -> u32 {
        match self {
            FletcherWidth::Fletcher16 => 8,
            FletcherWidth::Fletcher32 => 16,
            FletcherWidth::Fletcher64 => 32,
        }
    }

    pub const fn word_bytes(self) -> usize {
        (self.word_bits() / 8) as usize
    }

    pub const fn output_bits(self) -> u32 {
        self.word_bits() * 2
    }

    pub const fn modulus(self) -> u64 {
        (1 << self.word_bits()) - 1
    }
}

pub fn fletcher16(data: &[u8]) -> u16 {
    Fletcher::checksum(FletcherWidth::Fletcher16, data) as u16
}

/// Fletcher-32 over 16-bit little-endian words; odd lengths are zero-padded.
pub fn fletcher32(data: &[u8]) -> u32 {
    Fletcher::checksum(FletcherWidth::Fletcher32, data) as u32
}

/// Fletcher-64 over 32-bit little-endian words; lengths are zero-padded to a
/// multiple of 4.
pub fn fletcher64(data: &[u8]) -> u64 {
    Fletcher::checksum(FletcherWidth::Fletcher64, data)
}

/// Adds one byte to a packed Fletcher-16 checksum (`sum2` in the high byte).
pub fn fletcher16_update(chk: u16, data: u8) -> u16 {
    let sum1 = (chk & 0xFF) % 255;
    let sum2 = (chk >> 8) % 255;

    let sum1 = (sum1 + u16::from(data)) % 255;
    let sum2 = (sum2 + sum1) % 255;

    (sum2 << 8) | sum1
}
