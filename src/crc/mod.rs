//! Parameterized CRC-8, CRC-16 and CRC-32.
//!
//! Two engines produce bit-identical results for every parameter set:
//! a bit-by-bit reference loop ([`Crc::new_naive`]) and a 256-entry table
//! driven loop ([`Crc::new_lookup`]) whose tables are cached per
//! `(width, polynomial)` for the life of the process.
//!
//! ```
//! use librscheck::crc::{crc16_with, crc32, CrcParams};
//!
//! assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
//! assert_eq!(crc16_with(b"123456789", &CrcParams::CRC16_XMODEM).unwrap(), 0x31C3);
//! ```

mod crc;
mod custom_crc;
mod params;
mod table_cache;

pub use crc::Crc;
pub use custom_crc::CustomCrc;
pub use params::{CrcParams, CrcWidth};
pub use table_cache::{LookupTable, TableCache};

use crate::error::Result;

pub trait CrcDigest {
    /// Update digest with data
    fn update(&mut self, data: &[u8]);

    /// Returns the finalized checksum in the low `width` bits
    fn digest(&self) -> u32;
}

/// CRC-8 (poly 0x07, init 0x00, no reflection, no final XOR).
pub fn crc8(data: &[u8]) -> u8 {
    Crc::checksum(CrcParams::CRC8, data) as u8
}

/// CRC-16/CCITT-FALSE (poly 0x1021, init 0xFFFF, no reflection, no final XOR).
pub fn crc16(data: &[u8]) -> u16 {
    Crc::checksum(CrcParams::CRC16_CCITT_FALSE, data) as u16
}

/// CRC-32 (poly 0x04C11DB7, init and final XOR 0xFFFFFFFF, reflected).
pub fn crc32(data: &[u8]) -> u32 {
    Crc::checksum(CrcParams::CRC32, data)
}

/// CRC-8 with caller-supplied parameters.
///
/// Fails with [`ChecksumError::WidthMismatch`](crate::ChecksumError::WidthMismatch)
/// unless `params` describes an 8-bit CRC.
pub fn crc8_with(data: &[u8], params: &CrcParams) -> Result<u8> {
    params.expect_width(CrcWidth::Crc8)?;
    Ok(Crc::checksum(*params, data) as u8)
}

pub fn crc16_with(data: &[u8], params: &CrcParams) -> Result<u16> {
    params.expect_width(CrcWidth::Crc16)?;
    Ok(Crc::checksum(*params, data) as u16)
}

pub fn crc32_with(data: &[u8], params: &CrcParams) -> Result<u32> {
    params.expect_width(CrcWidth::Crc32)?;
    Ok(Crc::checksum(*params, data))
}

/// Runs one byte through the CRC-16/CCITT bit loop (poly 0x1021).
///
/// No initial value or finalization is applied; seed `chk` with 0xFFFF for
/// CRC-16/CCITT-FALSE.
pub fn crc16_ccitt_update(chk: u16, data: u8) -> u16 {
    CustomCrc::crc_naive(chk.into(), &CrcParams::CRC16_CCITT_FALSE, &[data]) as u16
}
