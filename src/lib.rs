//! Parameterized CRC and Fletcher checksums.
//!
//! | Function | Width | Default parameters |
//! |----------|-------|--------------------|
//! | [`crc8`] | 8 | poly 0x07, init 0x00 |
//! | [`crc16`] | 16 | CRC-16/CCITT-FALSE: poly 0x1021, init 0xFFFF |
//! | [`crc32`] | 32 | CRC-32: poly 0x04C11DB7, reflected, init/xorout 0xFFFFFFFF |
//! | [`fletcher16`] | 16 | 8-bit words, mod 255 |
//! | [`fletcher32`] | 32 | 16-bit LE words, mod 65535 |
//! | [`fletcher64`] | 64 | 32-bit LE words, mod 2^32 - 1 |
//!
//! Any other CRC of width 8, 16 or 32 is reachable through [`CrcParams`].
//! Results never depend on host byte order.
//!
//! ```
//! use librscheck::prelude::*;
//!
//! let params = CrcParams::new(CrcWidth::Crc16, 0x8005, 0x0000, true, true, 0x0000)?;
//! let mut crc = Crc::new_lookup(params);
//! crc.update(b"1234");
//! crc.update(b"56789");
//! assert_eq!(crc.digest(), 0xBB3D);
//!
//! assert_eq!(fletcher32(b"abcde"), 0xF04F_C729);
//! # Ok::<(), librscheck::ChecksumError>(())
//! ```

pub mod algorithm;
pub mod crc;
pub mod error;
pub mod fletcher;

pub use algorithm::Algorithm;
pub use crc::{
    crc16, crc16_ccitt_update, crc16_with, crc32, crc32_with, crc8, crc8_with, Crc, CrcDigest,
    CrcParams, CrcWidth, TableCache,
};
pub use error::{ChecksumError, ParamField, Result};
pub use fletcher::{
    fletcher16, fletcher16_update, fletcher32, fletcher64, Fletcher, FletcherDigest,
    FletcherWidth,
};

pub mod prelude {
    pub use crate::algorithm::Algorithm;
    pub use crate::crc::{
        crc16, crc16_with, crc32, crc32_with, crc8, crc8_with, Crc, CrcDigest, CrcParams,
        CrcWidth,
    };
    pub use crate::error::ChecksumError;
    pub use crate::fletcher::{
        fletcher16, fletcher32, fletcher64, Fletcher, FletcherDigest, FletcherWidth,
    };
}
