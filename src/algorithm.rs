//! Name-based dispatch over the six default checksums.

use std::fmt;
use std::str::FromStr;

use crate::crc::{crc16, crc32, crc8};
use crate::error::{ChecksumError, Result};
use crate::fletcher::{fletcher16, fletcher32, fletcher64};

/// One of the built-in checksums with its default parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Crc8,
    Crc16,
    Crc32,
    Fletcher16,
    Fletcher32,
    Fletcher64,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Crc8,
        Algorithm::Crc16,
        Algorithm::Crc32,
        Algorithm::Fletcher16,
        Algorithm::Fletcher32,
        Algorithm::Fletcher64,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Crc8 => "crc8",
            Algorithm::Crc16 => "crc16",
            Algorithm::Crc32 => "crc32",
            Algorithm::Fletcher16 => "fletcher16",
            Algorithm::Fletcher32 => "fletcher32",
            Algorithm::Fletcher64 => "fletcher64",
        }
    }

    pub const fn output_bits(self) -> u32 {
        match self {
            Algorithm::Crc8 => 8,
            Algorithm::Crc16 | Algorithm::Fletcher16 => 16,
            Algorithm::Crc32 | Algorithm::Fletcher32 => 32,
            Algorithm::Fletcher64 => 64,
        }
    }

    /// Checksum of `data`, widened to `u64`.
    pub fn checksum(self, data: &[u8]) -> u64 {
        match self {
            Algorithm::Crc8 => crc8(data).into(),
            Algorithm::Crc16 => crc16(data).into(),
            Algorithm::Crc32 => crc32(data).into(),
            Algorithm::Fletcher16 => fletcher16(data).into(),
            Algorithm::Fletcher32 => fletcher32(data).into(),
            Algorithm::Fletcher64 => fletcher64(data),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ChecksumError;

    /// Case-insensitive; hyphens and underscores are ignored, so `"CRC-16"`
    /// and `"fletcher_64"` are accepted.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| ChecksumError::UnknownAlgorithm(s.to_string()))
    }
}
