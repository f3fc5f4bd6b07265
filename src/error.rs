//! Error types for checksum parameters and dispatch

use std::fmt;

use thiserror::Error;

/// Width-bounded field of a CRC parameter set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamField {
    Polynomial,
    InitialValue,
    FinalXor,
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamField::Polynomial => "polynomial",
            ParamField::InitialValue => "initial value",
            ParamField::FinalXor => "final XOR value",
        })
    }
}

/// Checksum error types
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// A parameter does not fit in the register width it was declared for.
    #[error("{field} {value:#X} does not fit in {width} bits")]
    ValueOutOfRange {
        field: ParamField,
        value: u64,
        width: u32,
    },
    /// Register width is not one of 8, 16 or 32 bits.
    #[error("Unsupported CRC width: {0}")]
    UnsupportedWidth(u32),
    /// Parameters of one width were passed to the entry point of another.
    #[error("Parameters are for a {actual}-bit CRC, expected {expected}-bit")]
    WidthMismatch { expected: u32, actual: u32 },
    /// Name matches no known checksum algorithm or catalog entry.
    #[error("Unknown checksum algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ChecksumError>;
