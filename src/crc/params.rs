//! CRC parameter sets.
//!
//! A [`CrcParams`] fixes everything that distinguishes one CRC variant from
//! another: register width, generator polynomial (without the implicit high
//! bit), initial register value, input/output reflection and the final XOR.
//! Presets follow the naming of the CRC RevEng catalogue.

use crate::error::{ChecksumError, ParamField, Result};

/// Register width of a CRC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum CrcWidth {
    Crc8,
    Crc16,
    Crc32,
}

impl CrcWidth {
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(CrcWidth::Crc8),
            16 => Ok(CrcWidth::Crc16),
            32 => Ok(CrcWidth::Crc32),
            other => Err(ChecksumError::UnsupportedWidth(other)),
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            CrcWidth::Crc8 => 8,
            CrcWidth::Crc16 => 16,
            CrcWidth::Crc32 => 32,
        }
    }

    /// All-ones value of the register width.
    pub const fn mask(self) -> u32 {
        match self {
            CrcWidth::Crc8 => 0xFF,
            CrcWidth::Crc16 => 0xFFFF,
            CrcWidth::Crc32 => 0xFFFF_FFFF,
        }
    }

    pub(crate) const fn top_bit(self) -> u32 {
        1 << (self.bits() - 1)
    }

    /// Shift that places a byte in the top 8 bits of the register.
    pub(crate) const fn byte_shift(self) -> u32 {
        self.bits() - 8
    }
}

impl TryFrom<u32> for CrcWidth {
    type Error = ChecksumError;

    fn try_from(bits: u32) -> Result<Self> {
        Self::from_bits(bits)
    }
}

impl From<CrcWidth> for u32 {
    fn from(width: CrcWidth) -> u32 {
        width.bits()
    }
}

/// Validated CRC parameters.
///
/// Every width-bounded field is guaranteed to fit in [`CrcParams::width`];
/// the only ways to obtain a value are [`CrcParams::new`], the presets and
/// [`CrcParams::from_name`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawCrcParams", into = "RawCrcParams")
)]
pub struct CrcParams {
    width: CrcWidth,
    polynomial: u32,
    initial: u32,
    reflect_in: bool,
    reflect_out: bool,
    xor_out: u32,
}

impl CrcParams {
    /// CRC-8 (poly 0x07), check 0xF4
    pub const CRC8: Self = Self::preset(CrcWidth::Crc8, 0x07, 0x00, false, false, 0x00);
    /// CRC-8/MAXIM (1-Wire), check 0xA1
    pub const CRC8_MAXIM: Self = Self::preset(CrcWidth::Crc8, 0x31, 0x00, true, true, 0x00);
    /// CRC-8/SAE-J1850, check 0x4B
    pub const CRC8_SAE_J1850: Self =
        Self::preset(CrcWidth::Crc8, 0x1D, 0xFF, false, false, 0xFF);
    /// CRC-8/AUTOSAR, check 0xDF
    pub const CRC8_AUTOSAR: Self = Self::preset(CrcWidth::Crc8, 0x2F, 0xFF, false, false, 0xFF);
    /// CRC-8/ROHC, check 0xD0
    pub const CRC8_ROHC: Self = Self::preset(CrcWidth::Crc8, 0x07, 0xFF, true, true, 0x00);

    /// CRC-16/CCITT-FALSE (a.k.a. CRC-16/IBM-3740), check 0x29B1
    pub const CRC16_CCITT_FALSE: Self =
        Self::preset(CrcWidth::Crc16, 0x1021, 0xFFFF, false, false, 0x0000);
    /// CRC-16/XMODEM, check 0x31C3
    pub const CRC16_XMODEM: Self =
        Self::preset(CrcWidth::Crc16, 0x1021, 0x0000, false, false, 0x0000);
    /// CRC-16/KERMIT, check 0x2189
    pub const CRC16_KERMIT: Self =
        Self::preset(CrcWidth::Crc16, 0x1021, 0x0000, true, true, 0x0000);
    /// CRC-16/X-25, check 0x906E
    pub const CRC16_X25: Self = Self::preset(CrcWidth::Crc16, 0x1021, 0xFFFF, true, true, 0xFFFF);
    /// CRC-16/ARC, check 0xBB3D
    pub const CRC16_ARC: Self = Self::preset(CrcWidth::Crc16, 0x8005, 0x0000, true, true, 0x0000);
    /// CRC-16/MODBUS, check 0x4B37
    pub const CRC16_MODBUS: Self =
        Self::preset(CrcWidth::Crc16, 0x8005, 0xFFFF, true, true, 0x0000);
    /// CRC-16/UMTS (a.k.a. CRC-16/BUYPASS), check 0xFEE8
    pub const CRC16_UMTS: Self =
        Self::preset(CrcWidth::Crc16, 0x8005, 0x0000, false, false, 0x0000);
    /// CRC-16/DNP, check 0xEA82
    pub const CRC16_DNP: Self = Self::preset(CrcWidth::Crc16, 0x3D65, 0x0000, true, true, 0xFFFF);

    /// CRC-32 (ISO-HDLC, Ethernet, zip), check 0xCBF43926
    pub const CRC32: Self = Self::preset(
        CrcWidth::Crc32,
        0x04C1_1DB7,
        0xFFFF_FFFF,
        true,
        true,
        0xFFFF_FFFF,
    );
    /// CRC-32/BZIP2, check 0xFC891918
    pub const CRC32_BZIP2: Self = Self::preset(
        CrcWidth::Crc32,
        0x04C1_1DB7,
        0xFFFF_FFFF,
        false,
        false,
        0xFFFF_FFFF,
    );
    /// CRC-32/MPEG-2, check 0x0376E6E7
    pub const CRC32_MPEG2: Self = Self::preset(
        CrcWidth::Crc32,
        0x04C1_1DB7,
        0xFFFF_FFFF,
        false,
        false,
        0x0000_0000,
    );
    /// CRC-32/CKSUM (POSIX), check 0x765E7680
    pub const CRC32_CKSUM: Self = Self::preset(
        CrcWidth::Crc32,
        0x04C1_1DB7,
        0x0000_0000,
        false,
        false,
        0xFFFF_FFFF,
    );
    /// CRC-32/JAMCRC, check 0x340BC6D9
    pub const CRC32_JAMCRC: Self = Self::preset(
        CrcWidth::Crc32,
        0x04C1_1DB7,
        0xFFFF_FFFF,
        true,
        true,
        0x0000_0000,
    );
    /// CRC-32C (Castagnoli), check 0xE3069283
    pub const CRC32C: Self = Self::preset(
        CrcWidth::Crc32,
        0x1EDC_6F41,
        0xFFFF_FFFF,
        true,
        true,
        0xFFFF_FFFF,
    );
    /// CRC-32/XFER, check 0xBD0BE338
    pub const CRC32_XFER: Self = Self::preset(
        CrcWidth::Crc32,
        0x0000_00AF,
        0x0000_0000,
        false,
        false,
        0x0000_0000,
    );

    /// Validates and builds a parameter set.
    ///
    /// `polynomial`, `initial` and `xor_out` are taken as `u64` so that a value
    /// wider than `width` is reported as [`ChecksumError::ValueOutOfRange`]
    /// rather than silently truncated.
    pub fn new(
        width: CrcWidth,
        polynomial: u64,
        initial: u64,
        reflect_in: bool,
        reflect_out: bool,
        xor_out: u64,
    ) -> Result<Self> {
        let polynomial = Self::check_field(ParamField::Polynomial, polynomial, width)?;
        let initial = Self::check_field(ParamField::InitialValue, initial, width)?;
        let xor_out = Self::check_field(ParamField::FinalXor, xor_out, width)?;

        Ok(Self {
            width,
            polynomial,
            initial,
            reflect_in,
            reflect_out,
            xor_out,
        })
    }

    /// Looks up a catalog entry by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self> {
        CATALOG
            .iter()
            .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
            .map(|(_, params)| *params)
            .ok_or_else(|| ChecksumError::UnknownAlgorithm(name.to_string()))
    }

    /// Every named parameter set, aliases included.
    pub fn catalog() -> impl Iterator<Item = (&'static str, CrcParams)> {
        CATALOG.iter().copied()
    }

    pub const fn width(&self) -> CrcWidth {
        self.width
    }

    pub const fn polynomial(&self) -> u32 {
        self.polynomial
    }

    pub const fn initial(&self) -> u32 {
        self.initial
    }

    pub const fn reflect_in(&self) -> bool {
        self.reflect_in
    }

    pub const fn reflect_out(&self) -> bool {
        self.reflect_out
    }

    pub const fn xor_out(&self) -> u32 {
        self.xor_out
    }

    pub(crate) fn expect_width(&self, expected: CrcWidth) -> Result<()> {
        if self.width == expected {
            Ok(())
        } else {
            Err(ChecksumError::WidthMismatch {
                expected: expected.bits(),
                actual: self.width.bits(),
            })
        }
    }

    fn check_field(field: ParamField, value: u64, width: CrcWidth) -> Result<u32> {
        if value > u64::from(width.mask()) {
            return Err(ChecksumError::ValueOutOfRange {
                field,
                value,
                width: width.bits(),
            });
        }
        Ok(value as u32)
    }

    const fn preset(
        width: CrcWidth,
        polynomial: u32,
        initial: u32,
        reflect_in: bool,
        reflect_out: bool,
        xor_out: u32,
    ) -> Self {
        Self {
            width,
            polynomial,
            initial,
            reflect_in,
            reflect_out,
            xor_out,
        }
    }
}

const CATALOG: &[(&str, CrcParams)] = &[
    ("CRC-8", CrcParams::CRC8),
    ("CRC-8/SMBUS", CrcParams::CRC8),
    ("CRC-8/MAXIM", CrcParams::CRC8_MAXIM),
    ("CRC-8/MAXIM-DOW", CrcParams::CRC8_MAXIM),
    ("CRC-8/SAE-J1850", CrcParams::CRC8_SAE_J1850),
    ("CRC-8/AUTOSAR", CrcParams::CRC8_AUTOSAR),
    ("CRC-8/ROHC", CrcParams::CRC8_ROHC),
    ("CRC-16/CCITT-FALSE", CrcParams::CRC16_CCITT_FALSE),
    ("CRC-16/IBM-3740", CrcParams::CRC16_CCITT_FALSE),
    ("CRC-16/XMODEM", CrcParams::CRC16_XMODEM),
    ("CRC-16/KERMIT", CrcParams::CRC16_KERMIT),
    ("CRC-16/X-25", CrcParams::CRC16_X25),
    ("CRC-16/ARC", CrcParams::CRC16_ARC),
    ("CRC-16/MODBUS", CrcParams::CRC16_MODBUS),
    ("CRC-16/UMTS", CrcParams::CRC16_UMTS),
    ("CRC-16/BUYPASS", CrcParams::CRC16_UMTS),
    ("CRC-16/DNP", CrcParams::CRC16_DNP),
    ("CRC-32", CrcParams::CRC32),
    ("CRC-32/ISO-HDLC", CrcParams::CRC32),
    ("CRC-32/BZIP2", CrcParams::CRC32_BZIP2),
    ("CRC-32/MPEG-2", CrcParams::CRC32_MPEG2),
    ("CRC-32/CKSUM", CrcParams::CRC32_CKSUM),
    ("CRC-32/POSIX", CrcParams::CRC32_CKSUM),
    ("CRC-32/JAMCRC", CrcParams::CRC32_JAMCRC),
    ("CRC-32C", CrcParams::CRC32C),
    ("CRC-32/ISCSI", CrcParams::CRC32C),
    ("CRC-32/XFER", CrcParams::CRC32_XFER),
];

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawCrcParams {
    width: CrcWidth,
    polynomial: u64,
    initial: u64,
    reflect_in: bool,
    reflect_out: bool,
    xor_out: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCrcParams> for CrcParams {
    type Error = ChecksumError;

    fn try_from(raw: RawCrcParams) -> Result<Self> {
        CrcParams::new(
            raw.width,
            raw.polynomial,
            raw.initial,
            raw.reflect_in,
            raw.reflect_out,
            raw.xor_out,
        )
    }
}

#[cfg(feature = "serde")]
impl From<CrcParams> for RawCrcParams {
    fn from(params: CrcParams) -> Self {
        Self {
            width: params.width,
            polynomial: params.polynomial.into(),
            initial: params.initial.into(),
            reflect_in: params.reflect_in,
            reflect_out: params.reflect_out,
            xor_out: params.xor_out.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_from_bits() {
        assert_eq!(CrcWidth::from_bits(8), Ok(CrcWidth::Crc8));
        assert_eq!(CrcWidth::from_bits(16), Ok(CrcWidth::Crc16));
        assert_eq!(CrcWidth::from_bits(32), Ok(CrcWidth::Crc32));
        assert_eq!(
            CrcWidth::from_bits(24),
            Err(ChecksumError::UnsupportedWidth(24))
        );
        assert_eq!(
            CrcWidth::from_bits(64),
            Err(ChecksumError::UnsupportedWidth(64))
        );
    }

    #[test]
    fn test_new_accepts_values_at_width_limit() {
        let params = CrcParams::new(CrcWidth::Crc8, 0xFF, 0xFF, false, true, 0xFF).unwrap();
        assert_eq!(params.polynomial(), 0xFF);
        assert_eq!(params.initial(), 0xFF);
        assert_eq!(params.xor_out(), 0xFF);
        assert!(params.reflect_out());

        let params = CrcParams::new(
            CrcWidth::Crc32,
            0xFFFF_FFFF,
            0xFFFF_FFFF,
            true,
            false,
            0xFFFF_FFFF,
        )
        .unwrap();
        assert_eq!(params.polynomial(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            CrcParams::new(CrcWidth::Crc8, 0x107, 0, false, false, 0),
            Err(ChecksumError::ValueOutOfRange {
                field: ParamField::Polynomial,
                value: 0x107,
                width: 8,
            })
        );
        assert_eq!(
            CrcParams::new(CrcWidth::Crc16, 0x1021, 0x1_0000, false, false, 0),
            Err(ChecksumError::ValueOutOfRange {
                field: ParamField::InitialValue,
                value: 0x1_0000,
                width: 16,
            })
        );
        assert_eq!(
            CrcParams::new(CrcWidth::Crc32, 0x04C1_1DB7, 0, true, true, 0x1_0000_0000),
            Err(ChecksumError::ValueOutOfRange {
                field: ParamField::FinalXor,
                value: 0x1_0000_0000,
                width: 32,
            })
        );
    }

    #[test]
    fn test_new_matches_presets() {
        let params =
            CrcParams::new(CrcWidth::Crc16, 0x1021, 0xFFFF, false, false, 0x0000).unwrap();
        assert_eq!(params, CrcParams::CRC16_CCITT_FALSE);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(CrcParams::from_name("CRC-32"), Ok(CrcParams::CRC32));
        assert_eq!(
            CrcParams::from_name("crc-16/xmodem"),
            Ok(CrcParams::CRC16_XMODEM)
        );
        assert_eq!(
            CrcParams::from_name("CRC-16/IBM-3740"),
            Ok(CrcParams::CRC16_CCITT_FALSE)
        );
        assert_eq!(
            CrcParams::from_name("CRC-64/XZ"),
            Err(ChecksumError::UnknownAlgorithm("CRC-64/XZ".to_string()))
        );
    }

    #[test]
    fn test_catalog_entries_fit_their_width() {
        for (name, params) in CrcParams::catalog() {
            let mask = params.width().mask();
            assert_eq!(params.polynomial() & !mask, 0, "{name}");
            assert_eq!(params.initial() & !mask, 0, "{name}");
            assert_eq!(params.xor_out() & !mask, 0, "{name}");
            assert_eq!(CrcParams::from_name(name), Ok(params));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates_on_deserialize() {
        let json = serde_json::to_string(&CrcParams::CRC16_ARC).unwrap();
        let back: CrcParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CrcParams::CRC16_ARC);

        let bad = r#"{"width":8,"polynomial":263,"initial":0,"reflect_in":false,"reflect_out":false,"xor_out":0}"#;
        assert!(serde_json::from_str::<CrcParams>(bad).is_err());

        let bad_width = r#"{"width":12,"polynomial":7,"initial":0,"reflect_in":false,"reflect_out":false,"xor_out":0}"#;
        assert!(serde_json::from_str::<CrcParams>(bad_width).is_err());
    }
}
