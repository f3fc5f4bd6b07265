use crate::crc::params::{CrcParams, CrcWidth};

/// Bit-loop and table-driven CRC steps over a width-bounded register.
///
/// Registers are carried in a `u32` for every width; the live bits are the
/// low `width` bits. Input bytes always enter at the top 8 bits of the
/// register, so results do not depend on host byte order.
pub struct CustomCrc {}

impl CustomCrc {
    /// Advances `register` over `data` one bit at a time.
    ///
    /// Returns the raw register; apply [`CustomCrc::finalize`] to obtain the
    /// checksum.
    pub const fn crc_naive(mut register: u32, params: &CrcParams, data: &[u8]) -> u32 {
        let width = params.width();
        let polynomial = params.polynomial();
        let mut i = 0;
        let mut j = 0;

        while i < data.len() {
            let byte = if params.reflect_in() {
                data[i].reverse_bits()
            } else {
                data[i]
            };
            register ^= (byte as u32) << width.byte_shift();

            while j < 8 {
                if register & width.top_bit() != 0 {
                    register = (register << 1) ^ polynomial;
                } else {
                    register <<= 1;
                }
                j += 1;
            }
            register &= width.mask();
            j = 0;
            i += 1;
        }

        register
    }

    /// Advances `register` over `data` with one table lookup per byte.
    ///
    /// `table` must come from [`CustomCrc::generate_lookup_table`] for the
    /// polynomial and width in `params`.
    pub fn crc_lookup(mut register: u32, params: &CrcParams, table: &[u32; 256], data: &[u8]) -> u32 {
        let width = params.width();
        let shift = width.byte_shift();
        let mask = width.mask();

        if params.reflect_in() {
            for &b in data {
                let index = ((register >> shift) as u8 ^ b.reverse_bits()) as usize;
                register = ((register << 8) ^ table[index]) & mask;
            }
        } else {
            for &b in data {
                let index = ((register >> shift) as u8 ^ b) as usize;
                register = ((register << 8) ^ table[index]) & mask;
            }
        }

        register
    }

    /// Applies the final XOR and, if requested, reverses all `width` bits.
    pub const fn finalize(register: u32, params: &CrcParams) -> u32 {
        let width = params.width();
        let mut crc = register ^ params.xor_out();
        if params.reflect_out() {
            crc = Self::reflect(crc, width);
        }
        crc & width.mask()
    }

    /// Reverses the low `width` bits of `value`.
    pub const fn reflect(value: u32, width: CrcWidth) -> u32 {
        value.reverse_bits() >> (32 - width.bits())
    }

    /// Builds the 256-entry table for `polynomial`: entry `n` is the register
    /// after running byte `n`, placed in the top 8 bits, through the bit loop.
    pub const fn generate_lookup_table(polynomial: u32, width: CrcWidth) -> [u32; 256] {
        let mut table = [0; 256];
        let mut length = 0;
        let mut crc;
        let mut j = 0;

        while length < 256 {
            crc = (length as u32) << width.byte_shift();
            while j < 8 {
                if crc & width.top_bit() != 0 {
                    crc = (crc << 1) ^ polynomial;
                } else {
                    crc <<= 1;
                }
                j += 1;
            }
            table[length] = crc & width.mask();
            j = 0;
            length += 1;
        }

        table
    }
}
