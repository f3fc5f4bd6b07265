//! Property tests for the CRC and Fletcher engines.
//!
//! The bit-loop CRC is the oracle for the table-driven one across arbitrary
//! parameter sets; `crc32fast` is an external oracle for CRC-32.

use librscheck::crc::{CustomCrc, LookupTable, TableCache};
use librscheck::prelude::*;
use proptest::prelude::*;

fn crc_width() -> impl Strategy<Value = CrcWidth> {
    prop_oneof![
        Just(CrcWidth::Crc8),
        Just(CrcWidth::Crc16),
        Just(CrcWidth::Crc32),
    ]
}

fn crc_params() -> impl Strategy<Value = CrcParams> {
    (
        crc_width(),
        any::<u32>(),
        any::<u32>(),
        any::<bool>(),
        any::<bool>(),
        any::<u32>(),
    )
        .prop_map(|(width, poly, init, refin, refout, xorout)| {
            let mask = width.mask();
            CrcParams::new(
                width,
                (poly & mask).into(),
                (init & mask).into(),
                refin,
                refout,
                (xorout & mask).into(),
            )
            .unwrap()
        })
}

fn fletcher_width() -> impl Strategy<Value = FletcherWidth> {
    prop_oneof![
        Just(FletcherWidth::Fletcher16),
        Just(FletcherWidth::Fletcher32),
        Just(FletcherWidth::Fletcher64),
    ]
}

fn digest(mut crc: Crc, data: &[u8]) -> u32 {
    crc.update(data);
    crc.digest()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn naive_and_lookup_agree(
        params in crc_params(),
        data in proptest::collection::vec(any::<u8>(), 0..=1024),
    ) {
        let naive = digest(Crc::new_naive(params), &data);
        let lookup = digest(Crc::new_lookup(params), &data);
        prop_assert_eq!(naive, lookup);
    }

    #[test]
    fn crc_fits_width(
        params in crc_params(),
        data in proptest::collection::vec(any::<u8>(), 0..=256),
    ) {
        let crc = digest(Crc::new_lookup(params), &data);
        prop_assert_eq!(crc & !params.width().mask(), 0);
    }

    #[test]
    fn crc_empty_input_is_finalized_initial(params in crc_params()) {
        let expected = if params.reflect_out() {
            CustomCrc::reflect(params.initial() ^ params.xor_out(), params.width())
        } else {
            params.initial() ^ params.xor_out()
        };
        prop_assert_eq!(digest(Crc::new_naive(params), &[]), expected);
        prop_assert_eq!(digest(Crc::new_lookup(params), &[]), expected);
    }

    #[test]
    fn crc_chunking_matches_one_shot(
        params in crc_params(),
        data in proptest::collection::vec(any::<u8>(), 0..=1024),
        chunk in 1usize..=67,
    ) {
        let mut crc = Crc::new_lookup(params);
        for part in data.chunks(chunk) {
            crc.update(part);
        }
        prop_assert_eq!(crc.digest(), Crc::checksum(params, &data));
    }

    #[test]
    fn crc_is_deterministic(
        params in crc_params(),
        data in proptest::collection::vec(any::<u8>(), 0..=256),
    ) {
        prop_assert_eq!(Crc::checksum(params, &data), Crc::checksum(params, &data));
    }

    #[test]
    fn crc32_matches_crc32fast(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
        prop_assert_eq!(crc32(&data), crc32fast::hash(&data));
    }

    #[test]
    fn default_entry_points_fit_width(data in proptest::collection::vec(any::<u8>(), 0..=512)) {
        prop_assert_eq!(u32::from(crc8(&data)), Crc::checksum(CrcParams::CRC8, &data));
        prop_assert_eq!(u32::from(crc16(&data)), Crc::checksum(CrcParams::CRC16_CCITT_FALSE, &data));
        for algorithm in Algorithm::ALL {
            let bits = algorithm.output_bits();
            if bits < 64 {
                prop_assert_eq!(algorithm.checksum(&data) >> bits, 0);
            }
        }
    }

    #[test]
    fn cached_table_matches_fresh(poly in any::<u32>(), width in crc_width()) {
        let poly = poly & width.mask();
        let cache = TableCache::new();
        let first = cache.get_or_build(poly, width);
        let second = cache.get_or_build(poly, width);
        prop_assert_eq!(&*first, &LookupTable::new(poly, width));
        prop_assert_eq!(first.entries(), second.entries());
    }

    #[test]
    fn fletcher_chunking_matches_one_shot(
        width in fletcher_width(),
        data in proptest::collection::vec(any::<u8>(), 0..=1024),
        chunk in 1usize..=11,
    ) {
        let mut fletcher = Fletcher::new(width);
        for part in data.chunks(chunk) {
            fletcher.update(part);
        }
        prop_assert_eq!(fletcher.digest(), Fletcher::checksum(width, &data));
    }

    #[test]
    fn fletcher_padding_is_logical_zero_fill(
        width in fletcher_width(),
        data in proptest::collection::vec(any::<u8>(), 0..=256),
    ) {
        let mut padded = data.clone();
        while padded.len() % width.word_bytes() != 0 {
            padded.push(0);
        }
        prop_assert_eq!(Fletcher::checksum(width, &data), Fletcher::checksum(width, &padded));
    }

    #[test]
    fn fletcher_fits_width(
        width in fletcher_width(),
        data in proptest::collection::vec(any::<u8>(), 0..=512),
    ) {
        let sum = Fletcher::checksum(width, &data);
        let modulus = width.modulus();
        prop_assert!(sum & modulus < modulus);
        prop_assert!((sum >> width.word_bits()) & modulus < modulus);
        if width.output_bits() < 64 {
            prop_assert_eq!(sum >> width.output_bits(), 0);
        }
    }
}
