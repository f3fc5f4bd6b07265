#![no_main]
use libfuzzer_sys::fuzz_target;
use librscheck::prelude::*;
use std::convert::TryInto;

fuzz_target!(|data: &[u8]| {
    if data.len() >= 13 {
        let width = match data[0] % 3 {
            0 => CrcWidth::Crc8,
            1 => CrcWidth::Crc16,
            _ => CrcWidth::Crc32,
        };
        let mask = u64::from(width.mask());
        let polynomial = u64::from(u32::from_le_bytes(data[1..5].try_into().unwrap())) & mask;
        let initial = u64::from(u32::from_le_bytes(data[5..9].try_into().unwrap())) & mask;
        let xor_out = u64::from(u32::from_le_bytes(data[9..13].try_into().unwrap())) & mask;
        let params = CrcParams::new(
            width,
            polynomial,
            initial,
            data[0] & 0x10 != 0,
            data[0] & 0x20 != 0,
            xor_out,
        )
        .unwrap();
        let data = &data[13..];

        let mut naive = Crc::new_naive(params);
        let mut lookup = Crc::new_lookup(params);
        let (head, tail) = data.split_at(data.len() / 2);
        naive.update(data);
        lookup.update(head);
        lookup.update(tail);
        let naive_result = naive.digest();
        assert_eq!(naive_result, lookup.digest());
        assert_eq!(naive_result & !width.mask(), 0);
    }
});
