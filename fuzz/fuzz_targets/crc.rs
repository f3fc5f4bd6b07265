#![no_main]
use libfuzzer_sys::fuzz_target;
use librscheck::prelude::*;

fuzz_target!(|data: &[u8]| {
    for params in [CrcParams::CRC8, CrcParams::CRC16_CCITT_FALSE, CrcParams::CRC32] {
        let mut naive = Crc::new_naive(params);
        let mut lookup = Crc::new_lookup(params);
        naive.update(data);
        lookup.update(data);
        assert_eq!(naive.digest(), lookup.digest());
    }
    assert_eq!(u32::from(crc8(data)), Crc::checksum(CrcParams::CRC8, data));
});
