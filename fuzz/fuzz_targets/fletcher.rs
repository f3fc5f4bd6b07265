#![no_main]
use libfuzzer_sys::fuzz_target;
use librscheck::prelude::*;

fuzz_target!(|data: &[u8]| {
    if let Some((&split, data)) = data.split_first() {
        let split = usize::from(split).min(data.len());
        let (head, tail) = data.split_at(split);
        for width in [
            FletcherWidth::Fletcher16,
            FletcherWidth::Fletcher32,
            FletcherWidth::Fletcher64,
        ] {
            let mut fletcher = Fletcher::new(width);
            fletcher.update(head);
            fletcher.update(tail);
            assert_eq!(fletcher.digest(), Fletcher::checksum(width, data));
        }
    }
});
