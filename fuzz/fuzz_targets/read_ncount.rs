#![no_main]
use libfuzzer_sys::fuzz_target;
use ncount_fse::{read_ncount, FSE_MIN_TABLELOG, FSE_TABLELOG_ABSOLUTE_MAX};

fuzz_target!(|data: (u8, Vec<u8>)| {
    let (max_symbol_value, header) = data;
    let max_symbol_value = max_symbol_value as u32;

    let mut counter = [0i16; 256];
    let Ok(parsed) = read_ncount(&mut counter, max_symbol_value, &header) else {
        return;
    };

    assert!(parsed.table_log >= FSE_MIN_TABLELOG);
    assert!(parsed.table_log <= FSE_TABLELOG_ABSOLUTE_MAX);
    assert!(parsed.max_symbol_value <= max_symbol_value);
    assert!(parsed.header_size <= header.len());

    let mass: u32 = counter[..=parsed.max_symbol_value as usize]
        .iter()
        .map(|&c| c.unsigned_abs() as u32)
        .sum();
    assert_eq!(mass, 1 << parsed.table_log);
});
