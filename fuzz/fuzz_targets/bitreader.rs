#![no_main]

use bitstream::BitReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut reader) = BitReader::new(input) else {
        return;
    };

    // Use input bytes to drive a bounded sequence of reads.
    for &byte in data.iter().take(1024) {
        if byte % 4 == 0 {
            let _ = reader.read_bool();
        } else {
            let _ = reader.read_bits(byte % 34);
        }
    }
});
