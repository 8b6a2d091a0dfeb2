//! Fuzz target for `FastqReader`.
//!
//! Arbitrary bytes must never panic the reader. Every record it yields has a
//! sequence free of whitespace and lowercase ASCII.

#![no_main]

use kmerhist::fastq::FastqReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut errors = 0;
    for record in FastqReader::new(data) {
        match record {
            Ok(record) => {
                assert!(!record.seq.iter().any(u8::is_ascii_whitespace));
                assert!(!record.seq.iter().any(u8::is_ascii_lowercase));
            }
            Err(_) => errors += 1,
        }
    }
    // the reader is fused after the first error
    assert!(errors <= 1);
});
