//! Fuzz target for `ValidKmers`.
//!
//! The first byte picks k; the rest is the sequence. Every produced window
//! must have length k and no ambiguous base, and no more windows than
//! `window_count` may be produced.

#![no_main]

use kmerhist::kmer::{window_count, KmerLength, ValidKmers, AMBIGUOUS_BASE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&first, seq)) = data.split_first() else {
        return;
    };
    let Ok(k) = KmerLength::new(usize::from(first % 40)) else {
        return;
    };

    let mut produced = 0;
    for window in ValidKmers::new(seq, k) {
        assert_eq!(window.len(), k.get());
        assert!(!window.contains(&AMBIGUOUS_BASE));
        produced += 1;
    }
    assert!(produced <= window_count(seq.len(), k));
});
