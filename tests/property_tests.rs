//! Property-based tests using proptest.
//!
//! These check the histogram invariants against a naive reference count over
//! random reads, including reads with ambiguous bases.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use kmerhist::counter::KmerHistogram;
use kmerhist::histogram::{compute_histogram, write_histogram};
use kmerhist::kmer::KmerLength;
use kmerhist::run::histogram_from_reader;
use proptest::prelude::*;
use std::collections::HashMap;

/// Strategy for reads over ACGT with the occasional N.
fn read_sequence(max_len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            4 => Just('A'),
            4 => Just('C'),
            4 => Just('G'),
            4 => Just('T'),
            1 => Just('N'),
        ],
        0..=max_len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn reads() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(read_sequence(60), 0..20)
}

/// Straightforward slice-and-count reference.
fn naive_counts(reads: &[String], k: usize) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    for read in reads {
        if read.len() < k {
            continue;
        }
        for i in 0..=read.len() - k {
            let kmer = &read[i..i + k];
            if !kmer.contains('N') {
                *counts.entry(kmer.to_string()).or_insert(0) += 1;
            }
        }
    }
    counts
}

fn to_fastq(reads: &[String]) -> String {
    reads
        .iter()
        .enumerate()
        .map(|(i, seq)| format!("@read{i}\n{seq}\n+\n{}\n", "I".repeat(seq.len())))
        .collect()
}

proptest! {
    /// The distribution equals the count-of-counts of the naive table.
    #[test]
    fn matches_naive_reference(reads in reads(), k in 1usize..=8) {
        let mut counter = KmerHistogram::new(KmerLength::new(k).unwrap());
        for read in &reads {
            counter.record_sequence(read.as_bytes());
        }
        let expected = compute_histogram(naive_counts(&reads, k).into_values());
        prop_assert_eq!(counter.into_distribution(), expected);
    }

    /// Distinct and total k-mer sums agree with the reference.
    #[test]
    fn sums_match_window_totals(reads in reads(), k in 1usize..=8) {
        let naive = naive_counts(&reads, k);
        let fastq = to_fastq(&reads);
        let hist = histogram_from_reader(fastq.as_bytes(), KmerLength::new(k).unwrap()).unwrap();

        let distinct: u64 = hist.values().sum();
        let total: u64 = hist.iter().map(|(c, n)| c * n).sum();
        prop_assert_eq!(distinct, naive.len() as u64);
        prop_assert_eq!(total, naive.values().sum::<u64>());
    }

    /// Output rows are strictly ascending by count.
    #[test]
    fn rows_strictly_ascending(counts in proptest::collection::vec(1u64..10_000, 0..500)) {
        let hist = compute_histogram(counts);
        let mut out = Vec::new();
        write_histogram(&hist, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        prop_assert_eq!(lines.next(), Some("Freq\tNumb"));

        let firsts: Vec<u64> = lines
            .map(|line| line.split('\t').next().unwrap().parse().unwrap())
            .collect();
        prop_assert!(firsts.windows(2).all(|w| w[0] < w[1]));
    }

    /// Counting the same reads twice gives byte-identical output.
    #[test]
    fn output_is_deterministic(reads in reads(), k in 1usize..=6) {
        let fastq = to_fastq(&reads);
        let k = KmerLength::new(k).unwrap();

        let render = || {
            let hist = histogram_from_reader(fastq.as_bytes(), k).unwrap();
            let mut out = Vec::new();
            write_histogram(&hist, &mut out).unwrap();
            out
        };
        prop_assert_eq!(render(), render());
    }

    /// Every well-formed record is read back with its sequence intact.
    #[test]
    fn fastq_records_round_trip(reads in reads()) {
        let fastq = to_fastq(&reads);
        let parsed: Vec<String> = kmerhist::fastq::FastqReader::new(fastq.as_bytes())
            .map(|r| String::from_utf8(r.unwrap().seq.to_vec()).unwrap())
            .collect();
        prop_assert_eq!(parsed, reads);
    }
}
