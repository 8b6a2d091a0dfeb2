//! Tests for gzip compressed input support.

#![cfg(feature = "gzip")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use flate2::{write::GzEncoder, Compression};
use kmerhist::error::KmerHistError;
use kmerhist::input::Input;
use kmerhist::kmer::KmerLength;
use kmerhist::run::build_histogram;
use std::io::Write;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn gzip_and_plain_produce_same_results() {
    let dir = tempdir().unwrap();
    let gz_path = dir.path().join("simple.fq.gz");

    let plain = std::fs::read(fixture_path("simple.fq")).unwrap();
    let mut encoder = GzEncoder::new(std::fs::File::create(&gz_path).unwrap(), Compression::default());
    encoder.write_all(&plain).unwrap();
    encoder.finish().unwrap();

    let k = KmerLength::new(3).unwrap();
    let plain_hist = build_histogram(&Input::File(fixture_path("simple.fq")), k).unwrap();
    let gzip_hist = build_histogram(&Input::File(gz_path), k).expect("should read gzipped file");

    assert_eq!(plain_hist, gzip_hist);
}

#[test]
fn corrupt_gzip_is_reported() {
    let dir = tempdir().unwrap();
    let gz_path = dir.path().join("broken.fq.gz");
    std::fs::write(&gz_path, b"definitely not gzip data").unwrap();

    let err = build_histogram(&Input::File(gz_path), KmerLength::new(3).unwrap()).unwrap_err();
    assert!(matches!(err, KmerHistError::GzipError { .. }));
}
