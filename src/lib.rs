//! # kmerhist
//!
//! Builds a k-mer frequency histogram from FASTQ reads.
//!
//! Every read's sequence is scanned with a window of width k; each window
//! without an ambiguous base (`N`) is counted. The counts are then reduced to
//! a frequency distribution, "how many distinct k-mers were seen exactly N
//! times", and written as a two-column table:
//!
//! ```text
//! Freq	Numb
//! 1	5012
//! 2	311
//! ...
//! ```
//!
//! K-mers are counted exactly as they appear in the reads; reverse
//! complements are not merged.
//!
//! ## Quick start
//!
//! ```rust
//! use kmerhist::{kmer::KmerLength, run::histogram_from_reader};
//!
//! let fastq = b"@read1\nACGT\n+\nIIII\n";
//! let hist = histogram_from_reader(&fastq[..], KmerLength::new(1)?)?;
//! assert_eq!(hist.get(&1), Some(&4));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): structured spans and events via `tracing`
//! - `gzip`: transparent decompression of `.gz` inputs

pub mod cli;
pub mod config;
pub mod counter;
pub mod error;
pub mod fastq;
pub mod histogram;
pub mod input;
pub mod kmer;
pub mod progress;
pub mod run;
