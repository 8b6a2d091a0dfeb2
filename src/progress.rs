//! Progress reporting.
//!
//! [`KmerHistogram::run_with_progress`](crate::counter::KmerHistogram::run_with_progress)
//! hands a [`Progress`] snapshot to a callback after every record, and
//! [`run_with_phases`](crate::run::run_with_phases) announces each [`Phase`].
//!
//! # Example
//!
//! ```rust
//! use kmerhist::counter::KmerHistogram;
//! use kmerhist::fastq::FastqReader;
//! use kmerhist::kmer::KmerLength;
//!
//! let data = b"@r1\nACGT\n+\nIIII\n@r2\nAC\n+\nII\n";
//! let mut last = None;
//! let histogram = KmerHistogram::new(KmerLength::new(2)?);
//! histogram.run_with_progress(FastqReader::new(&data[..]), |progress| {
//!     last = Some(progress.clone());
//! })?;
//!
//! let last = last.unwrap();
//! assert_eq!(last.records_processed, 2);
//! assert_eq!(last.bases_processed, 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Stage of a full histogram run, reported before the stage starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reading records and counting k-mers.
    Counting,
    /// Reducing the k-mer table to a frequency distribution.
    Building,
    /// Writing the output file.
    Writing,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Counting => "Counting k-mers...",
            Self::Building => "Building histogram...",
            Self::Writing => "Writing histogram...",
        };
        f.write_str(label)
    }
}

/// Progress snapshot during k-mer counting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    /// Number of records processed so far.
    pub records_processed: u64,
    /// Total number of sequence bases processed so far.
    pub bases_processed: u64,
}

/// Running totals for the counting phase.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    current: Progress,
}

impl ProgressTracker {
    /// Create a new progress tracker with zero counts.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Progress {
                records_processed: 0,
                bases_processed: 0,
            },
        }
    }

    /// Record that a sequence of `bases` length has been processed.
    pub fn record_sequence(&mut self, bases: u64) {
        self.current.records_processed += 1;
        self.current.bases_processed += bases;
    }

    /// Current totals.
    pub const fn snapshot(&self) -> &Progress {
        &self.current
    }
}
