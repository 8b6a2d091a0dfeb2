//! K-mer counting and reduction to a frequency distribution.
//!
//! [`KmerHistogram`] owns the k-mer table for the whole run. It moves through
//! three phases in order: counting (every record's sequence is folded into the
//! table), reducing (the table is collapsed into a [`FrequencyDistribution`]),
//! and done. The table itself is never exposed.
//!
//! # Example
//!
//! ```rust
//! use kmerhist::counter::KmerHistogram;
//! use kmerhist::kmer::KmerLength;
//!
//! let mut histogram = KmerHistogram::new(KmerLength::new(2)?);
//! histogram.record_sequence(b"AAAA");
//!
//! let distribution = histogram.into_distribution();
//! assert_eq!(distribution.get(&3), Some(&1)); // "AA" seen 3 times
//! # Ok::<(), kmerhist::error::KmerLengthError>(())
//! ```

use std::hash::BuildHasherDefault;

use bytes::Bytes;
use rustc_hash::FxHasher;

use crate::{
    error::KmerHistError,
    fastq::Record,
    histogram::{compute_histogram, FrequencyDistribution},
    kmer::{KmerLength, ValidKmers},
    progress::{Progress, ProgressTracker},
};

#[cfg(feature = "tracing")]
use tracing::{debug, info, info_span};

/// A `HashMap` keyed by k-mer bytes with `FxHasher`.
type KmerTable = std::collections::HashMap<Bytes, u64, BuildHasherDefault<FxHasher>>;

/// Single-threaded k-mer counter producing a frequency distribution.
#[derive(Debug)]
pub struct KmerHistogram {
    k: KmerLength,
    table: KmerTable,
    windows: u64,
}

impl KmerHistogram {
    /// Creates an empty counter for k-mers of length `k`.
    #[must_use]
    pub fn new(k: KmerLength) -> Self {
        Self {
            k,
            table: KmerTable::default(),
            windows: 0,
        }
    }

    /// Number of distinct k-mers counted so far.
    #[must_use]
    pub fn distinct_kmers(&self) -> usize {
        self.table.len()
    }

    /// Number of `N`-free windows counted so far.
    #[must_use]
    pub const fn total_kmers(&self) -> u64 {
        self.windows
    }

    /// Counts every `N`-free window of `seq`.
    ///
    /// Sequences shorter than k contribute nothing.
    pub fn record_sequence(&mut self, seq: &[u8]) {
        for kmer in ValidKmers::new(seq, self.k) {
            self.windows += 1;
            if let Some(count) = self.table.get_mut(kmer) {
                *count += 1;
            } else {
                self.table.insert(Bytes::copy_from_slice(kmer), 1);
            }
        }
    }

    /// Counts every record from `source`, then reduces the table.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `source`; nothing is reduced in
    /// that case.
    pub fn run<I>(self, source: I) -> Result<FrequencyDistribution, KmerHistError>
    where
        I: IntoIterator<Item = Result<Record, KmerHistError>>,
    {
        self.run_with_progress(source, |_| {})
    }

    /// Like [`run`](Self::run), invoking `callback` after every record.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `source`.
    pub fn run_with_progress<I, F>(
        mut self,
        source: I,
        callback: F,
    ) -> Result<FrequencyDistribution, KmerHistError>
    where
        I: IntoIterator<Item = Result<Record, KmerHistError>>,
        F: FnMut(&Progress),
    {
        self.count_with_progress(source, callback)?;
        Ok(self.into_distribution())
    }

    /// Folds every record from `source` into the table without reducing it,
    /// invoking `callback` after each record.
    ///
    /// Counting may be resumed with further sources; records already counted
    /// before an error stay in the table.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `source`.
    pub fn count_with_progress<I, F>(
        &mut self,
        source: I,
        mut callback: F,
    ) -> Result<(), KmerHistError>
    where
        I: IntoIterator<Item = Result<Record, KmerHistError>>,
        F: FnMut(&Progress),
    {
        #[cfg(feature = "tracing")]
        let count_span = info_span!("count_kmers", k = self.k.get()).entered();

        let mut tracker = ProgressTracker::new();
        for record in source {
            let record = record?;
            self.record_sequence(&record.seq);
            tracker.record_sequence(record.seq.len() as u64);
            callback(tracker.snapshot());
        }

        #[cfg(feature = "tracing")]
        {
            drop(count_span);
            info!(
                records = tracker.snapshot().records_processed,
                bases = tracker.snapshot().bases_processed,
                kmers = self.windows,
                distinct_kmers = self.table.len(),
                "Counting complete"
            );
        }

        Ok(())
    }

    /// Collapses the table into a frequency distribution in one pass.
    #[must_use]
    pub fn into_distribution(self) -> FrequencyDistribution {
        #[cfg(feature = "tracing")]
        let _span = info_span!("reduce", distinct_kmers = self.table.len()).entered();

        let distribution = compute_histogram(self.table.into_values());

        #[cfg(feature = "tracing")]
        debug!(distinct_counts = distribution.len(), "Reduction complete");

        distribution
    }
}
