//! K-mer frequency histogram computation and output.
//!
//! A frequency distribution maps an occurrence count to the number of distinct
//! k-mers seen exactly that many times (count of counts). It is stored as a
//! `BTreeMap`, so iteration is always in ascending count order regardless of
//! the order in which the k-mer table was visited.
//!
//! # Example
//!
//! ```rust
//! use kmerhist::histogram::{compute_histogram, write_histogram};
//!
//! // counts of four distinct k-mers
//! let hist = compute_histogram([1, 2, 1, 2]);
//!
//! let mut out = Vec::new();
//! write_histogram(&hist, &mut out)?;
//! assert_eq!(out, b"Freq\tNumb\n1\t2\n2\t2\n");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::KmerHistError;

#[cfg(feature = "tracing")]
use tracing::{debug, info_span};

/// Count -> number of distinct k-mers with that count, ascending by count.
pub type FrequencyDistribution = BTreeMap<u64, u64>;

/// First line of every histogram file.
pub const HEADER: &str = "Freq\tNumb";

/// Summary statistics for a frequency distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramStats {
    /// Total k-mer occurrences (sum of all k-mer counts).
    pub total_kmers: u64,
    /// Number of distinct k-mers.
    pub distinct_kmers: u64,
    /// The count value shared by the most k-mers.
    pub mode_count: u64,
    /// Number of k-mers that have the mode count.
    pub mode_frequency: u64,
    /// Average count per distinct k-mer.
    pub mean_count: f64,
}

/// Builds a frequency distribution from per-k-mer counts in one pass.
///
/// Each input value is the occurrence count of one distinct k-mer.
#[must_use]
pub fn compute_histogram<I>(counts: I) -> FrequencyDistribution
where
    I: IntoIterator<Item = u64>,
{
    let mut histogram = BTreeMap::new();
    for count in counts {
        *histogram.entry(count).or_insert(0) += 1;
    }
    histogram
}

/// Computes summary statistics for a frequency distribution.
///
/// When several counts tie for the mode, the smallest count wins.
///
/// ```rust
/// use kmerhist::histogram::{compute_histogram, histogram_stats};
///
/// let stats = histogram_stats(&compute_histogram([1, 1, 2, 2]));
/// assert_eq!(stats.distinct_kmers, 4);
/// assert_eq!(stats.total_kmers, 6);
/// ```
#[must_use]
pub fn histogram_stats(histogram: &FrequencyDistribution) -> HistogramStats {
    let distinct: u64 = histogram.values().sum();
    let total: u64 = histogram.iter().map(|(c, f)| c * f).sum();

    let (mode_count, mode_frequency) = histogram
        .iter()
        .fold(None, |best: Option<(u64, u64)>, (&c, &f)| match best {
            Some((_, bf)) if bf >= f => best,
            _ => Some((c, f)),
        })
        .unwrap_or((0, 0));

    HistogramStats {
        total_kmers: total,
        distinct_kmers: distinct,
        mode_count,
        mode_frequency,
        #[allow(clippy::cast_precision_loss)]
        mean_count: if distinct > 0 {
            total as f64 / distinct as f64
        } else {
            0.0
        },
    }
}

/// Writes the two-column table: header, then one `count\tkmers` row per
/// distinct count in ascending order.
pub fn write_histogram<W: Write>(
    histogram: &FrequencyDistribution,
    mut writer: W,
) -> std::io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for (count, kmers) in histogram {
        writeln!(writer, "{count}\t{kmers}")?;
    }
    writer.flush()
}

/// Creates (or truncates) `path` and writes the histogram to it.
///
/// # Errors
///
/// Returns [`KmerHistError::OutputWrite`] if the file cannot be created,
/// written or flushed.
pub fn write_histogram_file(
    histogram: &FrequencyDistribution,
    path: &Path,
) -> Result<(), KmerHistError> {
    #[cfg(feature = "tracing")]
    let _span = info_span!("write_histogram", path = ?path, rows = histogram.len()).entered();

    let to_error = |source: std::io::Error| KmerHistError::OutputWrite {
        source,
        path: path.to_path_buf(),
    };

    let file = File::create(path).map_err(to_error)?;
    write_histogram(histogram, BufWriter::new(file)).map_err(to_error)?;

    #[cfg(feature = "tracing")]
    debug!(rows = histogram.len(), "Histogram written");

    Ok(())
}

impl std::fmt::Display for HistogramStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "total k-mers:    {}", self.total_kmers)?;
        writeln!(f, "distinct k-mers: {}", self.distinct_kmers)?;
        writeln!(
            f,
            "mode:            {} ({} k-mers)",
            self.mode_count, self.mode_frequency
        )?;
        write!(f, "mean count:      {:.2}", self.mean_count)
    }
}
