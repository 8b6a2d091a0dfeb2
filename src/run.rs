//! End-to-end histogram generation.
//!
//! [`run`] performs the whole job for a [`Config`]: read every FASTQ record,
//! count k-mers, reduce to a frequency distribution and write `<base>.txt`.
//! The output file is only created once counting and reduction have
//! succeeded, so a failed read never leaves a histogram behind.

use std::{io::BufRead, path::PathBuf};

use crate::{
    config::Config,
    counter::KmerHistogram,
    error::KmerHistError,
    fastq::FastqReader,
    histogram::{write_histogram_file, FrequencyDistribution},
    input::Input,
    kmer::KmerLength,
    progress::{Phase, Progress},
};

#[cfg(feature = "tracing")]
use tracing::info;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// The distribution that was written.
    pub distribution: FrequencyDistribution,
    /// Where it was written.
    pub output_path: PathBuf,
}

/// Builds the frequency distribution for `input` without writing anything.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read.
pub fn build_histogram(
    input: &Input,
    k: KmerLength,
) -> Result<FrequencyDistribution, KmerHistError> {
    build_histogram_with_progress(input, k, |_| {})
}

/// Like [`build_histogram`], invoking `callback` after every record.
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read.
pub fn build_histogram_with_progress<F>(
    input: &Input,
    k: KmerLength,
    callback: F,
) -> Result<FrequencyDistribution, KmerHistError>
where
    F: FnMut(&Progress),
{
    #[cfg(feature = "tracing")]
    info!(k = k.get(), input = %input, "Starting k-mer histogram");

    let reader = FastqReader::open(input)?;
    KmerHistogram::new(k).run_with_progress(reader, callback)
}

/// Builds the frequency distribution from an already-open stream.
///
/// # Example
///
/// ```rust
/// use kmerhist::kmer::KmerLength;
/// use kmerhist::run::histogram_from_reader;
///
/// let fastq = b"@r1\nAAAA\n+\nIIII\n";
/// let hist = histogram_from_reader(&fastq[..], KmerLength::new(2)?)?;
/// assert_eq!(hist.get(&3), Some(&1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns an error if reading from `reader` fails.
pub fn histogram_from_reader<R: BufRead>(
    reader: R,
    k: KmerLength,
) -> Result<FrequencyDistribution, KmerHistError> {
    KmerHistogram::new(k).run(FastqReader::new(reader))
}

/// Runs the full pipeline and writes the histogram file.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written.
pub fn run(config: &Config) -> Result<RunSummary, KmerHistError> {
    run_with_progress(config, |_| {})
}

/// Like [`run`], invoking `callback` after every record.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written.
pub fn run_with_progress<F>(config: &Config, callback: F) -> Result<RunSummary, KmerHistError>
where
    F: FnMut(&Progress),
{
    run_with_phases(config, |_| {}, callback)
}

/// Like [`run_with_progress`], also calling `on_phase` as each stage begins.
///
/// Stages are reported in order: [`Phase::Counting`] once the input is open,
/// [`Phase::Building`] after the last record, and [`Phase::Writing`] just
/// before the output file is created. A failed stage reports nothing further.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written.
pub fn run_with_phases<P, F>(
    config: &Config,
    mut on_phase: P,
    on_progress: F,
) -> Result<RunSummary, KmerHistError>
where
    P: FnMut(Phase),
    F: FnMut(&Progress),
{
    #[cfg(feature = "tracing")]
    info!(k = config.k.get(), input = %config.input, "Starting k-mer histogram");

    let reader = FastqReader::open(&config.input)?;

    on_phase(Phase::Counting);
    let mut counter = KmerHistogram::new(config.k);
    counter.count_with_progress(reader, on_progress)?;

    on_phase(Phase::Building);
    let distribution = counter.into_distribution();

    let output_path = config.output_path();
    on_phase(Phase::Writing);
    write_histogram_file(&distribution, &output_path)?;

    #[cfg(feature = "tracing")]
    info!(
        output = ?output_path,
        distinct_counts = distribution.len(),
        "Histogram complete"
    );

    Ok(RunSummary {
        distribution,
        output_path,
    })
}
