//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

use crate::kmer::{KmerLength, DEFAULT_K};

/// Generate a k-mer frequency histogram from FASTQ reads.
///
/// Writes a tab-separated `Freq`/`Numb` table to `<OUTPUT>.txt`, suitable for
/// plotting.
#[derive(Parser, Debug)]
#[command(name = "kmerhist")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Input FASTQ file ("-" or an empty string reads stdin)
    pub input: String,

    /// Output file name without extension (".txt" is appended)
    pub output: PathBuf,

    /// K-mer length
    #[arg(short, long = "kmer", value_parser = parse_k, default_value_t = DEFAULT_K)]
    pub k: usize,

    /// Print summary statistics of the histogram
    #[arg(long)]
    pub stats: bool,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_k(s: &str) -> Result<usize, String> {
    let k: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    KmerLength::new(k).map_err(|e| e.to_string())?;
    Ok(k)
}
