//! Error types for kmerhist.
//!
//! Every fallible operation in the library returns [`KmerHistError`]. Malformed
//! FASTQ framing is deliberately absent from this list: the reader produces
//! best-effort records instead of failing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in kmerhist operations.
#[derive(Debug, Error)]
pub enum KmerHistError {
    /// K-mer length is zero.
    #[error("invalid k-mer length {k}: must be at least {min}")]
    InvalidKmerLength { k: usize, min: usize },

    /// Failed to open the input file.
    #[error("failed to open input '{path}': {source}")]
    InputOpen {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed while reading from the input stream.
    #[error("failed to read input '{input}': {source}")]
    InputRead {
        #[source]
        source: std::io::Error,
        input: String,
    },

    /// Failed to create, write or flush the output file.
    #[error("failed to write output '{path}': {source}")]
    OutputWrite {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to decompress gzip input.
    #[cfg(feature = "gzip")]
    #[error("failed to decompress gzip file '{path}': {source}")]
    GzipError {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

/// Error for invalid k-mer length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("k-mer length {k} is out of range: must be at least {min}")]
pub struct KmerLengthError {
    /// The invalid k value that was provided.
    pub k: usize,
    /// Minimum valid k-mer length.
    pub min: usize,
}

impl From<KmerLengthError> for KmerHistError {
    fn from(err: KmerLengthError) -> Self {
        Self::InvalidKmerLength {
            k: err.k,
            min: err.min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kmer_length_error_display() {
        let err = KmerLengthError { k: 0, min: 1 };
        assert_eq!(
            err.to_string(),
            "k-mer length 0 is out of range: must be at least 1"
        );
    }

    #[test]
    fn kmerhist_error_from_kmer_length_error() {
        let err: KmerHistError = KmerLengthError { k: 0, min: 1 }.into();
        assert!(matches!(
            err,
            KmerHistError::InvalidKmerLength { k: 0, min: 1 }
        ));
    }

    #[test]
    fn input_open_display_names_path() {
        let err = KmerHistError::InputOpen {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            path: PathBuf::from("reads.fq"),
        };
        assert_eq!(
            err.to_string(),
            "failed to open input 'reads.fq': no such file"
        );
    }

    #[test]
    fn output_write_keeps_source() {
        use std::error::Error as _;

        let err = KmerHistError::OutputWrite {
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            path: PathBuf::from("out.txt"),
        };
        assert!(err.source().is_some());
    }
}
