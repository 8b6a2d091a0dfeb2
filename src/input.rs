//! Input source abstraction for file and stdin.
//!
//! This module provides the [`Input`] enum, which decides between a named
//! FASTQ file and standard input and opens the chosen stream.
//!
//! # Example
//!
//! ```rust
//! use kmerhist::input::Input;
//! use std::path::Path;
//!
//! // From a file path
//! let input = Input::from_path(Path::new("reads.fq"));
//! assert!(matches!(input, Input::File(_)));
//!
//! // From stdin marker or an empty path
//! assert!(Input::from_path(Path::new("-")).is_stdin());
//! assert!(Input::from_path(Path::new("")).is_stdin());
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::error::KmerHistError;

/// Input source for histogram generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Input {
    /// Read from a file at the specified path.
    File(PathBuf),
    /// Read from standard input.
    #[default]
    Stdin,
}

impl Input {
    /// Creates an `Input` from a path.
    ///
    /// An empty path or "-" selects [`Self::Stdin`]; anything else is a
    /// [`Self::File`].
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let raw = path.as_os_str();
        if raw.is_empty() || raw == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Returns `true` if this input is stdin.
    #[must_use]
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }

    /// Opens the input as a buffered reader.
    ///
    /// The returned reader owns the underlying handle; dropping it closes the
    /// file.
    ///
    /// # Errors
    ///
    /// Returns [`KmerHistError::InputOpen`] if the file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>, KmerHistError> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| KmerHistError::InputOpen {
                    source,
                    path: path.clone(),
                })?;
                open_file(file, path)
            }
        }
    }
}

#[cfg(not(feature = "gzip"))]
#[allow(clippy::unnecessary_wraps)]
fn open_file(file: File, _path: &Path) -> Result<Box<dyn BufRead>, KmerHistError> {
    Ok(Box::new(BufReader::new(file)))
}

#[cfg(feature = "gzip")]
fn open_file(file: File, path: &Path) -> Result<Box<dyn BufRead>, KmerHistError> {
    use flate2::read::MultiGzDecoder;

    if !is_gzip_path(path) {
        return Ok(Box::new(BufReader::new(file)));
    }

    let mut reader = BufReader::new(MultiGzDecoder::new(file));
    // Surface a bad gzip header here rather than as a read error later.
    reader.fill_buf().map_err(|source| KmerHistError::GzipError {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(Box::new(reader))
}

/// Check if a path has a gzip extension (.gz).
#[cfg(feature = "gzip")]
fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}
