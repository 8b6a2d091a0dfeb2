//! Validated run configuration.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{cli::Args, error::KmerHistError, input::Input, kmer::KmerLength};

/// Extension appended to the output base name.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Everything a histogram run needs, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the FASTQ records come from.
    pub input: Input,
    /// Output name without the `.txt` extension.
    pub output_base: PathBuf,
    /// Window width.
    pub k: KmerLength,
    /// Suppress status lines on stdout.
    pub quiet: bool,
    /// Print summary statistics after the run.
    pub stats: bool,
}

impl Config {
    /// Builds a configuration, validating `k`. Status lines are on and
    /// statistics off.
    ///
    /// # Errors
    ///
    /// Returns [`KmerHistError::InvalidKmerLength`] if `k` is zero.
    pub fn new(
        input: Input,
        output_base: impl Into<PathBuf>,
        k: usize,
    ) -> Result<Self, KmerHistError> {
        Ok(Self {
            input,
            output_base: output_base.into(),
            k: KmerLength::new(k)?,
            quiet: false,
            stats: false,
        })
    }

    /// Path of the histogram file: the output base with `.txt` appended.
    ///
    /// Any dot already in the base name is kept, so `sample.v2` becomes
    /// `sample.v2.txt`.
    ///
    /// ```rust
    /// use kmerhist::{config::Config, input::Input};
    /// use std::path::Path;
    ///
    /// let config = Config::new(Input::Stdin, "results/sample.v2", 21)?;
    /// assert_eq!(config.output_path(), Path::new("results/sample.v2.txt"));
    /// # Ok::<(), kmerhist::error::KmerHistError>(())
    /// ```
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        let mut name = OsString::from(self.output_base.as_os_str());
        name.push(".");
        name.push(OUTPUT_EXTENSION);
        PathBuf::from(name)
    }
}

impl TryFrom<&Args> for Config {
    type Error = KmerHistError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let config = Self::new(
            Input::from_path(Path::new(&args.input)),
            args.output.clone(),
            args.k,
        )?;
        Ok(Self {
            quiet: args.quiet,
            stats: args.stats,
            ..config
        })
    }
}
