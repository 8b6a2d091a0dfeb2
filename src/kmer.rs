//! K-mer length validation and sliding-window extraction.
//!
//! A k-mer is any window of exactly `k` bytes taken from a sequence. Windows
//! containing the ambiguous base `N` are never produced by [`ValidKmers`].

use std::num::NonZeroUsize;

use crate::error::KmerLengthError;

/// The ambiguous-base marker. Windows containing it are not counted.
pub const AMBIGUOUS_BASE: u8 = b'N';

/// Default k-mer length used by the command line.
pub const DEFAULT_K: usize = 21;

/// A validated k-mer length (always at least 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KmerLength(NonZeroUsize);

impl KmerLength {
    /// Smallest accepted k.
    pub const MIN: usize = 1;

    /// Validates `k`.
    ///
    /// # Errors
    ///
    /// Returns [`KmerLengthError`] if `k` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use kmerhist::kmer::KmerLength;
    ///
    /// let k = KmerLength::new(21)?;
    /// assert_eq!(k.get(), 21);
    /// assert!(KmerLength::new(0).is_err());
    /// # Ok::<(), kmerhist::error::KmerLengthError>(())
    /// ```
    pub fn new(k: usize) -> Result<Self, KmerLengthError> {
        NonZeroUsize::new(k).map(Self).ok_or(KmerLengthError {
            k,
            min: Self::MIN,
        })
    }

    /// Returns the length as a `usize`.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for KmerLength {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_K).unwrap_or(NonZeroUsize::MIN))
    }
}

impl std::fmt::Display for KmerLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for KmerLength {
    type Error = KmerLengthError;

    fn try_from(k: usize) -> Result<Self, Self::Error> {
        Self::new(k)
    }
}

/// Iterator over the `N`-free windows of a sequence, left to right.
///
/// Every start offset in `0..=len - k` is considered. When a window holds an
/// `N`, every window that would still overlap that `N` is skipped in one jump.
///
/// ```rust
/// use kmerhist::kmer::{KmerLength, ValidKmers};
///
/// let k = KmerLength::new(3)?;
/// let kmers: Vec<&[u8]> = ValidKmers::new(b"ANGGTC", k).collect();
/// assert_eq!(kmers, vec![&b"GGT"[..], &b"GTC"[..]]);
/// # Ok::<(), kmerhist::error::KmerLengthError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ValidKmers<'a> {
    seq: &'a [u8],
    k: usize,
    pos: usize,
}

impl<'a> ValidKmers<'a> {
    #[must_use]
    pub const fn new(seq: &'a [u8], k: KmerLength) -> Self {
        Self {
            seq,
            k: k.get(),
            pos: 0,
        }
    }
}

impl<'a> Iterator for ValidKmers<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos + self.k <= self.seq.len() {
            let window = &self.seq[self.pos..self.pos + self.k];
            match find_ambiguous(window) {
                None => {
                    self.pos += 1;
                    return Some(window);
                }
                Some(offset) => self.pos += offset + 1,
            }
        }
        None
    }
}

/// Number of windows of length `k` in a sequence of length `len`,
/// ambiguous or not.
#[must_use]
pub const fn window_count(len: usize, k: KmerLength) -> usize {
    (len + 1).saturating_sub(k.get())
}

/// Position of the right-most ambiguous base in `window`, if any.
pub(crate) fn find_ambiguous(window: &[u8]) -> Option<usize> {
    window.iter().rposition(|&b| b == AMBIGUOUS_BASE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k(k: usize) -> KmerLength {
        KmerLength::new(k).unwrap()
    }

    fn collect(seq: &[u8], len: usize) -> Vec<String> {
        ValidKmers::new(seq, k(len))
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .collect()
    }

    #[test]
    fn zero_length_is_rejected() {
        let err = KmerLength::new(0).unwrap_err();
        assert_eq!(err, KmerLengthError { k: 0, min: 1 });
    }

    #[test]
    fn default_is_21() {
        assert_eq!(KmerLength::default().get(), DEFAULT_K);
    }

    #[test]
    fn single_base_windows() {
        insta::assert_snapshot!(collect(b"ACGT", 1).join(","), @"A,C,G,T");
    }

    #[test]
    fn overlapping_windows_repeat() {
        assert_eq!(collect(b"AAAA", 2), vec!["AA", "AA", "AA"]);
    }

    #[test]
    fn windows_with_marker_are_skipped() {
        assert_eq!(collect(b"ANGGTC", 3), vec!["GGT", "GTC"]);
        assert_eq!(collect(b"ACNGT", 2), vec!["AC", "GT"]);
        assert!(collect(b"NNNN", 2).is_empty());
    }

    #[test]
    fn other_symbols_are_counted() {
        // Only N is ambiguous; IUPAC codes such as R pass through.
        assert_eq!(collect(b"ARG", 2), vec!["AR", "RG"]);
    }

    #[test]
    fn windows_are_measured_in_bytes() {
        // 'É' is two bytes in UTF-8, so it spans two width-1 windows.
        assert_eq!(ValidKmers::new("ÉA".as_bytes(), k(1)).count(), 3);
    }

    #[test]
    fn short_sequence_yields_nothing() {
        assert!(collect(b"ACG", 4).is_empty());
        assert!(collect(b"", 1).is_empty());
    }

    #[test]
    fn window_count_matches_range() {
        assert_eq!(window_count(4, k(2)), 3);
        assert_eq!(window_count(3, k(4)), 0);
        assert_eq!(window_count(0, k(1)), 0);
    }

    #[test]
    fn find_ambiguous_returns_rightmost() {
        assert_eq!(find_ambiguous(b"NACNN"), Some(4));
        assert_eq!(find_ambiguous(b"NACNG"), Some(3));
        assert_eq!(find_ambiguous(b"NACTG"), Some(0));
        assert_eq!(find_ambiguous(b"ACTG"), None);
    }
}
