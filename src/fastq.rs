//! Line-position driven FASTQ reading.
//!
//! [`FastqReader`] turns a buffered text stream into [`Record`]s. It does not
//! validate FASTQ structure: after the first `@` line every line is classified
//! only by its position in the 4-line cycle (header, sequence, separator,
//! quality). Input whose line count is not a multiple of four still produces
//! records built from whatever was seen, and the pending record is always
//! emitted at end of stream.
//!
//! # Example
//!
//! ```rust
//! use kmerhist::fastq::FastqReader;
//!
//! let data = b"@read1\nacg t\n+\nIIII\n@read2\nGGCC\n+\nIIII\n";
//! let records: Vec<_> = FastqReader::new(&data[..]).collect::<Result<_, _>>()?;
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].id, "read1");
//! assert_eq!(&records[0].seq[..], b"ACGT");
//! # Ok::<(), kmerhist::error::KmerHistError>(())
//! ```

use std::{
    io::{self, BufRead},
    mem,
};

use bytes::Bytes;

use crate::{error::KmerHistError, input::Input};

/// Leading character of a FASTQ header line.
pub const HEADER_MARKER: char = '@';

/// A single read: identifier and cleaned nucleotide sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Header text after the marker, trailing whitespace removed.
    pub id: String,
    /// Sequence with all whitespace removed, upper-cased.
    pub seq: Bytes,
}

/// Position within the 4-line record cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Header,
    Sequence,
    Separator,
    Quality,
}

impl Line {
    const fn next(self) -> Self {
        match self {
            Self::Header => Self::Sequence,
            Self::Sequence => Self::Separator,
            Self::Separator => Self::Quality,
            Self::Quality => Self::Header,
        }
    }
}

#[derive(Debug)]
enum State {
    /// Looking for the first header line.
    Seeking,
    /// Inside the record stream; `expect` is the role of the next line.
    Reading { expect: Line, pending: Record },
    Done,
}

/// Forward-only, single-pass FASTQ record iterator.
///
/// Yields `Err` once on an I/O failure and then ends.
pub struct FastqReader<R> {
    reader: R,
    label: String,
    buf: Vec<u8>,
    line: String,
    state: State,
}

impl FastqReader<Box<dyn BufRead>> {
    /// Opens `input`, choosing between the named file and stdin.
    ///
    /// # Errors
    ///
    /// Returns [`KmerHistError::InputOpen`] if the file cannot be opened.
    pub fn open(input: &Input) -> Result<Self, KmerHistError> {
        let reader = input.open()?;
        Ok(Self::with_label(reader, input.to_string()))
    }
}

impl<R: BufRead> FastqReader<R> {
    /// Wraps an already-open buffered stream.
    pub fn new(reader: R) -> Self {
        Self::with_label(reader, String::from("<reader>"))
    }

    fn with_label(reader: R, label: String) -> Self {
        Self {
            reader,
            label,
            buf: Vec::new(),
            line: String::new(),
            state: State::Seeking,
        }
    }

    /// Reads the next line into `self.line`; `false` at end of stream.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    fn read_line(&mut self) -> Result<bool, KmerHistError> {
        self.buf.clear();
        self.line.clear();
        let to_error = |source: io::Error, label: &str| KmerHistError::InputRead {
            source,
            input: label.to_string(),
        };

        let n = read_universal_line(&mut self.reader, &mut self.buf)
            .map_err(|e| to_error(e, &self.label))?;
        let text = std::str::from_utf8(&self.buf)
            .map_err(|e| to_error(io::Error::new(io::ErrorKind::InvalidData, e), &self.label))?;
        self.line.push_str(text);
        Ok(n > 0)
    }

    fn step(&mut self) -> Result<Option<Record>, KmerHistError> {
        loop {
            match self.state {
                State::Done => return Ok(None),
                State::Seeking => {
                    if !self.read_line()? {
                        self.state = State::Done;
                        return Ok(None);
                    }
                    if self.line.starts_with(HEADER_MARKER) {
                        self.state = State::Reading {
                            expect: Line::Sequence,
                            pending: Record {
                                id: header_id(&self.line),
                                seq: Bytes::new(),
                            },
                        };
                    }
                }
                State::Reading { .. } => {
                    if !self.read_line()? {
                        let finished = mem::replace(&mut self.state, State::Done);
                        if let State::Reading { pending, .. } = finished {
                            return Ok(Some(pending));
                        }
                        return Ok(None);
                    }
                    let State::Reading { expect, pending } = &mut self.state else {
                        return Ok(None);
                    };
                    let role = *expect;
                    *expect = role.next();
                    match role {
                        Line::Header => {
                            let next = Record {
                                id: header_id(&self.line),
                                seq: Bytes::new(),
                            };
                            return Ok(Some(mem::replace(pending, next)));
                        }
                        Line::Sequence => pending.seq = clean_sequence(&self.line),
                        Line::Separator | Line::Quality => {}
                    }
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for FastqReader<R> {
    type Item = Result<Record, KmerHistError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(record) => record.map(Ok),
            Err(err) => {
                self.state = State::Done;
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for FastqReader<R> {}

/// Appends one line, terminator included, to `buf` and returns the number of
/// bytes consumed.
fn read_universal_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    let mut consumed = 0;
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            return Ok(consumed);
        }

        // A `\r` ended the previous chunk: swallow a following `\n` only.
        if buf.last() == Some(&b'\r') {
            if available[0] == b'\n' {
                buf.push(b'\n');
                reader.consume(1);
                consumed += 1;
            }
            return Ok(consumed);
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                let is_lf = available[i] == b'\n';
                buf.extend_from_slice(&available[..=i]);
                reader.consume(i + 1);
                consumed += i + 1;
                if is_lf {
                    return Ok(consumed);
                }
            }
            None => {
                let len = available.len();
                buf.extend_from_slice(available);
                reader.consume(len);
                consumed += len;
            }
        }
    }
}

/// Drops the first character of a header-position line and trailing whitespace.
fn header_id(line: &str) -> String {
    let mut chars = line.chars();
    chars.next();
    chars.as_str().trim_end().to_string()
}

/// Removes every whitespace character and upper-cases the rest.
fn clean_sequence(line: &str) -> Bytes {
    line.split_whitespace()
        .flat_map(str::chars)
        .flat_map(char::to_uppercase)
        .collect::<String>()
        .into()
}
