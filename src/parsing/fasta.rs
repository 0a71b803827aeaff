//! Line-oriented FASTA reader.
//!
//! Supports both uncompressed and gzip/bgzip compressed input. Compression is
//! detected from the gzip magic bytes rather than the file extension.
//!
//! Recognised extensions (used only for a warning on unexpected input):
//! - `.fa`, `.fasta`, `.fna`, `.fas` (uncompressed)
//! - the same with `.gz` or `.bgz` appended

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::bufread::MultiGzDecoder;
use noodles::fasta::record::Definition;

use crate::parsing::ParseError;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    let stem = path_str
        .strip_suffix(".gz")
        .or_else(|| path_str.strip_suffix(".bgz"))
        .unwrap_or(&path_str);

    matches!(
        Path::new(stem)
            .extension()
            .and_then(OsStr::to_str),
        Some("fa" | "fasta" | "fna" | "fas")
    )
}

/// Open `path` for reading, decompressing gzip content transparently.
///
/// A path of `-` reads from stdin.
///
/// # Errors
///
/// Returns `ParseError::Open` with the system reason if the file cannot be opened,
/// or `ParseError::Io` if the first bytes cannot be read.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    if path.as_os_str() == "-" {
        return wrap_reader(BufReader::new(io::stdin()));
    }

    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    wrap_reader(BufReader::new(file))
}

fn wrap_reader<R: BufRead + 'static>(mut reader: R) -> Result<Box<dyn BufRead>, ParseError> {
    let is_gzipped = reader.fill_buf()?.starts_with(&GZIP_MAGIC);
    if is_gzipped {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(Box::new(reader))
    }
}

/// One logical line of a FASTA file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FastaLine<'a> {
    /// A definition line; carries the sequence name
    Header(String),
    /// A non-empty line of residues, line terminator removed
    Residues(&'a [u8]),
}

/// Reads a FASTA stream one line at a time, reusing a single buffer.
pub struct FastaLines<R> {
    reader: R,
    buf: Vec<u8>,
    line_count: u64,
}

impl<R: BufRead> FastaLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_count: 0,
        }
    }

    /// Number of physical lines read so far, including blank lines
    #[must_use]
    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    /// Read the next header or residue line; blank lines are skipped.
    ///
    /// Returns `Ok(None)` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the underlying reader fails.
    pub fn next_line(&mut self) -> Result<Option<FastaLine<'_>>, ParseError> {
        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_count += 1;

            while matches!(self.buf.last(), Some(b'\n' | b'\r')) {
                self.buf.pop();
            }
            // A blank line adds no residues and leaves a carried ambiguous run open
            if self.buf.is_empty() {
                continue;
            }

            if self.buf[0] == b'>' {
                return Ok(Some(FastaLine::Header(parse_name(&self.buf))));
            }
            return Ok(Some(FastaLine::Residues(&self.buf)));
        }
    }
}

/// Extract the sequence name from a definition line.
///
/// Falls back to the first whitespace-delimited word when noodles rejects the line
/// (for example a bare `>`).
pub(crate) fn parse_name(line: &[u8]) -> String {
    let text = String::from_utf8_lossy(line);
    match text.parse::<Definition>() {
        Ok(definition) => String::from_utf8_lossy(definition.name()).into_owned(),
        Err(_) => text[1..]
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}
