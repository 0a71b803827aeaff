//! Streaming segmentation of FASTA sequence into scaffolds, contigs and gaps.
//!
//! The [`Segmenter`] consumes header and residue lines in order and tracks runs of
//! the ambiguous base `N` (either case). A run that straddles line breaks is held
//! open and classified only once a later line shows that it ended:
//!
//! | Run length | Outcome |
//! |------------|---------|
//! | equal to the break length | the scaffold ends; the run belongs to neither side |
//! | at least the gap threshold | the current contig ends; the run is recorded as a gap |
//! | shorter | the run stays in the current contig as ambiguous bases |
//!
//! A run still open at the end of a record is never classified: its bases count
//! toward the scaffold's length but not toward any contig.

use std::io::BufRead;
use std::mem;
use std::path::Path;

use tracing::{debug, info};

use crate::core::{RunClass, Scaffold, SegmentConfig};
use crate::parsing::fasta::{open_input, parse_name, FastaLine, FastaLines};
use crate::parsing::ParseError;

/// True for the ambiguous-base symbol in either case
#[inline]
#[must_use]
pub fn is_ambiguous(base: u8) -> bool {
    matches!(base, b'N' | b'n')
}

/// Decide how a completed run of `length` ambiguous bases is treated.
///
/// An exact break-length match wins over the gap threshold.
#[must_use]
pub fn classify_run(length: u64, config: &SegmentConfig) -> RunClass {
    if config.break_length == Some(length) {
        RunClass::HardBreak
    } else if length >= config.gap_threshold {
        RunClass::Gap
    } else {
        RunClass::Absorbed
    }
}

fn find_ambiguous(line: &[u8], from: usize) -> Option<usize> {
    memchr::memchr2(b'N', b'n', &line[from..]).map(|i| i + from)
}

fn find_called(line: &[u8], from: usize) -> Option<usize> {
    line[from..]
        .iter()
        .position(|&b| !is_ambiguous(b))
        .map(|i| i + from)
}

/// Incremental builder of the scaffold list.
///
/// State carried between lines is the open scaffold, the finished scaffolds and
/// the length of an ambiguous run that reached the end of the previous line.
#[derive(Debug)]
pub struct Segmenter {
    config: SegmentConfig,
    open: Scaffold,
    finished: Vec<Scaffold>,
    pending_run: u64,
    hard_breaks: u64,
}

impl Segmenter {
    #[must_use]
    pub fn new(config: SegmentConfig) -> Self {
        Self {
            config,
            open: Scaffold::default(),
            finished: Vec::new(),
            pending_run: 0,
            hard_breaks: 0,
        }
    }

    /// Length of the ambiguous run carried over from the previous line
    #[must_use]
    pub fn pending_run(&self) -> u64 {
        self.pending_run
    }

    /// Number of scaffold splits caused by break-length runs so far
    #[must_use]
    pub fn hard_breaks(&self) -> u64 {
        self.hard_breaks
    }

    /// Start a new record named `name`.
    ///
    /// Any run still open at the end of the previous record is dropped unclassified.
    pub fn header(&mut self, name: impl Into<String>) {
        self.start_scaffold(name.into());
        self.pending_run = 0;
    }

    /// Consume one line of residues (without its line terminator).
    pub fn residues(&mut self, line: &[u8]) {
        if line.is_empty() {
            return;
        }
        let len = line.len() as u64;
        let mut next_run = find_ambiguous(line, 0);

        // A run carried from the previous line ends unless this line continues it
        if self.pending_run != 0 && next_run != Some(0) {
            let run = mem::take(&mut self.pending_run);
            self.end_run(run, 0);
        }

        self.open.total_size += len;
        let mut pos = 0;
        loop {
            let Some(start) = next_run else {
                self.open.current_contig_mut().add_bases(len - pos as u64);
                break;
            };
            self.open
                .current_contig_mut()
                .add_bases((start - pos) as u64);

            let Some(end) = find_called(line, start + 1) else {
                self.pending_run += (line.len() - start) as u64;
                break;
            };
            let run = mem::take(&mut self.pending_run) + (end - start) as u64;
            self.end_run(run, (line.len() - end) as u64);

            pos = end;
            next_run = find_ambiguous(line, end + 1);
        }
    }

    /// Classify a run that has ended; `remaining` bases of the current line follow it.
    fn end_run(&mut self, run: u64, remaining: u64) {
        match classify_run(run, &self.config) {
            RunClass::HardBreak => {
                self.hard_breaks += 1;
                debug!(
                    scaffold = %self.open.name,
                    run,
                    "break-length run splits scaffold"
                );
                // The run and the rest of the line leave this scaffold; the rest of
                // the line opens the next one
                self.open.total_size = self.open.total_size.saturating_sub(run + remaining);
                let name = self.open.name.clone();
                self.start_scaffold(name);
                self.open.total_size = remaining;
            }
            RunClass::Gap => {
                if self.open.current_contig().is_empty() {
                    // Leading gap: nothing to separate
                    self.open.current_contig_mut().clear();
                } else {
                    self.open.push_gap(run);
                }
            }
            RunClass::Absorbed => {
                self.open.current_contig_mut().absorb_run(run);
            }
        }
    }

    /// Close the open scaffold, keeping it only if it holds sequence.
    fn start_scaffold(&mut self, name: String) {
        let mut scaffold = mem::replace(&mut self.open, Scaffold::new(name));
        scaffold.prune_trailing_contig();
        if scaffold.is_empty() {
            return;
        }
        debug!(
            scaffold = %scaffold.name,
            total_size = scaffold.total_size,
            contigs = scaffold.contigs.len(),
            "finished scaffold"
        );
        self.finished.push(scaffold);
    }

    /// Finish the stream: close the last scaffold, aggregate every scaffold and
    /// sort by descending total size.
    #[must_use]
    pub fn finish(mut self) -> Vec<Scaffold> {
        self.start_scaffold(String::new());
        let mut scaffolds = self.finished;
        for scaffold in &mut scaffolds {
            scaffold.aggregate();
        }
        scaffolds.sort_by(|a, b| b.total_size.cmp(&a.total_size));
        scaffolds
    }
}

/// Segment every line of `reader`.
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails part way through.
pub fn segment_reader<R: BufRead>(
    reader: R,
    config: SegmentConfig,
) -> Result<Vec<Scaffold>, ParseError> {
    let mut lines = FastaLines::new(reader);
    let mut segmenter = Segmenter::new(config);
    let mut records = 0u64;

    while let Some(line) = lines.next_line()? {
        match line {
            FastaLine::Header(name) => {
                records += 1;
                segmenter.header(name);
            }
            FastaLine::Residues(bases) => segmenter.residues(bases),
        }
    }

    let hard_breaks = segmenter.hard_breaks();
    let scaffolds = segmenter.finish();
    info!(
        lines = lines.line_count(),
        records,
        hard_breaks,
        scaffolds = scaffolds.len(),
        "segmentation complete"
    );
    Ok(scaffolds)
}

/// Open `path` (plain, gzip or `-` for stdin) and segment it.
///
/// # Errors
///
/// Returns `ParseError::Open` if the file cannot be opened and `ParseError::Io`
/// on read failures.
pub fn read_scaffolds(path: &Path, config: SegmentConfig) -> Result<Vec<Scaffold>, ParseError> {
    let reader = open_input(path)?;
    segment_reader(reader, config)
}

/// Segment an in-memory list of lines; lines starting with `>` are headers and are
/// named the same way as in [`segment_reader`].
#[must_use]
pub fn segment_lines<'a, I>(lines: I, config: SegmentConfig) -> Vec<Scaffold>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut segmenter = Segmenter::new(config);
    for line in lines {
        if line.starts_with('>') {
            segmenter.header(parse_name(line.as_bytes()));
        } else {
            segmenter.residues(line.as_bytes());
        }
    }
    segmenter.finish()
}
