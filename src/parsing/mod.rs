//! Reading FASTA input as a stream of header and residue lines.
//!
//! Segmentation works one line at a time, so this module does not build whole
//! records. It provides:
//!
//! - [`fasta::open_input`]: open a plain or gzip/bgzip compressed file, or stdin (`-`)
//! - [`fasta::FastaLines`]: a line reader yielding [`fasta::FastaLine`] values
//!
//! ## Example
//!
//! ```rust,no_run
//! use fasta_stats::parsing::fasta::{open_input, FastaLine, FastaLines};
//! use std::path::Path;
//!
//! let reader = open_input(Path::new("assembly.fa.gz")).unwrap();
//! let mut lines = FastaLines::new(reader);
//! while let Some(line) = lines.next_line().unwrap() {
//!     match line {
//!         FastaLine::Header(name) => println!("record {name}"),
//!         FastaLine::Residues(bases) => println!("{} bases", bases.len()),
//!     }
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod fasta;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
