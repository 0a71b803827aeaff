//! # fasta-stats
//!
//! A library for summarizing the contiguity of genome assemblies in FASTA format.
//!
//! Each FASTA record is a scaffold. Runs of ambiguous bases (`N` or `n`) inside a
//! scaffold either stay inside the current contig, separate two contigs as a gap,
//! or, when their length equals a configured break length, split the scaffold in
//! two. From the resulting scaffolds the library computes:
//!
//! - **Totals**: scaffold, contig and gap sequence
//! - **N50/L50**: for scaffolds and for all contigs pooled together
//! - **Size histogram**: cumulative counts per scaffold size bin
//! - **Gap histogram**: counts and lengths of captured gaps per size bin
//!
//! ## Example
//!
//! ```rust
//! use fasta_stats::{AssemblyReport, ReportConfig, SegmentConfig};
//! use fasta_stats::segment::segment_lines;
//!
//! let lines = [">chr1", "ACGTACGTNNNNNNNNNNACGTACGT", ">chr2", "ACGT"];
//! let scaffolds = segment_lines(lines, SegmentConfig::default());
//!
//! let report = AssemblyReport::build(&scaffolds, &ReportConfig::default());
//! assert_eq!(report.summary.scaffold_count, 2);
//! assert_eq!(report.summary.contig_count, 3);
//! assert_eq!(report.summary.gap_sequence, 10);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Scaffold and contig types plus thresholds
//! - [`parsing`]: Line-oriented FASTA input, plain or gzip compressed
//! - [`segment`]: Turning residue lines into scaffolds, contigs and gaps
//! - [`stats`]: Summary, N50 and histograms
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod segment;
pub mod stats;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::contig::Contig;
pub use core::scaffold::Scaffold;
pub use core::types::{ReportConfig, SegmentConfig};
pub use segment::Segmenter;
pub use stats::AssemblyReport;
