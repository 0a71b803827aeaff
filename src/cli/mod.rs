//! Command-line interface for fasta-stats.
//!
//! ## Usage
//!
//! ```text
//! # Report on an assembly
//! fasta-stats assembly.fa
//!
//! # Gzip input, split scaffolds on runs of exactly 100 N
//! fasta-stats -N 100 assembly.fa.gz
//!
//! # Include the gap histogram, folding gaps under 500 bases into one row
//! fasta-stats -g 500 assembly.fa
//!
//! # JSON output for scripting
//! fasta-stats assembly.fa --format json
//! ```

use clap::Parser;

pub mod stats;

#[derive(Parser)]
#[command(name = "fasta-stats")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Report scaffold, contig and gap statistics for a FASTA assembly")]
#[command(
    long_about = "fasta-stats reads an assembly in FASTA format (plain or gzip compressed) and reports:\n- Scaffold and contig counts, total sequence and gap fraction\n- N50/L50 for scaffolds and contigs\n- A cumulative scaffold size histogram\n- Optionally, a histogram of captured gap lengths\n\nContigs are separated by runs of N at least --gap-threshold long. A run of exactly --break-length N splits the scaffold itself."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: stats::StatsArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
