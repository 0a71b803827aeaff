//! Stats command - segment an assembly and print the report.

use std::path::PathBuf;

use clap::Args;
use tracing::{info, warn};

use crate::cli::OutputFormat;
use crate::core::types::{DEFAULT_GAP_THRESHOLD, DEFAULT_MIN_DISPLAY_SIZE};
use crate::core::SegmentConfig;
use crate::parsing::fasta::is_fasta_file;
use crate::segment;
use crate::stats::bins::SizeBin;
use crate::stats::gaps::{GapRow, GAP_BIN_FLOORS};
use crate::stats::summary::AssemblySummary;
use crate::stats::AssemblyReport;
use crate::utils::format::{bin_size, is_fractional_bin, pretty, scaled};
use crate::utils::validation::{report_config_from_kb, validate_segment_config};

#[derive(Args)]
pub struct StatsArgs {
    /// Input FASTA file, optionally gzip/bgzip compressed
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Minimum length of an N run that ends a contig
    #[arg(short = 'n', long, default_value_t = DEFAULT_GAP_THRESHOLD)]
    pub gap_threshold: u64,

    /// Exact length of an N run that ends a scaffold (disabled by default)
    #[arg(short = 'N', long)]
    pub break_length: Option<u64>,

    /// Size of big scaffold cutoff in kb
    #[arg(short = 'b', long, default_value = "50")]
    pub big_scaffold_kb: u64,

    /// Minimum size bin to display
    #[arg(short = 'l', long, default_value_t = DEFAULT_MIN_DISPLAY_SIZE)]
    pub min_display_size: u64,

    /// Minimum size bin to display for gaps; the gap table is only printed when set
    #[arg(short = 'g', long)]
    pub min_gap_display: Option<u64>,
}

impl StatsArgs {
    fn segment_config(&self) -> SegmentConfig {
        SegmentConfig {
            gap_threshold: self.gap_threshold,
            break_length: self.break_length,
        }
    }
}

/// Execute the stats command
///
/// # Errors
///
/// Returns an error if the thresholds are invalid or the input cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: StatsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // Reject bad thresholds before touching the input
    let segment_config = args.segment_config();
    validate_segment_config(&segment_config)?;
    let report_config = report_config_from_kb(
        args.big_scaffold_kb,
        args.min_display_size,
        args.min_gap_display,
    )?;

    if args.input.as_os_str() != "-" && !is_fasta_file(&args.input) {
        warn!(
            "{} does not have a FASTA extension, reading it as FASTA anyway",
            args.input.display()
        );
    }

    let scaffolds = segment::read_scaffolds(&args.input, segment_config)?;
    if scaffolds.is_empty() {
        warn!("No sequence found in {}", args.input.display());
    }

    let report = AssemblyReport::build(&scaffolds, &report_config);

    if verbose {
        info!(
            "Parsed {} scaffolds with {} contigs from {}",
            report.summary.scaffold_count,
            report.summary.contig_count,
            args.input.display()
        );
    }

    match format {
        OutputFormat::Text => print_text_report(&report),
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Tsv => print_tsv_report(&report),
    }

    Ok(())
}

fn print_text_report(report: &AssemblyReport) {
    print_text_summary(&report.summary);
    println!();
    print_text_size_bins(&report.size_bins);
    if let Some(rows) = &report.gap_bins {
        println!();
        print_text_gap_bins(rows);
    }
}

fn print_text_summary(summary: &AssemblySummary) {
    let big_kb = summary.big_scaffold_size / 1_000;

    println!("Main genome scaffold total: {}", summary.scaffold_count);
    println!("Main genome contig total:   {}", summary.contig_count);
    println!(
        "Main genome scaffold sequence total: {}",
        scaled(summary.scaffold_sequence)
    );
    println!(
        "Main genome contig sequence total:   {} (-> {:4.1}% gap)",
        scaled(summary.contig_sequence),
        summary.gap_percent()
    );
    println!(
        "Main genome scaffold N/L50: {}/{}",
        summary.scaffold_n50.count,
        scaled(summary.scaffold_n50.length)
    );
    println!(
        "Main genome contig N/L50:   {}/{}",
        summary.contig_n50.count,
        scaled(summary.contig_n50.length)
    );
    println!(
        "Number of scaffolds > {big_kb} KB: {}",
        summary.big_scaffold_count
    );
    println!(
        "% main genome in scaffolds > {big_kb} KB: {:4.1}%",
        summary.big_scaffold_percent()
    );
}

fn size_label(row: &SizeBin) -> String {
    if row.floor == 0 {
        "    All".to_string()
    } else {
        format!(" {}", bin_size(row.floor, is_fractional_bin(row.index), false))
    }
}

fn print_text_size_bins(rows: &[SizeBin]) {
    println!(" Minimum    Number    Number     Total        Total     Scaffold");
    println!("Scaffold      of        of      Scaffold      Contig     Contig");
    println!(" Length   Scaffolds  Contigs     Length       Length    Coverage");
    println!("--------  ---------  -------  -----------  -----------  --------");
    for row in rows {
        println!(
            "{}   {:>7}    {:>7}  {:>11}  {:>11}   {:6.2}%",
            size_label(row),
            pretty(row.stats.scaffold_count),
            pretty(row.stats.contig_count),
            pretty(row.stats.scaffold_size),
            pretty(row.stats.contig_size),
            row.coverage
        );
    }
}

fn gap_label(row: &GapRow) -> String {
    let upper_fractional = is_fractional_bin(row.index + 1);
    match (row.lower, row.upper) {
        (None, Some(upper)) => format!("       < {}", bin_size(upper, upper_fractional, false)),
        (Some(lower), Some(upper)) => format!(
            "{} - {}",
            bin_size(lower, is_fractional_bin(row.index), true),
            bin_size(upper - 1, upper_fractional, false)
        ),
        (_, None) => format!(
            "{:<15}",
            format!(
                "{} +",
                bin_size(GAP_BIN_FLOORS[row.index], is_fractional_bin(row.index), true)
            )
        ),
    }
}

fn print_text_gap_bins(rows: &[GapRow]) {
    println!("                  Number                       Percent     Total     Percent");
    println!("     Gap            of        Gap      Total    Total       Gap       Total");
    println!("  Size Range       Gaps     Lengths     Gaps     Gaps     Lengths    Lengths");
    println!("---------------  -------  ----------  -------  -------  -----------  -------");
    for row in rows {
        println!(
            "{}  {:>7}  {:>10}  {:>7}  {:6.2}%  {:>11}  {:6.2}%",
            gap_label(row),
            pretty(row.gaps.count),
            pretty(row.gaps.length),
            pretty(row.cumulative_count),
            row.cumulative_count_percent,
            pretty(row.cumulative_length),
            row.cumulative_length_percent
        );
    }
}

fn print_json_report(report: &AssemblyReport) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn print_tsv_report(report: &AssemblyReport) {
    let s = &report.summary;
    println!(
        "scaffold_count\tcontig_count\tscaffold_sequence\tcontig_sequence\tgap_sequence\tgap_percent\tscaffold_n50_count\tscaffold_l50_length\tcontig_n50_count\tcontig_l50_length\tbig_scaffold_size\tbig_scaffold_count\tbig_scaffold_sequence\tbig_scaffold_percent"
    );
    println!(
        "{}\t{}\t{}\t{}\t{}\t{:.4}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.4}",
        s.scaffold_count,
        s.contig_count,
        s.scaffold_sequence,
        s.contig_sequence,
        s.gap_sequence,
        s.gap_percent(),
        s.scaffold_n50.count,
        s.scaffold_n50.length,
        s.contig_n50.count,
        s.contig_n50.length,
        s.big_scaffold_size,
        s.big_scaffold_count,
        s.big_scaffold_sequence,
        s.big_scaffold_percent(),
    );

    println!();
    println!("min_scaffold_length\tscaffolds\tcontigs\tscaffold_length\tcontig_length\tcoverage");
    for row in &report.size_bins {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{:.4}",
            row.floor,
            row.stats.scaffold_count,
            row.stats.contig_count,
            row.stats.scaffold_size,
            row.stats.contig_size,
            row.coverage,
        );
    }

    if let Some(rows) = &report.gap_bins {
        println!();
        println!("gap_min\tgap_max\tgaps\tgap_length\tcumulative_gaps\tcumulative_gaps_percent\tcumulative_length\tcumulative_length_percent");
        for row in rows {
            println!(
                "{}\t{}\t{}\t{}\t{}\t{:.4}\t{}\t{:.4}",
                row.lower.unwrap_or(0),
                row.upper.map_or_else(String::new, |u| (u - 1).to_string()),
                row.gaps.count,
                row.gaps.length,
                row.cumulative_count,
                row.cumulative_count_percent,
                row.cumulative_length,
                row.cumulative_length_percent,
            );
        }
    }
}
