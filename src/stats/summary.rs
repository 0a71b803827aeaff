use serde::Serialize;

use crate::core::{Contig, ReportConfig, Scaffold};

/// N50 count and L50 length for a descending list of sizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct N50 {
    /// Number of items needed to cover half of the total
    pub count: usize,
    /// Size of the last item added
    pub length: u64,
}

impl N50 {
    /// Walk `sizes` (sorted descending) until the running sum reaches half of `total`.
    ///
    /// Returns a zero `N50` when no item is needed (empty input or zero total).
    pub fn from_sorted<I>(sizes: I, total: u64) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut result = Self::default();
        let mut running = 0u64;
        for size in sizes {
            if 2 * running >= total {
                break;
            }
            running += size;
            result.count += 1;
            result.length = size;
        }
        result
    }
}

/// Percentage of `part` in `whole`, or 0 for an empty whole
#[must_use]
#[allow(clippy::cast_precision_loss)] // Genome sizes fit comfortably in f64
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

/// Every contig of every scaffold, sorted by descending called size
#[must_use]
pub fn pooled_contigs(scaffolds: &[Scaffold]) -> Vec<Contig> {
    let mut contigs: Vec<Contig> = scaffolds
        .iter()
        .flat_map(|s| s.contigs.iter().copied())
        .collect();
    contigs.sort_by(|a, b| b.size().cmp(&a.size()));
    contigs
}

/// Whole-assembly totals and contiguity figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblySummary {
    pub scaffold_count: usize,
    pub contig_count: usize,
    /// Sum of scaffold total sizes, gaps included
    pub scaffold_sequence: u64,
    /// Sum of called bases in contigs
    pub contig_sequence: u64,
    /// Sum of scaffold gap sizes
    pub gap_sequence: u64,
    pub scaffold_n50: N50,
    pub contig_n50: N50,
    /// Size a scaffold must exceed to count as big
    pub big_scaffold_size: u64,
    pub big_scaffold_count: usize,
    pub big_scaffold_sequence: u64,
}

impl AssemblySummary {
    /// Summarize `scaffolds`, which must already be aggregated and sorted by
    /// descending total size.
    #[must_use]
    pub fn compute(scaffolds: &[Scaffold], config: &ReportConfig) -> Self {
        let contigs = pooled_contigs(scaffolds);

        let scaffold_sequence = scaffolds.iter().map(|s| s.total_size).sum();
        let contig_sequence = scaffolds.iter().map(|s| s.contig_size).sum();
        let gap_sequence = scaffolds.iter().map(|s| s.gap_size).sum();

        let big = scaffolds
            .iter()
            .filter(|s| s.total_size > config.big_scaffold_size);
        let big_scaffold_count = big.clone().count();
        let big_scaffold_sequence = big.map(|s| s.total_size).sum();

        Self {
            scaffold_count: scaffolds.len(),
            contig_count: contigs.len(),
            scaffold_sequence,
            contig_sequence,
            gap_sequence,
            scaffold_n50: N50::from_sorted(scaffolds.iter().map(|s| s.total_size), scaffold_sequence),
            contig_n50: N50::from_sorted(contigs.iter().map(Contig::size), contig_sequence),
            big_scaffold_size: config.big_scaffold_size,
            big_scaffold_count,
            big_scaffold_sequence,
        }
    }

    /// Gap bases as a percentage of scaffold sequence
    #[must_use]
    pub fn gap_percent(&self) -> f64 {
        percent(self.gap_sequence, self.scaffold_sequence)
    }

    /// Share of scaffold sequence held in big scaffolds
    #[must_use]
    pub fn big_scaffold_percent(&self) -> f64 {
        percent(self.big_scaffold_sequence, self.scaffold_sequence)
    }
}
