//! Cumulative scaffold size histogram.
//!
//! Each scaffold is placed in the highest bin whose floor it reaches, then the bins
//! are folded from the top down so that every row reads "scaffolds at least this
//! long" rather than an exclusive range.

use serde::Serialize;

use crate::core::Scaffold;
use crate::stats::summary::percent;

/// Bin floors for scaffold sizes; the 0 floor holds every scaffold.
pub const SIZE_BIN_FLOORS: [u64; 16] = [
    0, 100, 250, 500, 1_000, 2_500, 5_000, 10_000, 25_000, 50_000, 100_000, 250_000,
    500_000, 1_000_000, 2_500_000, 5_000_000,
];

/// Index of the highest floor in `floors` not exceeding `value`.
///
/// `floors` must be ascending; values below the first floor land in bin 0.
#[must_use]
pub fn bin_index(floors: &[u64], value: u64) -> usize {
    floors.partition_point(|&floor| floor <= value).saturating_sub(1)
}

/// Counts and sizes accumulated over a set of scaffolds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub scaffold_count: u64,
    pub contig_count: u64,
    pub scaffold_size: u64,
    pub contig_size: u64,
}

impl Stats {
    pub fn add_scaffold(&mut self, scaffold: &Scaffold) {
        self.scaffold_count += 1;
        self.contig_count += scaffold.contigs.len() as u64;
        self.scaffold_size += scaffold.total_size;
        self.contig_size += scaffold.contig_size;
    }

    pub fn merge(&mut self, other: &Stats) {
        self.scaffold_count += other.scaffold_count;
        self.contig_count += other.contig_count;
        self.scaffold_size += other.scaffold_size;
        self.contig_size += other.contig_size;
    }

    /// Called bases as a percentage of scaffold bases
    #[must_use]
    pub fn coverage(&self) -> f64 {
        percent(self.contig_size, self.scaffold_size)
    }
}

/// One cumulative row: scaffolds of at least `floor` bases
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeBin {
    /// Index into [`SIZE_BIN_FLOORS`]
    #[serde(skip)]
    pub index: usize,
    pub floor: u64,
    #[serde(flatten)]
    pub stats: Stats,
    pub coverage: f64,
}

/// Cumulative size histogram over all scaffolds
#[derive(Debug, Clone, PartialEq)]
pub struct SizeHistogram {
    bins: Vec<Stats>,
}

impl SizeHistogram {
    #[must_use]
    pub fn compute(scaffolds: &[Scaffold]) -> Self {
        let mut bins = vec![Stats::default(); SIZE_BIN_FLOORS.len()];
        for scaffold in scaffolds {
            bins[bin_index(&SIZE_BIN_FLOORS, scaffold.total_size)].add_scaffold(scaffold);
        }
        for i in (1..bins.len()).rev() {
            let above = bins[i];
            bins[i - 1].merge(&above);
        }
        Self { bins }
    }

    /// Cumulative figures for every bin, smallest floor first
    #[must_use]
    pub fn bins(&self) -> &[Stats] {
        &self.bins
    }

    /// Rows worth showing.
    ///
    /// The "all" row is always kept. Other rows are hidden below `min_display_size`,
    /// and after the first shown row that has no scaffolds.
    #[must_use]
    pub fn displayed(&self, min_display_size: u64) -> Vec<SizeBin> {
        let mut rows = Vec::new();
        let mut found_end = false;
        for (index, (&floor, stats)) in SIZE_BIN_FLOORS.iter().zip(&self.bins).enumerate() {
            if floor != 0 && (floor < min_display_size || (found_end && stats.scaffold_count == 0))
            {
                continue;
            }
            if stats.scaffold_count == 0 {
                found_end = true;
            }
            rows.push(SizeBin {
                index,
                floor,
                stats: *stats,
                coverage: stats.coverage(),
            });
        }
        rows
    }
}
