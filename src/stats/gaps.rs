//! Histogram of captured gap lengths.

use serde::Serialize;

use crate::core::Scaffold;
use crate::stats::bins::bin_index;
use crate::stats::summary::percent;

/// Bin floors for gap lengths
pub const GAP_BIN_FLOORS: [u64; 22] = [
    1, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1_000, 2_500, 5_000, 10_000, 25_000,
    50_000, 100_000, 250_000, 500_000, 1_000_000, 2_500_000, 5_000_000,
];

/// Number and summed length of gaps in one bin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GapCount {
    pub count: u64,
    pub length: u64,
}

impl GapCount {
    fn add(&mut self, length: u64) {
        self.count += 1;
        self.length += length;
    }

    fn merge(&mut self, other: GapCount) {
        self.count += other.count;
        self.length += other.length;
    }
}

/// One displayed row of the gap histogram
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GapRow {
    /// Index into [`GAP_BIN_FLOORS`] of the row's last bin
    #[serde(skip)]
    pub index: usize,
    /// Smallest length in the row; `None` for the "< upper" row that folds in
    /// every suppressed bin below it
    pub lower: Option<u64>,
    /// Exclusive upper bound; `None` for the open-ended top bin
    pub upper: Option<u64>,
    #[serde(flatten)]
    pub gaps: GapCount,
    pub cumulative_count: u64,
    pub cumulative_length: u64,
    pub cumulative_count_percent: f64,
    pub cumulative_length_percent: f64,
}

/// Per-bin gap counts over all scaffolds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapHistogram {
    bins: Vec<GapCount>,
    total: GapCount,
}

impl GapHistogram {
    #[must_use]
    pub fn compute(scaffolds: &[Scaffold]) -> Self {
        let mut bins = vec![GapCount::default(); GAP_BIN_FLOORS.len()];
        let mut total = GapCount::default();
        for &gap in scaffolds.iter().flat_map(|s| &s.gaps) {
            bins[bin_index(&GAP_BIN_FLOORS, gap)].add(gap);
            total.add(gap);
        }
        Self { bins, total }
    }

    #[must_use]
    pub fn bins(&self) -> &[GapCount] {
        &self.bins
    }

    #[must_use]
    pub fn total(&self) -> GapCount {
        self.total
    }

    /// Rows to display when bins up to `min_gap_display` are suppressed.
    ///
    /// Rows run through the last non-empty bin. When leading bins are suppressed the
    /// first row is labelled open below but only counts its own bin; the suppressed
    /// bins are left out of every row and of the running totals.
    #[must_use]
    pub fn rows(&self, min_gap_display: u64) -> Vec<GapRow> {
        let above = GAP_BIN_FLOORS.partition_point(|&floor| floor <= min_gap_display);
        let (start, open_first) = if above > 1 { (above - 2, true) } else { (0, false) };
        let last = self.bins.iter().rposition(|b| b.count != 0).unwrap_or(0);

        let mut rows = Vec::new();
        let mut cumulative = GapCount::default();
        for index in start..=last.max(start) {
            let lower = if index == start && open_first {
                None
            } else {
                Some(GAP_BIN_FLOORS[index])
            };
            let gaps = self.bins[index];
            cumulative.merge(gaps);

            rows.push(GapRow {
                index,
                lower,
                upper: GAP_BIN_FLOORS.get(index + 1).copied(),
                gaps,
                cumulative_count: cumulative.count,
                cumulative_length: cumulative.length,
                cumulative_count_percent: percent(cumulative.count, self.total.count),
                cumulative_length_percent: percent(cumulative.length, self.total.length),
            });
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_gaps(gaps: &[u64]) -> Vec<Scaffold> {
        let mut scaffold = Scaffold::new("s");
        for &gap in gaps {
            scaffold.current_contig_mut().add_bases(1);
            scaffold.push_gap(gap);
        }
        scaffold.current_contig_mut().add_bases(1);
        vec![scaffold]
    }

    #[test]
    fn test_binning() {
        let histogram = GapHistogram::compute(&with_gaps(&[10, 150, 150, 450, 3_000]));
        let bins = histogram.bins();
        assert_eq!(bins[0], GapCount { count: 1, length: 10 });
        assert_eq!(bins[1], GapCount { count: 2, length: 300 });
        assert_eq!(bins[4], GapCount { count: 1, length: 450 });
        assert_eq!(bins[11], GapCount { count: 1, length: 3_000 });
        assert_eq!(histogram.total(), GapCount { count: 5, length: 3_760 });
    }

    #[test]
    fn test_rows_without_suppression() {
        let histogram = GapHistogram::compute(&with_gaps(&[10, 150, 150, 450, 3_000]));
        let rows = histogram.rows(0);
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].lower, Some(1));
        assert_eq!(rows[0].upper, Some(100));
        assert_eq!(rows[1].cumulative_count, 3);
        assert!((rows[1].cumulative_count_percent - 60.0).abs() < 1e-9);

        let last = rows.last().unwrap();
        assert_eq!(last.lower, Some(2_500));
        assert_eq!(last.cumulative_count, 5);
        assert!((last.cumulative_length_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rows_hide_suppressed_bins() {
        let histogram = GapHistogram::compute(&with_gaps(&[10, 150, 150, 450, 3_000]));
        let rows = histogram.rows(500);

        // "< 500" holds only the 400 bin, then 500 .. 2500 bins
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].lower, None);
        assert_eq!(rows[0].upper, Some(500));
        assert_eq!(rows[0].gaps, GapCount { count: 1, length: 450 });
        assert_eq!(rows[0].cumulative_count, 1);
        assert!((rows[0].cumulative_count_percent - 20.0).abs() < 1e-9);
        assert_eq!(rows[1].lower, Some(500));
        assert_eq!(rows.last().unwrap().cumulative_count, 2);
        assert_eq!(rows.last().unwrap().cumulative_length, 3_450);
    }

    #[test]
    fn test_open_row_counts_only_its_bin() {
        let histogram = GapHistogram::compute(&with_gaps(&[10, 150, 450]));
        let rows = histogram.rows(500);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].gaps, GapCount { count: 1, length: 450 });
        assert!((rows[0].cumulative_count_percent - 100.0 / 3.0).abs() < 1e-9);
        assert!((rows[0].cumulative_length_percent - 45_000.0 / 610.0).abs() < 1e-9);
    }

    #[test]
    fn test_rows_small_cutoff_keeps_first_bin_closed() {
        let histogram = GapHistogram::compute(&with_gaps(&[10, 150]));
        let rows = histogram.rows(50);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].lower, Some(1));
    }

    #[test]
    fn test_rows_without_gaps() {
        let histogram = GapHistogram::compute(&with_gaps(&[]));
        let rows = histogram.rows(500);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].gaps, GapCount::default());
        assert!(rows[0].cumulative_count_percent.abs() < f64::EPSILON);
    }

    #[test]
    fn test_top_bin_is_open_ended() {
        let histogram = GapHistogram::compute(&with_gaps(&[6_000_000]));
        let rows = histogram.rows(0);
        assert_eq!(rows.last().unwrap().upper, None);
    }
}
