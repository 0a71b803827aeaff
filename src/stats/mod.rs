//! Assembly statistics over finished scaffolds.
//!
//! Every view here is a read-only function of scaffolds that were aggregated and
//! sorted by [`crate::segment::Segmenter::finish`]:
//!
//! - [`summary`]: totals, N50/L50 for scaffolds and contigs, big-scaffold share
//! - [`bins`]: cumulative scaffold size histogram
//! - [`gaps`]: captured gap length histogram

pub mod bins;
pub mod gaps;
pub mod summary;

use serde::Serialize;

use crate::core::{ReportConfig, Scaffold};
use bins::{SizeBin, SizeHistogram};
use gaps::{GapHistogram, GapRow};
use summary::AssemblySummary;

/// Everything the report formatter needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblyReport {
    pub summary: AssemblySummary,
    pub size_bins: Vec<SizeBin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_bins: Option<Vec<GapRow>>,
}

impl AssemblyReport {
    /// Build every view for `scaffolds` under `config`.
    #[must_use]
    pub fn build(scaffolds: &[Scaffold], config: &ReportConfig) -> Self {
        let summary = AssemblySummary::compute(scaffolds, config);
        let size_bins = SizeHistogram::compute(scaffolds).displayed(config.min_display_size);
        let gap_bins = config
            .min_gap_display
            .map(|min_gap| GapHistogram::compute(scaffolds).rows(min_gap));

        Self {
            summary,
            size_bins,
            gap_bins,
        }
    }
}
