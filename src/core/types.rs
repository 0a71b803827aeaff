use serde::{Deserialize, Serialize};

/// Default minimum ambiguous run length that ends a contig
pub const DEFAULT_GAP_THRESHOLD: u64 = 9;

/// Default size above which a scaffold counts as big
pub const DEFAULT_BIG_SCAFFOLD_SIZE: u64 = 50_000;

/// Default smallest size bin shown in the size histogram
pub const DEFAULT_MIN_DISPLAY_SIZE: u64 = 1_000;

/// Thresholds driving segmentation of ambiguous-base runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Minimum run length that is recorded as a gap between contigs
    pub gap_threshold: u64,

    /// Exact run length that splits the scaffold; `None` disables splitting
    pub break_length: Option<u64>,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            break_length: None,
        }
    }
}

/// Options controlling the summary and histogram views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Scaffolds strictly longer than this are reported as big
    pub big_scaffold_size: u64,

    /// Size bins below this floor are hidden
    pub min_display_size: u64,

    /// Gap bins up to this length are folded into the first row; `None` omits the gap table
    pub min_gap_display: Option<u64>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            big_scaffold_size: DEFAULT_BIG_SCAFFOLD_SIZE,
            min_display_size: DEFAULT_MIN_DISPLAY_SIZE,
            min_gap_display: None,
        }
    }
}

/// Outcome of classifying a completed run of ambiguous bases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunClass {
    /// Run length equals the break length: the scaffold ends here
    HardBreak,
    /// Run is long enough to separate two contigs
    Gap,
    /// Run is kept inside the current contig
    Absorbed,
}
