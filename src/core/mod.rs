//! Core data types for assembly segmentation.
//!
//! - [`Contig`]: a run of called sequence, possibly padded with short ambiguous runs
//! - [`Scaffold`]: one sequence record, an ordered list of contigs separated by gaps
//! - [`SegmentConfig`], [`ReportConfig`]: thresholds for segmentation and reporting
//! - [`RunClass`]: how a run of ambiguous bases is treated
//!
//! ## Hierarchy
//!
//! ```text
//! >scaffold_1
//! ACGTACGTNNNNNNNNNNNNACGTNNNACGT
//! |-------|<-- gap -->|---------|
//!  contig               contig (3 absorbed N)
//! ```

pub mod contig;
pub mod scaffold;
pub mod types;

pub use contig::Contig;
pub use scaffold::Scaffold;
pub use types::{ReportConfig, RunClass, SegmentConfig};
