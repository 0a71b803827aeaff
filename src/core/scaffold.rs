use serde::{Deserialize, Serialize};

use crate::core::contig::Contig;

/// One assembled sequence record: contigs interleaved with captured gaps.
///
/// A scaffold always holds at least one contig, and `gaps[i]` sits between
/// `contigs[i]` and `contigs[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scaffold {
    /// Sequence name from the FASTA definition line (empty before the first header)
    pub name: String,

    /// Declared length including gap bases
    pub total_size: u64,

    /// Sum of contig `size()` values, set by [`Scaffold::aggregate`]
    pub contig_size: u64,

    /// `total_size` minus the contig totals, set by [`Scaffold::aggregate`]
    pub gap_size: u64,

    /// Sum of recorded gap lengths, set by [`Scaffold::aggregate`]
    pub captured_gap_size: u64,

    pub contigs: Vec<Contig>,

    pub gaps: Vec<u64>,
}

impl Default for Scaffold {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Scaffold {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_size: 0,
            contig_size: 0,
            gap_size: 0,
            captured_gap_size: 0,
            contigs: vec![Contig::default()],
            gaps: Vec::new(),
        }
    }

    /// The contig currently receiving sequence
    #[must_use]
    pub fn current_contig(&self) -> &Contig {
        // A scaffold is never constructed without a contig and never pops its last one
        &self.contigs[self.contigs.len() - 1]
    }

    pub fn current_contig_mut(&mut self) -> &mut Contig {
        let last = self.contigs.len() - 1;
        &mut self.contigs[last]
    }

    /// Close the current contig behind a gap of `length` bases and open a new one.
    pub fn push_gap(&mut self, length: u64) {
        self.gaps.push(length);
        self.contigs.push(Contig::default());
    }

    /// Drop a trailing contig that holds no called bases.
    ///
    /// With more than one contig the trailing contig and the gap before it are
    /// removed; a lone contig is cleared instead.
    pub fn prune_trailing_contig(&mut self) {
        if !self.current_contig().is_empty() {
            return;
        }
        if self.contigs.len() > 1 {
            self.contigs.pop();
            self.gaps.pop();
        } else {
            self.contigs[0].clear();
        }
    }

    /// True when the scaffold reduces to a single contig of zero size.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contigs.len() == 1 && self.contigs[0].total_size == 0
    }

    /// Compute `contig_size`, `gap_size` and `captured_gap_size` from the contigs and gaps.
    pub fn aggregate(&mut self) {
        let contig_total: u64 = self.contigs.iter().map(|c| c.total_size).sum();
        self.contig_size = self.contigs.iter().map(Contig::size).sum();
        self.gap_size = self.total_size.saturating_sub(contig_total);
        self.captured_gap_size = self.gaps.iter().sum();
    }
}
