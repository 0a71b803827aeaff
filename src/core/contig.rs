use serde::{Deserialize, Serialize};

/// A maximal run of sequence inside a scaffold that is not split by a gap.
///
/// Short runs of ambiguous bases (below the gap threshold) are absorbed into the
/// contig: they count toward `total_size` and are tallied in `ambiguous_count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contig {
    /// Bases spanned by the contig, including absorbed ambiguous bases
    pub total_size: u64,

    /// Ambiguous bases embedded in `total_size`
    pub ambiguous_count: u64,
}

impl Contig {
    #[must_use]
    pub fn new(total_size: u64, ambiguous_count: u64) -> Self {
        debug_assert!(ambiguous_count <= total_size);
        Self {
            total_size,
            ambiguous_count,
        }
    }

    /// Number of called (non-ambiguous) bases
    #[must_use]
    pub fn size(&self) -> u64 {
        self.total_size - self.ambiguous_count
    }

    /// True when the contig holds no called bases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_size == self.ambiguous_count
    }

    /// Reset both counters to zero
    pub fn clear(&mut self) {
        self.total_size = 0;
        self.ambiguous_count = 0;
    }

    /// Extend the contig with called bases
    pub fn add_bases(&mut self, count: u64) {
        self.total_size += count;
    }

    /// Extend the contig with an ambiguous run too short to be a gap
    pub fn absorb_run(&mut self, count: u64) {
        self.total_size += count;
        self.ambiguous_count += count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_excludes_ambiguous_bases() {
        let mut contig = Contig::default();
        contig.add_bases(10);
        contig.absorb_run(4);
        assert_eq!(contig.total_size, 14);
        assert_eq!(contig.ambiguous_count, 4);
        assert_eq!(contig.size(), 10);
    }

    #[test]
    fn test_is_empty() {
        assert!(Contig::default().is_empty());
        // Only absorbed ambiguous bases: no called sequence
        assert!(Contig::new(5, 5).is_empty());
        assert!(!Contig::new(5, 4).is_empty());
    }

    #[test]
    fn test_is_empty_does_not_reset() {
        let contig = Contig::new(3, 3);
        assert!(contig.is_empty());
        assert_eq!(contig.total_size, 3);

        let mut contig = contig;
        contig.clear();
        assert_eq!(contig, Contig::default());
    }
}
