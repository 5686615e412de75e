/// A pair of residues that are close in space but far apart along the chain.
///
/// Indices refer to positions in the parsed backbone sequence, with `i < j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub i: usize,
    pub j: usize,
    /// Distance between the two backbone atoms in Angstroms.
    pub distance: f64,
}

impl Contact {
    pub fn new(i: usize, j: usize, distance: f64) -> Self {
        Self { i, j, distance }
    }

    /// Number of residues separating the pair along the chain.
    #[inline]
    pub fn sequence_separation(&self) -> usize {
        self.j.abs_diff(self.i)
    }

    /// Returns `true` if both endpoints fall below `num_nodes`.
    #[inline]
    pub fn fits_within(&self, num_nodes: usize) -> bool {
        self.i < num_nodes && self.j < num_nodes
    }
}
