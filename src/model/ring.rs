use super::style::RingOverride;

#[derive(Debug, Clone)]
pub struct Ring {
    index: usize,
    atoms: Vec<usize>,
    bonds: Vec<usize>,
    aromatic: bool,
    pub style: RingOverride,
}

impl Ring {
    pub(crate) fn new(index: usize, atoms: Vec<usize>, bonds: Vec<usize>, aromatic: bool) -> Self {
        Self {
            index,
            atoms,
            bonds,
            aromatic,
            style: RingOverride::default(),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Member atoms in detection order, not geometric order.
    #[inline]
    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }

    /// Bonds whose two atoms are both members.
    #[inline]
    pub fn bonds(&self) -> &[usize] {
        &self.bonds
    }

    #[inline]
    pub fn is_aromatic(&self) -> bool {
        self.aromatic
    }

    /// Rings with fewer than three members cannot be drawn or used as an
    /// alignment reference.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.atoms.len() >= 3
    }
}
