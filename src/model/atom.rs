use super::style::AtomOverride;
use super::types::{Element, Vector};
use std::cell::OnceCell;

/// Atom of a [`Molecule`](super::molecule::Molecule).
///
/// The position lives in the molecule's coordinate buffer at row
/// [`index`](Atom::index); the atom never holds its own copy.
#[derive(Debug, Clone)]
pub struct Atom {
    index: usize,
    element: Element,
    bonds: Vec<usize>,
    rings: Vec<usize>,
    pub(crate) bisector: OnceCell<Vector>,
    pub style: AtomOverride,
}

impl Atom {
    pub(crate) fn new(index: usize, element: Element) -> Self {
        Self {
            index,
            element,
            bonds: Vec::new(),
            rings: Vec::new(),
            bisector: OnceCell::new(),
            style: AtomOverride::default(),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn element(&self) -> Element {
        self.element
    }

    #[inline]
    pub fn symbol(&self) -> &'static str {
        self.element.symbol()
    }

    /// Incident bond indices, in bond order of the topology.
    #[inline]
    pub fn bonds(&self) -> &[usize] {
        &self.bonds
    }

    /// Indices of the rings this atom belongs to.
    #[inline]
    pub fn rings(&self) -> &[usize] {
        &self.rings
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn in_ring(&self) -> bool {
        !self.rings.is_empty()
    }

    pub(crate) fn push_bond(&mut self, bond: usize) {
        self.bonds.push(bond);
    }

    pub(crate) fn push_ring(&mut self, ring: usize) {
        if !self.rings.contains(&ring) {
            self.rings.push(ring);
        }
    }

    pub(crate) fn invalidate(&mut self) {
        self.bisector.take();
    }
}
