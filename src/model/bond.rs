use super::style::BondOverride;
use super::types::{Alignment, BondOrder, BondStereo, Point, Vector};
use serde::Serialize;
use std::cell::OnceCell;

/// Position-derived geometry of a bond.
///
/// `direction` points from the first atom to the second and
/// `perpendicular` is `direction` rotated by +90°. Both are the zero
/// vector for a zero-length bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondFrame {
    pub start: Point,
    pub end: Point,
    pub direction: Vector,
    pub perpendicular: Vector,
    pub midpoint: Point,
    pub length: f64,
}

#[derive(Debug, Clone)]
pub struct Bond {
    index: usize,
    atoms: [usize; 2],
    order: BondOrder,
    stereo: BondStereo,
    rings: Vec<usize>,
    pub(crate) frame: OnceCell<BondFrame>,
    pub(crate) alignment: OnceCell<Alignment>,
    pub(crate) alignment_override: Option<Alignment>,
    pub style: BondOverride,
}

impl Bond {
    pub(crate) fn new(index: usize, atoms: [usize; 2], order: BondOrder, stereo: BondStereo) -> Self {
        Self {
            index,
            atoms,
            order,
            stereo,
            rings: Vec::new(),
            frame: OnceCell::new(),
            alignment: OnceCell::new(),
            alignment_override: None,
            style: BondOverride::default(),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Endpoint atom indices, in direction order.
    #[inline]
    pub fn atoms(&self) -> [usize; 2] {
        self.atoms
    }

    #[inline]
    pub fn order(&self) -> BondOrder {
        self.order
    }

    #[inline]
    pub fn stereo(&self) -> BondStereo {
        self.stereo
    }

    #[inline]
    pub fn rings(&self) -> &[usize] {
        &self.rings
    }

    #[inline]
    pub fn in_ring(&self) -> bool {
        !self.rings.is_empty()
    }

    #[inline]
    pub fn contains(&self, atom: usize) -> bool {
        self.atoms[0] == atom || self.atoms[1] == atom
    }

    /// The endpoint opposite to `atom`, or `None` if `atom` is not an endpoint.
    pub fn other(&self, atom: usize) -> Option<usize> {
        match self.atoms {
            [a, b] if a == atom => Some(b),
            [a, b] if b == atom => Some(a),
            _ => None,
        }
    }

    /// Manually set alignment, if any.
    #[inline]
    pub fn alignment_override(&self) -> Option<Alignment> {
        self.alignment_override
    }

    pub(crate) fn push_ring(&mut self, ring: usize) {
        if !self.rings.contains(&ring) {
            self.rings.push(ring);
        }
    }

    pub(crate) fn invalidate(&mut self) {
        self.frame.take();
        self.alignment.take();
    }
}
