use super::style::BracketOverride;
use super::types::{Point, Vector};
use serde::Serialize;
use std::cell::OnceCell;

/// Where a bracket sits: the anchor point and the outward unit vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BracketPlacement {
    pub anchor: Point,
    pub direction: Vector,
}

/// One of the two brackets bounding a repeat unit.
///
/// Brackets are created in pairs by the owning
/// [`Molecule`](super::molecule::Molecule); each names the other through
/// [`partner`](Bracket::partner).
#[derive(Debug, Clone)]
pub struct Bracket {
    index: usize,
    partner: usize,
    repeat_unit: usize,
    atoms: Vec<usize>,
    cross_bond: Option<usize>,
    pub(crate) line: Option<[Point; 2]>,
    subscript: Option<String>,
    superscript: Option<String>,
    pub(crate) placement: OnceCell<BracketPlacement>,
    pub style: BracketOverride,
}

impl Bracket {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        index: usize,
        partner: usize,
        repeat_unit: usize,
        atoms: Vec<usize>,
        cross_bond: Option<usize>,
        line: Option<[Point; 2]>,
        subscript: Option<String>,
        superscript: Option<String>,
    ) -> Self {
        Self {
            index,
            partner,
            repeat_unit,
            atoms,
            cross_bond,
            line,
            subscript,
            superscript,
            placement: OnceCell::new(),
            style: BracketOverride::default(),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn partner(&self) -> usize {
        self.partner
    }

    #[inline]
    pub fn repeat_unit(&self) -> usize {
        self.repeat_unit
    }

    /// Atoms of the enclosed repeat unit.
    #[inline]
    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }

    /// The external bond this bracket crosses.
    #[inline]
    pub fn cross_bond(&self) -> Option<usize> {
        self.cross_bond
    }

    /// Explicit bracket line, if the input supplied one.
    #[inline]
    pub fn line(&self) -> Option<[Point; 2]> {
        self.line
    }

    #[inline]
    pub fn subscript(&self) -> Option<&str> {
        self.subscript.as_deref()
    }

    #[inline]
    pub fn superscript(&self) -> Option<&str> {
        self.superscript.as_deref()
    }

    pub(crate) fn invalidate(&mut self) {
        self.placement.take();
    }
}
