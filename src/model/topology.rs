use super::types::{BondOrder, BondStereo, Element, Point};

/// Atom as delivered by a parser or an external toolkit.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub element: Element,
    pub position: Point,
}

impl AtomRecord {
    pub fn new(element: Element, position: [f64; 2]) -> Self {
        Self {
            element,
            position: Point::new(position[0], position[1]),
        }
    }
}

/// Bond between two atom indices. Endpoint order is significant: the
/// bond direction runs from `i` to `j` and stereo wedges start at `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BondRecord {
    pub i: usize,
    pub j: usize,
    pub order: BondOrder,
    pub stereo: BondStereo,
}

impl BondRecord {
    pub fn new(i: usize, j: usize, order: BondOrder) -> Self {
        Self {
            i,
            j,
            order,
            stereo: BondStereo::None,
        }
    }

    pub fn with_stereo(mut self, stereo: BondStereo) -> Self {
        self.stereo = stereo;
        self
    }
}

/// A perceived ring, in detection order.
///
/// Member order need not follow the cycle, so ring bonds are every bond
/// whose two atoms are both members. Pass the smallest rings: a bond across
/// a ring (a chord or a transannular bridge) also counts as a member and
/// aligns toward that ring's centroid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RingRecord {
    pub atoms: Vec<usize>,
    pub aromatic: bool,
}

impl RingRecord {
    pub fn new(atoms: Vec<usize>, aromatic: bool) -> Self {
        Self { atoms, aromatic }
    }
}

/// Polymer repeat unit bounded by a pair of brackets.
///
/// `crossing_bonds` and `bracket_lines` are optional hints (as found in MOL
/// `SBL` and `SDI` records). Without them the crossing bonds are derived
/// from the unit's external bonds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepeatUnitRecord {
    pub atoms: Vec<usize>,
    pub crossing_bonds: Vec<usize>,
    pub bracket_lines: Vec<[Point; 2]>,
    pub subscript: Option<String>,
    pub superscript: Option<String>,
}

impl RepeatUnitRecord {
    pub fn new(atoms: Vec<usize>) -> Self {
        Self {
            atoms,
            ..Self::default()
        }
    }

    pub fn with_subscript(mut self, text: impl Into<String>) -> Self {
        self.subscript = Some(text.into());
        self
    }

    pub fn with_superscript(mut self, text: impl Into<String>) -> Self {
        self.superscript = Some(text.into());
        self
    }
}

/// Molecular graph with seed 2D coordinates, the input of a drawing pass.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    pub atoms: Vec<AtomRecord>,
    pub bonds: Vec<BondRecord>,
    pub rings: Vec<RingRecord>,
    pub repeat_units: Vec<RepeatUnitRecord>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn add_atom(&mut self, element: Element, position: [f64; 2]) -> usize {
        self.atoms.push(AtomRecord::new(element, position));
        self.atoms.len() - 1
    }

    pub fn add_bond(&mut self, i: usize, j: usize, order: BondOrder) -> usize {
        self.bonds.push(BondRecord::new(i, j, order));
        self.bonds.len() - 1
    }

    pub fn add_stereo_bond(&mut self, i: usize, j: usize, stereo: BondStereo) -> usize {
        self.bonds
            .push(BondRecord::new(i, j, BondOrder::Single).with_stereo(stereo));
        self.bonds.len() - 1
    }

    pub fn add_ring(&mut self, atoms: Vec<usize>, aromatic: bool) -> usize {
        self.rings.push(RingRecord::new(atoms, aromatic));
        self.rings.len() - 1
    }

    pub fn add_repeat_unit(&mut self, unit: RepeatUnitRecord) -> usize {
        self.repeat_units.push(unit);
        self.repeat_units.len() - 1
    }
}
