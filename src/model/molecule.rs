use super::atom::Atom;
use super::bond::{Bond, BondFrame};
use super::bracket::{Bracket, BracketPlacement};
use super::diagnostic::{Diagnostic, Entity};
use super::error::TopologyError;
use super::ring::Ring;
use super::topology::{RepeatUnitRecord, Topology};
use super::types::{Alignment, Point, Vector};
use crate::draw::{bond as bond_geometry, bracket as bracket_geometry, vector};

/// Validated molecular graph with a shared coordinate buffer.
///
/// Atoms, bonds, rings and brackets refer to each other and to the buffer
/// by index. Position-derived values (bond frames, bisectors, alignments,
/// bracket placements) are memoized in `OnceCell`s; every position mutation
/// goes through `&mut self` and clears them explicitly. Because of those
/// cells a `Molecule` is not `Sync` and a drawing pass is not reentrant on
/// a shared molecule.
#[derive(Debug, Clone)]
pub struct Molecule {
    positions: Vec<Point>,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    rings: Vec<Ring>,
    brackets: Vec<Bracket>,
    diagnostics: Vec<Diagnostic>,
}

impl Molecule {
    /// Validates `topology` and builds the molecule.
    ///
    /// # Errors
    ///
    /// Returns the first structural inconsistency found: an empty atom list,
    /// a bond, ring or repeat unit referencing a missing atom or bond, a
    /// self-bond, a duplicated ring member or a malformed bracket line list.
    pub fn from_topology(topology: &Topology) -> Result<Self, TopologyError> {
        if topology.atoms.is_empty() {
            return Err(TopologyError::EmptyMolecule);
        }
        let atom_count = topology.atoms.len();

        let positions: Vec<Point> = topology.atoms.iter().map(|a| a.position).collect();
        let mut atoms: Vec<Atom> = topology
            .atoms
            .iter()
            .enumerate()
            .map(|(i, a)| Atom::new(i, a.element))
            .collect();

        let mut bonds = Vec::with_capacity(topology.bonds.len());
        for (index, record) in topology.bonds.iter().enumerate() {
            if record.i >= atom_count || record.j >= atom_count {
                return Err(TopologyError::invalid_bond(
                    index,
                    record.i,
                    record.j,
                    format!("atom index out of range (molecule has {atom_count} atoms)"),
                ));
            }
            if record.i == record.j {
                return Err(TopologyError::invalid_bond(
                    index,
                    record.i,
                    record.j,
                    "bond joins an atom to itself",
                ));
            }
            atoms[record.i].push_bond(index);
            atoms[record.j].push_bond(index);
            bonds.push(Bond::new(
                index,
                [record.i, record.j],
                record.order,
                record.stereo,
            ));
        }

        let mut diagnostics = Vec::new();
        let mut rings = Vec::with_capacity(topology.rings.len());
        for (index, record) in topology.rings.iter().enumerate() {
            for (k, &atom) in record.atoms.iter().enumerate() {
                if atom >= atom_count {
                    return Err(TopologyError::invalid_ring(
                        index,
                        format!("member atom {atom} out of range"),
                    ));
                }
                if record.atoms[..k].contains(&atom) {
                    return Err(TopologyError::invalid_ring(
                        index,
                        format!("atom {atom} listed twice"),
                    ));
                }
            }

            let ring_bonds: Vec<usize> = if record.atoms.len() >= 3 {
                bonds
                    .iter()
                    .filter(|b| {
                        let [a, c] = b.atoms();
                        record.atoms.contains(&a) && record.atoms.contains(&c)
                    })
                    .map(|b| b.index())
                    .collect()
            } else {
                diagnostics.push(Diagnostic::warn(
                    Entity::Ring(index),
                    format!(
                        "ring has {} atoms; at least 3 are required, ring skipped",
                        record.atoms.len()
                    ),
                ));
                Vec::new()
            };

            if record.atoms.len() >= 3 {
                for &atom in &record.atoms {
                    atoms[atom].push_ring(index);
                }
                for &bond in &ring_bonds {
                    bonds[bond].push_ring(index);
                }
            }
            rings.push(Ring::new(
                index,
                record.atoms.clone(),
                ring_bonds,
                record.aromatic,
            ));
        }

        let mut molecule = Self {
            positions,
            atoms,
            bonds,
            rings,
            brackets: Vec::new(),
            diagnostics,
        };

        for (index, unit) in topology.repeat_units.iter().enumerate() {
            molecule.add_repeat_unit(index, unit)?;
        }

        Ok(molecule)
    }

    fn add_repeat_unit(
        &mut self,
        index: usize,
        unit: &RepeatUnitRecord,
    ) -> Result<(), TopologyError> {
        if unit.atoms.is_empty() {
            return Err(TopologyError::invalid_repeat_unit(index, "no member atoms"));
        }
        if let Some(&atom) = unit.atoms.iter().find(|&&a| a >= self.atoms.len()) {
            return Err(TopologyError::invalid_repeat_unit(
                index,
                format!("member atom {atom} out of range"),
            ));
        }
        if let Some(&bond) = unit.crossing_bonds.iter().find(|&&b| b >= self.bonds.len()) {
            return Err(TopologyError::invalid_repeat_unit(
                index,
                format!("crossing bond {bond} out of range"),
            ));
        }
        if !matches!(unit.bracket_lines.len(), 0 | 2) {
            return Err(TopologyError::invalid_repeat_unit(
                index,
                format!(
                    "expected 0 or 2 bracket lines, found {}",
                    unit.bracket_lines.len()
                ),
            ));
        }

        let external = self.external_bonds(&unit.atoms);
        let candidates = if unit.crossing_bonds.is_empty() {
            external
        } else if unit.crossing_bonds.iter().all(|b| external.contains(b)) {
            unit.crossing_bonds.clone()
        } else {
            self.diagnostics.push(Diagnostic::warn(
                Entity::RepeatUnit(index),
                "listed crossing bonds are not all external to the unit; using external bonds",
            ));
            external
        };

        if candidates.is_empty() && unit.bracket_lines.is_empty() {
            self.diagnostics.push(Diagnostic::warn(
                Entity::RepeatUnit(index),
                "no external bonds and no bracket lines; brackets skipped",
            ));
            return Ok(());
        }
        if candidates.len() == 1 {
            self.diagnostics.push(Diagnostic::warn(
                Entity::RepeatUnit(index),
                "single external bond; both brackets cross it",
            ));
        }

        let midpoints: Vec<(usize, Point)> = candidates
            .iter()
            .map(|&b| (b, self.bond_frame(b).midpoint))
            .collect();
        let anchors = match unit.bracket_lines.as_slice() {
            [a, b] => Some([
                nalgebra::center(&a[0], &a[1]),
                nalgebra::center(&b[0], &b[1]),
            ]),
            _ => None,
        };
        let cross = bracket_geometry::assign_cross_bonds(anchors, &midpoints);

        let first = self.brackets.len();
        for side in 0..2 {
            self.brackets.push(Bracket::new(
                first + side,
                first + 1 - side,
                index,
                unit.atoms.clone(),
                cross[side],
                unit.bracket_lines.get(side).copied(),
                unit.subscript.clone(),
                unit.superscript.clone(),
            ));
        }
        Ok(())
    }

    /// Bonds with exactly one endpoint in `members`, in index order.
    pub fn external_bonds(&self, members: &[usize]) -> Vec<usize> {
        self.bonds
            .iter()
            .filter(|b| {
                let [a, c] = b.atoms();
                members.contains(&a) != members.contains(&c)
            })
            .map(|b| b.index())
            .collect()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    #[inline]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    #[inline]
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn bond(&self, index: usize) -> Option<&Bond> {
        self.bonds.get(index)
    }

    pub fn ring(&self, index: usize) -> Option<&Ring> {
        self.rings.get(index)
    }

    pub fn bracket(&self, index: usize) -> Option<&Bracket> {
        self.brackets.get(index)
    }

    /// Mutable access for style overrides. Does not touch geometry caches.
    pub fn atom_mut(&mut self, index: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(index)
    }

    pub fn bond_mut(&mut self, index: usize) -> Option<&mut Bond> {
        self.bonds.get_mut(index)
    }

    pub fn ring_mut(&mut self, index: usize) -> Option<&mut Ring> {
        self.rings.get_mut(index)
    }

    pub fn bracket_mut(&mut self, index: usize) -> Option<&mut Bracket> {
        self.brackets.get_mut(index)
    }

    /// Problems recovered while building the molecule.
    #[inline]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[inline]
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Position of atom `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn position(&self, index: usize) -> Point {
        self.positions[index]
    }

    /// Bond-order sum of atom `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn connectivity(&self, index: usize) -> u32 {
        self.atoms[index]
            .bonds()
            .iter()
            .map(|&b| u32::from(self.bonds[b].order().value()))
            .sum()
    }

    /// Number of bonds on atom `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[inline]
    pub fn degree(&self, index: usize) -> usize {
        self.atoms[index].degree()
    }

    /// Hydrogens implied by the element's default valence, floored at zero.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn implicit_hydrogens(&self, index: usize) -> u32 {
        self.atoms[index]
            .element()
            .default_valence()
            .map_or(0, |v| u32::from(v).saturating_sub(self.connectivity(index)))
    }

    /// Direction, perpendicular and midpoint of bond `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn bond_frame(&self, index: usize) -> BondFrame {
        let bond = &self.bonds[index];
        *bond.frame.get_or_init(|| {
            let [a, b] = bond.atoms();
            let (start, end) = (self.positions[a], self.positions[b]);
            let direction = vector::normalize(end - start);
            BondFrame {
                start,
                end,
                direction,
                perpendicular: vector::perpendicular(direction),
                midpoint: nalgebra::center(&start, &end),
                length: (end - start).norm(),
            }
        })
    }

    /// Substituent bisector of atom `index`: the normalized sum of unit
    /// vectors toward each incident bond's midpoint, sign-flipped so it
    /// points into the open side. Zero for isolated atoms or when the
    /// contributions cancel.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn bisector(&self, index: usize) -> Vector {
        let atom = &self.atoms[index];
        *atom.bisector.get_or_init(|| {
            let origin = self.positions[index];
            let sum = atom.bonds().iter().fold(Vector::zeros(), |acc, &b| {
                acc + vector::normalize(self.bond_frame(b).midpoint - origin)
            });
            -vector::normalize(sum)
        })
    }

    /// Mean of the ring's member positions. Recomputed on every call.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn ring_centroid(&self, index: usize) -> Point {
        let members: Vec<Point> = self.rings[index]
            .atoms()
            .iter()
            .map(|&a| self.positions[a])
            .collect();
        vector::centroid(&members).unwrap_or_else(Point::origin)
    }

    /// Mean position of `members`.
    ///
    /// # Panics
    ///
    /// Panics if any member is out of range.
    pub fn atoms_centroid(&self, members: &[usize]) -> Point {
        let points: Vec<Point> = members.iter().map(|&a| self.positions[a]).collect();
        vector::centroid(&points).unwrap_or_else(Point::origin)
    }

    /// Alignment of bond `index`: the manual override when set, otherwise
    /// the memoized decision.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn alignment(&self, index: usize) -> Alignment {
        let bond = &self.bonds[index];
        if let Some(alignment) = bond.alignment_override() {
            return alignment;
        }
        *bond
            .alignment
            .get_or_init(|| bond_geometry::decide_alignment(self, index))
    }

    /// Anchor and outward direction of bracket `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn bracket_placement(&self, index: usize) -> BracketPlacement {
        let bracket = &self.brackets[index];
        *bracket
            .placement
            .get_or_init(|| bracket_geometry::placement(self, bracket))
    }

    /// Axis-aligned bounds of all atom positions.
    pub fn bounds(&self) -> (Point, Point) {
        vector::bounds(self.positions.iter().copied())
            .unwrap_or((Point::origin(), Point::origin()))
    }

    /// Moves atom `index` to `position` and clears all derived geometry.
    pub fn move_atom(&mut self, index: usize, position: Point) -> Result<(), TopologyError> {
        let count = self.positions.len();
        let slot = self
            .positions
            .get_mut(index)
            .ok_or(TopologyError::UnknownAtom { index, count })?;
        *slot = position;
        self.invalidate_geometry();
        Ok(())
    }

    /// Shifts every atom and explicit bracket line by `offset`.
    pub fn translate(&mut self, offset: Vector) {
        for p in &mut self.positions {
            *p += offset;
        }
        for bracket in &mut self.brackets {
            if let Some(line) = bracket.line.as_mut() {
                line[0] += offset;
                line[1] += offset;
            }
        }
        self.invalidate_geometry();
    }

    /// Translates the molecule so the centre of its bounding box lands on `target`.
    pub fn center_at(&mut self, target: Point) {
        let (lo, hi) = self.bounds();
        let offset = target - nalgebra::center(&lo, &hi);
        if offset != Vector::zeros() {
            self.translate(offset);
        }
    }

    /// Replaces the coordinate buffer and clears all derived geometry.
    pub fn set_positions(&mut self, positions: Vec<Point>) -> Result<(), TopologyError> {
        if positions.len() != self.atoms.len() {
            return Err(TopologyError::PositionCount {
                expected: self.atoms.len(),
                found: positions.len(),
            });
        }
        self.positions = positions;
        self.invalidate_geometry();
        Ok(())
    }

    /// Sets or clears the manual alignment of bond `index`.
    pub fn set_alignment(
        &mut self,
        index: usize,
        alignment: Option<Alignment>,
    ) -> Result<(), TopologyError> {
        let count = self.bonds.len();
        let bond = self
            .bonds
            .get_mut(index)
            .ok_or(TopologyError::UnknownBond { index, count })?;
        bond.alignment_override = alignment;
        bond.alignment.take();
        Ok(())
    }

    /// Clears the memoized frame and alignment of bond `index`.
    pub fn invalidate_bond(&mut self, index: usize) {
        if let Some(bond) = self.bonds.get_mut(index) {
            bond.invalidate();
        }
    }

    /// Clears every position-derived cache.
    pub fn invalidate_geometry(&mut self) {
        self.atoms.iter_mut().for_each(Atom::invalidate);
        self.bonds.iter_mut().for_each(Bond::invalidate);
        self.brackets.iter_mut().for_each(Bracket::invalidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::topology::RepeatUnitRecord;
    use crate::model::types::{BondOrder, Element};

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn make_propene() -> Topology {
        let mut t = Topology::new();
        let c0 = t.add_atom(Element::C, [0.0, 0.0]);
        let c1 = t.add_atom(Element::C, [1.0, 0.0]);
        let c2 = t.add_atom(Element::C, [1.5, 0.866]);
        t.add_bond(c0, c1, BondOrder::Double);
        t.add_bond(c1, c2, BondOrder::Single);
        t
    }

    fn make_chain(n: usize) -> Topology {
        let mut t = Topology::new();
        for i in 0..n {
            let y = if i % 2 == 0 { 0.0 } else { 0.5 };
            t.add_atom(Element::C, [i as f64 * 0.866, y]);
        }
        for i in 1..n {
            t.add_bond(i - 1, i, BondOrder::Single);
        }
        t
    }

    #[test]
    fn rejects_empty_topology() {
        let err = Molecule::from_topology(&Topology::new()).unwrap_err();
        assert_eq!(err, TopologyError::EmptyMolecule);
    }

    #[test]
    fn rejects_out_of_range_and_self_bonds() {
        let mut t = make_propene();
        t.add_bond(0, 7, BondOrder::Single);
        assert!(matches!(
            Molecule::from_topology(&t),
            Err(TopologyError::InvalidBond { index: 2, .. })
        ));

        let mut t = make_propene();
        t.add_bond(1, 1, BondOrder::Single);
        assert!(matches!(
            Molecule::from_topology(&t),
            Err(TopologyError::InvalidBond { i: 1, j: 1, .. })
        ));
    }

    #[test]
    fn rejects_bad_ring_members() {
        let mut t = make_propene();
        t.add_ring(vec![0, 1, 9], false);
        assert!(matches!(
            Molecule::from_topology(&t),
            Err(TopologyError::InvalidRing { index: 0, .. })
        ));

        let mut t = make_propene();
        t.add_ring(vec![0, 1, 0], false);
        assert!(matches!(
            Molecule::from_topology(&t),
            Err(TopologyError::InvalidRing { .. })
        ));
    }

    #[test]
    fn undersized_ring_is_kept_but_skipped_with_diagnostic() {
        let mut t = make_propene();
        t.add_ring(vec![0, 1], false);
        let mol = Molecule::from_topology(&t).unwrap();
        assert_eq!(mol.rings().len(), 1);
        assert!(!mol.rings()[0].is_drawable());
        assert!(!mol.bonds()[0].in_ring());
        assert_eq!(mol.diagnostics().len(), 1);
        assert_eq!(mol.diagnostics()[0].entity, Entity::Ring(0));
    }

    #[test]
    fn ring_bonds_are_member_pairs() {
        // Square 0-1-2-3 with the diagonal 0-2 as bond 4.
        let mut t = Topology::new();
        for p in [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
            t.add_atom(Element::C, p);
        }
        for (i, j) in [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)] {
            t.add_bond(i, j, BondOrder::Single);
        }
        t.add_ring(vec![0, 2, 1], false);
        t.add_ring(vec![2, 3, 0], false);
        let mol = Molecule::from_topology(&t).unwrap();

        assert_eq!(mol.rings()[0].bonds(), &[0, 1, 4]);
        assert_eq!(mol.rings()[1].bonds(), &[2, 3, 4]);
        assert_eq!(mol.bonds()[4].rings(), &[0, 1]);
        assert_eq!(mol.bonds()[0].rings(), &[0]);

        // The enclosing ring also claims the diagonal.
        t.rings.clear();
        t.add_ring(vec![0, 1, 2, 3], false);
        let mol = Molecule::from_topology(&t).unwrap();
        assert_eq!(mol.bonds()[4].rings(), &[0]);
    }

    #[test]
    fn checked_lookups_return_none_out_of_range() {
        let mol = Molecule::from_topology(&make_propene()).unwrap();
        assert!(mol.atom(3).is_none());
        assert!(mol.bond(2).is_none());
        assert!(mol.ring(0).is_none());
    }

    #[test]
    #[should_panic]
    fn bond_frame_panics_out_of_range() {
        let mol = Molecule::from_topology(&make_propene()).unwrap();
        mol.bond_frame(2);
    }

    #[test]
    #[should_panic]
    fn bisector_panics_out_of_range() {
        let mol = Molecule::from_topology(&make_propene()).unwrap();
        mol.bisector(3);
    }

    #[test]
    fn connectivity_degree_and_hydrogens() {
        let mol = Molecule::from_topology(&make_propene()).unwrap();
        assert_eq!(mol.connectivity(0), 2);
        assert_eq!(mol.connectivity(1), 3);
        assert_eq!(mol.degree(1), 2);
        assert_eq!(mol.implicit_hydrogens(0), 2);
        assert_eq!(mol.implicit_hydrogens(1), 1);
        assert_eq!(mol.implicit_hydrogens(2), 3);
    }

    #[test]
    fn bond_frame_is_unit_and_orthogonal() {
        let mol = Molecule::from_topology(&make_propene()).unwrap();
        for i in 0..mol.bond_count() {
            let f = mol.bond_frame(i);
            assert!(approx_eq(f.direction.norm(), 1.0, 1e-12));
            assert!(approx_eq(f.perpendicular.norm(), 1.0, 1e-12));
            assert!(approx_eq(f.direction.dot(&f.perpendicular), 0.0, 1e-12));
        }
        let f = mol.bond_frame(0);
        assert_eq!(f.perpendicular, Vector::new(0.0, 1.0));
        assert_eq!(f.midpoint, Point::new(0.5, 0.0));
    }

    #[test]
    fn zero_length_bond_has_zero_frame() {
        let mut t = Topology::new();
        t.add_atom(Element::C, [1.0, 1.0]);
        t.add_atom(Element::O, [1.0, 1.0]);
        t.add_bond(0, 1, BondOrder::Double);
        let mol = Molecule::from_topology(&t).unwrap();
        let f = mol.bond_frame(0);
        assert_eq!(f.direction, Vector::zeros());
        assert_eq!(f.perpendicular, Vector::zeros());
        assert_eq!(f.length, 0.0);
    }

    #[test]
    fn bisector_points_away_from_substituents() {
        let mol = Molecule::from_topology(&make_propene()).unwrap();
        let v = mol.bisector(1);
        assert!(approx_eq(v.norm(), 1.0, 1e-12));
        // Neighbours lie at -x and at +x+y, so the open side is -y.
        assert!(v.y < 0.0);

        let mut t = Topology::new();
        t.add_atom(Element::O, [0.0, 0.0]);
        let lone = Molecule::from_topology(&t).unwrap();
        assert_eq!(lone.bisector(0), Vector::zeros());
    }

    #[test]
    fn move_atom_invalidates_cached_geometry() {
        let mut mol = Molecule::from_topology(&make_propene()).unwrap();
        assert_eq!(mol.bond_frame(0).midpoint, Point::new(0.5, 0.0));
        // The substituent on atom 1 sits above the double bond.
        assert_eq!(mol.alignment(0), Alignment::OppositeSide);

        mol.move_atom(2, Point::new(1.5, -0.866)).unwrap();
        assert_eq!(mol.alignment(0), Alignment::SameSide);

        mol.move_atom(0, Point::new(0.0, 2.0)).unwrap();
        assert_eq!(mol.bond_frame(0).midpoint, Point::new(0.5, 1.0));

        assert!(matches!(
            mol.move_atom(5, Point::origin()),
            Err(TopologyError::UnknownAtom { index: 5, count: 3 })
        ));
    }

    #[test]
    fn alignment_override_takes_precedence() {
        let mut mol = Molecule::from_topology(&make_propene()).unwrap();
        mol.set_alignment(0, Some(Alignment::Center)).unwrap();
        assert_eq!(mol.alignment(0), Alignment::Center);
        mol.set_alignment(0, Some(Alignment::OppositeSide)).unwrap();
        assert_eq!(mol.alignment(0), Alignment::OppositeSide);
        assert!(mol.set_alignment(9, None).is_err());
    }

    #[test]
    fn center_at_and_set_positions() {
        let mut mol = Molecule::from_topology(&make_propene()).unwrap();
        mol.center_at(Point::origin());
        let (lo, hi) = mol.bounds();
        assert!(approx_eq(lo.x + hi.x, 0.0, 1e-12));
        assert!(approx_eq(lo.y + hi.y, 0.0, 1e-12));

        let err = mol.set_positions(vec![Point::origin()]).unwrap_err();
        assert_eq!(
            err,
            TopologyError::PositionCount {
                expected: 3,
                found: 1
            }
        );
    }

    #[test]
    fn repeat_unit_creates_mutual_bracket_pair() {
        let mut t = make_chain(4);
        t.add_repeat_unit(RepeatUnitRecord::new(vec![1, 2]).with_subscript("n"));
        let mol = Molecule::from_topology(&t).unwrap();

        let [a, b] = [&mol.brackets()[0], &mol.brackets()[1]];
        assert_eq!(a.partner(), 1);
        assert_eq!(b.partner(), 0);
        let mut cross = [a.cross_bond().unwrap(), b.cross_bond().unwrap()];
        cross.sort_unstable();
        assert_eq!(cross, [0, 2]);
        assert_eq!(a.subscript(), Some("n"));
    }

    #[test]
    fn repeat_unit_validation() {
        let mut t = make_chain(3);
        t.add_repeat_unit(RepeatUnitRecord::new(vec![1, 8]));
        assert!(matches!(
            Molecule::from_topology(&t),
            Err(TopologyError::InvalidRepeatUnit { index: 0, .. })
        ));

        let mut t = make_chain(3);
        let mut unit = RepeatUnitRecord::new(vec![1]);
        unit.bracket_lines = vec![[Point::origin(), Point::new(0.0, 1.0)]];
        t.add_repeat_unit(unit);
        assert!(Molecule::from_topology(&t).is_err());
    }

    #[test]
    fn isolated_repeat_unit_is_skipped() {
        let mut t = make_chain(2);
        t.add_atom(Element::O, [5.0, 5.0]);
        t.add_repeat_unit(RepeatUnitRecord::new(vec![2]));
        let mol = Molecule::from_topology(&t).unwrap();
        assert!(mol.brackets().is_empty());
        assert_eq!(mol.diagnostics()[0].entity, Entity::RepeatUnit(0));
    }
}
