//! Bond geometry: alignment decisions and the segments that draw each bond.
//!
//! The alignment decision looks at ring membership first and falls back to
//! a connectivity table over the two endpoints. Segment generation is pure
//! arithmetic on the bond frame; it never consults the viewport except for
//! stroke widths.

use super::config::{AtomStyle, BondStyle};
use super::label;
use super::primitive::Primitive;
use super::vector;
use crate::model::diagnostic::{Diagnostic, Entity};
use crate::model::molecule::Molecule;
use crate::model::style::resolve;
use crate::model::types::{Alignment, BondOrder, BondStereo, Point, Vector};

/// Which reference a connectivity pair uses to place a double bond's offset line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Center,
    FirstBisector,
    SecondBisector,
}

/// Endpoint connectivities `(a0, a1)` mapped to the alignment rule.
///
/// `(4, 3)` and `(3, 4)` are deliberately not mirror images of each other.
const CONNECTIVITY_RULES: [((u32, u32), Rule); 9] = [
    ((2, 2), Rule::Center),
    ((3, 2), Rule::FirstBisector),
    ((2, 3), Rule::SecondBisector),
    ((3, 3), Rule::SecondBisector),
    ((4, 2), Rule::Center),
    ((2, 4), Rule::Center),
    ((4, 4), Rule::Center),
    ((4, 3), Rule::SecondBisector),
    ((3, 4), Rule::FirstBisector),
];

fn connectivity_rule(a0: u32, a1: u32) -> Option<Rule> {
    CONNECTIVITY_RULES
        .iter()
        .find(|(pair, _)| *pair == (a0, a1))
        .map(|&(_, rule)| rule)
}

/// Same side as `perpendicular` when `reference` does not point away from it.
pub fn alignment_decision(reference: Vector, perpendicular: Vector) -> Alignment {
    if reference.dot(&perpendicular) >= 0.0 {
        Alignment::SameSide
    } else {
        Alignment::OppositeSide
    }
}

/// Computes the alignment of bond `index` from the current positions.
///
/// Ignores any manual override; [`Molecule::alignment`] applies that and
/// memoizes the result of this function.
pub fn decide_alignment(mol: &Molecule, index: usize) -> Alignment {
    let bond = &mol.bonds()[index];
    if bond.order() != BondOrder::Double {
        return Alignment::Center;
    }
    let frame = mol.bond_frame(index);

    let ring = bond
        .rings()
        .iter()
        .copied()
        .find(|&r| mol.rings()[r].is_aromatic())
        .or_else(|| bond.rings().first().copied());
    if let Some(ring) = ring {
        let toward_ring = mol.ring_centroid(ring) - frame.midpoint;
        return alignment_decision(toward_ring, frame.perpendicular);
    }

    let [a0, a1] = bond.atoms();
    let (c0, c1) = (mol.connectivity(a0), mol.connectivity(a1));
    match connectivity_rule(c0, c1) {
        Some(Rule::Center) => Alignment::Center,
        Some(Rule::FirstBisector) => alignment_decision(mol.bisector(a0), frame.perpendicular),
        Some(Rule::SecondBisector) => alignment_decision(mol.bisector(a1), frame.perpendicular),
        None => {
            log::debug!(
                "bond {index}: no alignment rule for connectivity ({c0}, {c1}); using center"
            );
            Alignment::Center
        }
    }
}

/// Drawable geometry of one bond, in molecule coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum BondShape {
    /// Independent stroked segments.
    Lines(Vec<[Point; 2]>),
    /// Filled triangle: apex at the first atom, base across the second.
    Wedge([Point; 3]),
    /// Dashes across the bond, widening toward the second atom.
    Hash(Vec<[Point; 2]>),
}

impl BondShape {
    pub fn segment_count(&self) -> usize {
        match self {
            BondShape::Lines(segments) | BondShape::Hash(segments) => segments.len(),
            BondShape::Wedge(_) => 0,
        }
    }
}

/// Bond endpoints, pulled back from every atom whose label is drawn.
///
/// The pull-back is skipped when it would make the ends cross.
pub fn bond_endpoints(mol: &Molecule, index: usize, atoms: &AtomStyle, clearance: f64) -> [Point; 2] {
    let frame = mol.bond_frame(index);
    let [a0, a1] = mol.bonds()[index].atoms();
    let trim = |atom: usize| {
        if label::label_visible(mol, atom, atoms) {
            clearance
        } else {
            0.0
        }
    };
    let (t0, t1) = (trim(a0), trim(a1));
    if t0 + t1 >= frame.length {
        return [frame.start, frame.end];
    }
    [
        frame.start + frame.direction * t0,
        frame.end - frame.direction * t1,
    ]
}

/// Resolves the segments of bond `index` between `endpoints`.
pub fn resolve_shape(mol: &Molecule, index: usize, style: &BondStyle, endpoints: [Point; 2]) -> BondShape {
    let bond = &mol.bonds()[index];
    let frame = mol.bond_frame(index);
    let perp = frame.perpendicular;
    let [p0, p1] = endpoints;

    match bond.order() {
        BondOrder::Single => match bond.stereo() {
            BondStereo::None => BondShape::Lines(vec![endpoints]),
            BondStereo::Up => {
                let half = style.stereo_width_fraction * frame.length;
                let [left, right] = vector::offset_pair(p1, perp, half);
                BondShape::Wedge([p0, left, right])
            }
            BondStereo::Down => {
                let half = style.stereo_width_fraction * frame.length;
                let n = style.stereo_dashes;
                let samples = vector::points_along_line(p0, p1, n + 2);
                let dashes = samples
                    .iter()
                    .skip(1)
                    .take(n)
                    .enumerate()
                    .map(|(i, &p)| vector::offset_pair(p, perp, (i + 1) as f64 / n as f64 * half))
                    .collect();
                BondShape::Hash(dashes)
            }
        },
        BondOrder::Double => {
            let gap = style.double_offset;
            match mol.alignment(index) {
                Alignment::Center => {
                    let left = vector::offset_segment(endpoints, perp, gap / 2.0);
                    let right = vector::offset_segment(endpoints, perp, -gap / 2.0);
                    BondShape::Lines(vec![
                        vector::shorten_line(left[0], left[1], style.double_center_length),
                        vector::shorten_line(right[0], right[1], style.double_center_length),
                    ])
                }
                side => {
                    let sign = if side == Alignment::SameSide { 1.0 } else { -1.0 };
                    let off = vector::offset_segment(endpoints, perp, sign * gap);
                    BondShape::Lines(vec![
                        endpoints,
                        vector::shorten_line(off[0], off[1], style.double_offset_length),
                    ])
                }
            }
        }
        BondOrder::Triple => {
            let terminal = terminal_end(mol, index);
            let left = vector::offset_segment(endpoints, perp, style.triple_offset);
            let right = vector::offset_segment(endpoints, perp, -style.triple_offset);
            BondShape::Lines(vec![
                endpoints,
                trim_terminal_end(left, frame.direction, terminal, style.triple_length),
                trim_terminal_end(right, frame.direction, terminal, style.triple_length),
            ])
        }
    }
}

/// Endpoint slot (0 or 1) treated as the terminal end of a triple bond.
fn terminal_end(mol: &Molecule, index: usize) -> usize {
    let [a0, a1] = mol.bonds()[index].atoms();
    match (mol.degree(a0) == 1, mol.degree(a1) == 1) {
        (true, false) => 0,
        _ => 1,
    }
}

fn trim_terminal_end(segment: [Point; 2], direction: Vector, terminal: usize, fraction: f64) -> [Point; 2] {
    let trimmed = vector::shorten_line(segment[0], segment[1], fraction);
    let mid = nalgebra::center(&segment[0], &segment[1]);
    let along = |p: &Point| (p - mid).dot(&direction);
    let pick = if terminal == 1 {
        trimmed.iter().max_by(|a, b| along(a).total_cmp(&along(b)))
    } else {
        trimmed.iter().min_by(|a, b| along(a).total_cmp(&along(b)))
    };
    let Some(&end) = pick else {
        return segment;
    };
    let mut out = segment;
    out[terminal] = end;
    out
}

/// Emits the bond layer.
pub fn draw_bonds(
    mol: &Molecule,
    style: &BondStyle,
    atoms: &AtomStyle,
    scale: f64,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Primitive> {
    if !style.show {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(mol.bond_count() * 2);
    for bond in mol.bonds() {
        let index = bond.index();
        if mol.bond_frame(index).length == 0.0 {
            diagnostics.push(Diagnostic::warn(
                Entity::Bond(index),
                "zero-length bond; offsets and stereo collapse to a point",
            ));
        }
        let color = resolve(bond.style.color.as_deref(), style.color.as_str());
        let width = resolve(bond.style.width, style.width) / scale;
        let endpoints = bond_endpoints(mol, index, atoms, style.label_clearance);

        match resolve_shape(mol, index, style, endpoints) {
            BondShape::Lines(segments) => {
                out.extend(segments.into_iter().map(|s| Primitive::line(s, color, width)));
            }
            BondShape::Wedge(points) => out.push(Primitive::Polygon {
                points: points.to_vec(),
                fill: color.to_string(),
            }),
            BondShape::Hash(dashes) => {
                out.push(Primitive::segments(&dashes, color, style.stereo_dash_width / scale));
            }
        }
    }
    out
}
