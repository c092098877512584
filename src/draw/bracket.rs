//! Repeat-unit bracket geometry: cross-bond pairing, placement, the curve
//! and its label anchors.

use super::config::BracketStyle;
use super::primitive::{Primitive, TextAnchor};
use super::vector;
use crate::model::bracket::{Bracket, BracketPlacement};
use crate::model::diagnostic::{Diagnostic, Entity};
use crate::model::molecule::Molecule;
use crate::model::style::resolve;
use crate::model::types::{Point, Vector};

/// Picks the crossing bond of each bracket in a pair.
///
/// `candidates` are `(bond index, bond midpoint)`. With anchors, the two
/// distinct bonds minimizing the summed anchor-to-midpoint distance win.
/// Without anchors, the two midpoints farthest apart are used. A single
/// candidate is shared by both brackets.
pub fn assign_cross_bonds(
    anchors: Option<[Point; 2]>,
    candidates: &[(usize, Point)],
) -> [Option<usize>; 2] {
    match candidates {
        [] => [None, None],
        [(only, _)] => [Some(*only), Some(*only)],
        _ => {
            let pairs = (0..candidates.len()).flat_map(|i| {
                (0..candidates.len())
                    .filter(move |&j| j != i)
                    .map(move |j| (i, j))
            });
            let cost = |&(i, j): &(usize, usize)| match anchors {
                Some([a0, a1]) => {
                    (candidates[i].1 - a0).norm() + (candidates[j].1 - a1).norm()
                }
                None => -(candidates[i].1 - candidates[j].1).norm(),
            };
            let best = pairs.min_by(|a, b| cost(a).total_cmp(&cost(b)));
            match best {
                Some((i, j)) => [Some(candidates[i].0), Some(candidates[j].0)],
                None => [None, None],
            }
        }
    }
}

/// Anchor point and outward direction of `bracket`.
///
/// An explicit bracket line wins: its midpoint is the anchor and its normal,
/// turned away from the unit's atom centroid, is the direction. Otherwise
/// the bracket sits on its cross bond's midpoint, pointing from the member
/// atom to the outside atom.
pub fn placement(mol: &Molecule, bracket: &Bracket) -> BracketPlacement {
    let centroid = mol.atoms_centroid(bracket.atoms());

    if let Some([a, b]) = bracket.line() {
        let anchor = nalgebra::center(&a, &b);
        let normal = vector::perpendicular(vector::normalize(b - a));
        let direction = if normal.dot(&(anchor - centroid)) < 0.0 {
            -normal
        } else {
            normal
        };
        return BracketPlacement { anchor, direction };
    }

    match bracket.cross_bond() {
        Some(bond) => {
            let frame = mol.bond_frame(bond);
            let [a0, a1] = mol.bonds()[bond].atoms();
            let (inner, outer) = if bracket.atoms().contains(&a0) {
                (a0, a1)
            } else {
                (a1, a0)
            };
            BracketPlacement {
                anchor: frame.midpoint,
                direction: vector::normalize(mol.position(outer) - mol.position(inner)),
            }
        }
        None => BracketPlacement {
            anchor: centroid,
            direction: Vector::zeros(),
        },
    }
}

/// Samples the parabola `y = prefactor * x²` over `[-size, size]`, turns
/// its axis onto the placement direction and moves it `offset` past the
/// anchor.
pub fn bracket_curve(
    placement: &BracketPlacement,
    prefactor: f64,
    points: usize,
    size: f64,
    offset: f64,
) -> Vec<Point> {
    let rotation = vector::rotation_matrix(Vector::new(0.0, 1.0), placement.direction);
    let origin = placement.anchor + placement.direction * offset;
    vector::points_along_line(Point::new(-size, 0.0), Point::new(size, 0.0), points)
        .into_iter()
        .map(|p| origin + rotation * Vector::new(p.x, prefactor * p.x * p.x))
        .collect()
}

/// Subscript and superscript anchors: `[sub, super]`.
pub fn script_positions(
    placement: &BracketPlacement,
    size: f64,
    sub_offset: f64,
    super_offset: f64,
) -> [Point; 2] {
    let perp = vector::perpendicular(placement.direction);
    [
        placement.anchor + perp * size - placement.direction * sub_offset,
        placement.anchor - perp * size - placement.direction * super_offset,
    ]
}

/// Emits every bracket curve. Labels go on the second bracket of each pair.
pub fn draw_brackets(
    mol: &Molecule,
    style: &BracketStyle,
    scale: f64,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Primitive> {
    if !style.show {
        return Vec::new();
    }
    let mut out = Vec::new();
    for bracket in mol.brackets() {
        let index = bracket.index();
        let placement = mol.bracket_placement(index);
        if placement.direction == Vector::zeros() {
            diagnostics.push(Diagnostic::warn(
                Entity::Bracket(index),
                "bracket has no usable direction; curve skipped",
            ));
            continue;
        }

        let size = resolve(bracket.style.size, style.size / scale);
        let curve = bracket_curve(&placement, style.prefactor, style.points, size, style.offset / scale);
        let color = resolve(bracket.style.color.as_deref(), style.color.as_str());
        let width = resolve(bracket.style.width, style.width) / scale;
        out.push(Primitive::line(curve, color, width));

        if index < bracket.partner() {
            continue;
        }
        let [sub_at, super_at] =
            script_positions(&placement, size, style.subscript.offset, style.superscript.offset);
        if let (true, Some(text)) = (style.subscript.show, bracket.subscript()) {
            out.push(Primitive::text(
                sub_at,
                text,
                style.subscript.font.scaled(scale),
                TextAnchor::Center,
            ));
        }
        if let (true, Some(text)) = (style.superscript.show, bracket.superscript()) {
            out.push(Primitive::text(
                super_at,
                text,
                style.superscript.font.scaled(scale),
                TextAnchor::Center,
            ));
        }
    }
    out
}
