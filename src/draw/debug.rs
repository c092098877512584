//! Debug overlay: direction and perpendicular arrows on every bond,
//! bisector arrows on every atom, and a marker at the origin.

use super::config::DebugStyle;
use super::primitive::Primitive;
use crate::model::molecule::Molecule;
use crate::model::types::{Point, Vector};

/// Shaft plus two head strokes from `from` along `v`.
fn arrow(from: Point, v: Vector, length: f64, color: &str, width: f64) -> Option<Primitive> {
    if v == Vector::zeros() {
        return None;
    }
    let tip = from + v * length;
    let head = length * 0.25;
    let back = -v * head;
    let side = Vector::new(-v.y, v.x) * head * 0.5;
    Some(Primitive::segments(
        &[
            [from, tip],
            [tip, tip + back + side],
            [tip, tip + back - side],
        ],
        color,
        width,
    ))
}

pub fn draw_debug(mol: &Molecule, style: &DebugStyle, scale: f64) -> Vec<Primitive> {
    if !style.show {
        return Vec::new();
    }
    let width = style.width / scale;
    let mut out = vec![Primitive::Marker {
        center: Point::origin(),
        size: 5.0 / scale,
        color: style.bond_color.clone(),
    }];
    for bond in mol.bonds() {
        let frame = mol.bond_frame(bond.index());
        out.extend(arrow(
            frame.midpoint,
            frame.direction,
            style.arrow_length,
            &style.bond_color,
            width,
        ));
        out.extend(arrow(
            frame.midpoint,
            frame.perpendicular,
            style.arrow_length,
            &style.perpendicular_color,
            width,
        ));
    }
    for atom in mol.atoms() {
        out.extend(arrow(
            mol.position(atom.index()),
            mol.bisector(atom.index()),
            style.arrow_length,
            &style.bisector_color,
            width,
        ));
    }
    out
}
