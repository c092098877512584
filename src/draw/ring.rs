//! Ring highlight polygons.
//!
//! Ring members arrive in detection order, which is not necessarily a
//! walk around the ring. The polygon is rebuilt by sorting the members by
//! angle in a per-axis normalized frame.

use super::config::RingHighlightStyle;
use super::primitive::Primitive;
use super::vector;
use crate::model::diagnostic::{Diagnostic, Entity};
use crate::model::molecule::Molecule;
use crate::model::style::resolve;
use crate::model::types::Point;

/// Orders `points` by `atan2(y, x)` after mapping each axis onto [-1, 1].
///
/// The sort is stable, so coincident angles keep their input order. An
/// axis with zero extent maps every point to 0 on that axis.
pub fn sort_ring_points(points: &[Point]) -> Vec<Point> {
    let Some((lo, hi)) = vector::bounds(points.iter().copied()) else {
        return Vec::new();
    };
    let mut keyed: Vec<(f64, Point)> = points
        .iter()
        .map(|p| {
            let x = vector::map_range(p.x, [lo.x, hi.x], [-1.0, 1.0]);
            let y = vector::map_range(p.y, [lo.y, hi.y], [-1.0, 1.0]);
            (y.atan2(x), *p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// Scales each point's offset from `center` by `ratio`.
pub fn inset(points: &mut [Point], center: Point, ratio: f64) {
    if ratio == 1.0 {
        return;
    }
    for p in points {
        *p = center + (*p - center) * ratio;
    }
}

/// Angularly ordered highlight polygon of ring `index`, or `None` for a ring
/// that cannot be drawn.
pub fn ring_polygon(mol: &Molecule, index: usize, ratio: f64) -> Option<Vec<Point>> {
    let ring = &mol.rings()[index];
    if !ring.is_drawable() {
        return None;
    }
    let members: Vec<Point> = ring.atoms().iter().map(|&a| mol.position(a)).collect();
    let mut polygon = sort_ring_points(&members);
    inset(&mut polygon, mol.ring_centroid(index), ratio);
    Some(polygon)
}

/// Emits filled polygons for every highlighted ring.
pub fn draw_ring_highlights(
    mol: &Molecule,
    style: &RingHighlightStyle,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Primitive> {
    if !style.show {
        return Vec::new();
    }
    let mut out = Vec::new();
    for ring in mol.rings() {
        if !resolve(ring.style.highlight, false) {
            continue;
        }
        let ratio = resolve(ring.style.inset, style.inset);
        let Some(points) = ring_polygon(mol, ring.index(), ratio) else {
            diagnostics.push(Diagnostic::warn(
                Entity::Ring(ring.index()),
                "highlighted ring has fewer than 3 atoms; polygon skipped",
            ));
            continue;
        };
        if !vector::is_simple_polygon(&points) {
            diagnostics.push(Diagnostic::warn(
                Entity::Ring(ring.index()),
                "ring highlight polygon self-intersects after angular sort",
            ));
        }
        let fill = resolve(ring.style.highlight_color.clone(), style.color.clone());
        out.push(Primitive::Polygon { points, fill });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::config::DrawConfig;
    use crate::model::topology::Topology;
    use crate::model::types::{BondOrder, Element};

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn regular(n: usize, radius: f64, center: Point, rotation: f64) -> Vec<Point> {
        (0..n)
            .map(|k| {
                let a = rotation + std::f64::consts::TAU * k as f64 / n as f64;
                center + crate::model::types::Vector::new(a.cos(), a.sin()) * radius
            })
            .collect()
    }

    fn shuffled(points: &[Point]) -> Vec<Point> {
        let order = [3, 0, 5, 1, 4, 2, 6, 7];
        order
            .iter()
            .filter(|&&i| i < points.len())
            .map(|&i| points[i])
            .collect()
    }

    #[test]
    fn sorted_rings_are_simple_polygons() {
        for n in 3..=8 {
            for &(radius, rotation) in &[(1.0, 0.0), (2.5, 0.4), (0.7, -1.3)] {
                let center = Point::new(3.0, -2.0);
                let raw = shuffled(&regular(n, radius, center, rotation));
                let sorted = sort_ring_points(&raw);
                assert_eq!(sorted.len(), raw.len());
                assert!(is_simple(&sorted), "n={n} r={radius} rot={rotation}");
            }
        }
    }

    fn is_simple(points: &[Point]) -> bool {
        vector::is_simple_polygon(points)
    }

    #[test]
    fn raw_detection_order_can_self_intersect() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        assert!(!is_simple(&square));
        assert!(is_simple(&sort_ring_points(&square)));
    }

    #[test]
    fn flat_axis_does_not_produce_nan() {
        let line = [Point::new(0.0, 1.0), Point::new(2.0, 1.0), Point::new(1.0, 1.0)];
        let sorted = sort_ring_points(&line);
        assert_eq!(sorted.len(), 3);
        assert!(sorted.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn inset_scales_about_center() {
        let mut pts = vec![Point::new(2.0, 0.0), Point::new(0.0, 2.0)];
        inset(&mut pts, Point::origin(), 0.5);
        assert_eq!(pts, vec![Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);
    }

    #[test]
    fn highlighted_ring_emits_polygon() {
        let mut t = Topology::new();
        for p in regular(6, 1.0, Point::origin(), 0.0) {
            t.add_atom(Element::C, [p.x, p.y]);
        }
        for k in 0..6 {
            t.add_bond(k, (k + 1) % 6, BondOrder::Single);
        }
        t.add_ring(vec![0, 3, 1, 4, 2, 5], false);
        let mut mol = Molecule::from_topology(&t).unwrap();
        mol.ring_mut(0).unwrap().style.highlight = Some(true);
        mol.ring_mut(0).unwrap().style.inset = Some(0.8);

        let mut diagnostics = Vec::new();
        let style = DrawConfig::default().ring_highlights;
        let prims = draw_ring_highlights(&mol, &style, &mut diagnostics);
        assert!(diagnostics.is_empty());
        let [Primitive::Polygon { points, fill }] = prims.as_slice() else {
            panic!("one polygon expected");
        };
        assert_eq!(fill, &style.color);
        assert!(is_simple(points));
        assert!(points.iter().all(|p| approx_eq(p.coords.norm(), 0.8, 1e-9)));
    }

    #[test]
    fn undersized_highlighted_ring_is_skipped() {
        let mut t = Topology::new();
        t.add_atom(Element::C, [0.0, 0.0]);
        t.add_atom(Element::C, [1.0, 0.0]);
        t.add_ring(vec![0, 1], false);
        let mut mol = Molecule::from_topology(&t).unwrap();
        mol.ring_mut(0).unwrap().style.highlight = Some(true);
        let mut diagnostics = Vec::new();
        let prims =
            draw_ring_highlights(&mol, &DrawConfig::default().ring_highlights, &mut diagnostics);
        assert!(prims.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }
}
