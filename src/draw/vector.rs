//! 2D vector math shared by every geometry resolver.
//!
//! All functions are total: degenerate input (zero vectors, coincident
//! points, empty slices) yields a zero vector, the input unchanged, or
//! `None` rather than a panic or a NaN.

use crate::model::types::{Point, Vector};
use nalgebra::Rotation2;

/// Unit vector along `v`, or the zero vector when `v` is zero.
pub fn normalize(v: Vector) -> Vector {
    v.try_normalize(0.0).unwrap_or_else(Vector::zeros)
}

/// `v` rotated by +90°: `(-y, x)`.
#[inline]
pub fn perpendicular(v: Vector) -> Vector {
    Vector::new(-v.y, v.x)
}

/// Signed angle from `a` to `b`, computed as `atan2(cross, dot)`.
///
/// Independent of the magnitudes of `a` and `b`.
pub fn signed_angle(a: Vector, b: Vector) -> f64 {
    let dot = a.x * b.x + a.y * b.y;
    let cross = a.x * b.y - a.y * b.x;
    cross.atan2(dot)
}

/// Rotation that maps the direction of `from` onto the direction of `to`.
pub fn rotation_matrix(from: Vector, to: Vector) -> Rotation2<f64> {
    Rotation2::new(signed_angle(from, to))
}

/// Scales the segment `p0`-`p1` about its midpoint to `fraction` of its
/// length.
///
/// `fraction == 1` or `fraction < 0` returns the segment unchanged. Values
/// below one pull both ends toward each other, values above one push them
/// apart. The cut is measured along the segment itself, so steep and
/// axis-aligned segments behave like any other.
pub fn shorten_line(p0: Point, p1: Point, fraction: f64) -> [Point; 2] {
    if fraction == 1.0 || fraction < 0.0 {
        return [p0, p1];
    }

    let cut = (p1 - p0) * ((1.0 - fraction) / 2.0);
    // Same shift at both ends keeps the midpoint fixed.
    [p0 + cut, p1 - cut]
}

/// `count` evenly spaced points from `p0` to `p1`, both ends included.
pub fn points_along_line(p0: Point, p1: Point, count: usize) -> Vec<Point> {
    match count {
        0 => Vec::new(),
        1 => vec![p0],
        _ => {
            let step = (p1 - p0) / (count - 1) as f64;
            (0..count).map(|i| p0 + step * i as f64).collect()
        }
    }
}

/// The two points `center ± normal * distance`.
#[inline]
pub fn offset_pair(center: Point, normal: Vector, distance: f64) -> [Point; 2] {
    [center + normal * distance, center - normal * distance]
}

/// The segment `p0`-`p1` translated by `normal * distance`.
#[inline]
pub fn offset_segment(segment: [Point; 2], normal: Vector, distance: f64) -> [Point; 2] {
    let shift = normal * distance;
    [segment[0] + shift, segment[1] + shift]
}

/// `p` moved `distance` along the direction of `v`; `p` itself when `v` is zero.
#[inline]
pub fn offset_point(p: Point, v: Vector, distance: f64) -> Point {
    p + normalize(v) * distance
}

/// Linearly maps `value` from `from` onto `to`.
///
/// A zero-width source range maps to the middle of `to`.
pub fn map_range(value: f64, from: [f64; 2], to: [f64; 2]) -> f64 {
    let span = from[1] - from[0];
    if span == 0.0 {
        return (to[0] + to[1]) / 2.0;
    }
    to[0] + (value - from[0]) / span * (to[1] - to[0])
}

/// Arithmetic mean of `points`.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector::zeros(), |acc, p| acc + p.coords);
    Some(Point::from(sum / points.len() as f64))
}

/// Axis-aligned bounding box of `points` as `(min, max)`.
pub fn bounds(points: impl IntoIterator<Item = Point>) -> Option<(Point, Point)> {
    points.into_iter().fold(None, |acc, p| match acc {
        None => Some((p, p)),
        Some((lo, hi)) => Some((
            Point::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point::new(hi.x.max(p.x), hi.y.max(p.y)),
        )),
    })
}

fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Whether two closed segments cross at a point interior to both.
///
/// Touching at an endpoint or overlapping collinearly does not count.
pub fn segments_cross(a: [Point; 2], b: [Point; 2]) -> bool {
    let d1 = orientation(b[0], b[1], a[0]);
    let d2 = orientation(b[0], b[1], a[1]);
    let d3 = orientation(a[0], a[1], b[0]);
    let d4 = orientation(a[0], a[1], b[1]);
    d1 * d2 < 0.0 && d3 * d4 < 0.0
}

/// Whether the closed polygon through `points` has no crossing edges.
pub fn is_simple_polygon(points: &[Point]) -> bool {
    let n = points.len();
    if n < 4 {
        return true;
    }
    let edge = |i: usize| [points[i], points[(i + 1) % n]];
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_cross(edge(i), edge(j)) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn approx_point(a: Point, b: Point, eps: f64) -> bool {
        approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
    }

    fn sample_segments() -> Vec<[Point; 2]> {
        vec![
            [Point::new(0.0, 0.0), Point::new(1.5, 0.0)],
            [Point::new(2.0, 1.0), Point::new(-1.0, 1.0)],
            [Point::new(0.3, -2.0), Point::new(0.3, 4.0)],
            [Point::new(0.3, 4.0), Point::new(0.3, -2.0)],
            [Point::new(-1.0, -1.0), Point::new(2.0, 3.0)],
            [Point::new(2.0, 3.0), Point::new(-1.0, -1.0)],
            [Point::new(0.866, 0.5), Point::new(-0.2, 1.7)],
            [Point::new(5.0, -4.0), Point::new(4.9, 2.0)],
            [Point::new(3.0, -2.0), Point::new(3.0 + 1e-4, -0.5)],
            [Point::new(3.0, -2.0), Point::new(3.0 + 1e-9, -0.5)],
            [Point::new(0.866, -0.5), Point::new(0.866 + 3e-16, 0.5)],
            [Point::new(300.0, -200.0), Point::new(300.0001, -50.0)],
            [Point::new(-4.0, 1.0), Point::new(2.0, 1.0 + 1e-12)],
        ]
    }

    #[test]
    fn normalize_returns_unit_or_zero() {
        for v in [
            Vector::new(3.0, 4.0),
            Vector::new(-0.001, 0.0),
            Vector::new(1e-12, -1e-12),
            Vector::new(-7.0, 24.0),
        ] {
            assert!(approx_eq(normalize(v).norm(), 1.0, 1e-12));
        }
        assert_eq!(normalize(Vector::zeros()), Vector::zeros());
    }

    #[test]
    fn perpendicular_is_ccw_and_orthogonal() {
        let v = Vector::new(1.0, 0.0);
        assert_eq!(perpendicular(v), Vector::new(0.0, 1.0));
        let w = Vector::new(0.6, -0.8);
        assert!(approx_eq(perpendicular(w).dot(&w), 0.0, 1e-15));
    }

    #[test]
    fn rotation_matrix_maps_from_onto_to() {
        let angles = [0.0, 0.3, PI / 2.0, 2.0, PI, -2.5, -PI / 4.0];
        for &a in &angles {
            for &b in &angles {
                let from = Vector::new(a.cos(), a.sin());
                let to = Vector::new(b.cos(), b.sin());
                let mapped = rotation_matrix(from, to) * from;
                assert!(approx_eq(mapped.x, to.x, 1e-12), "a={a} b={b}");
                assert!(approx_eq(mapped.y, to.y, 1e-12), "a={a} b={b}");
            }
        }
    }

    #[test]
    fn rotation_matrix_ignores_magnitude() {
        let from = Vector::new(0.0, 1.0);
        let to = Vector::new(-3.0, 0.0);
        let mapped = rotation_matrix(from, to) * from;
        assert!(approx_point(Point::from(mapped), Point::new(-1.0, 0.0), 1e-12));
    }

    #[test]
    fn shorten_line_identity_at_one() {
        for [p0, p1] in sample_segments() {
            assert_eq!(shorten_line(p0, p1, 1.0), [p0, p1]);
            assert_eq!(shorten_line(p0, p1, -0.5), [p0, p1]);
        }
    }

    #[test]
    fn shorten_line_preserves_midpoint_and_scales_length() {
        for [p0, p1] in sample_segments() {
            let mid = nalgebra::center(&p0, &p1);
            let length = (p1 - p0).norm();
            for f in [0.1, 0.5, 0.7, 0.95, 1.1, 1.5] {
                let [q0, q1] = shorten_line(p0, p1, f);
                assert!(approx_point(nalgebra::center(&q0, &q1), mid, 1e-9), "f={f}");
                assert!(approx_eq((q1 - q0).norm(), f * length, 1e-9), "f={f}");
                // Orientation is kept: q0 stays on p0's side.
                assert!((q1 - q0).dot(&(p1 - p0)) > 0.0);
            }
        }
    }

    #[test]
    fn shorten_line_handles_hexagon_vertical_edge() {
        // Pointy-top hexagon: the edge between 330° and 30° is vertical up to rounding.
        let a = (330.0f64).to_radians();
        let b = (30.0f64).to_radians();
        let p0 = Point::new(a.cos(), a.sin());
        let p1 = Point::new(b.cos(), b.sin());

        let [q0, q1] = shorten_line(p0, p1, 0.7);
        assert!(approx_eq((q1 - q0).norm(), 0.7, 1e-12));
        assert!(approx_eq(q0.y, -0.35, 1e-12));
        assert!(approx_eq(q1.y, 0.35, 1e-12));

        let [q0, q1] = shorten_line(Point::new(3.0, -2.0), Point::new(3.0 + 1e-9, -0.5), 0.5);
        assert!(approx_point(q0, Point::new(3.0, -1.625), 1e-9));
        assert!(approx_point(q1, Point::new(3.0, -0.875), 1e-9));
    }

    #[test]
    fn shorten_line_to_zero_collapses_on_midpoint() {
        let p0 = Point::new(-1.0, -1.0);
        let p1 = Point::new(2.0, 3.0);
        let [q0, q1] = shorten_line(p0, p1, 0.0);
        assert!(approx_point(q0, Point::new(0.5, 1.0), 1e-9));
        assert!(approx_point(q1, Point::new(0.5, 1.0), 1e-9));
    }

    #[test]
    fn points_along_line_includes_ends() {
        let pts = points_along_line(Point::new(0.0, 0.0), Point::new(4.0, 2.0), 5);
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], Point::new(0.0, 0.0));
        assert!(approx_point(pts[2], Point::new(2.0, 1.0), 1e-12));
        assert!(approx_point(pts[4], Point::new(4.0, 2.0), 1e-12));
        assert!(points_along_line(Point::origin(), Point::origin(), 0).is_empty());
    }

    #[test]
    fn map_range_handles_flat_axis() {
        assert!(approx_eq(map_range(2.0, [0.0, 4.0], [-1.0, 1.0]), 0.0, 1e-12));
        assert!(approx_eq(map_range(4.0, [0.0, 4.0], [-1.0, 1.0]), 1.0, 1e-12));
        assert_eq!(map_range(3.0, [3.0, 3.0], [-1.0, 1.0]), 0.0);
    }

    #[test]
    fn centroid_and_bounds() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        assert_eq!(centroid(&pts), Some(Point::new(1.0, 2.0)));
        assert_eq!(centroid(&[]), None);
        assert_eq!(
            bounds(pts.iter().copied()),
            Some((Point::new(0.0, 0.0), Point::new(2.0, 4.0)))
        );
    }

    #[test]
    fn simple_polygon_detects_bow_tie() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let bow_tie = [square[0], square[2], square[1], square[3]];
        assert!(is_simple_polygon(&square));
        assert!(!is_simple_polygon(&bow_tie));
    }
}
