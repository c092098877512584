//! Renderer-facing output of a drawing pass.
//!
//! Primitives carry no styling logic of their own: colours, widths and
//! fonts are already resolved and size-dependent values are already divided
//! by the viewport scale.

use super::viewport::Viewport;
use crate::model::diagnostic::Diagnostic;
use crate::model::style::Font;
use crate::model::types::Point;
use serde::{Serialize, Serializer};

/// A vertex of a [`Primitive::Polyline`]. `Break` lifts the pen; it
/// serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathVertex {
    Point(Point),
    Break,
}

impl Serialize for PathVertex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathVertex::Point(p) => [p.x, p.y].serialize(serializer),
            PathVertex::Break => serializer.serialize_none(),
        }
    }
}

/// Horizontal anchoring of a text primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Open stroked path.
    Polyline {
        #[serde(serialize_with = "serialize_path")]
        points: Vec<PathVertex>,
        color: String,
        width: f64,
    },
    /// Closed filled shape.
    Polygon {
        #[serde(serialize_with = "serialize_points")]
        points: Vec<Point>,
        fill: String,
    },
    /// Filled disc of `size` render units.
    Marker {
        #[serde(serialize_with = "serialize_point")]
        center: Point,
        size: f64,
        color: String,
    },
    Text {
        #[serde(serialize_with = "serialize_point")]
        position: Point,
        text: String,
        font: Font,
        anchor: TextAnchor,
    },
}

impl Primitive {
    /// A stroked path through `points` without breaks.
    pub fn line(points: impl IntoIterator<Item = Point>, color: &str, width: f64) -> Self {
        Primitive::Polyline {
            points: points.into_iter().map(PathVertex::Point).collect(),
            color: color.to_string(),
            width,
        }
    }

    /// A stroked path made of disjoint segments joined by break sentinels.
    pub fn segments(segments: &[[Point; 2]], color: &str, width: f64) -> Self {
        let mut points = Vec::with_capacity(segments.len() * 3);
        for (i, [a, b]) in segments.iter().enumerate() {
            if i > 0 {
                points.push(PathVertex::Break);
            }
            points.push(PathVertex::Point(*a));
            points.push(PathVertex::Point(*b));
        }
        Primitive::Polyline {
            points,
            color: color.to_string(),
            width,
        }
    }

    pub fn text(position: Point, text: impl Into<String>, font: Font, anchor: TextAnchor) -> Self {
        Primitive::Text {
            position,
            text: text.into(),
            font,
            anchor,
        }
    }

    /// Number of drawable segments in a polyline; zero for other kinds.
    pub fn segment_count(&self) -> usize {
        match self {
            Primitive::Polyline { points, .. } => points
                .split(|v| *v == PathVertex::Break)
                .map(|run| run.len().saturating_sub(1))
                .sum(),
            _ => 0,
        }
    }
}

/// Result of a drawing pass.
#[derive(Debug, Clone, Serialize)]
pub struct Drawing {
    pub viewport: Viewport,
    pub primitives: Vec<Primitive>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Drawing {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

fn serialize_point<S: Serializer>(p: &Point, serializer: S) -> Result<S::Ok, S::Error> {
    [p.x, p.y].serialize(serializer)
}

fn serialize_points<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(points.iter().map(|p| [p.x, p.y]))
}

fn serialize_path<S: Serializer>(
    points: &[PathVertex],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_joined_by_breaks() {
        let segs = [
            [Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            [Point::new(0.0, 1.0), Point::new(1.0, 1.0)],
        ];
        let prim = Primitive::segments(&segs, "black", 2.0);
        let Primitive::Polyline { points, .. } = &prim else {
            panic!("expected polyline");
        };
        assert_eq!(points.len(), 5);
        assert_eq!(points[2], PathVertex::Break);
        assert_eq!(prim.segment_count(), 2);
    }

    #[test]
    fn polyline_serializes_breaks_as_null() {
        let prim = Primitive::segments(
            &[
                [Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
                [Point::new(2.0, 0.0), Point::new(3.0, 0.5)],
            ],
            "black",
            1.0,
        );
        let json = serde_json::to_value(&prim).unwrap();
        assert_eq!(json["kind"], "polyline");
        assert!(json["points"][2].is_null());
        assert_eq!(json["points"][4], serde_json::json!([3.0, 0.5]));
    }

    #[test]
    fn text_serializes_with_kind_tag() {
        let prim = Primitive::text(
            Point::new(1.0, 2.0),
            "OH",
            Font::default(),
            TextAnchor::Center,
        );
        let json = serde_json::to_value(&prim).unwrap();
        assert_eq!(json["kind"], "text");
        assert_eq!(json["position"], serde_json::json!([1.0, 2.0]));
        assert_eq!(json["anchor"], "center");
    }
}
