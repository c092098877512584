//! Axis ranges and the global scale factor.
//!
//! The default window is ten units across. Molecules that do not fit grow
//! the window symmetrically about the origin, and `scale` records how much
//! larger than the default the window became. Every render-space size is
//! divided by it so strokes and fonts keep their apparent size.

use super::config::LayoutStyle;
use super::vector;
use crate::model::types::Point;
use serde::Serialize;

/// Width of the reference window that corresponds to `scale == 1`.
const REFERENCE_EXTENT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub range_x: [f64; 2],
    pub range_y: [f64; 2],
    pub scale: f64,
    pub width: u32,
    pub height: u32,
}

/// Extra vertical room reserved for a title block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TitleReserve {
    Above(f64),
    Below(f64),
}

impl Viewport {
    pub fn x_extent(&self) -> f64 {
        self.range_x[1] - self.range_x[0]
    }

    pub fn y_extent(&self) -> f64 {
        self.range_y[1] - self.range_y[0]
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.range_x[0]..=self.range_x[1]).contains(&p.x)
            && (self.range_y[0]..=self.range_y[1]).contains(&p.y)
    }

    /// Fits the window around `points`.
    ///
    /// With `auto_scale` off the configured window is used as-is, apart from
    /// the aspect correction.
    pub fn compute(
        points: impl IntoIterator<Item = Point>,
        title: Option<TitleReserve>,
        layout: &LayoutStyle,
    ) -> Self {
        let mut range_x = layout.range_x;
        let mut range_y = layout.range_y;

        if let (true, Some((mut lo, mut hi))) = (layout.auto_scale, vector::bounds(points)) {
            match title {
                Some(TitleReserve::Above(extra)) => hi.y += extra,
                Some(TitleReserve::Below(extra)) => lo.y -= extra,
                None => {}
            }
            let pad = layout.padding;
            let fits = lo.x - pad >= range_x[0]
                && hi.x + pad <= range_x[1]
                && lo.y - pad >= range_y[0]
                && hi.y + pad <= range_y[1];
            if !fits {
                range_x = grow(range_x, lo.x, hi.x, pad);
                range_y = grow(range_y, lo.y, hi.y, pad);
            }
        }

        if layout.fixed_aspect && layout.height > 0 {
            let target = f64::from(layout.width) / f64::from(layout.height);
            let (x_ext, y_ext) = (range_x[1] - range_x[0], range_y[1] - range_y[0]);
            if y_ext > 0.0 && x_ext / y_ext < target {
                range_x = widen(range_x, y_ext * target);
            } else if x_ext > 0.0 {
                range_y = widen(range_y, x_ext / target);
            }
        }

        let extent = (range_x[1] - range_x[0]).max(range_y[1] - range_y[0]);
        let scale = if extent > 0.0 {
            extent / REFERENCE_EXTENT
        } else {
            1.0
        };

        Self {
            range_x,
            range_y,
            scale,
            width: layout.width,
            height: layout.height,
        }
    }
}

/// Symmetric range that covers both the default `range` and `lo..hi` plus
/// `pad`. Never narrower than the default.
fn grow(range: [f64; 2], lo: f64, hi: f64, pad: f64) -> [f64; 2] {
    let default_half = range[0].abs().max(range[1].abs());
    let half = default_half.max(lo.abs().max(hi.abs()) + pad);
    [-half, half]
}

fn widen(range: [f64; 2], extent: f64) -> [f64; 2] {
    let mid = (range[0] + range[1]) / 2.0;
    [mid - extent / 2.0, mid + extent / 2.0]
}
