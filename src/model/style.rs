//! Per-entity style overrides and their resolution against diagram defaults.
//!
//! Every override field is an `Option`: `None` defers to the diagram-wide
//! value from [`DrawConfig`](crate::DrawConfig). Resolution is a single
//! lookup through [`resolve`]; there are no fallback chains.

use serde::{Deserialize, Serialize};

/// Picks the entity's own value when present, otherwise the diagram default.
#[inline]
pub fn resolve<T>(entity: Option<T>, default: T) -> T {
    entity.unwrap_or(default)
}

/// Text styling carried by label primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    #[serde(default = "default_family")]
    pub family: String,
    #[serde(default = "default_font_size")]
    pub size: f64,
    #[serde(default)]
    pub bold: bool,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_family() -> String {
    "Arial".to_string()
}
fn default_font_size() -> f64 {
    20.0
}
fn default_color() -> String {
    "black".to_string()
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: default_family(),
            size: default_font_size(),
            bold: false,
            color: default_color(),
        }
    }
}

impl Font {
    /// Returns a copy with the size divided by the viewport scale.
    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            size: self.size / scale,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontOverride {
    pub family: Option<String>,
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub color: Option<String>,
}

impl FontOverride {
    pub fn resolve(&self, default: &Font) -> Font {
        Font {
            family: resolve(self.family.clone(), default.family.clone()),
            size: resolve(self.size, default.size),
            bold: resolve(self.bold, default.bold),
            color: resolve(self.color.clone(), default.color.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtomOverride {
    pub show_label: Option<bool>,
    pub font: FontOverride,
    pub highlight: Option<bool>,
    pub highlight_color: Option<String>,
    pub highlight_size: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BondOverride {
    pub color: Option<String>,
    pub width: Option<f64>,
    pub highlight: Option<bool>,
    pub highlight_color: Option<String>,
    pub highlight_width: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingOverride {
    pub highlight: Option<bool>,
    pub highlight_color: Option<String>,
    pub inset: Option<f64>,
}

/// Bracket overrides. An explicit `size` is used as-is, in molecule units,
/// and is not divided by the viewport scale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BracketOverride {
    pub size: Option<f64>,
    pub color: Option<String>,
    pub width: Option<f64>,
}
