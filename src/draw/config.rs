//! Diagram-wide drawing style.
//!
//! The defaults live in `resources/default.style.toml`, embedded at compile
//! time and parsed once. A custom style is a partial TOML document: its
//! tables are merged key by key over the defaults before deserialization,
//! so `[bond_numbers] show = true` keeps every other bond-number setting.

use super::error::Error;
use crate::model::style::Font;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const DEFAULT_STYLE_TOML: &str = include_str!("../../resources/default.style.toml");

static DEFAULT_STYLE: OnceLock<DrawConfig> = OnceLock::new();

/// A group of primitives emitted together. The order of
/// [`DrawConfig::draw_order`] is the paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    RingHighlights,
    Highlights,
    Bonds,
    Brackets,
    Atoms,
    AtomNumbers,
    BondNumbers,
    RingNumbers,
    Debug,
    Title,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawConfig {
    pub draw_order: Vec<Layer>,
    pub layout: LayoutStyle,
    pub bonds: BondStyle,
    pub atoms: AtomStyle,
    pub atom_numbers: NumberStyle,
    pub bond_numbers: NumberStyle,
    pub ring_numbers: NumberStyle,
    pub highlights: HighlightStyle,
    pub ring_highlights: RingHighlightStyle,
    pub brackets: BracketStyle,
    pub title: TitleStyle,
    pub debug: DebugStyle,
}

impl Default for DrawConfig {
    fn default() -> Self {
        get_default_style().clone()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutStyle {
    pub width: u32,
    pub height: u32,
    pub range_x: [f64; 2],
    pub range_y: [f64; 2],
    pub padding: f64,
    pub fixed_aspect: bool,
    pub auto_scale: bool,
    pub center: bool,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BondStyle {
    pub show: bool,
    pub width: f64,
    pub color: String,
    /// Distance trimmed from a bond end that meets a visible atom label.
    pub label_clearance: f64,
    pub double_offset: f64,
    pub double_offset_length: f64,
    pub double_center_length: f64,
    pub triple_offset: f64,
    pub triple_length: f64,
    /// Half-width of a wedge base as a fraction of the bond length.
    pub stereo_width_fraction: f64,
    pub stereo_dashes: usize,
    pub stereo_dash_width: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomStyle {
    pub show: bool,
    pub show_carbons: bool,
    /// Horizontal shift of a label that carries hydrogens on one side.
    pub offset: f64,
    /// Vertical shift of a hydrogen label placed above or below the symbol.
    pub top_offset: f64,
    /// Baseline correction applied to every label.
    pub text_y_offset: f64,
    pub font: Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Along the entity's open direction (atom bisector, bond perpendicular).
    Best,
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NumberStyle {
    pub show: bool,
    pub offset: f64,
    pub placement: Placement,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HighlightStyle {
    pub show: bool,
    pub color: String,
    pub atom_size: f64,
    pub bond_width: f64,
    /// Also highlight bonds whose two atoms are highlighted.
    pub bonds_between_atoms: bool,
    /// Also highlight both atoms of every highlighted bond.
    pub atoms_on_bonds: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RingHighlightStyle {
    pub show: bool,
    pub color: String,
    pub inset: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptStyle {
    pub show: bool,
    pub offset: f64,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BracketStyle {
    pub show: bool,
    /// Steepness of the parabola `y = prefactor * x²`.
    pub prefactor: f64,
    pub points: usize,
    pub size: f64,
    pub offset: f64,
    pub width: f64,
    pub color: String,
    pub subscript: ScriptStyle,
    pub superscript: ScriptStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleLocation {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleStyle {
    pub show: bool,
    pub location: TitleLocation,
    pub auto_wrap: bool,
    pub wrap_length: usize,
    pub pad_structure: f64,
    pub line_height: f64,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DebugStyle {
    pub show: bool,
    pub arrow_length: f64,
    pub width: f64,
    pub bond_color: String,
    pub perpendicular_color: String,
    pub bisector_color: String,
}

/// Builds a [`DrawConfig`] from an optional partial TOML override.
///
/// # Errors
///
/// Returns [`Error::StyleParse`] when `custom_toml` is not valid TOML or
/// names an unknown key.
pub fn load_style(custom_toml: Option<&str>) -> Result<DrawConfig, Error> {
    match custom_toml {
        Some(custom) => {
            let mut base: toml::Table = DEFAULT_STYLE_TOML.parse()?;
            let overlay: toml::Table = custom.parse()?;
            merge_tables(&mut base, overlay);
            let style: DrawConfig = toml::Value::Table(base).try_into()?;
            Ok(style)
        }
        None => Ok(get_default_style().clone()),
    }
}

pub fn get_default_style() -> &'static DrawConfig {
    DEFAULT_STYLE.get_or_init(|| {
        toml::from_str(DEFAULT_STYLE_TOML)
            .expect("Failed to parse embedded default style. This is a library bug.")
    })
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match value {
            toml::Value::Table(nested) if matches!(base.get(&key), Some(toml::Value::Table(_))) => {
                if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                    merge_tables(existing, nested);
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_style_parses() {
        let style = get_default_style();
        assert_eq!(style.layout.width, 600);
        assert_eq!(style.layout.range_x, [-5.0, 5.0]);
        assert_eq!(style.bonds.stereo_dashes, 6);
        assert_eq!(style.bonds.double_offset, 0.35);
        assert_eq!(style.atoms.font.size, 40.0);
        assert_eq!(style.ring_numbers.placement, Placement::Center);
        assert_eq!(style.title.location, TitleLocation::Bottom);
        assert!(!style.brackets.superscript.show);
        assert_eq!(style.draw_order.first(), Some(&Layer::RingHighlights));
        assert_eq!(style.draw_order.last(), Some(&Layer::Title));
    }

    #[test]
    fn load_style_without_override_matches_default() {
        assert_eq!(load_style(None).unwrap(), DrawConfig::default());
    }

    #[test]
    fn partial_override_keeps_sibling_keys() {
        let style = load_style(Some(
            "[bond_numbers]\nshow = true\n[bonds.font]\n",
        ));
        // `bonds` has no `font` key.
        assert!(matches!(style, Err(Error::StyleParse(_))));

        let style = load_style(Some(
            "[bond_numbers]\nshow = true\nfont = { color = \"red\" }\n",
        ))
        .unwrap();
        assert!(style.bond_numbers.show);
        assert_eq!(style.bond_numbers.font.color, "red");
        assert_eq!(style.bond_numbers.font.size, 20.0);
        assert_eq!(style.bond_numbers.offset, 0.4);
    }

    #[test]
    fn override_replaces_draw_order() {
        let style = load_style(Some("draw_order = [\"bonds\", \"atoms\"]\n")).unwrap();
        assert_eq!(style.draw_order, vec![Layer::Bonds, Layer::Atoms]);
    }

    #[test]
    fn invalid_toml_is_reported() {
        let err = load_style(Some("[layout\nwidth = 3")).unwrap_err();
        assert!(err.to_string().starts_with("failed to parse drawing style"));
    }
}
