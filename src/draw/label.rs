//! Text placement: atom symbols with implicit hydrogens, index numbers and
//! the title block.

use super::config::{AtomStyle, NumberStyle, Placement, TitleLocation, TitleStyle};
use super::primitive::{Primitive, TextAnchor};
use crate::model::molecule::Molecule;
use crate::model::style::{Font, resolve};
use crate::model::types::{Point, Vector};

/// Where the implicit hydrogen text goes relative to the element symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrogenSide {
    None,
    Left,
    Right,
    Above,
    Below,
}

/// Whether atom `index` gets a symbol label.
///
/// Carbons are hidden unless `show_carbons` is set or the carbon has no
/// bonds. A per-atom override wins over both rules.
pub fn label_visible(mol: &Molecule, index: usize, style: &AtomStyle) -> bool {
    let atom = &mol.atoms()[index];
    let by_default =
        style.show && (!atom.element().is_carbon() || style.show_carbons || atom.degree() == 0);
    resolve(atom.style.show_label, by_default)
}

/// Chooses the hydrogen side from the atom's open direction.
///
/// Atoms with exactly two bonds whose bisector is mostly vertical stack the
/// hydrogens above or below; everything else puts them left or right.
pub fn hydrogen_side(bisector: Vector, hydrogens: u32, degree: usize) -> HydrogenSide {
    if hydrogens == 0 {
        return HydrogenSide::None;
    }
    if bisector.x.abs() > bisector.y.abs() || degree != 2 {
        if bisector.x < 0.0 {
            HydrogenSide::Left
        } else {
            HydrogenSide::Right
        }
    } else if bisector.y > 0.0 {
        HydrogenSide::Above
    } else {
        HydrogenSide::Below
    }
}

/// `H`, `H₂`, `H₃`, ... for one or more hydrogens.
pub fn hydrogen_text(count: u32) -> String {
    const DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    match count {
        0 => String::new(),
        1 => "H".to_string(),
        n => std::iter::once('H')
            .chain(
                n.to_string()
                    .chars()
                    .filter_map(|c| c.to_digit(10).map(|d| DIGITS[d as usize])),
            )
            .collect(),
    }
}

/// Text pieces of one atom label: `(position, text, anchor)`.
pub fn atom_label(mol: &Molecule, index: usize, style: &AtomStyle) -> Vec<(Point, String, TextAnchor)> {
    let position = mol.position(index);
    let symbol = mol.atoms()[index].symbol();
    let hydrogens = mol.implicit_hydrogens(index);
    let baseline = Vector::new(0.0, -style.text_y_offset);
    let side = hydrogen_side(mol.bisector(index), hydrogens, mol.degree(index));
    let h = hydrogen_text(hydrogens);

    match side {
        HydrogenSide::None => vec![(position + baseline, symbol.to_string(), TextAnchor::Center)],
        HydrogenSide::Left => vec![(
            position + baseline - Vector::new(style.offset, 0.0),
            format!("{h}{symbol}"),
            TextAnchor::Center,
        )],
        HydrogenSide::Right => vec![(
            position + baseline + Vector::new(style.offset, 0.0),
            format!("{symbol}{h}"),
            TextAnchor::Center,
        )],
        HydrogenSide::Above | HydrogenSide::Below => {
            let sign = if side == HydrogenSide::Above { 1.0 } else { -1.0 };
            vec![
                (position + baseline, symbol.to_string(), TextAnchor::Center),
                (
                    position + baseline + Vector::new(0.0, sign * style.top_offset),
                    h,
                    TextAnchor::Center,
                ),
            ]
        }
    }
}

pub fn draw_atoms(mol: &Molecule, style: &AtomStyle, scale: f64) -> Vec<Primitive> {
    if !style.show {
        return Vec::new();
    }
    let mut out = Vec::new();
    for atom in mol.atoms() {
        if !label_visible(mol, atom.index(), style) {
            continue;
        }
        let font = atom.style.font.resolve(&style.font).scaled(scale);
        out.extend(
            atom_label(mol, atom.index(), style)
                .into_iter()
                .map(|(position, text, anchor)| Primitive::text(position, text, font.clone(), anchor)),
        );
    }
    out
}

/// Position of a number label around `anchor`.
///
/// `open` is the preferred direction for [`Placement::Best`]; a zero
/// vector leaves the label on the anchor.
pub fn number_position(anchor: Point, open: Vector, placement: Placement, offset: f64) -> Point {
    match placement {
        Placement::Best => anchor + open * offset,
        Placement::Left => anchor - Vector::new(offset, 0.0),
        Placement::Right => anchor + Vector::new(offset, 0.0),
        Placement::Top => anchor + Vector::new(0.0, offset),
        Placement::Bottom => anchor - Vector::new(0.0, offset),
        Placement::Center => anchor,
    }
}

fn numbers(
    items: impl Iterator<Item = (usize, Point, Vector)>,
    style: &NumberStyle,
    scale: f64,
) -> Vec<Primitive> {
    if !style.show {
        return Vec::new();
    }
    let font = style.font.scaled(scale);
    items
        .map(|(index, anchor, open)| {
            Primitive::text(
                number_position(anchor, open, style.placement, style.offset),
                index.to_string(),
                font.clone(),
                TextAnchor::Center,
            )
        })
        .collect()
}

pub fn draw_atom_numbers(mol: &Molecule, style: &NumberStyle, scale: f64) -> Vec<Primitive> {
    numbers(
        mol.atoms()
            .iter()
            .map(|a| (a.index(), mol.position(a.index()), mol.bisector(a.index()))),
        style,
        scale,
    )
}

pub fn draw_bond_numbers(mol: &Molecule, style: &NumberStyle, scale: f64) -> Vec<Primitive> {
    numbers(
        mol.bonds().iter().map(|b| {
            let frame = mol.bond_frame(b.index());
            (b.index(), frame.midpoint, frame.perpendicular)
        }),
        style,
        scale,
    )
}

/// Ring numbers sit at the centroid; only drawable rings are numbered.
pub fn draw_ring_numbers(mol: &Molecule, style: &NumberStyle, scale: f64) -> Vec<Primitive> {
    numbers(
        mol.rings()
            .iter()
            .filter(|r| r.is_drawable())
            .map(|r| (r.index(), mol.ring_centroid(r.index()), Vector::zeros())),
        style,
        scale,
    )
}

/// Splits `title` into display lines.
///
/// With wrapping on, the line count is `len / wrap_length + 1` and the
/// characters are dealt out in equal consecutive chunks.
pub fn title_lines(title: &str, style: &TitleStyle) -> Vec<String> {
    let chars: Vec<char> = title.chars().collect();
    if !style.auto_wrap || style.wrap_length == 0 || chars.is_empty() {
        return vec![title.to_string()];
    }
    let lines = chars.len() / style.wrap_length + 1;
    let per_line = chars.len().div_ceil(lines);
    chars
        .chunks(per_line)
        .map(|chunk| chunk.iter().collect::<String>().trim().to_string())
        .collect()
}

/// Vertical room the title needs beyond the structure.
pub fn title_extent(lines: usize, style: &TitleStyle) -> f64 {
    style.pad_structure + lines as f64 * style.line_height
}

/// Emits one text primitive per title line, stacked from the structure
/// outward.
pub fn draw_title(mol: &Molecule, title: &str, style: &TitleStyle, scale: f64) -> Vec<Primitive> {
    if !style.show || title.is_empty() {
        return Vec::new();
    }
    let lines = title_lines(title, style);
    let (lo, hi) = mol.bounds();
    let x = (lo.x + hi.x) / 2.0;
    let font: Font = style.font.scaled(scale);
    let count = lines.len();

    lines
        .into_iter()
        .enumerate()
        .map(|(k, line)| {
            let y = match style.location {
                TitleLocation::Top => {
                    hi.y + style.pad_structure + (count - 1 - k) as f64 * style.line_height
                }
                TitleLocation::Bottom => lo.y - style.pad_structure - k as f64 * style.line_height,
            };
            Primitive::text(Point::new(x, y), line, font.clone(), TextAnchor::Center)
        })
        .collect()
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

    fn ethanol() -> Molecule {
        let mut t = Topology::new();
        t.add_atom(Element::C, [0.0, 0.0]);
        t.add_atom(Element::C, [0.866, 0.5]);
        t.add_atom(Element::O, [1.732, 0.0]);
        t.add_bond(0, 1, BondOrder::Single);
        t.add_bond(1, 2, BondOrder::Single);
        Molecule::from_topology(&t).unwrap()
    }

    #[test]
    fn hydrogen_text_uses_subscript_digits() {
        assert_eq!(hydrogen_text(0), "");
        assert_eq!(hydrogen_text(1), "H");
        assert_eq!(hydrogen_text(3), "H₃");
        assert_eq!(hydrogen_text(12), "H₁₂");
    }

    #[test]
    fn hydrogen_side_follows_bisector() {
        assert_eq!(hydrogen_side(Vector::new(1.0, 0.0), 0, 1), HydrogenSide::None);
        assert_eq!(hydrogen_side(Vector::new(-1.0, 0.2), 1, 1), HydrogenSide::Left);
        assert_eq!(hydrogen_side(Vector::new(0.1, 0.9), 1, 1), HydrogenSide::Right);
        assert_eq!(hydrogen_side(Vector::new(0.1, 0.9), 1, 2), HydrogenSide::Above);
        assert_eq!(hydrogen_side(Vector::new(0.1, -0.9), 1, 2), HydrogenSide::Below);
    }

    #[test]
    fn terminal_oxygen_gets_hydrogen_on_the_open_side() {
        let style = DrawConfig::default().atoms;
        let mol = ethanol();
        let pieces = atom_label(&mol, 2, &style);
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].1, "OH");
        assert!(pieces[0].0.x > 1.732);
        assert!(approx_eq(pieces[0].0.y, -style.text_y_offset, 1e-12));
    }

    #[test]
    fn carbons_are_hidden_unless_requested_or_isolated() {
        let mut style = DrawConfig::default().atoms;
        let mol = ethanol();
        assert!(!label_visible(&mol, 0, &style));
        assert!(label_visible(&mol, 2, &style));
        style.show_carbons = true;
        assert!(label_visible(&mol, 0, &style));

        let mut t = Topology::new();
        t.add_atom(Element::C, [0.0, 0.0]);
        let methane = Molecule::from_topology(&t).unwrap();
        let prims = draw_atoms(&methane, &DrawConfig::default().atoms, 1.0);
        assert_eq!(prims.len(), 1);
        let Primitive::Text { text, .. } = &prims[0] else {
            panic!("text expected");
        };
        assert_eq!(text, "CH₄");
    }

    #[test]
    fn label_override_beats_defaults() {
        let style = DrawConfig::default().atoms;
        let mut mol = ethanol();
        mol.atom_mut(0).unwrap().style.show_label = Some(true);
        mol.atom_mut(2).unwrap().style.show_label = Some(false);
        assert!(label_visible(&mol, 0, &style));
        assert!(!label_visible(&mol, 2, &style));
    }

    #[test]
    fn number_placements() {
        let anchor = Point::new(1.0, 1.0);
        let open = Vector::new(0.0, -1.0);
        assert_eq!(
            number_position(anchor, open, Placement::Best, 0.5),
            Point::new(1.0, 0.5)
        );
        assert_eq!(
            number_position(anchor, open, Placement::Left, 0.5),
            Point::new(0.5, 1.0)
        );
        assert_eq!(number_position(anchor, open, Placement::Center, 0.5), anchor);
    }

    #[test]
    fn numbers_respect_show_flag() {
        let mut style = DrawConfig::default().bond_numbers;
        let mol = ethanol();
        assert!(draw_bond_numbers(&mol, &style, 1.0).is_empty());
        style.show = true;
        assert_eq!(draw_bond_numbers(&mol, &style, 1.0).len(), 2);
    }

    #[test]
    fn title_wraps_into_equal_chunks() {
        let mut style = DrawConfig::default().title;
        style.wrap_length = 10;
        let lines = title_lines("abcdefghijklmnopqrstuvwxy", &style);
        assert_eq!(lines, vec!["abcdefghi", "jklmnopqr", "stuvwxy"]);

        style.auto_wrap = false;
        assert_eq!(title_lines("abc def", &style), vec!["abc def"]);
    }

    #[test]
    fn bottom_title_sits_below_the_structure() {
        let style = DrawConfig::default().title;
        let mol = ethanol();
        let prims = draw_title(&mol, "ethanol", &style, 1.0);
        assert_eq!(prims.len(), 1);
        let Primitive::Text { position, .. } = &prims[0] else {
            panic!("text expected");
        };
        assert!(approx_eq(position.y, -style.pad_structure, 1e-12));
        assert!(approx_eq(position.x, 0.866, 1e-12));
    }
}
