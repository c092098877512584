pub mod bond;
pub mod bracket;
pub mod config;
mod debug;
mod error;
mod highlight;
pub mod label;
mod primitive;
pub mod ring;
pub mod vector;
mod viewport;

pub use config::{
    AtomStyle, BondStyle, BracketStyle, DebugStyle, DrawConfig, HighlightStyle, Layer,
    LayoutStyle, NumberStyle, Placement, RingHighlightStyle, ScriptStyle, TitleLocation,
    TitleStyle, get_default_style, load_style,
};
pub use error::Error;
pub use primitive::{Drawing, PathVertex, Primitive, TextAnchor};
pub use viewport::{TitleReserve, Viewport};

use crate::model::molecule::Molecule;
use crate::model::topology::Topology;
use crate::model::types::Point;

/// Validates `topology` and draws it.
///
/// # Errors
///
/// Returns [`Error::Topology`] when the topology fails validation. Geometric
/// problems never fail the pass; they are listed in
/// [`Drawing::diagnostics`].
pub fn draw(topology: &Topology, config: &DrawConfig, title: Option<&str>) -> Result<Drawing, Error> {
    let mut molecule = Molecule::from_topology(topology)?;
    Ok(render(&mut molecule, config, title))
}

/// Draws an already built molecule.
///
/// Runs in two phases: the molecule is optionally centred and the viewport
/// fitted, then every layer of [`DrawConfig::draw_order`] is emitted in
/// order with sizes divided by the viewport scale.
pub fn render(molecule: &mut Molecule, config: &DrawConfig, title: Option<&str>) -> Drawing {
    if config.layout.center {
        molecule.center_at(Point::origin());
    }
    let mol: &Molecule = molecule;

    let title = title.filter(|t| config.title.show && !t.is_empty());
    let reserve = title.map(|t| {
        let lines = label::title_lines(t, &config.title).len();
        let extent = label::title_extent(lines, &config.title);
        match config.title.location {
            TitleLocation::Top => TitleReserve::Above(extent),
            TitleLocation::Bottom => TitleReserve::Below(extent),
        }
    });
    let anchors: Vec<Point> = (0..mol.brackets().len())
        .map(|i| mol.bracket_placement(i).anchor)
        .collect();
    let viewport = Viewport::compute(
        mol.positions().iter().copied().chain(anchors),
        reserve,
        &config.layout,
    );
    let scale = viewport.scale;
    log::debug!(
        "viewport x {:?} y {:?}, scale {scale:.3}",
        viewport.range_x,
        viewport.range_y
    );

    let mut diagnostics = mol.diagnostics().to_vec();
    let mut primitives = Vec::new();
    for layer in &config.draw_order {
        let emitted = match layer {
            Layer::RingHighlights => {
                ring::draw_ring_highlights(mol, &config.ring_highlights, &mut diagnostics)
            }
            Layer::Highlights => highlight::draw_highlights(mol, &config.highlights, scale),
            Layer::Bonds => {
                bond::draw_bonds(mol, &config.bonds, &config.atoms, scale, &mut diagnostics)
            }
            Layer::Brackets => {
                bracket::draw_brackets(mol, &config.brackets, scale, &mut diagnostics)
            }
            Layer::Atoms => label::draw_atoms(mol, &config.atoms, scale),
            Layer::AtomNumbers => label::draw_atom_numbers(mol, &config.atom_numbers, scale),
            Layer::BondNumbers => label::draw_bond_numbers(mol, &config.bond_numbers, scale),
            Layer::RingNumbers => label::draw_ring_numbers(mol, &config.ring_numbers, scale),
            Layer::Debug => debug::draw_debug(mol, &config.debug, scale),
            Layer::Title => title.map_or_else(Vec::new, |t| {
                label::draw_title(mol, t, &config.title, scale)
            }),
        };
        log::trace!("layer {layer:?}: {} primitives", emitted.len());
        primitives.extend(emitted);
    }

    log::info!(
        "drew {} atoms and {} bonds as {} primitives ({} diagnostics)",
        mol.atom_count(),
        mol.bond_count(),
        primitives.len(),
        diagnostics.len()
    );

    Drawing {
        viewport,
        primitives,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::{BondOrder, Element};

    fn ethene() -> Topology {
        let mut t = Topology::new();
        t.add_atom(Element::C, [3.0, 3.0]);
        t.add_atom(Element::C, [4.0, 3.0]);
        t.add_bond(0, 1, BondOrder::Double);
        t
    }

    #[test]
    fn empty_topology_is_rejected() {
        let err = draw(&Topology::new(), &DrawConfig::default(), None).unwrap_err();
        assert!(matches!(err, Error::Topology(_)));
    }

    #[test]
    fn layers_follow_draw_order() {
        let mut config = DrawConfig::default();
        config.atoms.show_carbons = true;
        config.draw_order = vec![Layer::Atoms, Layer::Bonds];
        let drawing = draw(&ethene(), &config, None).unwrap();
        assert!(matches!(drawing.primitives[0], Primitive::Text { .. }));
        assert!(matches!(
            drawing.primitives.last(),
            Some(Primitive::Polyline { .. })
        ));
    }

    #[test]
    fn molecule_is_centered_before_drawing() {
        let mut mol = Molecule::from_topology(&ethene()).unwrap();
        let drawing = render(&mut mol, &DrawConfig::default(), Some("ethene"));
        let (lo, hi) = mol.bounds();
        assert_eq!(nalgebra::center(&lo, &hi), Point::origin());
        assert_eq!(drawing.viewport.scale, 1.0);
        assert_eq!(drawing.texts().last(), Some("ethene"));
    }

    #[test]
    fn hidden_title_is_not_drawn() {
        let mut config = DrawConfig::default();
        config.title.show = false;
        let drawing = draw(&ethene(), &config, Some("ethene")).unwrap();
        assert_eq!(drawing.texts().count(), 0);
    }
}
