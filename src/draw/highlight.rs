//! Atom and bond highlights, drawn beneath the structure.

use super::config::HighlightStyle;
use super::primitive::Primitive;
use crate::model::molecule::Molecule;
use crate::model::style::resolve;

fn atom_flag(mol: &Molecule, index: usize) -> bool {
    resolve(mol.atoms()[index].style.highlight, false)
}

fn bond_flag(mol: &Molecule, index: usize) -> bool {
    resolve(mol.bonds()[index].style.highlight, false)
}

/// Whether atom `index` is highlighted, including atoms pulled in by a
/// highlighted bond when `atoms_on_bonds` is set.
pub fn atom_highlighted(mol: &Molecule, index: usize, style: &HighlightStyle) -> bool {
    atom_flag(mol, index)
        || (style.atoms_on_bonds
            && mol.atoms()[index].bonds().iter().any(|&b| bond_flag(mol, b)))
}

/// Whether bond `index` is highlighted, including bonds between two
/// highlighted atoms when `bonds_between_atoms` is set.
pub fn bond_highlighted(mol: &Molecule, index: usize, style: &HighlightStyle) -> bool {
    let [a, b] = mol.bonds()[index].atoms();
    bond_flag(mol, index)
        || (style.bonds_between_atoms && atom_flag(mol, a) && atom_flag(mol, b))
}

/// Bond strokes first, then atom markers.
pub fn draw_highlights(mol: &Molecule, style: &HighlightStyle, scale: f64) -> Vec<Primitive> {
    if !style.show {
        return Vec::new();
    }
    let mut out = Vec::new();
    for bond in mol.bonds() {
        if !bond_highlighted(mol, bond.index(), style) {
            continue;
        }
        let frame = mol.bond_frame(bond.index());
        let color = resolve(bond.style.highlight_color.as_deref(), style.color.as_str());
        let width = resolve(bond.style.highlight_width, style.bond_width) / scale;
        out.push(Primitive::line([frame.start, frame.end], color, width));
    }
    for atom in mol.atoms() {
        if !atom_highlighted(mol, atom.index(), style) {
            continue;
        }
        out.push(Primitive::Marker {
            center: mol.position(atom.index()),
            size: resolve(atom.style.highlight_size, style.atom_size) / scale,
            color: resolve(atom.style.highlight_color.clone(), style.color.clone()),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::config::DrawConfig;
    use crate::model::topology::Topology;
    use crate::model::types::{BondOrder, Element};

    fn propane() -> Molecule {
        let mut t = Topology::new();
        t.add_atom(Element::C, [0.0, 0.0]);
        t.add_atom(Element::C, [0.866, 0.5]);
        t.add_atom(Element::C, [1.732, 0.0]);
        t.add_bond(0, 1, BondOrder::Single);
        t.add_bond(1, 2, BondOrder::Single);
        Molecule::from_topology(&t).unwrap()
    }

    fn count(prims: &[Primitive]) -> (usize, usize) {
        let markers = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Marker { .. }))
            .count();
        (prims.len() - markers, markers)
    }

    #[test]
    fn only_flagged_entities_are_drawn_by_default() {
        let mut mol = propane();
        mol.atom_mut(0).unwrap().style.highlight = Some(true);
        mol.atom_mut(1).unwrap().style.highlight = Some(true);
        let style = DrawConfig::default().highlights;
        assert_eq!(count(&draw_highlights(&mol, &style, 1.0)), (0, 2));
    }

    #[test]
    fn bonds_between_highlighted_atoms() {
        let mut mol = propane();
        mol.atom_mut(0).unwrap().style.highlight = Some(true);
        mol.atom_mut(1).unwrap().style.highlight = Some(true);
        let mut style = DrawConfig::default().highlights;
        style.bonds_between_atoms = true;
        assert!(bond_highlighted(&mol, 0, &style));
        assert!(!bond_highlighted(&mol, 1, &style));
        assert_eq!(count(&draw_highlights(&mol, &style, 1.0)), (1, 2));
    }

    #[test]
    fn atoms_on_highlighted_bonds() {
        let mut mol = propane();
        mol.bond_mut(1).unwrap().style.highlight = Some(true);
        let mut style = DrawConfig::default().highlights;
        style.atoms_on_bonds = true;
        assert!(!atom_highlighted(&mol, 0, &style));
        assert!(atom_highlighted(&mol, 2, &style));
        assert_eq!(count(&draw_highlights(&mol, &style, 1.0)), (1, 2));
    }

    #[test]
    fn marker_size_is_scaled_and_overridable() {
        let mut mol = propane();
        mol.atom_mut(0).unwrap().style.highlight = Some(true);
        mol.atom_mut(0).unwrap().style.highlight_color = Some("red".into());
        let style = DrawConfig::default().highlights;
        let prims = draw_highlights(&mol, &style, 2.0);
        let [Primitive::Marker { size, color, .. }] = prims.as_slice() else {
            panic!("one marker expected");
        };
        assert_eq!(*size, style.atom_size / 2.0);
        assert_eq!(color, "red");
    }
}
