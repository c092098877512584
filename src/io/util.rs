use crate::model::types::{BondOrder, BondStereo, Element};

/// Resolves a CTfile atom symbol.
///
/// Query and pseudo-atom symbols (`*`, `R`, `R#`, `A`, `Q`) map to
/// [`Element::Dummy`]; anything else must be a known element symbol.
pub fn element_from_ctfile(symbol: &str) -> Option<Element> {
    match symbol.trim() {
        "*" | "R" | "R#" | "A" | "Q" => Some(Element::Dummy),
        "" => None,
        s => s.parse().ok(),
    }
}

/// CTfile bond type to [`BondOrder`]. Aromatic (4) and query types have no
/// counterpart.
pub fn bond_order_from_ctfile(value: i32) -> Option<BondOrder> {
    match value {
        1 => Some(BondOrder::Single),
        2 => Some(BondOrder::Double),
        3 => Some(BondOrder::Triple),
        _ => None,
    }
}

/// CTfile bond stereo field. Only wedge (1) and hash (6) are drawn; "either"
/// and cis/trans markers read as no stereo.
pub fn bond_stereo_from_ctfile(value: i32) -> BondStereo {
    match value {
        1 => BondStereo::Up,
        6 => BondStereo::Down,
        _ => BondStereo::None,
    }
}

/// Fixed-width field of a CTfile line, trimmed. Short lines yield `""`.
pub fn column(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    line.get(start..end).map_or("", str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_atoms_map_to_dummy() {
        for s in ["*", "R", "R#", "A", "Q"] {
            assert_eq!(element_from_ctfile(s), Some(Element::Dummy));
        }
        assert_eq!(element_from_ctfile(" Cl"), Some(Element::Cl));
        assert_eq!(element_from_ctfile("Xx"), None);
        assert_eq!(element_from_ctfile("  "), None);
    }

    #[test]
    fn ctfile_bond_fields() {
        assert_eq!(bond_order_from_ctfile(2), Some(BondOrder::Double));
        assert_eq!(bond_order_from_ctfile(4), None);
        assert_eq!(bond_stereo_from_ctfile(1), BondStereo::Up);
        assert_eq!(bond_stereo_from_ctfile(6), BondStereo::Down);
        assert_eq!(bond_stereo_from_ctfile(4), BondStereo::None);
    }

    #[test]
    fn column_tolerates_short_lines() {
        assert_eq!(column("  1  2  1", 0, 3), "1");
        assert_eq!(column("  1  2  1", 6, 9), "1");
        assert_eq!(column("  1  2  1", 9, 12), "");
        assert_eq!(column("  1  2", 3, 9), "2");
    }
}
