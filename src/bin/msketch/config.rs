use std::fs;

use anyhow::{Context, Result, bail};

use mol_sketch::{DrawConfig, Molecule, Topology, load_style};

use crate::cli::{AnnotationOptions, StructureOptions};

/// Loads `--style` over the embedded defaults, then applies flag overrides.
pub fn build_draw_config(
    structure: &StructureOptions,
    annotations: Option<&AnnotationOptions>,
) -> Result<DrawConfig> {
    let mut config = match &structure.style {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read style file: {}", path.display()))?;
            load_style(Some(text.as_str())).context("Invalid drawing style")?
        }
        None => DrawConfig::default(),
    };

    if let Some(a) = annotations {
        config.atoms.show_carbons |= a.show_carbons;
        config.atom_numbers.show |= a.atom_numbers;
        config.bond_numbers.show |= a.bond_numbers;
        config.ring_numbers.show |= a.ring_numbers;
        config.debug.show |= a.debug;
    }
    Ok(config)
}

/// Adds the `--ring` list to a parsed topology.
pub fn apply_rings(topology: &mut Topology, structure: &StructureOptions) {
    for ring in &structure.rings {
        topology.add_ring(ring.atoms.clone(), ring.aromatic);
    }
}

/// Marks highlighted entities. Numbers are 1-based.
pub fn apply_highlights(molecule: &mut Molecule, annotations: &AnnotationOptions) -> Result<()> {
    for &n in &annotations.atoms {
        let count = molecule.atom_count();
        let Some(atom) = n.checked_sub(1).and_then(|i| molecule.atom_mut(i)) else {
            bail!("--highlight-atom {n} is out of range (molecule has {count} atoms)");
        };
        atom.style.highlight = Some(true);
    }
    for &n in &annotations.bonds {
        let count = molecule.bond_count();
        let Some(bond) = n.checked_sub(1).and_then(|i| molecule.bond_mut(i)) else {
            bail!("--highlight-bond {n} is out of range (molecule has {count} bonds)");
        };
        bond.style.highlight = Some(true);
    }
    for &n in &annotations.rings {
        let count = molecule.rings().len();
        let Some(ring) = n.checked_sub(1).and_then(|i| molecule.ring_mut(i)) else {
            bail!("--highlight-ring {n} is out of range ({count} rings given with --ring)");
        };
        ring.style.highlight = Some(true);
    }
    Ok(())
}
