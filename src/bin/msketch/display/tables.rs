use std::collections::BTreeMap;
use std::io::{self, Write};

use mol_sketch::{Diagnostic, Drawing, Molecule, Primitive};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_structure_info(molecule: &Molecule) {
    let mut out = io::stderr().lock();

    let mut elements: BTreeMap<&str, usize> = BTreeMap::new();
    for atom in molecule.atoms() {
        *elements.entry(atom.symbol()).or_insert(0) += 1;
    }
    let formula = elements
        .iter()
        .map(|(symbol, n)| if *n == 1 { symbol.to_string() } else { format!("{symbol}{n}") })
        .collect::<Vec<_>>()
        .join(" ");
    let aromatic = molecule.rings().iter().filter(|r| r.is_aromatic()).count();

    let rows = vec![
        ("Atoms", molecule.atom_count().to_string()),
        ("Elements", formula),
        ("Bonds", molecule.bond_count().to_string()),
        (
            "Rings",
            format!("{} ({aromatic} aromatic)", molecule.rings().len()),
        ),
        ("Brackets", molecule.brackets().len().to_string()),
    ];
    print_kv_table(&mut out, "Structure Summary", &rows);
}

/// One row per bond with its resolved double-bond alignment.
pub fn print_bond_table(molecule: &Molecule) {
    let mut out = io::stderr().lock();

    let _ = writeln!(out, "{INDENT}┌─ Bonds ─┐");
    let _ = writeln!(out, "{INDENT}┌──────┬─────────────┬────────┬────────┬───────────────┐");
    let _ = writeln!(out, "{INDENT}│    # │ Atoms       │ Order  │ Stereo │ Alignment     │");
    let _ = writeln!(out, "{INDENT}├──────┼─────────────┼────────┼────────┼───────────────┤");

    for bond in molecule.bonds() {
        let [a, b] = bond.atoms();
        let pair = format!(
            "{}{}-{}{}",
            molecule.atoms()[a].symbol(),
            a + 1,
            molecule.atoms()[b].symbol(),
            b + 1
        );
        let _ = writeln!(
            out,
            "{INDENT}│ {:>4} │ {:<11} │ {:<6} │ {:<6} │ {:<13} │",
            bond.index() + 1,
            truncate(&pair, 11),
            bond.order().to_string(),
            bond.stereo().to_string(),
            molecule.alignment(bond.index()).to_string()
        );
    }

    let _ = writeln!(out, "{INDENT}└──────┴─────────────┴────────┴────────┴───────────────┘");
}

pub fn print_drawing_summary(drawing: &Drawing) {
    let mut out = io::stderr().lock();

    let mut kinds: BTreeMap<&str, usize> = BTreeMap::new();
    for p in &drawing.primitives {
        let kind = match p {
            Primitive::Polyline { .. } => "polylines",
            Primitive::Polygon { .. } => "polygons",
            Primitive::Marker { .. } => "markers",
            Primitive::Text { .. } => "texts",
        };
        *kinds.entry(kind).or_insert(0) += 1;
    }
    let breakdown = kinds
        .iter()
        .map(|(k, n)| format!("{n} {k}"))
        .collect::<Vec<_>>()
        .join(", ");

    let vp = &drawing.viewport;
    let rows = vec![
        (
            "Range x",
            format!("{:.2} … {:.2}", vp.range_x[0], vp.range_x[1]),
        ),
        (
            "Range y",
            format!("{:.2} … {:.2}", vp.range_y[0], vp.range_y[1]),
        ),
        ("Scale", format!("{:.3}", vp.scale)),
        ("Canvas (px)", format!("{} × {}", vp.width, vp.height)),
        ("Primitives", drawing.primitives.len().to_string()),
        ("Kinds", breakdown),
    ];
    print_kv_table(&mut out, "Viewport", &rows);
}

pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let mut out = io::stderr().lock();
    let _ = writeln!(out, "{INDENT}┌─ Diagnostics ({}) ─┐", diagnostics.len());
    for d in diagnostics {
        let _ = writeln!(
            out,
            "{INDENT}  \x1b[33m!\x1b[0m {}",
            truncate(&d.to_string(), SAFE_TABLE_WIDTH - 4)
        );
    }
    let _ = writeln!(out);
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);
    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    let _ = writeln!(out, "{INDENT}┌─ {} ─┐", truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{INDENT}┌{k_line}┬{v_line}┐");
    let _ = writeln!(out, "{INDENT}│ {:<key_w$} │ {:>val_w$} │", "Metric", "Value");
    let _ = writeln!(out, "{INDENT}├{k_line}┼{v_line}┤");
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
            truncate(key, key_w),
            truncate(val, val_w)
        );
    }
    let _ = writeln!(out, "{INDENT}└{k_line}┴{v_line}┘");
}
