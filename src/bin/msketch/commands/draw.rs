use anyhow::{Context, Result};

use mol_sketch::{io::json, render};

use super::read_molecule;
use crate::cli::DrawArgs;
use crate::config::{apply_highlights, build_draw_config};
use crate::display::{Context as DisplayContext, Progress, print_diagnostics, print_drawing_summary};
use crate::io::create_output;

const TOTAL_STEPS: u8 = 3;

pub fn run_draw(args: DrawArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let mut molecule = read_molecule(&args.io, &args.structure)?;
    apply_highlights(&mut molecule, &args.annotations)?;
    progress.complete_step(
        "Reading structure",
        &[
            format!(
                "Parse MOL file ({} atoms, {} bonds)",
                molecule.atom_count(),
                molecule.bond_count()
            ),
            format!(
                "{} rings, {} brackets",
                molecule.rings().len(),
                molecule.brackets().len()
            ),
        ],
    );

    progress.step("Resolving geometry");
    let config = build_draw_config(&args.structure, Some(&args.annotations))?;
    let drawing = render(&mut molecule, &config, args.structure.title.as_deref());
    progress.complete_step(
        "Resolving geometry",
        &[
            format!("Fit viewport (scale {:.2})", drawing.viewport.scale),
            format!("Emit {} primitives", drawing.primitives.len()),
        ],
    );

    if ctx.interactive {
        print_drawing_summary(&drawing);
        print_diagnostics(&drawing.diagnostics);
    }

    progress.step("Writing drawing");
    let target = args
        .output
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdout".to_string());
    let writer = create_output(args.output.as_deref())?;
    json::write(writer, &drawing, args.pretty).context("Failed to write drawing")?;
    progress.complete_step("Writing drawing", &[format!("Write JSON → {target}")]);

    progress.finish();
    Ok(())
}
