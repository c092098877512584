use anyhow::Result;

use mol_sketch::render;

use super::read_molecule;
use crate::cli::InspectArgs;
use crate::config::build_draw_config;
use crate::display::{
    Context as DisplayContext, print_bond_table, print_diagnostics, print_drawing_summary,
    print_structure_info,
};

/// Tables always go to stderr; `--quiet` only hides the banner.
pub fn run_inspect(args: InspectArgs, _ctx: DisplayContext) -> Result<()> {
    let mut molecule = read_molecule(&args.io, &args.structure)?;
    let config = build_draw_config(&args.structure, None)?;
    let drawing = render(&mut molecule, &config, args.structure.title.as_deref());

    print_structure_info(&molecule);
    print_bond_table(&molecule);
    print_drawing_summary(&drawing);
    print_diagnostics(&drawing.diagnostics);
    Ok(())
}
