mod draw;
mod inspect;

use draw::run_draw;
use inspect::run_inspect;

use anyhow::{Context, Result, bail};

use mol_sketch::{Molecule, io::mol};

use crate::cli::{Command, IoOptions, StructureOptions};
use crate::config::apply_rings;
use crate::display::Context as DisplayContext;
use crate::io::{open_input, stdin_is_tty};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Draw(args) => run_draw(args, ctx),
        Command::Inspect(args) => run_inspect(args, ctx),
    }
}

/// Reads the MOL input, adds `--ring` rings and validates the result.
fn read_molecule(io: &IoOptions, structure: &StructureOptions) -> Result<Molecule> {
    if io.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: msketch draw -i <INPUT> or pipe a MOL file via stdin."
        );
    }

    let input = open_input(io.input.as_deref())?;
    let mut topology = mol::read(input).context("Failed to read structure")?;
    apply_rings(&mut topology, structure);
    Molecule::from_topology(&topology).context("Invalid molecule")
}
