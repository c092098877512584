use std::io::{self, Write};

use anyhow::Error;

use mol_sketch::TopologyError;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {line:<59} ║");
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {line:<57} ║");
        }
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {first:<55} ║");
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {line:<55} ║");
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

/// Typed hints from the first recognised error in the chain, falling back to
/// message sniffing.
fn hints_for(err: &Error) -> Vec<String> {
    let mut hints = Vec::new();
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<mol_sketch::io::Error>() {
            io_hints(e, &mut hints);
        } else if let Some(e) = cause.downcast_ref::<mol_sketch::DrawError>() {
            draw_hints(e, &mut hints);
        } else if let Some(e) = cause.downcast_ref::<TopologyError>() {
            topology_hints(e, &mut hints);
        } else if let Some(e) = cause.downcast_ref::<std::io::Error>() {
            std_io_hints(e, &mut hints);
        }
        if !hints.is_empty() {
            return hints;
        }
    }
    fallback_hints(err, &mut hints);
    hints
}

fn io_hints(err: &mol_sketch::io::Error, hints: &mut Vec<String>) {
    use mol_sketch::io::Error as IoError;

    match err {
        IoError::Io { source } => std_io_hints(source, hints),
        IoError::Parse { format, line, .. } => {
            hints.push(format!("The {format} parser stopped near line {line}"));
            hints.push("MOL atom lines need x, y, z in columns 1-30 and the symbol in 32-34".into());
            hints.push("Only V2000 connection tables are read".into());
        }
        IoError::Topology {
            what,
            declared,
            parsed,
            ..
        } => {
            hints.push(format!(
                "The counts line promises {declared} {what}s but the {what} block has {parsed}"
            ));
            hints.push("Fix the first two fields of line 4 or the block itself".into());
        }
        IoError::UnsupportedBondOrder { value, .. } => {
            hints.push(format!("Bond type {value} cannot be drawn directly"));
            hints.push("Kekulize the structure so aromatic bonds become 1/2".into());
            hints.push("Mark aromatic rings with --ring 1,2,3,4,5,6:ar".into());
        }
        IoError::Json(_) => {
            hints.push("Serializing the drawing failed".into());
            hints.push("Check that every coordinate is finite".into());
        }
    }
}

fn draw_hints(err: &mol_sketch::DrawError, hints: &mut Vec<String>) {
    use mol_sketch::DrawError;

    match err {
        DrawError::Topology(e) => topology_hints(e, hints),
        DrawError::StyleParse(_) => {
            hints.push("The --style file is not a valid drawing style".into());
            hints.push("Only keys present in the default style are accepted".into());
            hints.push("Groups are [layout], [bonds], [atoms], [brackets], [title], ...".into());
        }
    }
}

fn topology_hints(err: &TopologyError, hints: &mut Vec<String>) {
    match err {
        TopologyError::EmptyMolecule => {
            hints.push("The input has no atoms".into());
            hints.push("Verify the file is not empty or truncated".into());
        }
        TopologyError::InvalidRing { .. } => {
            hints.push("A --ring lists an atom twice or an atom that does not exist".into());
            hints.push("Ring atoms are 1-based MOL atom numbers".into());
        }
        TopologyError::InvalidRepeatUnit { .. } => {
            hints.push("An SRU S-group is malformed".into());
            hints.push("Check the SAL, SBL and SDI lines of the group".into());
        }
        TopologyError::InvalidBond { .. } => {
            hints.push("A bond joins an atom to itself or to a missing atom".into());
        }
        TopologyError::UnknownAtom { .. }
        | TopologyError::UnknownBond { .. }
        | TopologyError::PositionCount { .. } => {
            hints.push("An edit referenced an entity outside the molecule".into());
        }
    }
}

fn std_io_hints(source: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".into());
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the file".into());
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::InvalidData => {
            hints.push("The file is not valid UTF-8 text".into());
        }
        ErrorKind::BrokenPipe => {
            hints.push("Output consumer terminated early".into());
            hints.push("This may occur when piping to commands like `head`".into());
        }
        _ => {
            hints.push("I/O operation failed".into());
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}

fn fallback_hints(err: &Error, hints: &mut Vec<String>) {
    let text = err
        .chain()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase();

    if text.contains("terminal") || text.contains("stdin") {
        hints.push("Provide input via -i/--input or pipe a MOL file to stdin".into());
    } else if text.contains("out of range") {
        hints.push("Highlight numbers are 1-based".into());
        hints.push("Use `msketch inspect` to list atoms and bonds".into());
    }
}
