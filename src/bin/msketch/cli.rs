use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "msketch",
    about = "2D chemical structure diagram geometry",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve a MOL file into drawing primitives (JSON)
    #[command(visible_alias = "d")]
    Draw(DrawArgs),

    /// Print bond alignments and the fitted viewport
    #[command(visible_alias = "i")]
    Inspect(InspectArgs),
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Input MOL file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Rings, title and style shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Structure")]
pub struct StructureOptions {
    /// Ring as 1-based atom numbers, `:ar` marks it aromatic (e.g. 1,2,3,4,5,6:ar), repeatable
    #[arg(long = "ring", value_name = "ATOMS", action = clap::ArgAction::Append)]
    pub rings: Vec<RingSpec>,

    /// Title printed under or over the structure
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Drawing style overrides (TOML file)
    #[arg(long, value_name = "FILE")]
    pub style: Option<PathBuf>,
}

#[derive(Args)]
#[command(next_help_heading = "Annotations")]
pub struct AnnotationOptions {
    /// Highlight a ring by its 1-based --ring position, repeatable
    #[arg(id = "highlight_rings", long = "highlight-ring", value_name = "N", action = clap::ArgAction::Append)]
    pub rings: Vec<usize>,

    /// Highlight an atom by its 1-based MOL number, repeatable
    #[arg(long = "highlight-atom", value_name = "N", action = clap::ArgAction::Append)]
    pub atoms: Vec<usize>,

    /// Highlight a bond by its 1-based MOL number, repeatable
    #[arg(long = "highlight-bond", value_name = "N", action = clap::ArgAction::Append)]
    pub bonds: Vec<usize>,

    /// Label carbon atoms
    #[arg(long)]
    pub show_carbons: bool,

    /// Draw atom indices
    #[arg(long)]
    pub atom_numbers: bool,

    /// Draw bond indices
    #[arg(long)]
    pub bond_numbers: bool,

    /// Draw ring indices
    #[arg(long)]
    pub ring_numbers: bool,

    /// Draw bond direction, perpendicular and bisector arrows
    #[arg(long)]
    pub debug: bool,
}

#[derive(Args)]
pub struct DrawArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Output JSON file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub structure: StructureOptions,

    #[command(flatten)]
    pub annotations: AnnotationOptions,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub structure: StructureOptions,
}

/// A `--ring` argument, converted to 0-based atom indices.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSpec {
    pub atoms: Vec<usize>,
    pub aromatic: bool,
}

impl FromStr for RingSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (list, aromatic) = match s.rsplit_once(':') {
            Some((list, flag)) if flag.eq_ignore_ascii_case("ar") => (list, true),
            Some((_, flag)) => return Err(format!("unknown ring flag '{flag}' (use :ar)")),
            None => (s, false),
        };
        let atoms = list
            .split(',')
            .map(|t| {
                let t = t.trim();
                match t.parse::<usize>() {
                    Ok(0) => Err("atom numbers are 1-based".to_string()),
                    Ok(n) => Ok(n - 1),
                    Err(_) => Err(format!("invalid atom number '{t}'")),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        if atoms.len() < 3 {
            return Err(format!("a ring needs at least 3 atoms, got {}", atoms.len()));
        }
        Ok(Self { atoms, aromatic })
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
