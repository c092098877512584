//! Reading molecules from MOL files and writing drawings as JSON.

use std::fmt;

pub mod error;
pub mod util;

/// MOL V2000 connection tables.
pub mod mol {
    mod reader;

    pub use reader::read;
}

/// JSON dump of a [`Drawing`](crate::Drawing) for an external renderer.
pub mod json {
    mod writer;

    pub use writer::write;
}

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Mol,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Mol => write!(f, "MOL"),
            Format::Json => write!(f, "JSON"),
        }
    }
}
