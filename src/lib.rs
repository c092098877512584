//! A pure Rust geometry engine for 2D chemical structure diagrams.
//! It turns a molecular graph with seed coordinates into resolved drawing
//! primitives: bond strokes, wedges, atom labels, ring highlights, polymer
//! brackets and a titled viewport, ready for any vector renderer.
//!
//! # Features
//!
//! - **Bond geometry**: Offset double bonds that point into rings or toward
//!   the busier neighbour, centred double bonds, trimmed triple bonds, and
//!   solid or hashed stereo wedges
//! - **Atom labels**: Heteroatom symbols with implicit hydrogens placed on
//!   the open side of the atom
//! - **Ring highlights**: Inset polygons for selected rings
//! - **Polymer brackets**: Curved bracket pairs across the crossing bonds
//!   of a repeat unit, with subscript and superscript labels
//! - **Viewport scaling**: Automatic window fitting with a global scale so
//!   line widths and fonts keep their apparent size
//! - **Styling**: A TOML style with per-entity overrides
//! - **I/O**: MOL V2000 input and a JSON primitive dump
//!
//! # Quick Start
//!
//! The main entry point is the [`draw()`] function, which takes a [`Topology`]
//! and a [`DrawConfig`] and produces a [`Drawing`]:
//!
//! ```
//! use mol_sketch::{BondOrder, DrawConfig, DrawError, Element, Primitive, Topology};
//!
//! // Acetic acid skeleton: CH3-C(=O)-OH
//! let mut topology = Topology::new();
//! let c1 = topology.add_atom(Element::C, [0.000, 0.000]);
//! let c2 = topology.add_atom(Element::C, [0.866, 0.500]);
//! let o1 = topology.add_atom(Element::O, [0.866, 1.500]);
//! let o2 = topology.add_atom(Element::O, [1.732, 0.000]);
//! topology.add_bond(c1, c2, BondOrder::Single);
//! topology.add_bond(c2, o1, BondOrder::Double);
//! topology.add_bond(c2, o2, BondOrder::Single);
//!
//! let drawing = mol_sketch::draw(&topology, &DrawConfig::default(), Some("acetic acid"))?;
//!
//! // Carbons are implicit; both oxygens are labelled, then the title.
//! let texts: Vec<&str> = drawing.texts().collect();
//! assert_eq!(texts.len(), 3);
//! assert!(texts.contains(&"O"));
//! assert_eq!(texts.last(), Some(&"acetic acid"));
//!
//! // Two single bonds plus the two strokes of the double bond.
//! let strokes = drawing
//!     .primitives
//!     .iter()
//!     .filter(|p| matches!(p, Primitive::Polyline { .. }))
//!     .count();
//! assert_eq!(strokes, 4);
//! assert!(drawing.diagnostics.is_empty());
//! # Ok::<(), DrawError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: MOL reader and JSON writer
//! - [`draw()`] / [`render()`]: The drawing pass
//! - [`bond`], [`ring`], [`bracket`], [`label`], [`vector`]: The geometry
//!   resolvers each layer is built from
//! - [`DrawConfig`]: Style loaded from TOML
//!
//! # Data Types
//!
//! ## Input Structures
//!
//! - [`Topology`]: Atoms, bonds, rings and repeat units with 2D coordinates
//! - [`Element`], [`BondOrder`], [`BondStereo`]: Closed chemistry enums
//!
//! ## Molecule Model
//!
//! - [`Molecule`]: Validated graph over a shared coordinate buffer, with
//!   memoized bond frames, bisectors, centroids and alignments
//! - [`Atom`], [`Bond`], [`Ring`], [`Bracket`]: Index-linked entities
//! - [`Alignment`]: Side of an offset double bond
//!
//! ## Output Structures
//!
//! - [`Drawing`]: Viewport, ordered primitives and diagnostics
//! - [`Primitive`]: Polyline, polygon, marker or text
//! - [`Viewport`]: Axis ranges and global scale
//! - [`Diagnostic`]: A recoverable geometry problem tied to an entity

mod draw;
mod model;

pub mod io;

pub use model::atom::Atom;
pub use model::bond::{Bond, BondFrame};
pub use model::bracket::{Bracket, BracketPlacement};
pub use model::diagnostic::{Diagnostic, Entity};
pub use model::error::TopologyError;
pub use model::molecule::Molecule;
pub use model::ring::Ring;
pub use model::style::{
    AtomOverride, BondOverride, BracketOverride, Font, FontOverride, RingOverride, resolve,
};
pub use model::topology::{AtomRecord, BondRecord, RepeatUnitRecord, RingRecord, Topology};
pub use model::types::{
    Alignment, BondOrder, BondStereo, Element, ParseAlignmentError, ParseBondOrderError,
    ParseBondStereoError, ParseElementError, Point, Vector,
};

pub use draw::{bond, bracket, label, ring, vector};
pub use draw::{
    AtomStyle, BondStyle, BracketStyle, DebugStyle, DrawConfig, Drawing, HighlightStyle, Layer,
    LayoutStyle, NumberStyle, PathVertex, Placement, Primitive, RingHighlightStyle, ScriptStyle,
    TextAnchor, TitleLocation, TitleReserve, TitleStyle, Viewport, draw, get_default_style,
    load_style, render,
};

pub use draw::Error as DrawError;
