//! Molecular graph types consumed by the geometry engine.
//!
//! - [`topology`] – Plain input records (atoms, bonds, rings, repeat units)
//!   as produced by a parser or an external cheminformatics toolkit.
//! - [`molecule`] – The validated [`Molecule`](molecule::Molecule): a shared
//!   coordinate buffer plus index-linked entities with memoized geometry.
//! - [`atom`], [`bond`], [`ring`], [`bracket`] – The entities themselves.
//! - [`types`] – Elements, bond orders, stereo flags, alignments and the
//!   2D point/vector aliases.
//! - [`style`] – Per-entity style overrides.
//! - [`diagnostic`], [`error`] – Recoverable and fatal problem reports.
//!
//! Topology never changes after [`Molecule::from_topology`](molecule::Molecule::from_topology);
//! only positions, overrides and the caches derived from them do.

pub mod atom;
pub mod bond;
pub mod bracket;
pub mod diagnostic;
pub mod error;
pub mod molecule;
pub mod ring;
pub mod style;
pub mod topology;
pub mod types;
