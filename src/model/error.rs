//! Structural validation errors raised while building a [`Molecule`](super::molecule::Molecule).
//!
//! These are fatal to a drawing pass: a malformed topology aborts the pass
//! and the message names the first inconsistency found. Geometric
//! degeneracies (zero-length bonds, undersized rings) are not errors; they
//! are recovered locally and reported as [`Diagnostic`](super::diagnostic::Diagnostic)s.

use thiserror::Error;

/// Errors found while validating a [`Topology`](super::topology::Topology).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    /// The topology contains no atoms.
    #[error("molecule is empty: at least one atom is required")]
    EmptyMolecule,

    /// A bond references a missing atom or joins an atom to itself.
    #[error("invalid bond {index} between atoms {i} and {j}: {detail}")]
    InvalidBond {
        /// Bond index.
        index: usize,
        /// First atom index.
        i: usize,
        /// Second atom index.
        j: usize,
        /// Description of the problem.
        detail: String,
    },

    /// A ring references a missing atom or repeats a member.
    #[error("invalid ring {index}: {detail}")]
    InvalidRing {
        /// Ring index.
        index: usize,
        /// Description of the problem.
        detail: String,
    },

    /// A repeat unit references missing atoms or bonds, or carries a
    /// malformed bracket description.
    #[error("invalid repeat unit {index}: {detail}")]
    InvalidRepeatUnit {
        /// Repeat unit index.
        index: usize,
        /// Description of the problem.
        detail: String,
    },

    /// An atom index passed to a mutator does not exist.
    #[error("atom {index} does not exist (molecule has {count} atoms)")]
    UnknownAtom {
        /// Requested atom index.
        index: usize,
        /// Number of atoms in the molecule.
        count: usize,
    },

    /// A bond index passed to a mutator does not exist.
    #[error("bond {index} does not exist (molecule has {count} bonds)")]
    UnknownBond {
        /// Requested bond index.
        index: usize,
        /// Number of bonds in the molecule.
        count: usize,
    },

    /// A replacement coordinate buffer does not match the atom count.
    #[error("coordinate buffer has {found} positions but the molecule has {expected} atoms")]
    PositionCount {
        /// Number of atoms in the molecule.
        expected: usize,
        /// Number of positions supplied.
        found: usize,
    },
}

impl TopologyError {
    /// Creates an [`InvalidBond`](TopologyError::InvalidBond) error.
    pub fn invalid_bond(index: usize, i: usize, j: usize, details: impl Into<String>) -> Self {
        Self::InvalidBond {
            index,
            i,
            j,
            detail: details.into(),
        }
    }

    /// Creates an [`InvalidRing`](TopologyError::InvalidRing) error.
    pub fn invalid_ring(index: usize, details: impl Into<String>) -> Self {
        Self::InvalidRing {
            index,
            detail: details.into(),
        }
    }

    /// Creates an [`InvalidRepeatUnit`](TopologyError::InvalidRepeatUnit) error.
    pub fn invalid_repeat_unit(index: usize, details: impl Into<String>) -> Self {
        Self::InvalidRepeatUnit {
            index,
            detail: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_entity() {
        let err = TopologyError::invalid_bond(3, 1, 1, "bond joins an atom to itself");
        assert_eq!(
            err.to_string(),
            "invalid bond 3 between atoms 1 and 1: bond joins an atom to itself"
        );

        let err = TopologyError::invalid_ring(0, "atom 9 out of range");
        assert_eq!(err.to_string(), "invalid ring 0: atom 9 out of range");

        let err = TopologyError::PositionCount {
            expected: 4,
            found: 3,
        };
        assert!(err.to_string().contains("3 positions"));
    }
}
