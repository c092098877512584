//! Error types for the drawing pass.
//!
//! Only structural problems and style parsing failures are fatal. Geometric
//! degeneracies are recovered inside the resolvers and surface as
//! [`Diagnostic`](crate::Diagnostic)s on the
//! [`Drawing`](super::Drawing).

use crate::model::error::TopologyError;
use thiserror::Error;

/// Errors that can abort a drawing pass.
#[derive(Debug, Error)]
pub enum Error {
    /// The input topology failed validation.
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// A custom drawing style could not be parsed.
    #[error("failed to parse drawing style: {0}")]
    StyleParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_errors_pass_through_unchanged() {
        let err: Error = TopologyError::EmptyMolecule.into();
        assert_eq!(err.to_string(), TopologyError::EmptyMolecule.to_string());
        assert!(matches!(err, Error::Topology(TopologyError::EmptyMolecule)));
    }
}
