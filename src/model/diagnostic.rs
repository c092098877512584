use serde::Serialize;
use std::fmt;

/// Entity a [`Diagnostic`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Molecule,
    Atom(usize),
    Bond(usize),
    Ring(usize),
    RepeatUnit(usize),
    Bracket(usize),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Molecule => write!(f, "molecule"),
            Entity::Atom(i) => write!(f, "atom {i}"),
            Entity::Bond(i) => write!(f, "bond {i}"),
            Entity::Ring(i) => write!(f, "ring {i}"),
            Entity::RepeatUnit(i) => write!(f, "repeat unit {i}"),
            Entity::Bracket(i) => write!(f, "bracket {i}"),
        }
    }
}

/// A recovered geometric problem: the entity was degraded or skipped
/// instead of failing the whole pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub entity: Entity,
    pub message: String,
}

impl Diagnostic {
    /// Builds a diagnostic and reports it through `log::warn!`.
    pub fn warn(entity: Entity, message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("{entity}: {message}");
        Self { entity, message }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.entity, self.message)
    }
}
