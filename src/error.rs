//! Error types for route validation and walking.

use thiserror::Error;

use crate::grid::Position;

/// Structural problems that make a diagram unwalkable.
///
/// Every error aborts the whole attempt; no partial route is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No `@` anywhere in the diagram.
    #[error("start marker '@' not found")]
    NoStart,

    /// More than one `@`.
    #[error("found {count} start markers '@', expected exactly one")]
    MultipleStart { count: usize },

    /// No `x` anywhere in the diagram.
    #[error("end marker 'x' not found")]
    NoEnd,

    /// More than one `x`, rejected only when a unique end is required.
    #[error("found {count} end markers 'x', expected exactly one")]
    MultipleEnd { count: usize },

    /// The start marker can be left in more than one direction.
    #[error("multiple starting paths from {position}")]
    MultipleStartingPaths { position: Position },

    /// More than one unvisited way to continue at a junction.
    #[error("fork at {position}: more than one way to continue")]
    Fork { position: Position },

    /// A `+` with nothing to turn into.
    #[error("fake turn at {position}: '+' has no perpendicular continuation")]
    FakeTurn { position: Position },

    /// The route stops before reaching the end marker.
    #[error("broken path at {position}: no way to continue")]
    BrokenPath { position: Position },

    /// The walk kept circling without reaching the end marker.
    #[error("route does not terminate: gave up at {position} after {limit} steps")]
    Loop { position: Position, limit: usize },

    /// A character outside the diagram alphabet, rejected in strict mode.
    #[error("unknown character {character:?} at {position}")]
    UnknownCharacter { character: char, position: Position },
}

/// Fieldless discriminant of [`RouteError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteErrorKind {
    NoStart,
    MultipleStart,
    NoEnd,
    MultipleEnd,
    MultipleStartingPaths,
    Fork,
    FakeTurn,
    BrokenPath,
    Loop,
    UnknownCharacter,
}

impl RouteError {
    pub fn kind(&self) -> RouteErrorKind {
        match self {
            RouteError::NoStart => RouteErrorKind::NoStart,
            RouteError::MultipleStart { .. } => RouteErrorKind::MultipleStart,
            RouteError::NoEnd => RouteErrorKind::NoEnd,
            RouteError::MultipleEnd { .. } => RouteErrorKind::MultipleEnd,
            RouteError::MultipleStartingPaths { .. } => RouteErrorKind::MultipleStartingPaths,
            RouteError::Fork { .. } => RouteErrorKind::Fork,
            RouteError::FakeTurn { .. } => RouteErrorKind::FakeTurn,
            RouteError::BrokenPath { .. } => RouteErrorKind::BrokenPath,
            RouteError::Loop { .. } => RouteErrorKind::Loop,
            RouteError::UnknownCharacter { .. } => RouteErrorKind::UnknownCharacter,
        }
    }

    /// The offending position, when the error is tied to one cell
    pub fn position(&self) -> Option<Position> {
        match self {
            RouteError::MultipleStartingPaths { position }
            | RouteError::Fork { position }
            | RouteError::FakeTurn { position }
            | RouteError::BrokenPath { position }
            | RouteError::Loop { position, .. }
            | RouteError::UnknownCharacter { position, .. } => Some(*position),
            RouteError::NoStart
            | RouteError::MultipleStart { .. }
            | RouteError::NoEnd
            | RouteError::MultipleEnd { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(RouteError::NoStart.to_string(), "start marker '@' not found");
        assert_eq!(
            RouteError::Fork {
                position: Position::new(2, 10)
            }
            .to_string(),
            "fork at row 2, column 10: more than one way to continue"
        );
        assert_eq!(
            RouteError::UnknownCharacter {
                character: '\t',
                position: Position::new(0, 3)
            }
            .to_string(),
            "unknown character '\\t' at row 0, column 3"
        );
    }

    #[test]
    fn test_kind_and_position() {
        let err = RouteError::BrokenPath {
            position: Position::new(1, 8),
        };
        assert_eq!(err.kind(), RouteErrorKind::BrokenPath);
        assert_eq!(err.position(), Some(Position::new(1, 8)));
        assert_eq!(RouteError::NoEnd.position(), None);
    }
}
