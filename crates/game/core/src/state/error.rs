//! Level and world construction errors.
//!
//! Every variant here describes malformed content detected while building the
//! world, so all of them are fatal: nothing at runtime can repair them.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{LevelId, Position};

/// Errors raised while decoding a level from its symbol rows.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelError {
    /// A symbol that is neither a tile nor an entity marker.
    #[error("unknown symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        symbol: char,
        /// 1-based line number in the level text.
        row: usize,
        /// 1-based character column in the level text.
        column: usize,
    },

    #[error("level has no rows")]
    Empty,

    #[error("second player start at {second}, first was at {first}")]
    DuplicatePlayerStart { first: Position, second: Position },
}

impl GameError for LevelError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use LevelError::*;
        match self {
            UnknownSymbol { .. } => "LEVEL_UNKNOWN_SYMBOL",
            Empty => "LEVEL_EMPTY",
            DuplicatePlayerStart { .. } => "LEVEL_DUPLICATE_PLAYER_START",
        }
    }
}

/// Errors raised while assembling levels into a world.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorldError {
    #[error("level {0} is not loaded")]
    MissingLevel(LevelId),

    #[error("level {0} has no player start")]
    MissingPlayerStart(LevelId),

    /// A stair endpoint lies outside its level or on an impassable cell.
    #[error("invalid stair endpoint {position} on level {level}")]
    InvalidStairs { level: LevelId, position: Position },
}

impl GameError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use WorldError::*;
        match self {
            MissingLevel(_) => "WORLD_MISSING_LEVEL",
            MissingPlayerStart(_) => "WORLD_MISSING_PLAYER_START",
            InvalidStairs { .. } => "WORLD_INVALID_STAIRS",
        }
    }
}
