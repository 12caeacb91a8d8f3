//! Error classification shared by every game-core error type.
//!
//! Each concern keeps its own error enum next to the code it validates
//! (`LevelError` beside level decoding, `MoveError` beside movement, and so
//! on). What they share is a severity that tells the caller how far the
//! failure reaches: a rejected action leaves the turn intact, while broken
//! content stops the world from being built at all.

use core::fmt;

/// How far a failure reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The action did not happen this time but may succeed later, e.g. the
    /// actor is short on action points or the cell is taken.
    Recoverable,
    /// The command itself makes no sense here, e.g. interacting with bare floor.
    Validation,
    /// The engine reached a state it should have ruled out.
    Internal,
    /// Level or world content is malformed; nothing can be simulated.
    Fatal,
}

impl ErrorSeverity {
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Whether the failure points at a bug or broken content rather than
    /// at the player's choice.
    pub const fn is_defect(self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        })
    }
}

/// Implemented by every error the core returns.
pub trait GameError: fmt::Display + fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable upper-case identifier of the variant, e.g. `MOVE_BLOCKED`.
    fn error_code(&self) -> &'static str;
}
