//! Error types for the player action pipeline.

use crate::action::{InteractError, MoveError, TravelError};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// A player command that could not be carried out.
///
/// These never abort the turn: monsters still act and visibility is still
/// recomputed. The error is handed back in the turn report.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerActionError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<MoveError>),

    #[error("interact action failed: {0}")]
    Interact(TransitionPhaseError<InteractError>),

    #[error("travel action failed: {0}")]
    Travel(TransitionPhaseError<TravelError>),
}

impl PlayerActionError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            PlayerActionError::Move(err) => err.phase,
            PlayerActionError::Interact(err) => err.phase,
            PlayerActionError::Travel(err) => err.phase,
        }
    }
}

impl GameError for PlayerActionError {
    fn severity(&self) -> ErrorSeverity {
        // Anything that slips past pre-validation means the checks and the
        // mutation disagree.
        if self.phase() != TransitionPhase::PreValidate {
            return ErrorSeverity::Internal;
        }
        match self {
            PlayerActionError::Move(err) => err.error.severity(),
            PlayerActionError::Interact(err) => err.error.severity(),
            PlayerActionError::Travel(err) => err.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            PlayerActionError::Move(err) => err.error.error_code(),
            PlayerActionError::Interact(err) => err.error.error_code(),
            PlayerActionError::Travel(err) => err.error.error_code(),
        }
    }
}
