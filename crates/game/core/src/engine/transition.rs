//! Drives a player action through its validation and mutation phases.

use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::state::World;

use super::GameEvent;
use super::errors::{TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the world and record events
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
pub(super) fn drive_transition<T>(
    transition: &T,
    world: &mut World,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> Result<(), TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(world, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    transition
        .apply(world, config, events)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(world, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(())
}
