use crate::config::GameConfig;
use crate::engine::GameEvent;
use crate::state::World;

/// Defines how a concrete player action mutates the world.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. Validation hooks
/// receive read-only access to the world and must stay side-effect free.
pub trait ActionTransition {
    type Error;

    /// Action points this action costs in the current world.
    fn cost(&self, world: &World, config: &GameConfig) -> f64;

    /// Validates pre-conditions using the world **before** mutation.
    fn pre_validate(&self, _world: &World, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action. Implementations may assume `pre_validate` passed.
    /// Notable side effects are appended to `events`.
    fn apply(
        &self,
        world: &mut World,
        config: &GameConfig,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), Self::Error>;

    /// Validates post-conditions using the world **after** mutation.
    fn post_validate(&self, _world: &World, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }
}
