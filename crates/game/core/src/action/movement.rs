use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::engine::GameEvent;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Direction, LevelId, Position, World, WorldError};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("destination {destination} is blocked")]
    Blocked { destination: Position },

    #[error("destination {destination} is occupied")]
    Occupied { destination: Position },

    #[error("moving needs {required} AP, only {available} available")]
    InsufficientActionPoints { required: f64, available: f64 },

    #[error("stairs lead to {position} on {level}, which is occupied")]
    StairsBlocked { level: LevelId, position: Position },

    #[error("stairs are broken: {0}")]
    Stairs(#[from] WorldError),

    #[error("player shares {position} with a monster")]
    PlayerOverlap { position: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        use MoveError::*;
        match self {
            Blocked { .. }
            | Occupied { .. }
            | InsufficientActionPoints { .. }
            | StairsBlocked { .. } => ErrorSeverity::Recoverable,
            Stairs(_) => ErrorSeverity::Fatal,
            PlayerOverlap { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use MoveError::*;
        match self {
            Blocked { .. } => "MOVE_BLOCKED",
            Occupied { .. } => "MOVE_OCCUPIED",
            InsufficientActionPoints { .. } => "MOVE_INSUFFICIENT_AP",
            StairsBlocked { .. } => "MOVE_STAIRS_BLOCKED",
            Stairs(_) => "MOVE_STAIRS_BROKEN",
            PlayerOverlap { .. } => "MOVE_PLAYER_OVERLAP",
        }
    }
}

/// One orthogonal step of the player.
///
/// Stepping onto a linked stairs cell also carries the player to the linked level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub direction: Direction,
}

impl MoveAction {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    pub fn destination(&self, world: &World) -> Position {
        world.player().position.step(self.direction)
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;

    fn cost(&self, world: &World, _config: &GameConfig) -> f64 {
        world
            .current_level()
            .grid
            .tile(self.destination(world))
            .movement_cost() as f64
    }

    fn pre_validate(&self, world: &World, config: &GameConfig) -> Result<(), Self::Error> {
        let level = world.current_level();
        let destination = self.destination(world);

        if !level.grid.is_passable(destination) {
            return Err(MoveError::Blocked { destination });
        }
        if level.is_occupied(destination) {
            return Err(MoveError::Occupied { destination });
        }

        let required = self.cost(world, config);
        let available = world.player().action_points.value();
        if !world.player().action_points.can_afford(required) {
            return Err(MoveError::InsufficientActionPoints {
                required,
                available,
            });
        }

        if let Some(link) = level.stairs.get(&destination) {
            let target = world
                .level(&link.level)
                .ok_or_else(|| WorldError::MissingLevel(link.level.clone()))?;
            if !target.can_walk(link.position) {
                return Err(MoveError::StairsBlocked {
                    level: link.level.clone(),
                    position: link.position,
                });
            }
        }

        Ok(())
    }

    fn apply(
        &self,
        world: &mut World,
        config: &GameConfig,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), Self::Error> {
        let destination = self.destination(world);
        let required = self.cost(world, config);
        let player = world.player_mut();
        let available = player.action_points.value();
        if !player.action_points.spend(required) {
            return Err(MoveError::InsufficientActionPoints {
                required,
                available,
            });
        }
        player.position = destination;

        if let Some(link) = world.current_level().stairs.get(&destination).cloned() {
            let from = world.current_id().clone();
            world.travel(&link, config.sight_shape)?;
            let narration = format!("{} arrived on {}", world.player().name, link.level);
            world.current_level_mut().events.push(narration);
            events.push(GameEvent::LevelChanged {
                from,
                to: link.level,
            });
        }

        Ok(())
    }

    fn post_validate(&self, world: &World, _config: &GameConfig) -> Result<(), Self::Error> {
        let position = world.player().position;
        if world.current_level().is_occupied(position) {
            return Err(MoveError::PlayerOverlap { position });
        }
        Ok(())
    }
}
