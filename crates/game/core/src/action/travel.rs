use crate::action::{ActionTransition, MoveAction};
use crate::config::GameConfig;
use crate::engine::{GameEvent, find_path};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, World};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelError {
    #[error("player is already at {target}")]
    AlreadyThere { target: Position },

    #[error("no route to {target}")]
    Unreachable { target: Position },

    #[error("first step to {next} needs {required} AP, only {available} available")]
    InsufficientActionPoints {
        next: Position,
        required: f64,
        available: f64,
    },
}

impl GameError for TravelError {
    fn severity(&self) -> ErrorSeverity {
        use TravelError::*;
        match self {
            AlreadyThere { .. } => ErrorSeverity::Validation,
            Unreachable { .. } | InsufficientActionPoints { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use TravelError::*;
        match self {
            AlreadyThere { .. } => "TRAVEL_ALREADY_THERE",
            Unreachable { .. } => "TRAVEL_UNREACHABLE",
            InsufficientActionPoints { .. } => "TRAVEL_INSUFFICIENT_AP",
        }
    }
}

/// Point-and-click movement toward a distant cell.
///
/// Plans a route with the pathfinder and walks it one [`MoveAction`] at a time
/// while action points last. Each step re-checks occupancy, so a monster
/// stepping into the route stops the walk. Reaching linked stairs also stops it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelAction {
    pub target: Position,
}

impl TravelAction {
    pub fn new(target: Position) -> Self {
        Self { target }
    }

    fn route(&self, world: &World) -> Option<Vec<Position>> {
        find_path(
            &world.current_level().grid,
            world.player().position,
            self.target,
        )
        .map(|path| path.steps)
    }
}

impl ActionTransition for TravelAction {
    type Error = TravelError;

    /// Cost of the first step only; later steps are paid as they are taken.
    fn cost(&self, world: &World, _config: &GameConfig) -> f64 {
        self.route(world)
            .and_then(|steps| steps.get(1).copied())
            .map(|next| world.current_level().grid.tile(next).movement_cost() as f64)
            .unwrap_or(0.0)
    }

    fn pre_validate(&self, world: &World, config: &GameConfig) -> Result<(), Self::Error> {
        if world.player().position == self.target {
            return Err(TravelError::AlreadyThere {
                target: self.target,
            });
        }
        let steps = self.route(world).ok_or(TravelError::Unreachable {
            target: self.target,
        })?;
        let next = steps.get(1).copied().ok_or(TravelError::Unreachable {
            target: self.target,
        })?;

        let required = self.cost(world, config);
        let ap = world.player().action_points;
        if !ap.can_afford(required) {
            return Err(TravelError::InsufficientActionPoints {
                next,
                required,
                available: ap.value(),
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        world: &mut World,
        config: &GameConfig,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), Self::Error> {
        let steps = self.route(world).ok_or(TravelError::Unreachable {
            target: self.target,
        })?;
        let level = world.current_id().clone();

        for next in steps.into_iter().skip(1) {
            let Some(direction) = world.player().position.direction_to(next) else {
                break;
            };
            let step = MoveAction::new(direction);
            if step.pre_validate(world, config).is_err() {
                break;
            }
            if step.apply(world, config, events).is_err() {
                break;
            }
            if world.current_id() != &level {
                break;
            }
        }
        Ok(())
    }
}
