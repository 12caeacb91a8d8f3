//! Turn resolution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`World`]. It routes
//! each command to its action, drives actions through the transition phases,
//! runs the monster behavior pass, and recomputes visibility. Rejected player
//! actions never abort a turn; they are reported in the [`TurnReport`].

mod errors;
mod events;
mod line;
mod monster;
mod pathfinding;
mod transition;
mod turns;
mod visibility;

pub use errors::{PlayerActionError, TransitionPhase, TransitionPhaseError};
pub use events::GameEvent;
pub use line::Line;
pub use pathfinding::{Path, find_path};
pub use visibility::{can_see, compute_visibility, has_line_of_sight};

use crate::action::Command;
use crate::config::GameConfig;
use crate::state::World;

/// How the engine treated a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnOutcome {
    /// A full turn ran: player, monsters, visibility.
    Advanced,
    /// Handled without advancing the turn.
    Free,
    /// The player is dead; nothing changed.
    PlayerDead,
    /// A control command for whoever drives the engine.
    Control,
}

/// Everything that came out of executing one command.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    /// Turn counter after the command.
    pub turn: u64,
    pub events: Vec<GameEvent>,
    /// Why the player's own action did not happen, if it didn't.
    pub player_action: Result<(), PlayerActionError>,
}

impl TurnReport {
    fn untimed(outcome: TurnOutcome, turn: u64) -> Self {
        Self {
            outcome,
            turn,
            events: Vec::new(),
            player_action: Ok(()),
        }
    }

    pub fn player_died(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, GameEvent::PlayerDied { .. }))
    }
}

/// Game engine that turns commands into world transitions.
///
/// Borrowing the world for the duration of a command keeps every mutation on
/// the single path through [`GameEngine::execute`].
pub struct GameEngine<'a> {
    world: &'a mut World,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(world: &'a mut World, config: &'a GameConfig) -> Self {
        Self { world, config }
    }

    pub fn world(&self) -> &World {
        &*self.world
    }

    /// Executes a single command.
    pub fn execute(&mut self, command: &Command) -> TurnReport {
        let turn = self.world.turn();
        if command.is_control() {
            return TurnReport::untimed(TurnOutcome::Control, turn);
        }
        if !self.world.player().alive {
            return TurnReport::untimed(TurnOutcome::PlayerDead, turn);
        }

        match *command {
            Command::Inspect { target } => {
                let description = self.world.current_level().describe(target);
                self.world.current_level_mut().events.push(description);
                TurnReport::untimed(TurnOutcome::Free, turn)
            }
            _ => self.run_turn(command),
        }
    }
}
