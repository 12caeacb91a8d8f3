use crate::action::{Command, InteractAction, MoveAction, TravelAction};

use super::monster::run_monsters;
use super::transition::drive_transition;
use super::{GameEngine, GameEvent, PlayerActionError, TurnOutcome, TurnReport};

/// Turn sequencing methods for GameEngine.
impl<'a> GameEngine<'a> {
    /// Resolves one turn-advancing command.
    ///
    /// Order: bump the turn counter, clear debug highlights, accrue the
    /// player's AP, resolve the player's command, run the monsters, then
    /// recompute visibility from wherever the player ended up.
    pub(super) fn run_turn(&mut self, command: &Command) -> TurnReport {
        let turn = self.world.advance_turn();
        self.world.current_level_mut().debug.clear();
        self.world.player_mut().accrue_action_points();

        let mut events = Vec::new();
        let player_action = self.resolve_player(command, &mut events);

        run_monsters(self.world, self.config, &mut events);
        self.world.refresh_visibility(self.config.sight_shape);
        events.push(GameEvent::TurnCompleted { turn });

        TurnReport {
            outcome: TurnOutcome::Advanced,
            turn,
            events,
            player_action,
        }
    }

    fn resolve_player(
        &mut self,
        command: &Command,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), PlayerActionError> {
        match *command {
            Command::Move(direction) => {
                let step = MoveAction::new(direction);
                let destination = step.destination(self.world);
                let bump = InteractAction::new(destination);
                if bump.is_applicable(self.world) {
                    drive_transition(&bump, self.world, self.config, events)
                        .map_err(PlayerActionError::Interact)
                } else {
                    drive_transition(&step, self.world, self.config, events)
                        .map_err(PlayerActionError::Move)
                }
            }
            Command::Interact { target } => {
                let interact = InteractAction::new(target);
                let adjacent = self.world.player().position.is_adjacent(target);
                let passable = self.world.current_level().grid.is_passable(target);
                if (adjacent && interact.is_applicable(self.world)) || !passable {
                    drive_transition(&interact, self.world, self.config, events)
                        .map_err(PlayerActionError::Interact)
                } else {
                    drive_transition(&TravelAction::new(target), self.world, self.config, events)
                        .map_err(PlayerActionError::Travel)
                }
            }
            Command::NoOp => Ok(()),
            Command::Inspect { .. } | Command::Quit | Command::DetachConsumer { .. } => Ok(()),
        }
    }
}
