use crate::action::ActionTransition;
use crate::combat::resolve_attack;
use crate::config::GameConfig;
use crate::engine::GameEvent;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position, World};

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractError {
    #[error("target {target} is not next to the player")]
    NotAdjacent { target: Position },

    #[error("nothing to interact with at {target}")]
    NothingToInteract { target: Position },

    #[error("interacting needs {required} AP, only {available} available")]
    InsufficientActionPoints { required: f64, available: f64 },
}

impl GameError for InteractError {
    fn severity(&self) -> ErrorSeverity {
        use InteractError::*;
        match self {
            NotAdjacent { .. } | NothingToInteract { .. } => ErrorSeverity::Validation,
            InsufficientActionPoints { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use InteractError::*;
        match self {
            NotAdjacent { .. } => "INTERACT_NOT_ADJACENT",
            NothingToInteract { .. } => "INTERACT_NOTHING",
            InsufficientActionPoints { .. } => "INTERACT_INSUFFICIENT_AP",
        }
    }
}

/// What the player does to an adjacent cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Interaction {
    OpenDoor,
    Attack,
}

/// Opens an adjacent closed door or attacks an adjacent monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractAction {
    pub target: Position,
}

impl InteractAction {
    pub fn new(target: Position) -> Self {
        Self { target }
    }

    /// Monsters take precedence over the terrain they stand on.
    fn interaction(&self, world: &World) -> Option<Interaction> {
        let level = world.current_level();
        if level.is_occupied(self.target) {
            Some(Interaction::Attack)
        } else if level.grid.tile(self.target).is_closed_door() {
            Some(Interaction::OpenDoor)
        } else {
            None
        }
    }

    /// True if this target has something the player can act on.
    pub fn is_applicable(&self, world: &World) -> bool {
        self.interaction(world).is_some()
    }
}

impl ActionTransition for InteractAction {
    type Error = InteractError;

    fn cost(&self, world: &World, config: &GameConfig) -> f64 {
        match self.interaction(world) {
            Some(Interaction::Attack) => config.attack_cost,
            Some(Interaction::OpenDoor) => config.door_open_cost,
            None => 0.0,
        }
    }

    fn pre_validate(&self, world: &World, config: &GameConfig) -> Result<(), Self::Error> {
        if !world.player().position.is_adjacent(self.target) {
            return Err(InteractError::NotAdjacent {
                target: self.target,
            });
        }
        if self.interaction(world).is_none() {
            return Err(InteractError::NothingToInteract {
                target: self.target,
            });
        }

        let required = self.cost(world, config);
        let ap = world.player().action_points;
        if !ap.can_afford(required) {
            return Err(InteractError::InsufficientActionPoints {
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
        let interaction = self
            .interaction(world)
            .ok_or(InteractError::NothingToInteract {
                target: self.target,
            })?;
        let required = self.cost(world, config);
        let level_id = world.current_id().clone();
        let (level, player) = world.parts_mut();
        let available = player.action_points.value();
        let unaffordable = InteractError::InsufficientActionPoints {
            required,
            available,
        };

        match interaction {
            Interaction::OpenDoor => {
                if !player.action_points.spend(required) {
                    return Err(unaffordable);
                }
                if let Some(tile) = level.grid.tile_mut(self.target) {
                    tile.open_door();
                }
                events.push(GameEvent::DoorOpened {
                    level: level_id,
                    position: self.target,
                });
            }
            Interaction::Attack => {
                let monster = level
                    .monsters
                    .get_mut(&self.target)
                    .ok_or(InteractError::NothingToInteract {
                        target: self.target,
                    })?;
                let outcome = resolve_attack(player, monster, required).ok_or(unaffordable)?;
                events.push(GameEvent::Attacked {
                    attacker: player.name.clone(),
                    defender: monster.name.clone(),
                    damage: outcome.damage,
                });
                level.events.push(outcome.narration);

                if outcome.defender_defeated
                    && let Some(slain) = level.slay_monster(self.target)
                {
                    events.push(GameEvent::MonsterSlain {
                        level: level_id,
                        position: self.target,
                        name: slain.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ActionPoints, Level, LevelId, TileKind};

    fn world(rows: &[&str]) -> World {
        let config = GameConfig::default();
        let decoded = Level::from_symbols("test", rows, &config).unwrap();
        World::new([decoded], &LevelId::new("test"), &config).unwrap()
    }

    fn run(world: &mut World, target: Position) -> Result<Vec<GameEvent>, InteractError> {
        let config = GameConfig::default();
        let action = InteractAction::new(target);
        let mut events = Vec::new();
        action.pre_validate(world, &config)?;
        action.apply(world, &config, &mut events)?;
        action.post_validate(world, &config)?;
        Ok(events)
    }

    #[test]
    fn opening_a_door_costs_ap_and_makes_it_passable() {
        let mut world = world(&["@|."]);
        world.player_mut().action_points = ActionPoints::new(1.0);
        let events = run(&mut world, Position::new(1, 0)).unwrap();

        let door = world.current_level().grid.tile(Position::new(1, 0));
        assert_eq!(door.kind(), TileKind::Door { open: true });
        assert!(door.is_passable());
        assert_eq!(world.player().action_points.value(), 0.0);
        assert!(matches!(events.as_slice(), [GameEvent::DoorOpened { .. }]));
    }

    #[test]
    fn attacking_narrates_and_slays_at_zero() {
        let mut world = world(&["@R"]);
        world.player_mut().action_points = ActionPoints::new(2.0);
        let rat = Position::new(1, 0);

        run(&mut world, rat).unwrap();
        assert_eq!(world.current_level().monster_at(rat).map(|m| m.hitpoints), Some(2));
        assert_eq!(
            world.current_level().events.latest(),
            Some("meds attacked Rat 1 for 3 damage")
        );

        let events = run(&mut world, rat).unwrap();
        assert!(world.current_level().monster_at(rat).is_none());
        assert!(world.current_level().grid.tile(rat).is_blood_stained());
        assert_eq!(world.current_level().events.latest(), Some("Rat 1 died"));
        assert!(
            events
                .iter()
                .any(|event| matches!(event, GameEvent::MonsterSlain { name, .. } if name == "Rat 1"))
        );
    }

    #[test]
    fn far_or_empty_targets_are_rejected() {
        let mut world = world(&["@.|"]);
        world.player_mut().action_points = ActionPoints::new(1.0);
        assert_eq!(
            run(&mut world, Position::new(2, 0)),
            Err(InteractError::NotAdjacent {
                target: Position::new(2, 0)
            })
        );
        assert_eq!(
            run(&mut world, Position::new(1, 0)),
            Err(InteractError::NothingToInteract {
                target: Position::new(1, 0)
            })
        );
        assert_eq!(world.player().action_points.value(), 1.0);
    }

    #[test]
    fn broke_player_cannot_attack() {
        let mut world = world(&["@S"]);
        world.player_mut().action_points = ActionPoints::new(0.5);
        let err = run(&mut world, Position::new(1, 0)).unwrap_err();
        assert!(matches!(err, InteractError::InsufficientActionPoints { .. }));
        assert_eq!(
            world.current_level().monster_at(Position::new(1, 0)).map(|m| m.hitpoints),
            Some(7)
        );
    }
}
