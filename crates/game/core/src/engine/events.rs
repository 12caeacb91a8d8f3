use crate::state::{LevelId, Position};

/// Notable things that happened while a turn was resolved.
///
/// Narration for players goes to the level's event log; these values are for
/// programmatic observers such as the runtime's event bus.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    Attacked {
        attacker: String,
        defender: String,
        damage: i32,
    },
    MonsterSlain {
        level: LevelId,
        position: Position,
        name: String,
    },
    PlayerDied {
        killer: String,
        turn: u64,
    },
    DoorOpened {
        level: LevelId,
        position: Position,
    },
    LevelChanged {
        from: LevelId,
        to: LevelId,
    },
    TurnCompleted {
        turn: u64,
    },
}
