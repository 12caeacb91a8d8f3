use std::ops::{Deref, DerefMut};

use crate::config::PlayerTemplate;
use crate::env::MonsterKind;

use super::{EntityId, Position};

/// Fractional action-point balance.
///
/// Grows by an actor's speed every turn and shrinks by the cost of each action.
/// The balance is never negative: [`ActionPoints::spend`] refuses to overdraw.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionPoints(f64);

impl ActionPoints {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f64) -> Self {
        Self(value.max(0.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn accrue(&mut self, speed: f64) {
        self.0 += speed.max(0.0);
    }

    pub fn can_afford(self, cost: f64) -> bool {
        self.0 >= cost
    }

    /// Deducts `cost` if the balance covers it. Returns false, leaving the
    /// balance untouched, otherwise.
    pub fn spend(&mut self, cost: f64) -> bool {
        if self.can_afford(cost) {
            self.0 -= cost;
            true
        } else {
            false
        }
    }
}

/// Combat-capable entity placed on the grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    pub symbol: char,
    pub position: Position,
    pub hitpoints: i32,
    /// Damage dealt per attack.
    pub strength: i32,
    /// Action points regenerated per turn.
    pub speed: f64,
    pub sight_range: u32,
    pub action_points: ActionPoints,
    pub alive: bool,
}

impl Character {
    pub fn is_defeated(&self) -> bool {
        self.hitpoints <= 0
    }

    /// Adds one turn's worth of action points. The dead do not accrue.
    pub fn accrue_action_points(&mut self) {
        if self.alive {
            self.action_points.accrue(self.speed);
        }
    }
}

/// The single player-controlled character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub character: Character,
}

impl Player {
    pub fn from_template(template: &PlayerTemplate, position: Position) -> Self {
        Self {
            character: Character {
                id: EntityId::PLAYER,
                name: template.name.clone(),
                symbol: '@',
                position,
                hitpoints: template.hitpoints,
                strength: template.strength,
                speed: template.speed,
                sight_range: template.sight_range,
                action_points: ActionPoints::ZERO,
                alive: true,
            },
        }
    }

    /// Human-readable stat summary, one line per stat.
    pub fn stat_lines(&self) -> Vec<String> {
        let c = &self.character;
        vec![
            format!("Name: {}", c.name),
            format!("HP: {}", c.hitpoints),
            format!("Str: {}", c.strength),
            format!("Spd: {}", c.speed as i64),
            format!("AP: {}", c.action_points.value() as i64),
            format!("Pos: {}", c.position),
        ]
    }
}

impl Deref for Player {
    type Target = Character;

    fn deref(&self) -> &Character {
        &self.character
    }
}

impl DerefMut for Player {
    fn deref_mut(&mut self) -> &mut Character {
        &mut self.character
    }
}

/// Hostile character with a cached route to the player.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub character: Character,
    pub kind: MonsterKind,
    /// Most recent route to the player, starting at the monster's own cell.
    pub path: Vec<Position>,
}

impl Monster {
    pub fn spawn(kind: MonsterKind, id: EntityId, name: String, position: Position) -> Self {
        let template = kind.template();
        Self {
            character: Character {
                id,
                name,
                symbol: template.symbol,
                position,
                hitpoints: template.hitpoints,
                strength: template.strength,
                speed: template.speed,
                sight_range: template.sight_range,
                action_points: ActionPoints::ZERO,
                alive: true,
            },
            kind,
            path: Vec::new(),
        }
    }

    /// True when the cached path no longer starts here or no longer ends at `target`.
    pub fn path_is_stale(&self, target: Position) -> bool {
        self.path.first() != Some(&self.character.position) || self.path.last() != Some(&target)
    }
}

impl Deref for Monster {
    type Target = Character;

    fn deref(&self) -> &Character {
        &self.character
    }
}

impl DerefMut for Monster {
    fn deref_mut(&mut self) -> &mut Character {
        &mut self.character
    }
}
