use std::collections::BTreeMap;

use crate::config::{GameConfig, SightShape};
use crate::engine::compute_visibility;
use crate::env::MonsterKind;

use super::{DecodedLevel, EntityId, Level, LevelId, Player, Position, StairLink, WorldError};

/// Registry of every loaded level, the active one, and the single player.
///
/// The active level is held apart from the others so it can always be borrowed
/// without a lookup; switching levels swaps it with one from the registry.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    current: Level,
    others: BTreeMap<LevelId, Level>,
    player: Player,
    turn: u64,
}

impl World {
    /// Assembles a world that starts on `start` at its `@` marker.
    ///
    /// Visibility is computed once so the first snapshot already shows the
    /// player's surroundings.
    pub fn new(
        levels: impl IntoIterator<Item = DecodedLevel>,
        start: &LevelId,
        config: &GameConfig,
    ) -> Result<Self, WorldError> {
        let mut others = BTreeMap::new();
        let mut starting = None;
        for decoded in levels {
            if decoded.level.id() == start {
                starting = Some(decoded);
            } else {
                others.insert(decoded.level.id().clone(), decoded.level);
            }
        }

        let DecodedLevel {
            level,
            player_start,
        } = starting.ok_or_else(|| WorldError::MissingLevel(start.clone()))?;
        let position = player_start.ok_or_else(|| WorldError::MissingPlayerStart(start.clone()))?;

        let mut world = Self {
            current: level,
            others,
            player: Player::from_template(&config.player, position),
            turn: 0,
        };
        world.refresh_visibility(config.sight_shape);
        Ok(world)
    }

    pub fn current_id(&self) -> &LevelId {
        self.current.id()
    }

    pub fn current_level(&self) -> &Level {
        &self.current
    }

    pub fn current_level_mut(&mut self) -> &mut Level {
        &mut self.current
    }

    pub fn level(&self, id: &LevelId) -> Option<&Level> {
        if self.current.id() == id {
            Some(&self.current)
        } else {
            self.others.get(id)
        }
    }

    pub fn level_mut(&mut self, id: &LevelId) -> Option<&mut Level> {
        if self.current.id() == id {
            Some(&mut self.current)
        } else {
            self.others.get_mut(id)
        }
    }

    /// Identifiers of every loaded level, active one included.
    pub fn level_ids(&self) -> impl Iterator<Item = &LevelId> + '_ {
        std::iter::once(self.current.id()).chain(self.others.keys())
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Split borrow of the active level and the player.
    pub fn parts_mut(&mut self) -> (&mut Level, &mut Player) {
        (&mut self.current, &mut self.player)
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Places a monster on the active level.
    ///
    /// Returns `None` for walls, occupied cells, and the player's own cell.
    pub fn spawn_monster(&mut self, kind: MonsterKind, position: Position) -> Option<EntityId> {
        if position == self.player.position {
            return None;
        }
        self.current.spawn_monster(kind, position)
    }

    pub(crate) fn advance_turn(&mut self) -> u64 {
        self.turn += 1;
        self.turn
    }

    /// Connects a stairs cell on `from` to a cell on `to`.
    ///
    /// Both endpoints must be in bounds and passable on loaded levels.
    pub fn link_stairs(
        &mut self,
        from: &LevelId,
        at: Position,
        to: &LevelId,
        target: Position,
    ) -> Result<(), WorldError> {
        let destination = self
            .level(to)
            .ok_or_else(|| WorldError::MissingLevel(to.clone()))?;
        if !destination.grid.is_passable(target) {
            return Err(WorldError::InvalidStairs {
                level: to.clone(),
                position: target,
            });
        }

        let origin = self
            .level_mut(from)
            .ok_or_else(|| WorldError::MissingLevel(from.clone()))?;
        if !origin.grid.is_passable(at) {
            return Err(WorldError::InvalidStairs {
                level: from.clone(),
                position: at,
            });
        }
        origin.link_stairs(
            at,
            StairLink {
                level: to.clone(),
                position: target,
            },
        );
        Ok(())
    }

    /// Makes the link's level active and puts the player on its target cell.
    pub fn travel(&mut self, link: &StairLink, sight_shape: SightShape) -> Result<(), WorldError> {
        if &link.level != self.current.id() {
            let next = self
                .others
                .remove(&link.level)
                .ok_or_else(|| WorldError::MissingLevel(link.level.clone()))?;
            let previous = std::mem::replace(&mut self.current, next);
            self.others.insert(previous.id().clone(), previous);
        }
        self.player.position = link.position;
        self.refresh_visibility(sight_shape);
        Ok(())
    }

    /// Recomputes the active level's field of view from the player.
    pub fn refresh_visibility(&mut self, sight_shape: SightShape) {
        let observer = self.player.position;
        let radius = self.player.sight_range;
        compute_visibility(&mut self.current.grid, observer, radius, sight_shape);
    }

    /// Point-in-time copy of everything a renderer needs.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            level_id: self.current.id().clone(),
            level: self.current.clone(),
            player: self.player.clone(),
            turn: self.turn,
            stats: self.player.stat_lines(),
        }
    }
}

/// Read-only view of the active level published to consumers after each turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    pub level_id: LevelId,
    pub level: Level,
    pub player: Player,
    pub turn: u64,
    pub stats: Vec<String>,
}

impl WorldSnapshot {
    /// Display symbol for a cell: occupant first, then item, then terrain.
    ///
    /// Cells never seen render as blank.
    pub fn glyph_at(&self, position: Position) -> char {
        let tile = self.level.grid.tile(position);
        if !tile.is_seen() {
            return ' ';
        }
        if position == self.player.position {
            return self.player.symbol;
        }
        if tile.is_visible()
            && let Some(monster) = self.level.monster_at(position)
        {
            return monster.symbol;
        }
        if let Some(item) = self.level.items.get(&position) {
            return item.symbol;
        }
        tile.template().symbol
    }

    /// The seen part of the level as text rows.
    pub fn render_rows(&self) -> Vec<String> {
        let grid = &self.level.grid;
        (0..grid.height() as i32)
            .map(|y| {
                (0..grid.width() as i32)
                    .map(|x| self.glyph_at(Position::new(x, y)))
                    .collect::<String>()
                    .trim_end()
                    .to_owned()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded(id: &str, rows: &[&str]) -> DecodedLevel {
        Level::from_symbols(id, rows, &GameConfig::default()).unwrap()
    }

    #[test]
    fn missing_start_level_is_reported() {
        let err = World::new(
            [decoded("a", &["@."])],
            &LevelId::new("b"),
            &GameConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, WorldError::MissingLevel(LevelId::new("b")));
    }

    #[test]
    fn start_level_needs_player_marker() {
        let err = World::new([decoded("a", &[".."])], &LevelId::new("a"), &GameConfig::default())
            .unwrap_err();
        assert_eq!(err, WorldError::MissingPlayerStart(LevelId::new("a")));
    }

    #[test]
    fn monsters_never_spawn_on_the_player() {
        let mut world =
            World::new([decoded("a", &["@.."])], &LevelId::new("a"), &GameConfig::default())
                .unwrap();
        assert!(world.spawn_monster(MonsterKind::Rat, Position::ORIGIN).is_none());
        assert!(world.current_level().monsters.is_empty());
        assert!(world.spawn_monster(MonsterKind::Rat, Position::new(2, 0)).is_some());
    }

    #[test]
    fn new_world_reveals_the_start_area() {
        let world = World::new([decoded("a", &["@.."])], &LevelId::new("a"), &GameConfig::default())
            .unwrap();
        assert_eq!(world.player().position, Position::ORIGIN);
        assert!(world.current_level().grid.tile(Position::new(2, 0)).is_visible());
        assert_eq!(world.turn(), 0);
    }

    #[test]
    fn stairs_must_land_on_passable_cells() {
        let config = GameConfig::default();
        let mut world = World::new(
            [decoded("a", &["@.d"]), decoded("b", &["u.#"])],
            &LevelId::new("a"),
            &config,
        )
        .unwrap();
        let a = LevelId::new("a");
        let b = LevelId::new("b");

        assert!(world.link_stairs(&a, Position::new(2, 0), &b, Position::new(0, 0)).is_ok());
        assert_eq!(
            world.link_stairs(&a, Position::new(2, 0), &b, Position::new(2, 0)),
            Err(WorldError::InvalidStairs {
                level: b.clone(),
                position: Position::new(2, 0)
            })
        );
        assert_eq!(
            world.link_stairs(&a, Position::new(2, 0), &LevelId::new("c"), Position::ORIGIN),
            Err(WorldError::MissingLevel(LevelId::new("c")))
        );
    }

    #[test]
    fn travel_swaps_the_active_level() {
        let config = GameConfig::default();
        let mut world = World::new(
            [decoded("a", &["@.d"]), decoded("b", &["u.."])],
            &LevelId::new("a"),
            &config,
        )
        .unwrap();
        let link = StairLink {
            level: LevelId::new("b"),
            position: Position::ORIGIN,
        };
        world.travel(&link, config.sight_shape).unwrap();
        assert_eq!(world.current_id(), &LevelId::new("b"));
        assert!(world.level(&LevelId::new("a")).is_some());
        assert_eq!(world.level_ids().count(), 2);
        assert!(world.current_level().grid.tile(Position::new(2, 0)).is_seen());
    }

    #[test]
    fn snapshot_renders_only_seen_cells() {
        let config = GameConfig::default().with_player(crate::config::PlayerTemplate {
            sight_range: 1,
            ..Default::default()
        });
        let world = World::new([decoded("a", &["@...R"])], &LevelId::new("a"), &config).unwrap();
        let snapshot = world.snapshot();
        assert_eq!(snapshot.render_rows(), vec!["@.".to_owned()]);
        assert_eq!(snapshot.stats[0], "Name: meds");
    }
}
