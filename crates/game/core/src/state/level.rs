use std::collections::{BTreeMap, BTreeSet};

use crate::config::GameConfig;
use crate::env::{MonsterKind, tile_template_for};

use super::{EntityId, EventLog, Grid, LevelError, LevelId, Monster, Position, Tile, TileKind};

/// Where a stairs cell leads: a level in the world registry and a cell on it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StairLink {
    pub level: LevelId,
    pub position: Position,
}

/// Decorative object lying on a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub symbol: char,
}

impl Item {
    pub fn new(name: impl Into<String>, symbol: char) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }
}

/// A decoded level plus the player start marker found in its rows, if any.
#[derive(Clone, Debug)]
pub struct DecodedLevel {
    pub level: Level,
    pub player_start: Option<Position>,
}

/// One floor of the dungeon: terrain, occupants, stairs, items, and narration.
///
/// Monsters are keyed by the cell they stand on, so two monsters can never
/// share a cell. Keeping a monster off the player's cell is the job of the
/// movement code, which re-checks occupancy before every step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    id: LevelId,
    pub grid: Grid,
    pub monsters: BTreeMap<Position, Monster>,
    pub stairs: BTreeMap<Position, StairLink>,
    pub items: BTreeMap<Position, Item>,
    pub events: EventLog,
    /// Cells highlighted for diagnostics. Cleared at the top of every turn.
    pub debug: BTreeSet<Position>,
    next_monster_id: u32,
}

impl Level {
    pub fn new(id: impl Into<LevelId>, grid: Grid, config: &GameConfig) -> Self {
        Self {
            id: id.into(),
            grid,
            monsters: BTreeMap::new(),
            stairs: BTreeMap::new(),
            items: BTreeMap::new(),
            events: EventLog::new(config.event_log_capacity),
            debug: BTreeSet::new(),
            next_monster_id: 1,
        }
    }

    /// Decodes symbol rows into a level.
    ///
    /// Entity markers (`@`, `R`, `S`) stand on Dirt Floor. Monsters are named
    /// `<Species> <n>`, counting per species in row-major order.
    pub fn from_symbols<S: AsRef<str>>(
        id: impl Into<LevelId>,
        rows: &[S],
        config: &GameConfig,
    ) -> Result<DecodedLevel, LevelError> {
        if rows.is_empty() {
            return Err(LevelError::Empty);
        }

        let mut tiles = Vec::with_capacity(rows.len());
        let mut player_start: Option<Position> = None;
        let mut spawns = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let mut line = Vec::new();
            for (x, symbol) in row.as_ref().chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                let kind = match symbol {
                    '@' => {
                        if let Some(first) = player_start {
                            return Err(LevelError::DuplicatePlayerStart {
                                first,
                                second: position,
                            });
                        }
                        player_start = Some(position);
                        TileKind::Floor
                    }
                    other => match MonsterKind::from_symbol(other) {
                        Some(kind) => {
                            spawns.push((kind, position));
                            TileKind::Floor
                        }
                        None => {
                            tile_template_for(other)
                                .map_err(|_| LevelError::UnknownSymbol {
                                    symbol: other,
                                    row: y + 1,
                                    column: x + 1,
                                })?
                                .kind
                        }
                    },
                };
                line.push(Tile::new(kind));
            }
            tiles.push(line);
        }

        let mut level = Level::new(id, Grid::from_rows(tiles), config);
        let mut counts: BTreeMap<&'static str, u32> = BTreeMap::new();
        for (kind, position) in spawns {
            let species = kind.template().name;
            let count = counts.entry(species).or_default();
            *count += 1;
            let name = format!("{species} {count}");
            level.spawn_monster_named(kind, name, position);
        }

        Ok(DecodedLevel {
            level,
            player_start,
        })
    }

    pub fn id(&self) -> &LevelId {
        &self.id
    }

    pub fn monster_at(&self, position: Position) -> Option<&Monster> {
        self.monsters.get(&position)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.monsters.contains_key(&position)
    }

    /// True if a character could step onto `position`: in bounds, passable,
    /// and free of monsters. The player's cell is checked by the caller.
    pub fn can_walk(&self, position: Position) -> bool {
        self.grid.is_passable(position) && !self.is_occupied(position)
    }

    /// Places a monster with a generated `<Species> <n>` name.
    ///
    /// Returns `None` when the cell cannot hold it. The player is not tracked
    /// here; [`World::spawn_monster`](super::World::spawn_monster) also keeps
    /// monsters off the player's cell.
    pub(crate) fn spawn_monster(&mut self, kind: MonsterKind, position: Position) -> Option<EntityId> {
        let species = kind.template().name;
        let count = self.monsters.values().filter(|m| m.kind == kind).count() + 1;
        self.spawn_monster_named(kind, format!("{species} {count}"), position)
    }

    fn spawn_monster_named(
        &mut self,
        kind: MonsterKind,
        name: String,
        position: Position,
    ) -> Option<EntityId> {
        if !self.can_walk(position) {
            return None;
        }
        let id = EntityId(self.next_monster_id);
        self.next_monster_id += 1;
        self.monsters
            .insert(position, Monster::spawn(kind, id, name, position));
        Some(id)
    }

    /// Removes the monster at `position`, stains the cell, and narrates the death.
    pub fn slay_monster(&mut self, position: Position) -> Option<Monster> {
        let mut monster = self.monsters.remove(&position)?;
        monster.alive = false;
        if let Some(tile) = self.grid.tile_mut(position) {
            tile.stain_with_blood();
        }
        self.events.push(format!("{} died", monster.name));
        Some(monster)
    }

    /// Puts an item on a passable cell, replacing whatever lay there.
    pub fn place_item(&mut self, position: Position, item: Item) -> bool {
        if !self.grid.is_passable(position) {
            return false;
        }
        self.items.insert(position, item);
        true
    }

    pub fn link_stairs(&mut self, position: Position, link: StairLink) {
        self.stairs.insert(position, link);
    }

    /// One-line description of a cell and whatever occupies it.
    pub fn describe(&self, position: Position) -> String {
        let tile = self.grid.tile(position);
        let mut text = format!("{position}: {}", tile.name());
        if tile.is_blood_stained() {
            text.push_str(" (blood-stained)");
        }
        if let Some(monster) = self.monster_at(position) {
            text.push_str(&format!(", {} (HP {})", monster.name, monster.hitpoints));
        }
        if let Some(item) = self.items.get(&position) {
            text.push_str(&format!(", {}", item.name));
        }
        text
    }
}
