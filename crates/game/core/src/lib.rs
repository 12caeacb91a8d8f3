//! Deterministic simulation core for the grid-world dungeon.
//!
//! `game-core` owns the canonical rules: the tile catalog, levels and their
//! occupants, line-of-sight, pathfinding, the action-point economy, combat, and
//! the monster behavior loop. All state mutation for a turn flows through
//! [`engine::GameEngine`]; the runtime and loaders depend on the types
//! re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    ActionTransition, Command, InteractAction, InteractError, MoveAction, MoveError, TravelAction,
    TravelError,
};
pub use combat::{AttackOutcome, resolve_attack};
pub use config::{GameConfig, PlayerTemplate, SightShape};
pub use engine::{
    GameEngine, GameEvent, Line, Path, PlayerActionError, TransitionPhase, TransitionPhaseError,
    TurnOutcome, TurnReport, can_see, compute_visibility, find_path, has_line_of_sight,
};
pub use env::{CatalogError, TileTemplate, template_of, tile_template_for};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    ActionPoints, Character, ConsumerId, DecodedLevel, Direction, EntityId, EventLog, Grid, Item,
    Level, LevelError, LevelId, Monster, MonsterKind, Player, Position, SpeciesTemplate,
    StairDirection, StairLink, Tile, TileFlags, TileKind, World, WorldError, WorldSnapshot,
};
