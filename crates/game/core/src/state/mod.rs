//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the grid, characters,
//! levels, and the world registry. Runtime layers read published snapshots of
//! this state but mutate it exclusively through the engine.
mod character;
mod common;
mod error;
mod event_log;
mod grid;
mod level;
mod tile;
mod world;

pub use character::{ActionPoints, Character, Monster, Player};
pub use common::{ConsumerId, Direction, EntityId, LevelId, Position};
pub use error::{LevelError, WorldError};
pub use event_log::EventLog;
pub use grid::Grid;
pub use level::{DecodedLevel, Item, Level, StairLink};
pub use tile::{StairDirection, Tile, TileFlags, TileKind};
pub use world::{World, WorldSnapshot};

pub use crate::env::{MonsterKind, SpeciesTemplate};
