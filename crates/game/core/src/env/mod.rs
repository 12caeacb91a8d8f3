//! Immutable lookup tables the simulation consults.
//!
//! The tile catalog maps level symbols to tile templates, and the species table
//! maps monster kinds to their stat templates. Neither is ever stored in game
//! state; tiles and monsters only keep the key they were built from.
mod error;
mod species;
mod tiles;

pub use error::CatalogError;
pub use species::{MonsterKind, SpeciesTemplate};
pub use tiles::{TileTemplate, template_of, tile_template_for};
