//! Data-driven content and loaders.
//!
//! This crate turns files on disk into `game-core` values:
//! - Level layouts (`*.map` symbol text, one row per line)
//! - The world manifest (`world.toml`: start level, stair links, items)
//! - Game configuration (`config.toml`)
//!
//! A bundled sample world lives under `data/` and is exposed through
//! [`sample_data_dir`].

use std::path::PathBuf;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ItemPlacement, LoadResult, MapLoader, StairPlacement, WorldLoader,
    WorldManifest,
};

/// Directory of the sample world shipped with this crate.
pub fn sample_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
