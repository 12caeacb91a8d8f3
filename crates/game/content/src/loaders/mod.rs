//! File loaders for levels, worlds, and game rules.
//!
//! Level layouts are plain symbol text; manifests and rules are TOML. Every
//! loader reports failures as `anyhow` errors carrying the offending path.

pub mod config;
pub mod map;
pub mod world;

pub use config::ConfigLoader;
pub use map::MapLoader;
pub use world::{ItemPlacement, StairPlacement, WorldLoader, WorldManifest};

use std::path::Path;

use anyhow::Context;

pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
