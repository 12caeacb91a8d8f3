//! World assembly from a directory of level files plus a manifest.
//!
//! Layout:
//!
//! ```text
//! world/
//!   world.toml     # start level, stair links, item placements
//!   level1.map
//!   level2.map
//! ```

use std::path::Path;

use anyhow::{Context, bail};
use game_core::{GameConfig, Item, LevelId, Position, World};
use serde::Deserialize;

use crate::loaders::{LoadResult, MapLoader, read_file};

/// File name of the manifest inside a world directory.
pub const MANIFEST_FILE: &str = "world.toml";

/// Extension of level layout files.
pub const MAP_EXTENSION: &str = "map";

/// Parsed `world.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldManifest {
    /// Level the player starts on; must contain an `@`.
    pub start: String,
    #[serde(default)]
    pub stairs: Vec<StairPlacement>,
    #[serde(default)]
    pub items: Vec<ItemPlacement>,
}

/// One directed stair link: stepping on `at` in `from` lands on `target` in `to`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StairPlacement {
    pub from: String,
    pub at: [i32; 2],
    pub to: String,
    pub target: [i32; 2],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemPlacement {
    pub level: String,
    pub at: [i32; 2],
    pub name: String,
    pub symbol: char,
}

impl WorldManifest {
    pub fn parse(content: &str) -> LoadResult<Self> {
        toml::from_str(content).context("Failed to parse world manifest TOML")
    }
}

/// Loader for complete worlds.
pub struct WorldLoader;

impl WorldLoader {
    /// Load every `*.map` in `dir` and wire them up with `dir/world.toml`.
    pub fn load(dir: &Path, config: &GameConfig) -> LoadResult<World> {
        let manifest = WorldManifest::parse(&read_file(&dir.join(MANIFEST_FILE))?)
            .with_context(|| format!("in world directory {}", dir.display()))?;

        let mut map_paths = Vec::new();
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to list world directory {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == MAP_EXTENSION) {
                map_paths.push(path);
            }
        }
        if map_paths.is_empty() {
            bail!("no .{MAP_EXTENSION} files in {}", dir.display());
        }
        map_paths.sort();

        let levels = map_paths
            .iter()
            .map(|path| MapLoader::load(path, config))
            .collect::<LoadResult<Vec<_>>>()?;

        Self::assemble(levels, &manifest, config)
    }

    /// Build a world from decoded levels and a manifest.
    pub fn assemble(
        levels: Vec<game_core::DecodedLevel>,
        manifest: &WorldManifest,
        config: &GameConfig,
    ) -> LoadResult<World> {
        let mut world = World::new(levels, &LevelId::new(&manifest.start), config)?;

        for stair in &manifest.stairs {
            world
                .link_stairs(
                    &LevelId::new(&stair.from),
                    position(stair.at),
                    &LevelId::new(&stair.to),
                    position(stair.target),
                )
                .with_context(|| {
                    format!(
                        "Failed to link stairs {}{:?} -> {}{:?}",
                        stair.from, stair.at, stair.to, stair.target
                    )
                })?;
        }

        for item in &manifest.items {
            let id = LevelId::new(&item.level);
            let Some(level) = world.level_mut(&id) else {
                bail!("item '{}' placed on unknown level '{}'", item.name, id);
            };
            if !level.place_item(position(item.at), Item::new(&item.name, item.symbol)) {
                bail!(
                    "item '{}' cannot be placed at {:?} on '{}'",
                    item.name,
                    item.at,
                    id
                );
            }
        }

        // Items may sit in view of the start cell.
        world.refresh_visibility(config.sight_shape);
        Ok(world)
    }
}

fn position([x, y]: [i32; 2]) -> Position {
    Position::new(x, y)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use game_core::WorldError;

    use super::*;

    fn write_world(dir: &Path, manifest: &str, maps: &[(&str, &str)]) {
        fs::write(dir.join(MANIFEST_FILE), manifest).unwrap();
        for (name, rows) in maps {
            fs::write(dir.join(format!("{name}.map")), rows).unwrap();
        }
    }

    #[test]
    fn manifest_defaults_to_no_links_or_items() {
        let manifest = WorldManifest::parse("start = \"level1\"").unwrap();
        assert_eq!(manifest.start, "level1");
        assert!(manifest.stairs.is_empty());
        assert!(manifest.items.is_empty());
    }

    #[test]
    fn loads_levels_links_and_items() {
        let dir = tempfile::tempdir().unwrap();
        write_world(
            dir.path(),
            r#"
start = "top"

[[stairs]]
from = "top"
at = [2, 0]
to = "bottom"
target = [0, 1]

[[items]]
level = "top"
at = [1, 0]
name = "Rusty Key"
symbol = "k"
"#,
            &[("top", "@.d\n"), ("bottom", "...\nu..\n")],
        );
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let world = WorldLoader::load(dir.path(), &GameConfig::default()).unwrap();

        assert_eq!(world.current_id(), &LevelId::new("top"));
        let ids: Vec<_> = world.level_ids().map(LevelId::as_str).collect();
        assert!(ids.contains(&"bottom"));
        let top = world.current_level();
        assert_eq!(
            top.stairs.get(&Position::new(2, 0)).map(|link| &link.level),
            Some(&LevelId::new("bottom"))
        );
        assert_eq!(
            top.items.get(&Position::new(1, 0)).map(|item| item.name.as_str()),
            Some("Rusty Key")
        );
    }

    #[test]
    fn missing_start_level_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_world(dir.path(), "start = \"nowhere\"", &[("here", "@.")]);

        let err = WorldLoader::load(dir.path(), &GameConfig::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<WorldError>(),
            Some(&WorldError::MissingLevel(LevelId::new("nowhere")))
        );
    }

    #[test]
    fn stairs_into_walls_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_world(
            dir.path(),
            r#"
start = "a"
[[stairs]]
from = "a"
at = [1, 0]
to = "b"
target = [0, 0]
"#,
            &[("a", "@d"), ("b", "#.")],
        );

        let err = WorldLoader::load(dir.path(), &GameConfig::default()).unwrap_err();
        assert!(err.chain().any(|cause| cause.downcast_ref::<WorldError>().is_some()));
    }

    #[test]
    fn empty_directory_has_nothing_to_load() {
        let dir = tempfile::tempdir().unwrap();
        write_world(dir.path(), "start = \"a\"", &[]);
        assert!(WorldLoader::load(dir.path(), &GameConfig::default()).is_err());
    }

    #[test]
    fn bundled_sample_world_loads() {
        let world = WorldLoader::load(&crate::sample_data_dir(), &GameConfig::default())
            .expect("sample world should load");
        assert!(world.level_ids().count() >= 2);
        assert!(world.player().alive);
    }
}
