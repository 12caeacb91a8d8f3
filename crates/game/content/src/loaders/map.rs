//! Level layout loader.
//!
//! A `.map` file is the level drawn in symbols, one grid row per line. The
//! file stem names the level.

use std::path::Path;

use anyhow::Context;
use game_core::{DecodedLevel, GameConfig, Level, LevelId};

use crate::loaders::{LoadResult, read_file};

/// Loader for level layouts from symbol text.
pub struct MapLoader;

impl MapLoader {
    /// Load a level from a `.map` file, naming it after the file stem.
    pub fn load(path: &Path, config: &GameConfig) -> LoadResult<DecodedLevel> {
        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("map file {} has no usable name", path.display()))?;
        let content = read_file(path)?;
        Self::parse(LevelId::new(id), &content, config)
            .with_context(|| format!("Failed to decode map {}", path.display()))
    }

    /// Decode level text. Trailing blank lines are ignored.
    pub fn parse(id: LevelId, content: &str, config: &GameConfig) -> LoadResult<DecodedLevel> {
        let mut rows: Vec<&str> = content.lines().collect();
        while rows.last().is_some_and(|row| row.trim().is_empty()) {
            rows.pop();
        }
        Ok(Level::from_symbols(id, &rows, config)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use game_core::{LevelError, Position, TileKind};

    use super::*;

    #[test]
    fn level_is_named_after_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cellar.map");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#####\n#@.R#\n#####\n").unwrap();

        let decoded = MapLoader::load(&path, &GameConfig::default()).unwrap();

        assert_eq!(decoded.level.id(), &LevelId::new("cellar"));
        assert_eq!(decoded.level.grid.height(), 3);
        assert_eq!(decoded.player_start, Some(Position::new(1, 1)));
        assert_eq!(decoded.level.monsters.len(), 1);
    }

    #[test]
    fn crlf_lines_decode_cleanly() {
        let decoded =
            MapLoader::parse(LevelId::new("dos"), "#.#\r\n.@.\r\n", &GameConfig::default()).unwrap();
        assert_eq!(decoded.level.grid.width(), 3);
        assert_eq!(decoded.level.grid.tile(Position::new(2, 1)).kind(), TileKind::Floor);
    }

    #[test]
    fn unknown_symbols_surface_the_level_error() {
        let err = MapLoader::parse(LevelId::new("bad"), "..\n.x", &GameConfig::default())
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<LevelError>(),
            Some(&LevelError::UnknownSymbol {
                symbol: 'x',
                row: 2,
                column: 2
            })
        );
    }
}
