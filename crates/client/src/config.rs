//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// Settings for one client session.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Directory holding `world.toml` and the `.map` files.
    pub world_dir: PathBuf,
    /// Optional game rules file; defaults apply without one.
    pub game_config: Option<PathBuf>,
    /// Name of the log session; a timestamp is used when unset.
    pub session_id: Option<String>,
    /// Overrides the platform cache directory for logs.
    pub log_dir: Option<PathBuf>,
    /// Event log lines shown under the map.
    pub log_lines: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            world_dir: game_content::sample_data_dir(),
            game_config: None,
            session_id: None,
            log_dir: None,
            log_lines: 5,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_WORLD_DIR` - World directory (default: bundled sample world)
    /// - `DUNGEON_CONFIG` - Game config TOML (default: built-in rules)
    /// - `GAME_SESSION_ID` - Log session name
    /// - `DUNGEON_LOG_DIR` - Log directory override
    /// - `DUNGEON_LOG_LINES` - Event log lines to show (default: 5)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(dir) = non_empty("DUNGEON_WORLD_DIR") {
            config.world_dir = PathBuf::from(dir);
        }
        config.game_config = non_empty("DUNGEON_CONFIG").map(PathBuf::from);
        config.session_id = non_empty("GAME_SESSION_ID");
        config.log_dir = non_empty("DUNGEON_LOG_DIR").map(PathBuf::from);
        if let Some(lines) = non_empty("DUNGEON_LOG_LINES").and_then(|v| v.parse().ok()) {
            config.log_lines = lines;
        }

        config
    }
}
