//! Dungeon game client binary.
//!
//! Composition root: reads configuration from the environment, sets up the
//! session log, loads the world, starts the runtime, and hands stdin/stdout to
//! the text frontend.
//!
//! ```bash
//! DUNGEON_WORLD_DIR=./my-world cargo run -p dungeon-client
//! ```

use anyhow::{Context, Result};
use tokio::io::BufReader;

use dungeon_client::{ClientConfig, TextFrontend, logging};
use game_content::{ConfigLoader, WorldLoader};
use runtime::{Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.session_id.as_deref(), config.log_dir.as_deref())?;

    tracing::info!("Starting Dungeon client");
    tracing::info!("World directory: {}", config.world_dir.display());

    let game = ConfigLoader::load_or_default(config.game_config.as_deref())?;
    let world = WorldLoader::load(&config.world_dir, &game)
        .with_context(|| format!("Failed to load world from {}", config.world_dir.display()))?;

    let mut runtime = Runtime::builder()
        .world(world)
        .config(RuntimeConfig {
            game,
            ..RuntimeConfig::default()
        })
        .build()
        .await?;
    tracing::info!("Runtime built successfully");

    let consumer = runtime
        .take_consumers()
        .pop()
        .context("runtime started without a consumer")?;

    let frontend = TextFrontend::new(runtime.handle(), consumer, config.log_lines);
    frontend
        .run(BufReader::new(tokio::io::stdin()), std::io::stdout())
        .await?;

    runtime.shutdown().await?;
    tracing::info!("Client shutdown complete");
    Ok(())
}
