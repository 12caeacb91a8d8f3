//! Text client for the dungeon simulation.
//!
//! ```text
//! main
//!   ├─→ ClientConfig (environment)
//!   ├─→ logging (session log file)
//!   ├─→ game-content (world + game config from disk)
//!   ├─→ runtime (simulation worker)
//!   └─→ TextFrontend (stdin commands, stdout map)
//! ```
//!
//! The frontend only talks to the simulation through [`runtime::RuntimeHandle`]
//! and the snapshots it receives as a [`runtime::SnapshotConsumer`].

pub mod config;
pub mod frontend;
pub mod logging;

pub use config::ClientConfig;
pub use frontend::{Input, InputError, TextFrontend, parse_command, render_snapshot};
