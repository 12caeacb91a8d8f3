//! Runtime orchestration for the turn-based simulation.
//!
//! A single simulation worker owns the [`game_core::World`]. Clients talk to it
//! through a cloneable [`RuntimeHandle`], receive point-in-time snapshots
//! through [`SnapshotConsumer`]s, and can follow gameplay on the topic-based
//! [`EventBus`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle, SnapshotConsumer};
pub use events::{Event, EventBus, StopReason, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
