//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up request/event channels,
//! and exposes a builder-based API for clients to drive the simulation.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use game_core::{Command, GameConfig, World};

use crate::api::{Result, RuntimeError, RuntimeHandle, SnapshotConsumer};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Request, SimulationWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Pending requests the worker accepts before senders wait.
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
    /// Snapshot consumers created with the runtime.
    pub initial_consumers: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            command_buffer_size: 1,
            event_buffer_size: 100,
            initial_consumers: 1,
        }
    }
}

/// Main runtime that orchestrates the game simulation
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    consumers: Vec<SnapshotConsumer>,
    worker: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// The consumers created at build time. Later calls return nothing.
    pub fn take_consumers(&mut self) -> Vec<SnapshotConsumer> {
        std::mem::take(&mut self.consumers)
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Stop the simulation and wait for the worker to exit.
    ///
    /// Sends `Quit` if the worker is still running.
    pub async fn shutdown(self) -> Result<()> {
        let Runtime {
            handle,
            consumers,
            worker,
        } = self;
        drop(consumers);

        match handle.submit(Command::Quit).await {
            // Already stopped.
            Ok(_)
            | Err(RuntimeError::CommandChannelClosed | RuntimeError::ReplyChannelClosed(_)) => {}
            Err(err) => return Err(err),
        }
        drop(handle);

        worker.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    world: Option<World>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            world: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the game rules
    pub fn game_config(mut self, game: GameConfig) -> Self {
        self.config.game = game;
        self
    }

    /// Provide the world to simulate
    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    /// Build the runtime and start the simulation worker
    pub async fn build(self) -> Result<Runtime> {
        let world = self.world.ok_or(RuntimeError::MissingWorld)?;
        if self.config.initial_consumers == 0 {
            return Err(RuntimeError::NoConsumers);
        }

        let (request_tx, request_rx) =
            mpsc::channel::<Request>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(request_tx, event_bus.clone());

        let mut worker = SimulationWorker::new(world, self.config.game, request_rx, event_bus);
        let consumers = (0..self.config.initial_consumers)
            .map(|_| worker.attach_consumer())
            .collect();

        let worker = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            consumers,
            worker,
        })
    }
}
