//! Simulation worker that owns the authoritative [`game_core::World`].
//!
//! Receives requests from [`crate::RuntimeHandle`], executes commands via
//! [`game_core::GameEngine`], publishes events to the [`EventBus`], and hands
//! the resulting snapshot to every registered consumer.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use game_core::{
    Command, ConsumerId, GameConfig, GameEngine, TurnOutcome, TurnReport, World, WorldSnapshot,
};

use crate::api::SnapshotConsumer;
use crate::events::{Event, EventBus, StopReason};

/// Requests that can be sent to the simulation worker
pub enum Request {
    /// Execute one player command.
    Submit {
        command: Command,
        reply: oneshot::Sender<TurnReport>,
    },
    /// Add a snapshot consumer.
    RegisterConsumer {
        reply: oneshot::Sender<SnapshotConsumer>,
    },
    /// Player stat summary (read-only).
    QueryStats { reply: oneshot::Sender<Vec<String>> },
}

/// Background task that processes gameplay commands.
pub struct SimulationWorker {
    world: World,
    config: GameConfig,
    request_rx: mpsc::Receiver<Request>,
    event_bus: EventBus,
    consumers: BTreeMap<ConsumerId, mpsc::Sender<Arc<WorldSnapshot>>>,
    next_consumer: u32,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        world: World,
        config: GameConfig,
        request_rx: mpsc::Receiver<Request>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::worker",
            level = %world.current_id(),
            levels = world.level_ids().count(),
            "SimulationWorker initialized"
        );

        Self {
            world,
            config,
            request_rx,
            event_bus,
            consumers: BTreeMap::new(),
            next_consumer: 0,
        }
    }

    /// Registers a consumer and hands it the current snapshot.
    pub fn attach_consumer(&mut self) -> SnapshotConsumer {
        let id = ConsumerId(self.next_consumer);
        self.next_consumer += 1;

        let (tx, rx) = mpsc::channel(1);
        // A fresh single-slot channel always has room for the first snapshot.
        let _ = tx.try_send(Arc::new(self.world.snapshot()));
        self.consumers.insert(id, tx);

        debug!(target: "runtime::worker", consumer = %id, "consumer attached");
        self.event_bus.publish(Event::ConsumerAttached(id));
        SnapshotConsumer::new(id, rx)
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        let reason = loop {
            tokio::select! {
                Some(request) = self.request_rx.recv() => {
                    if let Some(reason) = self.handle_request(request).await {
                        break reason;
                    }
                }
                else => break StopReason::HandlesDropped,
            }
        };

        info!(target: "runtime::worker", ?reason, turn = self.world.turn(), "simulation stopped");
        self.event_bus.publish(Event::Stopped(reason));
    }

    async fn handle_request(&mut self, request: Request) -> Option<StopReason> {
        match request {
            Request::Submit { command, reply } => {
                let report = self.execute(&command);
                let outcome = report.outcome;
                if reply.send(report).is_err() {
                    debug!(target: "runtime::worker", "Submit reply channel closed (caller dropped)");
                }
                self.after_command(&command, outcome).await
            }
            Request::RegisterConsumer { reply } => {
                let consumer = self.attach_consumer();
                if reply.send(consumer).is_err() {
                    debug!(target: "runtime::worker", "RegisterConsumer reply channel closed (caller dropped)");
                }
                None
            }
            Request::QueryStats { reply } => {
                if reply.send(self.world.player().stat_lines()).is_err() {
                    debug!(target: "runtime::worker", "QueryStats reply channel closed (caller dropped)");
                }
                None
            }
        }
    }

    /// Runs the engine and forwards its events to the bus.
    fn execute(&mut self, command: &Command) -> TurnReport {
        let report = GameEngine::new(&mut self.world, &self.config).execute(command);

        if let Err(rejected) = &report.player_action {
            debug!(
                target: "runtime::worker",
                ?command,
                error = %rejected,
                phase = ?rejected.phase(),
                "player action rejected"
            );
        }
        if report.player_died() {
            warn!(target: "runtime::worker", turn = report.turn, "player died");
        }

        for event in &report.events {
            self.event_bus.publish(Event::Game {
                turn: report.turn,
                event: event.clone(),
            });
        }
        report
    }

    /// Handles control commands, then publishes the new snapshot.
    async fn after_command(&mut self, command: &Command, outcome: TurnOutcome) -> Option<StopReason> {
        match *command {
            Command::Quit => return Some(StopReason::Quit),
            Command::DetachConsumer { consumer } => self.detach(consumer),
            _ => {}
        }

        // Free and rejected commands may still have changed the log.
        if outcome != TurnOutcome::Control {
            self.publish_snapshot().await;
        }

        if self.consumers.is_empty() {
            Some(StopReason::NoConsumers)
        } else {
            None
        }
    }

    fn detach(&mut self, consumer: ConsumerId) {
        if self.consumers.remove(&consumer).is_some() {
            debug!(target: "runtime::worker", %consumer, "consumer detached");
            self.event_bus.publish(Event::ConsumerDetached(consumer));
        }
    }

    /// Hands the snapshot to every consumer, waiting on each single slot.
    ///
    /// Consumers whose receiving end is gone are deregistered.
    async fn publish_snapshot(&mut self) {
        let snapshot = Arc::new(self.world.snapshot());
        let mut closed = Vec::new();

        for (&id, tx) in &self.consumers {
            if tx.send(Arc::clone(&snapshot)).await.is_err() {
                closed.push(id);
            }
        }
        for id in closed {
            self.detach(id);
        }
    }
}
