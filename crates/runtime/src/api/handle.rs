//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! advancing the simulation or streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{Command, TurnReport};

use super::consumer::SnapshotConsumer;
use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Request;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    request_tx: mpsc::Sender<Request>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(request_tx: mpsc::Sender<Request>, event_bus: EventBus) -> Self {
        Self {
            request_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Request) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.request_tx
            .send(make(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Hand one command to the simulation and wait for its report.
    ///
    /// The report comes back before the resulting snapshot is published, so
    /// a caller that also holds a consumer should read it afterwards.
    pub async fn submit(&self, command: Command) -> Result<TurnReport> {
        self.request(|reply| Request::Submit { command, reply }).await
    }

    /// Register a new snapshot consumer. It starts with the current snapshot.
    pub async fn register_consumer(&self) -> Result<SnapshotConsumer> {
        self.request(|reply| Request::RegisterConsumer { reply }).await
    }

    /// The player's stat summary lines.
    pub async fn query_stats(&self) -> Result<Vec<String>> {
        self.request(|reply| Request::QueryStats { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Turn` - Turn completion
    /// - `Topic::Combat` - Attacks and deaths
    /// - `Topic::World` - Doors, level changes
    /// - `Topic::Session` - Consumers attaching and leaving, worker shutdown
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
