//! Receiving end of the snapshot handoff.
use std::sync::Arc;

use tokio::sync::mpsc;

use game_core::{ConsumerId, WorldSnapshot};

/// A registered reader of world snapshots.
///
/// The channel holds a single snapshot: the worker waits for this consumer to
/// take the previous one before publishing the next. Dropping the consumer
/// deregisters it on the worker's next publish.
#[derive(Debug)]
pub struct SnapshotConsumer {
    id: ConsumerId,
    rx: mpsc::Receiver<Arc<WorldSnapshot>>,
}

impl SnapshotConsumer {
    pub(crate) fn new(id: ConsumerId, rx: mpsc::Receiver<Arc<WorldSnapshot>>) -> Self {
        Self { id, rx }
    }

    pub fn id(&self) -> ConsumerId {
        self.id
    }

    /// Waits for the next snapshot. `None` once the worker has stopped.
    pub async fn recv(&mut self) -> Option<Arc<WorldSnapshot>> {
        self.rx.recv().await
    }
}
