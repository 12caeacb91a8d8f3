//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use game_core::{ConsumerId, GameEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Turn completion
    Turn,
    /// Attacks and deaths
    Combat,
    /// Doors opening, level changes
    World,
    /// Consumer registration and worker lifecycle
    Session,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Turn, Topic::Combat, Topic::World, Topic::Session];
}

/// Why the simulation worker stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    Quit,
    NoConsumers,
    HandlesDropped,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Something happened in the world during `turn`.
    Game { turn: u64, event: GameEvent },
    ConsumerAttached(ConsumerId),
    ConsumerDetached(ConsumerId),
    Stopped(StopReason),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Game { event, .. } => match event {
                GameEvent::Attacked { .. }
                | GameEvent::MonsterSlain { .. }
                | GameEvent::PlayerDied { .. } => Topic::Combat,
                GameEvent::DoorOpened { .. } | GameEvent::LevelChanged { .. } => Topic::World,
                GameEvent::TurnCompleted { .. } => Topic::Turn,
            },
            Event::ConsumerAttached(_) | Event::ConsumerDetached(_) | Event::Stopped(_) => {
                Topic::Session
            }
        }
    }
}

/// Topic-based event bus
///
/// Every topic gets its own broadcast channel up front; the set never changes
/// afterwards, so the map is shared without a lock.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<Event>>>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Topic::ALL
            .into_iter()
            .map(|topic| (topic, broadcast::channel(capacity.max(1)).0))
            .collect();

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        match self.channels.get(&topic) {
            Some(tx) => tx.subscribe(),
            // Unreachable: every topic is created in `with_capacity`.
            None => broadcast::channel(1).1,
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use game_core::{LevelId, Position};

    use super::*;

    #[test]
    fn game_events_route_by_kind() {
        let slain = Event::Game {
            turn: 3,
            event: GameEvent::MonsterSlain {
                level: LevelId::new("a"),
                position: Position::ORIGIN,
                name: "Rat 1".into(),
            },
        };
        let door = Event::Game {
            turn: 3,
            event: GameEvent::DoorOpened {
                level: LevelId::new("a"),
                position: Position::ORIGIN,
            },
        };
        assert_eq!(slain.topic(), Topic::Combat);
        assert_eq!(door.topic(), Topic::World);
        assert_eq!(Event::Stopped(StopReason::Quit).topic(), Topic::Session);
    }

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut turns = bus.subscribe(Topic::Turn);
        let mut combat = bus.subscribe(Topic::Combat);

        bus.publish(Event::Game {
            turn: 1,
            event: GameEvent::TurnCompleted { turn: 1 },
        });

        assert_eq!(
            turns.recv().await.unwrap(),
            Event::Game {
                turn: 1,
                event: GameEvent::TurnCompleted { turn: 1 }
            }
        );
        assert!(combat.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        EventBus::new().publish(Event::ConsumerAttached(ConsumerId(0)));
    }
}
