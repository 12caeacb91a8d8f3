use crate::state::{ConsumerId, Direction, Position};

/// Discrete input submitted once per tick by the presentation layer.
///
/// Targets are grid coordinates; any screen-to-grid translation happens before
/// a command is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Move(Direction),
    /// Open, attack, or travel to the target cell.
    Interact { target: Position },
    /// Describe the target cell. Does not take a turn.
    Inspect { target: Position },
    Quit,
    /// Stop publishing snapshots to a consumer.
    DetachConsumer { consumer: ConsumerId },
    /// Wait a turn.
    NoOp,
}

impl Command {
    /// Control commands are handled by whoever drives the engine.
    pub fn is_control(&self) -> bool {
        matches!(self, Command::Quit | Command::DetachConsumer { .. })
    }
}
