//! Unified error types surfaced by the runtime API.
//!
//! Rejected player actions are not errors here; they travel inside the
//! [`game_core::TurnReport`] returned by [`crate::RuntimeHandle::submit`].
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires a world to be configured before building")]
    MissingWorld,

    #[error("runtime requires at least one snapshot consumer")]
    NoConsumers,

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
