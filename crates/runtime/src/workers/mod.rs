//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker is the only owner of the world; everything else
//! reaches it through channels.

mod simulation;

pub(crate) use simulation::{Request, SimulationWorker};
