//! Player actions.
//!
//! Each action is a small value implementing [`ActionTransition`]: a cost, a
//! side-effect-free pre-check, the mutation itself, and a post-check. The
//! engine drives them through those phases in order.
//!
//! - `command`: discrete inputs accepted from the presentation layer
//! - `movement`: single orthogonal steps, including stairs
//! - `interact`: opening doors and attacking monsters next to the player
//! - `travel`: multi-step movement along a planned route

mod command;
mod interact;
mod movement;
mod transition;
mod travel;

pub use command::Command;
pub use interact::{InteractAction, InteractError};
pub use movement::{MoveAction, MoveError};
pub use transition::ActionTransition;
pub use travel::{TravelAction, TravelError};
