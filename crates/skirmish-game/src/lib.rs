//! Game-side collaborators for Skirmish rooms.
//!
//! A room never looks inside the game engine; it only needs a handful of
//! operations on these types:
//!
//! - [`GameState`] — the authoritative board/turn/roster aggregate
//! - [`Player`] — one team's record (controller, alliance, gold)
//! - [`MapDescriptor`] — level geometry and per-team access policy
//! - [`Rule`] — static rule parameters (population cap, experience, ...)
//! - [`EventProcessor`] — the queue that applies [`GameEvent`]s
//!
//! [`EventQueue`] is the stock processor: a FIFO that applies one event per
//! dispatch step and lets events enqueue their own consequences.

mod event;
mod map;
mod player;
mod rule;
mod state;

pub use event::{EventProcessor, EventQueue, GameEvent};
pub use map::MapDescriptor;
pub use player::Player;
pub use rule::Rule;
pub use state::GameState;
