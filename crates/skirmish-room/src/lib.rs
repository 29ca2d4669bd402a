//! Lobby and game-room coordination for Skirmish.
//!
//! A [`Room`] is one lobby that later becomes one match. Participants join,
//! the host negotiates teams and alliances, and once the room
//! [is ready](Room::is_ready) it is started. From then on the game state is
//! only changed through [`Room::submit_game_event`], which applies an event
//! and everything it causes before returning.
//!
//! # Key types
//!
//! - [`Room`] — the session aggregate, safe to share behind an `Arc`
//! - [`RoomManager`] — creates/restores rooms, routes participants, lists lobbies
//! - [`RoomPhase`] — the one-way `Lobby → Active` state machine
//! - [`RoomConfig`] — capacity, starting gold, and rule defaults

mod config;
mod error;
mod lobby;
mod manager;
mod readiness;
mod room;

pub use config::{InitialGold, RoomConfig, RoomPhase};
pub use error::RoomError;
pub use manager::RoomManager;
pub use room::Room;
