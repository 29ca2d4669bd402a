//! Shared vocabulary for Skirmish.
//!
//! This crate defines the small value types every other layer speaks in:
//!
//! - **Identity** ([`ParticipantId`], [`RoomId`]) — who and where.
//! - **Team vocabulary** ([`Team`], [`Alliance`], [`PlayerType`]) — the
//!   four fixed team slots and how each one is controlled.
//! - **Projections** ([`RoomSnapshot`]) — read-only summaries handed to
//!   lobby listings.
//! - **Errors** ([`ProtocolError`]) — conversions that can fail.
//!
//! # Architecture
//!
//! The protocol layer knows nothing about locking or game rules. It is the
//! bottom of the stack:
//!
//! ```text
//! Room (skirmish-room) → Game (skirmish-game) → Protocol (this crate)
//! ```
//!
//! Everything here derives serde so the outer session layer can put it on
//! whatever wire it uses.

mod error;
mod types;

pub use error::ProtocolError;
pub use types::{Alliance, ParticipantId, PlayerType, RoomId, RoomSnapshot, Team};
