//! # Skirmish
//!
//! Lobby and game-room coordination for turn-based multiplayer strategy
//! games.
//!
//! Participants join a lobby, the host negotiates teams and alliances, and
//! once the room is ready the match starts. From then on the game state
//! changes only through queued events, each drained to completion before
//! the submitter hears back.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skirmish::prelude::*;
//!
//! # async fn run() -> Result<(), SkirmishError> {
//! skirmish::init_tracing();
//! let lobby: LobbyService = LobbyService::new(RoomConfig::default());
//! let room_id = lobby
//!     .create_room("friday night", MapDescriptor::open("plains", 16, 16))
//!     .await;
//! lobby.join_room(ParticipantId(1), room_id).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod lobby;
mod telemetry;

pub use error::SkirmishError;
pub use lobby::LobbyService;
pub use telemetry::init_tracing;

pub mod prelude {
    pub use crate::{LobbyService, SkirmishError};
    pub use skirmish_game::{
        EventProcessor, EventQueue, GameEvent, GameState, MapDescriptor, Player, Rule,
    };
    pub use skirmish_protocol::{
        Alliance, ParticipantId, PlayerType, RoomId, RoomSnapshot, Team,
    };
    pub use skirmish_room::{InitialGold, Room, RoomConfig, RoomError, RoomManager, RoomPhase};
}
