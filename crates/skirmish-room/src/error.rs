//! Error types for the room layer.

use skirmish_protocol::{ParticipantId, RoomId};

/// Errors that can occur during room operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// The room does not exist.
    #[error("room {0} not found")]
    NotFound(RoomId),

    /// No slots left for another participant.
    #[error("room {0} is full")]
    RoomFull(RoomId),

    /// The participant is already in this room.
    #[error("participant {0} already in room {1}")]
    AlreadyInRoom(ParticipantId, RoomId),

    /// The participant is already in a different room.
    #[error("participant {0} is already in room {1}")]
    InAnotherRoom(ParticipantId, RoomId),

    /// The participant is not in any room.
    #[error("participant {0} is not in a room")]
    NotInRoom(ParticipantId),

    /// `initialize` was called on a room that already has a game.
    #[error("room {0} already has a game")]
    AlreadyInitialized(RoomId),

    /// The room has no game yet; call `initialize` first.
    #[error("room {0} has no game yet")]
    NotInitialized(RoomId),

    /// The operation is only allowed while the room is a lobby.
    #[error("room {0} has already started")]
    AlreadyStarted(RoomId),

    /// The operation is only allowed once the game is running.
    #[error("room {0} has not started")]
    NotStarted(RoomId),
}
