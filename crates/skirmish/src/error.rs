//! Unified error type for Skirmish.

use skirmish_protocol::{ProtocolError, RoomId};
use skirmish_room::RoomError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant lets `?` convert sub-crate
/// errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum SkirmishError {
    /// A shared-vocabulary conversion failed (e.g. a bad team index).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A room-level error (full, not found, wrong phase).
    #[error(transparent)]
    Room(#[from] RoomError),

    /// A start was requested before two opposing teams were allocated.
    #[error("room {0} is not ready to start")]
    NotReady(RoomId),

    /// A blocking room task panicked or was cancelled.
    #[error("room task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_protocol_error() {
        let err = ProtocolError::InvalidTeam(9);
        let skirmish_err: SkirmishError = err.into();
        assert!(matches!(skirmish_err, SkirmishError::Protocol(_)));
        assert!(skirmish_err.to_string().contains('9'));
    }

    #[test]
    fn test_from_room_error() {
        let err = RoomError::NotFound(RoomId(1));
        let skirmish_err: SkirmishError = err.into();
        assert!(matches!(skirmish_err, SkirmishError::Room(_)));
        assert!(skirmish_err.to_string().contains("R-1"));
    }

    #[test]
    fn test_not_ready_message() {
        let err = SkirmishError::NotReady(RoomId(4));
        assert_eq!(err.to_string(), "room R-4 is not ready to start");
    }
}
