//! Room configuration and state machine.

use serde::{Deserialize, Serialize};
use skirmish_game::Rule;

// ---------------------------------------------------------------------------
// RoomConfig
// ---------------------------------------------------------------------------

/// Defaults applied to every room a [`RoomManager`](crate::RoomManager)
/// creates.
///
/// Override individual fields with struct update syntax:
///
/// ```
/// use skirmish_room::RoomConfig;
///
/// let config = RoomConfig { capacity: 2, ..RoomConfig::default() };
/// assert_eq!(config.initial_gold, 1000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Participant slots per room.
    pub capacity: usize,

    /// Starting gold shown to the lobby for fresh games.
    pub initial_gold: i32,

    /// Map label shown in listings until the host picks one.
    pub map_name: Option<String>,

    /// Rule parameters for freshly initialized games.
    pub rule: Rule,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            capacity: 4,
            initial_gold: 1000,
            map_name: None,
            rule: Rule::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// InitialGold
// ---------------------------------------------------------------------------

/// The starting-gold setting of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialGold {
    /// Every team starts with this much gold.
    Amount(i32),
    /// Gold comes from a restored saved game and is left as saved.
    Inherited,
}

// ---------------------------------------------------------------------------
// RoomPhase
// ---------------------------------------------------------------------------

/// The lifecycle phase of a room.
///
/// There is exactly one edge and it is never undone:
///
/// ```text
/// Lobby → Active
/// ```
///
/// - **Lobby**: participants come and go, teams and alliances are
///   negotiated, the room is listed as open.
/// - **Active**: the match is running; the game state only changes through
///   submitted events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum RoomPhase {
    Lobby = 0,
    Active = 1,
}

impl RoomPhase {
    /// Returns `true` while the room accepts lobby negotiation.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Lobby)
    }

    /// The phase that follows this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Lobby => Some(Self::Active),
            Self::Active => None,
        }
    }

    /// Returns `true` if transitioning to `target` is valid.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }

    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Lobby,
            _ => Self::Active,
        }
    }
}

impl std::fmt::Display for RoomPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lobby => write!(f, "Lobby"),
            Self::Active => write!(f, "Active"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_phase_next_is_one_way() {
        assert_eq!(RoomPhase::Lobby.next(), Some(RoomPhase::Active));
        assert_eq!(RoomPhase::Active.next(), None);
    }

    #[test]
    fn test_room_phase_can_transition_to() {
        assert!(RoomPhase::Lobby.can_transition_to(RoomPhase::Active));
        assert!(!RoomPhase::Active.can_transition_to(RoomPhase::Lobby));
        assert!(!RoomPhase::Active.can_transition_to(RoomPhase::Active));
    }

    #[test]
    fn test_room_phase_is_open() {
        assert!(RoomPhase::Lobby.is_open());
        assert!(!RoomPhase::Active.is_open());
    }

    #[test]
    fn test_room_phase_u8_round_trip() {
        for phase in [RoomPhase::Lobby, RoomPhase::Active] {
            assert_eq!(RoomPhase::from_u8(phase.as_u8()), phase);
        }
    }

    #[test]
    fn test_room_phase_display() {
        assert_eq!(RoomPhase::Lobby.to_string(), "Lobby");
        assert_eq!(RoomPhase::Active.to_string(), "Active");
    }

    #[test]
    fn test_room_config_default() {
        let config = RoomConfig::default();
        assert_eq!(config.capacity, 4);
        assert_eq!(config.initial_gold, 1000);
        assert!(config.map_name.is_none());
        assert_eq!(config.rule.max_population, 20);
    }
}
