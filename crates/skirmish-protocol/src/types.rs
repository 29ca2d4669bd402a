//! Core value types shared by every Skirmish layer.
//!
//! These are the structures that cross crate boundaries and, through the
//! outer session layer, the network. None of them carry behavior beyond
//! construction, validation, and formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a connected participant.
///
/// Rooms never hold connections, only these bare ids. The mapping from id
/// to connection belongs to the session layer above.
///
/// `#[serde(transparent)]` serializes this as the bare integer, so
/// `ParticipantId(42)` is just `42` in JSON.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

/// A unique identifier for a room (one lobby and, later, one match).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Team vocabulary
// ---------------------------------------------------------------------------

/// One of the four fixed team slots.
///
/// A `Team` can only be built from an index in `0..4`, so every API that
/// takes a `Team` is bounds-checked by construction. Use [`Team::new`] or
/// `Team::try_from(usize)` to convert untrusted input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct Team(u8);

impl Team {
    /// Number of team slots in every game.
    pub const COUNT: usize = 4;

    /// All teams in index order. Algorithms that walk the teams iterate
    /// this so evaluation order is always 0 → 3.
    pub const ALL: [Team; Team::COUNT] = [Team(0), Team(1), Team(2), Team(3)];

    /// Returns the team for `index`, or `None` if it is out of range.
    pub fn new(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The slot index, `0..4`.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// The alliance a team belongs to in a freshly created game.
    ///
    /// Every team starts in its own alliance (`index + 1`), so a new lobby
    /// is a free-for-all until the host regroups teams.
    pub fn default_alliance(self) -> Alliance {
        Alliance(u32::from(self.0) + 1)
    }
}

impl TryFrom<usize> for Team {
    type Error = ProtocolError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(ProtocolError::InvalidTeam(index))
    }
}

impl From<Team> for usize {
    fn from(team: Team) -> usize {
        team.index()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T-{}", self.0)
    }
}

/// A grouping tag on a team. Teams in the same alliance are on the same
/// side; a game needs at least two alliances to be playable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Alliance(pub u32);

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A-{}", self.0)
    }
}

/// Who controls a team slot.
///
/// `#[serde(rename_all = "snake_case")]` keeps the JSON form lowercase:
/// `"none"`, `"local"`, `"remote"`, `"ai"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum PlayerType {
    /// Nobody plays this slot.
    #[default]
    None,
    /// Controlled on the machine that hosts the game.
    Local,
    /// Controlled by a participant over the network.
    Remote,
    /// Controlled by the computer.
    Ai,
}

impl PlayerType {
    /// Returns `true` if someone (human or computer) controls the slot.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
            Self::Ai => write!(f, "ai"),
        }
    }
}

// ---------------------------------------------------------------------------
// RoomSnapshot — lobby listing projection
// ---------------------------------------------------------------------------

/// A read-only summary of a room, produced for lobby listings.
///
/// Snapshots are plain values with no reference back to the room that
/// produced them. `remaining` is signed: lowering a room's capacity below
/// its current occupancy is allowed and shows up here as a negative count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    /// The room's unique ID.
    pub room_id: RoomId,
    /// `true` while the room is still a lobby.
    pub open: bool,
    /// Display name chosen at creation.
    pub room_name: String,
    /// Informational map label, if the host set one.
    pub map_name: Option<String>,
    /// Slot limit.
    pub capacity: usize,
    /// `capacity - participants`, may be negative.
    pub remaining: i64,
}
