//! Level descriptors.

use serde::{Deserialize, Serialize};
use skirmish_protocol::Team;

/// Static description of a level: its size and which teams may play it.
///
/// A two-player map grants access to teams 0 and 1 only; teams without
/// access can be allocated in a lobby but never count toward readiness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDescriptor {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub team_access: [bool; Team::COUNT],
}

impl MapDescriptor {
    /// A map every team may play.
    pub fn open(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            team_access: [true; Team::COUNT],
        }
    }

    /// A map restricted to the given teams.
    pub fn with_access(
        name: impl Into<String>,
        width: u32,
        height: u32,
        teams: &[Team],
    ) -> Self {
        let mut team_access = [false; Team::COUNT];
        for team in teams {
            team_access[team.index()] = true;
        }
        Self {
            name: name.into(),
            width,
            height,
            team_access,
        }
    }

    pub fn has_team_access(&self, team: Team) -> bool {
        self.team_access[team.index()]
    }

    /// Number of teams this map can seat.
    pub fn seat_count(&self) -> usize {
        self.team_access.iter().filter(|open| **open).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_map_grants_every_team() {
        let map = MapDescriptor::open("plains", 16, 16);
        assert!(Team::ALL.iter().all(|t| map.has_team_access(*t)));
        assert_eq!(map.seat_count(), 4);
    }

    #[test]
    fn test_with_access_restricts_teams() {
        let map = MapDescriptor::with_access(
            "bridge",
            12,
            8,
            &[Team::ALL[0], Team::ALL[1]],
        );
        assert!(map.has_team_access(Team::ALL[0]));
        assert!(map.has_team_access(Team::ALL[1]));
        assert!(!map.has_team_access(Team::ALL[2]));
        assert!(!map.has_team_access(Team::ALL[3]));
        assert_eq!(map.seat_count(), 2);
    }
}
