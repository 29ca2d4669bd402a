//! Lobby-side room state: who is here, who plays which team, who hosts.

use std::collections::HashSet;

use skirmish_protocol::{ParticipantId, Team};

/// Team slot → participant. `None` means unassigned.
pub(crate) type TeamAllocation = [Option<ParticipantId>; Team::COUNT];

/// Everything a room guards under its lobby lock.
#[derive(Debug)]
pub(crate) struct Lobby {
    pub(crate) participants: HashSet<ParticipantId>,
    pub(crate) allocation: TeamAllocation,
    pub(crate) host: Option<ParticipantId>,
    pub(crate) capacity: usize,
    pub(crate) map_name: Option<String>,
}

impl Lobby {
    pub(crate) fn new(capacity: usize, map_name: Option<String>) -> Self {
        Self {
            participants: HashSet::new(),
            allocation: [None; Team::COUNT],
            host: None,
            capacity,
            map_name,
        }
    }

    /// `capacity - participants`. Goes negative if capacity is lowered
    /// below the current head count.
    pub(crate) fn remaining(&self) -> i64 {
        self.capacity as i64 - self.participants.len() as i64
    }

    /// Clears the allocation table after `departed` leaves and returns the
    /// teams `departed` was holding.
    ///
    /// Every slot is cleared, including slots held by participants who are
    /// still here: a departure voids the whole team setup and the host
    /// re-allocates from scratch.
    pub(crate) fn release_teams(&mut self, departed: ParticipantId) -> Vec<Team> {
        let held = Team::ALL
            .into_iter()
            .filter(|team| self.allocation[team.index()] == Some(departed))
            .collect();
        self.allocation = [None; Team::COUNT];
        held
    }
}
