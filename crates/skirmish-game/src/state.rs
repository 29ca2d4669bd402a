//! The authoritative game aggregate.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use skirmish_protocol::{Alliance, Team};

use crate::{MapDescriptor, Player, Rule};

/// Board, rules, roster, and turn data for one match.
///
/// `Clone` is a full deep copy: maps, rules, and player records are plain
/// owned values, so a clone shares nothing with the original. Rooms rely
/// on this to hand consistent copies to resynchronizing clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    map: MapDescriptor,
    rule: Rule,
    players: [Option<Player>; Team::COUNT],
    turn: u32,
    current_team: Team,
    initialized: bool,
    game_over: bool,
}

impl GameState {
    /// Creates a game on `map` with four empty, unaligned player slots.
    pub fn new(map: MapDescriptor, rule: Rule) -> Self {
        Self {
            map,
            rule,
            players: Team::ALL.map(|_| Some(Player::new(Alliance(0)))),
            turn: 0,
            current_team: Team::ALL[0],
            initialized: false,
            game_over: false,
        }
    }

    /// Creates a game from an explicit roster, as a saved game would be
    /// restored. Slots holding `None` have no player record at all.
    pub fn from_roster(
        map: MapDescriptor,
        rule: Rule,
        players: [Option<Player>; Team::COUNT],
    ) -> Self {
        Self {
            map,
            rule,
            players,
            turn: 0,
            current_team: Team::ALL[0],
            initialized: false,
            game_over: false,
        }
    }

    /// One-shot setup run when a fresh match begins.
    ///
    /// Starts turn 1 with the lowest controlled team on a seat the map
    /// grants, and zeroes population counters. Calling it again on an
    /// already initialized game does nothing.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        for player in self.players.iter_mut().flatten() {
            player.set_population(0);
        }
        self.turn = 1;
        self.current_team = Team::ALL
            .into_iter()
            .find(|team| self.is_seated(*team))
            .unwrap_or(Team::ALL[0]);
        self.game_over = false;
        self.initialized = true;
        tracing::debug!(
            current_team = %self.current_team,
            "game state initialized"
        );
    }

    pub fn player(&self, team: Team) -> Option<&Player> {
        self.players[team.index()].as_ref()
    }

    pub fn player_mut(&mut self, team: Team) -> Option<&mut Player> {
        self.players[team.index()].as_mut()
    }

    /// Iterates teams that have a player record.
    pub fn players(&self) -> impl Iterator<Item = (Team, &Player)> {
        Team::ALL
            .into_iter()
            .filter_map(|team| self.player(team).map(|p| (team, p)))
    }

    pub fn map(&self) -> &MapDescriptor {
        &self.map
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn rule_mut(&mut self) -> &mut Rule {
        &mut self.rule
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_team(&self) -> Team {
        self.current_team
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns `true` if `team` is controlled by someone and the map grants
    /// it a seat.
    pub fn is_seated(&self, team: Team) -> bool {
        self.map.has_team_access(team)
            && self
                .player(team)
                .is_some_and(|p| p.player_type().is_active())
    }

    /// Distinct alliances among seated teams.
    pub fn standing_alliances(&self) -> HashSet<Alliance> {
        self.players()
            .filter(|(team, _)| self.is_seated(*team))
            .map(|(_, p)| p.alliance())
            .collect()
    }

    /// Passes the turn to the next seated team. Returns the team now to
    /// move, or `None` if nobody is seated.
    pub(crate) fn advance_turn(&mut self) -> Option<Team> {
        let start = self.current_team.index();
        for offset in 1..=Team::COUNT {
            let index = (start + offset) % Team::COUNT;
            let team = Team::ALL[index];
            if self.is_seated(team) {
                if index <= start {
                    self.turn += 1;
                }
                return Some(team);
            }
        }
        None
    }

    pub(crate) fn set_current_team(&mut self, team: Team) {
        self.current_team = team;
    }

    pub(crate) fn set_game_over(&mut self) {
        self.game_over = true;
    }
}
