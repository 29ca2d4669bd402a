//! Per-team player records.

use serde::{Deserialize, Serialize};
use skirmish_protocol::{Alliance, PlayerType};

/// One team's record inside a [`GameState`](crate::GameState).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    player_type: PlayerType,
    alliance: Alliance,
    gold: i32,
    population: u32,
}

impl Player {
    /// An empty, uncontrolled slot.
    pub fn new(alliance: Alliance) -> Self {
        Self {
            player_type: PlayerType::None,
            alliance,
            gold: 0,
            population: 0,
        }
    }

    pub fn player_type(&self) -> PlayerType {
        self.player_type
    }

    pub fn set_player_type(&mut self, player_type: PlayerType) {
        self.player_type = player_type;
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn set_alliance(&mut self, alliance: Alliance) {
        self.alliance = alliance;
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn set_gold(&mut self, gold: i32) {
        self.gold = gold;
    }

    pub fn population(&self) -> u32 {
        self.population
    }

    pub fn set_population(&mut self, population: u32) {
        self.population = population;
    }
}
