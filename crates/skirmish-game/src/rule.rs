//! Static rule parameters.

use serde::{Deserialize, Serialize};

/// Rule parameters a game is played under.
///
/// Rooms only ever touch `max_population`; the rest ride along with the
/// game state so a saved game restores with the rules it was started with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub poison_damage: u32,
    pub kill_experience: u32,
    pub attack_experience: u32,
    pub counter_experience: u32,
    pub occupy_experience: u32,
    pub repair_experience: u32,
    pub commander_price_growth: u32,
    /// Maximum number of units a single team may field.
    pub max_population: u32,
}

impl Rule {
    pub fn max_population(&self) -> u32 {
        self.max_population
    }

    pub fn set_max_population(&mut self, population: u32) {
        self.max_population = population;
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            poison_damage: 10,
            kill_experience: 60,
            attack_experience: 30,
            counter_experience: 10,
            occupy_experience: 20,
            repair_experience: 10,
            commander_price_growth: 500,
            max_population: 20,
        }
    }
}
