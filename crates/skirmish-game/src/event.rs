//! Game events and the processor that applies them.
//!
//! Rooms hand events to an [`EventProcessor`] and then pump
//! [`dispatch_step`](EventProcessor::dispatch_step) until
//! [`is_processing`](EventProcessor::is_processing) goes false. An event may
//! cause further events (ending a turn begins the next one), so a single
//! submission can take several steps to settle.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use skirmish_protocol::{PlayerType, Team};

use crate::GameState;

/// Something that happened in a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// The team to move ends its turn.
    EndTurn,
    /// `team` starts moving.
    BeginTurn { team: Team },
    /// `team` leaves the match; its slot becomes uncontrolled.
    Surrender { team: Team },
    /// Re-evaluates whether only one alliance is left standing.
    CheckGameOver,
    /// Adds `delta` (possibly negative) to `team`'s gold.
    AdjustGold { team: Team, delta: i32 },
}

/// The queue and execution engine behind a room's game.
///
/// Implementations serialize their own dispatch: the room holds its game
/// lock for the whole submit-and-drain cycle, so `&mut self` is never
/// shared.
pub trait EventProcessor: Send + 'static {
    /// The event type this processor accepts.
    type Event: Send + 'static;

    /// Queues an event for execution.
    fn submit(&mut self, event: Self::Event);

    /// Returns `true` while queued work remains.
    fn is_processing(&self) -> bool;

    /// Advances queued work by one unit. Does nothing when idle.
    fn dispatch_step(&mut self, game: &mut GameState);
}

/// FIFO processor for [`GameEvent`]s: one event per step, consequences
/// appended to the back of the queue.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<GameEvent>,
    dispatched: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events applied since creation.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Events waiting to be applied.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl EventProcessor for EventQueue {
    type Event = GameEvent;

    fn submit(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    fn is_processing(&self) -> bool {
        !self.pending.is_empty()
    }

    fn dispatch_step(&mut self, game: &mut GameState) {
        let Some(event) = self.pending.pop_front() else {
            return;
        };
        self.dispatched += 1;
        if game.is_game_over() {
            tracing::trace!(?event, "game over, event dropped");
            return;
        }
        let follow_ups = execute(game, &event);
        tracing::trace!(?event, follow_ups = follow_ups.len(), "event applied");
        self.pending.extend(follow_ups);
    }
}

/// Applies one event and returns the events it causes.
fn execute(game: &mut GameState, event: &GameEvent) -> Vec<GameEvent> {
    match event {
        GameEvent::EndTurn => match game.advance_turn() {
            Some(team) => vec![GameEvent::BeginTurn { team }],
            None => Vec::new(),
        },
        GameEvent::BeginTurn { team } => {
            game.set_current_team(*team);
            Vec::new()
        }
        GameEvent::Surrender { team } => {
            if let Some(player) = game.player_mut(*team) {
                player.set_player_type(PlayerType::None);
            }
            vec![GameEvent::CheckGameOver]
        }
        GameEvent::CheckGameOver => {
            if game.standing_alliances().len() <= 1 {
                game.set_game_over();
            }
            Vec::new()
        }
        GameEvent::AdjustGold { team, delta } => {
            if let Some(player) = game.player_mut(*team) {
                player.set_gold(player.gold().saturating_add(*delta));
            }
            Vec::new()
        }
    }
}
