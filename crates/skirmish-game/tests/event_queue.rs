//! Integration tests for the stock event queue.

use skirmish_game::{EventProcessor, EventQueue, GameEvent, GameState, MapDescriptor, Rule};
use skirmish_protocol::{Alliance, PlayerType, Team};

// =========================================================================
// Helpers
// =========================================================================

fn team(index: usize) -> Team {
    Team::new(index).unwrap()
}

/// Four remote teams, each in its own alliance, game initialized.
fn started_game() -> GameState {
    let mut game = GameState::new(MapDescriptor::open("plains", 10, 10), Rule::default());
    for t in Team::ALL {
        let player = game.player_mut(t).unwrap();
        player.set_player_type(PlayerType::Remote);
        player.set_alliance(t.default_alliance());
    }
    game.initialize();
    game
}

/// Pumps the queue until idle and returns how many steps it took.
fn drain(queue: &mut EventQueue, game: &mut GameState) -> usize {
    let mut steps = 0;
    while queue.is_processing() {
        queue.dispatch_step(game);
        steps += 1;
    }
    steps
}

// =========================================================================
// EventQueue
// =========================================================================

#[test]
fn test_new_queue_is_idle() {
    let queue = EventQueue::new();
    assert!(!queue.is_processing());
    assert_eq!(queue.pending(), 0);
    assert_eq!(queue.dispatched(), 0);
}

#[test]
fn test_dispatch_step_when_idle_is_noop() {
    let mut queue = EventQueue::new();
    let mut game = started_game();
    let before = game.clone();

    queue.dispatch_step(&mut game);

    assert_eq!(game, before);
    assert_eq!(queue.dispatched(), 0);
}

#[test]
fn test_end_turn_takes_two_steps() {
    let mut queue = EventQueue::new();
    let mut game = started_game();

    queue.submit(GameEvent::EndTurn);
    let steps = drain(&mut queue, &mut game);

    // EndTurn, then the BeginTurn it causes.
    assert_eq!(steps, 2);
    assert_eq!(game.current_team(), team(1));
}

#[test]
fn test_end_turn_wraps_to_next_round() {
    let mut queue = EventQueue::new();
    let mut game = started_game();

    for _ in 0..4 {
        queue.submit(GameEvent::EndTurn);
        drain(&mut queue, &mut game);
    }

    assert_eq!(game.current_team(), team(0));
    assert_eq!(game.turn(), 2);
}

#[test]
fn test_surrender_until_one_alliance_ends_game() {
    let mut queue = EventQueue::new();
    let mut game = started_game();

    queue.submit(GameEvent::Surrender { team: team(1) });
    queue.submit(GameEvent::Surrender { team: team(2) });
    drain(&mut queue, &mut game);
    assert!(!game.is_game_over());

    queue.submit(GameEvent::Surrender { team: team(3) });
    drain(&mut queue, &mut game);
    assert!(game.is_game_over());
    assert_eq!(
        game.player(team(3)).unwrap().player_type(),
        PlayerType::None
    );
}

#[test]
fn test_allied_survivors_end_game() {
    let mut queue = EventQueue::new();
    let mut game = started_game();
    game.player_mut(team(1)).unwrap().set_alliance(Alliance(1));

    queue.submit(GameEvent::Surrender { team: team(2) });
    queue.submit(GameEvent::Surrender { team: team(3) });
    drain(&mut queue, &mut game);

    assert!(game.is_game_over());
}

#[test]
fn test_events_after_game_over_are_dropped() {
    let mut queue = EventQueue::new();
    let mut game = started_game();
    for t in [1, 2, 3] {
        queue.submit(GameEvent::Surrender { team: team(t) });
    }
    drain(&mut queue, &mut game);
    assert!(game.is_game_over());

    queue.submit(GameEvent::AdjustGold { team: team(0), delta: 50 });
    drain(&mut queue, &mut game);

    assert_eq!(game.player(team(0)).unwrap().gold(), 0);
}

#[test]
fn test_adjust_gold_saturates() {
    let mut queue = EventQueue::new();
    let mut game = started_game();
    game.player_mut(team(0)).unwrap().set_gold(i32::MAX - 1);

    queue.submit(GameEvent::AdjustGold { team: team(0), delta: 10 });
    drain(&mut queue, &mut game);

    assert_eq!(game.player(team(0)).unwrap().gold(), i32::MAX);
}

#[test]
fn test_game_event_json_shape() {
    let json = serde_json::to_value(GameEvent::AdjustGold { team: team(2), delta: -5 }).unwrap();
    assert_eq!(json["type"], "adjust_gold");
    assert_eq!(json["team"], 2);
    assert_eq!(json["delta"], -5);

    let back: GameEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, GameEvent::AdjustGold { team: team(2), delta: -5 });
}
