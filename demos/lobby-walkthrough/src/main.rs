//! Walks one room from lobby to a finished match, logging each step.
//!
//! Run with `RUST_LOG=debug cargo run -p lobby-walkthrough` to see the
//! drain step counts as well.

use skirmish::prelude::*;

#[tokio::main]
async fn main() -> Result<(), SkirmishError> {
    skirmish::init_tracing();

    let lobby: LobbyService = LobbyService::new(RoomConfig {
        map_name: Some("Twin Rivers".into()),
        ..RoomConfig::default()
    });

    let map = MapDescriptor::open("twin-rivers", 20, 14);
    let room_id = lobby.create_room("friday night", map).await;
    for id in 1..=4 {
        lobby.join_room(ParticipantId(id), room_id).await?;
    }

    // Two against two: teams 0 and 2 in alliance 1, teams 1 and 3 in alliance 2.
    let room = lobby.room(room_id).await?;
    room.set_host_player(Some(ParticipantId(1)));
    for (index, id) in (0..Team::COUNT).zip(1u64..) {
        let team = Team::try_from(index)?;
        room.set_team_allocation(team, Some(ParticipantId(id)));
        room.set_player_type(team, PlayerType::Local)?;
        room.set_alliance(team, Alliance(index as u32 % 2 + 1))?;
    }
    room.set_initial_gold(800)?;

    match serde_json::to_string(&lobby.list_rooms().await) {
        Ok(listing) => tracing::info!(%listing, "lobby listing"),
        Err(e) => tracing::warn!(error = %e, "listing not serializable"),
    }

    lobby.start_game(room_id).await?;

    for round in 0..2 {
        for id in 1..=4 {
            lobby
                .submit_game_event(ParticipantId(id), GameEvent::EndTurn)
                .await?;
        }
        tracing::info!(round, "round complete");
    }

    for index in [1, 3] {
        let team = Team::try_from(index)?;
        lobby
            .submit_game_event(ParticipantId(index as u64 + 1), GameEvent::Surrender { team })
            .await?;
    }

    let game = lobby.game_copy(room_id).await?;
    tracing::info!(
        turn = game.turn(),
        game_over = game.is_game_over(),
        "walkthrough finished"
    );
    Ok(())
}
