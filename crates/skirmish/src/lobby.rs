//! Async front door to the room registry.
//!
//! Session handlers run on Tokio, but a room's game guard is a blocking
//! lock and event submission drains synchronously. Everything that can
//! wait on the game guard runs on the blocking pool via
//! `tokio::task::spawn_blocking`; registry bookkeeping runs under a Tokio
//! mutex held only long enough to look up or update the index.

use std::sync::Arc;

use skirmish_game::{EventProcessor, EventQueue, GameState, MapDescriptor};
use skirmish_protocol::{ParticipantId, RoomId, RoomSnapshot};
use skirmish_room::{Room, RoomConfig, RoomError, RoomManager};
use tokio::sync::Mutex;

use crate::SkirmishError;

/// Shared lobby state for every connection handler on a server.
///
/// Wrap it in an `Arc` and hand a clone to each handler task.
pub struct LobbyService<P: EventProcessor + Default = EventQueue> {
    rooms: Mutex<RoomManager<P>>,
}

impl<P: EventProcessor + Default> LobbyService<P> {
    /// Creates a service with an empty registry.
    pub fn new(config: RoomConfig) -> Self {
        Self {
            rooms: Mutex::new(RoomManager::new(config)),
        }
    }

    /// Creates a fresh lobby on `map` and returns its ID.
    pub async fn create_room(&self, room_name: &str, map: MapDescriptor) -> RoomId {
        self.rooms.lock().await.create_room(room_name, map).room_id()
    }

    /// Reopens a saved game as a lobby and returns its ID.
    pub async fn restore_room(&self, room_name: &str, game: GameState) -> RoomId {
        self.rooms.lock().await.restore_room(room_name, game).room_id()
    }

    /// Returns a handle to a room.
    pub async fn room(&self, room_id: RoomId) -> Result<Arc<Room<P>>, SkirmishError> {
        Ok(self.rooms.lock().await.room(room_id)?)
    }

    /// Puts a participant in a lobby.
    pub async fn join_room(
        &self,
        participant: ParticipantId,
        room_id: RoomId,
    ) -> Result<(), SkirmishError> {
        self.rooms.lock().await.join_room(participant, room_id)?;
        Ok(())
    }

    /// Takes a participant out of whatever room they are in.
    ///
    /// Runs inline: a lobby never has a submission draining, and a started
    /// room does not touch its game guard on departure.
    pub async fn leave_room(&self, participant: ParticipantId) -> Result<RoomId, SkirmishError> {
        Ok(self.rooms.lock().await.leave_room(participant)?)
    }

    /// Snapshots of every open lobby.
    pub async fn list_rooms(&self) -> Vec<RoomSnapshot> {
        self.rooms.lock().await.list_rooms()
    }

    /// Starts a room once it is ready.
    pub async fn start_game(&self, room_id: RoomId) -> Result<(), SkirmishError> {
        let room = self.room(room_id).await?;
        let started = tokio::task::spawn_blocking(move || room.start_game_if_ready()).await??;
        if !started {
            return Err(SkirmishError::NotReady(room_id));
        }
        Ok(())
    }

    /// Applies a participant's game event in their room and returns the
    /// number of dispatch steps it took to settle.
    pub async fn submit_game_event(
        &self,
        participant: ParticipantId,
        event: P::Event,
    ) -> Result<usize, SkirmishError> {
        let room = {
            let rooms = self.rooms.lock().await;
            let room_id = rooms
                .participant_room(&participant)
                .ok_or(RoomError::NotInRoom(participant))?;
            rooms.room(room_id)?
        };
        let steps = tokio::task::spawn_blocking(move || room.submit_game_event(event)).await??;
        Ok(steps)
    }

    /// A consistent copy of a room's game, for resynchronizing a client.
    pub async fn game_copy(&self, room_id: RoomId) -> Result<GameState, SkirmishError> {
        let room = self.room(room_id).await?;
        Ok(tokio::task::spawn_blocking(move || room.game_copy()).await??)
    }

    /// Destroys a room and forgets its participants.
    pub async fn destroy_room(&self, room_id: RoomId) -> Result<(), SkirmishError> {
        self.rooms.lock().await.destroy_room(room_id)?;
        Ok(())
    }

    /// Destroys every empty lobby. Returns the IDs removed.
    pub async fn prune_empty(&self) -> Vec<RoomId> {
        self.rooms.lock().await.prune_empty()
    }
}
