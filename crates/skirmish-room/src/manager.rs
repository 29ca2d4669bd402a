//! Room manager: creates, tracks, and routes participants to rooms.

use std::collections::HashMap;
use std::sync::Arc;

use skirmish_game::{EventProcessor, EventQueue, GameState, MapDescriptor};
use skirmish_protocol::{ParticipantId, RoomId, RoomSnapshot};

use crate::{Room, RoomConfig, RoomError};

/// Manages all rooms on a server and tracks which participant is in which.
///
/// This is the registry the session layer talks to. Rooms are handed out
/// as `Arc<Room>` so callers can work on a room without holding the
/// manager.
pub struct RoomManager<P: EventProcessor + Default = EventQueue> {
    /// Live rooms, keyed by room ID.
    rooms: HashMap<RoomId, Arc<Room<P>>>,

    /// Maps each participant to the room they're currently in.
    /// A participant can be in at most ONE room at a time.
    participant_rooms: HashMap<ParticipantId, RoomId>,

    /// Defaults for every new room.
    config: RoomConfig,

    next_room_id: u64,
}

impl<P: EventProcessor + Default> RoomManager<P> {
    /// Creates a new, empty room manager.
    pub fn new(config: RoomConfig) -> Self {
        Self {
            rooms: HashMap::new(),
            participant_rooms: HashMap::new(),
            config,
            next_room_id: 1,
        }
    }

    fn allocate_room_id(&mut self) -> RoomId {
        let room_id = RoomId(self.next_room_id);
        self.next_room_id += 1;
        room_id
    }

    /// Creates a fresh lobby with a game on `map`.
    pub fn create_room(
        &mut self,
        room_name: impl Into<String>,
        map: MapDescriptor,
    ) -> Arc<Room<P>> {
        let room_id = self.allocate_room_id();
        let room = Room::new(room_id, room_name, &self.config);
        if let Err(e) = room.initialize(map) {
            // A freshly built room has no game yet.
            tracing::error!(%room_id, error = %e, "fresh room refused initialization");
        }
        let room = Arc::new(room);
        self.rooms.insert(room_id, Arc::clone(&room));
        tracing::info!(%room_id, name = room.room_name(), "room created");
        room
    }

    /// Creates a lobby around a previously saved game.
    pub fn restore_room(
        &mut self,
        room_name: impl Into<String>,
        game: GameState,
    ) -> Arc<Room<P>> {
        let room_id = self.allocate_room_id();
        let room = Arc::new(Room::restored(
            room_id,
            room_name,
            &self.config,
            game,
            P::default(),
        ));
        self.rooms.insert(room_id, Arc::clone(&room));
        tracing::info!(%room_id, name = room.room_name(), "room restored");
        room
    }

    /// Returns the room with the given ID.
    pub fn room(&self, room_id: RoomId) -> Result<Arc<Room<P>>, RoomError> {
        self.rooms
            .get(&room_id)
            .cloned()
            .ok_or(RoomError::NotFound(room_id))
    }

    /// Adds a participant to a lobby.
    ///
    /// Enforces the "one room at a time" invariant, refuses rooms that have
    /// started, and refuses rooms with no slots left.
    pub fn join_room(
        &mut self,
        participant: ParticipantId,
        room_id: RoomId,
    ) -> Result<Arc<Room<P>>, RoomError> {
        if let Some(current) = self.participant_rooms.get(&participant) {
            if *current == room_id {
                return Err(RoomError::AlreadyInRoom(participant, room_id));
            }
            return Err(RoomError::InAnotherRoom(participant, *current));
        }

        let room = self.room(room_id)?;
        if !room.is_open() {
            return Err(RoomError::AlreadyStarted(room_id));
        }
        if room.remaining() <= 0 {
            return Err(RoomError::RoomFull(room_id));
        }

        room.add_player(participant);
        self.participant_rooms.insert(participant, room_id);
        Ok(room)
    }

    /// Removes a participant from their current room and returns its ID.
    pub fn leave_room(&mut self, participant: ParticipantId) -> Result<RoomId, RoomError> {
        let room_id = self
            .participant_rooms
            .remove(&participant)
            .ok_or(RoomError::NotInRoom(participant))?;

        if let Some(room) = self.rooms.get(&room_id) {
            room.remove_player(participant);
        }
        Ok(room_id)
    }

    /// Drops a room and forgets every participant that was in it.
    ///
    /// Tasks still holding an `Arc` to the room keep a working room; it is
    /// simply no longer reachable through the manager.
    pub fn destroy_room(&mut self, room_id: RoomId) -> Result<(), RoomError> {
        self.rooms
            .remove(&room_id)
            .ok_or(RoomError::NotFound(room_id))?;
        self.participant_rooms.retain(|_, rid| *rid != room_id);
        tracing::info!(%room_id, "room destroyed");
        Ok(())
    }

    /// Destroys every lobby nobody is in. Returns the IDs removed.
    pub fn prune_empty(&mut self) -> Vec<RoomId> {
        let empty: Vec<RoomId> = self
            .rooms
            .values()
            .filter(|room| room.is_open() && room.players().is_empty())
            .map(|room| room.room_id())
            .collect();
        for room_id in &empty {
            self.rooms.remove(room_id);
            tracing::info!(%room_id, "empty room pruned");
        }
        self.participant_rooms.retain(|_, rid| !empty.contains(rid));
        empty
    }

    /// Returns the room a participant is currently in, if any.
    pub fn participant_room(&self, participant: &ParticipantId) -> Option<RoomId> {
        self.participant_rooms.get(participant).copied()
    }

    /// Snapshots of every open lobby, ordered by room ID.
    pub fn list_rooms(&self) -> Vec<RoomSnapshot> {
        let mut snapshots: Vec<RoomSnapshot> = self
            .rooms
            .values()
            .map(|room| room.create_snapshot())
            .filter(|snapshot| snapshot.open)
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.room_id);
        snapshots
    }

    /// Returns the number of live rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Lists all live room IDs.
    pub fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.keys().copied().collect()
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }
}

impl<P: EventProcessor + Default> Default for RoomManager<P> {
    fn default() -> Self {
        Self::new(RoomConfig::default())
    }
}
