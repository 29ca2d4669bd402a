//! The room aggregate: one lobby that becomes one match.
//!
//! A room is shared by every task serving one of its participants, so all
//! of its state sits behind one of two guards:
//!
//! - the **lobby guard** (`RwLock`) covers participants, the team
//!   allocation table, the host, capacity, and the map label;
//! - the **game guard** (`Mutex`) covers the game state, its event
//!   processor, and the starting-gold setting.
//!
//! When both are needed they are always taken lobby first. Listings and
//! participant queries only touch the lobby guard, so they are never stuck
//! behind an event submission draining on the game guard.
//!
//! The phase flag is an atomic. It flips `Lobby → Active` once, through a
//! compare-and-set made while holding both guards.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use skirmish_game::{EventProcessor, EventQueue, GameState, MapDescriptor, Rule};
use skirmish_protocol::{
    Alliance, ParticipantId, PlayerType, RoomId, RoomSnapshot, Team,
};

use crate::lobby::Lobby;
use crate::readiness;
use crate::{InitialGold, RoomConfig, RoomError, RoomPhase};

/// The game, once it exists, and the processor that mutates it.
struct GameSession<P> {
    state: GameState,
    processor: P,
}

/// Everything under the game guard.
struct GameSlot<P> {
    session: Option<GameSession<P>>,
    initial_gold: InitialGold,
}

/// A multiplayer session coordinator.
///
/// Share it behind an `Arc`; every method takes `&self`.
///
/// # Preconditions callers uphold
///
/// Team and host assignment do not check membership: allocating a team or
/// the host to someone who never joined is accepted as is. Nor does the
/// room refuse joins past its capacity; [`RoomManager`](crate::RoomManager)
/// does that using [`remaining`](Self::remaining). [`start_game`](Self::start_game)
/// does not re-check [`is_ready`](Self::is_ready); use
/// [`start_game_if_ready`](Self::start_game_if_ready) for that.
pub struct Room<P: EventProcessor = EventQueue> {
    room_id: RoomId,
    room_name: String,
    saved_game: bool,
    rule: Rule,
    phase: AtomicU8,
    lobby: RwLock<Lobby>,
    game: Mutex<GameSlot<P>>,
}

impl<P: EventProcessor> Room<P> {
    /// Creates a fresh lobby. The room has no game until
    /// [`initialize`](Self::initialize) is called.
    pub fn new(room_id: RoomId, room_name: impl Into<String>, config: &RoomConfig) -> Self {
        Self {
            room_id,
            room_name: room_name.into(),
            saved_game: false,
            rule: config.rule.clone(),
            phase: AtomicU8::new(RoomPhase::Lobby.as_u8()),
            lobby: RwLock::new(Lobby::new(config.capacity, config.map_name.clone())),
            game: Mutex::new(GameSlot {
                session: None,
                initial_gold: InitialGold::Amount(config.initial_gold),
            }),
        }
    }

    /// Creates a lobby around a previously saved game. Gold is inherited
    /// from the save and the game's one-shot setup is skipped on start.
    pub fn restored(
        room_id: RoomId,
        room_name: impl Into<String>,
        config: &RoomConfig,
        game: GameState,
        processor: P,
    ) -> Self {
        let rule = game.rule().clone();
        Self {
            room_id,
            room_name: room_name.into(),
            saved_game: true,
            rule,
            phase: AtomicU8::new(RoomPhase::Lobby.as_u8()),
            lobby: RwLock::new(Lobby::new(config.capacity, config.map_name.clone())),
            game: Mutex::new(GameSlot {
                session: Some(GameSession {
                    state: game,
                    processor,
                }),
                initial_gold: InitialGold::Inherited,
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Guards
    // -----------------------------------------------------------------------

    // Lobby and game data are plain values that stay consistent at every
    // panic point, so poisoned guards are recovered rather than propagated.

    fn lobby_read(&self) -> RwLockReadGuard<'_, Lobby> {
        self.lobby.read().unwrap_or_else(|e| e.into_inner())
    }

    fn lobby_write(&self) -> RwLockWriteGuard<'_, Lobby> {
        self.lobby.write().unwrap_or_else(|e| e.into_inner())
    }

    fn game_lock(&self) -> MutexGuard<'_, GameSlot<P>> {
        self.game.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Runs `f` on the game while the room is still a lobby.
    fn with_lobby_game<T>(
        &self,
        f: impl FnOnce(&mut GameSlot<P>) -> T,
    ) -> Result<T, RoomError> {
        let mut slot = self.game_lock();
        if slot.session.is_none() {
            return Err(RoomError::NotInitialized(self.room_id));
        }
        if !self.is_open() {
            return Err(RoomError::AlreadyStarted(self.room_id));
        }
        Ok(f(&mut *slot))
    }

    /// Runs `f` on the game in any phase.
    fn with_game<T>(&self, f: impl FnOnce(&GameState) -> T) -> Result<T, RoomError> {
        let slot = self.game_lock();
        slot.session
            .as_ref()
            .map(|session| f(&session.state))
            .ok_or(RoomError::NotInitialized(self.room_id))
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Builds a fresh game on `map` with a new processor.
    pub fn initialize(&self, map: MapDescriptor) -> Result<(), RoomError>
    where
        P: Default,
    {
        self.initialize_with(map, P::default())
    }

    /// Builds a fresh game on `map`, driven by `processor`.
    ///
    /// Each team starts in its own alliance (team index + 1).
    pub fn initialize_with(&self, map: MapDescriptor, processor: P) -> Result<(), RoomError> {
        let mut slot = self.game_lock();
        if slot.session.is_some() {
            return Err(RoomError::AlreadyInitialized(self.room_id));
        }

        let mut state = GameState::new(map, self.rule.clone());
        for team in Team::ALL {
            if let Some(player) = state.player_mut(team) {
                player.set_alliance(team.default_alliance());
            }
        }
        tracing::info!(
            room_id = %self.room_id,
            map = %state.map().name,
            "game initialized"
        );
        slot.session = Some(GameSession { state, processor });
        Ok(())
    }

    /// Starts the match.
    ///
    /// Runs the game's one-shot setup (unless this is a restored save),
    /// hands every controlled team to a remote participant, and moves the
    /// room to [`RoomPhase::Active`]. Exactly one caller wins; the others get
    /// [`RoomError::AlreadyStarted`].
    pub fn start_game(&self) -> Result<(), RoomError> {
        self.transition(false).map(|_| ())
    }

    /// Starts the match only if [`is_ready`](Self::is_ready) holds.
    ///
    /// Readiness and the phase change are decided under the same guards, so
    /// a departure cannot slip in between them. Returns `Ok(false)` and
    /// leaves the room open when it is not ready.
    pub fn start_game_if_ready(&self) -> Result<bool, RoomError> {
        self.transition(true)
    }

    fn transition(&self, require_ready: bool) -> Result<bool, RoomError> {
        // Started rooms never reopen; answer before touching either guard.
        if !self.is_open() {
            return Err(RoomError::AlreadyStarted(self.room_id));
        }

        // Joins, departures and re-allocation wait until the phase is set.
        let lobby = self.lobby_write();
        let mut slot = self.game_lock();
        let session = slot
            .session
            .as_mut()
            .ok_or(RoomError::NotInitialized(self.room_id))?;

        if !self.is_open() {
            return Err(RoomError::AlreadyStarted(self.room_id));
        }
        if require_ready && !readiness::is_ready(&lobby.allocation, &session.state) {
            return Ok(false);
        }

        self.phase
            .compare_exchange(
                RoomPhase::Lobby.as_u8(),
                RoomPhase::Active.as_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .map_err(|_| RoomError::AlreadyStarted(self.room_id))?;

        if !self.saved_game {
            session.state.initialize();
        }
        let mut seated = 0;
        for team in Team::ALL {
            if let Some(player) = session.state.player_mut(team) {
                if player.player_type().is_active() {
                    player.set_player_type(PlayerType::Remote);
                    seated += 1;
                }
            }
        }

        tracing::info!(
            room_id = %self.room_id,
            seated,
            saved_game = self.saved_game,
            "game started"
        );
        Ok(true)
    }

    /// Applies `event` and everything it causes, then returns the number of
    /// dispatch steps it took.
    ///
    /// Blocks the calling thread until the processor is idle. Submissions to
    /// one room are serialized; there is no timeout.
    pub fn submit_game_event(&self, event: P::Event) -> Result<usize, RoomError> {
        let mut slot = self.game_lock();
        let session = slot
            .session
            .as_mut()
            .ok_or(RoomError::NotInitialized(self.room_id))?;
        if self.is_open() {
            return Err(RoomError::NotStarted(self.room_id));
        }

        session.processor.submit(event);
        let mut steps = 0;
        while session.processor.is_processing() {
            session.processor.dispatch_step(&mut session.state);
            steps += 1;
        }

        tracing::debug!(room_id = %self.room_id, steps, "game event drained");
        Ok(steps)
    }

    // -----------------------------------------------------------------------
    // Participants
    // -----------------------------------------------------------------------

    /// Adds a participant. Returns `false` if they were already here.
    pub fn add_player(&self, id: ParticipantId) -> bool {
        let mut lobby = self.lobby_write();
        let inserted = lobby.participants.insert(id);
        if inserted {
            tracing::info!(
                room_id = %self.room_id,
                participant = %id,
                participants = lobby.participants.len(),
                "participant joined"
            );
        }
        inserted
    }

    /// Removes a participant. Returns `false` if they were not here.
    ///
    /// While the room is a lobby, a departure also clears the entire team
    /// allocation table, resets the teams the departed participant held to
    /// [`PlayerType::None`], and drops them as host. After the game starts
    /// only the participant set changes.
    pub fn remove_player(&self, id: ParticipantId) -> bool {
        let mut lobby = self.lobby_write();
        let removed = lobby.participants.remove(&id);

        if self.is_open() {
            let held = lobby.release_teams(id);
            if !held.is_empty() {
                let mut slot = self.game_lock();
                if let Some(session) = slot.session.as_mut() {
                    for team in &held {
                        if let Some(player) = session.state.player_mut(*team) {
                            player.set_player_type(PlayerType::None);
                        }
                    }
                }
            }
            if lobby.host == Some(id) {
                lobby.host = None;
            }
            tracing::debug!(
                room_id = %self.room_id,
                participant = %id,
                released = held.len(),
                "team table reset"
            );
        }

        if removed {
            tracing::info!(
                room_id = %self.room_id,
                participant = %id,
                participants = lobby.participants.len(),
                "participant left"
            );
        }
        removed
    }

    /// An independent copy of the participant set.
    pub fn players(&self) -> HashSet<ParticipantId> {
        self.lobby_read().participants.clone()
    }

    pub fn set_host_player(&self, id: Option<ParticipantId>) {
        self.lobby_write().host = id;
    }

    pub fn host_player(&self) -> Option<ParticipantId> {
        self.lobby_read().host
    }

    /// Assigns `team` to `id`, or clears it with `None`.
    pub fn set_team_allocation(&self, team: Team, id: Option<ParticipantId>) {
        self.lobby_write().allocation[team.index()] = id;
    }

    /// A copy of the four-slot allocation table.
    pub fn team_allocation(&self) -> [Option<ParticipantId>; Team::COUNT] {
        self.lobby_read().allocation
    }

    // -----------------------------------------------------------------------
    // Lobby settings
    // -----------------------------------------------------------------------

    pub fn set_capacity(&self, capacity: usize) {
        self.lobby_write().capacity = capacity;
    }

    pub fn capacity(&self) -> usize {
        self.lobby_read().capacity
    }

    /// `capacity - participants`; negative if capacity was lowered below
    /// the head count.
    pub fn remaining(&self) -> i64 {
        self.lobby_read().remaining()
    }

    /// Sets the map label shown in listings. Does not change the game's map.
    pub fn set_map_name(&self, name: impl Into<String>) {
        self.lobby_write().map_name = Some(name.into());
    }

    pub fn map_name(&self) -> Option<String> {
        self.lobby_read().map_name.clone()
    }

    /// Sets the controller of `team`. No-op if the team has no player.
    pub fn set_player_type(&self, team: Team, player_type: PlayerType) -> Result<(), RoomError> {
        self.with_lobby_game(|slot| {
            if let Some(player) = slot.session.as_mut().and_then(|s| s.state.player_mut(team)) {
                player.set_player_type(player_type);
            }
        })
    }

    /// Moves `team` into `alliance`. No-op if the team has no player.
    pub fn set_alliance(&self, team: Team, alliance: Alliance) -> Result<(), RoomError> {
        self.with_lobby_game(|slot| {
            if let Some(player) = slot.session.as_mut().and_then(|s| s.state.player_mut(team)) {
                player.set_alliance(alliance);
            }
        })
    }

    /// The alliance of `team`, or `None` if there is no game or no player.
    pub fn alliance(&self, team: Team) -> Option<Alliance> {
        self.with_game(|state| state.player(team).map(|p| p.alliance()))
            .ok()
            .flatten()
    }

    /// Sets the starting gold and immediately overwrites every team's
    /// current gold with it.
    pub fn set_initial_gold(&self, gold: i32) -> Result<(), RoomError> {
        self.with_lobby_game(|slot| {
            slot.initial_gold = InitialGold::Amount(gold);
            if let Some(session) = slot.session.as_mut() {
                for team in Team::ALL {
                    if let Some(player) = session.state.player_mut(team) {
                        player.set_gold(gold);
                    }
                }
            }
        })
    }

    pub fn initial_gold(&self) -> InitialGold {
        self.game_lock().initial_gold
    }

    pub fn set_max_population(&self, population: u32) -> Result<(), RoomError> {
        self.with_lobby_game(|slot| {
            if let Some(session) = slot.session.as_mut() {
                session.state.rule_mut().set_max_population(population);
            }
        })
    }

    pub fn max_population(&self) -> Result<u32, RoomError> {
        self.with_game(|state| state.rule().max_population())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Returns `true` if at least two allocated, map-seated teams belong to
    /// different alliances. Always `false` before the game exists.
    ///
    /// Only a lobby can be ready; an active room answers without touching
    /// the game guard.
    pub fn is_ready(&self) -> bool {
        if !self.is_open() {
            return false;
        }
        let allocation = self.lobby_read().allocation;
        let slot = self.game_lock();
        slot.session
            .as_ref()
            .is_some_and(|session| readiness::is_ready(&allocation, &session.state))
    }

    pub fn is_game_over(&self) -> bool {
        self.with_game(GameState::is_game_over).unwrap_or(false)
    }

    /// A deep copy of the live game, safe to hand to a client.
    pub fn game_copy(&self) -> Result<GameState, RoomError> {
        self.with_game(GameState::clone)
    }

    /// The descriptor of the map the game is played on.
    pub fn map(&self) -> Result<MapDescriptor, RoomError> {
        self.with_game(|state| state.map().clone())
    }

    /// A listing summary built from lobby data only.
    pub fn create_snapshot(&self) -> RoomSnapshot {
        let lobby = self.lobby_read();
        RoomSnapshot {
            room_id: self.room_id,
            open: self.is_open(),
            room_name: self.room_name.clone(),
            map_name: lobby.map_name.clone(),
            capacity: lobby.capacity,
            remaining: lobby.remaining(),
        }
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn room_name(&self) -> &str {
        &self.room_name
    }

    pub fn is_saved_game(&self) -> bool {
        self.saved_game
    }

    pub fn phase(&self) -> RoomPhase {
        RoomPhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    pub fn is_open(&self) -> bool {
        self.phase().is_open()
    }
}

impl<P: EventProcessor> std::fmt::Debug for Room<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Room")
            .field("room_id", &self.room_id)
            .field("room_name", &self.room_name)
            .field("phase", &self.phase())
            .field("saved_game", &self.saved_game)
            .finish_non_exhaustive()
    }
}
