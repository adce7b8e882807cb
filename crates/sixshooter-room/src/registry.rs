//! Room registry: creates, tracks, and routes players to rooms.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use sixshooter_cards::Card;
use sixshooter_engine::GameState;
use sixshooter_protocol::{CardId, PlayerId, RoomId};

use crate::room::spawn_room;
use crate::{EventSender, LeaveOutcome, RegistryConfig, Room, RoomError, RoomHandle, RoomStatus};

/// Summary row for the room list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomListEntry {
    pub id: RoomId,
    pub member_count: usize,
    pub status: RoomStatus,
    pub created_at_ms: u64,
}

/// Tracks every active room and which rooms each identity sits in.
///
/// This is the entry point for room operations from the orchestrator.
/// An identity may be a lobby member of several rooms at once; a
/// disconnect leaves all of them.
pub struct RoomRegistry {
    config: RegistryConfig,
    /// Active rooms, keyed by room ID.
    rooms: HashMap<RoomId, RoomHandle>,
    /// Rooms each identity currently belongs to.
    memberships: HashMap<PlayerId, HashSet<RoomId>>,
}

impl RoomRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            rooms: HashMap::new(),
            memberships: HashMap::new(),
        }
    }

    fn room_rng(&self) -> StdRng {
        match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn handle(&self, room_id: &RoomId) -> Result<&RoomHandle, RoomError> {
        self.rooms
            .get(room_id)
            .ok_or_else(|| RoomError::NotFound(room_id.clone()))
    }

    fn track(&mut self, player: PlayerId, room_id: &RoomId) {
        self.memberships
            .entry(player)
            .or_default()
            .insert(room_id.clone());
    }

    fn untrack(&mut self, player: PlayerId, room_id: &RoomId) {
        if let Some(rooms) = self.memberships.get_mut(&player) {
            rooms.remove(room_id);
            if rooms.is_empty() {
                self.memberships.remove(&player);
            }
        }
    }

    /// Creates a room with a caller-supplied ID and spawns its actor,
    /// with the creator as the first member.
    pub fn create_room(
        &mut self,
        room_id: RoomId,
        creator: PlayerId,
        name: impl Into<String>,
        sender: EventSender,
    ) -> Result<Room, RoomError> {
        if self.rooms.contains_key(&room_id) {
            return Err(RoomError::RoomExists(room_id));
        }

        let room = Room::new(room_id.clone(), creator, name);
        let snapshot = room.clone();
        let handle = spawn_room(room, sender, self.config.channel_size, self.room_rng());

        self.rooms.insert(room_id.clone(), handle);
        self.track(creator, &room_id);
        tracing::info!(%room_id, %creator, "room created");
        Ok(snapshot)
    }

    pub async fn join_room(
        &mut self,
        player: PlayerId,
        room_id: &RoomId,
        name: impl Into<String>,
        sender: EventSender,
    ) -> Result<Room, RoomError> {
        let room = self.handle(room_id)?.join(player, name.into(), sender).await?;
        self.track(player, room_id);
        Ok(room)
    }

    /// Removes a player from a room. The last member out destroys the
    /// room: the actor is shut down and the handle dropped.
    pub async fn leave_room(
        &mut self,
        player: PlayerId,
        room_id: &RoomId,
    ) -> Result<LeaveOutcome, RoomError> {
        let outcome = self.handle(room_id)?.leave(player).await?;
        self.untrack(player, room_id);

        if outcome == LeaveOutcome::RoomEmpty {
            if let Some(handle) = self.rooms.remove(room_id) {
                let _ = handle.shutdown().await;
            }
            tracing::info!(%room_id, "room destroyed");
        }
        Ok(outcome)
    }

    pub async fn toggle_ready(
        &self,
        player: PlayerId,
        room_id: &RoomId,
    ) -> Result<Room, RoomError> {
        self.handle(room_id)?.toggle_ready(player).await
    }

    pub async fn start_game(&self, player: PlayerId, room_id: &RoomId) -> Result<Room, RoomError> {
        self.handle(room_id)?.start(player).await
    }

    pub async fn draw_phase(
        &self,
        player: PlayerId,
        room_id: &RoomId,
        count: Option<u32>,
    ) -> Result<(Vec<Card>, GameState), RoomError> {
        self.handle(room_id)?.draw_phase(player, count).await
    }

    pub async fn play_card(
        &self,
        player: PlayerId,
        room_id: &RoomId,
        card_id: CardId,
        target: Option<PlayerId>,
    ) -> Result<GameState, RoomError> {
        self.handle(room_id)?.play_card(player, card_id, target).await
    }

    pub async fn respond_to_attack(
        &self,
        player: PlayerId,
        room_id: &RoomId,
        card_ids: Vec<CardId>,
    ) -> Result<GameState, RoomError> {
        self.handle(room_id)?.respond_to_attack(player, card_ids).await
    }

    pub async fn end_turn(&self, player: PlayerId, room_id: &RoomId) -> Result<GameState, RoomError> {
        self.handle(room_id)?.end_turn(player).await
    }

    /// A room's full snapshot; `None` when no such room exists.
    pub async fn get_room(&self, room_id: &RoomId) -> Result<Option<Room>, RoomError> {
        match self.rooms.get(room_id) {
            Some(handle) => Ok(Some(handle.snapshot().await?)),
            None => Ok(None),
        }
    }

    /// Lists every active room. Rooms that fail to respond (shutting
    /// down) are silently skipped.
    pub async fn list_rooms(&self) -> Vec<RoomListEntry> {
        let mut entries = Vec::with_capacity(self.rooms.len());
        for handle in self.rooms.values() {
            if let Ok(room) = handle.snapshot().await {
                entries.push(RoomListEntry {
                    id: room.id,
                    member_count: room.members.len(),
                    status: room.status,
                    created_at_ms: room.created_at_ms,
                });
            }
        }
        entries
    }

    /// Leaves every room this identity belongs to, returning the
    /// per-room outcomes. Rooms that were already gone are skipped.
    pub async fn disconnect(&mut self, player: PlayerId) -> Vec<(RoomId, LeaveOutcome)> {
        let rooms: Vec<RoomId> = self
            .memberships
            .remove(&player)
            .map(|set| set.into_iter().collect())
            .unwrap_or_default();

        let mut outcomes = Vec::with_capacity(rooms.len());
        for room_id in rooms {
            // untrack already happened via the remove above; leave_room's
            // untrack is then a no-op.
            match self.leave_room(player, &room_id).await {
                Ok(outcome) => outcomes.push((room_id, outcome)),
                Err(err) => {
                    tracing::debug!(%room_id, %player, %err, "disconnect leave skipped");
                }
            }
        }
        outcomes
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Rooms the identity currently belongs to.
    pub fn rooms_of(&self, player: PlayerId) -> Vec<RoomId> {
        self.memberships
            .get(&player)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
