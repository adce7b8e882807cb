//! The session orchestrator: one service instance per process, driving
//! the room registry from inbound commands.

use std::collections::HashMap;

use serde::Serialize;
use sixshooter_cards::Card;
use sixshooter_engine::GameState;
use sixshooter_protocol::{Command, PlayerId};
use sixshooter_room::{
    Event, EventSender, LeaveOutcome, RegistryConfig, Room, RoomListEntry, RoomRegistry,
};
use tokio::sync::{Mutex, mpsc};

use crate::SixshooterError;

/// The success payload of a handled command.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Outcome {
    /// A room snapshot (create / join / leave / ready / lookup).
    Room(Room),
    /// The room no longer exists (last member left).
    RoomGone,
    /// The game was dealt; the snapshot carries it.
    Started(Room),
    /// The caller's drawn cards plus the resulting state. Drawn cards
    /// travel only in this reply, never in a broadcast.
    Drawn { cards: Vec<Card>, state: GameState },
    /// The state after a game command.
    Game(GameState),
    // Struct variant: internal tagging cannot carry a bare sequence.
    RoomList { rooms: Vec<RoomListEntry> },
    /// A lookup missed. A payload, not an error: clients probe for
    /// rooms routinely.
    NotFound,
}

/// Entry point for a transport layer.
///
/// Owns the room registry and the outbound event channel of every
/// connected player. All per-room mutation still happens inside the
/// room actors; the service locks only to route.
pub struct GameService {
    registry: Mutex<RoomRegistry>,
    connections: Mutex<HashMap<PlayerId, EventSender>>,
}

impl GameService {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            registry: Mutex::new(RoomRegistry::new(config)),
            connections: Mutex::new(HashMap::new()),
        }
    }

    /// Registers a connection and returns its event stream. A second
    /// registration for the same identity replaces the first stream.
    pub async fn register(&self, player: PlayerId) -> mpsc::UnboundedReceiver<Event> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.connections.lock().await.insert(player, tx);
        tracing::info!(%player, "player connected");
        rx
    }

    /// Drops the connection and leaves every room the identity sits in.
    /// Returns the per-room outcomes.
    pub async fn disconnect(&self, player: PlayerId) -> Vec<(sixshooter_protocol::RoomId, LeaveOutcome)> {
        self.connections.lock().await.remove(&player);
        let outcomes = self.registry.lock().await.disconnect(player).await;
        tracing::info!(%player, rooms = outcomes.len(), "player disconnected");
        outcomes
    }

    async fn sender_of(&self, player: PlayerId) -> Result<EventSender, SixshooterError> {
        self.connections
            .lock()
            .await
            .get(&player)
            .cloned()
            .ok_or(SixshooterError::NotConnected(player))
    }

    /// Dispatches one command on behalf of a registered player.
    pub async fn handle(
        &self,
        player: PlayerId,
        command: Command,
    ) -> Result<Outcome, SixshooterError> {
        match command {
            Command::CreateRoom { room_id, name } => {
                let sender = self.sender_of(player).await?;
                let room = self
                    .registry
                    .lock()
                    .await
                    .create_room(room_id, player, name, sender)?;
                Ok(Outcome::Room(room))
            }

            Command::JoinRoom { room_id, name } => {
                let sender = self.sender_of(player).await?;
                let room = self
                    .registry
                    .lock()
                    .await
                    .join_room(player, &room_id, name, sender)
                    .await?;
                Ok(Outcome::Room(room))
            }

            Command::LeaveRoom { room_id } => {
                let mut registry = self.registry.lock().await;
                match registry.leave_room(player, &room_id).await? {
                    LeaveOutcome::RoomEmpty => Ok(Outcome::RoomGone),
                    LeaveOutcome::Departed => match registry.get_room(&room_id).await? {
                        Some(room) => Ok(Outcome::Room(room)),
                        None => Ok(Outcome::RoomGone),
                    },
                }
            }

            Command::ToggleReady { room_id } => {
                let room = self
                    .registry
                    .lock()
                    .await
                    .toggle_ready(player, &room_id)
                    .await?;
                Ok(Outcome::Room(room))
            }

            Command::StartGame { room_id } => {
                let room = self
                    .registry
                    .lock()
                    .await
                    .start_game(player, &room_id)
                    .await?;
                Ok(Outcome::Started(room))
            }

            Command::DrawPhase { room_id, count } => {
                let (cards, state) = self
                    .registry
                    .lock()
                    .await
                    .draw_phase(player, &room_id, count)
                    .await?;
                Ok(Outcome::Drawn { cards, state })
            }

            Command::PlayCard {
                room_id,
                card_id,
                target,
            } => {
                let state = self
                    .registry
                    .lock()
                    .await
                    .play_card(player, &room_id, card_id, target)
                    .await?;
                Ok(Outcome::Game(state))
            }

            Command::RespondToAttack {
                room_id,
                defensive_card_ids,
            } => {
                let state = self
                    .registry
                    .lock()
                    .await
                    .respond_to_attack(player, &room_id, defensive_card_ids)
                    .await?;
                Ok(Outcome::Game(state))
            }

            Command::EndTurn { room_id } => {
                let state = self
                    .registry
                    .lock()
                    .await
                    .end_turn(player, &room_id)
                    .await?;
                Ok(Outcome::Game(state))
            }

            Command::GetRoom { room_id } => {
                match self.registry.lock().await.get_room(&room_id).await? {
                    Some(room) => Ok(Outcome::Room(room)),
                    None => Ok(Outcome::NotFound),
                }
            }

            Command::ListRooms => {
                let rooms = self.registry.lock().await.list_rooms().await;
                Ok(Outcome::RoomList { rooms })
            }
        }
    }
}
