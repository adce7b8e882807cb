//! Room actor: an isolated Tokio task that owns one room.
//!
//! Each room runs in its own task, communicating with the outside world
//! through an mpsc channel. All mutation of the lobby and game state
//! happens inside the actor loop, so commands against one room are
//! processed strictly one at a time.

use std::collections::HashMap;

use rand::rngs::StdRng;
use sixshooter_cards::Card;
use sixshooter_engine::{DEFAULT_DRAW_COUNT, GameState, PendingResponse};
use sixshooter_protocol::{CardId, PlayerId, Recipient, RoomId};
use tokio::sync::{mpsc, oneshot};

use crate::{LeaveOutcome, Room, RoomError};

/// An outbound event from a room actor to a member's connection
/// handler. The broadcast vocabulary of the room layer.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
#[serde(bound(deserialize = "'de: 'static"))]
pub enum Event {
    /// Lobby membership or status changed.
    RoomUpdated(Room),
    PlayerJoined { player_id: PlayerId, name: String },
    PlayerLeft { player_id: PlayerId },
    /// Sent to every member when the game is dealt.
    GameStarted(GameState),
    /// Full state snapshot after any game command.
    GameStateUpdated(GameState),
    /// Sent to the response target alone when an attack opens a window.
    ResponseRequired(PendingResponse),
}

/// Channel sender for delivering events to a member.
pub type EventSender = mpsc::UnboundedSender<Event>;

/// Commands sent to a room actor through its channel.
///
/// The `oneshot::Sender` in each variant is the reply channel — the
/// caller sends a command and waits for the response on it. Rejections
/// travel back on the reply alone, never as broadcasts.
pub(crate) enum RoomCommand {
    Join {
        player_id: PlayerId,
        name: String,
        sender: EventSender,
        reply: oneshot::Sender<Result<Room, RoomError>>,
    },
    Leave {
        player_id: PlayerId,
        reply: oneshot::Sender<Result<LeaveOutcome, RoomError>>,
    },
    ToggleReady {
        player_id: PlayerId,
        reply: oneshot::Sender<Result<Room, RoomError>>,
    },
    Start {
        player_id: PlayerId,
        reply: oneshot::Sender<Result<Room, RoomError>>,
    },
    Draw {
        player_id: PlayerId,
        count: Option<u32>,
        reply: oneshot::Sender<Result<(Vec<Card>, GameState), RoomError>>,
    },
    Play {
        player_id: PlayerId,
        card_id: CardId,
        target: Option<PlayerId>,
        reply: oneshot::Sender<Result<GameState, RoomError>>,
    },
    Respond {
        player_id: PlayerId,
        card_ids: Vec<CardId>,
        reply: oneshot::Sender<Result<GameState, RoomError>>,
    },
    EndTurn {
        player_id: PlayerId,
        reply: oneshot::Sender<Result<GameState, RoomError>>,
    },
    Snapshot {
        reply: oneshot::Sender<Room>,
    },
    Shutdown,
}

/// Handle to a running room actor. Used to send commands to it.
///
/// Cheap to clone — an `mpsc::Sender` wrapper. The `RoomRegistry`
/// holds one per room.
#[derive(Clone)]
pub struct RoomHandle {
    room_id: RoomId,
    sender: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    fn unavailable(&self) -> RoomError {
        RoomError::Unavailable(self.room_id.clone())
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> RoomCommand,
    ) -> Result<T, RoomError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(make(reply_tx))
            .await
            .map_err(|_| self.unavailable())?;
        reply_rx.await.map_err(|_| self.unavailable())
    }

    pub async fn join(
        &self,
        player_id: PlayerId,
        name: String,
        sender: EventSender,
    ) -> Result<Room, RoomError> {
        self.request(|reply| RoomCommand::Join {
            player_id,
            name,
            sender,
            reply,
        })
        .await?
    }

    pub async fn leave(&self, player_id: PlayerId) -> Result<LeaveOutcome, RoomError> {
        self.request(|reply| RoomCommand::Leave { player_id, reply })
            .await?
    }

    pub async fn toggle_ready(&self, player_id: PlayerId) -> Result<Room, RoomError> {
        self.request(|reply| RoomCommand::ToggleReady { player_id, reply })
            .await?
    }

    pub async fn start(&self, player_id: PlayerId) -> Result<Room, RoomError> {
        self.request(|reply| RoomCommand::Start { player_id, reply })
            .await?
    }

    pub async fn draw_phase(
        &self,
        player_id: PlayerId,
        count: Option<u32>,
    ) -> Result<(Vec<Card>, GameState), RoomError> {
        self.request(|reply| RoomCommand::Draw {
            player_id,
            count,
            reply,
        })
        .await?
    }

    pub async fn play_card(
        &self,
        player_id: PlayerId,
        card_id: CardId,
        target: Option<PlayerId>,
    ) -> Result<GameState, RoomError> {
        self.request(|reply| RoomCommand::Play {
            player_id,
            card_id,
            target,
            reply,
        })
        .await?
    }

    pub async fn respond_to_attack(
        &self,
        player_id: PlayerId,
        card_ids: Vec<CardId>,
    ) -> Result<GameState, RoomError> {
        self.request(|reply| RoomCommand::Respond {
            player_id,
            card_ids,
            reply,
        })
        .await?
    }

    pub async fn end_turn(&self, player_id: PlayerId) -> Result<GameState, RoomError> {
        self.request(|reply| RoomCommand::EndTurn { player_id, reply })
            .await?
    }

    /// Requests the current room snapshot.
    pub async fn snapshot(&self) -> Result<Room, RoomError> {
        self.request(|reply| RoomCommand::Snapshot { reply }).await
    }

    /// Tells the room to shut down.
    pub async fn shutdown(&self) -> Result<(), RoomError> {
        self.sender
            .send(RoomCommand::Shutdown)
            .await
            .map_err(|_| self.unavailable())
    }
}

/// The internal room actor state. Runs inside a Tokio task.
struct RoomActor {
    room: Room,
    /// Per-member outbound channels.
    senders: HashMap<PlayerId, EventSender>,
    rng: StdRng,
    receiver: mpsc::Receiver<RoomCommand>,
}

impl RoomActor {
    /// Runs the actor loop, processing commands until shutdown.
    async fn run(mut self) {
        tracing::info!(room_id = %self.room.id, "room actor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                RoomCommand::Join {
                    player_id,
                    name,
                    sender,
                    reply,
                } => {
                    let result = self.handle_join(player_id, name, sender);
                    let _ = reply.send(result);
                }
                RoomCommand::Leave { player_id, reply } => {
                    let result = self.handle_leave(player_id);
                    let _ = reply.send(result);
                }
                RoomCommand::ToggleReady { player_id, reply } => {
                    let result = self.handle_toggle_ready(player_id);
                    let _ = reply.send(result);
                }
                RoomCommand::Start { player_id, reply } => {
                    let result = self.handle_start(player_id);
                    let _ = reply.send(result);
                }
                RoomCommand::Draw {
                    player_id,
                    count,
                    reply,
                } => {
                    let result = self.handle_draw(player_id, count);
                    let _ = reply.send(result);
                }
                RoomCommand::Play {
                    player_id,
                    card_id,
                    target,
                    reply,
                } => {
                    let result = self.handle_play(player_id, card_id, target);
                    let _ = reply.send(result);
                }
                RoomCommand::Respond {
                    player_id,
                    card_ids,
                    reply,
                } => {
                    let result = self.handle_respond(player_id, &card_ids);
                    let _ = reply.send(result);
                }
                RoomCommand::EndTurn { player_id, reply } => {
                    let result = self.handle_end_turn(player_id);
                    let _ = reply.send(result);
                }
                RoomCommand::Snapshot { reply } => {
                    let _ = reply.send(self.room.clone());
                }
                RoomCommand::Shutdown => {
                    tracing::info!(room_id = %self.room.id, "room shutting down");
                    break;
                }
            }
        }

        tracing::info!(room_id = %self.room.id, "room actor stopped");
    }

    fn handle_join(
        &mut self,
        player_id: PlayerId,
        name: String,
        sender: EventSender,
    ) -> Result<Room, RoomError> {
        self.room.join(player_id, name.clone())?;
        self.senders.insert(player_id, sender);
        tracing::info!(
            room_id = %self.room.id,
            %player_id,
            members = self.room.member_count(),
            "player joined"
        );

        self.dispatch(
            Recipient::AllExcept(player_id),
            Event::PlayerJoined { player_id, name },
        );
        self.dispatch(Recipient::All, Event::RoomUpdated(self.room.clone()));
        Ok(self.room.clone())
    }

    fn handle_leave(&mut self, player_id: PlayerId) -> Result<LeaveOutcome, RoomError> {
        let outcome = self.room.leave(player_id)?;
        self.senders.remove(&player_id);
        tracing::info!(
            room_id = %self.room.id,
            %player_id,
            members = self.room.member_count(),
            "player left"
        );

        if outcome == LeaveOutcome::Departed {
            self.dispatch(Recipient::All, Event::PlayerLeft { player_id });
            self.dispatch(Recipient::All, Event::RoomUpdated(self.room.clone()));
        }
        Ok(outcome)
    }

    fn handle_toggle_ready(&mut self, player_id: PlayerId) -> Result<Room, RoomError> {
        self.room.toggle_ready(player_id)?;
        self.dispatch(Recipient::All, Event::RoomUpdated(self.room.clone()));
        Ok(self.room.clone())
    }

    fn handle_start(&mut self, player_id: PlayerId) -> Result<Room, RoomError> {
        let state = self.room.start(player_id, &mut self.rng)?.clone();
        tracing::info!(
            room_id = %self.room.id,
            players = state.players.len(),
            "game started"
        );

        self.dispatch(Recipient::All, Event::GameStarted(state));
        Ok(self.room.clone())
    }

    fn handle_draw(
        &mut self,
        player_id: PlayerId,
        count: Option<u32>,
    ) -> Result<(Vec<Card>, GameState), RoomError> {
        // Direct field access keeps the game borrow disjoint from the
        // RNG borrow.
        let room_id = self.room.id.clone();
        let game = self
            .room
            .game
            .as_mut()
            .ok_or(RoomError::GameNotFound(room_id))?;
        let drawn = game.draw_phase(player_id, count.unwrap_or(DEFAULT_DRAW_COUNT), &mut self.rng)?;
        let state = game.clone();

        // Drawn cards stay in the caller's reply; everyone else sees
        // the snapshot.
        self.dispatch(
            Recipient::AllExcept(player_id),
            Event::GameStateUpdated(state.clone()),
        );
        Ok((drawn, state))
    }

    fn handle_play(
        &mut self,
        player_id: PlayerId,
        card_id: CardId,
        target: Option<PlayerId>,
    ) -> Result<GameState, RoomError> {
        let room_id = self.room.id.clone();
        let game = self
            .room
            .game
            .as_mut()
            .ok_or(RoomError::GameNotFound(room_id))?;
        let opened = game.play_card(player_id, card_id, target, &mut self.rng)?;
        let state = self.after_game_command();

        if let Some(pending) = opened {
            self.dispatch(
                Recipient::Player(pending.target),
                Event::ResponseRequired(pending),
            );
        }
        Ok(state)
    }

    fn handle_respond(
        &mut self,
        player_id: PlayerId,
        card_ids: &[CardId],
    ) -> Result<GameState, RoomError> {
        self.game_mut()?.respond_to_attack(player_id, card_ids)?;
        Ok(self.after_game_command())
    }

    fn handle_end_turn(&mut self, player_id: PlayerId) -> Result<GameState, RoomError> {
        self.game_mut()?.end_turn(player_id)?;
        Ok(self.after_game_command())
    }

    fn game_mut(&mut self) -> Result<&mut GameState, RoomError> {
        let id = self.room.id.clone();
        self.room
            .game
            .as_mut()
            .ok_or(RoomError::GameNotFound(id))
    }

    /// Post-command bookkeeping: pick up a freshly recorded winner and
    /// broadcast the new snapshot.
    fn after_game_command(&mut self) -> GameState {
        self.room.sync_status();
        if self.room.status == crate::RoomStatus::Finished {
            tracing::info!(room_id = %self.room.id, "game finished");
        }

        let state = self
            .room
            .game
            .clone()
            .expect("caller holds a running game");
        self.dispatch(Recipient::All, Event::GameStateUpdated(state.clone()));
        state
    }

    /// Dispatches an event to the addressed members.
    fn dispatch(&self, recipient: Recipient, event: Event) {
        match recipient {
            Recipient::All => {
                for member in &self.room.members {
                    self.send_to(member.id, event.clone());
                }
            }
            Recipient::Player(pid) => {
                self.send_to(pid, event);
            }
            Recipient::AllExcept(excluded) => {
                for member in &self.room.members {
                    if member.id != excluded {
                        self.send_to(member.id, event.clone());
                    }
                }
            }
        }
    }

    /// Sends an event to a single member. Silently drops if the
    /// receiver is gone (member disconnected).
    fn send_to(&self, player_id: PlayerId, event: Event) {
        if let Some(sender) = self.senders.get(&player_id) {
            let _ = sender.send(event);
        }
    }
}

/// Spawns a room actor for a freshly created room and returns a handle
/// to communicate with it. The creator's event sender is wired in
/// immediately.
pub(crate) fn spawn_room(
    room: Room,
    creator_sender: EventSender,
    channel_size: usize,
    rng: StdRng,
) -> RoomHandle {
    let room_id = room.id.clone();
    let (tx, rx) = mpsc::channel(channel_size);

    let mut senders = HashMap::new();
    senders.insert(room.created_by, creator_sender);

    let actor = RoomActor {
        room,
        senders,
        rng,
        receiver: rx,
    };
    tokio::spawn(actor.run());

    RoomHandle {
        room_id,
        sender: tx,
    }
}
