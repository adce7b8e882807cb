//! Identity newtypes, the inbound command surface, and event addressing.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a player.
///
/// Assigned by the transport layer when a connection authenticates and
/// stable for the lifetime of that connection. The core trusts it as-is
/// (anti-cheat identity validation is out of scope).
///
/// `#[serde(transparent)]` keeps the wire shape a plain number:
/// `PlayerId(42)` serializes as `42`, not `{"0":42}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

/// A unique identifier for a room.
///
/// Room ids are caller-supplied strings (players pick a room code and
/// share it out of band), so unlike [`PlayerId`] this wraps a `String`
/// rather than a server-assigned number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A unique identifier for one physical card instance within a game.
///
/// Two cards of the same type are distinct instances — this id is what
/// tells them apart when a client names a card to play or discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Recipient — who should receive an event?
// ---------------------------------------------------------------------------

/// Specifies who should receive an outbound event.
///
/// Room mutations broadcast a snapshot to every member (`All`), while a
/// newly opened pending response is addressed to the responder alone
/// (`Player`). The transport layer does the actual delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipient {
    /// Send to every member of the room.
    All,

    /// Send to one specific player.
    Player(PlayerId),

    /// Send to everyone except the specified player.
    AllExcept(PlayerId),
}

// ---------------------------------------------------------------------------
// Command — the inbound command surface
// ---------------------------------------------------------------------------

/// A client-issued command, as delivered by the transport layer.
///
/// One variant per exposed operation. The transport attributes each
/// command to a [`PlayerId`] separately — identity never travels inside
/// the payload, so clients cannot claim to be someone else.
///
/// `#[serde(tag = "type")]` produces internally tagged JSON
/// (`{ "type": "JoinRoom", "room_id": "saloon", "name": "Ada" }`),
/// which is what the client SDK sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Create a room with the given id and become its host.
    CreateRoom { room_id: RoomId, name: String },

    /// Join an existing room under a display name.
    JoinRoom { room_id: RoomId, name: String },

    /// Leave a room. Leaving the last seat destroys the room.
    LeaveRoom { room_id: RoomId },

    /// Flip the ready flag in the lobby.
    ToggleReady { room_id: RoomId },

    /// Start the game (host only, 4-7 ready members).
    StartGame { room_id: RoomId },

    /// Draw cards at the start of a turn. `count` defaults to 2.
    DrawPhase { room_id: RoomId, count: Option<u32> },

    /// Play a card from hand, optionally naming a target player.
    PlayCard {
        room_id: RoomId,
        card_id: CardId,
        target: Option<PlayerId>,
    },

    /// Answer an outstanding attack with zero or more defensive cards.
    RespondToAttack {
        room_id: RoomId,
        defensive_card_ids: Vec<CardId>,
    },

    /// End the turn, passing play to the next living seat.
    EndTurn { room_id: RoomId },

    /// Fetch a room snapshot.
    GetRoom { room_id: RoomId },

    /// List all rooms with membership counts and status.
    ListRooms,
}

// =========================================================================
// Tests
// =========================================================================
