//! Error types for the room layer.

use sixshooter_engine::{ErrorKind, GameError};
use sixshooter_protocol::{PlayerId, RoomId};

/// Errors that can occur during room operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// A room with this ID already exists.
    #[error("room {0} already exists")]
    RoomExists(RoomId),

    /// The room does not exist.
    #[error("room {0} not found")]
    NotFound(RoomId),

    /// The room is full — no more member slots available.
    #[error("room {0} is full")]
    RoomFull(RoomId),

    /// The player is already a member of this room.
    #[error("player {0} already in room {1}")]
    AlreadyJoined(PlayerId, RoomId),

    /// The player is not a member of this room.
    #[error("player {0} not in room {1}")]
    PlayerNotInRoom(PlayerId, RoomId),

    /// The room's game has already been started.
    #[error("game in room {0} has already started")]
    GameAlreadyStarted(RoomId),

    /// Only the host may start the game.
    #[error("player {0} is not the host")]
    NotHost(PlayerId),

    /// Not every non-host member has readied up.
    #[error("not all players are ready")]
    PlayersNotReady,

    /// A game command arrived before the game was started.
    #[error("no game running in room {0}")]
    GameNotFound(RoomId),

    /// The room's command channel is full or closed.
    #[error("room {0} is unavailable")]
    Unavailable(RoomId),

    /// A rule rejection from the game state machine.
    #[error(transparent)]
    Game(#[from] GameError),
}

impl RoomError {
    /// The coarse classification the transport layer maps to a status.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RoomError::NotFound(_) | RoomError::PlayerNotInRoom(_, _) => ErrorKind::NotFound,
            RoomError::RoomExists(_)
            | RoomError::RoomFull(_)
            | RoomError::AlreadyJoined(_, _)
            | RoomError::GameAlreadyStarted(_)
            | RoomError::PlayersNotReady
            | RoomError::GameNotFound(_)
            | RoomError::Unavailable(_) => ErrorKind::InvalidState,
            RoomError::NotHost(_) => ErrorKind::RuleViolation,
            RoomError::Game(e) => e.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let id = RoomId::new("saloon");
        assert_eq!(RoomError::NotFound(id.clone()).kind(), ErrorKind::NotFound);
        assert_eq!(
            RoomError::RoomExists(id.clone()).kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(
            RoomError::NotHost(PlayerId(1)).kind(),
            ErrorKind::RuleViolation
        );
        assert_eq!(
            RoomError::Game(GameError::NotYourTurn).kind(),
            ErrorKind::InvalidState
        );
    }
}
