//! The unified error surface a transport layer sees.

use sixshooter_engine::{ErrorKind, GameError};
use sixshooter_protocol::{PlayerId, ProtocolError};
use sixshooter_room::RoomError;

/// Any failure the service can hand back for a command.
#[derive(Debug, thiserror::Error)]
pub enum SixshooterError {
    /// The player never registered (or already disconnected).
    #[error("player {0} is not connected")]
    NotConnected(PlayerId),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Room(#[from] RoomError),
}

impl SixshooterError {
    /// HTTP-style status code for the transport layer.
    pub fn code(&self) -> u16 {
        let kind = match self {
            SixshooterError::NotConnected(_) => ErrorKind::InvalidState,
            SixshooterError::Protocol(_) => return 400,
            SixshooterError::Game(e) => e.kind(),
            SixshooterError::Room(e) => e.kind(),
        };
        match kind {
            ErrorKind::NotFound => 404,
            ErrorKind::InvalidState => 409,
            ErrorKind::RuleViolation => 400,
        }
    }
}
