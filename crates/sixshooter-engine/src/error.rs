//! Error types for the game engine.

use sixshooter_cards::{CardKind, UnsupportedMemberCount};
use sixshooter_protocol::{CardId, PlayerId};

use crate::Phase;

/// Coarse failure taxonomy, for callers that map rejections to wire
/// codes without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Something the command referenced does not exist.
    NotFound,
    /// The command is recognized but illegal in the current state.
    InvalidState,
    /// The command is well-timed but breaks a game rule.
    RuleViolation,
}

/// A rejected game command.
///
/// All rejections are local and non-fatal: state is unchanged and the
/// error is reported only to the issuing caller.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The acting identity holds no seat in this game.
    #[error("player {0} is not in this game")]
    PlayerNotInGame(PlayerId),

    /// The named target holds no seat in this game.
    #[error("target player {0} not found")]
    TargetNotFound(PlayerId),

    /// The named card is not in the actor's hand.
    #[error("card {0} is not in your hand")]
    CardNotInHand(CardId),

    /// Someone other than the current player issued a turn command.
    #[error("not your turn")]
    NotYourTurn,

    /// The command only makes sense in a different phase.
    #[error("wrong phase: expected {expected}, currently {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    /// The card needs a target and none was supplied.
    #[error("{0} must target a player")]
    TargetRequired(CardKind),

    /// The one-attack-per-turn quota is spent.
    #[error("already played BANG! this turn")]
    AlreadyAttacked,

    /// A purely defensive card was played outside a response window.
    #[error("{0} can only be played in response to an attack")]
    InvalidPlayContext(CardKind),

    /// Forced discard against a player holding nothing.
    #[error("target has no cards")]
    TargetHasNoCards,

    /// An offensive action while another player's response is open.
    #[error("awaiting a response from another player")]
    ResponseOutstanding,

    /// A response arrived with no response window open.
    #[error("not awaiting an attack response")]
    NoPendingResponse,

    /// A response arrived from someone other than the recorded target.
    #[error("this response is not yours to make")]
    NotYourResponse,

    /// The game size has no role distribution table.
    #[error(transparent)]
    UnsupportedMemberCount(#[from] UnsupportedMemberCount),
}

impl GameError {
    /// The coarse taxonomy bucket this rejection falls into.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::PlayerNotInGame(_)
            | GameError::TargetNotFound(_)
            | GameError::CardNotInHand(_) => ErrorKind::NotFound,

            GameError::NotYourTurn
            | GameError::WrongPhase { .. }
            | GameError::NoPendingResponse
            | GameError::NotYourResponse
            | GameError::ResponseOutstanding => ErrorKind::InvalidState,

            GameError::TargetRequired(_)
            | GameError::AlreadyAttacked
            | GameError::InvalidPlayContext(_)
            | GameError::TargetHasNoCards
            | GameError::UnsupportedMemberCount(_) => ErrorKind::RuleViolation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_buckets() {
        assert_eq!(
            GameError::PlayerNotInGame(PlayerId(1)).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(GameError::NotYourTurn.kind(), ErrorKind::InvalidState);
        assert_eq!(
            GameError::TargetRequired(CardKind::Bang).kind(),
            ErrorKind::RuleViolation
        );
        assert_eq!(
            GameError::UnsupportedMemberCount(UnsupportedMemberCount(3)).kind(),
            ErrorKind::RuleViolation
        );
    }

    #[test]
    fn test_messages_name_the_offender() {
        let e = GameError::CardNotInHand(CardId(9));
        assert!(e.to_string().contains("C-9"));

        let e = GameError::TargetRequired(CardKind::Bang);
        assert!(e.to_string().contains("BANG!"));
    }
}
