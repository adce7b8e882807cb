//! The authoritative game state machine for one Sixshooter session.
//!
//! A [`GameState`] owns a single game's truth: seats, turn pointer,
//! phase, piles, the pending-response window, and the winner. Every
//! mutation goes through one of its command methods; each validates
//! fully before touching state, so a rejected command always leaves the
//! game exactly as it found it.
//!
//! # Key types
//!
//! - [`GameState`] — state + the command set (`deal`, `draw_phase`,
//!   `play_card`, `respond_to_attack`, `end_turn`)
//! - [`GamePlayer`] — one seat's roster entry
//! - [`PendingResponse`] — an open attack awaiting a defensive reply
//! - [`evaluate_victory`] — pure win-condition check over the roster
//! - [`GameError`] — rejections, each carrying an [`ErrorKind`]

mod error;
mod player;
mod state;
mod victory;

pub use error::{ErrorKind, GameError};
pub use player::GamePlayer;
pub use state::{
    DEFAULT_DRAW_COUNT, GameState, PendingResponse, Phase, ResponseKind,
};
pub use victory::{Winner, VictorySide, evaluate_victory};
