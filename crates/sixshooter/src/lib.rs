//! # Sixshooter
//!
//! Server-authoritative session engine for a western card shootout.
//!
//! The stack, bottom up:
//!
//! - `sixshooter-protocol` — identities, the inbound [`Command`]
//!   surface, and the wire codec
//! - `sixshooter-cards` — card/character/role reference data and the
//!   deck manager
//! - `sixshooter-engine` — the per-room game state machine and victory
//!   evaluator
//! - `sixshooter-room` — room lobbies, one actor task per room, and the
//!   room registry
//! - this crate — [`GameService`], the session orchestrator a transport
//!   layer drives with commands
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use sixshooter::prelude::*;
//!
//! # async fn run() -> Result<(), SixshooterError> {
//! let service = GameService::new(RegistryConfig::default());
//!
//! let mut events = service.register(PlayerId(1)).await;
//! let outcome = service
//!     .handle(
//!         PlayerId(1),
//!         Command::CreateRoom { room_id: RoomId::new("saloon"), name: "Annie".into() },
//!     )
//!     .await?;
//! # let _ = (outcome, events.recv().await);
//! # Ok(())
//! # }
//! ```
//!
//! [`Command`]: sixshooter_protocol::Command

mod error;
mod service;

pub use error::SixshooterError;
pub use service::{GameService, Outcome};

/// Installs a global tracing subscriber reading `RUST_LOG`. Safe to
/// call more than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

pub mod prelude {
    //! The usual working set for embedding the service.

    pub use crate::{GameService, Outcome, SixshooterError};
    pub use sixshooter_cards::{Ability, Card, CardKind, Character, Deck, Role};
    pub use sixshooter_engine::{
        ErrorKind, GameError, GamePlayer, GameState, PendingResponse, Phase, Winner,
    };
    pub use sixshooter_protocol::{CardId, Command, PlayerId, Recipient, RoomId};
    pub use sixshooter_room::{
        Event, LeaveOutcome, Member, RegistryConfig, Room, RoomError, RoomListEntry,
        RoomRegistry, RoomStatus,
    };
}
