//! Room lifecycle management for Sixshooter.
//!
//! Each room runs as an isolated Tokio task (actor model) owning its
//! lobby state and, once started, its game state. All room commands
//! funnel through the actor's channel, so per-room mutation is
//! serialized without locks.
//!
//! # Key types
//!
//! - [`Room`] — lobby state (members, ready flags, host, game)
//! - [`RoomHandle`] — send commands to a running room actor
//! - [`RoomRegistry`] — creates/destroys rooms, routes players
//! - [`Event`] — outbound broadcast vocabulary

mod config;
mod error;
mod lobby;
mod registry;
mod room;

pub use config::RegistryConfig;
pub use error::RoomError;
pub use lobby::{LeaveOutcome, Member, Room, RoomStatus, MAX_MEMBERS};
pub use registry::{RoomListEntry, RoomRegistry};
pub use room::{Event, EventSender, RoomHandle};
