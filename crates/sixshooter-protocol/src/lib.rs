//! Wire-facing types for Sixshooter.
//!
//! This crate defines the "language" the transport layer speaks to the
//! game core:
//!
//! - **Identities** ([`PlayerId`], [`RoomId`], [`CardId`]) — newtype ids
//!   shared by every layer above.
//! - **Commands** ([`Command`]) — the full inbound command surface, one
//!   variant per client-issued operation.
//! - **Addressing** ([`Recipient`]) — who an outbound event is for.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how payloads are
//!   converted to/from bytes.
//!
//! The protocol layer knows nothing about rooms or rules — it only knows
//! how requests and identities are shaped.

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{CardId, Command, PlayerId, Recipient, RoomId};
