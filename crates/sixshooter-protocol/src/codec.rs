//! Codec trait and implementations for serializing payloads.
//!
//! The core hands the transport layer typed values (commands in, events
//! and snapshots out); a codec converts between those values and raw
//! bytes. Only [`JsonCodec`] ships today — a binary codec can be added
//! later without touching any other layer.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// A codec that can encode values to bytes and decode bytes back.
///
/// `Send + Sync + 'static` because the codec is shared across the
/// connection handler tasks for the lifetime of the process.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into bytes.
    ///
    /// # Errors
    /// Returns `ProtocolError::Encode` if serialization fails.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes bytes back into a value.
    ///
    /// # Errors
    /// Returns `ProtocolError::Decode` if the bytes are malformed or
    /// don't match the expected type.
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError>;
}

// ---------------------------------------------------------------------------
// JsonCodec
// ---------------------------------------------------------------------------

/// A [`Codec`] backed by `serde_json`.
///
/// Human-readable, which makes development and debugging painless;
/// behind the default `json` feature so consumers can opt out.
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::{CardId, Command, RoomId};

    #[test]
    fn test_json_codec_round_trips_commands() {
        let codec = JsonCodec;
        let cmd = Command::PlayCard {
            room_id: RoomId::new("saloon"),
            card_id: CardId(12),
            target: None,
        };
        let bytes = codec.encode(&cmd).unwrap();
        let decoded: Command = codec.decode(&bytes).unwrap();
        assert_eq!(cmd, decoded);
    }

    #[test]
    fn test_json_codec_decode_garbage_fails() {
        let codec = JsonCodec;
        let result: Result<Command, _> = codec.decode(b"not json at all");
        assert!(result.is_err());
    }
}
