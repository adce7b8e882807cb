//! Room lobby rules: membership, ready flags, host handoff, game start.
//!
//! Pure state, no channels. The actor in [`crate::room`] owns one of
//! these and serializes all mutation through its command loop.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Serialize};
use sixshooter_engine::GameState;
use sixshooter_protocol::{PlayerId, RoomId};

use crate::RoomError;

/// Hard cap on room membership, fixed by the 7-player role table.
pub const MAX_MEMBERS: usize = 7;

/// A member of a room's lobby.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: PlayerId,
    pub name: String,
    pub ready: bool,
    pub host: bool,
}

/// Room lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    /// Gathering members, game not yet started.
    Waiting,
    /// Game in progress.
    Playing,
    /// A winner has been recorded. Commands are still accepted.
    Finished,
}

/// What a successful leave did to the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// The member left; the room lives on.
    Departed,
    /// The last member left; the room should be destroyed.
    RoomEmpty,
}

/// One room's lobby state, plus the game once started.
///
/// Doubles as the snapshot type sent to clients, so every field is
/// serializable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct Room {
    pub id: RoomId,
    pub created_by: PlayerId,
    pub members: Vec<Member>,
    pub status: RoomStatus,
    /// Unix milliseconds at creation time.
    pub created_at_ms: u64,
    pub game: Option<GameState>,
}

impl Room {
    /// Creates a room with the creator as its sole member. The creator
    /// is the host and counts as ready.
    pub fn new(id: RoomId, creator: PlayerId, name: impl Into<String>) -> Self {
        let created_at_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();

        Self {
            id,
            created_by: creator,
            members: vec![Member {
                id: creator,
                name: name.into(),
                ready: true,
                host: true,
            }],
            status: RoomStatus::Waiting,
            created_at_ms,
            game: None,
        }
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_member(&self, player: PlayerId) -> bool {
        self.members.iter().any(|m| m.id == player)
    }

    fn member_index(&self, player: PlayerId) -> Result<usize, RoomError> {
        self.members
            .iter()
            .position(|m| m.id == player)
            .ok_or_else(|| RoomError::PlayerNotInRoom(player, self.id.clone()))
    }

    /// Adds a member to the lobby. Only legal while waiting, below the
    /// member cap, and for identities not already present. New members
    /// start not ready and never host.
    pub fn join(&mut self, player: PlayerId, name: impl Into<String>) -> Result<(), RoomError> {
        if self.status != RoomStatus::Waiting {
            return Err(RoomError::GameAlreadyStarted(self.id.clone()));
        }
        if self.members.len() >= MAX_MEMBERS {
            return Err(RoomError::RoomFull(self.id.clone()));
        }
        if self.is_member(player) {
            return Err(RoomError::AlreadyJoined(player, self.id.clone()));
        }

        self.members.push(Member {
            id: player,
            name: name.into(),
            ready: false,
            host: false,
        });
        Ok(())
    }

    /// Removes a member. A departing host hands the flag to the
    /// earliest remaining member; the last member out empties the room.
    pub fn leave(&mut self, player: PlayerId) -> Result<LeaveOutcome, RoomError> {
        let idx = self.member_index(player)?;
        let removed = self.members.remove(idx);

        if self.members.is_empty() {
            return Ok(LeaveOutcome::RoomEmpty);
        }
        if removed.host {
            self.members[0].host = true;
        }
        Ok(LeaveOutcome::Departed)
    }

    /// Flips a member's ready flag.
    pub fn toggle_ready(&mut self, player: PlayerId) -> Result<(), RoomError> {
        let idx = self.member_index(player)?;
        self.members[idx].ready = !self.members[idx].ready;
        Ok(())
    }

    /// Starts the game: host only, every non-host member ready, member
    /// count within the role table's range. Creates the game state
    /// exactly once and flips the room to Playing.
    pub fn start(
        &mut self,
        requester: PlayerId,
        rng: &mut impl Rng,
    ) -> Result<&GameState, RoomError> {
        if self.status != RoomStatus::Waiting || self.game.is_some() {
            return Err(RoomError::GameAlreadyStarted(self.id.clone()));
        }
        let idx = self.member_index(requester)?;
        if !self.members[idx].host {
            return Err(RoomError::NotHost(requester));
        }
        if self.members.iter().any(|m| !m.host && !m.ready) {
            return Err(RoomError::PlayersNotReady);
        }

        let seats: Vec<(PlayerId, String)> = self
            .members
            .iter()
            .map(|m| (m.id, m.name.clone()))
            .collect();
        let state = GameState::deal(&seats, rng)?;

        self.status = RoomStatus::Playing;
        Ok(self.game.insert(state))
    }

    /// Flips the room to Finished once the game records a winner.
    pub fn sync_status(&mut self) {
        if let Some(game) = &self.game {
            if game.winner.is_some() {
                self.status = RoomStatus::Finished;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn room() -> Room {
        Room::new(RoomId::new("saloon"), PlayerId(1), "host")
    }

    fn full_lobby(n: u64) -> Room {
        let mut r = room();
        for i in 2..=n {
            r.join(PlayerId(i), format!("p{i}")).unwrap();
            r.toggle_ready(PlayerId(i)).unwrap();
        }
        r
    }

    #[test]
    fn test_creator_is_ready_host() {
        let r = room();
        assert_eq!(r.member_count(), 1);
        assert!(r.members[0].ready);
        assert!(r.members[0].host);
        assert_eq!(r.status, RoomStatus::Waiting);
        assert!(r.game.is_none());
    }

    #[test]
    fn test_join_rules() {
        let mut r = room();
        r.join(PlayerId(2), "p2").unwrap();
        assert!(!r.members[1].ready);
        assert!(!r.members[1].host);

        assert!(matches!(
            r.join(PlayerId(2), "dupe"),
            Err(RoomError::AlreadyJoined(_, _))
        ));

        for i in 3..=7 {
            r.join(PlayerId(i), format!("p{i}")).unwrap();
        }
        assert!(matches!(
            r.join(PlayerId(8), "late"),
            Err(RoomError::RoomFull(_))
        ));
    }

    #[test]
    fn test_host_transfer_to_earliest_member() {
        let mut r = room();
        r.join(PlayerId(2), "p2").unwrap();
        r.join(PlayerId(3), "p3").unwrap();

        assert_eq!(r.leave(PlayerId(1)).unwrap(), LeaveOutcome::Departed);
        assert!(r.members[0].host, "earliest remaining member becomes host");
        assert_eq!(r.members[0].id, PlayerId(2));
    }

    #[test]
    fn test_last_leave_empties_the_room() {
        let mut r = room();
        assert_eq!(r.leave(PlayerId(1)).unwrap(), LeaveOutcome::RoomEmpty);
        assert!(matches!(
            r.leave(PlayerId(1)),
            Err(RoomError::PlayerNotInRoom(_, _))
        ));
    }

    #[test]
    fn test_start_requires_host() {
        let mut r = full_lobby(4);
        assert!(matches!(
            r.start(PlayerId(2), &mut StdRng::seed_from_u64(0)),
            Err(RoomError::NotHost(_))
        ));
    }

    #[test]
    fn test_start_requires_everyone_ready() {
        let mut r = room();
        for i in 2..=4 {
            r.join(PlayerId(i), format!("p{i}")).unwrap();
        }
        assert!(matches!(
            r.start(PlayerId(1), &mut StdRng::seed_from_u64(0)),
            Err(RoomError::PlayersNotReady)
        ));
    }

    #[test]
    fn test_start_rejects_small_lobby() {
        let mut r = full_lobby(3);
        let err = r.start(PlayerId(1), &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(matches!(err, RoomError::Game(_)));
        // The failed start leaves the lobby waiting.
        assert_eq!(r.status, RoomStatus::Waiting);
        assert!(r.game.is_none());
    }

    #[test]
    fn test_start_happy_path_is_once_only() {
        let mut r = full_lobby(4);
        let mut rng = StdRng::seed_from_u64(7);
        let state = r.start(PlayerId(1), &mut rng).unwrap();
        assert_eq!(state.players.len(), 4);
        assert_eq!(r.status, RoomStatus::Playing);

        assert!(matches!(
            r.start(PlayerId(1), &mut rng),
            Err(RoomError::GameAlreadyStarted(_))
        ));
        assert!(matches!(
            r.join(PlayerId(9), "late"),
            Err(RoomError::GameAlreadyStarted(_))
        ));
    }

    #[test]
    fn test_deterministic_deal_under_seeded_rng() {
        let mut a = full_lobby(5);
        let mut b = full_lobby(5);
        let sa = a.start(PlayerId(1), &mut StdRng::seed_from_u64(42)).unwrap();
        let sb = b.start(PlayerId(1), &mut StdRng::seed_from_u64(42)).unwrap();

        for (pa, pb) in sa.players.iter().zip(&sb.players) {
            assert_eq!(pa.role, pb.role);
            assert_eq!(pa.character, pb.character);
            assert_eq!(pa.hand, pb.hand);
        }
    }

    #[test]
    fn test_sync_status_flips_to_finished() {
        let mut r = full_lobby(4);
        r.start(PlayerId(1), &mut StdRng::seed_from_u64(0)).unwrap();
        r.sync_status();
        assert_eq!(r.status, RoomStatus::Playing);

        if let Some(game) = &mut r.game {
            game.winner = Some(sixshooter_engine::Winner {
                side: sixshooter_engine::VictorySide::Outlaws,
                message: "Outlaws win!".to_string(),
            });
        }
        r.sync_status();
        assert_eq!(r.status, RoomStatus::Finished);
    }
}
