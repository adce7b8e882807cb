//! One seat's roster entry.

use serde::{Deserialize, Serialize};
use sixshooter_cards::{Card, Character, Role};
use sixshooter_protocol::{CardId, PlayerId};

/// A player as the game sees them: identity plus dealt character, role,
/// life, and owned cards.
///
/// The seat position is assigned at deal time and never changes; the
/// roster keeps eliminated players in place so seats stay stable and
/// victory evaluation can see the full table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct GamePlayer {
    pub id: PlayerId,
    pub name: String,
    pub character: Character,
    pub role: Role,
    /// Current life, always within `0..=max_life`.
    pub life: u8,
    /// Character base life plus the role bonus.
    pub max_life: u8,
    /// Cards owned exclusively by this player, order irrelevant.
    pub hand: Vec<Card>,
    /// Equipment in play in front of this player.
    pub equipment: Vec<Card>,
    /// Equipped weapon; `None` implies range 1.
    pub weapon: Option<Card>,
    /// Offensive cards played this turn, reset at end of turn.
    pub attacks_played: u32,
    pub eliminated: bool,
    /// 0-based seat index, fixed at deal time.
    pub seat: usize,
}

impl GamePlayer {
    /// Whether this player's weapon lifts the attack quota.
    pub fn has_unlimited_weapon(&self) -> bool {
        self.weapon
            .map(|w| w.kind.unlimited_attacks())
            .unwrap_or(false)
    }

    /// Index of a card in hand by id.
    pub fn hand_index(&self, card_id: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == card_id)
    }

    /// Total cards this player could lose to a forced discard.
    pub fn holdings(&self) -> usize {
        self.hand.len() + self.equipment.len()
    }
}
