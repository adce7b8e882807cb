//! The character roster and ability codes.
//!
//! Abilities are enumerated tags, not free text: the engine consults
//! them at fixed hook points (attack quota, doubled defense
//! requirement). Most abilities in the roster have no hook in this core
//! yet — they ride along as data so clients can display them.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A character's special-rule tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    /// Draws a card each time he loses a life point.
    DrawOnDamage,
    /// Reveals his second draw; on a red suit he draws one more.
    LuckyDraw,
    /// Plays BANG! cards as Missed! and vice versa.
    CardSwap,
    /// Draws a random card from whoever damages him.
    RevengeDraw,
    /// May take his first draw from a player's hand.
    StealDraw,
    /// Always counts as having a Barrel in play.
    PermanentBarrel,
    /// Looks at the top three cards and keeps two.
    CardChoice,
    /// Flips two cards on every "draw!" and picks one.
    LuckyFlip,
    /// Always counts as having a Mustang in play.
    PermanentMustang,
    /// May take his first draw from the discard pile.
    DiscardDraw,
    /// Always counts as having a Scope in play.
    PermanentScope,
    /// May discard two cards to regain a life point.
    Heal,
    /// Opponents need two Missed! to cancel his BANG!.
    DoubleMissed,
    /// Draws a card whenever her hand empties.
    AutoDraw,
    /// Takes every card an eliminated player leaves behind.
    Scavenge,
    /// May play any number of BANG! cards per turn.
    UnlimitedBang,
}

/// A playable character: name, base life total, ability tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: &'static str,
    pub life: u8,
    pub ability: Ability,
}

/// The full 16-character roster.
pub const ROSTER: [Character; 16] = [
    Character { name: "Bart Cassidy", life: 4, ability: Ability::DrawOnDamage },
    Character { name: "Black Jack", life: 4, ability: Ability::LuckyDraw },
    Character { name: "Calamity Janet", life: 4, ability: Ability::CardSwap },
    Character { name: "El Gringo", life: 3, ability: Ability::RevengeDraw },
    Character { name: "Jesse Jones", life: 4, ability: Ability::StealDraw },
    Character { name: "Jourdonnais", life: 4, ability: Ability::PermanentBarrel },
    Character { name: "Kit Carlson", life: 4, ability: Ability::CardChoice },
    Character { name: "Lucky Duke", life: 4, ability: Ability::LuckyFlip },
    Character { name: "Paul Regret", life: 3, ability: Ability::PermanentMustang },
    Character { name: "Pedro Ramirez", life: 4, ability: Ability::DiscardDraw },
    Character { name: "Rose Doolan", life: 4, ability: Ability::PermanentScope },
    Character { name: "Sid Ketchum", life: 4, ability: Ability::Heal },
    Character { name: "Slab the Killer", life: 4, ability: Ability::DoubleMissed },
    Character { name: "Suzy Lafayette", life: 4, ability: Ability::AutoDraw },
    Character { name: "Vulture Sam", life: 4, ability: Ability::Scavenge },
    Character { name: "Willy the Kid", life: 4, ability: Ability::UnlimitedBang },
];

impl Character {
    /// Draws `count` distinct characters from the roster, uniformly at
    /// random and in random order.
    pub fn sample(count: usize, rng: &mut impl Rng) -> Vec<Character> {
        let mut roster = ROSTER.to_vec();
        roster.shuffle(rng);
        roster.truncate(count);
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_roster_names_are_distinct() {
        for (i, a) in ROSTER.iter().enumerate() {
            for b in &ROSTER[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_sample_is_disjoint() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked = Character::sample(7, &mut rng);
        assert_eq!(picked.len(), 7);
        for (i, a) in picked.iter().enumerate() {
            for b in &picked[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_base_life_is_three_or_four() {
        for c in ROSTER {
            assert!(c.life == 3 || c.life == 4, "{} has life {}", c.name, c.life);
        }
    }
}
