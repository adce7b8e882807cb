//! Reference data and the deck manager for Sixshooter.
//!
//! Everything here is either immutable lookup data (card types,
//! character roster, role distribution tables) or the one mutable piece
//! of card bookkeeping a game needs: the [`Deck`] with its draw and
//! discard piles.
//!
//! All randomness (shuffling, sampling) flows through `&mut impl Rng`
//! parameters so callers — and above all tests — control the source.

mod card;
mod character;
mod deck;
mod role;

pub use card::{Card, CardCategory, CardKind};
pub use character::{Ability, Character};
pub use deck::Deck;
pub use role::{Role, UnsupportedMemberCount};
