//! The deck manager: draw pile, discard pile, and recycling.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use sixshooter_protocol::CardId;

use std::collections::VecDeque;

use crate::{Card, CardKind};

/// One game's draw and discard piles.
///
/// Cards are drawn from the front of the draw pile; discards append
/// most-recent-last. When the draw pile runs dry mid-draw the discard
/// pile is reshuffled in place to become the new draw pile — prior
/// discard order is deliberately lost (the recycle shuffle is uniform
/// over the recycled set).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    draw: VecDeque<Card>,
    discard: Vec<Card>,
}

impl Deck {
    /// Builds the canonical 80-card deck, assigns each physical card a
    /// unique id, and shuffles it uniformly.
    pub fn standard(rng: &mut impl Rng) -> Self {
        let mut cards = Vec::with_capacity(80);
        let mut next_id = 0u32;
        for kind in CardKind::ALL {
            for _ in 0..kind.deck_count() {
                cards.push(Card::new(CardId(next_id), kind));
                next_id += 1;
            }
        }
        cards.shuffle(rng);
        Self {
            draw: cards.into(),
            discard: Vec::new(),
        }
    }

    /// Creates a deck from an explicit draw-pile order. Test seam.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            draw: cards.into(),
            discard: Vec::new(),
        }
    }

    /// Removes and returns up to `n` cards from the front of the draw
    /// pile, recycling the discard pile as needed.
    ///
    /// Never errors: once both piles are exhausted the result is simply
    /// shorter than requested.
    pub fn draw(&mut self, n: usize, rng: &mut impl Rng) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            if self.draw.is_empty() {
                self.recycle(rng);
            }
            match self.draw.pop_front() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Moves a played or stripped card onto the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    /// Reshuffles the discard pile into a fresh draw pile.
    fn recycle(&mut self, rng: &mut impl Rng) {
        if self.discard.is_empty() {
            return;
        }
        let mut recycled = std::mem::take(&mut self.discard);
        recycled.shuffle(rng);
        self.draw = recycled.into();
    }

    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Iterates the draw pile front-to-back. Snapshot/test use.
    pub fn draw_pile(&self) -> impl Iterator<Item = &Card> {
        self.draw.iter()
    }
}
