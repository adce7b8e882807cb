//! Card types and the physical card instance.
//!
//! A [`CardKind`] is the rules identity of a card; a [`Card`] is one
//! physical copy with its own [`CardId`]. Every derived attribute
//! (category, weapon range, deck copy count) is an exhaustive match on
//! the kind, so adding a card type forces every lookup to be revisited.

use serde::{Deserialize, Serialize};
use sixshooter_protocol::CardId;

use std::fmt;

// ---------------------------------------------------------------------------
// CardKind
// ---------------------------------------------------------------------------

/// The closed set of card types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Bang,
    Missed,
    Beer,
    Saloon,
    Stagecoach,
    WellsFargo,
    Diligenza,
    GeneralStore,
    Panic,
    CatBalou,
    Duel,
    Indians,
    Gatling,
    Barrel,
    Dynamite,
    Jail,
    Scope,
    Mustang,
    Appaloosa,
    Volcanic,
    Schofield,
    Remington,
    RevCarabine,
    Winchester,
}

/// The broad mechanical family a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardCategory {
    Offensive,
    Defensive,
    Draw,
    Equipment,
    Weapon,
}

impl CardKind {
    /// Every card kind, in deck-template order.
    pub const ALL: [CardKind; 24] = [
        CardKind::Bang,
        CardKind::Missed,
        CardKind::Beer,
        CardKind::Saloon,
        CardKind::Stagecoach,
        CardKind::WellsFargo,
        CardKind::Diligenza,
        CardKind::GeneralStore,
        CardKind::Panic,
        CardKind::CatBalou,
        CardKind::Duel,
        CardKind::Indians,
        CardKind::Gatling,
        CardKind::Barrel,
        CardKind::Dynamite,
        CardKind::Jail,
        CardKind::Scope,
        CardKind::Mustang,
        CardKind::Appaloosa,
        CardKind::Volcanic,
        CardKind::Schofield,
        CardKind::Remington,
        CardKind::RevCarabine,
        CardKind::Winchester,
    ];

    /// The mechanical family this kind belongs to.
    pub fn category(self) -> CardCategory {
        match self {
            CardKind::Bang
            | CardKind::Panic
            | CardKind::CatBalou
            | CardKind::Duel
            | CardKind::Indians
            | CardKind::Gatling => CardCategory::Offensive,

            CardKind::Missed | CardKind::Beer | CardKind::Saloon => CardCategory::Defensive,

            CardKind::Stagecoach
            | CardKind::WellsFargo
            | CardKind::Diligenza
            | CardKind::GeneralStore => CardCategory::Draw,

            CardKind::Barrel
            | CardKind::Dynamite
            | CardKind::Jail
            | CardKind::Scope
            | CardKind::Mustang
            | CardKind::Appaloosa => CardCategory::Equipment,

            CardKind::Volcanic
            | CardKind::Schofield
            | CardKind::Remington
            | CardKind::RevCarabine
            | CardKind::Winchester => CardCategory::Weapon,
        }
    }

    /// The firing range a weapon grants, `None` for non-weapons.
    /// Without a weapon in play a player's implied range is 1.
    pub fn weapon_range(self) -> Option<u8> {
        match self {
            CardKind::Volcanic => Some(1),
            CardKind::Schofield => Some(2),
            CardKind::Remington => Some(3),
            CardKind::RevCarabine => Some(4),
            CardKind::Winchester => Some(5),
            _ => None,
        }
    }

    /// Whether this weapon lifts the one-attack-per-turn quota.
    pub fn unlimited_attacks(self) -> bool {
        matches!(self, CardKind::Volcanic)
    }

    /// How many copies of this kind the canonical deck holds.
    ///
    /// The counts sum to exactly 80. Diligenza and Appaloosa are
    /// recognized types with zero copies in the template.
    pub fn deck_count(self) -> usize {
        match self {
            CardKind::Bang => 25,
            CardKind::Missed => 12,
            CardKind::Beer => 6,
            CardKind::Saloon => 1,
            CardKind::Stagecoach => 2,
            CardKind::WellsFargo => 1,
            CardKind::Diligenza => 0,
            CardKind::GeneralStore => 2,
            CardKind::Panic => 4,
            CardKind::CatBalou => 4,
            CardKind::Duel => 3,
            CardKind::Indians => 2,
            CardKind::Gatling => 1,
            CardKind::Barrel => 2,
            CardKind::Dynamite => 1,
            CardKind::Jail => 3,
            CardKind::Scope => 1,
            CardKind::Mustang => 2,
            CardKind::Appaloosa => 0,
            CardKind::Volcanic => 2,
            CardKind::Schofield => 3,
            CardKind::Remington => 1,
            CardKind::RevCarabine => 1,
            CardKind::Winchester => 1,
        }
    }

    /// The printed card name shown to players and written to game logs.
    pub fn display_name(self) -> &'static str {
        match self {
            CardKind::Bang => "BANG!",
            CardKind::Missed => "Missed!",
            CardKind::Beer => "Beer",
            CardKind::Saloon => "Saloon",
            CardKind::Stagecoach => "Stagecoach",
            CardKind::WellsFargo => "Wells Fargo",
            CardKind::Diligenza => "Diligenza",
            CardKind::GeneralStore => "General Store",
            CardKind::Panic => "Panic!",
            CardKind::CatBalou => "Cat Balou",
            CardKind::Duel => "Duel",
            CardKind::Indians => "Indians!",
            CardKind::Gatling => "Gatling",
            CardKind::Barrel => "Barrel",
            CardKind::Dynamite => "Dynamite",
            CardKind::Jail => "Jail",
            CardKind::Scope => "Scope",
            CardKind::Mustang => "Mustang",
            CardKind::Appaloosa => "Appaloosa",
            CardKind::Volcanic => "Volcanic",
            CardKind::Schofield => "Schofield",
            CardKind::Remington => "Remington",
            CardKind::RevCarabine => "Rev. Carabine",
            CardKind::Winchester => "Winchester",
        }
    }

    /// Short rules text for client display.
    pub fn description(self) -> &'static str {
        match self {
            CardKind::Bang => "Shoot another player",
            CardKind::Missed => "Defend against a BANG!",
            CardKind::Beer => "Recover 1 life point",
            CardKind::Saloon => "All players recover 1 life point",
            CardKind::Stagecoach => "Draw 2 cards",
            CardKind::WellsFargo => "Draw 3 cards",
            CardKind::Diligenza => "Draw 2 cards",
            CardKind::GeneralStore => "All players draw 1 card",
            CardKind::Panic => "Draw a card from a player at distance 1",
            CardKind::CatBalou => "Discard a card from any player",
            CardKind::Duel => "Challenge another player to a duel",
            CardKind::Indians => "All others discard a BANG! or lose 1 life",
            CardKind::Gatling => "All others discard a Missed! or lose 1 life",
            CardKind::Barrel => "May draw to dodge a BANG!",
            CardKind::Dynamite => "At turn start, may explode for 3 damage",
            CardKind::Jail => "Skip your turn unless you draw Hearts",
            CardKind::Scope => "You see others at distance -1",
            CardKind::Mustang => "Others see you at distance +1",
            CardKind::Appaloosa => "You see others at distance -1",
            CardKind::Volcanic => "Unlimited BANG! per turn",
            CardKind::Schofield => "Range 2",
            CardKind::Remington => "Range 3",
            CardKind::RevCarabine => "Range 4",
            CardKind::Winchester => "Range 5",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// One physical card instance.
///
/// Immutable once created. The [`CardId`] distinguishes it from other
/// copies of the same kind; at any moment a card sits in exactly one of
/// the draw pile, the discard pile, a hand, or an equipment zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
}

impl Card {
    pub fn new(id: CardId, kind: CardKind) -> Self {
        Self { id, kind }
    }
}
