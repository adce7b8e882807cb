//! The per-room game state and its command set.

use rand::Rng;
use serde::{Deserialize, Serialize};
use sixshooter_cards::{Ability, Card, CardKind, Character, Deck, Role};
use sixshooter_protocol::{CardId, PlayerId};

use std::fmt;

use crate::{GameError, GamePlayer, Winner, evaluate_victory};

/// Cards drawn in a normal draw phase when the client names no count.
pub const DEFAULT_DRAW_COUNT: u32 = 2;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// The phase of the current player's turn.
///
/// `Discard` is reserved: the turn protocol names it but no exposed
/// command drives it yet (hand-size limits are not enforced in this
/// core).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Draw,
    Play,
    Discard,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Draw => write!(f, "Draw"),
            Phase::Play => write!(f, "Play"),
            Phase::Discard => write!(f, "Discard"),
        }
    }
}

// ---------------------------------------------------------------------------
// PendingResponse
// ---------------------------------------------------------------------------

/// What kind of reply an open response window expects.
///
/// `Duel` is declared for the counter-attack exchange but is not
/// reachable from the exposed command surface in this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseKind {
    Attack,
    Duel,
}

/// An attack awaiting the target's defensive reply.
///
/// "Awaiting" is data, never a blocked call: the attacker's turn simply
/// cannot open further offensive actions until the window closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResponse {
    pub kind: ResponseKind,
    /// Who played the triggering card.
    pub attacker: PlayerId,
    /// Who must respond. Always a living player.
    pub target: PlayerId,
    /// The triggering card instance.
    pub card_id: CardId,
    /// Defensive cards needed to fully cancel the effect.
    pub required: usize,
}

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

/// One game's authoritative state.
///
/// Created exactly once per room at game start and mutated only through
/// the command methods below. Fields are public for snapshotting; the
/// room layer treats them as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "'de: 'static"))]
pub struct GameState {
    pub deck: Deck,
    /// All seats in deal order, eliminated players included.
    pub players: Vec<GamePlayer>,
    /// Seat index of the current player.
    pub current_seat: usize,
    pub phase: Phase,
    /// Monotonically increasing, starts at 1.
    pub turn_number: u32,
    /// Append-only, human-readable event log.
    pub log: Vec<String>,
    pub pending: Option<PendingResponse>,
    pub winner: Option<Winner>,
}

impl GameState {
    /// Deals a fresh game for the given members, in seat order.
    ///
    /// The only place roles and characters are ever assigned: a
    /// shuffled role distribution and a disjoint shuffled character
    /// sample, zipped over the seats. Each seat starts with
    /// `max_life` cards (the Sheriff gets one extra) and the Sheriff
    /// takes the first turn.
    ///
    /// # Errors
    /// Rejects member counts outside 4-7.
    pub fn deal(
        members: &[(PlayerId, String)],
        rng: &mut impl Rng,
    ) -> Result<GameState, GameError> {
        let roles = Role::distribution(members.len(), rng)?;
        let characters = Character::sample(members.len(), rng);
        let mut deck = Deck::standard(rng);

        let mut players = Vec::with_capacity(members.len());
        for (seat, ((id, name), (role, character))) in members
            .iter()
            .zip(roles.into_iter().zip(characters))
            .enumerate()
        {
            let max_life = character.life + role.bonus_life();
            let hand_size = if role == Role::Sheriff {
                max_life as usize + 1
            } else {
                max_life as usize
            };
            let hand = deck.draw(hand_size, rng);

            players.push(GamePlayer {
                id: *id,
                name: name.clone(),
                character,
                role,
                life: max_life,
                max_life,
                hand,
                equipment: Vec::new(),
                weapon: None,
                attacks_played: 0,
                eliminated: false,
                seat,
            });
        }

        let current_seat = players
            .iter()
            .position(|p| p.role == Role::Sheriff)
            .expect("role distribution always contains a Sheriff");

        Ok(GameState {
            deck,
            players,
            current_seat,
            phase: Phase::Draw,
            turn_number: 1,
            log: vec!["Game started! Sheriff takes the first turn.".to_string()],
            pending: None,
            winner: None,
        })
    }

    // -- turn protocol ------------------------------------------------------

    /// Draws cards at the start of the turn and moves into the Play
    /// phase. Returns the drawn cards so the caller can show them to
    /// the drawing player alone.
    pub fn draw_phase(
        &mut self,
        player: PlayerId,
        count: u32,
        rng: &mut impl Rng,
    ) -> Result<Vec<Card>, GameError> {
        let idx = self.current_seat_of(player)?;
        self.require_phase(Phase::Draw)?;

        let drawn = self.deck.draw(count as usize, rng);
        self.players[idx].hand.extend(drawn.iter().copied());
        self.phase = Phase::Play;
        self.log
            .push(format!("{} drew {} card(s)", self.players[idx].name, drawn.len()));

        Ok(drawn)
    }

    /// Plays a card from the current player's hand.
    ///
    /// On success the card always moves hand → discard pile, even when
    /// its effect was a no-op. Returns the pending response if the card
    /// opened one, so the caller can address the targeted event.
    pub fn play_card(
        &mut self,
        player: PlayerId,
        card_id: CardId,
        target: Option<PlayerId>,
        rng: &mut impl Rng,
    ) -> Result<Option<PendingResponse>, GameError> {
        let actor_idx = self.current_seat_of(player)?;
        self.require_phase(Phase::Play)?;

        let card_idx = self.players[actor_idx]
            .hand_index(card_id)
            .ok_or(GameError::CardNotInHand(card_id))?;
        let card = self.players[actor_idx].hand[card_idx];

        let target_idx = match target {
            Some(t) => Some(self.target_seat(t)?),
            None => None,
        };

        let mut opened = None;
        match card.kind {
            CardKind::Bang => {
                opened = Some(self.play_attack(actor_idx, target_idx, card)?);
            }

            CardKind::Beer => {
                let actor = &mut self.players[actor_idx];
                if actor.life < actor.max_life {
                    actor.life += 1;
                    self.log.push(format!("{} recovered 1 life", actor.name));
                }
                // At full life the card is still consumed below.
            }

            CardKind::Missed => {
                return Err(GameError::InvalidPlayContext(card.kind));
            }

            CardKind::CatBalou | CardKind::Panic => {
                let t_idx = target_idx.ok_or(GameError::TargetRequired(card.kind))?;
                self.forced_discard(actor_idx, t_idx, rng)?;
            }

            _ => {
                // No mechanical effect in this core; equipment and
                // weapon attachment is reference-data-driven and not
                // wired into the play dispatch.
                self.log.push(format!(
                    "{} played {}",
                    self.players[actor_idx].name, card.kind
                ));
            }
        }

        let played = self.players[actor_idx].hand.remove(card_idx);
        self.deck.discard(played);
        Ok(opened)
    }

    /// Answers an open attack.
    ///
    /// Fewer defensive cards than required costs the target exactly one
    /// life point, never more. Enough cards cancels the attack: exactly
    /// `required` matching cards move hand → discard, extraneous ids
    /// are ignored. The window closes either way; the turn pointer
    /// never moves.
    pub fn respond_to_attack(
        &mut self,
        player: PlayerId,
        defensive_card_ids: &[CardId],
    ) -> Result<(), GameError> {
        let pending = match &self.pending {
            Some(p) if p.kind == ResponseKind::Attack => p.clone(),
            _ => return Err(GameError::NoPendingResponse),
        };
        let idx = self.seat_of(player)?;
        if player != pending.target {
            return Err(GameError::NotYourResponse);
        }

        if defensive_card_ids.len() < pending.required {
            let target = &mut self.players[idx];
            target.life = target.life.saturating_sub(1);
            self.log.push(format!(
                "{} takes 1 damage ({}/{} life remaining)",
                self.players[idx].name, self.players[idx].life, self.players[idx].max_life
            ));
            if self.players[idx].life == 0 {
                self.eliminate(idx);
            }
        } else {
            let mut consumed = 0;
            for id in defensive_card_ids {
                if consumed == pending.required {
                    break;
                }
                if let Some(i) = self.players[idx].hand_index(*id) {
                    let card = self.players[idx].hand.remove(i);
                    self.deck.discard(card);
                    consumed += 1;
                }
            }
            self.log
                .push(format!("{} plays Missed!", self.players[idx].name));
        }

        self.pending = None;
        Ok(())
    }

    /// Ends the current player's turn, in any phase.
    ///
    /// Resets the attack quota, advances the turn pointer to the next
    /// living seat (wrapping, at most one full lap), and re-enters the
    /// Draw phase.
    pub fn end_turn(&mut self, player: PlayerId) -> Result<(), GameError> {
        let idx = self.current_seat_of(player)?;
        self.players[idx].attacks_played = 0;

        let len = self.players.len();
        for step in 1..=len {
            let cand = (idx + step) % len;
            if !self.players[cand].eliminated {
                self.current_seat = cand;
                break;
            }
        }

        self.phase = Phase::Draw;
        self.turn_number += 1;
        self.log
            .push(format!("{}'s turn", self.players[self.current_seat].name));
        Ok(())
    }

    // -- internals ----------------------------------------------------------

    /// Opens an attack response window against the target.
    fn play_attack(
        &mut self,
        actor_idx: usize,
        target_idx: Option<usize>,
        card: Card,
    ) -> Result<PendingResponse, GameError> {
        if self.pending.is_some() {
            return Err(GameError::ResponseOutstanding);
        }

        let actor = &self.players[actor_idx];
        let unlimited = actor.character.ability == Ability::UnlimitedBang
            || actor.has_unlimited_weapon();
        if actor.attacks_played >= 1 && !unlimited {
            return Err(GameError::AlreadyAttacked);
        }

        let t_idx = target_idx.ok_or(GameError::TargetRequired(card.kind))?;
        let target = &self.players[t_idx];
        if target.eliminated {
            return Err(GameError::TargetNotFound(target.id));
        }

        let required = if actor.character.ability == Ability::DoubleMissed {
            2
        } else {
            1
        };
        let pending = PendingResponse {
            kind: ResponseKind::Attack,
            attacker: actor.id,
            target: target.id,
            card_id: card.id,
            required,
        };

        self.log.push(format!(
            "{} plays BANG! on {}",
            self.players[actor_idx].name, self.players[t_idx].name
        ));
        self.players[actor_idx].attacks_played += 1;
        self.pending = Some(pending.clone());
        Ok(pending)
    }

    /// Removes one uniformly random card from the target — hand first,
    /// equipment if the hand is empty — onto the discard pile.
    fn forced_discard(
        &mut self,
        actor_idx: usize,
        target_idx: usize,
        rng: &mut impl Rng,
    ) -> Result<(), GameError> {
        if self.players[target_idx].holdings() == 0 {
            return Err(GameError::TargetHasNoCards);
        }

        let target = &mut self.players[target_idx];
        let stripped = if !target.hand.is_empty() {
            let i = rng.random_range(0..target.hand.len());
            target.hand.remove(i)
        } else {
            let i = rng.random_range(0..target.equipment.len());
            target.equipment.remove(i)
        };
        self.deck.discard(stripped);

        self.log.push(format!(
            "{} discarded a card from {}",
            self.players[actor_idx].name, self.players[target_idx].name
        ));
        Ok(())
    }

    /// Marks a seat eliminated, removes its cards from play, and runs
    /// the victory evaluator.
    fn eliminate(&mut self, idx: usize) {
        let player = &mut self.players[idx];
        player.eliminated = true;
        player.hand.clear();
        player.equipment.clear();
        player.weapon = None;
        self.log.push(format!("{} is eliminated!", player.name));

        if self.winner.is_none() {
            if let Some(winner) = evaluate_victory(&self.players) {
                self.log.push(winner.message.clone());
                self.winner = Some(winner);
            }
        }
    }

    /// Seat index of any player in the game.
    fn seat_of(&self, player: PlayerId) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id == player)
            .ok_or(GameError::PlayerNotInGame(player))
    }

    /// Seat index of a named target.
    fn target_seat(&self, target: PlayerId) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| p.id == target)
            .ok_or(GameError::TargetNotFound(target))
    }

    /// Seat index of `player`, who must also hold the turn.
    fn current_seat_of(&self, player: PlayerId) -> Result<usize, GameError> {
        let idx = self.seat_of(player)?;
        if idx != self.current_seat {
            return Err(GameError::NotYourTurn);
        }
        Ok(idx)
    }

    fn require_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// The player currently holding the turn.
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.current_seat]
    }
}
