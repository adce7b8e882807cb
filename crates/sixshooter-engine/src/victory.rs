//! Win-condition evaluation.
//!
//! A pure function over the roster — no pile or turn state is
//! consulted, so calling it twice on an unchanged roster returns the
//! same result.

use serde::{Deserialize, Serialize};
use sixshooter_cards::Role;

use crate::GamePlayer;

/// Which faction won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VictorySide {
    Renegade,
    Outlaws,
    SheriffAndDeputies,
}

/// A recorded game result. Terminal once set on a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub side: VictorySide,
    pub message: String,
}

impl Winner {
    fn new(side: VictorySide, message: &str) -> Self {
        Self {
            side,
            message: message.to_string(),
        }
    }
}

/// Checks the roster for a decided game.
///
/// - Sheriff dead and the Renegade is the lone survivor → Renegade wins.
/// - Sheriff dead and any Outlaw still alive → Outlaws win.
/// - Sheriff alive with no living Outlaw and no living Renegade →
///   Sheriff and Deputies win.
/// - Anything else → the game continues.
///
/// The two Sheriff-dead branches are checked in order, so the
/// lone-Renegade and Outlaws results are mutually exclusive.
pub fn evaluate_victory(players: &[GamePlayer]) -> Option<Winner> {
    let alive: Vec<&GamePlayer> = players.iter().filter(|p| !p.eliminated).collect();
    let sheriff_alive = alive.iter().any(|p| p.role == Role::Sheriff);
    let outlaws_alive = alive.iter().filter(|p| p.role == Role::Outlaw).count();
    let renegade_alive = alive.iter().any(|p| p.role == Role::Renegade);

    if !sheriff_alive {
        if alive.len() == 1 && renegade_alive {
            return Some(Winner::new(VictorySide::Renegade, "Renegade wins!"));
        }
        if outlaws_alive > 0 {
            return Some(Winner::new(VictorySide::Outlaws, "Outlaws win!"));
        }
    }

    if sheriff_alive && outlaws_alive == 0 && !renegade_alive {
        return Some(Winner::new(
            VictorySide::SheriffAndDeputies,
            "Sheriff and Deputies win!",
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use sixshooter_cards::{Ability, Character};
    use sixshooter_protocol::PlayerId;

    fn player(id: u64, role: Role, eliminated: bool) -> GamePlayer {
        GamePlayer {
            id: PlayerId(id),
            name: format!("p{id}"),
            character: Character {
                name: "Test",
                life: 4,
                ability: Ability::Heal,
            },
            role,
            life: if eliminated { 0 } else { 4 },
            max_life: 4,
            hand: Vec::new(),
            equipment: Vec::new(),
            weapon: None,
            attacks_played: 0,
            eliminated,
            seat: id as usize,
        }
    }

    #[test]
    fn test_game_continues_at_start() {
        let roster = vec![
            player(0, Role::Sheriff, false),
            player(1, Role::Outlaw, false),
            player(2, Role::Outlaw, false),
            player(3, Role::Renegade, false),
        ];
        assert_eq!(evaluate_victory(&roster), None);
    }

    #[test]
    fn test_lone_renegade_wins() {
        // 4-player distribution with the sheriff and both outlaws down.
        let roster = vec![
            player(0, Role::Sheriff, true),
            player(1, Role::Outlaw, true),
            player(2, Role::Outlaw, true),
            player(3, Role::Renegade, false),
        ];
        let winner = evaluate_victory(&roster).unwrap();
        assert_eq!(winner.side, VictorySide::Renegade);
    }

    #[test]
    fn test_outlaws_win_when_sheriff_falls_with_outlaws_alive() {
        let roster = vec![
            player(0, Role::Sheriff, true),
            player(1, Role::Outlaw, false),
            player(2, Role::Outlaw, false),
            player(3, Role::Renegade, false),
        ];
        let winner = evaluate_victory(&roster).unwrap();
        assert_eq!(winner.side, VictorySide::Outlaws);
    }

    #[test]
    fn test_sheriff_dead_renegade_and_deputy_alive_is_undecided() {
        // No outlaw alive and the renegade is not alone: nobody wins yet.
        let roster = vec![
            player(0, Role::Sheriff, true),
            player(1, Role::Deputy, false),
            player(2, Role::Outlaw, true),
            player(3, Role::Outlaw, true),
            player(4, Role::Renegade, false),
        ];
        assert_eq!(evaluate_victory(&roster), None);
    }

    #[test]
    fn test_sheriff_side_wins_when_threats_cleared() {
        let roster = vec![
            player(0, Role::Sheriff, false),
            player(1, Role::Deputy, true),
            player(2, Role::Outlaw, true),
            player(3, Role::Outlaw, true),
            player(4, Role::Renegade, true),
        ];
        let winner = evaluate_victory(&roster).unwrap();
        assert_eq!(winner.side, VictorySide::SheriffAndDeputies);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let roster = vec![
            player(0, Role::Sheriff, true),
            player(1, Role::Outlaw, false),
            player(2, Role::Renegade, false),
            player(3, Role::Outlaw, true),
        ];
        let first = evaluate_victory(&roster);
        let second = evaluate_victory(&roster);
        assert_eq!(first, second);
    }
}
