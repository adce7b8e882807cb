//! Roles and the per-player-count distribution tables.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use std::fmt;

/// A player's secret (or, for the Sheriff, revealed) allegiance.
///
/// Fixed for the whole game once dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Sheriff,
    Deputy,
    Outlaw,
    Renegade,
}

impl Role {
    /// Whether the role card is flipped face-up on assignment.
    /// Only the Sheriff plays with an open role.
    pub fn revealed(self) -> bool {
        matches!(self, Role::Sheriff)
    }

    /// Extra life points the role grants on top of the character base.
    pub fn bonus_life(self) -> u8 {
        match self {
            Role::Sheriff => 1,
            _ => 0,
        }
    }

    /// The role's win condition, for client display.
    pub fn goal(self) -> &'static str {
        match self {
            Role::Sheriff => "Kill all Outlaws and the Renegade",
            Role::Deputy => "Protect the Sheriff and kill all Outlaws and the Renegade",
            Role::Outlaw => "Kill the Sheriff",
            Role::Renegade => "Be the last player alive",
        }
    }

    /// The role set for a game of `member_count` players, uniformly
    /// shuffled for assignment by seat order.
    ///
    /// # Errors
    /// Returns [`UnsupportedMemberCount`] outside the 4-7 range.
    pub fn distribution(
        member_count: usize,
        rng: &mut impl Rng,
    ) -> Result<Vec<Role>, UnsupportedMemberCount> {
        use Role::*;
        let mut roles: Vec<Role> = match member_count {
            4 => vec![Sheriff, Outlaw, Outlaw, Renegade],
            5 => vec![Sheriff, Deputy, Outlaw, Outlaw, Renegade],
            6 => vec![Sheriff, Deputy, Outlaw, Outlaw, Outlaw, Renegade],
            7 => vec![Sheriff, Deputy, Deputy, Outlaw, Outlaw, Outlaw, Renegade],
            n => return Err(UnsupportedMemberCount(n)),
        };
        roles.shuffle(rng);
        Ok(roles)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Sheriff => "Sheriff",
            Role::Deputy => "Deputy",
            Role::Outlaw => "Outlaw",
            Role::Renegade => "Renegade",
        };
        write!(f, "{name}")
    }
}

/// The requested game size has no role distribution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported member count: {0} (needs 4-7 players)")]
pub struct UnsupportedMemberCount(pub usize);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn count(roles: &[Role], role: Role) -> usize {
        roles.iter().filter(|r| **r == role).count()
    }

    #[test]
    fn test_distribution_tables() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in 4..=7 {
            let roles = Role::distribution(n, &mut rng).unwrap();
            assert_eq!(roles.len(), n);
            assert_eq!(count(&roles, Role::Sheriff), 1, "n={n}");
            assert_eq!(count(&roles, Role::Renegade), 1, "n={n}");
            let deputies = match n {
                4 => 0,
                5 | 6 => 1,
                _ => 2,
            };
            assert_eq!(count(&roles, Role::Deputy), deputies, "n={n}");
            assert_eq!(
                count(&roles, Role::Outlaw),
                n - 2 - deputies,
                "n={n}"
            );
        }
    }

    #[test]
    fn test_distribution_rejects_bad_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Role::distribution(3, &mut rng),
            Err(UnsupportedMemberCount(3))
        );
        assert_eq!(
            Role::distribution(8, &mut rng),
            Err(UnsupportedMemberCount(8))
        );
    }

    #[test]
    fn test_only_sheriff_is_revealed_and_bonused() {
        assert!(Role::Sheriff.revealed());
        assert_eq!(Role::Sheriff.bonus_life(), 1);
        for role in [Role::Deputy, Role::Outlaw, Role::Renegade] {
            assert!(!role.revealed());
            assert_eq!(role.bonus_life(), 0);
        }
    }
}
