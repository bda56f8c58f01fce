//! Battle results.

use serde::{Deserialize, Serialize};

use crate::core::{BattleState, Side};

/// How a battle ended, from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

impl BattleOutcome {
    #[must_use]
    pub fn player_won(self) -> bool {
        matches!(self, BattleOutcome::Victory)
    }

    /// Winning side.
    #[must_use]
    pub fn winner(self) -> Side {
        match self {
            BattleOutcome::Victory => Side::Player,
            BattleOutcome::Defeat => Side::Enemy,
        }
    }

    /// Decide the outcome, if any.
    ///
    /// The player side is checked first, so a simultaneous wipe is a defeat.
    #[must_use]
    pub fn check(state: &BattleState) -> Option<BattleOutcome> {
        if state.is_defeated(Side::Player) {
            Some(BattleOutcome::Defeat)
        } else if state.is_defeated(Side::Enemy) {
            Some(BattleOutcome::Victory)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId};
    use crate::core::UnitId;
    use std::sync::Arc;

    fn state() -> BattleState {
        let card = |i: u32| Arc::new(CardDefinition::new(CardId::new(i), format!("c{i}")));
        BattleState::new(&[card(0)], &[card(1)]).unwrap()
    }

    #[test]
    fn test_ongoing() {
        assert_eq!(BattleOutcome::check(&state()), None);
    }

    #[test]
    fn test_victory_and_defeat() {
        let mut s = state();
        s.units[UnitId(1)].current_hp = 0;
        assert_eq!(BattleOutcome::check(&s), Some(BattleOutcome::Victory));

        let mut s = state();
        s.units[UnitId(0)].current_hp = 0;
        assert_eq!(BattleOutcome::check(&s), Some(BattleOutcome::Defeat));
    }

    #[test]
    fn test_simultaneous_wipe_is_defeat() {
        let mut s = state();
        s.units[UnitId(0)].current_hp = 0;
        s.units[UnitId(1)].current_hp = 0;
        assert_eq!(BattleOutcome::check(&s), Some(BattleOutcome::Defeat));
        assert!(!BattleOutcome::Defeat.player_won());
        assert_eq!(BattleOutcome::Defeat.winner(), Side::Enemy);
    }
}
