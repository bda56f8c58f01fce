//! Battle error types.

use crate::battle::BattlePhase;
use crate::cards::CardId;

use super::{Side, UnitId};

/// Errors raised while building or running a battle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BattleError {
    #[error("skill '{skill}' is malformed: {reason}")]
    MalformedSkill { skill: String, reason: String },

    #[error("{unit} has unusable stats: {reason}")]
    MalformedStats { unit: UnitId, reason: String },

    #[error("no unit with id {0}")]
    UnknownUnit(UnitId),

    #[error("no card definition registered for {0}")]
    UnknownCard(CardId),

    #[error("{0} deck is empty")]
    EmptyDeck(Side),

    #[error("operation requires phase {expected:?}, battle is in {actual:?}")]
    WrongPhase {
        expected: BattlePhase,
        actual: BattlePhase,
    },

    #[error("battle is waiting on {expected}, got an action for {got}")]
    ActorMismatch { expected: UnitId, got: UnitId },

    #[error("scheduler found no ready unit after {attempts} attempts")]
    SchedulerStall { attempts: u32 },
}

/// Result type alias for battle operations.
pub type BattleResult<T> = Result<T, BattleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BattleError::MalformedSkill {
            skill: "Flame".to_string(),
            reason: "negative TU cost".to_string(),
        };
        assert_eq!(err.to_string(), "skill 'Flame' is malformed: negative TU cost");

        let err = BattleError::ActorMismatch {
            expected: UnitId::new(1),
            got: UnitId::new(2),
        };
        assert_eq!(
            err.to_string(),
            "battle is waiting on Unit(1), got an action for Unit(2)"
        );

        assert_eq!(BattleError::EmptyDeck(Side::Enemy).to_string(), "Enemy deck is empty");
    }
}
