//! Units - runtime combat state for one card instance.
//!
//! A `Unit` is created for every deck entry when the battle is built. It
//! keeps a shared reference to its static `CardDefinition` and tracks the
//! mutable values the battle changes: HP, MP, TU and status effects.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::CardDefinition;
use super::skill::SkillDescriptor;
use crate::core::{Side, UnitId};

/// An active status effect.
///
/// The engine carries these through the turn-start hook but never creates
/// or mutates them itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub name: String,
    /// Remaining turns, `None` for permanent effects.
    pub remaining_turns: Option<u32>,
}

/// A unit taking part in a battle.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    /// Arena ID, stable for the whole battle.
    pub id: UnitId,

    /// Static card record.
    pub card: Arc<CardDefinition>,

    /// Side this unit fights for.
    pub side: Side,

    /// Current HP, `0..=max_hp`.
    pub current_hp: i32,

    /// Current MP.
    pub current_mp: i32,

    /// Countdown to the next action. Lower acts sooner.
    pub time_units: i32,

    /// Active status effects, in application order.
    pub status_effects: Vec<StatusEffect>,
}

impl Unit {
    /// Create a unit at full HP with zero MP and TU.
    ///
    /// Battle setup assigns the starting MP and TU afterwards.
    #[must_use]
    pub fn new(id: UnitId, card: Arc<CardDefinition>, side: Side) -> Self {
        let current_hp = card.stats.max_hp.max(0);
        Self {
            id,
            card,
            side,
            current_hp,
            current_mp: 0,
            time_units: 0,
            status_effects: Vec::new(),
        }
    }

    /// Is this unit still standing?
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Card name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }

    /// Base speed, used for TU seeding and ready-set tie-breaks.
    #[must_use]
    pub fn speed(&self) -> i32 {
        self.card.stats.speed
    }

    /// Maximum HP.
    #[must_use]
    pub fn max_hp(&self) -> i32 {
        self.card.stats.max_hp
    }

    /// Skills this unit may use.
    #[must_use]
    pub fn skills(&self) -> &[SkillDescriptor] {
        &self.card.skills
    }

    /// Remove HP, never dropping below zero. Returns true if this killed the unit.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.is_alive();
        self.current_hp = (self.current_hp - amount).max(0);
        was_alive && !self.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn sample_card() -> Arc<CardDefinition> {
        Arc::new(
            CardDefinition::new(CardId::new(1), "Scout")
                .with_max_hp(50)
                .with_speed(140),
        )
    }

    #[test]
    fn test_new_unit() {
        let unit = Unit::new(UnitId::new(0), sample_card(), Side::Player);

        assert_eq!(unit.current_hp, 50);
        assert_eq!(unit.max_hp(), 50);
        assert_eq!(unit.speed(), 140);
        assert_eq!(unit.name(), "Scout");
        assert!(unit.is_alive());
        assert!(unit.status_effects.is_empty());
    }

    #[test]
    fn test_take_damage_clamps_at_zero() {
        let mut unit = Unit::new(UnitId::new(0), sample_card(), Side::Enemy);

        assert!(!unit.take_damage(20));
        assert_eq!(unit.current_hp, 30);

        assert!(unit.take_damage(100));
        assert_eq!(unit.current_hp, 0);
        assert!(!unit.is_alive());

        // Already dead: no second kill
        assert!(!unit.take_damage(5));
        assert_eq!(unit.current_hp, 0);
    }
}
