//! Damage computation.
//!
//! ```text
//! damage = floor(attack × multiplier × element × 1000 / (1000 + defense))
//! ```
//!
//! Any positive multiplier deals at least 1 damage.

use crate::cards::Unit;
use crate::core::{BattleError, BattleResult};

/// Defense scaling constant.
pub const DEFENSE_SCALE: f64 = 1000.0;

/// A computed hit before it is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageRoll {
    /// HP to remove.
    pub amount: i32,
    /// Elemental modifier that went into the roll.
    pub element_modifier: f64,
}

impl DamageRoll {
    /// Did the attacker have elemental advantage?
    #[must_use]
    pub fn is_advantaged(&self) -> bool {
        self.element_modifier > 1.0
    }
}

/// Raw damage formula.
///
/// Returns `None` when `1000 + defense` is not positive.
///
/// ```
/// use card_battle::effects::damage_formula;
///
/// assert_eq!(damage_formula(100, 50, 1.0, 1.0), Some(95));
/// assert_eq!(damage_formula(1, 5000, 0.1, 0.75), Some(1));
/// assert_eq!(damage_formula(100, 50, 0.0, 1.0), Some(0));
/// ```
#[must_use]
pub fn damage_formula(
    attack: i32,
    defense: i32,
    multiplier: f64,
    element_modifier: f64,
) -> Option<i32> {
    let denominator = DEFENSE_SCALE + f64::from(defense);
    if denominator <= 0.0 {
        return None;
    }
    if multiplier <= 0.0 {
        return Some(0);
    }

    let scaled = f64::from(attack) * multiplier * element_modifier * DEFENSE_SCALE;
    let raw = (scaled / denominator).floor();
    Some((raw as i32).max(1))
}

/// Compute the hit `attacker` lands on `defender` with `multiplier`.
pub fn roll_damage(attacker: &Unit, defender: &Unit, multiplier: f64) -> BattleResult<DamageRoll> {
    let attack_type = attacker.card.attack_type;
    let attack = attacker.card.attack_stat();
    let defense = defender.card.defense_against(attack_type);
    let element_modifier = attacker.card.element.modifier_against(defender.card.element);

    let amount = damage_formula(attack, defense, multiplier, element_modifier).ok_or_else(|| {
        BattleError::MalformedStats {
            unit: defender.id,
            reason: format!("defense {defense} leaves no positive divisor"),
        }
    })?;

    Ok(DamageRoll {
        amount,
        element_modifier,
    })
}
