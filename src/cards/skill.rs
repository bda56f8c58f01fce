//! Skill descriptors - static attributes of an action a unit may take.
//!
//! Skills are classified once by the data layer into a `TargetScope` and an
//! `EffectCategory`. The resolution pipeline only ever looks at these tags,
//! never at free-form skill text.

use serde::{Deserialize, Serialize};

use crate::core::{BattleError, BattleResult};

/// How many opponents an auto-targeted damage skill hits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetScope {
    /// One random living opponent.
    #[default]
    Single,
    /// Two distinct random living opponents (fewer if unavailable).
    TwoRandom,
    /// Every living opponent.
    AllOpponents,
}

/// What kind of effect a skill has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectCategory {
    /// Hits opponents, scoped by `TargetScope`.
    Damage,
    /// Self-targeted restoration.
    Heal,
    /// Self-targeted enhancement.
    Buff,
    /// Unclassified; aimed at one random opponent.
    #[default]
    Other,
}

impl EffectCategory {
    /// Does auto-targeting aim this category at the actor itself?
    #[must_use]
    pub const fn is_self_targeted(self) -> bool {
        matches!(self, EffectCategory::Heal | EffectCategory::Buff)
    }
}

/// Static description of a skill.
///
/// ## Example
///
/// ```
/// use card_battle::cards::{EffectCategory, SkillDescriptor, TargetScope};
///
/// let blizzard = SkillDescriptor::damage("Blizzard", 0.8)
///     .with_scope(TargetScope::AllOpponents)
///     .with_cost_mp(3)
///     .with_cost_tu(120);
///
/// assert!(blizzard.is_damaging());
/// assert_eq!(blizzard.effect_category, EffectCategory::Damage);
/// assert!(blizzard.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillDescriptor {
    /// Display name.
    pub name: String,

    /// MP paid on use. Negative values restore MP.
    #[serde(default)]
    pub cost_mp: i32,

    /// TU added to the actor after the skill resolves.
    #[serde(default)]
    pub cost_tu: i32,

    /// Damage multiplier. Zero means the skill deals no damage.
    #[serde(default)]
    pub damage_multiplier: f64,

    /// Auto-targeting scope for damage skills.
    #[serde(default)]
    pub target_scope: TargetScope,

    /// Effect classification.
    #[serde(default)]
    pub effect_category: EffectCategory,
}

impl SkillDescriptor {
    /// Name of the wait pseudo-skill.
    pub const WAIT_NAME: &'static str = "Wait";

    /// Create a free, unclassified skill with no damage.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost_mp: 0,
            cost_tu: 0,
            damage_multiplier: 0.0,
            target_scope: TargetScope::Single,
            effect_category: EffectCategory::Other,
        }
    }

    /// Create a single-target damage skill.
    pub fn damage(name: impl Into<String>, multiplier: f64) -> Self {
        Self {
            damage_multiplier: multiplier,
            effect_category: EffectCategory::Damage,
            ..Self::new(name)
        }
    }

    /// The "Wait" pseudo-skill: no damage, no MP, only advances the schedule.
    pub fn wait(cost_tu: i32) -> Self {
        Self {
            cost_tu,
            ..Self::new(Self::WAIT_NAME)
        }
    }

    /// Set the MP cost.
    #[must_use]
    pub fn with_cost_mp(mut self, cost: i32) -> Self {
        self.cost_mp = cost;
        self
    }

    /// Set the TU cost.
    #[must_use]
    pub fn with_cost_tu(mut self, cost: i32) -> Self {
        self.cost_tu = cost;
        self
    }

    /// Set the target scope.
    #[must_use]
    pub fn with_scope(mut self, scope: TargetScope) -> Self {
        self.target_scope = scope;
        self
    }

    /// Set the effect category.
    #[must_use]
    pub fn with_category(mut self, category: EffectCategory) -> Self {
        self.effect_category = category;
        self
    }

    /// Does this skill change HP when it lands?
    #[must_use]
    pub fn is_damaging(&self) -> bool {
        self.damage_multiplier > 0.0
    }

    /// Can a unit holding `current_mp` use this skill?
    #[must_use]
    pub fn is_affordable(&self, current_mp: i32) -> bool {
        self.cost_mp <= 0 || current_mp >= self.cost_mp
    }

    /// Check the descriptor is usable by the resolution pipeline.
    pub fn validate(&self) -> BattleResult<()> {
        let reason = if self.cost_tu < 0 {
            Some(format!("negative TU cost {}", self.cost_tu))
        } else if !self.damage_multiplier.is_finite() {
            Some("damage multiplier is not finite".to_string())
        } else if self.damage_multiplier < 0.0 {
            Some(format!("negative damage multiplier {}", self.damage_multiplier))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(BattleError::MalformedSkill {
                skill: self.name.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }
}
