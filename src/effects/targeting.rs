//! Target resolution for a chosen skill.
//!
//! Explicit targets from the input collaborator are used as given. Without
//! them, targets are picked from the skill's category and scope:
//!
//! | Category      | Scope          | Targets                                |
//! |---------------|----------------|----------------------------------------|
//! | Damage        | Single         | one random living opponent             |
//! | Damage        | TwoRandom      | two distinct random living opponents   |
//! | Damage        | AllOpponents   | every living opponent                  |
//! | Heal / Buff   | any            | the actor                              |
//! | Other         | any            | one random living opponent             |

use smallvec::smallvec;

use crate::cards::{EffectCategory, SkillDescriptor, TargetScope};
use crate::core::{BattleResult, BattleState, GameRng, TargetList, UnitId};

/// Picks the units a skill lands on.
pub struct TargetSelector;

impl TargetSelector {
    /// Resolve targets for `actor` using `skill`.
    ///
    /// Explicit targets must exist but are otherwise not filtered; dead ones
    /// are skipped later during effect application. An empty result for an
    /// opponent-directed skill means the action misses.
    pub fn select(
        state: &BattleState,
        actor: UnitId,
        skill: &SkillDescriptor,
        explicit: &[UnitId],
        rng: &mut GameRng,
    ) -> BattleResult<TargetList> {
        let side = state.unit(actor)?.side;

        if !explicit.is_empty() {
            for &target in explicit {
                state.unit(target)?;
            }
            return Ok(TargetList::from_slice(explicit));
        }

        if skill.effect_category.is_self_targeted() {
            return Ok(smallvec![actor]);
        }

        let opponents = state.living_opponents(side);
        let scope = match skill.effect_category {
            EffectCategory::Damage => skill.target_scope,
            _ => TargetScope::Single,
        };

        let targets = match scope {
            TargetScope::Single => rng.choose(&opponents).copied().into_iter().collect(),
            TargetScope::TwoRandom => rng.choose_distinct(&opponents, 2).into_iter().collect(),
            TargetScope::AllOpponents => opponents,
        };
        Ok(targets)
    }
}
