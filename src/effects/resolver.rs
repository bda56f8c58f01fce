//! Action resolution - executing a chosen skill against battle state.
//!
//! The `ActionResolver` runs one action through a fixed pipeline:
//!
//! 1. Validate the skill, the actor, and any explicit targets
//! 2. Resolve targets (explicit, or by category and scope)
//! 3. Pay the MP cost
//! 4. Announce the skill to the observer
//! 5. Compute every hit, then apply them in target order
//! 6. Add the skill's TU cost to the actor
//!
//! Nothing is mutated until steps 1, 2 and the damage computations have
//! succeeded, so an `Err` always leaves the state untouched.

use smallvec::SmallVec;

use crate::battle::BattleObserver;
use crate::cards::SkillDescriptor;
use crate::core::{BattleResult, BattleState, GameRng, TargetList, UnitId};

use super::damage::{roll_damage, DamageRoll};
use super::targeting::TargetSelector;

/// What happened to a single target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EffectOutcome {
    /// HP was removed.
    Damaged {
        amount: i32,
        advantaged: bool,
        defeated: bool,
    },
    /// Target was already down when its turn in the effect list came.
    Skipped,
    /// The skill carries no damage.
    NoEffect,
    /// Heal and buff magnitudes are not defined; the target is untouched.
    Unresolved,
}

/// Per-target entry in an `ActionReport`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetOutcome {
    pub target: UnitId,
    pub effect: EffectOutcome,
}

/// Summary of one resolved action.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionReport {
    pub actor: UnitId,
    pub skill: String,
    pub targets: TargetList,
    pub outcomes: SmallVec<[TargetOutcome; 4]>,
    /// An opponent-directed skill found nobody to hit.
    pub missed: bool,
    pub mp_paid: i32,
    pub tu_added: i32,
}

impl ActionReport {
    /// Total HP removed by this action.
    #[must_use]
    pub fn total_damage(&self) -> i32 {
        self.outcomes
            .iter()
            .map(|o| match o.effect {
                EffectOutcome::Damaged { amount, .. } => amount,
                _ => 0,
            })
            .sum()
    }

    /// Units this action defeated.
    pub fn defeated(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.outcomes.iter().filter_map(|o| match o.effect {
            EffectOutcome::Damaged { defeated: true, .. } => Some(o.target),
            _ => None,
        })
    }
}

/// Runs skills against the battle state.
pub struct ActionResolver;

impl ActionResolver {
    /// Resolve `skill` used by `actor`.
    ///
    /// `explicit` targets take precedence over automatic targeting. Observer
    /// calls happen in this order: targeting line (or miss), skill
    /// announcement, skill animation, then one damage notification per hit
    /// followed by a defeat line when the hit was lethal.
    pub fn resolve<O: BattleObserver + ?Sized>(
        state: &mut BattleState,
        actor: UnitId,
        skill: &SkillDescriptor,
        explicit: &[UnitId],
        rng: &mut GameRng,
        observer: &mut O,
    ) -> BattleResult<ActionReport> {
        skill.validate()?;
        state.unit(actor)?;

        let targets = TargetSelector::select(state, actor, skill, explicit, rng)?;
        let self_targeted = skill.effect_category.is_self_targeted();

        // Every roll is computed up front so a malformed target aborts
        // before any HP or MP changes.
        let mut rolls: SmallVec<[Option<DamageRoll>; 4]> = SmallVec::with_capacity(targets.len());
        for &target in &targets {
            let defender = state.unit(target)?;
            let roll = if self_targeted || !skill.is_damaging() || !defender.is_alive() {
                None
            } else {
                Some(roll_damage(&state.units[actor], defender, skill.damage_multiplier)?)
            };
            rolls.push(roll);
        }

        let missed = targets.is_empty();
        if missed {
            log::warn!("{} found no targets for {}", state.units[actor].name(), skill.name);
            observer.log("Miss! (No targets)");
        } else {
            let names: Vec<&str> = targets.iter().map(|&t| state.units[t].name()).collect();
            observer.log(&format!("Targeting: {}", names.join(", ")));
        }

        let mp_paid = skill.cost_mp;
        state.units[actor].current_mp -= mp_paid;

        let actor_unit = &state.units[actor];
        observer.log(&format!("{} uses {}!", actor_unit.name(), skill.name));
        observer.animate_skill(actor_unit, &skill.name);

        let mut outcomes = SmallVec::with_capacity(targets.len());
        for (&target, roll) in targets.iter().zip(rolls) {
            let effect = Self::apply(state, target, skill, roll, observer);
            outcomes.push(TargetOutcome { target, effect });
        }

        state.units[actor].time_units += skill.cost_tu;

        Ok(ActionReport {
            actor,
            skill: skill.name.clone(),
            targets,
            outcomes,
            missed,
            mp_paid,
            tu_added: skill.cost_tu,
        })
    }

    fn apply<O: BattleObserver + ?Sized>(
        state: &mut BattleState,
        target: UnitId,
        skill: &SkillDescriptor,
        roll: Option<DamageRoll>,
        observer: &mut O,
    ) -> EffectOutcome {
        if skill.effect_category.is_self_targeted() {
            log::debug!("{} has no magnitude for {:?}", skill.name, skill.effect_category);
            return EffectOutcome::Unresolved;
        }
        if !state.units[target].is_alive() {
            return EffectOutcome::Skipped;
        }
        let Some(roll) = roll else {
            return EffectOutcome::NoEffect;
        };

        let defeated = state.units[target].take_damage(roll.amount);
        let unit = &state.units[target];
        observer.damage(unit, roll.amount, roll.is_advantaged());
        if defeated {
            log::info!("{} defeated by {}", unit.name(), skill.name);
            observer.log(&format!("{} is defeated!", unit.name()));
        }

        EffectOutcome::Damaged {
            amount: roll.amount,
            advantaged: roll.is_advantaged(),
            defeated,
        }
    }
}
