//! Opponent decision policies.

use crate::cards::SkillDescriptor;
use crate::core::{BattleConfig, BattleState, ChosenAction, GameRng, UnitId};

/// Policy for choosing an action for a unit nobody is controlling.
pub trait OpponentPolicy: Send + Sync {
    /// Choose an action for `actor`.
    ///
    /// Must always produce an action; a policy with nothing better to do
    /// falls back to waiting.
    fn decide(&self, state: &BattleState, actor: UnitId, rng: &mut GameRng) -> ChosenAction;
}

/// Uniform random choice among affordable skills.
///
/// Targets are left empty so the resolution pipeline picks them. With no
/// affordable skill the unit waits.
#[derive(Clone, Debug)]
pub struct AffordableRandom {
    wait_cost_tu: i32,
}

impl AffordableRandom {
    #[must_use]
    pub fn new(wait_cost_tu: i32) -> Self {
        Self { wait_cost_tu }
    }

    #[must_use]
    pub fn from_config(config: &BattleConfig) -> Self {
        Self::new(config.wait_cost_tu)
    }

    /// The fallback action.
    #[must_use]
    pub fn wait(&self) -> ChosenAction {
        ChosenAction::auto(SkillDescriptor::wait(self.wait_cost_tu))
    }
}

impl Default for AffordableRandom {
    fn default() -> Self {
        Self::from_config(&BattleConfig::default())
    }
}

impl OpponentPolicy for AffordableRandom {
    fn decide(&self, state: &BattleState, actor: UnitId, rng: &mut GameRng) -> ChosenAction {
        let Ok(unit) = state.unit(actor) else {
            log::warn!("policy asked to decide for unknown {actor}");
            return self.wait();
        };

        let affordable: Vec<&SkillDescriptor> = unit
            .skills()
            .iter()
            .filter(|skill| skill.is_affordable(unit.current_mp))
            .collect();

        match rng.choose(&affordable) {
            Some(skill) => ChosenAction::auto((*skill).clone()),
            None => {
                log::debug!("{} has no affordable skill, waiting", unit.name());
                self.wait()
            }
        }
    }
}
