//! Input side of a battle: whoever picks actions for player units.

use crate::core::{BattleState, ChosenAction, GameRng, UnitId};
use crate::policy::OpponentPolicy;

/// Chooses actions for player units when driving a battle with
/// `Battle::run`.
pub trait PlayerController {
    fn choose_action(&mut self, state: &BattleState, actor: UnitId) -> ChosenAction;
}

impl<F> PlayerController for F
where
    F: FnMut(&BattleState, UnitId) -> ChosenAction,
{
    fn choose_action(&mut self, state: &BattleState, actor: UnitId) -> ChosenAction {
        self(state, actor)
    }
}

/// Lets an `OpponentPolicy` play the player side, for AI-vs-AI battles.
#[derive(Clone, Debug)]
pub struct PolicyController<P> {
    policy: P,
    rng: GameRng,
}

impl<P: OpponentPolicy> PolicyController<P> {
    #[must_use]
    pub fn new(policy: P, seed: u64) -> Self {
        Self {
            policy,
            rng: GameRng::new(seed).for_context("player"),
        }
    }
}

impl<P: OpponentPolicy> PlayerController for PolicyController<P> {
    fn choose_action(&mut self, state: &BattleState, actor: UnitId) -> ChosenAction {
        self.policy.decide(state, actor, &mut self.rng)
    }
}
