//! Battle orchestrator.
//!
//! `Battle` owns the state and walks it through the phase machine:
//!
//! ```text
//! Initializing → CheckingOutcome → AwaitingActor ─┬─ enemy ──→ Resolving
//!                     │                           └─ player ─→ AwaitingAction
//!                     └─→ Ended                                 (submit_action)
//! ```
//!
//! Resolving always returns to CheckingOutcome.
//!
//! The engine suspends in exactly one place: a player unit waiting for
//! `submit_action`. Everything else runs to completion inside `step()`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::CardDefinition;
use crate::core::{
    BattleConfig, BattleError, BattleResult, BattleState, ChosenAction, GameRng, Side, TurnRecord,
    UnitId,
};
use crate::effects::ActionResolver;
use crate::policy::OpponentPolicy;
use crate::roster::RosterManager;
use crate::schedule::Scheduler;

use super::controller::PlayerController;
use super::observer::BattleObserver;
use super::outcome::BattleOutcome;

/// Where the battle is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Built but not started.
    Initializing,
    /// Scheduler is about to pick the next actor.
    AwaitingActor,
    /// A player unit is waiting for `submit_action`.
    AwaitingAction,
    /// An action is being applied.
    Resolving,
    /// Win/loss check and reserve deployment.
    CheckingOutcome,
    Ended(BattleOutcome),
}

/// What a call to `Battle::step` produced.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// A player unit needs an action; call `Battle::submit_action`.
    AwaitingInput(UnitId),
    /// An enemy turn resolved.
    Acted(TurnRecord),
    Ended(BattleOutcome),
}

/// A single battle between two decks.
pub struct Battle<O, P> {
    state: BattleState,
    config: BattleConfig,
    scheduler: Scheduler,
    observer: O,
    policy: P,
    targeting_rng: GameRng,
    policy_rng: GameRng,
    phase: BattlePhase,
    pending_actor: Option<UnitId>,
}

impl<O: BattleObserver, P: OpponentPolicy> Battle<O, P> {
    /// Build a battle from two decks in deck order.
    ///
    /// Fails with `EmptyDeck` if either deck has no cards.
    pub fn new(
        player_deck: &[Arc<CardDefinition>],
        enemy_deck: &[Arc<CardDefinition>],
        config: BattleConfig,
        observer: O,
        policy: P,
    ) -> BattleResult<Self> {
        let state = BattleState::new(player_deck, enemy_deck)?;
        let rng = GameRng::new(config.seed);

        Ok(Self {
            state,
            scheduler: Scheduler::new(config.stall_retries),
            targeting_rng: rng.for_context("targeting"),
            policy_rng: rng.for_context("policy"),
            config,
            observer,
            policy,
            phase: BattlePhase::Initializing,
            pending_actor: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// The player unit waiting for input, if any.
    #[must_use]
    pub fn pending_actor(&self) -> Option<UnitId> {
        self.pending_actor
    }

    #[must_use]
    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            BattlePhase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Seed TU and MP, show the opening board, and move to the first
    /// outcome check.
    pub fn start(&mut self) -> BattleResult<()> {
        self.expect_phase(BattlePhase::Initializing)?;

        self.state.seed_units(&self.config);
        let deployed = |side| {
            let roster = self.state.roster(side);
            roster.active().len() + roster.reserve_len()
        };
        log::info!(
            "battle started: {} player units vs {} enemy units (seed {})",
            deployed(Side::Player),
            deployed(Side::Enemy),
            self.config.seed
        );

        self.render_roster();
        self.render_timeline();
        self.phase = BattlePhase::CheckingOutcome;
        Ok(())
    }

    /// Advance until a player unit needs input, an enemy turn resolves, or
    /// the battle ends.
    ///
    /// Starts the battle if `start` was not called. After the battle ends,
    /// every call returns the stored outcome without notifying again.
    pub fn step(&mut self) -> BattleResult<StepOutcome> {
        loop {
            match self.phase {
                BattlePhase::Initializing => self.start()?,
                BattlePhase::CheckingOutcome => self.check_outcome(),
                BattlePhase::AwaitingActor => {
                    if let Some(outcome) = self.begin_turn()? {
                        return Ok(outcome);
                    }
                }
                BattlePhase::AwaitingAction => {
                    if let Some(actor) = self.pending_actor {
                        return Ok(StepOutcome::AwaitingInput(actor));
                    }
                    self.phase = BattlePhase::AwaitingActor;
                }
                // Resolution finishes within the call that started it.
                BattlePhase::Resolving => self.phase = BattlePhase::CheckingOutcome,
                BattlePhase::Ended(outcome) => return Ok(StepOutcome::Ended(outcome)),
            }
        }
    }

    /// Resolve the pending player unit's action.
    ///
    /// Fails without touching state if the battle is not waiting for input
    /// or `actor` is not the unit it is waiting on.
    pub fn submit_action(
        &mut self,
        actor: UnitId,
        action: ChosenAction,
    ) -> BattleResult<TurnRecord> {
        self.expect_phase(BattlePhase::AwaitingAction)?;
        match self.pending_actor {
            Some(expected) if expected == actor => {}
            Some(expected) => return Err(BattleError::ActorMismatch { expected, got: actor }),
            None => {
                return Err(BattleError::WrongPhase {
                    expected: BattlePhase::AwaitingAction,
                    actual: self.phase,
                })
            }
        }

        self.pending_actor = None;
        Ok(self.resolve_turn(actor, action))
    }

    /// Drive the battle to completion, asking `controller` for every player
    /// action.
    ///
    /// A scheduler stall does not end the run: the board is re-checked and
    /// the loop carries on. Only a win or a loss returns `Ok`.
    pub fn run<C: PlayerController + ?Sized>(
        &mut self,
        controller: &mut C,
    ) -> BattleResult<BattleOutcome> {
        loop {
            match self.step() {
                Ok(StepOutcome::AwaitingInput(actor)) => {
                    let action = controller.choose_action(&self.state, actor);
                    self.submit_action(actor, action)?;
                }
                Ok(StepOutcome::Acted(_)) => {}
                Ok(StepOutcome::Ended(outcome)) => return Ok(outcome),
                Err(err @ BattleError::SchedulerStall { .. }) => {
                    log::warn!("{err}, re-checking the board");
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn expect_phase(&self, expected: BattlePhase) -> BattleResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(BattleError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn check_outcome(&mut self) {
        if let Some(outcome) = BattleOutcome::check(&self.state) {
            log::info!("battle over after {} turns: {:?}", self.state.turn_number, outcome);
            self.observer.outcome(outcome.player_won());
            self.phase = BattlePhase::Ended(outcome);
            return;
        }

        for side in Side::ALL {
            let BattleState { units, rosters, .. } = &mut self.state;
            let substitutions =
                RosterManager::fill_empty_slots(&mut rosters[side], units, &self.config);
            for sub in substitutions {
                let incoming = &self.state.units[sub.incoming];
                let message = format!("{} joined the battle!", incoming.name());
                self.observer.log(&message);
            }
        }
        self.render_roster();
        self.phase = BattlePhase::AwaitingActor;
    }

    /// Pick the next actor and either suspend for input or run the enemy turn.
    ///
    /// Returns `None` if the actor went down at turn start.
    fn begin_turn(&mut self) -> BattleResult<Option<StepOutcome>> {
        let actor = match self.scheduler.next_actor(&mut self.state) {
            Ok(actor) => actor,
            Err(err) => {
                // Re-check the board on the next step instead of spinning here.
                self.phase = BattlePhase::CheckingOutcome;
                return Err(err);
            }
        };

        self.render_timeline();
        let unit = &self.state.units[actor];
        self.observer.highlight_actor(unit);

        if !self.turn_start(actor) {
            self.phase = BattlePhase::CheckingOutcome;
            return Ok(None);
        }

        let unit = &self.state.units[actor];
        if unit.side.is_player() {
            self.observer.present_action_choices(unit, unit.skills());
            self.pending_actor = Some(actor);
            self.phase = BattlePhase::AwaitingAction;
            return Ok(Some(StepOutcome::AwaitingInput(actor)));
        }

        let action = self.policy.decide(&self.state, actor, &mut self.policy_rng);
        Ok(Some(StepOutcome::Acted(self.resolve_turn(actor, action))))
    }

    /// Turn-start hook. Status effects are carried but have no engine-side
    /// semantics, so this only reports them. Returns whether the actor is
    /// still standing.
    fn turn_start(&self, actor: UnitId) -> bool {
        let unit = &self.state.units[actor];
        for effect in &unit.status_effects {
            log::debug!(
                "{} starts its turn under {} ({:?} turns left)",
                unit.name(),
                effect.name,
                effect.remaining_turns
            );
        }
        unit.is_alive()
    }

    fn resolve_turn(&mut self, actor: UnitId, action: ChosenAction) -> TurnRecord {
        self.phase = BattlePhase::Resolving;
        self.state.turn_number += 1;

        let result = ActionResolver::resolve(
            &mut self.state,
            actor,
            &action.skill,
            &action.targets,
            &mut self.targeting_rng,
            &mut self.observer,
        );

        let side = self.state.units[actor].side;
        let record = match result {
            Ok(report) => TurnRecord {
                turn: self.state.turn_number,
                actor,
                side,
                skill: report.skill.clone(),
                damage_dealt: report.total_damage(),
                targets: report.targets,
                failed: false,
            },
            Err(err) => {
                log::warn!(
                    "{} failed to use {}: {err}",
                    self.state.units[actor].name(),
                    action.skill.name
                );
                let unit = &mut self.state.units[actor];
                unit.time_units += self.config.failure_penalty_tu;
                self.observer.report_failure(&self.state.units[actor], &err);
                TurnRecord {
                    turn: self.state.turn_number,
                    actor,
                    side,
                    skill: action.skill.name,
                    targets: action.targets,
                    damage_dealt: 0,
                    failed: true,
                }
            }
        };

        self.state.record_turn(record.clone());
        self.phase = BattlePhase::CheckingOutcome;
        record
    }

    fn render_roster(&mut self) {
        let players = self.state.active_units(Side::Player);
        let enemies = self.state.active_units(Side::Enemy);
        self.observer.render_roster(&players, &enemies);
    }

    fn render_timeline(&mut self) {
        let order = Scheduler::timeline(&self.state, self.config.timeline_preview);
        let upcoming: Vec<_> = order.iter().map(|&id| &self.state.units[id]).collect();
        self.observer.render_timeline(&upcoming);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{BattleEvent, PolicyController};
    use crate::cards::{BaseStats, CardId, SkillDescriptor};
    use crate::policy::AffordableRandom;

    fn deck(offset: u32, size: u32) -> Vec<Arc<CardDefinition>> {
        (offset..offset + size)
            .map(|id| {
                let card = CardDefinition::new(CardId::new(id), format!("u{id}"))
                    .with_stats(BaseStats {
                        max_hp: 80,
                        physical_attack: 50,
                        special_attack: 50,
                        defense: 10,
                        special_defense: 10,
                        speed: 100 + id as i32,
                    })
                    .with_skill(SkillDescriptor::damage("Strike", 1.0).with_cost_tu(100));
                Arc::new(card)
            })
            .collect()
    }

    /// Both sides lose every active unit between outcome check and
    /// scheduling, leaving only reserves standing.
    fn stalled_battle() -> Battle<Vec<BattleEvent>, AffordableRandom> {
        let mut battle = Battle::new(
            &deck(0, 5),
            &deck(10, 5),
            BattleConfig::default(),
            Vec::new(),
            AffordableRandom::default(),
        )
        .unwrap();
        battle.start().unwrap();
        battle.check_outcome();
        assert_eq!(battle.phase(), BattlePhase::AwaitingActor);

        for side in Side::ALL {
            for id in battle.state.roster(side).active().to_vec() {
                battle.state.units[id].current_hp = 0;
            }
        }
        battle
    }

    #[test]
    fn test_stall_returns_to_outcome_check() {
        let mut battle = stalled_battle();

        let err = battle.step().unwrap_err();
        assert_eq!(err, BattleError::SchedulerStall { attempts: 4 });
        assert_eq!(battle.phase(), BattlePhase::CheckingOutcome);

        // Reserves deploy on the next step and the battle carries on
        assert!(matches!(
            battle.step().unwrap(),
            StepOutcome::AwaitingInput(UnitId(4)) | StepOutcome::Acted(_)
        ));
        assert_eq!(battle.state.roster(Side::Player).active()[0], UnitId(4));
        assert_eq!(battle.state.roster(Side::Enemy).active()[0], UnitId(9));
    }

    #[test]
    fn test_run_recovers_from_stall() {
        let mut battle = stalled_battle();

        let outcome = battle
            .run(&mut PolicyController::new(AffordableRandom::default(), 3))
            .unwrap();

        assert_eq!(battle.outcome(), Some(outcome));
        assert!(battle.state.is_defeated(outcome.winner().opponent()));
        let joined = battle
            .observer()
            .iter()
            .filter(|e| match e {
                BattleEvent::Log { message } => message.ends_with("joined the battle!"),
                _ => false,
            })
            .count();
        assert_eq!(joined, 2);
    }
}
