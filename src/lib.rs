//! # card-battle
//!
//! A turn-order card battle engine: two decks, four active slots a side,
//! a time-unit clock deciding who acts next.
//!
//! ## Design Principles
//!
//! 1. **Headless**: The engine never renders. Presentation happens through
//!    the `BattleObserver` trait; input arrives through `submit_action`.
//!
//! 2. **Explicit Suspension**: A player turn is a phase, not a callback.
//!    `step()` returns `AwaitingInput` and the battle waits until the
//!    action is submitted.
//!
//! 3. **Deterministic**: All randomness flows through seeded `GameRng`
//!    streams, so a seed and a list of actions replay a battle exactly.
//!
//! ## Turn Cycle
//!
//! - **Time Units**: Each unit starts at `1000 - speed` TU. The scheduler
//!   subtracts the smallest TU from every living active unit; whoever hits
//!   zero acts, fastest first on ties.
//!
//! - **Resolution**: Target, pay MP, compute damage for every target, apply
//!   it, add the skill's TU cost. A failed resolution costs the actor a TU
//!   penalty and the battle moves on.
//!
//! - **Reserves**: Defeated active units are replaced from the reserve queue
//!   in deck order. A side with no living units left loses.
//!
//! ## Modules
//!
//! - `core`: Unit ids, sides, state, actions, RNG, configuration, errors
//! - `cards`: Card definitions, skills, elements, units, registry
//! - `roster`: Active slots, reserve queue, substitution
//! - `schedule`: Time-unit scheduler and timeline preview
//! - `effects`: Targeting, damage, action resolution
//! - `policy`: Opponent decision policies
//! - `battle`: Orchestrator, observers, controllers

pub mod battle;
pub mod cards;
pub mod core;
pub mod effects;
pub mod policy;
pub mod roster;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, BattleError, BattleResult, BattleState, ChosenAction, GameRng, Side, SideMap,
    TurnRecord, UnitArena, UnitId, ACTIVE_SLOTS,
};

pub use crate::cards::{
    AttackType, BaseStats, CardDefinition, CardId, CardRegistry, EffectCategory, Element,
    SkillDescriptor, StatusEffect, TargetScope, Unit,
};

pub use crate::roster::{Roster, RosterManager, Substitution};

pub use crate::schedule::Scheduler;

pub use crate::effects::{ActionReport, ActionResolver, EffectOutcome};

pub use crate::policy::{AffordableRandom, OpponentPolicy};

pub use crate::battle::{
    Battle, BattleEvent, BattleObserver, BattleOutcome, BattlePhase, NullObserver, PlayerController,
    PolicyController, StepOutcome,
};
