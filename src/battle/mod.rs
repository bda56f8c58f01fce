//! Battle orchestration.
//!
//! - `Battle`: owns the state and runs the turn cycle
//! - `BattleObserver`: presentation callbacks, plus recording and channel
//!   observers built on `BattleEvent`
//! - `PlayerController`: supplies player actions to `Battle::run`
//! - `BattleOutcome`: victory or defeat
//!
//! ## Driving a battle
//!
//! Interactive front-ends call `step()` until it returns
//! `StepOutcome::AwaitingInput`, then hand the chosen action to
//! `submit_action()`. Headless callers use `run()` with a controller.

mod controller;
mod observer;
mod orchestrator;
mod outcome;

pub use controller::{PlayerController, PolicyController};
pub use observer::{BattleEvent, BattleObserver, NullObserver, UnitSnapshot};
pub use orchestrator::{Battle, BattlePhase, StepOutcome};
pub use outcome::BattleOutcome;
