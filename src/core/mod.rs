//! Core engine types: unit ids, sides, state, actions, RNG, configuration, errors.
//!
//! Everything here is independent of how a battle is driven or presented.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod rng;
pub mod side;
pub mod state;

pub use action::{ChosenAction, TargetList, TurnRecord};
pub use config::{BattleConfig, ACTIVE_SLOTS};
pub use entity::UnitId;
pub use error::{BattleError, BattleResult};
pub use rng::GameRng;
pub use side::{Side, SideMap};
pub use state::{BattleState, UnitArena};
