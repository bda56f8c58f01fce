//! Action resolution pipeline.
//!
//! - `TargetSelector`: explicit or automatic target resolution
//! - `damage_formula` / `roll_damage`: the damage calculation
//! - `ActionResolver`: runs a skill end to end and reports what happened
//!
//! Resolution is all-or-nothing: validation and damage rolls happen before
//! any HP, MP or TU is touched.

mod damage;
mod resolver;
mod targeting;

pub use damage::{damage_formula, roll_damage, DamageRoll, DEFENSE_SCALE};
pub use resolver::{ActionReport, ActionResolver, EffectOutcome, TargetOutcome};
pub use targeting::TargetSelector;
