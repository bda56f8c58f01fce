//! Card system: definitions, skills, elements, units, and registry.
//!
//! ## Key Types
//!
//! - `CardDefinition`: Static card data (element, attack type, stats, skills)
//! - `SkillDescriptor`: Static skill data, classified by scope and category
//! - `Element` / `AttackType`: Damage modifiers and stat pairing
//! - `Unit`: Runtime combat state for one card in a battle
//! - `CardRegistry`: Definition lookup and deck assembly

pub mod definition;
pub mod element;
pub mod instance;
pub mod registry;
pub mod skill;

pub use definition::{BaseStats, CardDefinition, CardId};
pub use element::{AttackType, Element};
pub use instance::{StatusEffect, Unit};
pub use registry::CardRegistry;
pub use skill::{EffectCategory, SkillDescriptor, TargetScope};
