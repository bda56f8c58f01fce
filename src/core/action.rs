//! Action representation: a chosen skill plus optional explicit targets.
//!
//! An empty target list asks the resolution pipeline to auto-target from the
//! skill's scope and category. The opponent policy always leaves it empty;
//! the player input collaborator may fill it in.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::UnitId;
use super::side::Side;
use crate::cards::SkillDescriptor;

/// Target list sized for the common case (at most one full roster).
pub type TargetList = SmallVec<[UnitId; 4]>;

/// A skill choice for the acting unit.
///
/// ## Example
///
/// ```
/// use card_battle::cards::SkillDescriptor;
/// use card_battle::core::{ChosenAction, UnitId};
///
/// let wait = ChosenAction::auto(SkillDescriptor::wait(50));
/// assert!(wait.targets.is_empty());
///
/// let strike = SkillDescriptor::damage("Strike", 1.0);
/// let aimed = ChosenAction::targeted(strike, &[UnitId::new(5)]);
/// assert_eq!(aimed.targets.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChosenAction {
    /// The skill to use.
    pub skill: SkillDescriptor,

    /// Explicit targets. Empty means auto-target.
    pub targets: TargetList,
}

impl ChosenAction {
    /// Choose a skill and let the pipeline pick targets.
    #[must_use]
    pub fn auto(skill: SkillDescriptor) -> Self {
        Self {
            skill,
            targets: SmallVec::new(),
        }
    }

    /// Choose a skill with explicit targets.
    #[must_use]
    pub fn targeted(skill: SkillDescriptor, targets: &[UnitId]) -> Self {
        Self {
            skill,
            targets: SmallVec::from_slice(targets),
        }
    }

    /// Does this action rely on auto-targeting?
    #[must_use]
    pub fn is_auto_targeted(&self) -> bool {
        self.targets.is_empty()
    }
}

/// A resolved turn, kept in the battle history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn: u32,

    /// The acting unit.
    pub actor: UnitId,

    /// The actor's side.
    pub side: Side,

    /// Name of the skill used.
    pub skill: String,

    /// Units the skill was aimed at.
    pub targets: TargetList,

    /// Total HP removed across all targets.
    pub damage_dealt: i32,

    /// Resolution failed and the actor took the TU penalty instead.
    pub failed: bool,
}
