//! Roster manager for active slots and reserve substitution.
//!
//! Each side fields at most four units in active slots. Defeated units stay
//! in their slot (so presentation can keep stable positional references)
//! until a reserve unit takes their place. Reserves are deployed FIFO:
//! first drafted, first deployed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::{BattleConfig, ACTIVE_SLOTS};
use crate::core::entity::UnitId;
use crate::core::state::UnitArena;

/// Active slots plus reserve queue for one side.
///
/// ## Usage
///
/// ```
/// use card_battle::core::UnitId;
/// use card_battle::roster::Roster;
///
/// let roster = Roster::from_deck((0..6).map(UnitId::new));
///
/// assert_eq!(roster.active(), &[UnitId(0), UnitId(1), UnitId(2), UnitId(3)]);
/// assert_eq!(roster.reserve().collect::<Vec<_>>(), vec![UnitId(4), UnitId(5)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    active: SmallVec<[UnitId; ACTIVE_SLOTS]>,
    reserve: VecDeque<UnitId>,
}

impl Roster {
    /// Split a deck in order: first four active, remainder reserve.
    pub fn from_deck(deck: impl IntoIterator<Item = UnitId>) -> Self {
        let mut roster = Self::default();
        for id in deck {
            if roster.active.len() < ACTIVE_SLOTS {
                roster.active.push(id);
            } else {
                roster.reserve.push_back(id);
            }
        }
        roster
    }

    /// Active slots in positional order, dead occupants included.
    #[must_use]
    pub fn active(&self) -> &[UnitId] {
        &self.active
    }

    /// Reserve queue, front first.
    pub fn reserve(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.reserve.iter().copied()
    }

    /// Number of undeployed reserve units.
    #[must_use]
    pub fn reserve_len(&self) -> usize {
        self.reserve.len()
    }

    /// Living active-slot units in slot order.
    pub fn living_active<'a>(&'a self, units: &'a UnitArena) -> impl Iterator<Item = UnitId> + 'a {
        self.active.iter().copied().filter(|&id| units.is_alive(id))
    }

    /// Does any unit in the active slots or the reserve still stand?
    #[must_use]
    pub fn has_living(&self, units: &UnitArena) -> bool {
        self.active
            .iter()
            .chain(self.reserve.iter())
            .any(|&id| units.is_alive(id))
    }

    /// Slot index currently holding `id`, if deployed.
    #[must_use]
    pub fn slot_of(&self, id: UnitId) -> Option<usize> {
        self.active.iter().position(|&slot| slot == id)
    }
}

/// A reserve unit replacing a defeated one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// Slot index that changed hands.
    pub slot: usize,
    /// The defeated unit leaving the slot.
    pub outgoing: UnitId,
    /// The reserve unit entering the slot.
    pub incoming: UnitId,
}

/// Substitutions made by one `fill_empty_slots` pass.
pub type Substitutions = SmallVec<[Substitution; ACTIVE_SLOTS]>;

/// Enforces the substitution invariant.
pub struct RosterManager;

impl RosterManager {
    /// Deploy reserves into slots held by defeated units.
    ///
    /// For each dead slot, in slot order, the front living reserve unit moves
    /// in and its TU is reseeded with the battle-start formula. MP is left
    /// alone. Reserve units that are already down are dropped from the queue
    /// rather than deployed. Dead slots stay put once the reserve runs dry.
    /// Calling this again without any state change substitutes nothing.
    pub fn fill_empty_slots(
        roster: &mut Roster,
        units: &mut UnitArena,
        config: &BattleConfig,
    ) -> Substitutions {
        let mut substitutions = Substitutions::new();

        for (slot, occupant) in roster.active.iter_mut().enumerate() {
            if units.is_alive(*occupant) {
                continue;
            }
            let Some(incoming) = Self::next_living(&mut roster.reserve, units) else {
                break;
            };

            let unit = &mut units[incoming];
            unit.time_units = config.initial_time_units(unit.speed());
            log::info!("{} joined the battle in slot {}", unit.name(), slot);

            substitutions.push(Substitution {
                slot,
                outgoing: *occupant,
                incoming,
            });
            *occupant = incoming;
        }

        substitutions
    }

    /// Pop reserve units until one is alive.
    fn next_living(reserve: &mut VecDeque<UnitId>, units: &UnitArena) -> Option<UnitId> {
        while let Some(id) = reserve.pop_front() {
            if units.is_alive(id) {
                return Some(id);
            }
            log::debug!("{} is down in reserve, skipping", units[id].name());
        }
        None
    }
}
