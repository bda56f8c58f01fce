//! Battle state: unit arena, rosters and turn history.
//!
//! ## UnitArena
//!
//! Owns every `Unit` of the battle, indexed by `UnitId`. Dead units stay in
//! the arena so slot references and history entries never dangle.
//!
//! ## BattleState
//!
//! The aggregate the orchestrator owns exclusively:
//! - Unit arena
//! - Per-side rosters (active slots + reserve queue)
//! - Turn counter and resolved-turn history

use std::ops::{Index, IndexMut};
use std::sync::Arc;

use im::Vector;
use smallvec::SmallVec;

use super::action::{TargetList, TurnRecord};
use super::config::{BattleConfig, ACTIVE_SLOTS};
use super::entity::UnitId;
use super::error::{BattleError, BattleResult};
use super::side::{Side, SideMap};
use crate::cards::{CardDefinition, Unit};
use crate::roster::Roster;

/// Storage for every unit in a battle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitArena {
    units: Vec<Unit>,
}

impl UnitArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a unit for `card` and return its id.
    pub fn spawn(&mut self, card: Arc<CardDefinition>, side: Side) -> UnitId {
        let id = UnitId::new(self.units.len() as u32);
        self.units.push(Unit::new(id, card, side));
        id
    }

    /// Get a unit by id.
    #[must_use]
    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.index())
    }

    /// Get a mutable unit by id.
    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(id.index())
    }

    /// Get a unit by id, failing with `UnknownUnit`.
    pub fn try_get(&self, id: UnitId) -> BattleResult<&Unit> {
        self.get(id).ok_or(BattleError::UnknownUnit(id))
    }

    /// Get a mutable unit by id, failing with `UnknownUnit`.
    pub fn try_get_mut(&mut self, id: UnitId) -> BattleResult<&mut Unit> {
        self.get_mut(id).ok_or(BattleError::UnknownUnit(id))
    }

    /// Is the unit present and alive?
    #[must_use]
    pub fn is_alive(&self, id: UnitId) -> bool {
        self.get(id).is_some_and(Unit::is_alive)
    }

    /// Number of units in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Is the arena empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterate over all units.
    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    /// Iterate mutably over all units.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Unit> {
        self.units.iter_mut()
    }
}

impl Index<UnitId> for UnitArena {
    type Output = Unit;

    fn index(&self, id: UnitId) -> &Self::Output {
        &self.units[id.index()]
    }
}

impl IndexMut<UnitId> for UnitArena {
    fn index_mut(&mut self, id: UnitId) -> &mut Self::Output {
        &mut self.units[id.index()]
    }
}

/// Complete battle state.
///
/// Uses an `im::Vector` for the turn history so presentation snapshots can
/// be cloned cheaply.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleState {
    /// Every unit of both decks.
    pub units: UnitArena,

    /// Active slots and reserve queue per side.
    pub rosters: SideMap<Roster>,

    /// Number of turns resolved so far.
    pub turn_number: u32,

    /// Resolved turns, oldest first.
    pub history: Vector<TurnRecord>,
}

impl BattleState {
    /// Build the state from two decks in deck order.
    ///
    /// The first four cards of each deck take the active slots, the rest
    /// queue up as reserves. No shuffling happens here.
    pub fn new(
        player_deck: &[Arc<CardDefinition>],
        enemy_deck: &[Arc<CardDefinition>],
    ) -> BattleResult<Self> {
        let mut units = UnitArena::new();
        let mut rosters = SideMap::<Roster>::default();

        for (side, deck) in [(Side::Player, player_deck), (Side::Enemy, enemy_deck)] {
            if deck.is_empty() {
                return Err(BattleError::EmptyDeck(side));
            }
            let ids: Vec<UnitId> = deck
                .iter()
                .map(|card| units.spawn(Arc::clone(card), side))
                .collect();
            rosters[side] = Roster::from_deck(ids);
        }

        Ok(Self {
            units,
            rosters,
            turn_number: 0,
            history: Vector::new(),
        })
    }

    /// Assign starting MP to every unit and seed active-slot TU.
    ///
    /// Reserve units get their TU when they are deployed.
    pub fn seed_units(&mut self, config: &BattleConfig) {
        for unit in self.units.iter_mut() {
            unit.current_mp = config.starting_mp;
        }
        for side in Side::ALL {
            for &id in self.rosters[side].active() {
                let unit = &mut self.units[id];
                unit.time_units = config.initial_time_units(unit.speed());
            }
        }
    }

    /// Get a unit by id.
    pub fn unit(&self, id: UnitId) -> BattleResult<&Unit> {
        self.units.try_get(id)
    }

    /// Get a mutable unit by id.
    pub fn unit_mut(&mut self, id: UnitId) -> BattleResult<&mut Unit> {
        self.units.try_get_mut(id)
    }

    /// Get a side's roster.
    #[must_use]
    pub fn roster(&self, side: Side) -> &Roster {
        &self.rosters[side]
    }

    /// Living active-slot units of one side, in slot order.
    #[must_use]
    pub fn living_active(&self, side: Side) -> SmallVec<[UnitId; ACTIVE_SLOTS]> {
        self.rosters[side].living_active(&self.units).collect()
    }

    /// Living active-slot units of both sides, player slots first.
    #[must_use]
    pub fn living_active_all(&self) -> SmallVec<[UnitId; 8]> {
        Side::ALL
            .into_iter()
            .flat_map(|side| self.rosters[side].living_active(&self.units))
            .collect()
    }

    /// Living active-slot units on the other side from `side`.
    #[must_use]
    pub fn living_opponents(&self, side: Side) -> TargetList {
        self.rosters[side.opponent()].living_active(&self.units).collect()
    }

    /// Has `side` run out of living units in both active slots and reserve?
    #[must_use]
    pub fn is_defeated(&self, side: Side) -> bool {
        !self.rosters[side].has_living(&self.units)
    }

    /// Active-slot units of one side (dead ones included), in slot order.
    #[must_use]
    pub fn active_units(&self, side: Side) -> Vec<&Unit> {
        self.rosters[side]
            .active()
            .iter()
            .map(|&id| &self.units[id])
            .collect()
    }

    /// Append a resolved turn to the history.
    pub fn record_turn(&mut self, record: TurnRecord) {
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn deck(prefix: &str, speeds: &[i32]) -> Vec<Arc<CardDefinition>> {
        speeds
            .iter()
            .enumerate()
            .map(|(i, &speed)| {
                Arc::new(
                    CardDefinition::new(CardId::new(i as u32), format!("{prefix}{i}"))
                        .with_speed(speed),
                )
            })
            .collect()
    }

    #[test]
    fn test_new_splits_active_and_reserve() {
        let state = BattleState::new(
            &deck("p", &[10, 20, 30, 40, 50, 60]),
            &deck("e", &[10, 20, 30]),
        )
        .unwrap();

        assert_eq!(state.units.len(), 9);
        assert_eq!(state.roster(Side::Player).active().len(), 4);
        assert_eq!(state.roster(Side::Player).reserve_len(), 2);
        assert_eq!(state.roster(Side::Enemy).active().len(), 3);
        assert_eq!(state.roster(Side::Enemy).reserve_len(), 0);

        // Deck order is preserved
        let names: Vec<_> = state
            .active_units(Side::Player)
            .iter()
            .map(|u| u.name().to_string())
            .collect();
        assert_eq!(names, vec!["p0", "p1", "p2", "p3"]);
    }

    #[test]
    fn test_empty_deck_rejected() {
        let err = BattleState::new(&deck("p", &[10]), &[]).unwrap_err();
        assert_eq!(err, BattleError::EmptyDeck(Side::Enemy));
    }

    #[test]
    fn test_seed_units() {
        let mut state =
            BattleState::new(&deck("p", &[100, 200, 300, 400, 500]), &deck("e", &[1200])).unwrap();
        state.seed_units(&BattleConfig::default());

        let player_tu: Vec<_> = state
            .active_units(Side::Player)
            .iter()
            .map(|u| u.time_units)
            .collect();
        assert_eq!(player_tu, vec![900, 800, 700, 600]);
        assert_eq!(state.active_units(Side::Enemy)[0].time_units, 0);
        assert!(state.units.iter().all(|u| u.current_mp == 4));

        // Reserve TU untouched until deployment
        let reserve = state.roster(Side::Player).reserve().next().unwrap();
        assert_eq!(state.units[reserve].time_units, 0);
    }

    #[test]
    fn test_defeat_requires_empty_reserve() {
        let mut state = BattleState::new(&deck("p", &[1, 2, 3, 4, 5]), &deck("e", &[1])).unwrap();

        for id in state.living_active(Side::Player) {
            state.units[id].current_hp = 0;
        }
        assert!(state.living_active(Side::Player).is_empty());
        assert!(!state.is_defeated(Side::Player));

        let reserve = state.roster(Side::Player).reserve().next().unwrap();
        state.units[reserve].current_hp = 0;
        assert!(state.is_defeated(Side::Player));
        assert!(!state.is_defeated(Side::Enemy));
    }

    #[test]
    fn test_living_queries() {
        let mut state = BattleState::new(&deck("p", &[1, 2]), &deck("e", &[3, 4])).unwrap();
        let enemy_first = state.roster(Side::Enemy).active()[0];
        state.units[enemy_first].current_hp = 0;

        assert_eq!(state.living_active_all().len(), 3);
        assert_eq!(state.living_opponents(Side::Player).len(), 1);
        assert_eq!(state.living_opponents(Side::Enemy).len(), 2);
        assert!(state.unit(UnitId::new(99)).is_err());
    }
}
