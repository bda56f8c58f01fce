//! Time-unit scheduler.
//!
//! TU is a countdown: a unit acts once its TU reaches zero or below. Each
//! cycle subtracts the smallest TU among living active-slot units from all
//! of them, so the soonest unit lands on zero without tracking absolute
//! time. Reserve units are outside the clock until deployed.

use smallvec::SmallVec;

use crate::core::{BattleError, BattleResult, BattleState, UnitId};

/// Decides which unit acts next.
#[derive(Clone, Debug)]
pub struct Scheduler {
    stall_retries: u32,
}

impl Scheduler {
    /// Create a scheduler that re-checks an empty ready set at most
    /// `stall_retries` times.
    #[must_use]
    pub fn new(stall_retries: u32) -> Self {
        Self { stall_retries }
    }

    /// Advance the clock and pick the next actor.
    ///
    /// Among ready units the highest base speed wins; equal speeds keep slot
    /// order, player side first. Units that were ready but lost the
    /// tie-break stay ready for the next cycle.
    pub fn next_actor(&self, state: &mut BattleState) -> BattleResult<UnitId> {
        let attempts = self.stall_retries + 1;

        for attempt in 1..=attempts {
            Self::normalize(state);

            if let Some(actor) = Self::pick_ready(state) {
                log::debug!(
                    "{} acts (TU {}, speed {})",
                    state.units[actor].name(),
                    state.units[actor].time_units,
                    state.units[actor].speed()
                );
                return Ok(actor);
            }

            log::warn!("no ready unit after normalization (attempt {attempt}/{attempts})");
        }

        log::error!("scheduler stalled: no living active unit became ready");
        Err(BattleError::SchedulerStall { attempts })
    }

    /// Subtract the minimum living active TU from every living active unit,
    /// then clamp them at zero.
    ///
    /// Returns the amount of time that elapsed.
    pub fn normalize(state: &mut BattleState) -> i32 {
        let tracked = state.living_active_all();
        let Some(min_tu) = tracked.iter().map(|&id| state.units[id].time_units).min() else {
            return 0;
        };

        let elapsed = min_tu.max(0);
        for &id in &tracked {
            let unit = &mut state.units[id];
            unit.time_units = (unit.time_units - elapsed).max(0);
        }
        elapsed
    }

    /// Highest-speed living active unit with TU ≤ 0, without advancing time.
    #[must_use]
    pub fn pick_ready(state: &BattleState) -> Option<UnitId> {
        let mut ready = Self::ready_set(state);
        ready.sort_by_key(|&id| std::cmp::Reverse(state.units[id].speed()));
        ready.first().copied()
    }

    /// Living active units with TU ≤ 0, in slot order (player side first).
    #[must_use]
    pub fn ready_set(state: &BattleState) -> SmallVec<[UnitId; 8]> {
        state
            .living_active_all()
            .into_iter()
            .filter(|&id| state.units[id].time_units <= 0)
            .collect()
    }

    /// Living active units ordered by ascending TU, at most `limit` entries.
    ///
    /// Equal TU keeps slot order, player side first.
    #[must_use]
    pub fn timeline(state: &BattleState, limit: usize) -> Vec<UnitId> {
        let mut order: Vec<UnitId> = state.living_active_all().into_vec();
        order.sort_by_key(|&id| state.units[id].time_units);
        order.truncate(limit);
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId};
    use crate::core::{BattleConfig, Side};
    use std::sync::Arc;

    fn deck(speeds: &[i32]) -> Vec<Arc<CardDefinition>> {
        speeds
            .iter()
            .enumerate()
            .map(|(i, &s)| {
                let card = CardDefinition::new(CardId::new(i as u32), format!("c{i}"));
                Arc::new(card.with_speed(s))
            })
            .collect()
    }

    fn seeded(player: &[i32], enemy: &[i32]) -> BattleState {
        let mut state = BattleState::new(&deck(player), &deck(enemy)).unwrap();
        state.seed_units(&BattleConfig::default());
        state
    }

    #[test]
    fn test_fastest_unit_acts_first() {
        let mut state = seeded(&[100, 300], &[200]);
        let scheduler = Scheduler::new(3);

        let actor = scheduler.next_actor(&mut state).unwrap();
        assert_eq!(state.units[actor].speed(), 300);
        assert_eq!(state.units[actor].time_units, 0);

        // Everyone else moved forward by the same 700 TU
        let tus: Vec<_> = state.units.iter().map(|u| u.time_units).collect();
        assert_eq!(tus, vec![200, 0, 100]);
    }

    #[test]
    fn test_tie_break_by_speed() {
        let mut state = seeded(&[100, 300], &[200]);
        for unit in state.units.iter_mut() {
            unit.time_units = 0;
        }

        let actor = Scheduler::new(0).next_actor(&mut state).unwrap();
        assert_eq!(state.units[actor].speed(), 300);
        assert_eq!(Scheduler::ready_set(&state).len(), 3);
    }

    #[test]
    fn test_equal_speed_prefers_player_slot_order() {
        let mut state = seeded(&[150, 150], &[150]);
        let actor = Scheduler::new(0).next_actor(&mut state).unwrap();
        assert_eq!(actor, state.roster(Side::Player).active()[0]);
    }

    #[test]
    fn test_reserves_do_not_tick() {
        let mut state = seeded(&[500, 1, 1, 1, 1], &[100]);
        let reserve = state.roster(Side::Player).reserve().next().unwrap();
        state.units[reserve].time_units = 900;

        Scheduler::new(0).next_actor(&mut state).unwrap();
        assert_eq!(state.units[reserve].time_units, 900);
    }

    #[test]
    fn test_no_advance_when_already_ready() {
        let mut state = seeded(&[100], &[100]);
        state.units[UnitId(0)].time_units = 0;
        state.units[UnitId(1)].time_units = 40;

        assert_eq!(Scheduler::normalize(&mut state), 0);
        assert_eq!(state.units[UnitId(1)].time_units, 40);
    }

    #[test]
    fn test_normalize_clamps_negative() {
        let mut state = seeded(&[100], &[100]);
        state.units[UnitId(0)].time_units = -30;
        state.units[UnitId(1)].time_units = 20;

        Scheduler::normalize(&mut state);
        assert_eq!(state.units[UnitId(0)].time_units, 0);
        assert_eq!(state.units[UnitId(1)].time_units, 20);
    }

    #[test]
    fn test_dead_units_ignored() {
        let mut state = seeded(&[900], &[100]);
        state.units[UnitId(0)].current_hp = 0;

        let actor = Scheduler::new(0).next_actor(&mut state).unwrap();
        assert_eq!(actor, UnitId(1));
        // Dead unit's TU is left alone
        assert_eq!(state.units[UnitId(0)].time_units, 100);
    }

    #[test]
    fn test_stall_is_bounded() {
        let mut state = seeded(&[100], &[100]);
        for unit in state.units.iter_mut() {
            unit.current_hp = 0;
        }

        let err = Scheduler::new(2).next_actor(&mut state).unwrap_err();
        assert_eq!(err, BattleError::SchedulerStall { attempts: 3 });
    }

    #[test]
    fn test_timeline_order() {
        let mut state = seeded(&[100, 400, 300], &[200]);
        let order = Scheduler::timeline(&state, 8);
        let speeds: Vec<_> = order.iter().map(|&id| state.units[id].speed()).collect();
        assert_eq!(speeds, vec![400, 300, 200, 100]);

        assert_eq!(Scheduler::timeline(&state, 2).len(), 2);

        state.units[order[0]].current_hp = 0;
        assert_eq!(Scheduler::timeline(&state, 8).len(), 3);
    }
}
