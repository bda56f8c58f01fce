//! Property tests for the scheduler, damage formula, and roster manager.

use std::sync::Arc;

use proptest::prelude::*;

use card_battle::cards::{CardDefinition, CardId, Element};
use card_battle::core::{BattleConfig, BattleState, Side};
use card_battle::effects::damage_formula;
use card_battle::roster::RosterManager;
use card_battle::schedule::Scheduler;

fn deck(speeds: &[i32]) -> Vec<Arc<CardDefinition>> {
    speeds
        .iter()
        .enumerate()
        .map(|(i, &speed)| {
            let card = CardDefinition::new(CardId::new(i as u32), format!("c{i}"));
            Arc::new(card.with_speed(speed))
        })
        .collect()
}

fn element() -> impl Strategy<Value = Element> {
    prop_oneof![
        Just(Element::Red),
        Just(Element::Blue),
        Just(Element::Green),
        Just(Element::Neutral),
    ]
}

proptest! {
    #[test]
    fn normalization_preserves_order(
        player in prop::collection::vec((0i32..1500, 1i32..500), 1..=4),
        enemy in prop::collection::vec((0i32..1500, 1i32..500), 1..=4),
    ) {
        let speeds: Vec<i32> = player.iter().chain(&enemy).map(|&(_, s)| s).collect();
        let (player_speeds, enemy_speeds) = speeds.split_at(player.len());
        let mut state = BattleState::new(&deck(player_speeds), &deck(enemy_speeds)).unwrap();
        for (unit, &(tu, _)) in state.units.iter_mut().zip(player.iter().chain(&enemy)) {
            unit.time_units = tu;
        }

        let before: Vec<i32> = state.units.iter().map(|u| u.time_units).collect();
        Scheduler::normalize(&mut state);
        let after: Vec<i32> = state.units.iter().map(|u| u.time_units).collect();

        for i in 0..before.len() {
            for j in 0..before.len() {
                if before[i] <= before[j] {
                    prop_assert!(after[i] <= after[j]);
                }
            }
        }
        prop_assert!(after.iter().any(|&tu| tu == 0));
    }

    #[test]
    fn scheduler_always_finds_actor(
        player in prop::collection::vec(1i32..1000, 1..=6),
        enemy in prop::collection::vec(1i32..1000, 1..=6),
    ) {
        let mut state = BattleState::new(&deck(&player), &deck(&enemy)).unwrap();
        state.seed_units(&BattleConfig::default());

        let actor = Scheduler::new(0).next_actor(&mut state).unwrap();
        let unit = &state.units[actor];
        prop_assert_eq!(unit.time_units, 0);

        // Nobody ready is faster than the chosen actor
        for id in Scheduler::ready_set(&state) {
            prop_assert!(state.units[id].speed() <= unit.speed());
        }
    }

    #[test]
    fn positive_multiplier_deals_damage(
        attack in 0i32..10_000,
        defense in -999i32..10_000,
        multiplier in 0.001f64..10.0,
        attacker in element(),
        defender in element(),
    ) {
        let modifier = attacker.modifier_against(defender);
        let damage = damage_formula(attack, defense, multiplier, modifier).unwrap();
        prop_assert!(damage >= 1);
    }

    #[test]
    fn higher_defense_never_hurts_more(
        attack in 1i32..5000,
        defense in 0i32..5000,
        extra in 0i32..5000,
        multiplier in 0.1f64..5.0,
    ) {
        let low = damage_formula(attack, defense, multiplier, 1.0).unwrap();
        let high = damage_formula(attack, defense + extra, multiplier, 1.0).unwrap();
        prop_assert!(high <= low);
    }

    #[test]
    fn fill_empty_slots_idempotent(
        size in 1usize..10,
        deaths in prop::collection::vec(any::<bool>(), 10),
    ) {
        let speeds: Vec<i32> = (0..size as i32).map(|i| 50 + i * 30).collect();
        let mut state = BattleState::new(&deck(&speeds), &deck(&[100])).unwrap();
        for (id, dead) in state.roster(Side::Player).active().to_vec().into_iter().zip(&deaths) {
            if *dead {
                state.units[id].current_hp = 0;
            }
        }

        let config = BattleConfig::default();
        let BattleState { units, rosters, .. } = &mut state;
        RosterManager::fill_empty_slots(&mut rosters[Side::Player], units, &config);
        let snapshot = state.clone();

        let BattleState { units, rosters, .. } = &mut state;
        let second = RosterManager::fill_empty_slots(&mut rosters[Side::Player], units, &config);
        prop_assert!(second.is_empty());
        prop_assert_eq!(state, snapshot);
    }
}
