//! Presentation boundary.
//!
//! The engine never draws anything. It reports what happened through a
//! `BattleObserver`; every method has a no-op default so an implementation
//! only overrides what it renders. A returning call is the acknowledgment,
//! so an observer that animates can simply block until the animation ends.
//!
//! Two message-passing observers are provided:
//! - `Vec<BattleEvent>` records every notification in order
//! - `mpsc::Sender<BattleEvent>` forwards them to a presentation thread

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use crate::cards::{SkillDescriptor, Unit};
use crate::core::{BattleError, UnitId};

/// Receives battle notifications.
pub trait BattleObserver {
    /// Both active rosters changed.
    fn render_roster(&mut self, _players: &[&Unit], _enemies: &[&Unit]) {}

    /// Upcoming actors, soonest first.
    fn render_timeline(&mut self, _upcoming: &[&Unit]) {}

    fn highlight_actor(&mut self, _actor: &Unit) {}

    /// A player unit is waiting for `Battle::submit_action`.
    fn present_action_choices(&mut self, _actor: &Unit, _skills: &[SkillDescriptor]) {}

    fn animate_skill(&mut self, _actor: &Unit, _skill: &str) {}

    fn log(&mut self, _message: &str) {}

    fn damage(&mut self, _target: &Unit, _amount: i32, _advantaged: bool) {}

    /// An action failed to resolve; the battle continues.
    fn report_failure(&mut self, _actor: &Unit, _error: &BattleError) {}

    /// Called exactly once per battle.
    fn outcome(&mut self, _player_won: bool) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl BattleObserver for NullObserver {}

impl<T: BattleObserver + ?Sized> BattleObserver for &mut T {
    fn render_roster(&mut self, players: &[&Unit], enemies: &[&Unit]) {
        (**self).render_roster(players, enemies);
    }

    fn render_timeline(&mut self, upcoming: &[&Unit]) {
        (**self).render_timeline(upcoming);
    }

    fn highlight_actor(&mut self, actor: &Unit) {
        (**self).highlight_actor(actor);
    }

    fn present_action_choices(&mut self, actor: &Unit, skills: &[SkillDescriptor]) {
        (**self).present_action_choices(actor, skills);
    }

    fn animate_skill(&mut self, actor: &Unit, skill: &str) {
        (**self).animate_skill(actor, skill);
    }

    fn log(&mut self, message: &str) {
        (**self).log(message);
    }

    fn damage(&mut self, target: &Unit, amount: i32, advantaged: bool) {
        (**self).damage(target, amount, advantaged);
    }

    fn report_failure(&mut self, actor: &Unit, error: &BattleError) {
        (**self).report_failure(actor, error);
    }

    fn outcome(&mut self, player_won: bool) {
        (**self).outcome(player_won);
    }
}

/// Owned view of a unit for event consumers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub id: UnitId,
    pub name: String,
    pub current_hp: i32,
    pub max_hp: i32,
    pub current_mp: i32,
    pub time_units: i32,
}

impl From<&Unit> for UnitSnapshot {
    fn from(unit: &Unit) -> Self {
        Self {
            id: unit.id,
            name: unit.name().to_string(),
            current_hp: unit.current_hp,
            max_hp: unit.max_hp(),
            current_mp: unit.current_mp,
            time_units: unit.time_units,
        }
    }
}

/// One observer notification as an owned value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    RosterRendered {
        players: Vec<UnitSnapshot>,
        enemies: Vec<UnitSnapshot>,
    },
    TimelineRendered {
        upcoming: Vec<UnitId>,
    },
    ActorHighlighted {
        actor: UnitId,
    },
    ChoicesPresented {
        actor: UnitId,
        skills: Vec<String>,
    },
    SkillAnimated {
        actor: UnitId,
        skill: String,
    },
    Log {
        message: String,
    },
    Damage {
        target: UnitId,
        amount: i32,
        advantaged: bool,
    },
    Failure {
        actor: UnitId,
        error: String,
    },
    Outcome {
        player_won: bool,
    },
}

impl BattleEvent {
    fn snapshots(units: &[&Unit]) -> Vec<UnitSnapshot> {
        units.iter().map(|&u| UnitSnapshot::from(u)).collect()
    }
}

/// Forwards every notification as a `BattleEvent`.
trait EventSink {
    fn emit(&mut self, event: BattleEvent);
}

impl EventSink for Vec<BattleEvent> {
    fn emit(&mut self, event: BattleEvent) {
        self.push(event);
    }
}

impl EventSink for Sender<BattleEvent> {
    fn emit(&mut self, event: BattleEvent) {
        if self.send(event).is_err() {
            log::debug!("battle event receiver dropped");
        }
    }
}

macro_rules! event_observer {
    ($ty:ty) => {
        impl BattleObserver for $ty {
            fn render_roster(&mut self, players: &[&Unit], enemies: &[&Unit]) {
                self.emit(BattleEvent::RosterRendered {
                    players: BattleEvent::snapshots(players),
                    enemies: BattleEvent::snapshots(enemies),
                });
            }

            fn render_timeline(&mut self, upcoming: &[&Unit]) {
                self.emit(BattleEvent::TimelineRendered {
                    upcoming: upcoming.iter().map(|u| u.id).collect(),
                });
            }

            fn highlight_actor(&mut self, actor: &Unit) {
                self.emit(BattleEvent::ActorHighlighted { actor: actor.id });
            }

            fn present_action_choices(&mut self, actor: &Unit, skills: &[SkillDescriptor]) {
                self.emit(BattleEvent::ChoicesPresented {
                    actor: actor.id,
                    skills: skills.iter().map(|s| s.name.clone()).collect(),
                });
            }

            fn animate_skill(&mut self, actor: &Unit, skill: &str) {
                self.emit(BattleEvent::SkillAnimated {
                    actor: actor.id,
                    skill: skill.to_string(),
                });
            }

            fn log(&mut self, message: &str) {
                self.emit(BattleEvent::Log {
                    message: message.to_string(),
                });
            }

            fn damage(&mut self, target: &Unit, amount: i32, advantaged: bool) {
                self.emit(BattleEvent::Damage {
                    target: target.id,
                    amount,
                    advantaged,
                });
            }

            fn report_failure(&mut self, actor: &Unit, error: &BattleError) {
                self.emit(BattleEvent::Failure {
                    actor: actor.id,
                    error: error.to_string(),
                });
            }

            fn outcome(&mut self, player_won: bool) {
                self.emit(BattleEvent::Outcome { player_won });
            }
        }
    };
}

event_observer!(Vec<BattleEvent>);
event_observer!(Sender<BattleEvent>);
