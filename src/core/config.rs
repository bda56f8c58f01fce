//! Battle configuration parameters.

use serde::{Deserialize, Serialize};

/// Number of active slots per side.
pub const ACTIVE_SLOTS: usize = 4;

/// Battle configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// MP every unit starts the battle with (actives and reserves alike).
    pub starting_mp: i32,

    /// Base of the initial TU formula: `max(0, tu_base - speed)`.
    /// Also used when a reserve unit is deployed into an active slot.
    pub tu_base: i32,

    /// TU cost of the "Wait" pseudo-skill used when nothing is affordable.
    pub wait_cost_tu: i32,

    /// TU added to an actor whose action failed to resolve.
    pub failure_penalty_tu: i32,

    /// How many times the scheduler re-checks an empty ready set before
    /// reporting a stall.
    pub stall_retries: u32,

    /// Number of units included in the schedule preview.
    pub timeline_preview: usize,

    /// Seed for targeting and opponent decisions.
    pub seed: u64,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            starting_mp: 4,
            tu_base: 1000,
            wait_cost_tu: 50,
            failure_penalty_tu: 100,
            stall_retries: 3,
            timeline_preview: 8,
            seed: 42,
        }
    }
}

impl BattleConfig {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting MP.
    #[must_use]
    pub fn with_starting_mp(mut self, mp: i32) -> Self {
        self.starting_mp = mp;
        self
    }

    /// Set the wait pseudo-skill TU cost.
    #[must_use]
    pub fn with_wait_cost(mut self, cost_tu: i32) -> Self {
        self.wait_cost_tu = cost_tu;
        self
    }

    /// Set the failed-resolution TU penalty.
    #[must_use]
    pub fn with_failure_penalty(mut self, penalty_tu: i32) -> Self {
        self.failure_penalty_tu = penalty_tu;
        self
    }

    /// Set the schedule preview length.
    #[must_use]
    pub fn with_timeline_preview(mut self, len: usize) -> Self {
        self.timeline_preview = len;
        self
    }

    /// Initial TU for a unit with the given speed.
    #[must_use]
    pub fn initial_time_units(&self, speed: i32) -> i32 {
        (self.tu_base - speed).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BattleConfig::default();
        assert_eq!(config.starting_mp, 4);
        assert_eq!(config.tu_base, 1000);
        assert_eq!(config.wait_cost_tu, 50);
        assert_eq!(config.failure_penalty_tu, 100);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = BattleConfig::default()
            .with_seed(7)
            .with_starting_mp(10)
            .with_wait_cost(20)
            .with_failure_penalty(300)
            .with_timeline_preview(3);

        assert_eq!(config.seed, 7);
        assert_eq!(config.starting_mp, 10);
        assert_eq!(config.wait_cost_tu, 20);
        assert_eq!(config.failure_penalty_tu, 300);
        assert_eq!(config.timeline_preview, 3);
    }

    #[test]
    fn test_initial_time_units() {
        let config = BattleConfig::default();
        assert_eq!(config.initial_time_units(100), 900);
        assert_eq!(config.initial_time_units(1000), 0);
        assert_eq!(config.initial_time_units(1500), 0);
    }

    #[test]
    fn test_serialization() {
        let config = BattleConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BattleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: BattleConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(config.seed, 5);
        assert_eq!(config.tu_base, 1000);
    }
}
