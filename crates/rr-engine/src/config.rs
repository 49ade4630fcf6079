//! Configuration for rolling dice pools.

use crate::resolution::RerollPolicy;

/// Hard upper bound on dice in a single pool.
pub const MAX_DICE: u32 = 50;

/// Default round cap for the reroll loop.
pub const MAX_ROUNDS: usize = 100;

/// Configuration for parsing and resolving dice pools.
#[derive(Debug, Clone)]
pub struct RollConfig {
    /// Maximum number of dice a tray request may ask for (1-50).
    pub max_dice: u32,
    /// Maximum number of rounds a pool may accumulate, including the first.
    pub max_rounds: usize,
    /// Number of normal dice rolled when the request names none.
    pub default_dice: u32,
    /// Whether rerolls happen on their own or wait for the caller.
    pub policy: RerollPolicy,
    /// RNG seed for reproducible rolls. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            max_dice: MAX_DICE,
            max_rounds: MAX_ROUNDS,
            default_dice: 5,
            policy: RerollPolicy::Automatic,
            seed: None,
        }
    }
}

impl RollConfig {
    /// Set the dice cap (clamped to 1-50).
    pub fn with_max_dice(mut self, max: u32) -> Self {
        self.max_dice = max.clamp(1, MAX_DICE);
        self
    }

    /// Set the round cap (at least one round).
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds.max(1);
        self
    }

    /// Set the number of dice rolled for an empty request (capped at `max_dice`).
    pub fn with_default_dice(mut self, count: u32) -> Self {
        self.default_dice = count.min(self.max_dice);
        self
    }

    /// Set the reroll policy.
    pub fn with_policy(mut self, policy: RerollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = RollConfig::default();
        assert_eq!(cfg.max_dice, 50);
        assert_eq!(cfg.max_rounds, 100);
        assert_eq!(cfg.default_dice, 5);
        assert_eq!(cfg.policy, RerollPolicy::Automatic);
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn builder_methods() {
        let cfg = RollConfig::default()
            .with_seed(7)
            .with_max_rounds(10)
            .with_policy(RerollPolicy::Confirmed)
            .with_default_dice(3);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.max_rounds, 10);
        assert_eq!(cfg.policy, RerollPolicy::Confirmed);
        assert_eq!(cfg.default_dice, 3);
    }

    #[test]
    fn limits_clamped() {
        let cfg = RollConfig::default().with_max_dice(0).with_max_rounds(0);
        assert_eq!(cfg.max_dice, 1);
        assert_eq!(cfg.max_rounds, 1);
        let cfg = RollConfig::default().with_max_dice(500);
        assert_eq!(cfg.max_dice, 50);
    }

    #[test]
    fn default_dice_respects_cap() {
        let cfg = RollConfig::default().with_max_dice(3).with_default_dice(5);
        assert_eq!(cfg.default_dice, 3);
    }
}
