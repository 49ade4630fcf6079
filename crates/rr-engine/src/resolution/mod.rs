//! Pool resolution: rolling rounds, chasing rerolls, and scoring.
//!
//! A pool is rolled in rounds. Every die that shows a reroll face spawns a
//! die with the same configuration in the next round. How the loop advances
//! depends on the [`RerollPolicy`]:
//! - **Automatic**: rounds are rolled until no reroll faces remain.
//! - **Confirmed**: after each round with rerolls, resolution stops and
//!   hands a [`PendingPool`] back to the caller, who either continues it or
//!   finishes it as-is.
//!
//! Both policies stop at the resolver's round cap, so a source that always
//! rolls six still terminates.

pub mod score;

pub use score::{Bonuses, PoolScore, score_faces};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{MAX_ROUNDS, RollConfig};
use crate::dice::layout::clamp_pips;
use crate::dice::{DieConfig, DieResult, DieSource, Face, RollObserver, Round, face_for};

/// What happens when a round shows reroll faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RerollPolicy {
    /// Keep rolling until no reroll faces remain.
    #[default]
    Automatic,
    /// Pause after every round with rerolls and wait for the caller.
    Confirmed,
}

/// A fully resolved pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolOutcome {
    /// Every round in roll order. Always holds at least the first round.
    pub rounds: Vec<Round>,
    /// The final score.
    pub score: PoolScore,
}

impl PoolOutcome {
    /// Every face across every round.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.rounds.iter().flat_map(Round::faces)
    }

    /// Total number of dice rolled across all rounds.
    pub fn dice_rolled(&self) -> usize {
        self.rounds.iter().map(Round::count).sum()
    }
}

/// A pool waiting for the caller to decide on its rerolls.
///
/// This is plain data: dropping it abandons the roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPool {
    rounds: Vec<Round>,
    bonuses: Bonuses,
}

impl PendingPool {
    /// The rounds rolled so far.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Configs of the dice that would be rolled if the pool continues.
    pub fn pending_rerolls(&self) -> Vec<DieConfig> {
        self.rounds
            .last()
            .map(next_round_configs)
            .unwrap_or_default()
    }

    /// Stop here and score the rounds rolled so far.
    ///
    /// Dice still showing a reroll face are scored as they are.
    pub fn finish(self) -> PoolOutcome {
        finalize(self.rounds, self.bonuses)
    }
}

/// Where a pool resolution stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolStep {
    /// The pool is resolved.
    Finished(PoolOutcome),
    /// The pool is waiting for a reroll decision.
    Awaiting(PendingPool),
}

impl PoolStep {
    /// Finish the pool now, scoring a pending pool as it stands.
    pub fn finish(self) -> PoolOutcome {
        match self {
            Self::Finished(outcome) => outcome,
            Self::Awaiting(pending) => pending.finish(),
        }
    }
}

/// Configs for the next round: a copy of every die that showed a reroll face.
pub fn next_round_configs(round: &Round) -> Vec<DieConfig> {
    round.reroll_configs()
}

/// Score a finished list of rounds.
pub fn finalize(rounds: Vec<Round>, bonuses: Bonuses) -> PoolOutcome {
    let mut outcome = PoolOutcome {
        rounds,
        score: PoolScore::default(),
    };
    outcome.score = score_faces(outcome.faces(), bonuses);
    outcome
}

/// Rolls dice pools against an injected die source.
pub struct PoolResolver<S> {
    source: S,
    observers: Vec<Box<dyn RollObserver>>,
    policy: RerollPolicy,
    max_rounds: usize,
}

impl<S: DieSource> PoolResolver<S> {
    /// Create an automatic resolver with the default round cap.
    pub fn new(source: S) -> Self {
        Self {
            source,
            observers: Vec::new(),
            policy: RerollPolicy::Automatic,
            max_rounds: MAX_ROUNDS,
        }
    }

    /// Create a resolver using the policy and round cap of a config.
    pub fn from_config(source: S, config: &RollConfig) -> Self {
        Self::new(source)
            .with_policy(config.policy)
            .with_max_rounds(config.max_rounds)
    }

    /// Set the reroll policy.
    pub fn with_policy(mut self, policy: RerollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the round cap (at least one round).
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds.max(1);
        self
    }

    /// Register an observer notified of every die rolled.
    pub fn with_observer(mut self, observer: Box<dyn RollObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Roll one die per config, in order.
    pub fn resolve_round(&mut self, configs: &[DieConfig]) -> Round {
        let dice = configs
            .iter()
            .map(|config| {
                let value = clamp_pips(i64::from(self.source.roll_d6()));
                for observer in &mut self.observers {
                    observer.on_roll(config, value);
                }
                DieResult {
                    config: *config,
                    value,
                    face: face_for(config, i64::from(value)),
                }
            })
            .collect();
        Round { dice }
    }

    /// Roll a pool and follow its rerolls as far as the policy allows.
    ///
    /// An empty pool finishes immediately with a single empty round.
    pub fn resolve_pool(&mut self, configs: &[DieConfig], bonuses: Bonuses) -> PoolStep {
        let first = self.resolve_round(configs);
        self.log_round(0, &first);
        self.drive(vec![first], bonuses)
    }

    /// Reroll the pending dice of a paused pool.
    pub fn continue_pool(&mut self, pending: PendingPool) -> PoolStep {
        let PendingPool { mut rounds, bonuses } = pending;
        let next = rounds.last().map(next_round_configs).unwrap_or_default();
        if next.is_empty() || !self.below_cap(&rounds) {
            return PoolStep::Finished(finalize(rounds, bonuses));
        }
        self.push_round(&mut rounds, &next);
        self.drive(rounds, bonuses)
    }

    fn drive(&mut self, mut rounds: Vec<Round>, bonuses: Bonuses) -> PoolStep {
        loop {
            let next = rounds.last().map(next_round_configs).unwrap_or_default();
            if next.is_empty() || !self.below_cap(&rounds) {
                return PoolStep::Finished(finalize(rounds, bonuses));
            }
            if self.policy == RerollPolicy::Confirmed {
                return PoolStep::Awaiting(PendingPool { rounds, bonuses });
            }
            self.push_round(&mut rounds, &next);
        }
    }

    fn push_round(&mut self, rounds: &mut Vec<Round>, configs: &[DieConfig]) {
        let round = self.resolve_round(configs);
        self.log_round(rounds.len(), &round);
        rounds.push(round);
    }

    fn below_cap(&self, rounds: &[Round]) -> bool {
        if rounds.len() < self.max_rounds {
            return true;
        }
        warn!(
            max_rounds = self.max_rounds,
            "round cap reached, finishing pool with rerolls outstanding"
        );
        false
    }

    fn log_round(&self, index: usize, round: &Round) {
        debug!(
            round = index,
            dice = round.count(),
            rerolls = round.count_face(Face::Reroll),
            faces = %round,
            "resolved round"
        );
    }
}
