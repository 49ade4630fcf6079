//! Per-die results and rounds.

use serde::{Deserialize, Serialize};

use super::{DieConfig, Face};

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The configuration the die was rolled with.
    pub config: DieConfig,
    /// The value rolled (1-6).
    pub value: u8,
    /// The face that value maps to.
    pub face: Face,
}

/// One batch of dice rolled together.
///
/// The first round holds the whole pool; later rounds hold only the dice
/// that showed a reroll face in the round before.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Round {
    /// Individual die results, in roll order.
    pub dice: Vec<DieResult>,
}

impl Round {
    /// Number of dice in the round.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if no dice were rolled.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// The faces in roll order.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.dice.iter().map(|d| d.face)
    }

    /// How many dice show the given face.
    pub fn count_face(&self, face: Face) -> usize {
        self.faces().filter(|f| *f == face).count()
    }

    /// Returns true if any die shows a reroll face.
    pub fn has_rerolls(&self) -> bool {
        self.faces().any(|f| f == Face::Reroll)
    }

    /// Configs of the dice to roll in the next round, in roll order.
    ///
    /// A rerolled die keeps the configuration of the die that triggered it.
    pub fn reroll_configs(&self) -> Vec<DieConfig> {
        self.dice
            .iter()
            .filter(|d| d.face == Face::Reroll)
            .map(|d| d.config)
            .collect()
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .dice
            .iter()
            .map(|d| format!("{}{}", d.face.symbol(), d.value))
            .collect();
        write!(f, "[{}]", parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::face_for;

    fn make_round(dice: &[(DieConfig, u8)]) -> Round {
        Round {
            dice: dice
                .iter()
                .map(|&(config, value)| DieResult {
                    config,
                    value,
                    face: face_for(&config, i64::from(value)),
                })
                .collect(),
        }
    }

    #[test]
    fn empty_round() {
        let r = Round::default();
        assert_eq!(r.count(), 0);
        assert!(r.is_empty());
        assert!(!r.has_rerolls());
        assert!(r.reroll_configs().is_empty());
    }

    #[test]
    fn count_faces() {
        let n = DieConfig::normal();
        let r = make_round(&[(n, 1), (n, 6), (n, 6), (n, 3), (n, 2)]);
        assert_eq!(r.count_face(Face::Point), 1);
        assert_eq!(r.count_face(Face::Reroll), 2);
        assert_eq!(r.count_face(Face::Blank), 2);
        assert!(r.has_rerolls());
    }

    #[test]
    fn reroll_configs_keep_kind_and_order() {
        let adv = DieConfig::advantage(3);
        let neg = DieConfig::negative(2);
        let r = make_round(&[
            (DieConfig::normal(), 2),
            (adv, 6),
            (neg, 6),
            (DieConfig::normal(), 1),
        ]);
        assert_eq!(r.reroll_configs(), vec![adv, neg]);
    }

    #[test]
    fn display() {
        let n = DieConfig::normal();
        let r = make_round(&[(n, 1), (n, 6), (n, 4)]);
        assert_eq!(r.to_string(), "[●1 ⟳6 ○4]");
    }
}
