//! Pool scoring.
//!
//! Point and reroll faces are each worth one base point. Plus and minus
//! tokens adjust the dice total, but only when at least one base point was
//! rolled: a pool without points scores zero no matter how many plus tokens
//! it shows. External bonuses are applied last and the total never drops
//! below zero.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dice::{Face, coerce_number};

/// Successes and penalties granted outside the dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bonuses {
    /// Extra successes added to the dice total.
    pub success: u32,
    /// Penalties subtracted from the dice total.
    pub penalty: u32,
}

impl Bonuses {
    /// Build bonuses, clamping negative inputs to zero.
    pub fn new(success: i64, penalty: i64) -> Self {
        Self {
            success: clamp_bonus(success),
            penalty: clamp_bonus(penalty),
        }
    }

    /// Build bonuses from loosely typed host values. Non-numeric values count as 0.
    pub fn from_values(success: &Value, penalty: &Value) -> Self {
        Self::new(
            coerce_number(success).unwrap_or(0),
            coerce_number(penalty).unwrap_or(0),
        )
    }
}

fn clamp_bonus(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// The aggregate score of a resolved pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolScore {
    /// Point and reroll faces across all rounds.
    pub base_points: u32,
    /// Plus faces across all rounds.
    pub plus_tokens: u32,
    /// Minus faces across all rounds.
    pub minus_tokens: u32,
    /// Reroll faces across all rounds.
    pub reroll_count: u32,
    /// Score from the dice alone.
    pub dice_total: u32,
    /// Bonus successes that were applied.
    pub bonus_success: u32,
    /// Bonus penalties that were applied.
    pub bonus_penalty: u32,
    /// Dice total with bonuses applied, never below zero.
    pub final_total: u32,
}

/// Score every face seen across all rounds of a pool.
pub fn score_faces(faces: impl IntoIterator<Item = Face>, bonuses: Bonuses) -> PoolScore {
    let mut score = PoolScore {
        bonus_success: bonuses.success,
        bonus_penalty: bonuses.penalty,
        ..PoolScore::default()
    };

    for face in faces {
        match face {
            Face::Point => score.base_points += 1,
            Face::Reroll => {
                score.base_points += 1;
                score.reroll_count += 1;
            }
            Face::Plus => score.plus_tokens += 1,
            Face::Minus => score.minus_tokens += 1,
            Face::Blank => {}
        }
    }

    score.dice_total = if score.base_points == 0 {
        0
    } else {
        non_negative(
            i64::from(score.base_points) + i64::from(score.plus_tokens)
                - i64::from(score.minus_tokens),
        )
    };

    score.final_total = non_negative(
        i64::from(score.dice_total) + i64::from(bonuses.success) - i64::from(bonuses.penalty),
    );

    score
}

fn non_negative(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}
