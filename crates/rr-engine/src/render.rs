//! Plain-text chat summaries of resolved pools.

use std::fmt::Write;

use crate::dice::{DieResult, Round};
use crate::resolution::PoolOutcome;

/// Render a resolved pool as a chat message.
///
/// One line per round with a symbol and the raw value for every die
/// (special dice also show their tray token), followed by the counts and
/// totals.
pub fn summary(outcome: &PoolOutcome) -> String {
    let score = &outcome.score;
    let mut out = String::new();

    let rounds = outcome.rounds.len();
    let _ = writeln!(
        out,
        "Role&Roll: {} {} in {} {}",
        outcome.dice_rolled(),
        plural(outcome.dice_rolled(), "die", "dice"),
        rounds,
        plural(rounds, "round", "rounds"),
    );

    for (i, round) in outcome.rounds.iter().enumerate() {
        let _ = writeln!(out, "Round {}: {}", i + 1, round_line(round));
    }

    let _ = writeln!(
        out,
        "Points {} (rerolls {}) | plus {} | minus {}",
        score.base_points, score.reroll_count, score.plus_tokens, score.minus_tokens
    );
    let _ = writeln!(
        out,
        "Dice {} | bonus +{} | penalty -{}",
        score.dice_total, score.bonus_success, score.bonus_penalty
    );
    let _ = write!(out, "Total: {}", score.final_total);

    out
}

/// Render one round as a line of die symbols.
pub fn round_line(round: &Round) -> String {
    if round.is_empty() {
        return "(no dice)".to_string();
    }
    let parts: Vec<String> = round.dice.iter().map(die_cell).collect();
    parts.join(" ")
}

fn die_cell(die: &DieResult) -> String {
    if die.config.is_special() {
        format!("{}{}({})", die.face.symbol(), die.value, die.config)
    } else {
        format!("{}{}", die.face.symbol(), die.value)
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
