//! Dice tray input: turning a typed command into a list of dice.
//!
//! Tokens are separated by whitespace and/or commas:
//! - a bare number sets the total die count (`5`)
//! - `a<n>` adds an advantage die with `n` plus faces (`a2`)
//! - `n<n>` adds a negative die with `n` minus faces (`n1`)
//!
//! Special dice count toward the total; the rest of the total is filled
//! with normal dice. Requests that cannot be rolled are rejected before any
//! die is touched, while recoverable slips (unknown tokens, counts outside
//! 1-4) only produce warnings.

use tracing::debug;

use crate::config::RollConfig;
use crate::dice::{DieConfig, DieKind, MAX_SPECIAL_FACES, MIN_SPECIAL_FACES};
use crate::error::{EngineError, EngineResult};

/// A parsed tray request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tray {
    /// The dice to roll: normal dice first, then special dice in input order.
    pub dice: Vec<DieConfig>,
    /// Problems that were corrected or skipped while parsing.
    pub warnings: Vec<String>,
}

/// Parse tray input into a pool of dice.
pub fn parse(input: &str, config: &RollConfig) -> EngineResult<Tray> {
    let mut total: Option<u32> = None;
    let mut specials = Vec::new();
    let mut warnings = Vec::new();

    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        if token.chars().all(|c| c.is_ascii_digit()) {
            // Counts too large for u32 are still "too many dice".
            let count = token.parse::<u32>().unwrap_or(u32::MAX);
            if total.is_some() {
                warnings.push(format!("ignoring extra die count '{token}'"));
            } else {
                total = Some(count);
            }
            continue;
        }

        match parse_special(token) {
            Some((kind, requested)) => {
                let clamped = requested.clamp(
                    i64::from(MIN_SPECIAL_FACES),
                    i64::from(MAX_SPECIAL_FACES),
                );
                if clamped != requested {
                    warnings.push(format!(
                        "'{token}': {kind} dice carry {MIN_SPECIAL_FACES}-{MAX_SPECIAL_FACES} special faces, using {clamped}"
                    ));
                }
                specials.push(DieConfig::new(kind, Some(clamped)));
            }
            None => warnings.push(format!("ignoring unknown token '{token}'")),
        }
    }

    for warning in &warnings {
        debug!(%warning, "tray input corrected");
    }

    let special_count = u32::try_from(specials.len()).unwrap_or(u32::MAX);

    let normal_count = match total {
        Some(total) => {
            if total > config.max_dice {
                return Err(EngineError::TooManyDice {
                    requested: total,
                    max: config.max_dice,
                });
            }
            if special_count > total {
                return Err(EngineError::TooManySpecials {
                    specials: special_count,
                    total,
                });
            }
            total - special_count
        }
        None if specials.is_empty() => config.default_dice,
        None => 0,
    };

    if special_count > config.max_dice {
        return Err(EngineError::TooManyDice {
            requested: special_count,
            max: config.max_dice,
        });
    }

    if normal_count + special_count == 0 {
        return Err(EngineError::NoDice);
    }

    let mut dice = vec![DieConfig::normal(); normal_count as usize];
    dice.extend(specials);

    Ok(Tray { dice, warnings })
}

/// Parse `a<n>` / `n<n>` into a kind and the unclamped count.
fn parse_special(token: &str) -> Option<(DieKind, i64)> {
    let lower = token.to_lowercase();
    let (kind, digits) = if let Some(rest) = lower.strip_prefix('a') {
        (DieKind::Advantage, rest)
    } else if let Some(rest) = lower.strip_prefix('n') {
        (DieKind::Negative, rest)
    } else {
        return None;
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    // Absurdly long digit strings still mean "too many".
    let count = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some((kind, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> RollConfig {
        RollConfig::default()
    }

    #[test]
    fn empty_input_rolls_default_pool() {
        let tray = parse("", &cfg()).unwrap();
        assert_eq!(tray.dice, vec![DieConfig::normal(); 5]);
        assert!(tray.warnings.is_empty());
    }

    #[test]
    fn total_only() {
        let tray = parse("3", &cfg()).unwrap();
        assert_eq!(tray.dice, vec![DieConfig::normal(); 3]);
    }

    #[test]
    fn total_with_specials() {
        let tray = parse("5 a2, n1", &cfg()).unwrap();
        assert_eq!(
            tray.dice,
            vec![
                DieConfig::normal(),
                DieConfig::normal(),
                DieConfig::normal(),
                DieConfig::advantage(2),
                DieConfig::negative(1),
            ]
        );
        assert!(tray.warnings.is_empty());
    }

    #[test]
    fn specials_without_total() {
        let tray = parse("A3,N2", &cfg()).unwrap();
        assert_eq!(
            tray.dice,
            vec![DieConfig::advantage(3), DieConfig::negative(2)]
        );
    }

    #[test]
    fn out_of_range_counts_clamp_with_warning() {
        let tray = parse("a7 n0", &cfg()).unwrap();
        assert_eq!(
            tray.dice,
            vec![DieConfig::advantage(4), DieConfig::negative(1)]
        );
        assert_eq!(tray.warnings.len(), 2);
        assert!(tray.warnings[0].contains("using 4"));
        assert!(tray.warnings[1].contains("using 1"));
    }

    #[test]
    fn unknown_tokens_warn() {
        let tray = parse("2 x3 a banana", &cfg()).unwrap();
        assert_eq!(tray.dice, vec![DieConfig::normal(); 2]);
        assert_eq!(tray.warnings.len(), 3);
        assert!(tray.warnings[0].contains("'x3'"));
    }

    #[test]
    fn extra_total_ignored() {
        let tray = parse("2 4", &cfg()).unwrap();
        assert_eq!(tray.dice.len(), 2);
        assert_eq!(tray.warnings.len(), 1);
    }

    #[test]
    fn fifty_dice_allowed() {
        let tray = parse("50", &cfg()).unwrap();
        assert_eq!(tray.dice.len(), 50);
    }

    #[test]
    fn fifty_one_dice_rejected() {
        let err = parse("51", &cfg()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::TooManyDice {
                requested: 51,
                max: 50
            }
        ));
    }

    #[test]
    fn huge_total_rejected() {
        let err = parse("99999999999", &cfg()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::TooManyDice {
                requested: u32::MAX,
                max: 50
            }
        ));
    }

    #[test]
    fn too_many_specials_rejected() {
        let err = parse("1 a1 a2", &cfg()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::TooManySpecials {
                specials: 2,
                total: 1
            }
        ));
    }

    #[test]
    fn too_many_specials_without_total_rejected() {
        let input = vec!["a1"; 51].join(" ");
        let err = parse(&input, &cfg()).unwrap_err();
        assert!(matches!(err, EngineError::TooManyDice { requested: 51, .. }));
    }

    #[test]
    fn zero_dice_rejected() {
        assert!(matches!(parse("0", &cfg()), Err(EngineError::NoDice)));
    }

    #[test]
    fn only_unknown_tokens_roll_default_pool() {
        let tray = parse("hello", &cfg()).unwrap();
        assert_eq!(tray.dice.len(), 5);
        assert_eq!(tray.warnings.len(), 1);
    }

    #[test]
    fn custom_limits() {
        let config = RollConfig::default().with_max_dice(10).with_default_dice(2);
        assert_eq!(parse("", &config).unwrap().dice.len(), 2);
        assert!(parse("11", &config).is_err());
    }

    #[test]
    fn huge_special_count_clamps() {
        let tray = parse("a99999999999999999999999", &cfg()).unwrap();
        assert_eq!(tray.dice, vec![DieConfig::advantage(4)]);
    }
}
