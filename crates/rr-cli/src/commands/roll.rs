use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rr_engine::render::{round_line, summary};
use rr_engine::{
    Bonuses, DieConfig, DieSource, EngineError, PendingPool, PoolOutcome, PoolResolver, PoolStep,
    RerollPolicy, RollConfig, RollObserver, ScriptedSource,
};

/// Options for `rr roll`.
pub struct RollArgs {
    pub tokens: Vec<String>,
    pub file: Option<PathBuf>,
    pub bonus: i64,
    pub penalty: i64,
    pub seed: Option<u64>,
    pub script: Vec<u8>,
    pub confirm: bool,
    pub max_rounds: usize,
    pub json: bool,
    pub verbose: bool,
}

/// Prints every die to stderr as it lands.
struct EchoObserver;

impl RollObserver for EchoObserver {
    fn on_roll(&mut self, config: &DieConfig, value: u8) {
        eprintln!("  {} {config} → {value}", "rolled".dimmed());
    }
}

pub fn run(args: &RollArgs) -> Result<(), String> {
    let mut config = RollConfig::default().with_max_rounds(args.max_rounds);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.confirm {
        config = config.with_policy(RerollPolicy::Confirmed);
    }

    let dice = load_dice(args, &config)?;
    let bonuses = Bonuses::new(args.bonus, args.penalty);

    let outcome = if args.script.is_empty() {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        resolve(PoolResolver::from_config(rng, &config), &dice, bonuses, args.verbose)?
    } else {
        let source = ScriptedSource::new(args.script.iter().copied());
        resolve(
            PoolResolver::from_config(source, &config),
            &dice,
            bonuses,
            args.verbose,
        )?
    };

    if args.json {
        let json = serde_json::to_string_pretty(&outcome)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{json}");
    } else {
        print_summary(&outcome);
    }

    Ok(())
}

fn load_dice(args: &RollArgs, config: &RollConfig) -> Result<Vec<DieConfig>, String> {
    let Some(path) = &args.file else {
        return Ok(super::parse_tray(&args.tokens, config)?.dice);
    };

    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let dice = DieConfig::list_from_json(&text).map_err(|e| e.to_string())?;
    if dice.is_empty() {
        return Err(EngineError::NoDice.to_string());
    }

    let requested = u32::try_from(dice.len()).unwrap_or(u32::MAX);
    if requested > config.max_dice {
        return Err(EngineError::TooManyDice {
            requested,
            max: config.max_dice,
        }
        .to_string());
    }
    Ok(dice)
}

fn resolve<S: DieSource>(
    resolver: PoolResolver<S>,
    dice: &[DieConfig],
    bonuses: Bonuses,
    verbose: bool,
) -> Result<PoolOutcome, String> {
    let mut resolver = if verbose {
        resolver.with_observer(Box::new(EchoObserver))
    } else {
        resolver
    };

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let mut step = resolver.resolve_pool(dice, bonuses);
    loop {
        match step {
            PoolStep::Finished(outcome) => return Ok(outcome),
            PoolStep::Awaiting(pending) => {
                if confirm_reroll(&pending, &mut reader)? {
                    step = resolver.continue_pool(pending);
                } else {
                    return Ok(pending.finish());
                }
            }
        }
    }
}

/// Show the rounds so far and ask whether to roll the pending rerolls.
///
/// Anything but an explicit yes (including EOF) finishes the pool.
fn confirm_reroll(pending: &PendingPool, reader: &mut impl BufRead) -> Result<bool, String> {
    let rounds = pending.rounds();
    if let Some(last) = rounds.last() {
        eprintln!("  Round {}: {}", rounds.len(), round_line(last));
    }
    eprint!("  Reroll {} dice? [y/N] ", pending.pending_rerolls().len());
    io::stderr().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        eprintln!();
        return Ok(false);
    }
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn print_summary(outcome: &PoolOutcome) {
    let text = summary(outcome);
    let lines: Vec<&str> = text.lines().collect();
    let Some((total, body)) = lines.split_last() else {
        return;
    };

    for (i, line) in body.iter().enumerate() {
        if i == 0 {
            println!("  {}", line.bold());
        } else {
            println!("  {line}");
        }
    }
    println!("  {}", total.green().bold());
}
