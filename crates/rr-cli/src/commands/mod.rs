pub mod faces;
pub mod roll;

use colored::Colorize;

use rr_engine::{RollConfig, Tray};

/// Parse tray tokens and print any warnings to stderr.
fn parse_tray(tokens: &[String], config: &RollConfig) -> Result<Tray, String> {
    let input = tokens.join(" ");
    let tray = rr_engine::tray::parse(&input, config).map_err(|e| e.to_string())?;
    print_warnings(&tray.warnings);
    Ok(tray)
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("  {} {warning}", "warning:".yellow().bold());
    }
}
