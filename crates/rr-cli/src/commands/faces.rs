use comfy_table::{ContentArrangement, Table};

use rr_engine::{DieConfig, RollConfig, layout};

pub fn run(tokens: &[String]) -> Result<(), String> {
    let mut dice: Vec<DieConfig> = Vec::new();

    let mut warnings = Vec::new();
    let mut normals = Vec::new();
    let mut rest = Vec::new();
    for token in tokens.iter().flat_map(|t| t.split(',')).filter(|t| !t.is_empty()) {
        if token.chars().all(|c| c.is_ascii_digit()) {
            warnings.push(format!("ignoring die count '{token}'"));
        } else if token.eq_ignore_ascii_case("d6") || token.eq_ignore_ascii_case("normal") {
            normals.push(token.to_string());
        } else {
            rest.push(token.to_string());
        }
    }
    super::print_warnings(&warnings);

    if !normals.is_empty() || rest.is_empty() {
        dice.push(DieConfig::normal());
    }
    if !rest.is_empty() {
        let tray = super::parse_tray(&rest, &RollConfig::default())?;
        dice.extend(tray.dice);
    }

    let mut unique: Vec<DieConfig> = Vec::new();
    for die in dice {
        if !unique.contains(&die) {
            unique.push(die);
        }
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Die", "Kind", "1", "2", "3", "4", "5", "6"]);

    for die in &unique {
        let mut row = vec![die.to_string(), die.kind().to_string()];
        row.extend(
            layout(die)
                .faces()
                .iter()
                .map(|face| format!("{} {face}", face.symbol())),
        );
        table.add_row(row);
    }

    println!("{table}");
    Ok(())
}
