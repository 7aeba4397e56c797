use anyhow::{Context, Result};

use crate::commands::resolve_competition;
use crate::competitions::Competition;
use crate::data_provider::FootballDataProvider;
use crate::formatting::{format_header, no_standings_message, standings_header, standings_row};
use crate::types::StandingRow;

pub fn format_table(competition: &Competition, rows: &[StandingRow]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}", format_header(competition.display_name, true)));
    output.push('\n');

    if rows.is_empty() {
        output.push_str(&format!("{}\n", no_standings_message()));
        return output;
    }

    let header = standings_header();
    output.push_str(&format!("{}\n", header));
    output.push_str(&format!("{}\n", "─".repeat(header.chars().count())));
    for row in rows {
        output.push_str(&format!("{}\n", standings_row(row)));
    }
    output
}

pub async fn run(client: &dyn FootballDataProvider, competition: &str) -> Result<()> {
    let competition = resolve_competition(competition)?;
    let rows = client
        .fetch_standings(competition.id)
        .await
        .with_context(|| format!("Failed to fetch standings for {}", competition.name))?;

    print!("{}", format_table(competition, &rows));
    Ok(())
}
