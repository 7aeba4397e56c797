use anyhow::{Context, Result};
use chrono::Local;

use crate::commands::resolve_competition;
use crate::competitions::Competition;
use crate::data_provider::FootballDataProvider;
use crate::formatting::{
    fixture_line, format_header, group_by_date, no_fixtures_message, no_results_message,
    result_line,
};
use crate::types::Content;

/// Plain-text listing of fixtures or results, grouped by day
pub fn format_games(competition: &Competition, content: &Content) -> String {
    format_game_listing(competition.display_name, content)
}

/// Same listing under an arbitrary heading
pub fn format_game_listing(heading: &str, content: &Content) -> String {
    let (games, fetched_at, title, empty) = match content {
        Content::Fixtures { games, days, fetched_at } => {
            (games, fetched_at, "Fixtures", no_fixtures_message(*days))
        }
        Content::Results { games, days, fetched_at } => {
            (games, fetched_at, "Results", no_results_message(*days))
        }
        Content::Standings(_) => return String::new(),
    };

    let mut output = String::new();
    let title = format!("{} - {}", heading, title);
    output.push_str(&format!("\n{}\n", format_header(&title, true)));

    if games.is_empty() {
        output.push_str(&format!("{}\n", empty));
        return output;
    }

    for (label, group) in group_by_date(games, fetched_at) {
        output.push_str(&format_header(&label, false));
        for game in group {
            let line = match content {
                Content::Fixtures { .. } => fixture_line(game, fetched_at),
                _ => result_line(game),
            };
            output.push_str(&format!("{}\n", line));
        }
        output.push('\n');
    }
    output
}

pub async fn run_fixtures(client: &dyn FootballDataProvider, competition: &str, days: u32) -> Result<()> {
    let competition = resolve_competition(competition)?;
    let games = client
        .fetch_fixtures(competition.id)
        .await
        .with_context(|| format!("Failed to fetch fixtures for {}", competition.name))?;

    let content = Content::fixtures(games, Local::now(), days);
    print!("{}", format_games(competition, &content));
    Ok(())
}

pub async fn run_results(client: &dyn FootballDataProvider, competition: &str, days: u32) -> Result<()> {
    let competition = resolve_competition(competition)?;
    let games = client
        .fetch_results(competition.id)
        .await
        .with_context(|| format!("Failed to fetch results for {}", competition.name))?;

    let content = Content::results(games, Local::now(), days);
    print!("{}", format_games(competition, &content));
    Ok(())
}
