use anyhow::{bail, Result};
use chrono::Local;
use tracing::warn;

use crate::commands::games::format_game_listing;
use crate::data_provider::FootballDataProvider;
use crate::types::{Content, Game, View};

const HEADING: &str = "Favourites";

/// Games of every followed team, one request per team
///
/// A team whose request fails is logged and left out. A game between two
/// followed teams is listed once.
pub async fn collect_team_games(client: &dyn FootballDataProvider, team_ids: &[u32], view: View) -> Vec<Game> {
    let mut games: Vec<Game> = Vec::new();
    for &team_id in team_ids {
        let fetched = match view {
            View::Results => client.fetch_team_results(team_id).await,
            _ => client.fetch_team_fixtures(team_id).await,
        };
        match fetched {
            Ok(team_games) => {
                for game in team_games {
                    if !games.iter().any(|g| g.id == game.id && g.start_time == game.start_time) {
                        games.push(game);
                    }
                }
            }
            Err(e) => warn!("Failed to fetch {} for team {}: {}", view, team_id, e),
        }
    }
    games
}

pub async fn run(client: &dyn FootballDataProvider, team_ids: &[u32], results: bool, days: u32) -> Result<()> {
    if team_ids.is_empty() {
        bail!("No favourite teams configured; set favourite_teams = [<competitor id>, ...] in the config file");
    }

    let view = if results { View::Results } else { View::Fixtures };
    let games = collect_team_games(client, team_ids, view).await;
    let now = Local::now();
    let content = match view {
        View::Results => Content::results(games, now, days),
        _ => Content::fixtures(games, now, days),
    };
    print!("{}", format_game_listing(HEADING, &content));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;

    #[tokio::test]
    async fn test_failed_team_is_skipped() {
        let client = MockClient::new();
        // 1 is Arsenal, 2 is Aston Villa; 99 has no mock team
        let games = collect_team_games(&client, &[1, 99, 2], View::Fixtures).await;

        assert_eq!(client.team_calls(), 3);
        assert!(!games.is_empty());
        assert!(games
            .iter()
            .all(|g| [g.home_team.as_str(), g.away_team.as_str()].iter().any(|t| *t == "Arsenal" || *t == "Aston Villa")));
    }

    #[tokio::test]
    async fn test_shared_game_listed_once() {
        let client = MockClient::new();
        let arsenal = collect_team_games(&client, &[1], View::Fixtures).await;
        let both = collect_team_games(&client, &[1, 2], View::Fixtures).await;

        let shared = arsenal
            .iter()
            .find(|g| g.home_team == "Arsenal" && g.away_team == "Aston Villa")
            .expect("mock Arsenal v Aston Villa");
        assert_eq!(both.iter().filter(|g| g.id == shared.id).count(), 1);
    }

    #[tokio::test]
    async fn test_run_requires_teams() {
        let client = MockClient::new();
        let err = run(&client, &[], false, 7).await.unwrap_err();
        assert!(err.to_string().contains("favourite_teams"));
        assert_eq!(client.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_run_results_uses_team_endpoint() {
        let client = MockClient::new();
        run(&client, &[8], true, 7).await.unwrap();
        assert_eq!(client.team_calls(), 1);
        assert_eq!(client.results_calls(), 0);
    }

    #[test]
    fn test_listing_heading() {
        let output = format_game_listing(HEADING, &Content::fixtures(vec![], Local::now(), 7));
        assert!(output.contains("Favourites - Fixtures"));
        assert!(output.contains("No fixtures found for the next 7 days."));
    }
}
