/// HTTP client for the 365scores web API
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::data_provider::FootballDataProvider;
use crate::error::{FootballError, FootballResult};
use crate::types::{Game, StandingRow};

const FIXTURES_PATH: &str = "/games/fixtures/";
const RESULTS_PATH: &str = "/games/results/";
const STANDINGS_PATH: &str = "/standings/";

pub struct Client {
    http: reqwest::Client,
    base_url: String,
    timezone: String,
}

impl Client {
    pub fn new(base_url: &str, timezone: &str, timeout: Duration) -> FootballResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| FootballError::Transport {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timezone: timezone.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> FootballResult<Self> {
        Self::new(
            &config.api_base_url,
            &config.timezone,
            Duration::from_secs(config.request_timeout),
        )
    }

    /// GET `path` filtered by `scope`, either `competitions` or `competitors`
    async fn get<T>(&self, path: &str, scope: (&str, u32), what: &'static str) -> FootballResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{}", self.base_url, path);
        let (filter, id) = scope;
        let id = id.to_string();
        debug!("HTTP: GET {} {}={}", url, filter, id);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("timezoneName", self.timezone.as_str()),
                (filter, id.as_str()),
            ])
            .send()
            .await
            .map_err(|source| FootballError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FootballError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| FootballError::Decode { what, source })
    }
}

#[async_trait]
impl FootballDataProvider for Client {
    async fn fetch_standings(&self, competition_id: u32) -> FootballResult<Vec<StandingRow>> {
        let body: StandingsResponse = self
            .get(STANDINGS_PATH, ("competitions", competition_id), "standings")
            .await?;
        Ok(body.into_rows())
    }

    async fn fetch_fixtures(&self, competition_id: u32) -> FootballResult<Vec<Game>> {
        let body: GamesResponse = self
            .get(FIXTURES_PATH, ("competitions", competition_id), "fixtures")
            .await?;
        Ok(body.into_games())
    }

    async fn fetch_results(&self, competition_id: u32) -> FootballResult<Vec<Game>> {
        let body: GamesResponse = self
            .get(RESULTS_PATH, ("competitions", competition_id), "results")
            .await?;
        Ok(body.into_games())
    }

    async fn fetch_team_fixtures(&self, team_id: u32) -> FootballResult<Vec<Game>> {
        let body: GamesResponse = self
            .get(FIXTURES_PATH, ("competitors", team_id), "team fixtures")
            .await?;
        Ok(body.into_games())
    }

    async fn fetch_team_results(&self, team_id: u32) -> FootballResult<Vec<Game>> {
        let body: GamesResponse = self
            .get(RESULTS_PATH, ("competitors", team_id), "team results")
            .await?;
        Ok(body.into_games())
    }
}

// Wire format. Missing arrays decode as empty.

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GamesResponse {
    #[serde(default)]
    games: Vec<WireGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireGame {
    #[serde(default)]
    id: i64,
    start_time: Option<String>,
    home_competitor: Option<WireCompetitor>,
    away_competitor: Option<WireCompetitor>,
    game_time_display: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireCompetitor {
    name: Option<String>,
    score: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StandingsResponse {
    #[serde(default)]
    standings: Vec<WireStandingsTable>,
}

#[derive(Debug, Deserialize)]
struct WireStandingsTable {
    #[serde(default)]
    rows: Vec<WireStandingRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireStandingRow {
    #[serde(default)]
    position: u32,
    competitor: Option<WireCompetitor>,
    #[serde(default)]
    game_played: u32,
    #[serde(default)]
    games_won: u32,
    #[serde(default)]
    games_even: u32,
    #[serde(default)]
    games_lost: u32,
    #[serde(default)]
    points: f64,
}

/// Scores below zero mean "not played yet"
fn score(competitor: Option<&WireCompetitor>) -> Option<u32> {
    competitor
        .and_then(|c| c.score)
        .filter(|s| *s >= 0.0)
        .map(|s| s as u32)
}

fn team_name(competitor: Option<&WireCompetitor>, fallback: &str) -> String {
    competitor
        .and_then(|c| c.name.clone())
        .unwrap_or_else(|| fallback.to_string())
}

impl GamesResponse {
    pub(crate) fn into_games(self) -> Vec<Game> {
        self.games
            .into_iter()
            .filter_map(|g| {
                let Some(raw_time) = g.start_time.as_deref() else {
                    warn!("Skipping game {} without a start time", g.id);
                    return None;
                };
                let start_time = match DateTime::parse_from_rfc3339(raw_time) {
                    Ok(t) => t.with_timezone(&Local),
                    Err(e) => {
                        warn!("Skipping game {} with bad start time {:?}: {}", g.id, raw_time, e);
                        return None;
                    }
                };
                Some(Game {
                    id: g.id,
                    start_time,
                    home_team: team_name(g.home_competitor.as_ref(), "TBD"),
                    away_team: team_name(g.away_competitor.as_ref(), "TBD"),
                    home_score: score(g.home_competitor.as_ref()),
                    away_score: score(g.away_competitor.as_ref()),
                    display_time: g.game_time_display,
                })
            })
            .collect()
    }
}

impl StandingsResponse {
    pub(crate) fn into_rows(self) -> Vec<StandingRow> {
        self.standings
            .into_iter()
            .next()
            .map(|table| table.rows)
            .unwrap_or_default()
            .into_iter()
            .map(|row| StandingRow {
                position: row.position,
                team_name: team_name(row.competitor.as_ref(), "Unknown"),
                played: row.game_played,
                won: row.games_won,
                drawn: row.games_even,
                lost: row.games_lost,
                points: row.points as i32,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_games_response() {
        let json = r#"{
            "games": [
                {
                    "id": 4101,
                    "startTime": "2024-08-17T14:00:00+00:00",
                    "homeCompetitor": { "name": "Arsenal", "score": 2.0 },
                    "awayCompetitor": { "name": "Wolves", "score": 0.0 },
                    "gameTimeDisplay": "FT"
                },
                {
                    "id": 4102,
                    "startTime": "2024-08-24T11:30:00+00:00",
                    "homeCompetitor": { "name": "Brighton", "score": -1.0 },
                    "awayCompetitor": { "score": -1.0 }
                }
            ]
        }"#;

        let body: GamesResponse = serde_json::from_str(json).unwrap();
        let games = body.into_games();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].home_team, "Arsenal");
        assert_eq!(games[0].home_score, Some(2));
        assert_eq!(games[0].away_score, Some(0));
        assert_eq!(games[0].display_time.as_deref(), Some("FT"));
        assert_eq!(games[1].away_team, "TBD");
        assert_eq!(games[1].home_score, None);
    }

    #[test]
    fn test_parse_games_skips_bad_start_time() {
        let json = r#"{ "games": [ { "id": 1, "startTime": "not a date" } ] }"#;
        let body: GamesResponse = serde_json::from_str(json).unwrap();
        assert!(body.into_games().is_empty());
    }

    #[test]
    fn test_parse_games_keeps_valid_records_beside_incomplete_ones() {
        let json = r#"{
            "games": [
                { "id": 1, "startTime": "2024-08-17T14:00:00+00:00",
                  "homeCompetitor": { "name": "Arsenal" }, "awayCompetitor": { "name": "Wolves" } },
                { "startTime": "2024-08-18T16:30:00+00:00", "homeCompetitor": { "name": "Chelsea" } },
                { "id": 3, "homeCompetitor": { "name": "Everton" } }
            ]
        }"#;

        let body: GamesResponse = serde_json::from_str(json).unwrap();
        let games = body.into_games();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].id, 1);
        assert_eq!(games[0].home_team, "Arsenal");
        assert_eq!(games[1].id, 0);
        assert_eq!(games[1].home_team, "Chelsea");
        assert_eq!(games[1].away_team, "TBD");
    }

    #[test]
    fn test_parse_missing_games_array() {
        let body: GamesResponse = serde_json::from_str("{}").unwrap();
        assert!(body.into_games().is_empty());
    }

    #[test]
    fn test_parse_standings_response() {
        let json = r#"{
            "standings": [
                {
                    "rows": [
                        {
                            "position": 1,
                            "competitor": { "name": "Liverpool" },
                            "gamePlayed": 10, "gamesWon": 8, "gamesEven": 1, "gamesLost": 1,
                            "points": 25.0
                        },
                        { "position": 2 }
                    ]
                }
            ]
        }"#;

        let body: StandingsResponse = serde_json::from_str(json).unwrap();
        let rows = body.into_rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].team_name, "Liverpool");
        assert_eq!(rows[0].drawn, 1);
        assert_eq!(rows[0].points, 25);
        assert_eq!(rows[1].team_name, "Unknown");
        assert_eq!(rows[1].played, 0);
    }

    #[test]
    fn test_parse_empty_standings() {
        let body: StandingsResponse = serde_json::from_str(r#"{ "standings": [] }"#).unwrap();
        assert!(body.into_rows().is_empty());
    }

    #[test]
    fn test_client_trims_base_url() {
        let client = Client::new("https://example.test/web/", "UTC", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url, "https://example.test/web");
    }
}
