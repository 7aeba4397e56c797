/// Mock football data client for development and testing
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Local;
use tracing::info;

use crate::data_provider::FootballDataProvider;
use crate::error::{FootballError, FootballResult};
use crate::fixtures;
use crate::types::{Game, StandingRow};

/// Mock client that returns fixture data instead of making real API calls
///
/// Counts calls per endpoint and can be told to fail every request.
#[derive(Default)]
pub struct MockClient {
    standings_calls: AtomicUsize,
    fixtures_calls: AtomicUsize,
    results_calls: AtomicUsize,
    team_calls: AtomicUsize,
    failure: Mutex<Option<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self::default()
    }

    /// A client whose every request fails with `message`
    pub fn failing(message: &str) -> Self {
        let client = Self::new();
        client.set_failure(Some(message));
        client
    }

    pub fn set_failure(&self, message: Option<&str>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = message.map(str::to_string);
        }
    }

    pub fn standings_calls(&self) -> usize {
        self.standings_calls.load(Ordering::SeqCst)
    }

    pub fn fixtures_calls(&self) -> usize {
        self.fixtures_calls.load(Ordering::SeqCst)
    }

    pub fn results_calls(&self) -> usize {
        self.results_calls.load(Ordering::SeqCst)
    }

    pub fn team_calls(&self) -> usize {
        self.team_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.standings_calls() + self.fixtures_calls() + self.results_calls() + self.team_calls()
    }

    /// EPL games involving the team, or an error for ids without a mock team
    fn team_games(&self, team_id: u32, games: Vec<Game>) -> FootballResult<Vec<Game>> {
        self.team_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        let team = fixtures::mock_team_name(team_id).ok_or_else(|| FootballError::Api {
            message: format!("unknown competitor {}", team_id),
        })?;
        info!("MockClient: Returning mock games for {}", team);
        Ok(games
            .into_iter()
            .filter(|g| g.home_team == team || g.away_team == team)
            .collect())
    }

    fn check_failure(&self) -> FootballResult<()> {
        match self.failure.lock().ok().and_then(|f| f.clone()) {
            Some(message) => Err(FootballError::Api { message }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FootballDataProvider for MockClient {
    async fn fetch_standings(&self, competition_id: u32) -> FootballResult<Vec<StandingRow>> {
        self.standings_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        info!("MockClient: Returning mock standings for {}", competition_id);
        Ok(fixtures::create_mock_standings(competition_id))
    }

    async fn fetch_fixtures(&self, competition_id: u32) -> FootballResult<Vec<Game>> {
        self.fixtures_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        info!("MockClient: Returning mock fixtures for {}", competition_id);
        Ok(fixtures::create_mock_fixtures(competition_id, Local::now()))
    }

    async fn fetch_results(&self, competition_id: u32) -> FootballResult<Vec<Game>> {
        self.results_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        info!("MockClient: Returning mock results for {}", competition_id);
        Ok(fixtures::create_mock_results(competition_id, Local::now()))
    }

    async fn fetch_team_fixtures(&self, team_id: u32) -> FootballResult<Vec<Game>> {
        self.team_games(team_id, fixtures::create_mock_fixtures(7, Local::now()))
    }

    async fn fetch_team_results(&self, team_id: u32) -> FootballResult<Vec<Game>> {
        self.team_games(team_id, fixtures::create_mock_results(7, Local::now()))
    }
}
