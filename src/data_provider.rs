/// Trait for providing football data, abstracting over the HTTP client and mock implementations
use async_trait::async_trait;

use crate::error::FootballResult;
use crate::types::{Game, StandingRow};

/// Implemented by both the real [`crate::client::Client`] and `MockClient`
///
/// No method retries; failures are surfaced to the caller as-is.
#[async_trait]
pub trait FootballDataProvider: Send + Sync {
    /// League table for a competition
    async fn fetch_standings(&self, competition_id: u32) -> FootballResult<Vec<StandingRow>>;

    /// Upcoming games for a competition, unfiltered
    async fn fetch_fixtures(&self, competition_id: u32) -> FootballResult<Vec<Game>>;

    /// Finished games for a competition, unfiltered
    async fn fetch_results(&self, competition_id: u32) -> FootballResult<Vec<Game>>;

    /// Upcoming games for one team across all its competitions
    async fn fetch_team_fixtures(&self, team_id: u32) -> FootballResult<Vec<Game>>;

    /// Finished games for one team across all its competitions
    async fn fetch_team_results(&self, team_id: u32) -> FootballResult<Vec<Game>>;
}
