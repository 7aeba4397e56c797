use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use chrono::Local;
use tracing::{debug, warn};

use super::action::Action;
use crate::cache::CacheKey;
use crate::data_provider::FootballDataProvider;
use crate::types::{Content, View};

/// One content fetch for a cache slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub key: CacheKey,
    pub competition_id: u32,
}

impl FetchRequest {
    pub fn view(&self) -> View {
        self.key.view
    }
}

/// Side effects returned by the reducer
pub enum Effect {
    None,
    /// Turned into an [`Effect::Async`] by [`DataEffects::fetch`]
    Fetch(FetchRequest),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    Quit,
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Fetch(request) => f.debug_tuple("Fetch").field(request).finish(),
            Effect::Async(_) => write!(f, "Async(..)"),
            Effect::Quit => write!(f, "Quit"),
        }
    }
}

/// Effect handler for data fetching operations
///
/// Each fetch resolves to an [`Action::ContentLoaded`] carrying the cache key
/// it was issued for, so late results can be told apart from current ones.
pub struct DataEffects {
    client: Arc<dyn FootballDataProvider>,
    window_days: u32,
}

impl DataEffects {
    pub fn new(client: Arc<dyn FootballDataProvider>, window_days: u32) -> Self {
        Self {
            client,
            window_days,
        }
    }

    pub fn fetch(&self, request: FetchRequest) -> Effect {
        let client = self.client.clone();
        let days = self.window_days;
        debug!("EFFECT: fetching {} (competition id {})", request.key, request.competition_id);

        Effect::Async(Box::pin(async move {
            let id = request.competition_id;
            let result = match request.view() {
                View::Table => client.fetch_standings(id).await.map(Content::Standings),
                View::Fixtures => client
                    .fetch_fixtures(id)
                    .await
                    .map(|games| Content::fixtures(games, Local::now(), days)),
                View::Results => client
                    .fetch_results(id)
                    .await
                    .map(|games| Content::results(games, Local::now(), days)),
            };

            if let Err(e) = &result {
                warn!("EFFECT: fetch for {} failed: {}", request.key, e);
            }
            Action::ContentLoaded {
                key: request.key,
                result: result.map_err(|e| e.to_string()),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev::mock_client::MockClient;

    fn request(view: View) -> FetchRequest {
        FetchRequest {
            key: CacheKey::new("EPL", view),
            competition_id: 7,
        }
    }

    async fn run(effect: Effect) -> Action {
        match effect {
            Effect::Async(future) => future.await,
            other => panic!("expected async effect, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_each_view() {
        let client = Arc::new(MockClient::new());
        let effects = DataEffects::new(client.clone(), 7);

        for view in View::ALL {
            match run(effects.fetch(request(view))).await {
                Action::ContentLoaded { key, result } => {
                    assert_eq!(key, CacheKey::new("EPL", view));
                    assert_eq!(result.map(|c| c.view()), Ok(view));
                }
                other => panic!("unexpected action {:?}", other),
            }
        }
        assert_eq!(client.standings_calls(), 1);
        assert_eq!(client.fixtures_calls(), 1);
        assert_eq!(client.results_calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_error_becomes_message() {
        let client = Arc::new(MockClient::failing("connection refused"));
        let effects = DataEffects::new(client, 7);

        match run(effects.fetch(request(View::Table))).await {
            Action::ContentLoaded { result, .. } => {
                let message = result.unwrap_err();
                assert!(message.contains("connection refused"), "{}", message);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetched_games_are_windowed() {
        let client = Arc::new(MockClient::new());
        let effects = DataEffects::new(client, 2);

        match run(effects.fetch(request(View::Fixtures))).await {
            Action::ContentLoaded {
                result: Ok(Content::Fixtures { games, days, fetched_at }),
                ..
            } => {
                assert_eq!(days, 2);
                assert!(games.iter().all(|g| g.start_time >= fetched_at));
                assert!(games.windows(2).all(|w| w[0].start_time <= w[1].start_time));
            }
            other => panic!("unexpected action {:?}", other),
        }
    }
}
