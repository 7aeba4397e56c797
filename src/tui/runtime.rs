use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::effects::{DataEffects, Effect};
use super::reducer::reduce;
use super::state::SessionState;

/// Session runtime - owns the state and runs effects
///
/// The Runtime is responsible for:
/// - Dispatching actions through the reducer
/// - Spawning fetch effects on the tokio runtime
/// - Feeding their results back as actions
pub struct Runtime {
    state: SessionState,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    data_effects: Arc<DataEffects>,
}

impl Runtime {
    pub fn new(initial_state: SessionState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            action_tx,
            action_rx,
            data_effects,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.quit
    }

    /// Run an action through the reducer and execute the resulting effect
    ///
    /// Uses mem::take to avoid cloning the session state.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);
        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;
        self.execute_effect(effect);
    }

    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Fetch(request) => {
                debug!("EFFECT: Executing fetch for {}", request.key);
                self.execute_effect(self.data_effects.fetch(request));
            }
            Effect::Async(future) => {
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    if tx.send(action).is_err() {
                        trace!("EFFECT: runtime gone, dropping result");
                    }
                });
            }
            Effect::Quit => debug!("ACTION: Quitting"),
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Wait for the next action produced by an effect
    pub async fn next_action(&mut self) -> Option<Action> {
        self.action_rx.recv().await
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheKey;
    use crate::dev::mock_client::MockClient;
    use crate::tui::testing::create_runtime;
    use crate::types::View;

    /// Deliver `n` effect results back into the runtime
    async fn settle(runtime: &mut Runtime, n: usize) {
        for _ in 0..n {
            let action = runtime.next_action().await.expect("action");
            runtime.dispatch(action);
        }
    }

    #[tokio::test]
    async fn test_repeated_visits_fetch_once() {
        let client = Arc::new(MockClient::new());
        let mut runtime = create_runtime(client.clone());

        runtime.dispatch(Action::ShowCurrent);
        settle(&mut runtime, 1).await;

        for _ in 0..5 {
            runtime.dispatch(Action::Right);
            runtime.dispatch(Action::Left);
            if runtime.state().is_pending(&CacheKey::new("La liga", View::Table)) {
                settle(&mut runtime, 1).await;
            }
        }

        assert_eq!(client.standings_calls(), 2);
        assert!(runtime.state().pending.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_fetches_exactly_once_more() {
        let client = Arc::new(MockClient::new());
        let mut runtime = create_runtime(client.clone());

        runtime.dispatch(Action::ShowCurrent);
        settle(&mut runtime, 1).await;
        assert_eq!(client.standings_calls(), 1);

        runtime.dispatch(Action::Refresh);
        settle(&mut runtime, 1).await;
        assert_eq!(client.standings_calls(), 2);

        // Only the new competition is fetched; EPL comes back from cache
        runtime.dispatch(Action::Right);
        runtime.dispatch(Action::Left);
        settle(&mut runtime, 1).await;
        assert_eq!(client.standings_calls(), 3);
        assert!(runtime.state().pending.is_empty());
    }

    #[tokio::test]
    async fn test_busy_key_waits_for_outstanding_result() {
        let client = Arc::new(MockClient::new());
        let mut runtime = create_runtime(client.clone());

        runtime.dispatch(Action::ShowCurrent);
        runtime.dispatch(Action::Right);
        runtime.dispatch(Action::Left);
        runtime.dispatch(Action::Refresh);
        settle(&mut runtime, 2).await;

        assert_eq!(client.standings_calls(), 2);
        assert!(runtime.state().cache.contains(&CacheKey::new("EPL", View::Table)));
        assert!(runtime.state().pending.is_empty());
    }

    #[tokio::test]
    async fn test_action_queue_processing() {
        let client = Arc::new(MockClient::new());
        let mut runtime = create_runtime(client);

        let tx = runtime.action_sender();
        tx.send(Action::ToggleHelp).unwrap();
        tx.send(Action::Right).unwrap();

        let count = runtime.process_actions();
        assert_eq!(count, 2);
        assert!(runtime.state().help_visible);
        assert_eq!(runtime.state().selection.competition, 1);
    }

    #[tokio::test]
    async fn test_quit() {
        let mut runtime = create_runtime(Arc::new(MockClient::new()));
        assert!(!runtime.should_quit());
        runtime.dispatch(Action::Quit);
        assert!(runtime.should_quit());
    }
}
