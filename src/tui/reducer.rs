use tracing::{debug, warn};

use super::action::Action;
use super::effects::{Effect, FetchRequest};
use super::navigation::Change;
use super::renderer::{render, Payload};
use super::state::SessionState;
use crate::cache::{CacheEntry, CacheKey};
use crate::error::FootballError;
use crate::types::Content;

/// Pure state reducer - like Redux reducer
///
/// Takes the current state and an action, returns the new state and the
/// effect to run. No I/O happens here; fetches are requested through
/// [`Effect::Fetch`].
pub fn reduce(state: SessionState, action: Action) -> (SessionState, Effect) {
    let mut state = state;
    match action {
        Action::ToggleHelp => {
            state.help_visible = !state.help_visible;
            (state, Effect::None)
        }
        Action::DismissHelp => {
            state.help_visible = false;
            (state, Effect::None)
        }
        Action::Redraw => (state, Effect::None),
        Action::ShowCurrent => show_selection(state),
        Action::ContentLoaded { key, result } => content_loaded(state, key, result),
        navigation => {
            let transition = state.selection.apply(&navigation, state.competition_count);
            state.selection = transition.selection;
            match transition.change {
                Change::None => (state, Effect::None),
                Change::Focus => refocus(state),
                Change::Selection => show_selection(state),
                Change::Refresh => refresh(state),
                Change::Quit => {
                    state.quit = true;
                    (state, Effect::Quit)
                }
            }
        }
    }
}

/// Re-style the frame on screen for the new focus; nothing is fetched or formatted
fn refocus(mut state: SessionState) -> (SessionState, Effect) {
    match state.screen.take() {
        Some(screen) => {
            state.screen = Some(screen.rehighlight(state.selection, &state.theme));
            (state, Effect::None)
        }
        None => show_selection(state),
    }
}

/// Show the current selection from cache, or show loading and request it
fn show_selection(mut state: SessionState) -> (SessionState, Effect) {
    let selection = state.selection;
    let Some(competition) = selection.competition() else {
        let error = FootballError::CompetitionNotFound(format!("#{}", selection.competition + 1));
        warn!("REDUCER: {}", error);
        state.screen = Some(render(selection, Payload::Error(&error.to_string()), &state.theme));
        return (state, Effect::None);
    };
    let key = CacheKey::new(competition.name, selection.view());

    let theme = &state.theme;
    let cached = state.cache.get_mut(&key).map(|entry| match &entry.rendered {
        Some(frame) if frame.selection == selection => frame.clone(),
        _ => {
            let frame = render(selection, Payload::Content(&entry.content), theme);
            entry.rendered = Some(frame.clone());
            frame
        }
    });

    if let Some(frame) = cached {
        debug!("REDUCER: {} served from cache", key);
        state.screen = Some(frame);
        return (state, Effect::None);
    }

    state.screen = Some(render(selection, Payload::Loading, &state.theme));

    if !state.pending.insert(key) {
        debug!("REDUCER: {} already in flight", key);
        return (state, Effect::None);
    }

    (
        state,
        Effect::Fetch(FetchRequest {
            key,
            competition_id: competition.id,
        }),
    )
}

fn refresh(mut state: SessionState) -> (SessionState, Effect) {
    if let Some(key) = state.current_key() {
        if state.cache.invalidate(&key) {
            debug!("REDUCER: invalidated {}", key);
        }
    }
    show_selection(state)
}

/// Store a finished fetch; only draw it when it belongs to the current selection
fn content_loaded(
    mut state: SessionState,
    key: CacheKey,
    result: Result<Content, String>,
) -> (SessionState, Effect) {
    state.pending.remove(&key);
    let is_current = state.current_key() == Some(key);

    match result {
        Ok(content) => {
            let mut entry = CacheEntry::new(content);
            if is_current {
                let frame = render(state.selection, Payload::Content(&entry.content), &state.theme);
                entry.rendered = Some(frame.clone());
                state.screen = Some(frame);
            } else {
                debug!("REDUCER: {} arrived after navigating away, cached only", key);
            }
            state.cache.put(key, entry);
        }
        Err(message) => {
            warn!("REDUCER: loading {} failed: {}", key, message);
            if is_current {
                state.screen = Some(render(state.selection, Payload::Error(&message), &state.theme));
            }
        }
    }

    (state, Effect::None)
}
