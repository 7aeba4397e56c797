// Core modules
pub mod action;
pub mod effects;
pub mod keys;
pub mod navigation;
pub mod reducer;
pub mod renderer;
pub mod runtime;
pub mod state;

#[cfg(test)]
pub mod testing;


pub use action::Action;
pub use effects::{DataEffects, Effect};
pub use keys::key_to_action;
pub use navigation::{FocusAxis, Selection};
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::SessionState;

use std::io;
use std::sync::Arc;

use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{debug, warn};

use crate::competitions;
use crate::config::Config;
use crate::data_provider::FootballDataProvider;

/// What woke the main loop
enum Wake {
    Action(Action),
    Terminal(Option<io::Result<Event>>),
}

/// Main entry point for TUI mode
pub async fn run(client: Arc<dyn FootballDataProvider>, config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, client, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Initial session state for `config`
pub fn initial_state(config: &Config) -> SessionState {
    let start = competitions::position(&config.default_competition).unwrap_or_else(|| {
        warn!(
            "Unknown default competition {:?}, starting on {}",
            config.default_competition,
            competitions::COMPETITIONS[0].name
        );
        0
    });
    SessionState::new(Selection::starting_at(start), config.theme.clone())
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    client: Arc<dyn FootballDataProvider>,
    config: &Config,
) -> Result<(), io::Error> {
    let data_effects = Arc::new(DataEffects::new(client, config.window_days));
    let mut runtime = Runtime::new(initial_state(config), data_effects);
    runtime.dispatch(Action::ShowCurrent);

    let mut events = EventStream::new();

    #[cfg(feature = "development")]
    let mut screenshot_requested = false;

    loop {
        terminal.draw(|f| renderer::draw(f, runtime.state()))?;

        #[cfg(feature = "development")]
        if screenshot_requested {
            screenshot_requested = false;
            let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            let filename = format!("football-screenshot-{}.txt", timestamp);
            match crate::dev::screenshot::save_screen(runtime.state(), &filename) {
                Ok(()) => tracing::info!("Screenshot saved to {}", filename),
                Err(e) => tracing::error!("Failed to save screenshot: {}", e),
            }
        }

        if runtime.should_quit() {
            debug!("LOOP: quitting");
            break;
        }

        let wake = tokio::select! {
            Some(action) = runtime.next_action() => Wake::Action(action),
            event = events.next() => Wake::Terminal(event),
        };

        match wake {
            Wake::Action(action) => {
                runtime.dispatch(action);
                let more = runtime.process_actions();
                if more > 0 {
                    debug!("LOOP: processed {} more actions", more);
                }
            }
            Wake::Terminal(Some(Ok(Event::Key(key)))) => {
                #[cfg(feature = "development")]
                {
                    use crossterm::event::{KeyCode, KeyModifiers};
                    if key.code == KeyCode::Char('S') && key.modifiers.contains(KeyModifiers::SHIFT) {
                        tracing::info!("Screenshot requested via Shift-S");
                        screenshot_requested = true;
                        continue;
                    }
                }

                if let Some(action) = key_to_action(key, runtime.state().help_visible) {
                    runtime.dispatch(action);
                }
            }
            Wake::Terminal(Some(Ok(Event::Resize(width, height)))) => {
                debug!("LOOP: resized to {}x{}", width, height);
                runtime.dispatch(Action::Redraw);
            }
            Wake::Terminal(Some(Ok(_))) => {}
            Wake::Terminal(Some(Err(e))) => return Err(e),
            Wake::Terminal(None) => {
                debug!("LOOP: terminal event stream closed");
                break;
            }
        }
    }

    Ok(())
}
