//! General test utilities for TUI tests.
//!
//! Sample content builders and runtime constructors shared by the renderer,
//! reducer and runtime tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local};
use ratatui::buffer::Buffer;

use super::effects::DataEffects;
use super::runtime::Runtime;
use super::state::SessionState;
use crate::config::ThemeConfig;
use crate::dev::mock_client::MockClient;
use crate::types::{Content, Game, StandingRow, DEFAULT_WINDOW_DAYS};

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

pub fn game(id: i64, start_time: DateTime<Local>, score: Option<(u32, u32)>) -> Game {
    Game {
        id,
        start_time,
        home_team: format!("Home {}", id),
        away_team: format!("Away {}", id),
        home_score: score.map(|(h, _)| h),
        away_score: score.map(|(_, a)| a),
        display_time: None,
    }
}

/// Table of `teams` rows, positions 1..=teams
pub fn sample_standings(teams: u32) -> Content {
    let rows = (1..=teams)
        .map(|position| StandingRow {
            position,
            team_name: format!("Team {}", position),
            played: 10,
            won: teams - position,
            drawn: 1,
            lost: position - 1,
            points: (3 * (teams - position) + 1) as i32,
        })
        .collect();
    Content::Standings(rows)
}

/// Fixtures around `now`: one kicking off now, one later today, two on later
/// days, plus one past and one beyond the window that get filtered out
pub fn sample_fixtures(now: DateTime<Local>) -> Content {
    let games = vec![
        game(1, now + Duration::days(1), None),
        game(2, now, Some((0, 0))),
        game(3, now + Duration::hours(3), None),
        game(4, now + Duration::days(3), None),
        game(5, now - Duration::days(1), None),
        game(6, now + Duration::days(10), None),
    ];
    Content::fixtures(games, now, DEFAULT_WINDOW_DAYS)
}

pub fn sample_results(now: DateTime<Local>) -> Content {
    let games = vec![
        game(1, now - Duration::days(2), Some((2, 1))),
        game(2, now - Duration::days(1), Some((0, 0))),
        game(3, now - Duration::days(9), Some((1, 3))),
        game(4, now + Duration::days(1), None),
    ];
    Content::results(games, now, DEFAULT_WINDOW_DAYS)
}

/// Runtime backed by `client`, starting on the first competition
pub fn create_runtime(client: Arc<MockClient>) -> Runtime {
    let data_effects = Arc::new(DataEffects::new(client, DEFAULT_WINDOW_DAYS));
    let state = SessionState::new(Default::default(), ThemeConfig::default());
    Runtime::new(state, data_effects)
}
