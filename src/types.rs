/// Shared types used across the application
///
/// This module contains the domain records returned by the data client and
/// the content payloads cached and rendered by the dashboard.
use chrono::{DateTime, Duration, Local};

/// Number of days shown by the fixtures and results views unless configured
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Which slice of a competition is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Table,
    Fixtures,
    Results,
}

impl View {
    pub const ALL: [View; 3] = [View::Table, View::Fixtures, View::Results];

    pub fn name(&self) -> &'static str {
        match self {
            View::Table => "Table",
            View::Fixtures => "Fixtures",
            View::Results => "Results",
        }
    }

    pub fn from_index(index: usize) -> Option<View> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixture or result
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub start_time: DateTime<Local>,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub display_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub position: u32,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub points: i32,
}

/// Formatter-ready payload for one (competition, view) slot
///
/// Game lists are already windowed and sorted. `fetched_at` pins the
/// reference time used for date labels and the live marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Standings(Vec<StandingRow>),
    Fixtures {
        games: Vec<Game>,
        days: u32,
        fetched_at: DateTime<Local>,
    },
    Results {
        games: Vec<Game>,
        days: u32,
        fetched_at: DateTime<Local>,
    },
}

impl Content {
    /// Keep games starting within the next `days`, earliest first
    ///
    /// A window reaching past the representable date range is open-ended.
    pub fn fixtures(games: Vec<Game>, now: DateTime<Local>, days: u32) -> Self {
        let cutoff = now.checked_add_signed(Duration::days(i64::from(days)));
        let mut games: Vec<Game> = games
            .into_iter()
            .filter(|g| g.start_time >= now && cutoff.map_or(true, |c| g.start_time <= c))
            .collect();
        games.sort_by_key(|g| g.start_time);
        Content::Fixtures { games, days, fetched_at: now }
    }

    /// Keep games that started within the last `days`, latest first
    pub fn results(games: Vec<Game>, now: DateTime<Local>, days: u32) -> Self {
        let cutoff = now.checked_sub_signed(Duration::days(i64::from(days)));
        let mut games: Vec<Game> = games
            .into_iter()
            .filter(|g| cutoff.map_or(true, |c| g.start_time >= c) && g.start_time <= now)
            .collect();
        games.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Content::Results { games, days, fetched_at: now }
    }

    pub fn view(&self) -> View {
        match self {
            Content::Standings(_) => View::Table,
            Content::Fixtures { .. } => View::Fixtures,
            Content::Results { .. } => View::Results,
        }
    }

    /// Number of records (rows or games)
    pub fn len(&self) -> usize {
        match self {
            Content::Standings(rows) => rows.len(),
            Content::Fixtures { games, .. } | Content::Results { games, .. } => games.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
