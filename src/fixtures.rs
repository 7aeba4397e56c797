/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit and integration tests - ensuring tests have predictable data
/// 2. Development mock mode - running the app with fake data for screenshots and debugging
/// 3. Benchmarks - providing consistent data for performance testing
///
/// Game times are laid out relative to a caller-supplied "now" so the
/// fixtures and results windows always have something to show.
use chrono::{DateTime, Duration, Local};

use crate::types::{Game, StandingRow};

const EPL_TEAMS: [&str; 20] = [
    "Arsenal",
    "Aston Villa",
    "Bournemouth",
    "Brentford",
    "Brighton",
    "Chelsea",
    "Crystal Palace",
    "Everton",
    "Fulham",
    "Ipswich",
    "Leicester",
    "Liverpool",
    "Man City",
    "Man United",
    "Newcastle",
    "Nottingham Forest",
    "Southampton",
    "Tottenham",
    "West Ham",
    "Wolves",
];

const LA_LIGA_TEAMS: [&str; 10] = [
    "Real Madrid",
    "Barcelona",
    "Atletico Madrid",
    "Athletic Club",
    "Villarreal",
    "Real Betis",
    "Real Sociedad",
    "Sevilla",
    "Valencia",
    "Girona",
];

const SERIE_A_TEAMS: [&str; 10] = [
    "Inter", "Napoli", "Juventus", "Milan", "Atalanta", "Roma", "Lazio", "Fiorentina", "Bologna", "Torino",
];

const LIGUE_1_TEAMS: [&str; 10] = [
    "PSG", "Marseille", "Monaco", "Lille", "Lyon", "Nice", "Lens", "Rennes", "Brest", "Nantes",
];

const BUNDESLIGA_TEAMS: [&str; 10] = [
    "Bayern Munich",
    "Leverkusen",
    "Dortmund",
    "Leipzig",
    "Stuttgart",
    "Frankfurt",
    "Freiburg",
    "Wolfsburg",
    "Union Berlin",
    "Mainz",
];

const UCL_TEAMS: [&str; 8] = [
    "Real Madrid",
    "Man City",
    "Bayern Munich",
    "PSG",
    "Inter",
    "Arsenal",
    "Barcelona",
    "Dortmund",
];

/// Team names for a competition id; unknown ids get the EPL list
pub fn mock_teams(competition_id: u32) -> &'static [&'static str] {
    match competition_id {
        11 => &LA_LIGA_TEAMS,
        17 => &SERIE_A_TEAMS,
        35 => &LIGUE_1_TEAMS,
        25 => &BUNDESLIGA_TEAMS,
        572 => &UCL_TEAMS,
        _ => &EPL_TEAMS,
    }
}

/// Table in list order, points strictly decreasing
pub fn create_mock_standings(competition_id: u32) -> Vec<StandingRow> {
    let teams = mock_teams(competition_id);
    let played = 20;
    teams
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let i = i as u32;
            let won = 19u32.saturating_sub(i);
            let drawn = (i + 1) % 2;
            let lost = played - won - drawn;
            StandingRow {
                position: i + 1,
                team_name: name.to_string(),
                played,
                won,
                drawn,
                lost,
                points: (3 * won + drawn) as i32,
            }
        })
        .collect()
}

/// Team behind a mock competitor id: EPL clubs numbered from 1
pub fn mock_team_name(team_id: u32) -> Option<&'static str> {
    let index = (team_id as usize).checked_sub(1)?;
    EPL_TEAMS.get(index).copied()
}

fn pairing(teams: &[&str], round: usize) -> (String, String) {
    let home = teams[(round * 2) % teams.len()];
    let away = teams[(round * 2 + 1) % teams.len()];
    (home.to_string(), away.to_string())
}

/// Upcoming games spread over the next ten days, one beyond a week
pub fn create_mock_fixtures(competition_id: u32, now: DateTime<Local>) -> Vec<Game> {
    let teams = mock_teams(competition_id);
    let offsets_hours = [2, 5, 26, 30, 50, 74, 98, 240];
    offsets_hours
        .iter()
        .enumerate()
        .map(|(round, hours)| {
            let (home_team, away_team) = pairing(teams, round);
            Game {
                id: i64::from(competition_id) * 1000 + round as i64,
                start_time: now + Duration::hours(*hours),
                home_team,
                away_team,
                home_score: None,
                away_score: None,
                display_time: None,
            }
        })
        .collect()
}

/// Finished games over the last ten days, one older than a week
pub fn create_mock_results(competition_id: u32, now: DateTime<Local>) -> Vec<Game> {
    let teams = mock_teams(competition_id);
    let offsets_hours = [3, 20, 27, 49, 75, 122, 240];
    offsets_hours
        .iter()
        .enumerate()
        .map(|(round, hours)| {
            let (home_team, away_team) = pairing(teams, round + 3);
            Game {
                id: i64::from(competition_id) * 1000 + 500 + round as i64,
                start_time: now - Duration::hours(*hours),
                home_team,
                away_team,
                home_score: Some(((round * 7 + 3) % 4) as u32),
                away_score: Some(((round * 5 + 1) % 3) as u32),
                display_time: Some("FT".to_string()),
            }
        })
        .collect()
}
