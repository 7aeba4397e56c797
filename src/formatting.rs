//! Plain-text building blocks shared by the dashboard renderer and the CLI commands
//!
//! Everything here returns unstyled strings; colouring is applied by the caller.

use chrono::{DateTime, Duration, Local, NaiveDate};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::{Game, StandingRow};

/// Width of the "position) team" column
pub const TEAM_COL_WIDTH: usize = 24;

/// Width of the P/W/D/L columns
pub const STAT_COL_WIDTH: usize = 6;

/// Width of the points column
pub const PTS_COL_WIDTH: usize = 7;

/// How long after kick-off a fixture is shown as live
pub const LIVE_WINDOW_HOURS: i64 = 2;

const LIVE_MARKER: &str = "🔴 ";
const NO_MARKER: &str = "   ";

/// Format a header with text and an underline matching its display width
pub fn format_header(text: &str, double_line: bool) -> String {
    let separator = if double_line { "═" } else { "─" };
    format!("{}\n{}\n", text, separator.repeat(text.width()))
}

/// Cut `text` to at most `width` display columns
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Truncate or right-pad `text` to exactly `width` display columns
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out = truncate_to_width(text, width);
    let used = out.width();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

pub fn standings_header() -> String {
    format!(
        " {}{:>sw$}{:>sw$}{:>sw$}{:>sw$}{:>pw$}",
        fit_to_width("Team", TEAM_COL_WIDTH),
        "P",
        "W",
        "D",
        "L",
        "Pts",
        sw = STAT_COL_WIDTH,
        pw = PTS_COL_WIDTH,
    )
}

pub fn standings_row(row: &StandingRow) -> String {
    let team = format!("{}) {}", row.position, row.team_name);
    format!(
        " {}{:>sw$}{:>sw$}{:>sw$}{:>sw$}{:>pw$}",
        fit_to_width(&team, TEAM_COL_WIDTH),
        row.played,
        row.won,
        row.drawn,
        row.lost,
        row.points,
        sw = STAT_COL_WIDTH,
        pw = PTS_COL_WIDTH,
    )
}

/// Table region a position falls in, used for row colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandingZone {
    /// Top four
    ChampionsLeague,
    /// Fifth and sixth
    Europe,
    /// Bottom three
    Relegation,
    MidTable,
}

pub fn standing_zone(position: u32, table_size: usize) -> StandingZone {
    let relegation_from = table_size.saturating_sub(2) as u32;
    if position <= 4 {
        StandingZone::ChampionsLeague
    } else if position <= 6 {
        StandingZone::Europe
    } else if position >= relegation_from {
        StandingZone::Relegation
    } else {
        StandingZone::MidTable
    }
}

/// "Today", "Tomorrow" or e.g. "Sat, Aug 17"
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.succ_opt() {
        "Tomorrow".to_string()
    } else {
        date.format("%a, %b %-d").to_string()
    }
}

pub fn format_time(time: &DateTime<Local>) -> String {
    time.format("%H:%M").to_string()
}

/// Group games by local calendar day, keeping the order of first appearance
pub fn group_by_date<'a>(games: &'a [Game], now: &DateTime<Local>) -> Vec<(String, Vec<&'a Game>)> {
    let today = now.date_naive();
    let mut groups: Vec<(NaiveDate, Vec<&'a Game>)> = Vec::new();

    for game in games {
        let day = game.start_time.date_naive();
        match groups.iter_mut().find(|(d, _)| *d == day) {
            Some((_, bucket)) => bucket.push(game),
            None => groups.push((day, vec![game])),
        }
    }

    groups
        .into_iter()
        .map(|(day, bucket)| (date_label(day, today), bucket))
        .collect()
}

/// Kicked off no more than [`LIVE_WINDOW_HOURS`] ago
pub fn is_live(game: &Game, now: &DateTime<Local>) -> bool {
    let end = game.start_time + Duration::hours(LIVE_WINDOW_HOURS);
    *now >= game.start_time && *now <= end
}

/// Line for an upcoming game; live games carry a marker and the running score
pub fn fixture_line(game: &Game, now: &DateTime<Local>) -> String {
    let time = format_time(&game.start_time);
    if is_live(game, now) {
        let mut line = format!(
            "{}{}  {} {} - {} {}",
            LIVE_MARKER,
            time,
            game.home_team,
            game.home_score.unwrap_or(0),
            game.away_score.unwrap_or(0),
            game.away_team
        );
        if let Some(clock) = &game.display_time {
            line.push_str(&format!("  ({})", clock));
        }
        line
    } else {
        format!("{}{}  {} vs {}", NO_MARKER, time, game.home_team, game.away_team)
    }
}

pub fn result_line(game: &Game) -> String {
    format!(
        "{}{}  {} {} - {} {}",
        NO_MARKER,
        format_time(&game.start_time),
        game.home_team,
        game.home_score.unwrap_or(0),
        game.away_score.unwrap_or(0),
        game.away_team
    )
}

pub fn no_standings_message() -> String {
    "No standings found.".to_string()
}

pub fn no_fixtures_message(days: u32) -> String {
    format!("No fixtures found for the next {} days.", days)
}

pub fn no_results_message(days: u32) -> String {
    format!("No results found for the last {} days.", days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn game(start_time: DateTime<Local>, home_score: Option<u32>, away_score: Option<u32>) -> Game {
        Game {
            id: 1,
            start_time,
            home_team: "Arsenal".to_string(),
            away_team: "Chelsea".to_string(),
            home_score,
            away_score,
            display_time: None,
        }
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("Table", false), "Table\n─────\n");
        assert_eq!(format_header("EPL", true), "EPL\n═══\n");
        assert_eq!(format_header("", false), "\n\n");
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("abc", 5), "abc  ");
        assert_eq!(fit_to_width("abcdef", 3), "abc");
        assert_eq!(fit_to_width("🔴x", 3).width(), 3);
    }

    #[test]
    fn test_standings_row_layout() {
        let row = StandingRow {
            position: 1,
            team_name: "Liverpool".to_string(),
            played: 38,
            won: 25,
            drawn: 9,
            lost: 4,
            points: 84,
        };
        let line = standings_row(&row);
        assert!(line.starts_with(" 1) Liverpool"));
        assert!(line.ends_with("     84"));
        assert_eq!(line.width(), standings_header().width());
    }

    #[test]
    fn test_standings_row_truncates_long_names() {
        let row = StandingRow {
            position: 12,
            team_name: "Wolverhampton Wanderers Football Club".to_string(),
            played: 1,
            won: 0,
            drawn: 0,
            lost: 1,
            points: 0,
        };
        assert_eq!(standings_row(&row).width(), standings_header().width());
    }

    #[test]
    fn test_standing_zones() {
        assert_eq!(standing_zone(1, 20), StandingZone::ChampionsLeague);
        assert_eq!(standing_zone(4, 20), StandingZone::ChampionsLeague);
        assert_eq!(standing_zone(6, 20), StandingZone::Europe);
        assert_eq!(standing_zone(10, 20), StandingZone::MidTable);
        assert_eq!(standing_zone(17, 20), StandingZone::MidTable);
        assert_eq!(standing_zone(18, 20), StandingZone::Relegation);
        assert_eq!(standing_zone(20, 20), StandingZone::Relegation);
    }

    #[test]
    fn test_date_labels() {
        let today = NaiveDate::from_ymd_opt(2024, 8, 16).unwrap();
        assert_eq!(date_label(today, today), "Today");
        assert_eq!(date_label(today.succ_opt().unwrap(), today), "Tomorrow");
        assert_eq!(
            date_label(NaiveDate::from_ymd_opt(2024, 8, 24).unwrap(), today),
            "Sat, Aug 24"
        );
    }

    #[test]
    fn test_group_by_date_keeps_order() {
        let now = noon(2024, 8, 16);
        let games = vec![
            game(noon(2024, 8, 16), None, None),
            game(noon(2024, 8, 17), None, None),
            game(noon(2024, 8, 16) + Duration::hours(3), None, None),
        ];
        let groups = group_by_date(&games, &now);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Today");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Tomorrow");
    }

    #[test]
    fn test_fixture_line_live_and_upcoming() {
        let kickoff = noon(2024, 8, 16);
        let upcoming = fixture_line(&game(kickoff, None, None), &(kickoff - Duration::hours(1)));
        assert_eq!(upcoming, "   12:00  Arsenal vs Chelsea");

        let live = fixture_line(&game(kickoff, Some(1), None), &(kickoff + Duration::minutes(30)));
        assert_eq!(live, "🔴 12:00  Arsenal 1 - 0 Chelsea");
    }

    #[test]
    fn test_result_line() {
        let line = result_line(&game(noon(2024, 8, 16), Some(2), Some(2)));
        assert_eq!(line, "   12:00  Arsenal 2 - 2 Chelsea");
    }
}
