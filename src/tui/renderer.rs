//! Composes the dashboard screen
//!
//! [`render`] is pure: the same selection, payload and theme always produce
//! the same [`Frame`]. Drawing to the terminal happens only in [`draw`].

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::navigation::{FocusAxis, Selection};
use super::state::SessionState;
use crate::competitions;
use crate::config::ThemeConfig;
use crate::formatting::{self, standing_zone, StandingZone};
use crate::types::{Content, Game, StandingRow, View};

/// Minimum width of a competition tab
pub const MIN_TAB_WIDTH: usize = 12;

/// Width of a view tab
pub const VIEW_TAB_WIDTH: usize = 15;

/// Minimum outer width of the box, borders included
pub const MIN_TOTAL_WIDTH: usize = 110;

/// Lines above the body: top border, two tab bars, two separators
pub const HEADER_LINES: usize = 5;

pub const LOADING_MESSAGE: &str = "Loading...";

/// What the body of a frame shows
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    Loading,
    Error(&'a str),
    Content(&'a Content),
}

/// A composed screen
///
/// The body is kept apart from the chrome so a focus change can re-style the
/// tab bars without formatting content again.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub selection: Selection,
    body: Vec<Line<'static>>,
    text: Text<'static>,
}

impl Frame {
    pub fn text(&self) -> &Text<'static> {
        &self.text
    }

    pub fn body(&self) -> &[Line<'static>] {
        &self.body
    }

    /// Same body, tab bars styled for `selection`
    pub fn rehighlight(&self, selection: Selection, theme: &ThemeConfig) -> Frame {
        compose(selection, self.body.clone(), theme)
    }

    /// Unstyled text of every line
    pub fn plain_lines(&self) -> Vec<String> {
        self.text.lines.iter().map(line_text).collect()
    }
}

pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

pub fn render(selection: Selection, payload: Payload<'_>, theme: &ThemeConfig) -> Frame {
    compose(selection, body_lines(payload), theme)
}

struct Geometry {
    tab_width: usize,
    total_width: usize,
}

fn competition_label(index: usize, name: &str) -> String {
    format!("{}.{}", index + 1, name)
}

fn geometry() -> Geometry {
    let all = competitions::all();
    let longest = all
        .iter()
        .enumerate()
        .map(|(i, c)| competition_label(i, c.name).width())
        .max()
        .unwrap_or(0);
    let tab_width = MIN_TAB_WIDTH.max(longest + 2);
    let total_width = MIN_TOTAL_WIDTH.max(all.len() * (tab_width + 1) + 10);
    Geometry {
        tab_width,
        total_width,
    }
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

fn tab_style(selected: bool, axis: FocusAxis, selection: &Selection, theme: &ThemeConfig) -> Style {
    if !selected {
        return dim();
    }
    if selection.focus == axis {
        Style::default()
            .bg(theme.selection_bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(theme.unfocused_selection_bg).fg(Color::Black)
    }
}

fn tab_bar(labels: Vec<String>, selected: usize, width: usize, axis: FocusAxis, selection: &Selection, theme: &ThemeConfig) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw(" ")];
    for (i, label) in labels.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let padded = format!("{:^width$}", formatting::truncate_to_width(&label, width), width = width);
        spans.push(Span::styled(padded, tab_style(i == selected, axis, selection, theme)));
    }
    spans
}

/// Wrap `spans` in side borders, clipped or padded to `inner` columns
fn boxed(spans: Vec<Span<'static>>, inner: usize, border: Style) -> Line<'static> {
    let mut used = 0;
    let mut out = Vec::with_capacity(spans.len() + 3);
    out.push(Span::styled("│", border));
    for span in spans {
        let remaining = inner - used;
        if remaining == 0 {
            break;
        }
        let content = formatting::truncate_to_width(&span.content, remaining);
        used += content.width();
        out.push(Span::styled(content, span.style));
    }
    if used < inner {
        out.push(Span::raw(" ".repeat(inner - used)));
    }
    out.push(Span::styled("│", border));
    Line::from(out)
}

fn rule(left: &str, right: &str, inner: usize, border: Style) -> Line<'static> {
    Line::from(Span::styled(format!("{}{}{}", left, "─".repeat(inner), right), border))
}

fn footer(competition_count: usize) -> String {
    format!(
        " h/l (horizontal) • j/k (menu/vertical) • 1-{} (leagues) • r (refresh) • ? (help) • q (quit)",
        competition_count
    )
}

fn compose(selection: Selection, body: Vec<Line<'static>>, theme: &ThemeConfig) -> Frame {
    let geometry = geometry();
    let inner = geometry.total_width - 2;
    let border = Style::default().fg(theme.border_fg);
    let all = competitions::all();

    let competition_labels = all
        .iter()
        .enumerate()
        .map(|(i, c)| competition_label(i, c.name))
        .collect();
    let view_labels = View::ALL.iter().map(|v| v.name().to_string()).collect();

    let mut lines = Vec::with_capacity(body.len() + HEADER_LINES + 3);
    lines.push(rule("┌", "┐", inner, border));
    lines.push(boxed(
        tab_bar(competition_labels, selection.competition, geometry.tab_width, FocusAxis::Competitions, &selection, theme),
        inner,
        border,
    ));
    lines.push(rule("├", "┤", inner, border));
    lines.push(boxed(
        tab_bar(view_labels, selection.view, VIEW_TAB_WIDTH, FocusAxis::Views, &selection, theme),
        inner,
        border,
    ));
    lines.push(rule("├", "┤", inner, border));
    for line in &body {
        lines.push(boxed(line.spans.clone(), inner, border));
    }
    lines.push(rule("├", "┤", inner, border));
    lines.push(boxed(vec![Span::styled(footer(all.len()), dim())], inner, border));
    lines.push(rule("└", "┘", inner, border));

    Frame {
        selection,
        body,
        text: Text::from(lines),
    }
}

fn message(text: String, color: Color) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(format!(" {}", text), Style::default().fg(color))),
    ]
}

fn body_lines(payload: Payload<'_>) -> Vec<Line<'static>> {
    match payload {
        Payload::Loading => vec![Line::default(), Line::from(format!(" {}", LOADING_MESSAGE))],
        Payload::Error(error) => message(format!("Error: {}", error), Color::Red),
        Payload::Content(Content::Standings(rows)) => standings_lines(rows),
        Payload::Content(Content::Fixtures {
            games,
            days,
            fetched_at,
        }) => {
            if games.is_empty() {
                return message(formatting::no_fixtures_message(*days), Color::Yellow);
            }
            dated_lines(games, fetched_at, |game| {
                let style = if formatting::is_live(game, fetched_at) {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Span::styled(formatting::fixture_line(game, fetched_at), style)
            })
        }
        Payload::Content(Content::Results {
            games,
            days,
            fetched_at,
        }) => {
            if games.is_empty() {
                return message(formatting::no_results_message(*days), Color::Yellow);
            }
            dated_lines(games, fetched_at, |game| Span::raw(formatting::result_line(game)))
        }
    }
}

fn standings_lines(rows: &[StandingRow]) -> Vec<Line<'static>> {
    if rows.is_empty() {
        return message(formatting::no_standings_message(), Color::Yellow);
    }

    let header = formatting::standings_header();
    let mut lines = vec![
        Line::from(Span::styled(header.clone(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(format!(" {}", "─".repeat(header.width() - 1)), dim())),
    ];
    for row in rows {
        let style = match standing_zone(row.position, rows.len()) {
            StandingZone::ChampionsLeague => Style::default().fg(Color::Green),
            StandingZone::Europe => Style::default().fg(Color::Blue),
            StandingZone::Relegation => Style::default().fg(Color::Red),
            StandingZone::MidTable => Style::default(),
        };
        lines.push(Line::from(Span::styled(formatting::standings_row(row), style)));
    }
    lines
}

fn dated_lines<F>(games: &[Game], now: &chrono::DateTime<chrono::Local>, game_span: F) -> Vec<Line<'static>>
where
    F: Fn(&Game) -> Span<'static>,
{
    let mut lines = Vec::new();
    for (label, group) in formatting::group_by_date(games, now) {
        let underline = "─".repeat(label.width());
        lines.push(Line::from(Span::styled(
            format!(" {}", label),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(format!(" {}", underline), dim())));
        for game in group {
            lines.push(Line::from(game_span(game)));
        }
        lines.push(Line::default());
    }
    lines
}

pub fn help_text(competition_count: usize) -> Text<'static> {
    let key = Style::default().add_modifier(Modifier::BOLD);
    let entries = [
        ("h / ←", "previous tab on the focused bar".to_string()),
        ("l / →", "next tab on the focused bar".to_string()),
        ("j / ↓", "focus the view bar, then next view".to_string()),
        ("k / ↑", "focus the competition bar, then previous competition".to_string()),
        ("Tab", "next view".to_string()),
        ("1-9", format!("jump to competition (1-{})", competition_count)),
        ("r / Enter", "refresh the current view".to_string()),
        ("?", "toggle this help".to_string()),
        ("q / Esc", "quit".to_string()),
    ];

    let mut lines: Vec<Line<'static>> = entries
        .into_iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {:<11}", keys), key),
                Span::raw(what),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(" Press any key to close", dim())));
    Text::from(lines)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Draw the current screen and, when open, the help overlay
pub fn draw(f: &mut ratatui::Frame, state: &SessionState) {
    let area = f.area();
    if let Some(screen) = &state.screen {
        f.render_widget(Paragraph::new(screen.text().clone()), area);
    }

    if state.help_visible {
        let help = help_text(state.competition_count);
        let height = (help.lines.len() as u16 + 2).min(area.height);
        let width = 72.min(area.width);
        let popup = centered(area, width, height);
        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(help).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(state.theme.border_fg))
                    .title(" Help "),
            ),
            popup,
        );
    }
}
