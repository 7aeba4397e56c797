//! Two-axis selection state machine
//!
//! A [`Selection`] is a plain `Copy` value. Every action produces a new
//! selection together with a [`Change`] describing what the session has to
//! do with it; nothing here touches the cache, the network or the terminal.

use tracing::trace;

use super::action::Action;
use crate::cache::CacheKey;
use crate::competitions::{self, Competition};
use crate::types::View;

/// Which tab bar receives Left/Right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusAxis {
    Competitions,
    Views,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub competition: usize,
    pub view: usize,
    pub focus: FocusAxis,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            competition: 0,
            view: 0,
            focus: FocusAxis::Competitions,
        }
    }
}

/// What an action did to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    None,
    /// Only the focused axis moved; content is unchanged
    Focus,
    /// Competition or view index changed
    Selection,
    Refresh,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub selection: Selection,
    pub change: Change,
}

fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + len - 1) % len
    }
}

impl Selection {
    /// Initial selection on the given competition, Table view, competition bar focused
    pub fn starting_at(competition: usize) -> Self {
        Self {
            competition,
            ..Self::default()
        }
    }

    pub fn competition(&self) -> Option<&'static Competition> {
        competitions::get(self.competition)
    }

    pub fn view(&self) -> View {
        View::from_index(self.view).unwrap_or(View::Table)
    }

    /// Cache slot for this selection; `None` when the competition index has no registry entry
    pub fn cache_key(&self) -> Option<CacheKey> {
        self.competition()
            .map(|competition| CacheKey::new(competition.name, self.view()))
    }

    /// Same competition and view, focus ignored
    pub fn same_content(&self, other: &Selection) -> bool {
        self.competition == other.competition && self.view == other.view
    }

    /// Apply an action against `competition_count` competitions
    pub fn apply(self, action: &Action, competition_count: usize) -> Transition {
        let view_count = View::ALL.len();
        let mut next = self;

        let change = match action {
            Action::Left => {
                match self.focus {
                    FocusAxis::Competitions => {
                        next.competition = wrap_prev(self.competition, competition_count)
                    }
                    FocusAxis::Views => next.view = wrap_prev(self.view, view_count),
                }
                Change::Selection
            }
            Action::Right => {
                match self.focus {
                    FocusAxis::Competitions => {
                        next.competition = wrap_next(self.competition, competition_count)
                    }
                    FocusAxis::Views => next.view = wrap_next(self.view, view_count),
                }
                Change::Selection
            }
            Action::Down => match self.focus {
                FocusAxis::Competitions => {
                    next.focus = FocusAxis::Views;
                    Change::Focus
                }
                FocusAxis::Views => {
                    next.view = wrap_next(self.view, view_count);
                    Change::Selection
                }
            },
            Action::Up => match self.focus {
                FocusAxis::Views => {
                    next.focus = FocusAxis::Competitions;
                    Change::Focus
                }
                FocusAxis::Competitions => {
                    next.competition = wrap_prev(self.competition, competition_count);
                    Change::Selection
                }
            },
            Action::NextView => {
                next.view = wrap_next(self.view, view_count);
                Change::Selection
            }
            Action::JumpToCompetition(n) => {
                if (1..=competition_count).contains(n) {
                    next.competition = n - 1;
                    Change::Selection
                } else {
                    trace!("NAV: ignoring jump to competition {}", n);
                    Change::None
                }
            }
            Action::Refresh => Change::Refresh,
            Action::Quit => Change::Quit,
            _ => Change::None,
        };

        // A move that lands on the same slot (axis of length one) is not a content change
        let change = if change == Change::Selection && next.same_content(&self) {
            Change::None
        } else {
            change
        };

        trace!("NAV: {:?} {:?} -> {:?} ({:?})", action, self, next, change);
        Transition {
            selection: next,
            change,
        }
    }
}
