use crate::cache::CacheKey;
use crate::types::Content;

/// Everything the session loop reacts to
///
/// Actions are dispatched from:
/// - User input (key events, see [`super::keys`])
/// - Effects (fetch results coming back from spawned tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Left,
    Right,
    Up,
    Down,
    /// Cycle the view bar forward whichever bar has focus (Tab key)
    NextView,
    /// One-based competition number
    JumpToCompetition(usize),
    Refresh,
    Quit,

    // Overlay
    ToggleHelp,
    /// Any key while the help overlay is open
    DismissHelp,

    /// Re-show the current selection (session start)
    ShowCurrent,
    /// Terminal resized; nothing changes but the next draw
    Redraw,

    /// A fetch finished; errors arrive as display strings
    ContentLoaded {
        key: CacheKey,
        result: Result<Content, String>,
    },
}
