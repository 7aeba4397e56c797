/// Screenshot utilities for capturing the dashboard
///
/// Saves the frame currently on screen as plain text, for debugging and
/// documentation purposes.
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::tui::renderer::help_text;
use crate::tui::state::SessionState;

/// Write the current frame, and the help overlay when open, to `path`
pub fn save_screen(state: &SessionState, path: impl AsRef<Path>) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);

    match &state.screen {
        Some(frame) => {
            for line in frame.plain_lines() {
                writeln!(file, "{}", line)?;
            }
        }
        None => writeln!(file, "(nothing on screen)")?,
    }

    if state.help_visible {
        writeln!(file)?;
        for line in help_text(state.competition_count).lines {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            writeln!(file, "{}", text)?;
        }
    }

    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::{reduce, Action};

    #[test]
    fn test_save_screen_writes_frame() {
        let (state, _) = reduce(SessionState::default(), Action::ShowCurrent);
        let path = std::env::temp_dir().join(format!("football-screenshot-{}.txt", std::process::id()));

        save_screen(&state, &path).unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(saved.starts_with('┌'));
        assert!(saved.contains("Loading..."));
    }
}
