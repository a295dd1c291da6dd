//! Input handling
//!
//! Dispatches each key to the handler for the active prompt, or to normal
//! mode when no prompt is up. A live prompt owns every key.

mod normal;
mod prompts;
mod text_field;

pub use text_field::TextField;

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::state::app::App;
use crate::state::prompt::Prompt;

/// Handle a key event based on the active prompt
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows delivers release/repeat events too; only act on presses
    if key.kind == KeyEventKind::Release {
        return;
    }
    match &app.prompt {
        Prompt::None => normal::handle_normal_mode(app, key),
        Prompt::Rename { .. }
        | Prompt::Move { .. }
        | Prompt::NewFile { .. }
        | Prompt::NewDir { .. } => prompts::handle_text_prompt(app, key),
        Prompt::Delete { .. } | Prompt::Replace { .. } => prompts::handle_confirm_prompt(app, key),
        Prompt::DriveSelect { .. } | Prompt::HistorySelect { .. } => {
            prompts::handle_list_prompt(app, key)
        }
        Prompt::FuzzyMenu { .. } => prompts::handle_fuzzy_menu(app, key),
        Prompt::Help => prompts::handle_help(app, key),
        Prompt::Error { .. } => prompts::handle_error(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::provider::MemFs;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::path::PathBuf;

    #[test]
    fn test_active_prompt_suppresses_navigation() {
        let mut fs = MemFs::new();
        fs.add_file("/r/a.txt", b"");
        fs.add_file("/r/b.txt", b"");
        let mut app = App::with_fs(Box::new(fs), PathBuf::from("/r"));

        app.open_delete_prompt();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        // `j` would normally move the selection; the prompt swallows it
        assert_eq!(app.view.selected, 0);
        assert!(matches!(app.prompt, Prompt::Delete { .. }));
    }
}
