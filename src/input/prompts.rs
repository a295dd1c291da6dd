//! Prompt-mode key handlers.
//!
//! While a prompt is active it owns every key: Return commits, Escape
//! cancels, everything else is the prompt's own editing or list motion.

use crossterm::event::{KeyCode, KeyEvent};

use crate::input::TextField;
use crate::state::app::App;
use crate::state::prompt::{FuzzyAction, Prompt};

/// Rename / Move / NewFile / NewDir: a single-line text input
pub fn handle_text_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_prompt(),
        KeyCode::Enter => app.commit_prompt(),
        code => {
            let (Prompt::Rename { input, cursor, .. }
            | Prompt::Move { input, cursor, .. }
            | Prompt::NewFile { input, cursor, .. }
            | Prompt::NewDir { input, cursor, .. }) = &mut app.prompt
            else {
                return;
            };
            match code {
                KeyCode::Backspace => TextField::backspace(input, cursor),
                KeyCode::Delete => TextField::delete(input, *cursor),
                KeyCode::Left => TextField::left(cursor),
                KeyCode::Right => TextField::right(input, cursor),
                KeyCode::Home => TextField::home(cursor),
                KeyCode::End => TextField::end(input, cursor),
                KeyCode::Char(c) => TextField::insert_char(input, cursor, c),
                _ => {}
            }
        }
    }
}

/// Delete / Replace: confirm or back out
pub fn handle_confirm_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.commit_prompt(),
        KeyCode::Esc => app.cancel_prompt(),
        _ => {}
    }
}

/// DriveSelect / HistorySelect: pick one item from a short list
pub fn handle_list_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_prompt(),
        KeyCode::Enter => app.commit_prompt(),
        KeyCode::Char('j') | KeyCode::Down => step_list(&mut app.prompt, 1),
        KeyCode::Char('k') | KeyCode::Up => step_list(&mut app.prompt, -1),
        _ => {}
    }
}

fn step_list(prompt: &mut Prompt, delta: isize) {
    let (len, selected) = match prompt {
        Prompt::DriveSelect { drives, selected } => (drives.len(), selected),
        Prompt::HistorySelect { entries, selected } => (entries.len(), selected),
        _ => return,
    };
    if len == 0 {
        return;
    }
    *selected = (*selected as isize + delta).rem_euclid(len as isize) as usize;
}

/// FuzzyMenu: a letter picks the action to run on the fuzzy-picked path
pub fn handle_fuzzy_menu(app: &mut App, key: KeyEvent) {
    let Prompt::FuzzyMenu { scope } = &app.prompt else {
        return;
    };
    let scope = *scope;
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.cancel_prompt(),
        KeyCode::Char('e') => app.request_fuzzy(scope, FuzzyAction::Edit),
        KeyCode::Char('y') => app.request_fuzzy(scope, FuzzyAction::Clip),
        KeyCode::Char('o') => app.request_fuzzy(scope, FuzzyAction::Open),
        KeyCode::Char('c') => app.request_fuzzy(scope, FuzzyAction::ChangeDir),
        _ => {}
    }
}

/// Help dismisses on Return or Escape
pub fn handle_help(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
        app.cancel_prompt();
    }
}

/// Error dismisses on any key
pub fn handle_error(app: &mut App, _key: KeyEvent) {
    app.cancel_prompt();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::provider::MemFs;
    use crate::state::prompt::{FuzzyScope, TermCmd};
    use crossterm::event::KeyModifiers;
    use std::path::{Path, PathBuf};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        let mut fs = MemFs::new();
        fs.add_file("/r/a.txt", b"body");
        fs.add_file("/r/b.txt", b"");
        App::with_fs(Box::new(fs), PathBuf::from("/r"))
    }

    #[test]
    fn test_escape_cancels_without_touching_the_filesystem() {
        let mut app = test_app();
        app.open_rename_prompt();
        handle_text_prompt(&mut app, key(KeyCode::Char('x')));
        handle_text_prompt(&mut app, key(KeyCode::Esc));
        assert!(app.prompt.is_none());
        assert!(app.fs.exists(Path::new("/r/a.txt")));
        assert!(app.undo.is_empty());
    }

    #[test]
    fn test_typed_characters_edit_the_input() {
        let mut app = test_app();
        app.open_new_file_prompt();
        for c in "new.txt".chars() {
            handle_text_prompt(&mut app, key(KeyCode::Char(c)));
        }
        handle_text_prompt(&mut app, key(KeyCode::Backspace));
        assert!(matches!(&app.prompt, Prompt::NewFile { input, .. } if input == "new.tx"));
        handle_text_prompt(&mut app, key(KeyCode::Char('t')));
        handle_text_prompt(&mut app, key(KeyCode::Enter));
        assert!(app.fs.exists(Path::new("/r/new.txt")));
    }

    #[test]
    fn test_rename_edits_multibyte_names_without_panicking() {
        let mut fs = MemFs::new();
        fs.add_file("/r/café", b"");
        let mut app = App::with_fs(Box::new(fs), PathBuf::from("/r"));
        app.open_rename_prompt();

        handle_text_prompt(&mut app, key(KeyCode::Backspace));
        assert!(matches!(&app.prompt, Prompt::Rename { input, .. } if input == "caf"));
        handle_text_prompt(&mut app, key(KeyCode::Char('é')));
        handle_text_prompt(&mut app, key(KeyCode::Char('s')));
        handle_text_prompt(&mut app, key(KeyCode::Enter));
        assert!(app.fs.exists(Path::new("/r/cafés")));
    }

    #[test]
    fn test_list_selection_wraps_both_ways() {
        let mut app = test_app();
        app.prompt = Prompt::HistorySelect {
            entries: vec![
                (PathBuf::from("/one"), 3),
                (PathBuf::from("/two"), 2),
                (PathBuf::from("/three"), 1),
            ],
            selected: 0,
        };
        handle_list_prompt(&mut app, key(KeyCode::Char('k')));
        assert!(matches!(&app.prompt, Prompt::HistorySelect { selected: 2, .. }));
        handle_list_prompt(&mut app, key(KeyCode::Char('j')));
        assert!(matches!(&app.prompt, Prompt::HistorySelect { selected: 0, .. }));
    }

    #[test]
    fn test_fuzzy_menu_letter_requests_a_command() {
        let mut app = test_app();
        app.open_fuzzy_menu(FuzzyScope::CwdTree);
        handle_fuzzy_menu(&mut app, key(KeyCode::Char('y')));
        assert!(app.prompt.is_none());
        assert!(matches!(
            app.pending,
            Some(TermCmd::Fuzzy { action: FuzzyAction::Clip, scope: FuzzyScope::CwdTree, .. })
        ));
    }

    #[test]
    fn test_error_overlay_dismisses_on_any_key() {
        let mut app = test_app();
        app.set_error("boom".to_string());
        handle_error(&mut app, key(KeyCode::Char('z')));
        assert!(app.prompt.is_none());
    }

    #[test]
    fn test_delete_confirm_ignores_other_keys() {
        let mut app = test_app();
        app.open_delete_prompt();
        handle_confirm_prompt(&mut app, key(KeyCode::Char('j')));
        assert!(matches!(app.prompt, Prompt::Delete { .. }));
        handle_confirm_prompt(&mut app, key(KeyCode::Esc));
        assert!(app.prompt.is_none());
        assert!(app.fs.exists(Path::new("/r/a.txt")));
    }
}
