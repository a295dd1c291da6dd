//! Normal-mode key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::app::App;
use crate::state::prompt::{FuzzyScope, TermCmd};

pub fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        if let KeyCode::Char('c') = key.code {
            app.request(TermCmd::Quit);
        }
        return;
    }

    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_selection(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_selection(-1),
        KeyCode::Char('J') => app.move_selection(4),
        KeyCode::Char('K') => app.move_selection(-4),
        KeyCode::Char('h') | KeyCode::Left => app.ascend(),
        KeyCode::Char('l') | KeyCode::Right => app.descend(),
        KeyCode::Enter => app.toggle_expand(),
        KeyCode::Backspace => app.collapse_all(),
        KeyCode::Char(' ') => app.toggle_mark(),

        // Prompts
        KeyCode::Char('r') => app.open_rename_prompt(),
        KeyCode::Char('m') => app.open_move_prompt(),
        KeyCode::Char('d') => app.open_delete_prompt(),
        KeyCode::Char('n') => app.open_new_file_prompt(),
        KeyCode::Char('N') => app.open_new_dir_prompt(),
        KeyCode::Char('C') => app.open_drive_select(),
        KeyCode::Char('g') => app.open_history_select(),
        KeyCode::Char('f') => app.open_fuzzy_menu(FuzzyScope::Siblings),
        KeyCode::Char('F') => app.open_fuzzy_menu(FuzzyScope::CwdTree),
        KeyCode::Char('?') => app.open_help(),

        // Clipboard and undo
        KeyCode::Char('y') => app.copy_selection(),
        KeyCode::Char('x') => app.cut_selection(),
        KeyCode::Char('p') => app.paste(),
        KeyCode::Char('u') => app.undo_last(),

        // External commands
        KeyCode::Char('e') => app.request_on_selection(TermCmd::Edit),
        KeyCode::Char('o') => app.request_on_selection(TermCmd::OpenWithOs),
        KeyCode::Char('R') => app.request_on_selection(TermCmd::RunAsProcess),
        KeyCode::Char('Y') => app.request_on_selection(TermCmd::CopyPathToClipboard),
        KeyCode::Char('c') => app.request_change_dir(),
        KeyCode::Char('q') => app.request(TermCmd::QuitToLast),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::provider::MemFs;
    use crate::state::prompt::Prompt;
    use std::path::PathBuf;

    fn press(app: &mut App, code: KeyCode) {
        handle_normal_mode(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn test_app() -> App {
        let mut fs = MemFs::new();
        fs.add_dir("/r/a");
        fs.add_file("/r/b.txt", b"");
        fs.add_file("/r/c.txt", b"");
        App::with_fs(Box::new(fs), PathBuf::from("/r"))
    }

    #[test]
    fn test_j_and_k_step_the_selection() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.view.selected, 1);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.view.selected, 0);
        // wraps upward
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.view.selected, app.entries.len() - 1);
    }

    #[test]
    fn test_rename_key_opens_the_prompt_seeded_with_the_name() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('r'));
        assert!(matches!(&app.prompt, Prompt::Rename { input, .. } if input == "b.txt"));
    }

    #[test]
    fn test_quit_keys_set_pending_commands() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.pending, Some(TermCmd::QuitToLast));

        let mut app = test_app();
        handle_normal_mode(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.pending, Some(TermCmd::Quit));
    }

    #[test]
    fn test_edit_requests_the_selected_path() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.pending, Some(TermCmd::Edit(PathBuf::from("/r/b.txt"))));
    }
}
