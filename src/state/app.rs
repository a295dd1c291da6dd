//! Browser state and the operations behind every key.
//!
//! `App` owns all mutable session state (working directory, expanded set,
//! selection, clipboard, undo log, prompt) and is only ever touched from the
//! input-handling thread. Filesystem work goes through the injected
//! provider; expected failures become an `Error` prompt, never a panic.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config::Config;
use crate::fs::drives;
use crate::fs::provider::{FsProvider, LocalFs};
use crate::fs::tree::{self, Entry};
use crate::history::VisitHistory;
use crate::ui::Theme;

use super::clipboard::{ClipboardState, PasteOutcome};
use super::prompt::{FuzzyAction, FuzzyScope, Prompt, PromptEffect, TermCmd};
use super::undo::{UndoAction, UndoKind, UndoLog, UndoRecord};
use super::view::Viewport;

/// Main application state
pub struct App {
    /// Filesystem capability; `LocalFs` in production, in-memory in tests
    pub fs: Box<dyn FsProvider>,

    // === Tree state ===
    pub cwd: PathBuf,
    pub entries: Vec<Entry>,
    pub expanded: BTreeSet<PathBuf>,
    pub marked: BTreeSet<PathBuf>,

    // === Selection ===
    pub view: Viewport,
    /// Tree rows the renderer reported on the last frame
    pub view_height: usize,
    /// Selection indices recorded on each descend, restored on ascend
    pub parent_stack: Vec<usize>,

    // === Operations ===
    pub clipboard: ClipboardState,
    pub undo: UndoLog,
    pub prompt: Prompt,
    /// Command for the host driver to execute outside the UI loop
    pub pending: Option<TermCmd>,

    // === Session ===
    pub history: VisitHistory,
    pub config: Config,
    pub theme: Theme,
}

impl App {
    /// Create the application rooted at the configured (or current) directory
    pub fn new(config: Config) -> Self {
        let cwd = config
            .general
            .start_path
            .as_ref()
            .map(PathBuf::from)
            .filter(|p| p.is_dir())
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("/"));
        let theme = Theme::from_config(&config.theme);
        let mut app = Self {
            fs: Box::new(LocalFs::new()),
            cwd,
            entries: Vec::new(),
            expanded: BTreeSet::new(),
            marked: BTreeSet::new(),
            view: Viewport::default(),
            view_height: 20,
            parent_stack: Vec::new(),
            clipboard: ClipboardState::default(),
            undo: UndoLog::default(),
            prompt: Prompt::None,
            pending: None,
            history: VisitHistory::load(),
            config,
            theme,
        };
        app.refresh();
        app
    }

    #[cfg(test)]
    pub fn with_fs(fs: Box<dyn FsProvider>, cwd: PathBuf) -> Self {
        let mut app = Self {
            fs,
            cwd,
            entries: Vec::new(),
            expanded: BTreeSet::new(),
            marked: BTreeSet::new(),
            view: Viewport::default(),
            view_height: 10,
            parent_stack: Vec::new(),
            clipboard: ClipboardState::default(),
            undo: UndoLog::default(),
            prompt: Prompt::None,
            pending: None,
            history: VisitHistory::empty(),
            config: Config::default(),
            theme: Theme::default(),
        };
        app.refresh();
        app
    }

    // ========================================================================
    // TREE
    // ========================================================================

    /// Rebuild the visible entry list from disk. Always wholesale; a listing
    /// failure inside the tree surfaces as a non-fatal error overlay.
    pub fn refresh(&mut self) {
        let (entries, error) = tree::materialize(self.fs.as_mut(), &self.cwd, &self.expanded);
        self.entries = entries;
        self.view.clamp_to_len(self.entries.len());
        if let Some(message) = error
            && self.prompt.is_none()
        {
            self.prompt = Prompt::Error { message };
        }
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.view.selected)
    }

    pub fn selected_path(&self) -> Option<PathBuf> {
        self.selected_entry().map(|e| e.path.clone())
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.entries.len();
        let height = self.view_height;
        self.view.move_by(delta, len, height);
    }

    /// Make the selected directory the new root, remembering where we were
    pub fn descend(&mut self) {
        let Some(path) = self.selected_path() else {
            return;
        };
        if self.fs.is_dir(&path) {
            self.parent_stack.push(self.view.selected);
            self.cwd = path;
            self.view.reset();
            self.refresh();
        }
    }

    /// Re-root at the parent directory, restoring the selection we had
    /// there if this retraces a previous descend.
    pub fn ascend(&mut self) {
        let Some(parent) = self.cwd.parent().map(|p| p.to_path_buf()) else {
            return;
        };
        let restored = self.parent_stack.pop();
        self.cwd = parent;
        self.view.reset();
        self.refresh();
        if let Some(index) = restored {
            self.view.jump_to(index, self.entries.len(), self.view_height);
        }
    }

    /// Expand or collapse the selected directory. Removal happens even for
    /// paths that stopped being directories, which drops stale members.
    pub fn toggle_expand(&mut self) {
        let Some(path) = self.selected_path() else {
            return;
        };
        if !self.expanded.remove(&path) && self.fs.is_dir(&path) {
            self.expanded.insert(path);
        }
        self.refresh();
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
        self.parent_stack.clear();
        self.refresh();
    }

    pub fn toggle_mark(&mut self) {
        let Some(path) = self.selected_path() else {
            return;
        };
        if !self.marked.remove(&path) {
            self.marked.insert(path);
        }
    }

    /// Re-root the browser (drive or history selection); the expansion
    /// state and the descend trail belong to the old root.
    fn change_root(&mut self, root: PathBuf) {
        if !self.fs.is_dir(&root) {
            self.set_error(format!("Not a directory: {}", root.display()));
            return;
        }
        self.cwd = root;
        self.expanded.clear();
        self.parent_stack.clear();
        self.marked.clear();
        self.view.reset();
        self.refresh();
    }

    // ========================================================================
    // PROMPTS
    // ========================================================================

    pub fn set_error(&mut self, message: String) {
        self.prompt = Prompt::Error { message };
    }

    pub fn open_rename_prompt(&mut self) {
        let Some(target) = self.selected_path() else {
            return;
        };
        let input = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        // cursor is a char index, not a byte offset
        let cursor = input.chars().count();
        self.prompt = Prompt::Rename { target, input, cursor };
    }

    pub fn open_move_prompt(&mut self) {
        let Some(target) = self.selected_path() else {
            return;
        };
        // Seeded with the target's own path; the commit joins the filename
        // onto whatever directory the input is edited into.
        let input = target.display().to_string();
        let cursor = input.chars().count();
        self.prompt = Prompt::Move { target, input, cursor };
    }

    pub fn open_delete_prompt(&mut self) {
        let Some(target) = self.selected_path() else {
            return;
        };
        self.prompt = Prompt::Delete { target };
    }

    pub fn open_new_file_prompt(&mut self) {
        self.prompt = Prompt::NewFile {
            parent: self.creation_parent(),
            input: String::new(),
            cursor: 0,
        };
    }

    pub fn open_new_dir_prompt(&mut self) {
        self.prompt = Prompt::NewDir {
            parent: self.creation_parent(),
            input: String::new(),
            cursor: 0,
        };
    }

    /// New entries land in the selected directory, or next to a selected file
    fn creation_parent(&mut self) -> PathBuf {
        match self.selected_path() {
            Some(p) if self.fs.is_dir(&p) => p,
            Some(p) => p
                .parent()
                .map(|q| q.to_path_buf())
                .unwrap_or_else(|| self.cwd.clone()),
            None => self.cwd.clone(),
        }
    }

    pub fn open_drive_select(&mut self) {
        let drives = drives::list();
        if drives.is_empty() {
            self.set_error("No drives found".to_string());
            return;
        }
        self.prompt = Prompt::DriveSelect { drives, selected: 0 };
    }

    pub fn open_history_select(&mut self) {
        let entries = self.history.top(self.config.general.history_limit);
        if entries.is_empty() {
            self.set_error("No visit history yet".to_string());
            return;
        }
        self.prompt = Prompt::HistorySelect { entries, selected: 0 };
    }

    pub fn open_fuzzy_menu(&mut self, scope: FuzzyScope) {
        self.prompt = Prompt::FuzzyMenu { scope };
    }

    pub fn open_help(&mut self) {
        self.prompt = Prompt::Help;
    }

    /// Commit the active prompt: decide, drop the overlay, apply.
    pub fn commit_prompt(&mut self) {
        let effect = self.prompt.commit();
        self.prompt = Prompt::None;
        self.apply_effect(effect);
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = Prompt::None;
    }

    /// Apply a committed prompt effect through the provider, pushing undo
    /// records for the operations that are reversible.
    pub fn apply_effect(&mut self, effect: PromptEffect) {
        match effect {
            PromptEffect::None => {}
            PromptEffect::Invalid(message) => self.set_error(message),
            PromptEffect::Rename { from, to } => match self.fs.rename(&from, &to) {
                Ok(()) => {
                    self.undo.push(UndoRecord {
                        kind: UndoKind::Rename,
                        source: from,
                        target: Some(to),
                        snapshot: None,
                    });
                    self.refresh();
                }
                Err(e) => self.set_error(format!("Rename failed: {}", e)),
            },
            PromptEffect::Move { from, to } => match self.fs.rename(&from, &to) {
                Ok(()) => {
                    self.undo.push(UndoRecord {
                        kind: UndoKind::Move,
                        source: from,
                        target: Some(to),
                        snapshot: None,
                    });
                    self.refresh();
                }
                Err(e) => self.set_error(format!("Move failed: {}", e)),
            },
            PromptEffect::Delete { target } => {
                // Capture file bytes before they are gone; directory trees
                // are deleted without capture and cannot be restored.
                let snapshot = if self.fs.is_dir(&target) {
                    None
                } else {
                    self.fs.read_file(&target).ok()
                };
                match self.fs.delete(&target) {
                    Ok(()) => {
                        self.undo.push(UndoRecord {
                            kind: UndoKind::Delete,
                            source: target,
                            target: None,
                            snapshot,
                        });
                        self.refresh();
                    }
                    Err(e) => self.set_error(format!("Delete failed: {}", e)),
                }
            }
            PromptEffect::CreateFile { path } => match self.fs.create_file(&path) {
                Ok(()) => {
                    self.undo.push(UndoRecord {
                        kind: UndoKind::NewFile,
                        source: path,
                        target: None,
                        snapshot: None,
                    });
                    self.refresh();
                }
                Err(e) => self.set_error(format!("Create failed: {}", e)),
            },
            PromptEffect::CreateDir { path } => match self.fs.create_dir(&path) {
                Ok(()) => {
                    self.undo.push(UndoRecord {
                        kind: UndoKind::NewDir,
                        source: path,
                        target: None,
                        snapshot: None,
                    });
                    self.refresh();
                }
                Err(e) => self.set_error(format!("Create failed: {}", e)),
            },
            PromptEffect::ReplaceThenPaste { target } => match self.fs.delete(&target) {
                Ok(()) => self.paste(),
                Err(e) => self.set_error(format!("Replace failed: {}", e)),
            },
            PromptEffect::ChangeRoot { root } => self.change_root(root),
        }
    }

    // ========================================================================
    // CLIPBOARD
    // ========================================================================

    pub fn copy_selection(&mut self) {
        if let Some(path) = self.selected_path() {
            self.clipboard.set_copy(path);
        }
    }

    pub fn cut_selection(&mut self) {
        if let Some(path) = self.selected_path() {
            self.clipboard.set_cut(path);
        }
    }

    /// Paste into the current root. A copy collision raises the Replace
    /// prompt and keeps the clipboard so its commit can retry.
    pub fn paste(&mut self) {
        let fs = self.fs.as_mut();
        let plan = self.clipboard.plan_paste(&self.cwd, |p| fs.exists(p));
        match plan {
            PasteOutcome::Nothing => {}
            PasteOutcome::Conflict { dest } => {
                self.prompt = Prompt::Replace { target: dest };
            }
            PasteOutcome::Copy { src, dest } => match self.fs.copy(&src, &dest) {
                Ok(()) => {
                    self.clipboard.clear();
                    self.refresh();
                }
                Err(e) => self.set_error(format!("Paste failed: {}", e)),
            },
            PasteOutcome::Move { src, dest } => match self.fs.rename(&src, &dest) {
                Ok(()) => {
                    self.clipboard.clear();
                    self.refresh();
                }
                Err(e) => self.set_error(format!("Paste failed: {}", e)),
            },
        }
    }

    // ========================================================================
    // UNDO
    // ========================================================================

    /// Invert and apply the most recent undo record. An empty log or a
    /// record with nothing to restore is a silent no-op.
    pub fn undo_last(&mut self) {
        let Some(record) = self.undo.pop() else {
            return;
        };
        let result = match record.invert() {
            UndoAction::RenameBack { from, to } => self.fs.rename(&from, &to),
            UndoAction::RestoreFile { path, contents } => self.fs.write_file(&path, &contents),
            UndoAction::RemovePath(path) => self.fs.delete(&path),
            UndoAction::Nothing => Ok(()),
        };
        match result {
            Ok(()) => self.refresh(),
            Err(e) => self.set_error(format!("Undo failed: {}", e)),
        }
    }

    // ========================================================================
    // TERMINAL COMMANDS
    // ========================================================================

    pub fn request(&mut self, cmd: TermCmd) {
        self.pending = Some(cmd);
    }

    /// Request an external command over the selected entry's path
    pub fn request_on_selection(&mut self, make: impl FnOnce(PathBuf) -> TermCmd) {
        if let Some(path) = self.selected_path() {
            self.pending = Some(make(path));
        }
    }

    /// `c`: persist the selected directory (or the file's parent) and exit
    /// into it.
    pub fn request_change_dir(&mut self) {
        let Some(path) = self.selected_path() else {
            return;
        };
        let target = if self.fs.is_dir(&path) {
            path
        } else {
            match path.parent() {
                Some(p) => p.to_path_buf(),
                None => return,
            }
        };
        self.pending = Some(TermCmd::PersistAndChangeDir(target));
    }

    /// A letter picked in the fuzzy menu: dismiss it and hand the driver a
    /// fuzzy command rooted at the right base directory.
    pub fn request_fuzzy(&mut self, scope: FuzzyScope, action: FuzzyAction) {
        let base = match scope {
            FuzzyScope::CwdTree => self.cwd.clone(),
            FuzzyScope::Siblings => self
                .selected_path()
                .and_then(|p| p.parent().map(|q| q.to_path_buf()))
                .unwrap_or_else(|| self.cwd.clone()),
        };
        self.prompt = Prompt::None;
        self.pending = Some(TermCmd::Fuzzy { scope, action, base });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::provider::MemFs;
    use std::path::Path;

    fn app_with(build: impl FnOnce(&mut MemFs)) -> App {
        let mut fs = MemFs::new();
        fs.add_dir("/r");
        build(&mut fs);
        App::with_fs(Box::new(fs), PathBuf::from("/r"))
    }

    fn select(app: &mut App, path: &str) {
        let index = app
            .entries
            .iter()
            .position(|e| e.path == Path::new(path))
            .expect("path not visible");
        app.view.jump_to(index, app.entries.len(), app.view_height);
    }

    fn type_into_prompt(app: &mut App, text: &str) {
        match &mut app.prompt {
            Prompt::Rename { input, cursor, .. }
            | Prompt::Move { input, cursor, .. }
            | Prompt::NewFile { input, cursor, .. }
            | Prompt::NewDir { input, cursor, .. } => {
                input.clear();
                input.push_str(text);
                *cursor = input.chars().count();
            }
            other => panic!("not a text prompt: {:?}", other),
        }
    }

    #[test]
    fn test_new_file_in_directory_then_undo() {
        let mut app = app_with(|fs| {
            fs.add_dir("/r/d");
        });
        select(&mut app, "/r/d");
        app.open_new_file_prompt();
        type_into_prompt(&mut app, "new.txt");
        app.commit_prompt();

        assert!(app.prompt.is_none());
        assert!(app.fs.exists(Path::new("/r/d/new.txt")));
        assert_eq!(app.undo.len(), 1);

        app.undo_last();
        assert!(!app.fs.exists(Path::new("/r/d/new.txt")));
        assert!(app.fs.is_dir(Path::new("/r/d")));
        assert!(app.undo.is_empty());
    }

    #[test]
    fn test_new_file_next_to_selected_file() {
        let mut app = app_with(|fs| {
            fs.add_file("/r/d/old.txt", b"");
        });
        app.expanded.insert(PathBuf::from("/r/d"));
        app.refresh();
        select(&mut app, "/r/d/old.txt");
        app.open_new_file_prompt();
        // a file selection retargets creation at its parent directory
        assert!(
            matches!(&app.prompt, Prompt::NewFile { parent, .. } if parent == Path::new("/r/d"))
        );
    }

    #[test]
    fn test_rename_then_undo_restores_the_name() {
        let mut app = app_with(|fs| {
            fs.add_file("/r/a.txt", b"body");
        });
        select(&mut app, "/r/a.txt");
        app.open_rename_prompt();
        assert!(matches!(&app.prompt, Prompt::Rename { input, .. } if input == "a.txt"));
        type_into_prompt(&mut app, "b.txt");
        app.commit_prompt();

        assert!(app.fs.exists(Path::new("/r/b.txt")));
        assert!(!app.fs.exists(Path::new("/r/a.txt")));

        app.undo_last();
        assert!(app.fs.exists(Path::new("/r/a.txt")));
        assert_eq!(app.fs.read_file(Path::new("/r/a.txt")).unwrap(), b"body");
    }

    #[test]
    fn test_move_prompt_seeds_the_absolute_path() {
        let mut app = app_with(|fs| {
            fs.add_file("/r/a.txt", b"");
        });
        select(&mut app, "/r/a.txt");
        app.open_move_prompt();
        assert!(matches!(
            &app.prompt,
            Prompt::Move { input, cursor, .. } if input == "/r/a.txt" && *cursor == 8
        ));
    }

    #[test]
    fn test_rename_prompt_cursor_counts_chars() {
        let mut app = app_with(|fs| {
            fs.add_file("/r/café", b"");
        });
        select(&mut app, "/r/café");
        app.open_rename_prompt();
        // "café" is 4 chars but 5 bytes
        assert!(matches!(
            &app.prompt,
            Prompt::Rename { input, cursor, .. } if input == "café" && *cursor == 4
        ));
    }

    #[test]
    fn test_delete_file_then_undo_restores_contents() {
        let mut app = app_with(|fs| {
            fs.add_file("/r/f.txt", b"precious");
        });
        select(&mut app, "/r/f.txt");
        app.open_delete_prompt();
        app.commit_prompt();
        assert!(!app.fs.exists(Path::new("/r/f.txt")));

        app.undo_last();
        assert_eq!(app.fs.read_file(Path::new("/r/f.txt")).unwrap(), b"precious");
    }

    #[test]
    fn test_delete_directory_is_not_restored_by_undo() {
        let mut app = app_with(|fs| {
            fs.add_file("/r/d/inner.txt", b"x");
        });
        select(&mut app, "/r/d");
        app.open_delete_prompt();
        app.commit_prompt();
        assert!(!app.fs.exists(Path::new("/r/d")));
        assert_eq!(app.undo.len(), 1);

        // the record pops but restores nothing, silently
        app.undo_last();
        assert!(!app.fs.exists(Path::new("/r/d")));
        assert!(app.prompt.is_none());
        assert!(app.undo.is_empty());
    }

    #[test]
    fn test_copy_paste_conflict_prompts_before_touching_disk() {
        let mut app = app_with(|fs| {
            fs.add_file("/r/sub/f.txt", b"incoming");
            fs.add_file("/r/f.txt", b"original");
        });
        app.expanded.insert(PathBuf::from("/r/sub"));
        app.refresh();
        select(&mut app, "/r/sub/f.txt");
        app.copy_selection();
        app.paste();

        assert!(
            matches!(&app.prompt, Prompt::Replace { target } if target == Path::new("/r/f.txt"))
        );
        // nothing mutated yet, clipboard retained for the retry
        assert_eq!(app.fs.read_file(Path::new("/r/f.txt")).unwrap(), b"original");
        assert!(!app.clipboard.is_empty());

        app.commit_prompt();
        assert_eq!(app.fs.read_file(Path::new("/r/f.txt")).unwrap(), b"incoming");
        assert!(app.clipboard.is_empty());
    }

    #[test]
    fn test_cut_paste_moves_without_prompting() {
        let mut app = app_with(|fs| {
            fs.add_file("/r/sub/f.txt", b"moved");
        });
        app.expanded.insert(PathBuf::from("/r/sub"));
        app.refresh();
        select(&mut app, "/r/sub/f.txt");
        app.cut_selection();
        app.paste();

        assert!(app.prompt.is_none());
        assert!(app.fs.exists(Path::new("/r/f.txt")));
        assert!(!app.fs.exists(Path::new("/r/sub/f.txt")));
        assert!(app.clipboard.is_empty());
    }

    #[test]
    fn test_descend_and_ascend_restore_the_parent_selection() {
        let mut app = app_with(|fs| {
            fs.add_dir("/r/a");
            fs.add_dir("/r/b");
            fs.add_file("/r/b/inner.txt", b"");
        });
        select(&mut app, "/r/b");
        let remembered = app.view.selected;
        app.descend();
        assert_eq!(app.cwd, Path::new("/r/b"));
        assert_eq!(app.view.selected, 0);

        app.ascend();
        assert_eq!(app.cwd, Path::new("/r"));
        assert_eq!(app.view.selected, remembered);
        assert!(app.parent_stack.is_empty());
    }

    #[test]
    fn test_toggle_expand_drops_stale_members() {
        let mut app = app_with(|fs| {
            fs.add_file("/r/used-to-be-a-dir", b"now a file");
        });
        app.expanded.insert(PathBuf::from("/r/used-to-be-a-dir"));
        select(&mut app, "/r/used-to-be-a-dir");
        app.toggle_expand();
        // stale member removed, and not re-added since it is not a directory
        assert!(app.expanded.is_empty());
        app.toggle_expand();
        assert!(app.expanded.is_empty());
    }

    #[test]
    fn test_change_root_resets_expansion_and_trail() {
        let mut app = app_with(|fs| {
            fs.add_dir("/r/a");
            fs.add_dir("/other");
            fs.add_file("/other/x.txt", b"");
        });
        select(&mut app, "/r/a");
        app.descend();
        app.expanded.insert(PathBuf::from("/r/a"));

        app.apply_effect(PromptEffect::ChangeRoot { root: PathBuf::from("/other") });
        assert_eq!(app.cwd, Path::new("/other"));
        assert!(app.expanded.is_empty());
        assert!(app.parent_stack.is_empty());
        assert_eq!(app.view.selected, 0);
    }

    #[test]
    fn test_vanished_target_surfaces_an_error_prompt() {
        let mut app = app_with(|fs| {
            fs.add_file("/r/f.txt", b"");
        });
        select(&mut app, "/r/f.txt");
        app.open_rename_prompt();
        type_into_prompt(&mut app, "g.txt");
        // the file disappears between render and commit
        app.fs.delete(Path::new("/r/f.txt")).unwrap();
        app.commit_prompt();
        assert!(matches!(app.prompt, Prompt::Error { .. }));
        // no undo record for a failed operation
        assert!(app.undo.is_empty());
    }

    #[test]
    fn test_failed_operation_leaves_entries_untouched() {
        let mut app = app_with(|fs| {
            fs.add_file("/r/f.txt", b"");
        });
        let before = app.entries.clone();
        select(&mut app, "/r/f.txt");
        app.apply_effect(PromptEffect::Move {
            from: PathBuf::from("/r/missing"),
            to: PathBuf::from("/elsewhere/missing"),
        });
        assert!(matches!(app.prompt, Prompt::Error { .. }));
        assert_eq!(app.entries, before);
    }

    #[test]
    fn test_fuzzy_request_uses_the_right_base() {
        let mut app = app_with(|fs| {
            fs.add_file("/r/sub/f.txt", b"");
        });
        app.expanded.insert(PathBuf::from("/r/sub"));
        app.refresh();
        select(&mut app, "/r/sub/f.txt");
        app.open_fuzzy_menu(FuzzyScope::Siblings);
        app.request_fuzzy(FuzzyScope::Siblings, FuzzyAction::Edit);
        assert!(app.prompt.is_none());
        assert!(matches!(
            app.pending,
            Some(TermCmd::Fuzzy { base: ref b, action: FuzzyAction::Edit, .. })
                if b == Path::new("/r/sub")
        ));
    }
}
