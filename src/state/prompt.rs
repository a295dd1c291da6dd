//! Modal prompt state machine.
//!
//! Exactly one prompt is active at a time and it owns all input until it
//! commits or cancels. Committing is split into a pure decide step
//! ([`Prompt::commit`], which yields a [`PromptEffect`]) and an apply step in
//! the controller that performs the filesystem work.

use std::path::{Path, PathBuf};

use crate::fs::drives::Drive;

/// What the fuzzy picker runs over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzyScope {
    /// Siblings of the current selection
    Siblings,
    /// The whole subtree under the current working directory
    CwdTree,
}

/// What to do with the fuzzy-picked path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzyAction {
    Clip,
    Edit,
    Open,
    ChangeDir,
}

/// A command the host driver executes outside the UI loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermCmd {
    Edit(PathBuf),
    OpenWithOs(PathBuf),
    RunAsProcess(PathBuf),
    CopyPathToClipboard(PathBuf),
    PersistAndChangeDir(PathBuf),
    Quit,
    QuitToLast,
    Fuzzy {
        scope: FuzzyScope,
        action: FuzzyAction,
        base: PathBuf,
    },
}

/// The active modal overlay
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Prompt {
    #[default]
    None,
    Rename {
        target: PathBuf,
        input: String,
        cursor: usize,
    },
    Move {
        target: PathBuf,
        input: String,
        cursor: usize,
    },
    Delete {
        target: PathBuf,
    },
    NewFile {
        parent: PathBuf,
        input: String,
        cursor: usize,
    },
    NewDir {
        parent: PathBuf,
        input: String,
        cursor: usize,
    },
    Replace {
        target: PathBuf,
    },
    DriveSelect {
        drives: Vec<Drive>,
        selected: usize,
    },
    HistorySelect {
        entries: Vec<(PathBuf, u64)>,
        selected: usize,
    },
    FuzzyMenu {
        scope: FuzzyScope,
    },
    Help,
    Error {
        message: String,
    },
}

/// The effect a committed prompt asks the controller to apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEffect {
    None,
    Rename { from: PathBuf, to: PathBuf },
    Move { from: PathBuf, to: PathBuf },
    Delete { target: PathBuf },
    CreateFile { path: PathBuf },
    CreateDir { path: PathBuf },
    /// Remove the collision target, then retry the pending paste
    ReplaceThenPaste { target: PathBuf },
    /// Re-root the browser (drive or history selection)
    ChangeRoot { root: PathBuf },
    /// The input was unusable; surface a message instead
    Invalid(String),
}

impl Prompt {
    pub fn is_none(&self) -> bool {
        matches!(self, Prompt::None)
    }

    /// Decide what pressing Return means for the active prompt.
    /// Pure: no filesystem access, no state change.
    pub fn commit(&self) -> PromptEffect {
        match self {
            Prompt::None | Prompt::Help | Prompt::Error { .. } | Prompt::FuzzyMenu { .. } => {
                PromptEffect::None
            }
            Prompt::Rename { target, input, .. } => {
                if input.is_empty() {
                    return PromptEffect::Invalid("Name cannot be empty".to_string());
                }
                match target.parent() {
                    Some(parent) => PromptEffect::Rename {
                        from: target.clone(),
                        to: parent.join(input),
                    },
                    None => PromptEffect::Invalid("Cannot rename a root path".to_string()),
                }
            }
            Prompt::Move { target, input, .. } => {
                if input.is_empty() {
                    return PromptEffect::Invalid("Destination cannot be empty".to_string());
                }
                match target.file_name() {
                    Some(name) => PromptEffect::Move {
                        from: target.clone(),
                        to: Path::new(input).join(name),
                    },
                    None => PromptEffect::Invalid("Cannot move a root path".to_string()),
                }
            }
            Prompt::Delete { target } => PromptEffect::Delete { target: target.clone() },
            Prompt::NewFile { parent, input, .. } => {
                if input.is_empty() {
                    PromptEffect::Invalid("Name cannot be empty".to_string())
                } else {
                    PromptEffect::CreateFile { path: parent.join(input) }
                }
            }
            Prompt::NewDir { parent, input, .. } => {
                if input.is_empty() {
                    PromptEffect::Invalid("Name cannot be empty".to_string())
                } else {
                    PromptEffect::CreateDir { path: parent.join(input) }
                }
            }
            Prompt::Replace { target } => PromptEffect::ReplaceThenPaste { target: target.clone() },
            Prompt::DriveSelect { drives, selected } => match drives.get(*selected) {
                Some(drive) => PromptEffect::ChangeRoot { root: drive.path.clone() },
                None => PromptEffect::None,
            },
            Prompt::HistorySelect { entries, selected } => match entries.get(*selected) {
                Some((path, _)) => PromptEffect::ChangeRoot { root: path.clone() },
                None => PromptEffect::None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_joins_name_onto_parent() {
        let prompt = Prompt::Rename {
            target: PathBuf::from("/d/old.txt"),
            input: "new.txt".to_string(),
            cursor: 7,
        };
        assert_eq!(
            prompt.commit(),
            PromptEffect::Rename {
                from: PathBuf::from("/d/old.txt"),
                to: PathBuf::from("/d/new.txt"),
            }
        );
    }

    #[test]
    fn test_move_keeps_the_filename() {
        let prompt = Prompt::Move {
            target: PathBuf::from("/d/f.txt"),
            input: "/elsewhere".to_string(),
            cursor: 0,
        };
        assert_eq!(
            prompt.commit(),
            PromptEffect::Move {
                from: PathBuf::from("/d/f.txt"),
                to: PathBuf::from("/elsewhere/f.txt"),
            }
        );
    }

    #[test]
    fn test_empty_names_are_rejected() {
        let rename = Prompt::Rename {
            target: PathBuf::from("/d/f"),
            input: String::new(),
            cursor: 0,
        };
        assert!(matches!(rename.commit(), PromptEffect::Invalid(_)));

        let newfile = Prompt::NewFile {
            parent: PathBuf::from("/d"),
            input: String::new(),
            cursor: 0,
        };
        assert!(matches!(newfile.commit(), PromptEffect::Invalid(_)));
    }

    #[test]
    fn test_new_entries_join_onto_the_parent_dir() {
        let prompt = Prompt::NewDir {
            parent: PathBuf::from("/d"),
            input: "sub".to_string(),
            cursor: 3,
        };
        assert_eq!(
            prompt.commit(),
            PromptEffect::CreateDir { path: PathBuf::from("/d/sub") }
        );
    }

    #[test]
    fn test_overlays_commit_to_nothing() {
        assert_eq!(Prompt::Help.commit(), PromptEffect::None);
        assert_eq!(
            Prompt::Error { message: "boom".to_string() }.commit(),
            PromptEffect::None
        );
        assert_eq!(Prompt::None.commit(), PromptEffect::None);
    }

    #[test]
    fn test_history_select_changes_root() {
        let prompt = Prompt::HistorySelect {
            entries: vec![
                (PathBuf::from("/top"), 9),
                (PathBuf::from("/second"), 4),
            ],
            selected: 1,
        };
        assert_eq!(
            prompt.commit(),
            PromptEffect::ChangeRoot { root: PathBuf::from("/second") }
        );
    }
}
