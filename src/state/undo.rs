//! Bounded undo log for destructive and creating operations.
//!
//! Records are pushed when a prompt commits and popped on `u`. Inversion is
//! a pure decision; the controller applies the resulting [`UndoAction`]
//! through the provider. Process-lifetime only, no redo.

use std::path::PathBuf;

/// Keep this many records; older ones are dropped.
const UNDO_CAP: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoKind {
    Rename,
    Move,
    Delete,
    NewFile,
    NewDir,
}

#[derive(Debug, Clone)]
pub struct UndoRecord {
    pub kind: UndoKind,
    /// Path the operation started from (for creates: the created path)
    pub source: PathBuf,
    /// Where the path ended up, for rename/move
    pub target: Option<PathBuf>,
    /// File bytes captured before a regular-file delete
    pub snapshot: Option<Vec<u8>>,
}

/// What applying an inverted record means
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoAction {
    /// Rename the target back to the source
    RenameBack { from: PathBuf, to: PathBuf },
    /// Recreate a deleted file from its snapshot
    RestoreFile { path: PathBuf, contents: Vec<u8> },
    /// Remove a created file or directory
    RemovePath(PathBuf),
    /// Nothing to restore (directory delete); still consumes the record
    Nothing,
}

impl UndoRecord {
    /// Invert this record into the action that undoes it.
    pub fn invert(self) -> UndoAction {
        match self.kind {
            UndoKind::Rename | UndoKind::Move => match self.target {
                Some(target) => UndoAction::RenameBack { from: target, to: self.source },
                None => UndoAction::Nothing,
            },
            UndoKind::Delete => match self.snapshot {
                Some(contents) => UndoAction::RestoreFile { path: self.source, contents },
                None => UndoAction::Nothing,
            },
            UndoKind::NewFile | UndoKind::NewDir => UndoAction::RemovePath(self.source),
        }
    }
}

/// Bounded LIFO of undo records
#[derive(Debug, Default)]
pub struct UndoLog {
    records: Vec<UndoRecord>,
}

impl UndoLog {
    pub fn push(&mut self, record: UndoRecord) {
        if self.records.len() == UNDO_CAP {
            self.records.remove(0);
        }
        self.records.push(record);
    }

    pub fn pop(&mut self) -> Option<UndoRecord> {
        self.records.pop()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
