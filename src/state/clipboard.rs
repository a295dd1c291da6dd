//! Single-slot copy/cut clipboard.
//!
//! Holds at most one pending path; setting copy clears a pending cut and
//! vice versa. The paste decision is pure — the controller applies the
//! resulting [`PasteOutcome`] through the filesystem provider.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClipboardState {
    #[default]
    Empty,
    Copy(PathBuf),
    Cut(PathBuf),
}

/// What a paste request resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Clipboard empty or unusable source
    Nothing,
    /// Copy-paste would overwrite an existing destination; ask first
    Conflict { dest: PathBuf },
    /// Recursive copy, then clear the clipboard
    Copy { src: PathBuf, dest: PathBuf },
    /// Rename into place, then clear the clipboard.
    /// Cut deliberately skips the conflict check (rename semantics apply).
    Move { src: PathBuf, dest: PathBuf },
}

impl ClipboardState {
    pub fn set_copy(&mut self, path: PathBuf) {
        *self = ClipboardState::Copy(path);
    }

    pub fn set_cut(&mut self, path: PathBuf) {
        *self = ClipboardState::Cut(path);
    }

    pub fn clear(&mut self) {
        *self = ClipboardState::Empty;
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ClipboardState::Empty)
    }

    /// The pending source path, if any
    pub fn source(&self) -> Option<&Path> {
        match self {
            ClipboardState::Empty => None,
            ClipboardState::Copy(p) | ClipboardState::Cut(p) => Some(p),
        }
    }

    /// Decide what pasting into `dest_dir` means. `exists` probes the
    /// destination so this stays testable without a filesystem.
    pub fn plan_paste(&self, dest_dir: &Path, exists: impl FnOnce(&Path) -> bool) -> PasteOutcome {
        let (src, is_cut) = match self {
            ClipboardState::Empty => return PasteOutcome::Nothing,
            ClipboardState::Copy(p) => (p, false),
            ClipboardState::Cut(p) => (p, true),
        };
        let Some(name) = src.file_name() else {
            return PasteOutcome::Nothing;
        };
        let dest = dest_dir.join(name);
        if is_cut {
            PasteOutcome::Move { src: src.clone(), dest }
        } else if exists(&dest) {
            PasteOutcome::Conflict { dest }
        } else {
            PasteOutcome::Copy { src: src.clone(), dest }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_and_cut_are_mutually_exclusive() {
        let mut clip = ClipboardState::default();
        clip.set_copy(PathBuf::from("/a"));
        clip.set_cut(PathBuf::from("/b"));
        assert_eq!(clip, ClipboardState::Cut(PathBuf::from("/b")));
        clip.set_copy(PathBuf::from("/c"));
        assert_eq!(clip, ClipboardState::Copy(PathBuf::from("/c")));
    }

    #[test]
    fn test_empty_clipboard_pastes_nothing() {
        let clip = ClipboardState::default();
        assert_eq!(
            clip.plan_paste(Path::new("/dst"), |_| true),
            PasteOutcome::Nothing
        );
    }

    #[test]
    fn test_copy_paste_without_collision() {
        let mut clip = ClipboardState::default();
        clip.set_copy(PathBuf::from("/src/f.txt"));
        assert_eq!(
            clip.plan_paste(Path::new("/dst"), |_| false),
            PasteOutcome::Copy {
                src: PathBuf::from("/src/f.txt"),
                dest: PathBuf::from("/dst/f.txt"),
            }
        );
    }

    #[test]
    fn test_copy_paste_collision_raises_conflict() {
        let mut clip = ClipboardState::default();
        clip.set_copy(PathBuf::from("/src/f.txt"));
        assert_eq!(
            clip.plan_paste(Path::new("/dst"), |p| p == Path::new("/dst/f.txt")),
            PasteOutcome::Conflict { dest: PathBuf::from("/dst/f.txt") }
        );
        // conflict must not clear the clipboard; the replace prompt retries
        assert!(!clip.is_empty());
    }

    #[test]
    fn test_cut_paste_skips_the_conflict_check() {
        let mut clip = ClipboardState::default();
        clip.set_cut(PathBuf::from("/src/f.txt"));
        assert_eq!(
            clip.plan_paste(Path::new("/dst"), |_| true),
            PasteOutcome::Move {
                src: PathBuf::from("/src/f.txt"),
                dest: PathBuf::from("/dst/f.txt"),
            }
        );
    }
}
