//! Visit history: absolute path -> visit count, persisted across sessions.
//!
//! Stored as `count<TAB>path` lines in the config directory. The browser
//! only ever consumes the top-N ranking and bumps a count on a successful
//! change-directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config;

pub struct VisitHistory {
    counts: BTreeMap<PathBuf, u64>,
}

impl VisitHistory {
    /// Load history from disk; a missing or unreadable file is an empty
    /// history, and unparsable lines are skipped.
    pub fn load() -> Self {
        let Some(path) = config::history_file() else {
            return Self::empty();
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::empty();
        };
        let mut counts = BTreeMap::new();
        for line in content.lines() {
            let Some((count, path)) = line.split_once('\t') else {
                continue;
            };
            let Ok(count) = count.parse::<u64>() else {
                continue;
            };
            if !path.is_empty() {
                counts.insert(PathBuf::from(path), count);
            }
        }
        Self { counts }
    }

    pub fn empty() -> Self {
        Self { counts: BTreeMap::new() }
    }

    /// Record one visit; the caller persists with [`VisitHistory::save`].
    pub fn visit(&mut self, path: &Path) {
        *self.counts.entry(path.to_path_buf()).or_insert(0) += 1;
    }

    /// The `n` most visited paths, count descending, path ascending on ties.
    pub fn top(&self, n: usize) -> Vec<(PathBuf, u64)> {
        let mut ranked: Vec<(PathBuf, u64)> = self
            .counts
            .iter()
            .map(|(p, c)| (p.clone(), *c))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Persist the full map back to disk (best-effort).
    pub fn save(&self) {
        let Some(path) = config::history_file() else {
            return;
        };
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        let content: String = self
            .counts
            .iter()
            .map(|(p, c)| format!("{}\t{}\n", c, p.display()))
            .collect();
        let _ = std::fs::write(&path, content);
    }

    #[cfg(test)]
    pub fn from_counts(pairs: &[(&str, u64)]) -> Self {
        Self {
            counts: pairs
                .iter()
                .map(|(p, c)| (PathBuf::from(p), *c))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_ranks_by_count_then_path() {
        let history = VisitHistory::from_counts(&[
            ("/b", 3),
            ("/a", 3),
            ("/z", 9),
            ("/c", 1),
        ]);
        let top = history.top(3);
        assert_eq!(
            top,
            vec![
                (PathBuf::from("/z"), 9),
                (PathBuf::from("/a"), 3),
                (PathBuf::from("/b"), 3),
            ]
        );
    }

    #[test]
    fn test_top_handles_short_histories() {
        let history = VisitHistory::from_counts(&[("/only", 2)]);
        assert_eq!(history.top(5), vec![(PathBuf::from("/only"), 2)]);
        assert!(VisitHistory::empty().top(5).is_empty());
    }

    #[test]
    fn test_first_visit_inserts_at_one() {
        let mut history = VisitHistory::empty();
        history.visit(Path::new("/new"));
        assert_eq!(history.counts[Path::new("/new")], 1);
        history.visit(Path::new("/new"));
        assert_eq!(history.counts[Path::new("/new")], 2);
    }
}
