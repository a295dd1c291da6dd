//! Entry-tree materialization
//!
//! Turns a root directory plus the set of expanded directories into the flat
//! pre-order list of visible rows. The list is always rebuilt wholesale; no
//! incremental diffing.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::provider::{DirChild, FsProvider};

/// One visible row in the tree view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    pub depth: usize,
}

/// Sort order within one directory: directories first, then
/// case-insensitive filename.
pub fn compare_children(a: &DirChild, b: &DirChild) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| lowercase_name(&a.path).cmp(&lowercase_name(&b.path)))
}

fn lowercase_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Build the visible entry list for `root` given the expanded set.
///
/// A directory that cannot be listed contributes no entries; the first such
/// error is returned alongside the (still usable) list so the caller can
/// surface it as a non-fatal overlay.
pub fn materialize(
    fs: &mut dyn FsProvider,
    root: &Path,
    expanded: &BTreeSet<PathBuf>,
) -> (Vec<Entry>, Option<String>) {
    let mut entries = Vec::new();
    let mut error = None;
    build_level(fs, root, 0, expanded, &mut entries, &mut error);
    (entries, error)
}

fn build_level(
    fs: &mut dyn FsProvider,
    dir: &Path,
    depth: usize,
    expanded: &BTreeSet<PathBuf>,
    out: &mut Vec<Entry>,
    error: &mut Option<String>,
) {
    let mut children = match fs.list_dir(dir) {
        Ok(children) => children,
        Err(e) => {
            if error.is_none() {
                *error = Some(format!("Cannot list {}: {}", dir.display(), e));
            }
            return;
        }
    };

    children.sort_by(compare_children);

    for child in children {
        let is_dir = child.is_dir;
        out.push(Entry { path: child.path.clone(), depth });
        if is_dir && expanded.contains(&child.path) {
            build_level(fs, &child.path, depth + 1, expanded, out, error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::provider::MemFs;

    fn child(path: &str, is_dir: bool) -> DirChild {
        DirChild { path: PathBuf::from(path), is_dir }
    }

    #[test]
    fn test_directories_sort_before_files() {
        let a = child("/r/zeta", true);
        let b = child("/r/alpha.txt", false);
        assert_eq!(compare_children(&a, &b), Ordering::Less);
        assert_eq!(compare_children(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_names_compare_case_insensitively() {
        let a = child("/r/Beta.txt", false);
        let b = child("/r/alpha.txt", false);
        assert_eq!(compare_children(&a, &b), Ordering::Greater);
        let c = child("/r/ALPHA.txt", false);
        assert_eq!(compare_children(&b, &c), Ordering::Equal);
    }

    #[test]
    fn test_collapsed_dir_contributes_one_row() {
        let mut fs = MemFs::new();
        fs.add_dir("/r/a");
        fs.add_file("/r/b.txt", b"x");

        let (entries, err) = materialize(&mut fs, Path::new("/r"), &BTreeSet::new());
        assert!(err.is_none());
        let rows: Vec<_> = entries
            .iter()
            .map(|e| (e.path.display().to_string(), e.depth))
            .collect();
        assert_eq!(rows, vec![("/r/a".to_string(), 0), ("/r/b.txt".to_string(), 0)]);
    }

    #[test]
    fn test_expanded_dir_interleaves_children() {
        let mut fs = MemFs::new();
        fs.add_dir("/r/a");
        fs.add_file("/r/a/c.txt", b"");
        fs.add_file("/r/b.txt", b"");

        let mut expanded = BTreeSet::new();
        expanded.insert(PathBuf::from("/r/a"));

        let (entries, _) = materialize(&mut fs, Path::new("/r"), &expanded);
        let rows: Vec<_> = entries
            .iter()
            .map(|e| (e.path.display().to_string(), e.depth))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("/r/a".to_string(), 0),
                ("/r/a/c.txt".to_string(), 1),
                ("/r/b.txt".to_string(), 0),
            ]
        );
    }

    #[test]
    fn test_collapsing_never_grows_the_list() {
        let mut fs = MemFs::new();
        fs.add_file("/r/a/c.txt", b"");
        fs.add_file("/r/a/d/e.txt", b"");
        fs.add_file("/r/b.txt", b"");

        let mut expanded = BTreeSet::new();
        expanded.insert(PathBuf::from("/r/a"));
        expanded.insert(PathBuf::from("/r/a/d"));

        let (full, _) = materialize(&mut fs, Path::new("/r"), &expanded);
        expanded.remove(Path::new("/r/a/d"));
        let (partial, _) = materialize(&mut fs, Path::new("/r"), &expanded);
        assert!(partial.len() <= full.len());
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let mut fs = MemFs::new();
        fs.add_file("/r/a/c.txt", b"");
        fs.add_file("/r/b.txt", b"");

        let mut expanded = BTreeSet::new();
        expanded.insert(PathBuf::from("/r/a"));

        let (first, _) = materialize(&mut fs, Path::new("/r"), &expanded);
        let (second, _) = materialize(&mut fs, Path::new("/r"), &expanded);
        assert_eq!(first, second);
    }

    #[test]
    fn test_stale_expanded_path_is_ignored() {
        let mut fs = MemFs::new();
        fs.add_file("/r/b.txt", b"");

        let mut expanded = BTreeSet::new();
        expanded.insert(PathBuf::from("/r/gone"));

        let (entries, err) = materialize(&mut fs, Path::new("/r"), &expanded);
        assert!(err.is_none());
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_unlistable_root_reports_error() {
        let mut fs = MemFs::new();
        let (entries, err) = materialize(&mut fs, Path::new("/missing"), &BTreeSet::new());
        assert!(entries.is_empty());
        assert!(err.is_some());
    }
}
