//! Filesystem provider boundary
//!
//! Every filesystem touch the browser makes goes through [`FsProvider`], so
//! the state machine can be exercised in tests against an in-memory
//! implementation instead of a real disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::utils;

/// Error type for provider operations
#[derive(Error, Debug)]
pub enum FsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Already exists: {0}")]
    AlreadyExists(String),
    #[error("Not a directory: {0}")]
    NotADirectory(String),
}

pub type FsResult<T> = Result<T, FsError>;

/// One child of a listed directory, with the directory bit captured at
/// listing time so the materializer doesn't re-stat every path.
#[derive(Debug, Clone)]
pub struct DirChild {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Trait for browser filesystem backends
pub trait FsProvider {
    /// List the immediate children of a directory (unsorted)
    fn list_dir(&mut self, path: &Path) -> FsResult<Vec<DirChild>>;

    /// Whether the path currently exists
    fn exists(&mut self, path: &Path) -> bool;

    /// Whether the path is a directory
    fn is_dir(&mut self, path: &Path) -> bool;

    /// Read a file's bytes
    fn read_file(&mut self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write a file's bytes, creating or truncating it
    fn write_file(&mut self, path: &Path, data: &[u8]) -> FsResult<()>;

    /// Create an empty file
    fn create_file(&mut self, path: &Path) -> FsResult<()>;

    /// Create a directory
    fn create_dir(&mut self, path: &Path) -> FsResult<()>;

    /// Rename/move a file or directory
    fn rename(&mut self, from: &Path, to: &Path) -> FsResult<()>;

    /// Copy a file or directory recursively
    fn copy(&mut self, from: &Path, to: &Path) -> FsResult<()>;

    /// Delete a file, or a directory recursively
    fn delete(&mut self, path: &Path) -> FsResult<()>;
}

/// Provider backed by the local filesystem
#[derive(Debug, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FsProvider for LocalFs {
    fn list_dir(&mut self, path: &Path) -> FsResult<Vec<DirChild>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // file_type avoids a second stat; fall back to path probing on error
            let is_dir = entry
                .file_type()
                .map(|t| t.is_dir())
                .unwrap_or_else(|_| entry.path().is_dir());
            children.push(DirChild { path: entry.path(), is_dir });
        }
        Ok(children)
    }

    fn exists(&mut self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&mut self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_file(&mut self, path: &Path) -> FsResult<Vec<u8>> {
        Ok(fs::read(path)?)
    }

    fn write_file(&mut self, path: &Path, data: &[u8]) -> FsResult<()> {
        Ok(fs::write(path, data)?)
    }

    fn create_file(&mut self, path: &Path) -> FsResult<()> {
        if path.exists() {
            return Err(FsError::AlreadyExists(path.display().to_string()));
        }
        Ok(fs::write(path, b"")?)
    }

    fn create_dir(&mut self, path: &Path) -> FsResult<()> {
        Ok(fs::create_dir(path)?)
    }

    fn rename(&mut self, from: &Path, to: &Path) -> FsResult<()> {
        utils::move_path(from, to).map_err(FsError::from)
    }

    fn copy(&mut self, from: &Path, to: &Path) -> FsResult<()> {
        utils::copy_path(from, to).map_err(FsError::from)
    }

    fn delete(&mut self, path: &Path) -> FsResult<()> {
        utils::delete_path(path).map_err(FsError::from)
    }
}

/// In-memory provider used by state-machine tests.
#[cfg(test)]
pub struct MemFs {
    nodes: std::collections::BTreeMap<PathBuf, MemNode>,
}

#[cfg(test)]
#[derive(Debug, Clone)]
enum MemNode {
    Dir,
    File(Vec<u8>),
}

#[cfg(test)]
impl MemFs {
    pub fn new() -> Self {
        let mut nodes = std::collections::BTreeMap::new();
        nodes.insert(PathBuf::from("/"), MemNode::Dir);
        Self { nodes }
    }

    pub fn add_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        let path = path.into();
        for ancestor in path.ancestors() {
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(MemNode::Dir);
        }
        self
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, data: &[u8]) -> &mut Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.nodes.insert(path, MemNode::File(data.to_vec()));
        self
    }

    fn subtree_keys(&self, root: &Path) -> Vec<PathBuf> {
        self.nodes
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
impl FsProvider for MemFs {
    fn list_dir(&mut self, path: &Path) -> FsResult<Vec<DirChild>> {
        match self.nodes.get(path) {
            Some(MemNode::Dir) => {}
            Some(MemNode::File(_)) => {
                return Err(FsError::NotADirectory(path.display().to_string()));
            }
            None => return Err(FsError::NotFound(path.display().to_string())),
        }
        let children = self
            .nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .map(|(p, n)| DirChild {
                path: p.clone(),
                is_dir: matches!(n, MemNode::Dir),
            })
            .collect();
        Ok(children)
    }

    fn exists(&mut self, path: &Path) -> bool {
        self.nodes.contains_key(path)
    }

    fn is_dir(&mut self, path: &Path) -> bool {
        matches!(self.nodes.get(path), Some(MemNode::Dir))
    }

    fn read_file(&mut self, path: &Path) -> FsResult<Vec<u8>> {
        match self.nodes.get(path) {
            Some(MemNode::File(data)) => Ok(data.clone()),
            _ => Err(FsError::NotFound(path.display().to_string())),
        }
    }

    fn write_file(&mut self, path: &Path, data: &[u8]) -> FsResult<()> {
        match path.parent() {
            Some(parent) if matches!(self.nodes.get(parent), Some(MemNode::Dir)) => {
                self.nodes.insert(path.to_path_buf(), MemNode::File(data.to_vec()));
                Ok(())
            }
            _ => Err(FsError::NotFound(path.display().to_string())),
        }
    }

    fn create_file(&mut self, path: &Path) -> FsResult<()> {
        if self.nodes.contains_key(path) {
            return Err(FsError::AlreadyExists(path.display().to_string()));
        }
        self.write_file(path, b"")
    }

    fn create_dir(&mut self, path: &Path) -> FsResult<()> {
        if self.nodes.contains_key(path) {
            return Err(FsError::AlreadyExists(path.display().to_string()));
        }
        match path.parent() {
            Some(parent) if matches!(self.nodes.get(parent), Some(MemNode::Dir)) => {
                self.nodes.insert(path.to_path_buf(), MemNode::Dir);
                Ok(())
            }
            _ => Err(FsError::NotFound(path.display().to_string())),
        }
    }

    fn rename(&mut self, from: &Path, to: &Path) -> FsResult<()> {
        if !self.nodes.contains_key(from) {
            return Err(FsError::NotFound(from.display().to_string()));
        }
        for key in self.subtree_keys(from) {
            let node = self.nodes.remove(&key).unwrap();
            let suffix = key.strip_prefix(from).unwrap().to_path_buf();
            self.nodes.insert(to.join(suffix), node);
        }
        Ok(())
    }

    fn copy(&mut self, from: &Path, to: &Path) -> FsResult<()> {
        if !self.nodes.contains_key(from) {
            return Err(FsError::NotFound(from.display().to_string()));
        }
        for key in self.subtree_keys(from) {
            let node = self.nodes.get(&key).unwrap().clone();
            let suffix = key.strip_prefix(from).unwrap().to_path_buf();
            self.nodes.insert(to.join(suffix), node);
        }
        Ok(())
    }

    fn delete(&mut self, path: &Path) -> FsResult<()> {
        if !self.nodes.contains_key(path) {
            return Err(FsError::NotFound(path.display().to_string()));
        }
        for key in self.subtree_keys(path) {
            self.nodes.remove(&key);
        }
        Ok(())
    }
}
