//! Drive/volume enumeration for the drive-select prompt.

use std::path::PathBuf;

/// One selectable drive or mount point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drive {
    pub path: PathBuf,
    pub name: String,
}

/// Enumerate drives. Windows probes drive letters; elsewhere the root
/// filesystem plus anything mounted under the usual mount directories.
pub fn list() -> Vec<Drive> {
    #[cfg(windows)]
    {
        list_windows()
    }
    #[cfg(not(windows))]
    {
        list_unix()
    }
}

#[cfg(windows)]
fn list_windows() -> Vec<Drive> {
    let mut drives = Vec::new();
    for letter in b'A'..=b'Z' {
        let root = format!("{}:\\", letter as char);
        let path = PathBuf::from(&root);
        if path.exists() {
            drives.push(Drive { path, name: root });
        }
    }
    drives
}

#[cfg(not(windows))]
fn list_unix() -> Vec<Drive> {
    let mut drives = vec![Drive {
        path: PathBuf::from("/"),
        name: "/".to_string(),
    }];
    for base in ["/mnt", "/media", "/Volumes"] {
        let Ok(read) = std::fs::read_dir(base) else {
            continue;
        };
        for entry in read.flatten() {
            let path = entry.path();
            if path.is_dir() {
                drives.push(Drive {
                    name: path.display().to_string(),
                    path,
                });
            }
        }
    }
    drives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_always_offers_a_root() {
        let drives = list();
        assert!(!drives.is_empty());
        assert!(drives.iter().all(|d| !d.name.is_empty()));
    }
}
