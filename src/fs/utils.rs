use std::path::Path;

/// Preserve file attributes (permissions, modification time) from src to dest.
/// Best-effort since the file data is already written.
fn preserve_attributes(src: &Path, dest: &Path) {
    if let Ok(meta) = std::fs::metadata(src) {
        if let Ok(mtime) = meta.modified() {
            let _ = filetime::set_file_mtime(dest, filetime::FileTime::from_system_time(mtime));
        }
        #[cfg(unix)]
        {
            let _ = std::fs::set_permissions(dest, meta.permissions());
        }
    }
}

/// Copy a file or directory recursively, preserving attributes
pub fn copy_path(src: &Path, dest: &Path) -> std::io::Result<()> {
    if src.is_dir() {
        copy_dir_recursive(src, dest)
    } else {
        std::fs::copy(src, dest)?;
        preserve_attributes(src, dest);
        Ok(())
    }
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dest)?;

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dest_path)?;
        } else {
            std::fs::copy(&src_path, &dest_path)?;
            preserve_attributes(&src_path, &dest_path);
        }
    }

    // Directory attributes last, so mtime isn't changed by creating children
    preserve_attributes(src, dest);

    Ok(())
}

/// Move a file or directory. Rename first; cross-filesystem moves fall back
/// to copy + delete.
pub fn move_path(src: &Path, dest: &Path) -> std::io::Result<()> {
    match std::fs::rename(src, dest) {
        Ok(()) => Ok(()),
        Err(_) => {
            copy_path(src, dest)?;
            if src.is_dir() {
                std::fs::remove_dir_all(src)?;
            } else {
                std::fs::remove_file(src)?;
            }
            Ok(())
        }
    }
}

/// Delete a file, or a directory recursively
pub fn delete_path(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    }
}

/// Format a byte count for the status bar (e.g. "3.4 KB")
pub fn human_size(size: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = size as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", size, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size_bytes() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(512), "512 B");
    }

    #[test]
    fn test_human_size_scales_units() {
        assert_eq!(human_size(1024), "1.0 KB");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_copy_and_delete_round_trip() {
        let dir = std::env::temp_dir().join(format!("twig-utils-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("src/nested")).unwrap();
        std::fs::write(dir.join("src/a.txt"), b"alpha").unwrap();
        std::fs::write(dir.join("src/nested/b.txt"), b"beta").unwrap();

        copy_path(&dir.join("src"), &dir.join("dst")).unwrap();
        assert_eq!(std::fs::read(dir.join("dst/a.txt")).unwrap(), b"alpha");
        assert_eq!(std::fs::read(dir.join("dst/nested/b.txt")).unwrap(), b"beta");

        delete_path(&dir.join("dst")).unwrap();
        assert!(!dir.join("dst").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
