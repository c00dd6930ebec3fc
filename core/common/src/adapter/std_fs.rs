//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::{FileMetadata, FileSystem};
use std::path::{Path, PathBuf};

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        std::fs::read_to_string(path).map_err(|e| {
            Error::io_msg(format!("Failed to read '{}': {}", path.display(), e))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        std::fs::write(path, contents).map_err(|e| {
            Error::io_msg(format!("Failed to write '{}': {}", path.display(), e))
        })
    }

    fn write_bytes(&self, path: &Path, contents: &[u8]) -> Result<(), Error> {
        std::fs::write(path, contents).map_err(|e| {
            Error::io_msg(format!("Failed to write '{}': {}", path.display(), e))
        })
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error> {
        std::fs::rename(from, to).map_err(|e| {
            Error::io_msg(format!(
                "Failed to rename '{}' to '{}': {}",
                from.display(),
                to.display(),
                e
            ))
        })
    }

    fn create_dir(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir(path).map_err(|e| {
            Error::io_msg(format!("Failed to create directory '{}': {}", path.display(), e))
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(|e| {
            Error::io_msg(format!("Failed to create directory '{}': {}", path.display(), e))
        })
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error> {
        let m = std::fs::metadata(path).map_err(|e| {
            Error::io_msg(format!(
                "Failed to get metadata for '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(FileMetadata::new(m.len(), m.is_file(), m.is_dir()))
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::remove_dir_all(path).map_err(|e| {
            Error::io_msg(format!("Failed to remove directory '{}': {}", path.display(), e))
        })
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Error> {
        let entries = std::fs::read_dir(path).map_err(|e| {
            Error::io_msg(format!(
                "Failed to read directory '{}': {}",
                path.display(),
                e
            ))
        })?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                Error::io_msg(format!("Failed to read directory entry: {}", e))
            })?;
            paths.push(entry.path());
        }
        paths.sort();
        Ok(paths)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), Error> {
        std::fs::copy(from, to).map(|_| ()).map_err(|e| {
            Error::io_msg(format!(
                "Failed to copy '{}' to '{}': {}",
                from.display(),
                to.display(),
                e
            ))
        })
    }

    #[cfg(unix)]
    fn set_executable(&self, path: &Path) -> Result<(), Error> {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)
            .map_err(|e| {
                Error::io_msg(format!("Failed to get metadata for '{}': {}", path.display(), e))
            })?
            .permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms).map_err(|e| {
            Error::io_msg(format!("Failed to chmod '{}': {}", path.display(), e))
        })
    }

    #[cfg(not(unix))]
    fn set_executable(&self, _path: &Path) -> Result<(), Error> {
        Ok(())
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::io_msg(format!("Failed to open '{}' for append: {}", path.display(), e))
            })?;
        Ok(Box::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dir_fails_when_present() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = StdFileSystem;
        let dir = tmp.path().join("a");
        fs.create_dir(&dir).unwrap();
        let err = fs.create_dir(&dir).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_read_dir_is_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = StdFileSystem;
        fs.write(&tmp.path().join("b"), "").unwrap();
        fs.write(&tmp.path().join("a"), "").unwrap();
        let names: Vec<_> = fs
            .read_dir(tmp.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_set_executable() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().unwrap();
        let fs = StdFileSystem;
        let script = tmp.path().join("run.sh");
        fs.write(&script, "#!/bin/sh\n").unwrap();
        fs.set_executable(&script).unwrap();
        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_write_bytes() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = StdFileSystem;
        let path = tmp.path().join("icon.icns");
        fs.write_bytes(&path, b"icns\x00\x01").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"icns\x00\x01");
    }

    #[test]
    fn test_copy_file_binary() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = StdFileSystem;
        let src = tmp.path().join("icon.icns");
        std::fs::write(&src, [0u8, 159, 146, 150]).unwrap();
        let dst = tmp.path().join("copy.icns");
        fs.copy_file(&src, &dst).unwrap();
        assert_eq!(std::fs::read(&dst).unwrap(), vec![0u8, 159, 146, 150]);
    }
}
