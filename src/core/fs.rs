//! Filesystem Access
//!
//! The document model reads and writes whole files through this trait so the
//! editor can be driven against something other than the real disk.

use std::fs;
use std::io;
use std::path::Path;

/// Whole-file storage used by [`TextDocument`](super::TextDocument)
pub trait FileSystem {
    /// Read the entire file at `path`
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate the file at `path` and write `contents` to it
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// The host filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_os_filesystem_overwrites() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("note.txt");

        OsFileSystem.write(&path, b"first draft").unwrap();
        OsFileSystem.write(&path, b"second").unwrap();

        assert_eq!(OsFileSystem.read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_os_filesystem_missing_file() {
        let dir = TempDir::new().expect("tempdir");
        let err = OsFileSystem.read(&dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
