use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::app::domain::FileHandle;

/// Identifies one open/save round trip so late completions can be matched
/// against the operation that is actually pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationId(pub u64);

#[derive(Debug, Clone)]
pub struct FileRequest {
    pub id: OperationId,
    pub handle: FileHandle,
}

#[derive(Debug, Clone)]
pub struct ReadCompletion {
    pub id: OperationId,
    pub handle: FileHandle,
    pub result: Result<Vec<u8>, String>,
}

#[derive(Debug, Clone)]
pub struct WriteCompletion {
    pub id: OperationId,
    pub handle: FileHandle,
    pub result: Result<(), String>,
}

/// Non-blocking file access.
///
/// Implementations must return immediately and deliver the outcome later,
/// on the UI thread, as a `ReadCompletion` / `WriteCompletion`.
pub trait FileService {
    fn read_all(&mut self, request: FileRequest);

    /// Replace the whole file. Readers never observe a partial write, and on
    /// failure the previous contents stay in place.
    fn replace_all(&mut self, request: FileRequest, bytes: Vec<u8>);

    /// Human-readable name, if the backing store can provide one.
    fn display_name(&self, handle: &FileHandle) -> Option<String>;
}

pub fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Write `bytes` to a temporary file next to `path` and rename it over the
/// destination.
pub fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Local files only have a display name when their file name is valid UTF-8;
/// anything else falls back to the lossy basename.
pub fn local_display_name(handle: &FileHandle) -> Option<String> {
    handle
        .path()
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_replace_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.txt");

        replace_file(&path, b"abc").unwrap();

        assert_eq!(fs::read(&path).unwrap(), vec![0x61, 0x62, 0x63]);
    }

    #[test]
    fn test_replace_overwrites_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("existing.txt");
        fs::write(&path, "old contents that are longer").unwrap();

        replace_file(&path, b"new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        // Only the destination remains; the temporary file was renamed away
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_replace_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("file.txt");

        assert!(replace_file(&path, b"abc").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(read_file(&dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn test_local_display_name() {
        let handle = FileHandle::new("/tmp/report.md");
        assert_eq!(local_display_name(&handle).as_deref(), Some("report.md"));
        assert_eq!(local_display_name(&FileHandle::new("/")), None);
    }
}
