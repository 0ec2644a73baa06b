//! File I/O utilities with atomic writes
//!
//! Provides safe text file operations that won't corrupt data on failure.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Read a text file, returning `None` if it doesn't exist
///
/// Invalid UTF-8 is replaced rather than rejected so that one damaged line
/// can't hide the rest of the file.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, LedgerError> {
    let path = path.as_ref();

    match fs::read(path) {
        Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(LedgerError::Storage(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Temp file used while writing `path` atomically
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write text to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), LedgerError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target, so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let written = writer
        .write_all(contents.as_bytes())
        .and_then(|()| writer.flush())
        .and_then(|()| writer.get_ref().sync_all());

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(LedgerError::Storage(format!(
            "Failed to write {}: {}",
            temp_path.display(),
            e
        )));
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append a single line to a file, creating it (and its directory) if needed
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), LedgerError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    writeln!(file, "{}", line)
        .and_then(|()| file.flush())
        .map_err(|e| LedgerError::Storage(format!("Failed to append to {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");

        assert!(read_text(&path).unwrap().is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");

        write_text_atomic(&path, "one\ntwo\n").unwrap();
        assert_eq!(read_text(&path).unwrap().as_deref(), Some("one\ntwo\n"));
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");

        write_text_atomic(&path, "a much longer first version\n").unwrap();
        write_text_atomic(&path, "short\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.txt");
        let temp_path = temp_dir.path().join("test.txt.tmp");

        write_text_atomic(&path, "data\n").unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.txt");

        write_text_atomic(&path, "data\n").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_onto_directory_fails_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("occupied");
        fs::create_dir(&path).unwrap();

        let err = write_text_atomic(&path, "data\n").unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
        assert!(!temp_dir.path().join("occupied.tmp").exists());
    }

    #[test]
    fn test_read_invalid_utf8_is_lossy() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bytes.txt");
        fs::write(&path, b"ok\n\xff\xfe\nstill ok\n").unwrap();

        let text = read_text(&path).unwrap().unwrap();
        assert!(text.starts_with("ok\n"));
        assert!(text.ends_with("still ok\n"));
    }

    #[test]
    fn test_append_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sub").join("log.txt");

        append_line(&path, "first").unwrap();
        append_line(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
