//! JSON helpers for files under ~/.ninenine/.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.ninenine/ directory path. Does not create it.
pub fn ninenine_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(".ninenine"))
}

/// Get the full path for a file in ~/.ninenine/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(ninenine_dir()?.join(filename))
}

/// Read a file to a string, mapping "not found" to `Ok(None)`.
pub fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Open a file for appending, creating it and its parent directories.
pub fn open_append(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_path_format() {
        if let Ok(path) = data_path("config.json") {
            assert!(path.to_string_lossy().ends_with("config.json"));
            assert!(path
                .parent()
                .map(|p| p.ends_with(".ninenine"))
                .unwrap_or(false));
        }
    }

    #[test]
    fn test_read_optional_missing_is_none() {
        let path = std::env::temp_dir().join("ninenine_missing_file_12345.json");
        let _ = fs::remove_file(&path);
        assert!(read_optional(&path).unwrap().is_none());
    }

    #[test]
    fn test_read_optional_existing() {
        let path = std::env::temp_dir().join("ninenine_persistence_test.json");
        fs::write(&path, "{}").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("{}"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_open_append_creates_parents_and_appends() {
        use std::io::Write;

        let dir = std::env::temp_dir().join("ninenine_append_test_dir");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("ninenine.log");

        open_append(&path).unwrap().write_all(b"one\n").unwrap();
        open_append(&path).unwrap().write_all(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
        let _ = fs::remove_dir_all(&dir);
    }
}
