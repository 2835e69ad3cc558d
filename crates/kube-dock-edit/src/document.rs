use std::io::Write;
use std::path::{Path, PathBuf};

/// Read the whole descriptor into memory.
pub fn load(path: &Path) -> Result<String, DocumentError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DocumentError::NotFound(path.to_path_buf())
        } else {
            DocumentError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Overwrite the descriptor with `content`.
pub fn replace_all(path: &Path, content: &str) -> Result<(), DocumentError> {
    std::fs::write(path, content).map_err(|e| DocumentError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "descriptor rewritten");
    Ok(())
}

/// Append `line` to the descriptor, preceded by a newline.
///
/// Each call opens and closes the file on its own. The file must already
/// exist; it is never created here.
pub fn append_line(path: &Path, line: &str) -> Result<(), DocumentError> {
    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| DocumentError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

    file.write_all(format!("\n{line}").as_bytes())
        .map_err(|e| DocumentError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %path.display(), line, "line appended");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("descriptor file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to open {path} for appending")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = load(&tmp.path().join("Dockerfile")).unwrap_err();
        assert!(matches!(err, DocumentError::NotFound(_)));
    }

    #[test]
    fn load_directory_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = load(tmp.path()).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }

    #[test]
    fn append_prefixes_newline() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Dockerfile");
        std::fs::write(&path, "FROM base\n").unwrap();

        append_line(&path, "ENV A 1").unwrap();
        append_line(&path, "ENV B 2").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "FROM base\n\nENV A 1\nENV B 2");
    }

    #[test]
    fn append_does_not_create_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Dockerfile");

        let err = append_line(&path, "ENV A 1").unwrap_err();
        assert!(matches!(err, DocumentError::Open { .. }));
        assert!(!path.exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn append_write_failure_is_write_error() {
        // Opens fine, every write fails with ENOSPC.
        let err = append_line(Path::new("/dev/full"), "ENV A 1").unwrap_err();
        assert!(matches!(err, DocumentError::Write { .. }));
    }

    #[test]
    fn replace_all_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Dockerfile");
        std::fs::write(&path, "old contents that are longer\n").unwrap();

        replace_all(&path, "new\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }
}
