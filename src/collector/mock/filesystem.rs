//! In-memory mock filesystem for testing collectors without real `/proc`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::collector::traits::FileSystem;

/// In-memory filesystem.
///
/// Stores file contents in a map, allowing tests to simulate various
/// pseudo-filesystem states without actual Linux access.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    files: HashMap<PathBuf, String>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files
            .insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Removes a file, simulating its absence.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_existing_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/loadavg", "0.1 0.2 0.3 1/10 99\n");
        let content = fs.read_to_string(Path::new("/proc/loadavg")).unwrap();
        assert!(content.starts_with("0.1"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let fs = MockFs::new();
        let err = fs.read_to_string(Path::new("/proc/loadavg")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_remove_file() {
        let mut fs = MockFs::new();
        fs.add_file("/etc/os-release", "ID=test\n");
        fs.remove_file("/etc/os-release");
        assert!(fs.read_to_string(Path::new("/etc/os-release")).is_err());
    }
}
