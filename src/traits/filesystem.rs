use anyhow::{Context, Result};
#[cfg(test)]
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
#[cfg(test)]
use std::path::PathBuf;
#[cfg(test)]
use std::sync::{Arc, RwLock};

/// Trait for filesystem operations to enable testing with mocks
pub trait FileSystem: Send + Sync {
    /// Append string contents to an existing file
    fn append(&self, path: &Path, contents: &str) -> Result<()>;

    /// Check if path exists
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation using std::fs
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn append(&self, path: &Path, contents: &str) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open file for appending: {:?}", path))?;

        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to append to file: {:?}", path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Mock filesystem implementation for testing (in-memory)
#[cfg(test)]
pub struct MockFileSystem {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

#[cfg(test)]
impl MockFileSystem {
    /// Create new empty mock filesystem
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock filesystem containing one file
    pub fn with_file(path: impl Into<PathBuf>, contents: &str) -> Self {
        let fs = Self::new();
        fs.files
            .write()
            .unwrap()
            .insert(path.into(), contents.to_string());
        fs
    }

    /// Get captured file contents for testing assertions
    pub fn get_file_contents(&self, path: &Path) -> Option<String> {
        self.files.read().unwrap().get(path).cloned()
    }
}

#[cfg(test)]
impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn append(&self, path: &Path, contents: &str) -> Result<()> {
        self.files
            .write()
            .unwrap()
            .get_mut(path)
            .with_context(|| format!("File not found in mock filesystem: {:?}", path))?
            .push_str(contents);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_append_extends_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env");
        std::fs::write(&path, "FIRST=1\n").unwrap();

        RealFileSystem.append(&path, "SECOND=2\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "FIRST=1\nSECOND=2\n");
    }

    #[test]
    fn test_real_append_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing");

        assert!(!RealFileSystem.exists(&path));
        assert!(RealFileSystem.append(&path, "X=1\n").is_err());
    }

    #[test]
    fn test_mock_append() {
        let fs = MockFileSystem::with_file("/runner/env", "");
        fs.append(Path::new("/runner/env"), "A").unwrap();
        fs.append(Path::new("/runner/env"), "B").unwrap();

        assert_eq!(
            fs.get_file_contents(Path::new("/runner/env")).as_deref(),
            Some("AB")
        );
        assert!(fs.append(Path::new("/other"), "C").is_err());
    }
}
