// src/fs/mock.rs

use super::FileSystem;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory filesystem that only tracks which paths exist.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    paths: Arc<Mutex<HashSet<PathBuf>>>,
    lookups: Arc<AtomicUsize>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>) {
        self.paths.lock().unwrap().insert(path.as_ref().to_path_buf());
    }

    pub fn remove_file(&self, path: impl AsRef<Path>) {
        self.paths.lock().unwrap().remove(path.as_ref());
    }

    /// Number of `exists` calls seen so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.paths.lock().unwrap().contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_added_and_removed_files() {
        let fs = MockFileSystem::new();
        fs.add_file("/opt/scripts/weather.sh");

        assert!(fs.exists(Path::new("/opt/scripts/weather.sh")));
        assert!(!fs.exists(Path::new("/opt/scripts/other.sh")));

        fs.remove_file("/opt/scripts/weather.sh");
        assert!(!fs.exists(Path::new("/opt/scripts/weather.sh")));
        assert_eq!(fs.lookups(), 3);
    }
}
