//! In-memory filesystem for testing.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use plinth_core::{application::ports::Filesystem, error::PlinthResult};

/// In-memory filesystem implementation.
///
/// Records directories and file contents so tests can assert on exactly what
/// the pipeline wrote without touching disk.
#[derive(Debug, Default)]
pub struct MemoryFilesystem {
    files: Mutex<HashMap<PathBuf, String>>,
    directories: Mutex<HashSet<PathBuf>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of a written file, if any.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// All written file paths, sorted.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<_> = self.files.lock().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Number of files written.
    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> PlinthResult<()> {
        let mut dirs = self.directories.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            dirs.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> PlinthResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
            || self.directories.lock().unwrap().contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_writes() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("a/b.ts"), "content").unwrap();

        assert_eq!(fs.read_file(Path::new("a/b.ts")).as_deref(), Some("content"));
        assert!(fs.exists(Path::new("a/b.ts")));
        assert_eq!(fs.file_count(), 1);
    }

    #[test]
    fn create_dir_all_records_every_ancestor() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b/c")).unwrap();

        assert!(fs.exists(Path::new("a")));
        assert!(fs.exists(Path::new("a/b")));
        assert!(fs.exists(Path::new("a/b/c")));
    }

    #[test]
    fn last_write_wins() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("x.ts"), "old").unwrap();
        fs.write_file(Path::new("x.ts"), "new").unwrap();
        assert_eq!(fs.read_file(Path::new("x.ts")).as_deref(), Some("new"));
        assert_eq!(fs.file_count(), 1);
    }
}
