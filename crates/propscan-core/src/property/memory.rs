/// In-memory property store, keyed by the normalized path the scanner
/// hands out.
use super::PropertyStore;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct MemoryPropertyStore {
    properties: HashMap<PathBuf, HashSet<String>>,
    /// Every (path, name) pair queried, in order.
    queries: RefCell<Vec<(PathBuf, String)>>,
}

impl MemoryPropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `name` as set on `path`.
    pub fn set(&mut self, path: impl Into<PathBuf>, name: impl Into<String>) -> &mut Self {
        self.properties
            .entry(path.into())
            .or_default()
            .insert(name.into());
        self
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        self.set(path, name);
        self
    }

    /// The queries made so far, oldest first.
    pub fn queries(&self) -> Vec<(PathBuf, String)> {
        self.queries.borrow().clone()
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn has_property(&self, path: &Path, name: &str) -> bool {
        self.queries
            .borrow_mut()
            .push((path.to_path_buf(), name.to_string()));
        self.properties
            .get(path)
            .is_some_and(|names| names.contains(name))
    }
}
