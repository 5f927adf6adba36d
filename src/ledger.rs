//! Insertion-ordered records of what a run changed or flagged.

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Includes the line terminator, if the line had one.
    pub original: String,
    pub updated: String,
    /// 1-indexed
    pub lineno: usize,
}

/// Changed lines per file, for fixers. A file is present only if at least
/// one of its lines changed.
#[derive(Debug, Clone, Default)]
pub struct ChangeLedger {
    by_file: IndexMap<PathBuf, Vec<Change>>,
}

impl ChangeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        file: impl Into<PathBuf>,
        original: impl Into<String>,
        updated: impl Into<String>,
        lineno: usize,
    ) {
        self.by_file.entry(file.into()).or_default().push(Change {
            original: original.into(),
            updated: updated.into(),
            lineno,
        });
    }

    pub fn has_changes(&self, file: &Path) -> bool {
        self.by_file.get(file).is_some_and(|changes| !changes.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.by_file.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_file.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Path, &[Change])> {
        self.by_file
            .iter()
            .map(|(file, changes)| (file.as_path(), changes.as_slice()))
    }
}

/// Failing line numbers per file, for checkers.
#[derive(Debug, Clone, Default)]
pub struct CheckLedger {
    by_file: IndexMap<PathBuf, Vec<usize>>,
}

impl CheckLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, file: impl Into<PathBuf>, lineno: usize) {
        self.by_file.entry(file.into()).or_default().push(lineno);
    }

    pub fn has_failures(&self, file: &Path) -> bool {
        self.by_file.get(file).is_some_and(|linenos| !linenos.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.by_file.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_file.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Path, &[usize])> {
        self.by_file
            .iter()
            .map(|(file, linenos)| (file.as_path(), linenos.as_slice()))
    }
}
