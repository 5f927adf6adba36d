//! Which files a tool runs over.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const SNIFF_LEN: u64 = 1024;

/// The files named on the command line, or every text file under a root
/// directory when none were named.
#[derive(Debug, Clone)]
pub enum FileSet {
    Explicit(Vec<PathBuf>),
    Walk(PathBuf),
}

impl FileSet {
    /// Explicit files are used as given; an empty list walks the current
    /// directory.
    pub fn from_args(files: Vec<PathBuf>) -> Self {
        if files.is_empty() {
            FileSet::Walk(PathBuf::from("."))
        } else {
            FileSet::Explicit(files)
        }
    }

    /// Explicit files, falling back to a single default path.
    pub fn or_default(files: Vec<PathBuf>, default: impl Into<PathBuf>) -> Self {
        if files.is_empty() {
            FileSet::Explicit(vec![default.into()])
        } else {
            FileSet::Explicit(files)
        }
    }
}

impl IntoIterator for FileSet {
    type Item = PathBuf;
    type IntoIter = Box<dyn Iterator<Item = PathBuf>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            FileSet::Explicit(files) => Box::new(files.into_iter()),
            FileSet::Walk(root) => Box::new(walk_text_files(root)),
        }
    }
}

fn walk_text_files(root: PathBuf) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_text_file(entry.path()))
        .map(|entry| {
            let path = entry.path();
            path.strip_prefix(".").unwrap_or(path).to_path_buf()
        })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_text_byte(byte: u8) -> bool {
    matches!(byte, 7..=13 | 27) || (byte >= 0x20 && byte != 0x7F)
}

/// Sniff the head of a file for bytes that never appear in text.
pub fn is_text_file(path: &Path) -> bool {
    let mut head = Vec::with_capacity(SNIFF_LEN as usize);
    let read = File::open(path).and_then(|file| file.take(SNIFF_LEN).read_to_end(&mut head));
    if let Err(err) = read {
        tracing::debug!(path = %path.display(), "cannot sniff file: {}", err);
        return false;
    }
    head.iter().all(|&byte| is_text_byte(byte))
}
