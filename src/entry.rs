// entry.rs
use crate::PATH_LENGTH_THRESHOLD;
use std::{fs::Metadata, path::Path};

/// Kind of a visited filesystem node
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Anything that is not a directory
    File,
    /// Directories
    Directory,
}

impl EntryKind {
    /// Classifies metadata obtained by a (link-following) stat
    pub fn from_metadata(meta: &Metadata) -> Self {
        if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        }
    }
}

/// One node reached by the traversal, handed to a visitor and then dropped
#[derive(Debug)]
pub struct Entry<'a> {
    /// Root joined with the relative segments walked so far
    pub path: &'a Path,

    /// `None` when the metadata lookup failed
    pub kind: Option<EntryKind>,

    /// Distance from the scan root, which has depth 0
    pub depth: usize,
}

impl Entry<'_> {
    /// Character length of this entry's path
    pub fn path_length(&self) -> usize {
        path_length(self.path)
    }
}

/// Counts the characters of a path string
///
/// Counted by Unicode scalar value. In a path that is not valid UTF-8 each
/// invalid sequence counts as one replacement character.
pub fn path_length(path: &Path) -> usize {
    path.to_string_lossy().chars().count()
}

/// Strictly greater than the threshold; exactly 260 is still fine
pub fn exceeds_threshold(length: usize) -> bool {
    length > PATH_LENGTH_THRESHOLD
}
