// scanner.rs
use crate::{
    entry::{exceeds_threshold, Entry, EntryKind},
    error::ScanError,
    ScanOptions,
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

/// Decision returned by a visitor for each entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    /// Keep walking
    Continue,
    /// Stop the walk; the scan fails with `ScanError::Aborted`
    Abort,
}

/// A metadata lookup that failed for one entry
///
/// The entry was not classified as file or directory, but it was still
/// checked for length.
#[derive(Debug)]
pub struct EntryError {
    pub path: PathBuf,
    pub error: io::Error,
}

/// Counts accumulated over one scan
#[derive(Debug, Default)]
pub struct ScanResult {
    pub file_count: u64,
    pub directory_count: u64,
    pub warning_count: u64,
    pub entry_errors: Vec<EntryError>,
}

impl ScanResult {
    /// Every entry the walk produced, classified or not
    pub fn entries_visited(&self) -> u64 {
        self.file_count + self.directory_count + self.entry_errors.len() as u64
    }
}

/// Receives entries as the scanner walks
///
/// All methods have defaults so a visitor only overrides what it needs.
pub trait ScanVisitor {
    /// Called once per entry, after classification
    fn visit(&mut self, _entry: &Entry<'_>) -> Visit {
        Visit::Continue
    }

    /// Called for each entry whose path is longer than the threshold
    ///
    /// # Errors
    ///
    /// An error here halts the scan and is returned from it unchanged.
    fn long_path(&mut self, _entry: &Entry<'_>, _length: usize) -> Result<(), ScanError> {
        Ok(())
    }

    /// Called when the metadata lookup for an entry fails
    fn entry_error(&mut self, _error: &EntryError) {}
}

/// Visitor that only counts
impl ScanVisitor for () {}

/// Walks a directory tree and flags over-long paths
///
/// The scanner does no output of its own: results stream to the
/// [`ScanVisitor`] passed to [`DirectoryScanner::scan`].
#[derive(Clone, Debug, Default)]
pub struct DirectoryScanner {
    options: ScanOptions,
}

impl DirectoryScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Scans the tree rooted at `root`
    ///
    /// The root is visited first, then its descendants depth-first in the
    /// order the filesystem yields them (or by file name when
    /// `sort_entries` is set). Each entry is classified with a
    /// link-following stat and its path length is checked inline, so no
    /// list of paths is ever held.
    ///
    /// # Arguments
    ///
    /// * `root` - Existing directory to scan, normally absolute
    /// * `visitor` - Receives entries, long paths and entry errors
    ///
    /// # Returns
    ///
    /// `Ok(ScanResult)` once the whole tree has been walked
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Traversal` when walkdir cannot continue (root
    /// missing, unreadable directory, symlink loop), `ScanError::Aborted`
    /// when the visitor stops the walk, or whatever `long_path` returned.
    pub fn scan<V>(&self, root: &Path, visitor: &mut V) -> Result<ScanResult, ScanError>
    where
        V: ScanVisitor + ?Sized,
    {
        debug!(root = %root.display(), "scan started");
        let mut result = ScanResult::default();

        let mut walker = WalkDir::new(root).follow_links(self.options.follow_symlinks);
        if self.options.sort_entries {
            walker = walker.sort_by_file_name();
        }

        for dent in walker {
            let dent = dent?;
            let path = dent.path();

            let kind = match fs::metadata(path) {
                Ok(meta) => Some(EntryKind::from_metadata(&meta)),
                Err(error) => {
                    warn!(path = %path.display(), %error, "metadata lookup failed");
                    let err = EntryError {
                        path: path.to_path_buf(),
                        error,
                    };
                    visitor.entry_error(&err);
                    result.entry_errors.push(err);
                    None
                }
            };
            match kind {
                Some(EntryKind::Directory) => result.directory_count += 1,
                Some(EntryKind::File) => result.file_count += 1,
                None => {}
            }

            let entry = Entry {
                path,
                kind,
                depth: dent.depth(),
            };
            trace!(path = %path.display(), ?kind, "visit");

            if visitor.visit(&entry) == Visit::Abort {
                debug!(path = %path.display(), "scan aborted by visitor");
                return Err(ScanError::Aborted(path.to_path_buf()));
            }

            let length = entry.path_length();
            if exceeds_threshold(length) {
                result.warning_count += 1;
                visitor.long_path(&entry, length)?;
            }
        }

        debug!(
            files = result.file_count,
            directories = result.directory_count,
            warnings = result.warning_count,
            entry_errors = result.entry_errors.len(),
            "scan finished"
        );
        Ok(result)
    }
}
