// reporter.rs
use crate::{
    entry::Entry,
    error::ScanError,
    scanner::{ScanResult, ScanVisitor},
    PATH_LENGTH_THRESHOLD,
};
use std::{io::Write, path::Path};

/// `Scanning directory <root> for long path filenames ...`
pub fn scanning_line(root: &Path) -> String {
    format!("Scanning directory {} for long path filenames ...", root.display())
}

/// `<path> (<length> chars)`
pub fn warning_line(path: &Path, length: usize) -> String {
    format!("{} ({} chars)", path.display(), length)
}

/// The one-line scan summary
pub fn summary_line(result: &ScanResult) -> String {
    format!(
        "{} files and {} directories scanned - {} files have an absolute filename length > {} characters",
        result.file_count, result.directory_count, result.warning_count, PATH_LENGTH_THRESHOLD
    )
}

/// Streams scan output to a writer as the walk progresses
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the summary line, then any entries that could not be inspected
    pub fn write_summary(&mut self, result: &ScanResult) -> Result<(), ScanError> {
        writeln!(self.out, "{}", summary_line(result))?;
        if !result.entry_errors.is_empty() {
            writeln!(
                self.out,
                "{} entries could not be inspected:",
                result.entry_errors.len()
            )?;
            for e in &result.entry_errors {
                writeln!(self.out, "  {}: {}", e.path.display(), e.error)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScanVisitor for ConsoleReporter<W> {
    fn long_path(&mut self, entry: &Entry<'_>, length: usize) -> Result<(), ScanError> {
        writeln!(self.out, "{}", warning_line(entry.path, length))?;
        // keep progress visible on long scans
        self.out.flush()?;
        Ok(())
    }
}
