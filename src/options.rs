// options.rs

/// Configuration options for a scan
///
/// The length threshold is fixed at [`crate::PATH_LENGTH_THRESHOLD`] and is
/// deliberately not part of this struct.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Refuse to scan unless running on Windows
    pub windows_only: bool,

    /// Whether to descend into symlinked directories during traversal
    pub follow_symlinks: bool,

    /// Visit the children of each directory sorted by file name
    pub sort_entries: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            windows_only: true,
            follow_symlinks: false,
            sort_entries: false,
        }
    }
}

/// Builder for ScanOptions for fluent configuration
pub struct ScanOptionsBuilder(ScanOptions);

impl Default for ScanOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanOptionsBuilder {
    /// Creates a new builder with default options
    pub fn new() -> Self {
        Self(ScanOptions::default())
    }

    /// Sets whether the platform gate applies
    pub fn windows_only(mut self, v: bool) -> Self {
        self.0.windows_only = v;
        self
    }

    /// Sets whether to follow symbolic links
    pub fn follow_symlinks(mut self, v: bool) -> Self {
        self.0.follow_symlinks = v;
        self
    }

    /// Sets whether children are visited in file name order
    pub fn sort_entries(mut self, v: bool) -> Self {
        self.0.sort_entries = v;
        self
    }

    /// Builds the final ScanOptions instance
    pub fn build(self) -> ScanOptions {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_legacy_behavior() {
        let o = ScanOptions::default();
        assert!(o.windows_only);
        assert!(!o.follow_symlinks);
        assert!(!o.sort_entries);
    }

    #[test]
    fn builder_overrides() {
        let o = ScanOptionsBuilder::new()
            .windows_only(false)
            .follow_symlinks(true)
            .sort_entries(true)
            .build();
        assert!(!o.windows_only);
        assert!(o.follow_symlinks);
        assert!(o.sort_entries);
    }
}
