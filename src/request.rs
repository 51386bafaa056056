// request.rs
use crate::error::ScanError;
use std::{
    env,
    ffi::{OsStr, OsString},
    fs, io,
    path::{Component, Path, PathBuf},
};
use tracing::debug;

/// Argument that asks for the usage text
pub const HELP_TOKEN: &str = "/h";

/// Re-joins positional arguments with single spaces
///
/// A shell splits an unquoted `C:\Program Files\app` into two arguments;
/// joining them back restores the path. Arguments need not be UTF-8.
pub fn join_args<S: AsRef<OsStr>>(args: &[S]) -> OsString {
    let mut joined = OsString::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            joined.push(" ");
        }
        joined.push(arg);
    }
    joined
}

/// No arguments at all, or the joined arguments are the help token
pub fn is_help_request<S: AsRef<OsStr>>(args: &[S]) -> bool {
    args.is_empty() || join_args(args).to_str().map(str::trim) == Some(HELP_TOKEN)
}

/// Lexically cleans a path
///
/// Drops `.` segments and redundant separators, and folds each `..` into
/// the preceding normal segment. A `..` directly under the root is dropped.
/// Leading `..` segments of a relative path are kept. The empty path
/// cleans to `.`. The filesystem is never consulted, so symlinks are not
/// resolved.
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// The directory a scan will start from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanRequest {
    /// Absolute and lexically clean
    pub root_path: PathBuf,
}

impl ScanRequest {
    /// Builds a request from the joined command-line candidate
    ///
    /// Relative candidates are resolved against the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::PathResolution` if the current directory cannot
    /// be determined.
    pub fn resolve<P: AsRef<Path>>(candidate: P) -> Result<Self, ScanError> {
        let candidate = candidate.as_ref();
        let cleaned = clean(candidate);
        let absolute = if cleaned.is_absolute() {
            cleaned
        } else {
            let cwd = env::current_dir().map_err(|e| ScanError::PathResolution {
                input: candidate.to_string_lossy().into_owned(),
                reason: e.to_string(),
            })?;
            clean(&cwd.join(cleaned))
        };
        debug!(candidate = %candidate.display(), root = %absolute.display(), "resolved scan root");
        Ok(Self {
            root_path: absolute,
        })
    }

    /// Checks that the root exists and is a directory
    ///
    /// # Errors
    ///
    /// `ScanError::NotFound` when nothing exists at the path,
    /// `ScanError::NotADirectory` when something other than a directory
    /// does, and `ScanError::Inaccessible` when the stat itself fails.
    pub fn validate(&self) -> Result<(), ScanError> {
        match fs::metadata(&self.root_path) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(ScanError::NotADirectory(self.root_path.clone())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ScanError::NotFound(self.root_path.clone()))
            }
            Err(source) => Err(ScanError::Inaccessible {
                path: self.root_path.clone(),
                source,
            }),
        }
    }
}
