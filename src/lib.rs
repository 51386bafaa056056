// lib.rs
#![forbid(unsafe_code)]

pub mod cli;
pub mod entry;
pub mod error;
pub mod options;
pub mod platform;
pub mod reporter;
pub mod request;
pub mod scanner;

pub use crate::entry::{Entry, EntryKind};
pub use crate::error::ScanError;
pub use crate::options::{ScanOptions, ScanOptionsBuilder};
pub use crate::request::ScanRequest;
pub use crate::scanner::{DirectoryScanner, EntryError, ScanResult, ScanVisitor, Visit};

/// Longest absolute path, in characters, that legacy Windows APIs accept
pub const PATH_LENGTH_THRESHOLD: usize = 260;

/// Crate version, shown in the usage text
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
