// cli.rs
use crate::{
    error::ScanError,
    options::{ScanOptions, ScanOptionsBuilder},
    platform::check_platform,
    reporter::{scanning_line, ConsoleReporter},
    request::{is_help_request, join_args, ScanRequest},
    scanner::{DirectoryScanner, ScanResult},
    PATH_LENGTH_THRESHOLD, VERSION,
};
use clap::Parser;
use std::{
    ffi::{OsStr, OsString},
    io::Write,
    path::Path,
};

#[derive(Parser, Debug)]
#[command(
    name = "checklongnames",
    version,
    about = "Report files whose absolute path exceeds 260 characters"
)]
pub struct Args {
    /// Directory to scan; an unquoted path containing spaces is re-joined.
    /// `/h` prints the usage text. Put a path starting with `-` after `--`
    #[arg(value_name = "DIRECTORY", num_args = 0..)]
    pub path: Vec<OsString>,

    /// Scan even when not running on Windows
    #[arg(long, default_value = "false")]
    pub any_platform: bool,
}

impl Args {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptionsBuilder::new()
            .windows_only(!self.any_platform)
            .build()
    }
}

/// What a successful run did
#[derive(Debug)]
pub enum Outcome {
    Help,
    Scanned(ScanResult),
}

/// Basename of `argv[0]`, for the usage line
pub fn program_name(argv0: &str) -> String {
    Path::new(argv0)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "checklongnames".to_string())
}

pub fn help_text(program: &str) -> String {
    format!(
        "Checklongnames v{VERSION}\n\
         This program detects filenames whose absolute path exceeds {PATH_LENGTH_THRESHOLD} characters (Windows MAX_PATH)\n\
         \n\
         Usage :\n\
         {program}  <directory_name>\n  \
         - <directory_name> : start the scan from this directory.\n  \
         - --any-platform   : scan even when not running on Windows.\n"
    )
}

/// Runs one invocation against `out`
///
/// Prints help, or resolves the joined arguments to a directory and scans
/// it, streaming warnings and the summary. Error lines are left to the
/// caller.
///
/// # Errors
///
/// Any `ScanError` from the platform gate, path resolution, validation or
/// the scan itself. Nothing has been scanned when resolution or validation
/// fails.
pub fn run<S, W>(
    args: &[S],
    program: &str,
    options: &ScanOptions,
    out: &mut W,
) -> Result<Outcome, ScanError>
where
    S: AsRef<OsStr>,
    W: Write,
{
    if is_help_request(args) {
        writeln!(out, "{}", help_text(program))?;
        return Ok(Outcome::Help);
    }

    check_platform(options)?;

    let request = ScanRequest::resolve(&join_args(args))?;
    request.validate()?;

    writeln!(out, "{}", scanning_line(&request.root_path))?;
    let mut reporter = ConsoleReporter::new(&mut *out);
    let result = DirectoryScanner::new(options.clone()).scan(&request.root_path, &mut reporter)?;
    reporter.write_summary(&result)?;

    Ok(Outcome::Scanned(result))
}
