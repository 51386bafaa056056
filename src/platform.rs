// platform.rs
use crate::{error::ScanError, options::ScanOptions};
use tracing::debug;

/// Whether the running platform carries the legacy MAX_PATH limit
#[cfg(windows)]
pub fn has_legacy_path_limit() -> bool {
    true
}

/// Non-Windows platforms have no 260-character limit of their own
#[cfg(not(windows))]
pub fn has_legacy_path_limit() -> bool {
    false
}

/// Applies the platform gate configured in `opts`
///
/// # Errors
///
/// Returns `ScanError::UnsupportedPlatform` when `windows_only` is set and
/// the platform has no legacy path limit.
pub fn check_platform(opts: &ScanOptions) -> Result<(), ScanError> {
    let legacy = has_legacy_path_limit();
    debug!(windows_only = opts.windows_only, legacy, "platform gate");
    if opts.windows_only && !legacy {
        return Err(ScanError::UnsupportedPlatform);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ScanOptionsBuilder;

    #[test]
    fn gate_lifted_runs_anywhere() {
        let opts = ScanOptionsBuilder::new().windows_only(false).build();
        assert!(check_platform(&opts).is_ok());
    }

    #[test]
    fn gate_follows_platform() {
        let opts = ScanOptions::default();
        let res = check_platform(&opts);
        if cfg!(windows) {
            assert!(res.is_ok());
        } else {
            assert!(matches!(res, Err(ScanError::UnsupportedPlatform)));
        }
    }
}
