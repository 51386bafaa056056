// tests/common/mod.rs
#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

/// Character length of a path made only of ASCII segments
pub fn len_of(path: &Path) -> usize {
    path.to_str().expect("temp paths are UTF-8").chars().count()
}

/// Creates `<root>/<dir>/<file>` whose full path is exactly `total` characters
///
/// The directory and file names split the remaining length so that neither
/// exceeds the usual 255-byte component limit.
pub fn file_with_path_length(root: &Path, total: usize, fill: char) -> PathBuf {
    let remaining = total - len_of(root) - 2;
    let dir_len = remaining / 2;
    let file_len = remaining - dir_len;
    let dir = root.join(fill.to_string().repeat(dir_len));
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join(fill.to_string().repeat(file_len));
    fs::write(&file, b"").unwrap();
    assert_eq!(len_of(&file), total);
    file
}

/// Creates `<root>/<name>` whose full path is exactly `total` characters
pub fn root_file_with_path_length(root: &Path, total: usize, fill: char) -> PathBuf {
    let name_len = total - len_of(root) - 1;
    let file = root.join(fill.to_string().repeat(name_len));
    fs::write(&file, b"").unwrap();
    assert_eq!(len_of(&file), total);
    file
}

/// Makes `dir` unreadable, returning `false` when the permission has no
/// effect (running as root)
#[cfg(unix)]
pub fn make_unreadable(dir: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(dir).is_ok() {
        restore_readable(dir);
        return false;
    }
    true
}

#[cfg(unix)]
pub fn restore_readable(dir: &Path) {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
}
