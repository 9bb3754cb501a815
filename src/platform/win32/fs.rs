// ── File-system probes ────────────────────────────────────────────────────────
//
// Existence/type checks from a single attribute query, bounded-capacity path
// canonicalization, and a 64-bit file-size read.
//
// This is inside `platform::win32` so `unsafe` is permitted per crate policy.

#![allow(unsafe_code)]

use std::fs::File;
use std::os::windows::io::AsRawHandle;
use std::path::{Path, PathBuf};

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::HANDLE,
        Storage::FileSystem::{
            GetFileAttributesW, GetFileSizeEx, GetFullPathNameW, FILE_ATTRIBUTE_DIRECTORY,
            INVALID_FILE_ATTRIBUTES,
        },
    },
};

use super::{last_error, path_from_buf, to_wide, PATH_BUF_LEN};
use crate::error::{JoistError, Result};

// ── Existence probes ──────────────────────────────────────────────────────────

/// `true` iff `path` resolves to an existing directory.
///
/// Any resolution failure (absent path, permission denied, dead network
/// share) is `false`; the probe does not distinguish "does not exist" from
/// "cannot be checked".
pub fn directory_exists(path: &Path) -> bool {
    match attributes(path) {
        Some(attrs) => attrs & FILE_ATTRIBUTE_DIRECTORY.0 != 0,
        None => false,
    }
}

/// `true` iff `path` resolves to an existing entry that is not a directory.
///
/// Same failure collapse as [`directory_exists`].
pub fn file_exists(path: &Path) -> bool {
    match attributes(path) {
        Some(attrs) => attrs & FILE_ATTRIBUTE_DIRECTORY.0 == 0,
        None => false,
    }
}

/// One attribute query shared by both probes.  `None` covers the empty path
/// and every native failure.
fn attributes(path: &Path) -> Option<u32> {
    if path.as_os_str().is_empty() {
        return None;
    }
    let wide = to_wide(path.as_os_str());

    // SAFETY: `wide` is a valid null-terminated UTF-16 string that outlives
    // the call; GetFileAttributesW only reads it.
    let attrs = unsafe { GetFileAttributesW(PCWSTR(wide.as_ptr())) };
    if attrs == INVALID_FILE_ATTRIBUTES {
        None
    } else {
        Some(attrs)
    }
}

// ── Canonicalization ──────────────────────────────────────────────────────────

/// Resolve a possibly-relative path to an absolute, normalized form, bounded
/// by the crate's fixed maximum path length.
pub fn full_path(path: &Path) -> Result<PathBuf> {
    full_path_with_capacity(path, PATH_BUF_LEN)
}

/// [`full_path`] with a caller-chosen output capacity in `WCHAR`s.
///
/// The capacity is a hard bound: a resolved path that would not fit fails
/// with `InsufficientCapacity` rather than growing or truncating.
pub fn full_path_with_capacity(path: &Path, capacity: usize) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(JoistError::BadParameter { what: "path is empty" });
    }
    if capacity == 0 {
        return Err(JoistError::BadParameter {
            what: "capacity is zero",
        });
    }

    let wide = to_wide(path.as_os_str());
    let mut buf = vec![0u16; capacity];

    // SAFETY: `wide` is null-terminated and outlives the call; `buf` is a
    // writable buffer whose length the slice carries.  GetFullPathNameW
    // writes at most `capacity` WCHARs and otherwise just reports the size
    // it would have needed.
    let written = unsafe { GetFullPathNameW(PCWSTR(wide.as_ptr()), Some(&mut buf), None) } as usize;

    if written == 0 {
        return Err(last_error("GetFullPathNameW"));
    }
    // On overflow the return value is the required buffer size, terminator
    // included.
    if written > capacity {
        return Err(JoistError::InsufficientCapacity {
            required: written,
            capacity,
        });
    }

    Ok(path_from_buf(&buf))
}

// ── File size ─────────────────────────────────────────────────────────────────

/// The size of an open file in bytes, from the handle rather than cached
/// directory metadata.
pub fn file_size(file: &File) -> Result<u64> {
    let mut size = 0i64;

    // SAFETY: the raw handle is valid for the lifetime of `file`, which the
    // borrow pins for the duration of the call; `size` is a valid out
    // pointer on our stack.
    unsafe { GetFileSizeEx(HANDLE(file.as_raw_handle()), &mut size) }
        .map_err(JoistError::from)?;

    Ok(size as u64)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn existing_file_is_a_file_not_a_directory() {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(b"joist").expect("write");

        assert!(file_exists(tmp.path()));
        assert!(!directory_exists(tmp.path()));
    }

    #[test]
    fn existing_directory_is_a_directory_not_a_file() {
        let dir = tempfile::tempdir().expect("create temp dir");

        assert!(directory_exists(dir.path()));
        assert!(!file_exists(dir.path()));
    }

    #[test]
    fn nonexistent_path_fails_both_probes() {
        let ghost = Path::new("C:\\joist-definitely-not-here-3141592653");
        assert!(!file_exists(ghost));
        assert!(!directory_exists(ghost));
    }

    #[test]
    fn empty_path_fails_both_probes() {
        assert!(!file_exists(Path::new("")));
        assert!(!directory_exists(Path::new("")));
    }

    #[test]
    fn full_path_resolves_relative_input() {
        let resolved = full_path(Path::new(".")).expect("resolve cwd");
        assert!(resolved.is_absolute());
    }

    /// Canonicalizing an already-canonical path must return it unchanged.
    #[test]
    fn full_path_is_idempotent() {
        let once = full_path(Path::new(".")).expect("first pass");
        let twice = full_path(&once).expect("second pass");
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_path_is_a_bad_parameter() {
        match full_path(Path::new("")) {
            Err(JoistError::BadParameter { .. }) => {}
            other => panic!("expected BadParameter, got {other:?}"),
        }
    }

    #[test]
    fn zero_capacity_is_a_bad_parameter() {
        match full_path_with_capacity(Path::new("."), 0) {
            Err(JoistError::BadParameter { .. }) => {}
            other => panic!("expected BadParameter, got {other:?}"),
        }
    }

    /// A capacity that cannot hold the resolved path reports the required
    /// size instead of truncating.
    #[test]
    fn tiny_capacity_reports_insufficient() {
        match full_path_with_capacity(Path::new("."), 2) {
            Err(JoistError::InsufficientCapacity { required, capacity }) => {
                assert_eq!(capacity, 2);
                assert!(required > 2);
            }
            other => panic!("expected InsufficientCapacity, got {other:?}"),
        }
    }

    #[test]
    fn file_size_matches_written_bytes() {
        let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
        tmp.write_all(b"0123456789").expect("write");
        tmp.flush().expect("flush");

        let size = file_size(tmp.as_file()).expect("query size");
        assert_eq!(size, 10);
    }
}
