// ── OS version resolution ─────────────────────────────────────────────────────
//
// Windows stopped reporting honest numbers from GetVersionEx unless the
// executable is manifested for each release, so the version is read from the
// version resource embedded in kernel32.dll instead (the documented
// workaround).  The server/workstation split still comes from
// VerifyVersionInfoW, which answers product-type equality questions
// truthfully regardless of manifest.
//
// This is inside `platform::win32` so `unsafe` is permitted per crate policy.

#![allow(unsafe_code)]

use std::ffi::c_void;

use windows::{
    core::{w, PCWSTR},
    Win32::{
        Storage::FileSystem::{
            GetFileVersionInfoSizeW, GetFileVersionInfoW, VerQueryValueW, VS_FIXEDFILEINFO,
        },
        System::{
            SystemInformation::{
                GetSystemDirectoryW, VerSetConditionMask, VerifyVersionInfoW, OSVERSIONINFOEXW,
                VER_MAJORVERSION, VER_MINORVERSION, VER_NT_WORKSTATION, VER_PRODUCT_TYPE,
            },
            SystemServices::{VER_EQUAL, VER_GREATER_EQUAL},
        },
    },
};

use super::{last_error, PATH_BUF_LEN};
use crate::error::{JoistError, Result};
use crate::version::{OsVersion, WindowsVersion};

// ── Public queries ────────────────────────────────────────────────────────────

/// The running OS version, read from the kernel32 version resource.
pub fn os_version() -> Result<OsVersion> {
    let path = system_library_path()?;
    let (product_ms, product_ls) = read_fixed_file_info(&path)?;

    Ok(OsVersion::Windows(WindowsVersion {
        major: high_word(product_ms),
        minor: low_word(product_ms),
        build: high_word(product_ls),
    }))
}

/// The running OS version plus its marketing name, e.g. `"Windows 10"` or
/// `"Windows Server 2012 R2"`.
pub fn os_version_and_name() -> Result<(OsVersion, &'static str)> {
    let server = is_server_edition();
    let os = os_version()?;
    let name = os.windows().product_name(server);
    Ok((os, name))
}

/// `true` when the running OS is a server SKU.
///
/// An equality test of the product type against the workstation marker;
/// anything that is not a workstation (server, domain controller) counts as
/// server.
pub fn is_server_edition() -> bool {
    let mut info = OSVERSIONINFOEXW {
        dwOSVersionInfoSize: std::mem::size_of::<OSVERSIONINFOEXW>() as u32,
        ..Default::default()
    };
    info.wProductType = VER_NT_WORKSTATION as u8;

    // SAFETY: VerSetConditionMask is pure arithmetic over its arguments.
    let mask = unsafe { VerSetConditionMask(0, VER_PRODUCT_TYPE, VER_EQUAL as u8) };

    // SAFETY: `info` is fully initialised with its size field set, and the
    // type mask names only the product-type field the mask covers.
    let workstation = unsafe { VerifyVersionInfoW(&mut info, VER_PRODUCT_TYPE, mask) };

    !workstation.as_bool()
}

/// `true` when the resolved OS version is `major.minor` or newer, by direct
/// comparison against the kernel32 version resource.
pub fn is_at_least(major: u32, minor: u32) -> Result<bool> {
    Ok(os_version()?.windows().is_at_least(major, minor))
}

/// `true` when the feature-flag comparison API reports the OS as
/// `major.minor` or newer.
///
/// VerifyVersionInfoW caps its answer at 6.2 for executables not manifested
/// for newer releases, so for thresholds above Windows 8 this can disagree
/// with [`is_at_least`]; the resource-based path is the reliable one.
pub fn verify_at_least(major: u32, minor: u32) -> bool {
    let mut info = OSVERSIONINFOEXW {
        dwOSVersionInfoSize: std::mem::size_of::<OSVERSIONINFOEXW>() as u32,
        dwMajorVersion: major,
        dwMinorVersion: minor,
        ..Default::default()
    };

    // SAFETY: VerSetConditionMask is pure arithmetic over its arguments.
    let mask = unsafe {
        let m = VerSetConditionMask(0, VER_MAJORVERSION, VER_GREATER_EQUAL as u8);
        VerSetConditionMask(m, VER_MINORVERSION, VER_GREATER_EQUAL as u8)
    };

    // SAFETY: `info` is fully initialised with its size field set, and the
    // type mask names exactly the fields the condition mask covers.
    unsafe { VerifyVersionInfoW(&mut info, VER_MAJORVERSION | VER_MINORVERSION, mask) }.as_bool()
}

// ── Resource plumbing ─────────────────────────────────────────────────────────

/// `<system directory>\kernel32.dll` as a null-terminated wide string.
///
/// The path is assembled in a fixed-capacity buffer; a system directory too
/// long to append the library filename fails rather than truncating.
fn system_library_path() -> Result<Vec<u16>> {
    const LIBRARY: &str = "\\kernel32.dll";

    let mut buf = vec![0u16; PATH_BUF_LEN];

    // SAFETY: `buf` is a writable buffer whose length the slice carries;
    // GetSystemDirectoryW writes at most that many WCHARs.
    let len = unsafe { GetSystemDirectoryW(Some(&mut buf)) } as usize;
    if len == 0 {
        return Err(last_error("GetSystemDirectoryW"));
    }
    // A return beyond the buffer length is the size the call would have
    // needed, not a write.
    if len > PATH_BUF_LEN {
        return Err(JoistError::InsufficientCapacity {
            required: len,
            capacity: PATH_BUF_LEN,
        });
    }

    // len excludes the terminator on success; the appended filename and the
    // terminator must both still fit.
    let required = len + LIBRARY.len() + 1;
    if required > PATH_BUF_LEN {
        return Err(JoistError::InsufficientCapacity {
            required,
            capacity: PATH_BUF_LEN,
        });
    }

    buf.truncate(len);
    buf.extend(LIBRARY.encode_utf16());
    buf.push(0);
    Ok(buf)
}

/// The packed product-version fields (`dwProductVersionMS`,
/// `dwProductVersionLS`) from the library's fixed version record.
fn read_fixed_file_info(path: &[u16]) -> Result<(u32, u32)> {
    // SAFETY: `path` is a valid null-terminated UTF-16 string owned by the
    // caller for the duration of each call below.
    let size = unsafe { GetFileVersionInfoSizeW(PCWSTR(path.as_ptr()), None) };
    if size == 0 {
        return Err(last_error("GetFileVersionInfoSizeW"));
    }

    // The working buffer is allocated fallibly; version blocks are small but
    // the contract distinguishes allocation failure from resource failure.
    let mut data: Vec<u8> = Vec::new();
    data.try_reserve_exact(size as usize)
        .map_err(|_| JoistError::Memory {
            bytes: size as usize,
        })?;
    data.resize(size as usize, 0);

    // SAFETY: `data` is exactly `size` bytes of writable storage, the size
    // GetFileVersionInfoSizeW just reported for this path.
    unsafe { GetFileVersionInfoW(PCWSTR(path.as_ptr()), 0, size, data.as_mut_ptr().cast()) }
        .map_err(JoistError::from)?;

    let mut block: *mut c_void = std::ptr::null_mut();
    let mut block_len: u32 = 0;

    // SAFETY: `data` holds the version block just read; the out pointers are
    // valid locals.  The returned `block` aliases `data`, which stays alive
    // until after the copy out below.
    let found = unsafe {
        VerQueryValueW(
            data.as_ptr().cast(),
            w!("\\"),
            &mut block,
            &mut block_len,
        )
    };

    if !found.as_bool()
        || block.is_null()
        || (block_len as usize) < std::mem::size_of::<VS_FIXEDFILEINFO>()
    {
        return Err(JoistError::VersionResource {
            reason: "fixed file info block absent or truncated",
        });
    }

    // SAFETY: VerQueryValueW reported a root block of at least
    // VS_FIXEDFILEINFO bytes inside `data`; reading it as that struct is the
    // documented layout.
    let info = unsafe { &*(block as *const VS_FIXEDFILEINFO) };
    Ok((info.dwProductVersionMS, info.dwProductVersionLS))
}

// ── Word splitting ────────────────────────────────────────────────────────────

fn high_word(value: u32) -> u32 {
    (value >> 16) & 0xFFFF
}

fn low_word(value: u32) -> u32 {
    value & 0xFFFF
}

// ── Tests ─────────────────────────────────────────────────────────────────────
