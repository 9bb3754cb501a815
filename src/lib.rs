// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except:
//   • `platform::win32` – Win32 / WinAPI FFI
// Each unsafe block in that module MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

//! Small, direct Win32 platform primitives.
//!
//! Joist is a single-layer facade over the host OS: each function translates
//! one portable question ("does this path exist?", "what Windows is this?")
//! into one or two native calls and maps the answer back into a plain Rust
//! value.  There is no state shared between the pieces; callers use each
//! independently.
//!
//! - File and directory probes, bounded-capacity path canonicalization
//! - Console text coloring with a cached restore-to-default baseline
//! - Compiled architecture / byte-order identification, with a runtime probe
//! - Windows version and product-name resolution from the kernel32 version
//!   resource
//! - High-resolution start/stop timing over the performance counter
//! - System error-message formatting
//!
//! All Win32 FFI is confined to `platform::win32` and compiled only on
//! Windows.  The data types, lookup tables, and arithmetic are portable and
//! usable (and testable) on any host.

pub mod error;
pub mod ident;
pub mod platform;
pub mod report;
pub mod timer;
pub mod version;

pub use error::{JoistError, Result};
pub use ident::{
    compiled_architecture, compiled_endianness, runtime_endianness, Architecture, Endianness,
};
pub use report::PlatformReport;
pub use timer::PerfTimer;
pub use version::{OsVersion, WindowsVersion};

#[cfg(windows)]
pub use platform::win32::{
    console::{console, set_console_color, ColorTarget, Console, ConsoleColor},
    fs::{directory_exists, file_exists, file_size, full_path, full_path_with_capacity},
    sys_error::{format_system_error, print_system_error},
    version::{is_at_least, is_server_edition, os_version, os_version_and_name, verify_at_least},
};
