// ── System error messages ─────────────────────────────────────────────────────
//
// Maps a native error code to the system's message text and prints it as
// `"<code> - <message>"`.  The message is formatted into a fixed-capacity
// buffer; system messages are short and a bounded buffer keeps the ownership
// story trivial.
//
// This is inside `platform::win32` so `unsafe` is permitted per crate policy.

#![allow(unsafe_code)]

use windows::{
    core::PWSTR,
    Win32::System::Diagnostics::Debug::{
        FormatMessageW, FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS,
    },
};

/// Maximum message length in `WCHAR`s.  The longest stock system message is
/// well under this.
const MESSAGE_BUF_LEN: usize = 512;

/// MAKELANGID(LANG_NEUTRAL, SUBLANG_DEFAULT): the user's default language.
const LANG_USER_DEFAULT: u32 = 0x0400;

/// The system-provided message text for a native error code.
///
/// Returns an empty string when the system has no message for the code (or
/// it does not fit the fixed buffer).  Trailing CR/LF that FormatMessageW
/// appends is trimmed.
pub fn format_system_error(code: u32) -> String {
    let mut buf = [0u16; MESSAGE_BUF_LEN];

    // SAFETY: `buf` is writable for MESSAGE_BUF_LEN WCHARs and outlives the
    // call; FROM_SYSTEM without ALLOCATE_BUFFER writes only into it.
    // IGNORE_INSERTS keeps messages with %1-style placeholders from failing.
    let len = unsafe {
        FormatMessageW(
            FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
            None,
            code,
            LANG_USER_DEFAULT,
            PWSTR(buf.as_mut_ptr()),
            MESSAGE_BUF_LEN as u32,
            None,
        )
    } as usize;

    if len == 0 {
        return String::new();
    }
    String::from_utf16_lossy(&buf[..len]).trim_end().to_owned()
}

/// Write `"<code> - <message>"` for a native error code to standard output.
pub fn print_system_error(code: u32) {
    println!("{}", render_error_line(code, &format_system_error(code)));
}

/// The printed form; a code the system has no text for gets a placeholder
/// rather than a bare dash.
fn render_error_line(code: u32, message: &str) -> String {
    if message.is_empty() {
        format!("{code} - <no system message>")
    } else {
        format!("{code} - {message}")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
