// ── Platform abstraction layer ────────────────────────────────────────────────
//
// This module holds everything that talks to the OS directly.  No `unsafe`
// lives outside the `win32` sub-module, and the raw handles and wide-string
// plumbing never leak outward: callers see `Path`, `str`, and crate enums.

#[cfg(windows)]
pub mod win32;
