// ── Console text attributes ───────────────────────────────────────────────────
//
// Maps the portable color enum + target to console attribute words and
// applies them to the standard-output buffer.  The attribute word active
// before the first change is captured once, process-wide, so `Default` can
// restore the original look later.  The capture is never refreshed; if
// something outside the process recolors the console afterwards, the cached
// baseline goes stale.  That is accepted behavior.
//
// This is inside `platform::win32` so `unsafe` is permitted per crate policy.

#![allow(unsafe_code)]

use std::sync::OnceLock;

use windows::Win32::{
    Foundation::HANDLE,
    System::Console::{
        GetConsoleScreenBufferInfo, GetStdHandle, SetConsoleTextAttribute, BACKGROUND_BLUE,
        BACKGROUND_GREEN, BACKGROUND_INTENSITY, BACKGROUND_RED, CONSOLE_CHARACTER_ATTRIBUTES,
        CONSOLE_SCREEN_BUFFER_INFO, FOREGROUND_BLUE, FOREGROUND_GREEN, FOREGROUND_INTENSITY,
        FOREGROUND_RED, STD_OUTPUT_HANDLE,
    },
};

use crate::error::{JoistError, Result};

// ── Portable enums ────────────────────────────────────────────────────────────

/// Which half of the attribute word a color change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    Foreground,
    Background,
}

/// The 16 console colors plus the restore-the-baseline sentinel.
///
/// Dark variants are the bare channel bits; bright variants add the
/// intensity bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    Teal,
    DarkRed,
    Purple,
    Brown,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
    /// Whatever the console looked like before this process first changed it.
    Default,
}

// ── Attribute mapping ─────────────────────────────────────────────────────────

/// The fixed attribute word for a color, or `None` for [`ConsoleColor::Default`]
/// (which resolves against the cached baseline instead).
fn attribute_bits(target: ColorTarget, color: ConsoleColor) -> Option<u16> {
    let (blue, green, red, intensity) = match target {
        ColorTarget::Foreground => (
            FOREGROUND_BLUE,
            FOREGROUND_GREEN,
            FOREGROUND_RED,
            FOREGROUND_INTENSITY,
        ),
        ColorTarget::Background => (
            BACKGROUND_BLUE,
            BACKGROUND_GREEN,
            BACKGROUND_RED,
            BACKGROUND_INTENSITY,
        ),
    };

    let bits = match color {
        ConsoleColor::Default => return None,
        // No channel bits set is black on every console.
        ConsoleColor::Black => CONSOLE_CHARACTER_ATTRIBUTES(0),
        ConsoleColor::DarkBlue => blue,
        ConsoleColor::Blue => blue | intensity,
        ConsoleColor::DarkGreen => green,
        ConsoleColor::Green => green | intensity,
        ConsoleColor::DarkRed => red,
        ConsoleColor::Red => red | intensity,
        ConsoleColor::Brown => red | green,
        ConsoleColor::Yellow => red | green | intensity,
        ConsoleColor::Teal => blue | green,
        ConsoleColor::Cyan => blue | green | intensity,
        ConsoleColor::Purple => blue | red,
        ConsoleColor::Magenta => blue | red | intensity,
        ConsoleColor::Gray => blue | green | red,
        ConsoleColor::White => blue | green | red | intensity,
        ConsoleColor::DarkGray => intensity,
    };
    Some(bits.0)
}

// ── Console context ───────────────────────────────────────────────────────────

/// Owner of the lazily captured "default" attribute word.
///
/// The process-wide instance lives behind [`console`]; a separately
/// constructed instance (see [`Console::with_default_attributes`]) lets tests
/// and embedders pin the baseline instead of sampling the live console.
#[derive(Debug)]
pub struct Console {
    default_attributes: OnceLock<u16>,
}

impl Console {
    /// A console whose baseline will be sampled on first use.
    pub const fn new() -> Self {
        Self {
            default_attributes: OnceLock::new(),
        }
    }

    /// A console with a pre-seeded baseline; nothing is ever sampled.
    pub fn with_default_attributes(attributes: u16) -> Self {
        let console = Self::new();
        let _ = console.default_attributes.set(attributes);
        console
    }

    /// The attribute word the console had before the first change, captured
    /// once.  Zero (no attributes) when no console was ever attached.
    pub fn default_attributes(&self) -> u16 {
        *self.default_attributes.get_or_init(capture_default_attributes)
    }

    /// Apply `color` to the chosen half of standard-output's attribute word.
    ///
    /// The first call, on either target and whatever the color, captures the
    /// baseline so that a later [`ConsoleColor::Default`] restores the
    /// pre-change look rather than whatever was active by then.
    pub fn set_color(&self, target: ColorTarget, color: ConsoleColor) -> Result<()> {
        let baseline = self.default_attributes();
        let attributes = attribute_bits(target, color).unwrap_or(baseline);

        let handle = stdout_handle()?;
        // SAFETY: `handle` is the process stdout handle, valid for the
        // process lifetime; SetConsoleTextAttribute only reads the word.
        unsafe { SetConsoleTextAttribute(handle, CONSOLE_CHARACTER_ATTRIBUTES(attributes)) }
            .map_err(JoistError::from)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide console context.
pub fn console() -> &'static Console {
    static CONSOLE: Console = Console::new();
    &CONSOLE
}

/// Apply `color` to standard output via the process-wide [`Console`].
pub fn set_console_color(target: ColorTarget, color: ConsoleColor) -> Result<()> {
    console().set_color(target, color)
}

// ── Native plumbing ───────────────────────────────────────────────────────────

fn stdout_handle() -> Result<HANDLE> {
    // SAFETY: GetStdHandle has no preconditions; a process without a console
    // yields a null handle, which downstream calls reject cleanly.
    unsafe { GetStdHandle(STD_OUTPUT_HANDLE) }.map_err(JoistError::from)
}

/// Sample the active attribute word, or fall back to zero when standard
/// output is not a console.
fn capture_default_attributes() -> u16 {
    let Ok(handle) = stdout_handle() else {
        return 0;
    };
    let mut info = CONSOLE_SCREEN_BUFFER_INFO::default();

    // SAFETY: `handle` is valid (or null, in which case the call fails and
    // we take the fallback); `info` is a valid out structure on our stack.
    match unsafe { GetConsoleScreenBufferInfo(handle, &mut info) } {
        Ok(()) => info.wAttributes.0,
        Err(_) => 0,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
