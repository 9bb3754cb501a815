// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in Joist return `error::Result<T>`.  The boolean
// probes (`file_exists`, `directory_exists`) are the deliberate exception:
// they collapse every failure mode to `false` and never distinguish "absent"
// from "inaccessible".

/// Every error that Joist can produce.
#[derive(Debug)]
pub enum JoistError {
    /// A Win32 API call returned a failure code.
    Win32 {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw Win32 error code (`GetLastError()` value) or HRESULT.
        code: u32,
    },

    /// An argument was empty or otherwise unusable before any native call
    /// was made.
    BadParameter {
        /// What was wrong with the argument.
        what: &'static str,
    },

    /// A caller-supplied (or fixed) buffer capacity was too small for the
    /// result.  Bounded buffers never grow and never truncate; they fail.
    InsufficientCapacity {
        /// The capacity the operation would have needed, in elements.
        required: usize,
        /// The capacity that was available.
        capacity: usize,
    },

    /// The system library's version resource was absent, empty, or shorter
    /// than a fixed version record.
    VersionResource {
        /// What made the resource unusable.
        reason: &'static str,
    },

    /// A working buffer could not be allocated.
    Memory {
        /// The allocation size that failed, in bytes.
        bytes: usize,
    },
}

impl std::fmt::Display for JoistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win32 { function, code } => {
                write!(f, "{function} failed (error {code:#010x})")
            }
            Self::BadParameter { what } => write!(f, "bad parameter: {what}"),
            Self::InsufficientCapacity { required, capacity } => {
                write!(f, "buffer capacity {capacity} too small (need {required})")
            }
            Self::VersionResource { reason } => {
                write!(f, "version resource unusable: {reason}")
            }
            Self::Memory { bytes } => write!(f, "failed to allocate {bytes} bytes"),
        }
    }
}

impl std::error::Error for JoistError {}

// Convert a windows-crate error (HRESULT) directly into a JoistError so that
// `?` can be used on `windows::core::Result<T>` throughout the platform module.
#[cfg(windows)]
impl From<windows::core::Error> for JoistError {
    fn from(e: windows::core::Error) -> Self {
        // HRESULT.0 is i32; reinterpret bits as u32 for display purposes.
        // Win32 errors appear as 0x8007xxxx HRESULTs.
        Self::Win32 {
            function: "windows",
            code: e.code().0 as u32,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, JoistError>;
