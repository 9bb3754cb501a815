// ── Platform identification ───────────────────────────────────────────────────
//
// Which CPU family was this binary compiled for, and what is the byte order?
// The compiled answers come from constants the build script resolves out of
// the cargo target (`JOIST_TARGET_ARCH` / `JOIST_TARGET_ENDIAN`); the runtime
// byte-order probe exists as a fallback for targets the build metadata does
// not describe.  No `unsafe`; the probe is plain integer reinterpretation.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

// ── Architecture ──────────────────────────────────────────────────────────────

/// The CPU family a binary was compiled for.
///
/// Immutable per build; resolved once by the build script from the cargo
/// target triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Architecture {
    X86,
    X86_64,
    Arm,
    Arm64,
    Ia64,
    PowerPc,
    PowerPc64,
    Alpha,
    Sparc,
    /// The target string matched no known family.
    Unknown,
}

impl Architecture {
    /// Short display string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X86 => "x86",
            Self::X86_64 => "x86-64",
            Self::Arm => "ARM",
            Self::Arm64 => "ARM64",
            Self::Ia64 => "IA-64",
            Self::PowerPc => "PowerPC",
            Self::PowerPc64 => "PowerPC64",
            Self::Alpha => "Alpha",
            Self::Sparc => "SPARC",
            Self::Unknown => "unknown",
        }
    }
}

// ── Endianness ────────────────────────────────────────────────────────────────

/// Byte order of the running (or targeted) machine.
///
/// The two word-swapped orderings exist on PDP-style hardware; nothing this
/// crate targets produces them, but the runtime probe can classify them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Endianness {
    Big,
    Little,
    BigWord,
    LittleWord,
    Unknown,
}

impl Endianness {
    /// Short display string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Big => "big endian",
            Self::Little => "little endian",
            Self::BigWord => "big word endian",
            Self::LittleWord => "little word endian",
            Self::Unknown => "unknown",
        }
    }
}

// ── Compiled-target resolution ────────────────────────────────────────────────

/// The architecture this binary was compiled for.
///
/// Pure function of the build-time target; no I/O.  Returns
/// [`Architecture::Unknown`] for a target family this crate has no name for.
pub fn compiled_architecture() -> Architecture {
    match env!("JOIST_TARGET_ARCH") {
        "x86" => Architecture::X86,
        "x86_64" => Architecture::X86_64,
        "arm" => Architecture::Arm,
        "aarch64" => Architecture::Arm64,
        "ia64" => Architecture::Ia64,
        "powerpc" => Architecture::PowerPc,
        "powerpc64" => Architecture::PowerPc64,
        "alpha" => Architecture::Alpha,
        "sparc" | "sparc64" => Architecture::Sparc,
        _ => Architecture::Unknown,
    }
}

/// The byte order this binary was compiled for.
///
/// Resolved from build-time target metadata; if the metadata is absent or
/// unrecognised, falls back to [`runtime_endianness`].
pub fn compiled_endianness() -> Endianness {
    match env!("JOIST_TARGET_ENDIAN") {
        "little" => Endianness::Little,
        "big" => Endianness::Big,
        _ => runtime_endianness(),
    }
}

// ── Runtime probe ─────────────────────────────────────────────────────────────

/// Byte order measured at runtime, memoized for the process lifetime.
///
/// Writes the byte sequence `0x00 0x01 0x02 0x03` into a `u32`'s backing
/// storage and classifies the resulting value.
pub fn runtime_endianness() -> Endianness {
    static RUNTIME_ENDIANNESS: OnceLock<Endianness> = OnceLock::new();
    *RUNTIME_ENDIANNESS.get_or_init(probe_endianness)
}

fn probe_endianness() -> Endianness {
    classify_probe(u32::from_ne_bytes([0x00, 0x01, 0x02, 0x03]))
}

/// Map the probe word to an ordering.  Any value outside the four layouts a
/// 4-byte sequence can produce is `Unknown`.
fn classify_probe(value: u32) -> Endianness {
    match value {
        0x0001_0203 => Endianness::Big,
        0x0302_0100 => Endianness::Little,
        0x0203_0001 => Endianness::BigWord,
        0x0100_0302 => Endianness::LittleWord,
        _ => Endianness::Unknown,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_classifies_all_four_orderings() {
        assert_eq!(classify_probe(0x0001_0203), Endianness::Big);
        assert_eq!(classify_probe(0x0302_0100), Endianness::Little);
        assert_eq!(classify_probe(0x0203_0001), Endianness::BigWord);
        assert_eq!(classify_probe(0x0100_0302), Endianness::LittleWord);
    }

    #[test]
    fn probe_rejects_impossible_layouts() {
        assert_eq!(classify_probe(0), Endianness::Unknown);
        assert_eq!(classify_probe(0x0102_0300), Endianness::Unknown);
    }

    /// Two calls must return the same memoized value.
    #[test]
    fn runtime_probe_is_memoized() {
        let first = runtime_endianness();
        let second = runtime_endianness();
        assert_eq!(first, second);
        assert_ne!(first, Endianness::Unknown);
    }

    /// The runtime probe and the build-time constant describe the same
    /// machine when the crate runs on the machine it was built for.
    #[test]
    fn compiled_and_runtime_endianness_agree() {
        assert_eq!(compiled_endianness(), runtime_endianness());
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn compiled_endianness_matches_target() {
        assert_eq!(compiled_endianness(), Endianness::Little);
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn compiled_architecture_matches_target() {
        assert_eq!(compiled_architecture(), Architecture::X86_64);
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn compiled_architecture_matches_target() {
        assert_eq!(compiled_architecture(), Architecture::Arm64);
    }

    #[test]
    fn architecture_never_resolves_to_empty_label() {
        assert!(!compiled_architecture().as_str().is_empty());
    }
}
