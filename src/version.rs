// ── OS version data & product naming ──────────────────────────────────────────
//
// Plain data carried back from the resolver in `platform::win32::version`,
// plus the fixed (major, minor, server) → product-name table.  The table is
// pure and lives here so it can be exercised without a live Windows install.

use serde::{Deserialize, Serialize};

// ── Version number ────────────────────────────────────────────────────────────

/// A resolved operating-system version, tagged by platform.
///
/// Windows is the only platform this crate resolves; the tag keeps the wire
/// shape honest for consumers that persist it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsVersion {
    Windows(WindowsVersion),
}

/// Major/minor/build numbers read from the kernel32 version resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowsVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl WindowsVersion {
    /// `true` when this version is `major.minor` or newer.
    pub fn is_at_least(&self, major: u32, minor: u32) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }

    /// The marketing name for this version.
    ///
    /// `server` selects the server-SKU column of the table.  A minor version
    /// not explicitly listed under a known major falls back to the newest
    /// listed name plus `" or higher"`; an unknown major is
    /// `"Unknown Windows OS"`.
    pub fn product_name(&self, server: bool) -> &'static str {
        match self.major {
            10 => match self.minor {
                0 => {
                    if server {
                        "Windows Server 2016"
                    } else {
                        "Windows 10"
                    }
                }
                _ => {
                    if server {
                        "Windows Server 2016 or higher"
                    } else {
                        "Windows 10 or higher"
                    }
                }
            },
            6 => match self.minor {
                3 => {
                    if server {
                        "Windows Server 2012 R2"
                    } else {
                        "Windows 8.1"
                    }
                }
                2 => {
                    if server {
                        "Windows Server 2012"
                    } else {
                        "Windows 8"
                    }
                }
                1 => {
                    if server {
                        "Windows Server 2008 R2"
                    } else {
                        "Windows 7"
                    }
                }
                0 => {
                    if server {
                        "Windows Server 2008"
                    } else {
                        "Windows Vista"
                    }
                }
                _ => {
                    if server {
                        "Windows Server 2012 R2 or higher"
                    } else {
                        "Windows 8.1 or higher"
                    }
                }
            },
            5 => match self.minor {
                2 => {
                    if server {
                        "Windows Server 2003"
                    } else {
                        "Windows XP 64-Bit Edition"
                    }
                }
                1 => "Windows XP",
                0 => "Windows 2000",
                // The desktop fallback string is deliberately unprefixed.
                _ => {
                    if server {
                        "Windows Server 2003 or higher"
                    } else {
                        "XP or higher"
                    }
                }
            },
            _ => "Unknown Windows OS",
        }
    }
}

impl OsVersion {
    /// The Windows version record, whatever the platform tag.
    pub fn windows(&self) -> WindowsVersion {
        match self {
            Self::Windows(v) => *v,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn v(major: u32, minor: u32) -> WindowsVersion {
        WindowsVersion {
            major,
            minor,
            build: 0,
        }
    }

    #[test]
    fn windows_10_desktop_and_server() {
        assert_eq!(v(10, 0).product_name(false), "Windows 10");
        assert_eq!(v(10, 0).product_name(true), "Windows Server 2016");
        assert_eq!(v(10, 4).product_name(false), "Windows 10 or higher");
        assert_eq!(v(10, 4).product_name(true), "Windows Server 2016 or higher");
    }

    #[test]
    fn vista_through_eight_one() {
        assert_eq!(v(6, 0).product_name(false), "Windows Vista");
        assert_eq!(v(6, 0).product_name(true), "Windows Server 2008");
        assert_eq!(v(6, 1).product_name(false), "Windows 7");
        assert_eq!(v(6, 1).product_name(true), "Windows Server 2008 R2");
        assert_eq!(v(6, 2).product_name(false), "Windows 8");
        assert_eq!(v(6, 2).product_name(true), "Windows Server 2012");
        assert_eq!(v(6, 3).product_name(false), "Windows 8.1");
        assert_eq!(v(6, 3).product_name(true), "Windows Server 2012 R2");
    }

    /// An unmapped minor under a known major takes the "or higher" fallback.
    #[test]
    fn unmapped_minor_falls_back_to_or_higher() {
        assert_eq!(v(6, 9).product_name(false), "Windows 8.1 or higher");
        assert_eq!(v(6, 9).product_name(true), "Windows Server 2012 R2 or higher");
    }

    #[test]
    fn two_thousand_through_xp() {
        assert_eq!(v(5, 0).product_name(false), "Windows 2000");
        // Minor 0 and 1 name the same product for both SKUs.
        assert_eq!(v(5, 0).product_name(true), "Windows 2000");
        assert_eq!(v(5, 1).product_name(false), "Windows XP");
        assert_eq!(v(5, 1).product_name(true), "Windows XP");
        assert_eq!(v(5, 2).product_name(false), "Windows XP 64-Bit Edition");
        assert_eq!(v(5, 2).product_name(true), "Windows Server 2003");
        assert_eq!(v(5, 7).product_name(false), "XP or higher");
        assert_eq!(v(5, 7).product_name(true), "Windows Server 2003 or higher");
    }

    #[test]
    fn unknown_major_is_unknown_windows() {
        assert_eq!(v(2, 0).product_name(false), "Unknown Windows OS");
        assert_eq!(v(2, 0).product_name(true), "Unknown Windows OS");
        assert_eq!(v(11, 0).product_name(false), "Unknown Windows OS");
    }

    #[test]
    fn at_least_compares_major_then_minor() {
        assert!(v(10, 0).is_at_least(6, 3));
        assert!(v(6, 3).is_at_least(6, 3));
        assert!(v(6, 3).is_at_least(6, 2));
        assert!(!v(6, 2).is_at_least(6, 3));
        assert!(!v(5, 2).is_at_least(6, 0));
    }

    #[test]
    fn tagged_version_unwraps() {
        let os = OsVersion::Windows(v(10, 0));
        assert_eq!(os.windows().major, 10);
    }
}
