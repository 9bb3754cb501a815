// ── Platform report ───────────────────────────────────────────────────────────
//
// A versioned, serializable snapshot of what the identification and version
// modules resolved.  No `unsafe` — pure safe Rust + serde_json.

use serde::{Deserialize, Serialize};

use crate::ident::{Architecture, Endianness};
use crate::version::OsVersion;

// ── Wire type ─────────────────────────────────────────────────────────────────

/// Snapshot of the resolved platform facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformReport {
    pub version: u32,
    pub architecture: Architecture,
    pub endianness: Endianness,
    /// Resolved OS version, or `None` when resolution failed (or the report
    /// was produced off-Windows).
    #[serde(default)]
    pub os: Option<OsVersion>,
    /// Marketing name matching `os`, e.g. `"Windows 10"`.
    #[serde(default)]
    pub os_name: Option<String>,
}

// ── Format version ────────────────────────────────────────────────────────────

const REPORT_VERSION: u32 = 1;

impl PlatformReport {
    /// Gather a report from the running system.
    ///
    /// OS resolution failures are not errors here; the fields stay `None` and
    /// the compile-time facts are still reported.
    #[cfg(windows)]
    pub fn gather() -> Self {
        let resolved = crate::platform::win32::version::os_version_and_name().ok();
        Self {
            version: REPORT_VERSION,
            architecture: crate::ident::compiled_architecture(),
            endianness: crate::ident::compiled_endianness(),
            os: resolved.map(|(os, _)| os),
            os_name: resolved.map(|(_, name)| name.to_owned()),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a report from JSON.
    ///
    /// Returns `None` on any error: parse failure or an unrecognised format
    /// version.
    pub fn from_json(data: &str) -> Option<Self> {
        let report: Self = serde_json::from_str(data).ok()?;
        if report.version != REPORT_VERSION {
            return None;
        }
        Some(report)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::WindowsVersion;

    fn make_report() -> PlatformReport {
        PlatformReport {
            version: REPORT_VERSION,
            architecture: Architecture::X86_64,
            endianness: Endianness::Little,
            os: Some(OsVersion::Windows(WindowsVersion {
                major: 10,
                minor: 0,
                build: 19045,
            })),
            os_name: Some("Windows 10".to_owned()),
        }
    }

    #[test]
    fn roundtrip_with_resolved_os() {
        let report = make_report();
        let json = report.to_json_pretty().expect("serialize");
        let parsed = PlatformReport::from_json(&json).expect("deserialize");

        assert_eq!(parsed, report);
        assert_eq!(parsed.os.unwrap().windows().build, 19045);
    }

    /// Reports written without OS fields (resolution failed, or a pre-OS
    /// producer) must parse with the fields defaulted to `None`.
    #[test]
    fn os_fields_default_to_none_when_absent() {
        let json = r#"{"version":1,"architecture":"X86_64","endianness":"Little"}"#;
        let parsed = PlatformReport::from_json(json).expect("deserialize sparse report");
        assert_eq!(parsed.os, None);
        assert_eq!(parsed.os_name, None);
    }

    /// A report with an unrecognised format version must be rejected.
    #[test]
    fn wrong_version_is_rejected() {
        let mut report = make_report();
        report.version = 99;
        let json = report.to_json_pretty().expect("serialize");
        assert!(PlatformReport::from_json(&json).is_none());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(PlatformReport::from_json("{not json").is_none());
    }
}
