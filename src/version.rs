//! Compile-time version triple of the mesh kernel.
//!
//! The probe reports the exact version it was built against, so the triple is
//! taken from the crate's own build constants rather than queried at runtime.
//! Re-running the same build always reports the same triple.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic version triple exposed by the kernel at build time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionTriple {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parse one decimal version component at compile time.
///
/// Cargo guarantees the `CARGO_PKG_VERSION_*` strings are plain decimal
/// integers, so no sign or overflow handling is needed here.
const fn parse_component(raw: &str) -> u32 {
    let bytes = raw.as_bytes();
    let mut value = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}

/// The version triple this kernel was built as.
pub const fn kernel_version() -> VersionTriple {
    VersionTriple {
        major: parse_component(env!("CARGO_PKG_VERSION_MAJOR")),
        minor: parse_component(env!("CARGO_PKG_VERSION_MINOR")),
        patch: parse_component(env!("CARGO_PKG_VERSION_PATCH")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triple_matches_manifest_version() {
        let v = kernel_version();
        assert_eq!(format!("{v}"), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn parse_component_handles_multiple_digits() {
        assert_eq!(parse_component("0"), 0);
        assert_eq!(parse_component("12"), 12);
        assert_eq!(parse_component("304"), 304);
    }

    #[test]
    fn stable_across_calls() {
        assert_eq!(kernel_version(), kernel_version());
    }

    #[test]
    fn json_roundtrip() {
        let v = kernel_version();
        let s = serde_json::to_string(&v).unwrap();
        let v2: VersionTriple = serde_json::from_str(&s).unwrap();
        assert_eq!(v2, v);
    }
}
