//! Project identifiers.
//!
//! # Responsibilities
//! - Mint fresh identifiers (UUID v4)
//! - Decide whether an externally supplied string has the canonical shape
//!
//! # Design Decisions
//! - Only the hyphenated 8-4-4-4-12 form is accepted; braced, URN and
//!   simple (no hyphen) forms are rejected even though `uuid` can parse them
//! - Version nibble must be 1..=5 with the RFC 4122 variant, or the nil UUID
//! - The shape check is case-insensitive, but ids compare by their exact
//!   spelling: an uppercase rendering of a stored id is a different id

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of a hyphenated UUID string.
const CANONICAL_LEN: usize = 36;

/// Byte offsets of the hyphens in a hyphenated UUID.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// Opaque identifier of a project, kept exactly as minted or supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Mint a new random identifier (lowercase hyphenated UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// Accept a canonical identifier string, preserving its spelling.
    pub fn parse(s: &str) -> Option<Self> {
        is_valid_format(s).then(|| Self(s.to_string()))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when a string is not a canonical project id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid project id: {0:?}")]
pub struct InvalidProjectId(pub String);

impl FromStr for ProjectId {
    type Err = InvalidProjectId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidProjectId(s.to_string()))
    }
}

/// Returns true iff `s` is a canonical hyphenated UUID (versions 1-5 or nil).
pub fn is_valid_format(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != CANONICAL_LEN {
        return false;
    }

    for (i, b) in bytes.iter().enumerate() {
        let ok = if HYPHENS.contains(&i) {
            *b == b'-'
        } else {
            b.is_ascii_hexdigit()
        };
        if !ok {
            return false;
        }
    }

    if s == Uuid::nil().hyphenated().to_string() {
        return true;
    }

    // xxxxxxxx-xxxx-Vxxx-Nxxx-xxxxxxxxxxxx
    let version = bytes[14];
    let variant = bytes[19].to_ascii_lowercase();
    matches!(version, b'1'..=b'5') && matches!(variant, b'8' | b'9' | b'a' | b'b')
}
