//! Document text fingerprints.
//!
//! A host re-sends a file's whole text on every edit. Comparing the
//! [`Fingerprint`] of the new text with the one the last analysis was built
//! from tells whether projection and inference have to run again.

use std::fmt;

use xxhash_rust::xxh3::xxh3_64;

/// xxHash3 digest of a document's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    #[inline]
    pub fn of(text: &str) -> Self {
        Self(xxh3_64(text.as_bytes()))
    }

    #[inline]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Sixteen lowercase hex digits.
impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
