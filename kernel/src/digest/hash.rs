//! Content hashing with domain separation.
//!
//! Algorithm: SHA-256 over `domain_bytes || data`. Results are rendered as
//! `"sha256:<hex>"` strings.

use sha2::{Digest, Sha256};

pub use super::hash_domain::HashDomain;

/// A content-addressed hash: `"sha256:<64 lowercase hex>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
}

impl ContentHash {
    /// Parse a stored digest string.
    ///
    /// Returns `None` unless `s` is `sha256:` followed by exactly 64
    /// lowercase hex digits, the only form [`canonical_hash`] produces.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let digest = s.strip_prefix("sha256:")?;
        let well_formed = digest.len() == 64
            && digest
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        well_formed.then(|| Self {
            full: s.to_string(),
        })
    }

    /// The full string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Compute the canonical hash of `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let digest = hasher.finalize();
    ContentHash {
        full: format!("sha256:{}", hex::encode(digest)),
    }
}
