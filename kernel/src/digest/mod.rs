//! Digest module: canonical JSON bytes, typed hash domains, content hashing.
//!
//! `canon` depends on nothing internal. `hash` depends on `hash_domain`.

pub mod canon;
pub mod hash;
pub mod hash_domain;
