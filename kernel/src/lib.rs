//! Wayfinder Kernel: canonical encoding and content hashing.
//!
//! # API Surface
//!
//! - [`digest::canon::canonical_json_bytes`] -- deterministic JSON bytes
//! - [`digest::hash::canonical_hash`] -- domain-separated SHA-256
//!
//! Search and harness crates route every digest through these two functions.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
