//! Wayfinder harness: concrete problems, configuration and reporting on top
//! of the search engine.
//!
//! - [`worlds`] holds the problem definitions: explicit weighted graphs, the
//!   3×3 sliding puzzle and the 8/5/3 water jugs.
//! - [`config`] loads a graph problem and its search policy from TOML.
//! - [`runner`] runs strategy comparisons and persists them as a digested
//!   report directory.
//! - [`render`] formats solutions and reports as plain text.
//!
//! The harness does not implement search; it delegates to `wayfinder-search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod render;
pub mod runner;
pub mod worlds;
