//! Concrete search problems.

pub mod explicit_graph;
pub mod sliding_puzzle;
pub mod water_jug;
