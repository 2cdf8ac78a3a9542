//! Version selection strategies: which compatibility-graph edges are in play
//! for a given test run.

mod strategy;

pub use strategy::*;
