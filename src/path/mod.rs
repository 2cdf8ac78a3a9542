//! Upgrade-path construction: environment resolution plus the orchestrating
//! builder that turns graph edges into concrete [`UpgradeScenario`]s.

mod builder;
mod env_context;

pub use builder::*;
pub use env_context::*;

#[cfg(test)]
mod builder_test;
