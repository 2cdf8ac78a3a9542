//! Upgrade-path resolution for distributed database cluster testing.
//!
//! The crate holds a hand-curated compatibility graph of server versions and
//! turns it into the concrete list of upgrade scenarios a test harness should
//! run: graph edges are filtered by a selection strategy, by wire-protocol
//! overlap between the two versions, optionally restricted to the release
//! line currently under test, and finally checked against the runtimes
//! available in the execution environment.
//!
//! Driving the cluster itself (process management, client sessions, log
//! scraping) is the harness' job; this crate only decides *which* upgrades
//! are worth exercising.

mod config;
mod errors;
mod manifest;
mod path;
mod runtime;
mod selection;

pub use config::*;
pub use errors::*;
pub use manifest::*;
pub use path::*;
pub use runtime::*;
pub use selection::*;

#[cfg(test)]
pub mod test_utils;
