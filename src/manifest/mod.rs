//! Static version manifest: the closed set of known server versions and the
//! hand-curated graph of supported upgrades between them.
//!
//! All data here is process-wide immutable configuration, built once at first
//! access and never mutated. New entries are added whenever the database
//! branches a new release line.

mod descriptor;
mod family;
mod graph;

pub use descriptor::*;
pub use family::*;
pub use graph::*;
