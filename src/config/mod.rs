//! Run configuration for upgrade-path resolution.
//!
//! Layered loading with priority:
//! 1. Default values (hardcoded)
//! 2. Optional config file passed by the harness
//! 3. Config file named by `UPGRADE_CONFIG_PATH`
//! 4. Environment variables (highest priority, `UPGRADE__` prefix)

mod settings;

pub use settings::*;
