//! Error hierarchy for the upgrade-path resolution engine.
//!
//! Everything here is a fatal configuration error: bad static manifest data,
//! an unrecognized strategy token, or a test session whose environment cannot
//! be resolved. Per-edge conditions (protocol mismatch, missing runtime,
//! family filter) are never errors — the builder skips those edges and logs
//! why.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Layered configuration loading/merging failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Static manifest entries violating descriptor invariants
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Unrecognized version selection strategy token
    #[error("Unknown version selection strategy {0:?}, expected one of ALL, BOTH, INDEV, RELEASES")]
    UnknownStrategy(String),

    /// A version outside every release line the manifest knows about
    #[error("Upgrades from/to version {0} are not supported. Add the new release line to the builtin manifest.")]
    UnsupportedVersion(String),

    /// Run configuration validation failures
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("Descriptor {name}: min protocol version {min} exceeds max protocol version {max}")]
    ProtocolRange { name: String, min: u8, max: u8 },

    #[error("Descriptor {name}: supported_runtimes must not be empty")]
    NoRuntimes { name: String },
}
