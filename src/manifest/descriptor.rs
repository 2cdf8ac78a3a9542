use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use super::Family;
use crate::DescriptorError;
use crate::Result;

/// Whether a descriptor points at a pinned release or a moving branch head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Most recent released (pinned) version of a line
    Current,
    /// The line's in-development head, where changing code is found
    InDev,
}

/// Immutable metadata for one named server version: its release line, its
/// variant, how to materialize it, the inclusive wire-protocol range it
/// speaks, and the runtime majors it can run under.
///
/// The version locator is opaque to this crate (a release number, a
/// source-control reference, an alias) and is passed through untouched to the
/// cluster-management tool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionDescriptor {
    pub name: String,
    pub family: Family,
    pub variant: Variant,
    pub version_locator: String,
    pub min_protocol_version: u8,
    pub max_protocol_version: u8,
    pub supported_runtimes: BTreeSet<u32>,
}

impl VersionDescriptor {
    /// # Errors
    /// Fails fast on an inverted protocol range or an empty runtime set;
    /// both are fatal data-authoring errors.
    pub fn new(
        name: impl Into<String>,
        family: Family,
        variant: Variant,
        version_locator: impl Into<String>,
        min_protocol_version: u8,
        max_protocol_version: u8,
        supported_runtimes: impl IntoIterator<Item = u32>,
    ) -> Result<Self> {
        let name = name.into();
        if min_protocol_version > max_protocol_version {
            return Err(DescriptorError::ProtocolRange {
                name,
                min: min_protocol_version,
                max: max_protocol_version,
            }
            .into());
        }
        let supported_runtimes: BTreeSet<u32> = supported_runtimes.into_iter().collect();
        if supported_runtimes.is_empty() {
            return Err(DescriptorError::NoRuntimes { name }.into());
        }
        Ok(Self {
            name,
            family,
            variant,
            version_locator: version_locator.into(),
            min_protocol_version,
            max_protocol_version,
            supported_runtimes,
        })
    }

    /// Clone of this descriptor with only the version locator replaced. Used
    /// when a test run targets an exact local build rather than the pinned
    /// release the manifest names.
    pub fn with_version_locator(
        &self,
        version_locator: impl Into<String>,
    ) -> Self {
        Self {
            version_locator: version_locator.into(),
            ..self.clone()
        }
    }

    /// Largest runtime major this version supports. The harness uses it to
    /// pick a JDK for single-version phases of a test.
    pub fn max_runtime(&self) -> u32 {
        *self
            .supported_runtimes
            .iter()
            .next_back()
            .expect("supported_runtimes is non-empty by construction")
    }

    pub fn is_indev(&self) -> bool {
        self.variant == Variant::InDev
    }

    /// True if this descriptor belongs to the release line of the version
    /// currently configured for the test session.
    pub fn matches_family(
        &self,
        env_family: Family,
    ) -> bool {
        self.family == env_family
    }

    /// [`matches_family`](Self::matches_family) and this descriptor is the
    /// line's in-development head.
    pub fn matches_family_and_is_indev(
        &self,
        env_family: Family,
    ) -> bool {
        self.matches_family(env_family) && self.is_indev()
    }
}

/// True iff the two versions share at least one wire-protocol version, i.e.
/// a mixed-version cluster of the two can keep serving clients during a
/// rolling upgrade.
pub fn have_common_protocol(
    origin: &VersionDescriptor,
    destination: &VersionDescriptor,
) -> bool {
    origin.max_protocol_version >= destination.min_protocol_version
}
