//! Shared fixtures for unit tests.

use crate::manifest::Family;
use crate::manifest::Variant;
use crate::manifest::VersionDescriptor;
use crate::path::EnvContext;
use crate::path::LocalBuild;
use crate::runtime::RuntimeEnv;

/// Descriptor with a protocol range and runtime set most tests do not care
/// about.
pub fn meta(
    name: &str,
    family: Family,
    variant: Variant,
) -> VersionDescriptor {
    meta_full(name, family, variant, 4, 5, &[11])
}

pub fn meta_full(
    name: &str,
    family: Family,
    variant: Variant,
    min_protocol: u8,
    max_protocol: u8,
    runtimes: &[u32],
) -> VersionDescriptor {
    VersionDescriptor::new(
        name,
        family,
        variant,
        format!("locator:{name}"),
        min_protocol,
        max_protocol,
        runtimes.iter().copied(),
    )
    .expect("test descriptor is well-formed")
}

/// Session context with no dependence on process environment variables.
pub fn env_context(
    family: Family,
    local_version: &str,
    runtime_major: u32,
) -> EnvContext {
    EnvContext {
        family,
        local_build: LocalBuild::Version(local_version.to_string()),
        runtime: RuntimeEnv::new(runtime_major, []),
    }
}
