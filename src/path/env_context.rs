use std::path::PathBuf;

use tracing::info;

use crate::config::Settings;
use crate::manifest::Family;
use crate::runtime::RuntimeEnv;
use crate::Error;
use crate::Result;

/// How the build currently under test is materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalBuild {
    /// A pinned version slug, fetched by the cluster-management tool
    Version(String),
    /// A local source checkout
    Dir(PathBuf),
}

impl LocalBuild {
    /// The locator handed to the cluster-management tool for this build.
    pub fn version_locator(&self) -> String {
        match self {
            LocalBuild::Version(version) => version.clone(),
            LocalBuild::Dir(dir) => format!("clone:{}", dir.display()),
        }
    }
}

/// Environment facts resolved once per test session and threaded explicitly
/// into [`PathBuilder`](crate::PathBuilder): the release line under test, the
/// local build it resolves to, and the runtime environment.
///
/// Re-resolution mid-run is unsupported; the session's version family is
/// fixed for its lifetime.
#[derive(Debug, Clone)]
pub struct EnvContext {
    pub family: Family,
    pub local_build: LocalBuild,
    pub runtime: RuntimeEnv,
}

impl EnvContext {
    /// Resolve the session environment from run configuration.
    ///
    /// An explicit `build.family` override wins; otherwise the configured
    /// version slug is classified into its release line (a bare source
    /// checkout carries no slug, so checkout-only builds require the
    /// override). `detected_runtime_major` is the JDK major the harness
    /// detected, overridable via `runtime.major`.
    ///
    /// # Errors
    /// Fails when no build is configured at all, when a checkout-only build
    /// lacks a family override, or when the version slug belongs to no known
    /// release line. Paths must never be built against an unresolved
    /// environment.
    pub fn resolve(
        settings: &Settings,
        detected_runtime_major: u32,
    ) -> Result<Self> {
        let local_build = match (&settings.build.version, &settings.build.dir) {
            (Some(version), _) => LocalBuild::Version(version.clone()),
            (None, Some(dir)) => LocalBuild::Dir(dir.clone()),
            (None, None) => {
                return Err(Error::InvalidConfig(
                    "either build.version or build.dir must name the build under test".into(),
                ))
            }
        };

        let family = match (&local_build, settings.build.family) {
            (LocalBuild::Version(version), None) => Family::detect(version)?,
            (_, Some(family)) => family,
            (LocalBuild::Dir(_), None) => {
                return Err(Error::InvalidConfig(
                    "build.family is required when only build.dir is configured".into(),
                ))
            }
        };
        info!("Setting version family to {family}");

        let current_major = settings.runtime.major.unwrap_or(detected_runtime_major);

        Ok(Self {
            family,
            local_build,
            runtime: RuntimeEnv::from_env(current_major),
        })
    }
}
