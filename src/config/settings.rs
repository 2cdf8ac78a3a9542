use std::env;
use std::path::PathBuf;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::manifest::Family;
use crate::selection::SelectionStrategy;
use crate::Error;
use crate::Result;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Which graph edges to consider and how to pin them
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Where the build under test comes from
    #[serde(default)]
    pub build: BuildConfig,

    /// Runtime (JDK) facts overriding harness detection
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SelectionConfig {
    /// Version selection strategy, one of ALL, BOTH, INDEV, RELEASES
    #[serde(default = "default_strategy")]
    pub strategy: SelectionStrategy,

    /// Only keep upgrades touching the release line currently under test.
    /// Keeps CI cost bounded when validating one line.
    #[serde(default)]
    pub target_version_only: bool,

    /// Run the static upgrade matrix as authored, without rewriting
    /// destinations to the local build under test
    #[serde(default)]
    pub static_matrix: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            target_version_only: false,
            static_matrix: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BuildConfig {
    /// Exact version slug of the build under test (e.g. "5.0.4")
    #[serde(default)]
    pub version: Option<String>,

    /// Source checkout of the build under test; materialized by the
    /// cluster-management tool as a `clone:` locator
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Explicit release line, required when only `dir` is configured
    /// (a bare checkout carries no version slug to classify)
    #[serde(default)]
    pub family: Option<Family>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct RuntimeConfig {
    /// Current JDK major; when unset the harness-detected value is used
    #[serde(default)]
    pub major: Option<u32>,
}

impl Settings {
    /// Load configuration from the layered sources.
    ///
    /// # Arguments
    /// * `config_path` - Optional path to a run-specific config file
    ///
    /// # Errors
    /// Fails on unreadable/unparsable sources, unknown strategy or family
    /// tokens, and validation failures. All of these are fatal: a run with a
    /// misspelled strategy must not silently test nothing.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Config::builder();

        if let Some(path) = config_path {
            config = config.add_source(File::with_name(path).required(true));
        }
        if let Ok(path) = env::var("UPGRADE_CONFIG_PATH") {
            config = config.add_source(File::with_name(&path));
        }
        config = config.add_source(
            Environment::with_prefix("UPGRADE")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        let settings: Settings = config
            .build()?
            .try_deserialize()
            .map_err(Error::Config)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validates run configuration consistency
    /// # Errors
    /// Returns `Error::InvalidConfig` if any configuration rules are violated
    pub fn validate(&self) -> Result<()> {
        if let Some(0) = self.runtime.major {
            return Err(Error::InvalidConfig(
                "runtime.major must be a positive JDK major version".into(),
            ));
        }

        if self.build.version.is_none() && self.build.dir.is_none() && self.build.family.is_some() {
            return Err(Error::InvalidConfig(
                "build.family is set but neither build.version nor build.dir names a build".into(),
            ));
        }

        Ok(())
    }
}

fn default_strategy() -> SelectionStrategy {
    SelectionStrategy::Indev
}
