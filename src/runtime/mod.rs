//! Runtime (JDK) compatibility filtering.
//!
//! A version can only be exercised if the current JDK major is one it
//! supports, or if a `JAVA<N>_HOME` environment marker shows a usable JDK is
//! obtainable for it - the cluster-management tool detects those markers and
//! switches JDKs when starting or upgrading a node.

use std::collections::BTreeSet;
use std::env;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::info;

use crate::manifest::VersionDescriptor;

lazy_static! {
    static ref RUNTIME_HOME_MARKER: Regex =
        Regex::new(r"^JAVA(\d+)_HOME$").expect("runtime marker pattern is valid");
}

/// Runtime facts gathered once per test session: the detected current JDK
/// major and the set of majors obtainable through `JAVA<N>_HOME` markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeEnv {
    current_major: u32,
    obtainable: BTreeSet<u32>,
}

impl RuntimeEnv {
    pub fn new(
        current_major: u32,
        obtainable: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            current_major,
            obtainable: obtainable.into_iter().collect(),
        }
    }

    /// Scan the process environment for `JAVA<N>_HOME` markers. The detected
    /// current major is supplied by the harness (it knows how to interrogate
    /// `$JAVA_HOME/bin/java`).
    pub fn from_env(current_major: u32) -> Self {
        let obtainable = env::vars()
            .filter_map(|(key, _)| {
                RUNTIME_HOME_MARKER
                    .captures(&key)
                    .and_then(|captures| captures[1].parse().ok())
            })
            .collect();
        Self {
            current_major,
            obtainable,
        }
    }

    pub fn current_major(&self) -> u32 {
        self.current_major
    }

    pub fn obtainable(&self) -> &BTreeSet<u32> {
        &self.obtainable
    }

    fn is_includable(
        &self,
        meta: &VersionDescriptor,
    ) -> bool {
        meta.supported_runtimes.contains(&self.current_major)
            || meta
                .supported_runtimes
                .iter()
                .any(|major| self.obtainable.contains(major))
    }

    /// Subsequence of `steps` that can run under this environment, in the
    /// original order. Skipped versions are logged with the reason.
    pub fn compatible_steps<'a>(
        &self,
        steps: &[&'a VersionDescriptor],
    ) -> Vec<&'a VersionDescriptor> {
        let mut included = Vec::with_capacity(steps.len());
        for meta in steps {
            if self.is_includable(meta) {
                included.push(*meta);
            } else {
                let markers: Vec<String> = meta
                    .supported_runtimes
                    .iter()
                    .map(|major| format!("JAVA{major}_HOME"))
                    .collect();
                info!(
                    "Skipping version {} because it requires JDK {:?}. Current JDK is {} and none of {:?} env variables are defined.",
                    meta.version_locator, meta.supported_runtimes, self.current_major, markers
                );
            }
        }
        included
    }

    /// An upgrade path is only executable when at least two of its steps
    /// survive the filter; a path with a non-includable hop is dropped
    /// entirely, never partially executed.
    pub fn can_execute(
        &self,
        steps: &[&VersionDescriptor],
    ) -> bool {
        self.compatible_steps(steps).len() > 1
    }
}
