use serde::Serialize;
use tracing::debug;

use super::EnvContext;
use crate::config::Settings;
use crate::manifest::have_common_protocol;
use crate::manifest::CompatibilityGraph;
use crate::manifest::VersionDescriptor;
use crate::selection::SelectionStrategy;

/// One concrete upgrade to exercise: the pair of resolved version locators
/// the harness installs and runs, plus both originating descriptors for
/// downstream metadata (required JDK, protocol range).
///
/// Constructed only by [`PathBuilder`]; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradeScenario {
    pub name: String,
    pub origin_locator: String,
    pub destination_locator: String,
    pub origin: VersionDescriptor,
    pub destination: VersionDescriptor,
}

/// Builds the list of upgrade scenarios for one test session by walking the
/// compatibility graph in insertion order and applying, per edge: the
/// selection strategy, the wire-protocol overlap check, the optional
/// current-family restriction, the local-build locator rewrite and the
/// runtime filter.
///
/// Emission order follows graph order; no sorting or deduplication is
/// performed (a duplicate edge in the graph is a data-authoring error, not
/// something this builder corrects for). Identical inputs always yield an
/// identical scenario list.
pub struct PathBuilder<'a> {
    graph: &'a CompatibilityGraph,
    strategy: SelectionStrategy,
    target_family_only: bool,
    static_matrix: bool,
    env: &'a EnvContext,
}

impl<'a> PathBuilder<'a> {
    pub fn new(
        graph: &'a CompatibilityGraph,
        settings: &Settings,
        env: &'a EnvContext,
    ) -> Self {
        Self {
            graph,
            strategy: settings.selection.strategy,
            target_family_only: settings.selection.target_version_only,
            static_matrix: settings.selection.static_matrix,
            env,
        }
    }

    pub fn build(&self) -> Vec<UpgradeScenario> {
        let mut scenarios = Vec::new();

        for (origin, destinations) in self.graph.iter() {
            for destination in destinations {
                if !self.strategy.accepts(origin, destination) {
                    continue;
                }

                if !have_common_protocol(origin, destination) {
                    debug!(
                        "skipping upgrade path, no compatible protocol version between {} and {}",
                        origin.name, destination.name
                    );
                    continue;
                }

                // A change in an older line can still break upgrades into the
                // line under test, so the restriction keeps edges touching
                // the current family from either end.
                if self.target_family_only
                    && !origin.matches_family_and_is_indev(self.env.family)
                    && !destination.matches_family(self.env.family)
                {
                    debug!(
                        "skipping upgrade path, neither {} nor {} matches target family {} and selection.target_version_only is set",
                        origin.name, destination.name, self.env.family
                    );
                    continue;
                }

                let name = format!("Upgrade_{}_To_{}", origin.name, destination.name);

                let destination = if !self.static_matrix && destination.matches_family(self.env.family) {
                    // the edge lands in the line under test, so pin the
                    // destination to the exact build being validated
                    let resolved = self.env.local_build.version_locator();
                    debug!(
                        "{} appears applicable to current env. Overriding final test version from {} to {}",
                        name, destination.version_locator, resolved
                    );
                    destination.with_version_locator(resolved)
                } else {
                    destination.clone()
                };

                if !self.env.runtime.can_execute(&[origin, &destination]) {
                    continue;
                }

                scenarios.push(UpgradeScenario {
                    name,
                    origin_locator: origin.version_locator.clone(),
                    destination_locator: destination.version_locator.clone(),
                    origin: origin.clone(),
                    destination,
                });
            }
        }

        scenarios
    }
}
