use indexmap::IndexMap;
use lazy_static::lazy_static;
use tracing::warn;

use super::Family;
use super::Variant;
use super::VersionDescriptor;
use super::TRUNK;
use crate::Result;

/// Directed mapping from an origin version to the ordered list of versions
/// it is allowed to upgrade to. Hand-curated data, never computed; iteration
/// order (and therefore scenario emission order) is insertion order.
///
/// "Supported upgrade" from A to B means the cluster keeps functioning in a
/// mixed A/B state, and B nodes read data written by A as if they had always
/// run B. The graph trusts its author on version ordering and does not
/// deduplicate edges.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityGraph {
    edges: IndexMap<VersionDescriptor, Vec<VersionDescriptor>>,
}

impl CompatibilityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        origin: VersionDescriptor,
        destinations: Vec<VersionDescriptor>,
    ) {
        self.edges.insert(origin, destinations);
    }

    /// Build a graph from name pairs resolved against a descriptor registry.
    ///
    /// An edge naming a descriptor the registry does not define is a
    /// data-authoring inconsistency: it is logged and skipped, never fatal,
    /// so one stale name does not take down every other upgrade test.
    pub fn from_named_edges(
        registry: &IndexMap<String, VersionDescriptor>,
        edges: &[(&str, &[&str])],
    ) -> Self {
        let mut graph = Self::new();
        for (origin_name, destination_names) in edges {
            let Some(origin) = registry.get(*origin_name) else {
                warn!("skipping manifest edges from {origin_name}: descriptor is not defined");
                continue;
            };
            let mut destinations = Vec::with_capacity(destination_names.len());
            for destination_name in *destination_names {
                match registry.get(*destination_name) {
                    Some(destination) => destinations.push(destination.clone()),
                    None => {
                        warn!(
                            "skipping manifest edge {origin_name} -> {destination_name}: \
                             destination descriptor is not defined"
                        );
                    }
                }
            }
            graph.insert(origin.clone(), destinations);
        }
        graph
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VersionDescriptor, &[VersionDescriptor])> {
        self.edges
            .iter()
            .map(|(origin, destinations)| (origin, destinations.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

lazy_static! {
    /// Every version descriptor the crate knows about, keyed by name.
    pub static ref REGISTRY: IndexMap<String, VersionDescriptor> = builtin_descriptors();

    /// The builtin upgrade graph over [`struct@REGISTRY`].
    pub static ref MANIFEST: CompatibilityGraph = builtin_graph();
}

/// Shorthand lookup into the builtin registry.
pub fn descriptor(name: &str) -> Option<&'static VersionDescriptor> {
    REGISTRY.get(name)
}

// Add a pair of entries (indev head, latest release) whenever the database
// branches a new release line, and point TRUNK at the new line.
fn builtin_descriptors() -> IndexMap<String, VersionDescriptor> {
    use Family::*;
    use Variant::*;

    let entries: Vec<Result<VersionDescriptor>> = vec![
        VersionDescriptor::new("indev_2_1_x", V2_1, InDev, "github:apache/cassandra-2.1", 1, 3, [7, 8]),
        VersionDescriptor::new("current_2_1_x", V2_1, Current, "2.1.22", 1, 3, [7, 8]),
        VersionDescriptor::new("indev_2_2_x", V2_2, InDev, "github:apache/cassandra-2.2", 1, 3, [7, 8]),
        VersionDescriptor::new("current_2_2_x", V2_2, Current, "2.2.19", 1, 3, [7, 8]),
        VersionDescriptor::new("indev_3_0_x", V3_0, InDev, "github:apache/cassandra-3.0", 3, 4, [8]),
        VersionDescriptor::new("current_3_0_x", V3_0, Current, "3.0.32", 3, 4, [8]),
        VersionDescriptor::new("indev_3_11_x", V3_11, InDev, "github:apache/cassandra-3.11", 3, 4, [8]),
        VersionDescriptor::new("current_3_11_x", V3_11, Current, "3.11.19", 3, 4, [8]),
        VersionDescriptor::new("indev_4_0_x", V4_0, InDev, "github:apache/cassandra-4.0", 3, 5, [8, 11]),
        VersionDescriptor::new("current_4_0_x", V4_0, Current, "4.0.17", 4, 5, [8, 11]),
        VersionDescriptor::new("indev_4_1_x", V4_1, InDev, "github:apache/cassandra-4.1", 4, 5, [8, 11]),
        VersionDescriptor::new("current_4_1_x", V4_1, Current, "4.1.9", 4, 5, [8, 11]),
        VersionDescriptor::new("indev_5_0_x", V5_0, InDev, "github:apache/cassandra-5.0", 4, 5, [11, 17]),
        VersionDescriptor::new("current_5_0_x", V5_0, Current, "5.0.4", 4, 5, [11, 17]),
        VersionDescriptor::new("indev_trunk", TRUNK, InDev, "github:apache/trunk", 4, 5, [11, 17]),
    ];

    let mut registry = IndexMap::with_capacity(entries.len());
    for entry in entries {
        let meta = entry.expect("builtin version manifest entry is well-formed");
        registry.insert(meta.name.clone(), meta);
    }
    registry
}

// Older lines must hop through 2.2 before 3.x; from 2.1/2.2 onward an
// upgrade to any later line is supported, trunk included. Add edges
// whenever the database branches.
fn builtin_graph() -> CompatibilityGraph {
    CompatibilityGraph::from_named_edges(
        &REGISTRY,
        &[
            ("current_2_1_x", &["indev_2_2_x", "indev_3_0_x", "indev_3_11_x"]),
            ("current_2_2_x", &["indev_2_2_x", "indev_3_0_x", "indev_3_11_x"]),
            ("current_3_0_x", &["indev_3_0_x", "indev_3_11_x", "indev_4_0_x", "indev_4_1_x"]),
            ("current_3_11_x", &["indev_3_11_x", "indev_4_0_x", "indev_4_1_x"]),
            ("current_4_0_x", &["indev_4_0_x", "indev_4_1_x", "indev_5_0_x", "indev_trunk"]),
            ("current_4_1_x", &["indev_4_1_x", "indev_5_0_x", "indev_trunk"]),
            ("current_5_0_x", &["indev_5_0_x", "indev_trunk"]),
            ("indev_2_1_x", &["indev_2_2_x", "indev_3_0_x", "indev_3_11_x"]),
            ("indev_2_2_x", &["indev_3_0_x", "indev_3_11_x"]),
            ("indev_3_0_x", &["indev_3_11_x", "indev_4_0_x", "indev_4_1_x"]),
            ("indev_3_11_x", &["indev_4_0_x", "indev_4_1_x"]),
            ("indev_4_0_x", &["indev_4_1_x", "indev_5_0_x", "indev_trunk"]),
            ("indev_4_1_x", &["indev_5_0_x", "indev_trunk"]),
            ("indev_5_0_x", &["indev_trunk"]),
        ],
    )
}
