use super::*;
use crate::config::Settings;
use crate::manifest::CompatibilityGraph;
use crate::manifest::Family;
use crate::manifest::Variant;
use crate::manifest::VersionDescriptor;
use crate::manifest::MANIFEST;
use crate::runtime::RuntimeEnv;
use crate::selection::SelectionStrategy;
use crate::test_utils::env_context;
use crate::test_utils::meta_full;

fn origin_4_0() -> VersionDescriptor {
    meta_full("current_4_0_x", Family::V4_0, Variant::Current, 4, 5, &[8, 11])
}

fn dest_5_0() -> VersionDescriptor {
    meta_full("indev_5_0_x", Family::V5_0, Variant::InDev, 4, 5, &[11, 17])
}

fn graph_of(edges: Vec<(VersionDescriptor, Vec<VersionDescriptor>)>) -> CompatibilityGraph {
    let mut graph = CompatibilityGraph::new();
    for (origin, destinations) in edges {
        graph.insert(origin, destinations);
    }
    graph
}

fn settings_all() -> Settings {
    let mut settings = Settings::default();
    settings.selection.strategy = SelectionStrategy::All;
    settings
}

#[test]
fn scenario_names_should_concatenate_origin_and_destination() {
    let graph = graph_of(vec![(origin_4_0(), vec![dest_5_0()])]);
    let env = env_context(Family::V5_0, "5.0.99", 11);
    let settings = settings_all();

    let scenarios = PathBuilder::new(&graph, &settings, &env).build();

    assert_eq!(scenarios.len(), 1);
    assert_eq!(scenarios[0].name, "Upgrade_current_4_0_x_To_indev_5_0_x");
}

#[test]
fn destination_in_the_env_family_should_be_pinned_to_the_local_build() {
    let graph = graph_of(vec![(origin_4_0(), vec![dest_5_0()])]);
    let env = env_context(Family::V5_0, "5.0.99", 11);
    let settings = settings_all();

    let scenarios = PathBuilder::new(&graph, &settings, &env).build();

    let scenario = &scenarios[0];
    assert_eq!(scenario.origin_locator, "locator:current_4_0_x");
    assert_eq!(scenario.destination_locator, "5.0.99");
    assert_eq!(scenario.destination.version_locator, "5.0.99");
    // metadata besides the locator is untouched
    assert_eq!(scenario.destination.name, "indev_5_0_x");
    assert_eq!(scenario.destination.family, Family::V5_0);
}

#[test]
fn static_matrix_mode_should_keep_the_authored_locator() {
    let graph = graph_of(vec![(origin_4_0(), vec![dest_5_0()])]);
    let env = env_context(Family::V5_0, "5.0.99", 11);
    let mut settings = settings_all();
    settings.selection.static_matrix = true;

    let scenarios = PathBuilder::new(&graph, &settings, &env).build();

    assert_eq!(scenarios[0].destination_locator, "locator:indev_5_0_x");
}

#[test]
fn destination_outside_the_env_family_should_keep_its_locator() {
    let graph = graph_of(vec![(origin_4_0(), vec![dest_5_0()])]);
    let env = env_context(Family::V4_1, "4.1.99", 11);
    let settings = settings_all();

    let scenarios = PathBuilder::new(&graph, &settings, &env).build();

    assert_eq!(scenarios[0].destination_locator, "locator:indev_5_0_x");
}

#[test]
fn edges_without_protocol_overlap_should_be_skipped() {
    let old = meta_full("current_2_1_x", Family::V2_1, Variant::Current, 1, 3, &[11]);
    let new = meta_full("indev_5_0_x", Family::V5_0, Variant::InDev, 4, 5, &[11]);
    let graph = graph_of(vec![(old, vec![new])]);
    let env = env_context(Family::V5_0, "5.0.99", 11);

    let scenarios = PathBuilder::new(&graph, &settings_all(), &env).build();

    assert!(scenarios.is_empty());
}

#[test]
fn target_family_restriction_should_keep_edges_touching_the_env_family() {
    let unrelated_origin = meta_full("current_2_1_x", Family::V2_1, Variant::Current, 1, 5, &[11]);
    let unrelated_dest = meta_full("indev_2_2_x", Family::V2_2, Variant::InDev, 1, 5, &[11]);
    let matching_dest = meta_full("current_5_0_x", Family::V5_0, Variant::Current, 4, 5, &[11]);
    let matching_origin = meta_full("indev_5_0_x", Family::V5_0, Variant::InDev, 4, 5, &[11]);
    let trunk = meta_full("indev_trunk", Family::V5_1, Variant::InDev, 4, 5, &[11]);

    let graph = graph_of(vec![
        // first edge matches 5.0 on neither end: dropped; the second has a
        // 5.0 destination (variant does not matter): retained
        (unrelated_origin, vec![unrelated_dest, matching_dest]),
        // origin is the 5.0 indev head: retained
        (matching_origin, vec![trunk]),
    ]);
    let env = env_context(Family::V5_0, "5.0.99", 11);
    let mut settings = settings_all();
    settings.selection.target_version_only = true;

    let scenarios = PathBuilder::new(&graph, &settings, &env).build();

    let names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Upgrade_current_2_1_x_To_current_5_0_x",
            "Upgrade_indev_5_0_x_To_indev_trunk",
        ]
    );
}

#[test]
fn current_family_origin_must_be_indev_to_satisfy_the_restriction() {
    // origin is in the env family but is a release, destination is elsewhere
    let origin = meta_full("current_5_0_x", Family::V5_0, Variant::Current, 4, 5, &[11]);
    let dest = meta_full("indev_trunk", Family::V5_1, Variant::InDev, 4, 5, &[11]);
    let graph = graph_of(vec![(origin, vec![dest])]);
    let env = env_context(Family::V5_0, "5.0.99", 11);
    let mut settings = settings_all();
    settings.selection.target_version_only = true;

    let scenarios = PathBuilder::new(&graph, &settings, &env).build();

    assert!(scenarios.is_empty());
}

#[test]
fn runtime_incompatible_paths_should_not_be_emitted() {
    let graph = graph_of(vec![(origin_4_0(), vec![dest_5_0()])]);
    // JDK 8 runs the origin but not the destination, and no markers exist
    let env = EnvContext {
        family: Family::V5_0,
        local_build: LocalBuild::Version("5.0.99".to_string()),
        runtime: RuntimeEnv::new(8, []),
    };

    let scenarios = PathBuilder::new(&graph, &settings_all(), &env).build();

    assert!(scenarios.is_empty());
}

#[test]
fn selection_strategy_should_gate_edges_before_anything_else() {
    let graph = graph_of(vec![(origin_4_0(), vec![dest_5_0()])]);
    let env = env_context(Family::V5_0, "5.0.99", 11);
    let mut settings = settings_all();
    // current_4_0_x -> indev_5_0_x crosses families, so INDEV rejects it
    settings.selection.strategy = SelectionStrategy::Indev;

    let scenarios = PathBuilder::new(&graph, &settings, &env).build();

    assert!(scenarios.is_empty());
}

#[test]
fn building_twice_with_identical_inputs_should_be_deterministic() {
    let env = env_context(Family::V5_0, "5.0.99", 11);
    let settings = settings_all();
    let builder = PathBuilder::new(&MANIFEST, &settings, &env);

    let first = builder.build();
    let second = builder.build();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}
