//! Ordinal resolution over single- and multi-entity result shapes.

use serde_json::json;

use rowmap::entity_map::{EntityRegistry, TypeDescriptor};
use rowmap::materialize::materialize_entity;
use rowmap::resolver::build_mapping;
use rowmap::result_set::ResultSchema;

use crate::fixtures::{
    president_and_assistant_schema, president_schema, President, PresidentAssistant,
};

fn president_registry() -> EntityRegistry {
    let mut registry = EntityRegistry::new();
    registry
        .add(TypeDescriptor::of::<President>().build().unwrap())
        .unwrap();
    registry
}

fn president_and_assistant_registry() -> EntityRegistry {
    let mut registry = president_registry();
    registry
        .add(
            TypeDescriptor::of::<PresidentAssistant>()
                .alias("LastName", "Assistant Last Name")
                .unwrap()
                .alias("FirstName", "Assistant First Name")
                .unwrap()
                .ignore("Id")
                .unwrap()
                .build()
                .unwrap(),
        )
        .unwrap();
    registry
}

#[test]
fn assistant_ordinals_resolve_inside_their_own_segment() {
    let markers = vec!["PresidentId".to_string()];
    let mapping = build_mapping(
        &president_and_assistant_schema(),
        president_and_assistant_registry(),
        &markers,
        false,
        "dbo.GetPresidents",
    )
    .unwrap();

    assert_eq!(mapping.ordinals(1)["PresidentId"], 6);
    assert_eq!(mapping.ordinals(1)["Assistant First Name"], 7);
    assert_eq!(mapping.ordinals(1)["Assistant Last Name"], 8);
}

#[test]
fn president_id_resolves_to_the_first_column() {
    let mapping = build_mapping(
        &president_schema(),
        president_registry(),
        &[],
        false,
        "dbo.GetPresidents",
    )
    .unwrap();

    assert_eq!(mapping.ordinals(0)["Id"], 0);
}

#[test]
fn duplicate_names_across_entities_never_leak_between_segments() {
    let markers = vec!["PresidentId".to_string()];
    let mapping = build_mapping(
        &president_and_assistant_schema(),
        president_and_assistant_registry(),
        &markers,
        false,
        "dbo.GetPresidents",
    )
    .unwrap();

    // The president's name columns resolve before the partition boundary;
    // the assistant's aliased ones after it.
    assert_eq!(mapping.ordinals(0)["FirstName"], 1);
    assert_eq!(mapping.ordinals(0)["LastName"], 2);
    assert!(mapping.ordinals(1).values().all(|&ordinal| ordinal >= 6));
    assert!(mapping.ordinals(0).values().all(|&ordinal| ordinal < 6));
}

#[test]
fn resolution_ignores_physical_column_order() {
    let shuffled = ResultSchema::new(["Fans", "IsHonest", "Id", "LastName", "FirstName"]);
    let mapping = build_mapping(&shuffled, president_registry(), &[], true, "q").unwrap();

    assert_eq!(mapping.ordinals(0)["Fans"], 0);
    assert_eq!(mapping.ordinals(0)["Id"], 2);
    assert_eq!(mapping.ordinals(0)["FirstName"], 4);
}

#[test]
fn materializes_an_object_through_resolved_ordinals() {
    // A single declared target spans the whole row, so the president's
    // properties resolve even though assistant columns trail the select.
    let mapping = build_mapping(
        &president_and_assistant_schema(),
        president_registry(),
        &[],
        false,
        "dbo.GetPresidents",
    )
    .unwrap();

    let row = vec![
        json!(1),
        json!("Donald"),
        json!("Trump"),
        json!(null),
        json!(5),
        json!(true),
        json!(1),
        json!("Jane"),
        json!("Doe"),
    ];

    let president: President =
        materialize_entity(mapping.descriptor(0), mapping.ordinals(0), &row).unwrap();

    assert_eq!(president.fans, 5);
    assert_eq!(president.first_name, "Donald");
    assert!(president.is_honest);
}

#[test]
fn round_trip_preserves_cell_values() {
    let mapping = build_mapping(&president_schema(), president_registry(), &[], true, "q").unwrap();

    let row = vec![json!(16), json!("Abraham"), json!("Lincoln"), json!(99), json!(true)];
    let president: President =
        materialize_entity(mapping.descriptor(0), mapping.ordinals(0), &row).unwrap();

    // Re-reading every resolved ordinal reproduces the original cells.
    assert_eq!(json!(president.id), row[mapping.ordinals(0)["Id"]]);
    assert_eq!(json!(president.first_name), row[mapping.ordinals(0)["FirstName"]]);
    assert_eq!(json!(president.last_name), row[mapping.ordinals(0)["LastName"]]);
    assert_eq!(json!(president.fans), row[mapping.ordinals(0)["Fans"]]);
    assert_eq!(json!(president.is_honest), row[mapping.ordinals(0)["IsHonest"]]);
}

#[test]
fn identical_inputs_resolve_to_identical_mappings() {
    let markers = vec!["PresidentId".to_string()];
    let first = build_mapping(
        &president_and_assistant_schema(),
        president_and_assistant_registry(),
        &markers,
        false,
        "dbo.GetPresidents",
    )
    .unwrap();
    let second = build_mapping(
        &president_and_assistant_schema(),
        president_and_assistant_registry(),
        &markers,
        false,
        "dbo.GetPresidents",
    )
    .unwrap();

    assert_eq!(first, second);
}
