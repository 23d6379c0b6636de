//! Property-based tests for resolution and rendering
//!
//! These tests verify ordering, determinism and reference elimination
//! across generated schema trees.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use schemamd_core::loader::MemoryLoader;
use schemamd_core::{MarkdownRenderer, Schema, SchemaLoader};

/// Strategy for a single type name
fn type_name_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("string"),
        Just("number"),
        Just("integer"),
        Just("boolean"),
        Just("null"),
    ]
}

/// Strategy for leaf property schemas
fn leaf_strategy() -> impl Strategy<Value = Value> {
    (
        proptest::collection::vec(type_name_strategy(), 0..3),
        "[a-zA-Z ]{0,30}",
        proptest::option::of(proptest::collection::vec("[a-z]{1,6}", 1..4)),
    )
        .prop_map(|(types, description, values)| {
            let mut node = Map::new();
            match types.as_slice() {
                [] => {}
                [single] => {
                    node.insert("type".to_string(), json!(single));
                }
                many => {
                    node.insert("type".to_string(), json!(many));
                }
            }
            if !description.is_empty() {
                node.insert("description".to_string(), json!(description));
            }
            if let Some(values) = values {
                node.insert("enum".to_string(), json!(values));
            }
            Value::Object(node)
        })
}

/// Strategy for object schemas nested up to three levels
fn object_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        (
            proptest::collection::btree_map("[a-z_]{1,8}", inner, 0..5),
            proptest::collection::vec(any::<bool>(), 5),
        )
            .prop_map(|(properties, required_flags)| {
                let required: Vec<&String> = properties
                    .keys()
                    .zip(required_flags.iter())
                    .filter(|(_, flag)| **flag)
                    .map(|(name, _)| name)
                    .collect();
                json!({
                    "type": "object",
                    "required": required,
                    "properties": properties,
                })
            })
    })
}

/// Strategy for a root document whose properties refer to definitions
fn referencing_document_strategy() -> impl Strategy<Value = Value> {
    proptest::collection::btree_map("[a-z]{1,6}", object_strategy(), 1..4).prop_flat_map(|definitions| {
        let names: Vec<String> = definitions.keys().cloned().collect();
        proptest::collection::btree_map(
            "[a-z]{1,6}",
            proptest::sample::select(names),
            1..6,
        )
        .prop_map(move |refs| {
            let properties: Map<String, Value> = refs
                .into_iter()
                .map(|(property, target)| {
                    (property, json!({"$ref": format!("#/definitions/{}", target)}))
                })
                .collect();
            json!({
                "title": "Root",
                "type": "object",
                "properties": properties,
                "definitions": definitions.clone(),
            })
        })
    })
}

fn resolve_in_memory(document: &Value) -> Schema {
    let memory = MemoryLoader::new()
        .with_document("root.json", &document.to_string())
        .expect("valid location");
    SchemaLoader::with_loader(memory)
        .load_source("root.json")
        .expect("document resolves")
}

proptest! {
    #[test]
    fn prop_optional_rows_come_first_then_by_name(document in object_strategy()) {
        let schema = Schema::from_value(&document, "generated").unwrap();
        let table = MarkdownRenderer::new().property_table(&schema);

        let keys: Vec<(bool, String)> = table
            .rows()
            .iter()
            .map(|row| (row[2] == "**Yes**", row[0].clone()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(&keys, &sorted);

        let first_required = keys.iter().position(|(required, _)| *required);
        if let Some(first_required) = first_required {
            prop_assert!(keys[first_required..].iter().all(|(required, _)| *required));
        }
    }

    #[test]
    fn prop_rendering_is_deterministic(document in object_strategy(), level in 0usize..9) {
        let schema = Schema::from_value(&document, "generated").unwrap();
        let copy = schema.clone();
        prop_assert_eq!(schema.markdown(level), copy.markdown(level));
    }

    #[test]
    fn prop_every_property_gets_a_row(document in object_strategy()) {
        let schema = Schema::from_value(&document, "generated").unwrap();
        let table = MarkdownRenderer::new().property_table(&schema);
        prop_assert_eq!(table.rows().len(), schema.properties.len());
    }

    #[test]
    fn prop_resolution_leaves_no_references(document in referencing_document_strategy()) {
        let schema = resolve_in_memory(&document);
        prop_assert!(schema.walk().all(|node| !node.is_reference()));

        for (name, property) in &schema.properties {
            let target = document["properties"][name]["$ref"]
                .as_str()
                .and_then(|r| r.strip_prefix("#/definitions/"))
                .unwrap();
            prop_assert_eq!(property, &schema.definitions[target]);
        }
    }

    #[test]
    fn prop_resolution_without_references_is_identity(document in object_strategy()) {
        let expected = Schema::from_value(&document, "generated").unwrap();
        prop_assert_eq!(resolve_in_memory(&document), expected);
    }
}
