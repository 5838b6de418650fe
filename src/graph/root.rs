//! Root resolution
//!
//! A schema with a single operation root is drawn from that root. With two or
//! three roots a synthetic `Schema` type is appended to the registry whose
//! fields (`query`, `mutation`, `subscription`) point at the real roots, so
//! the worklist always starts from a single seed.

use crate::constants::schema_root;
use crate::introspection::{
    Field, IntrospectionSchema, IntrospectionType, NamedTypeRef, TypeKind, TypeRef,
};

/// Worklist seeds and the type registry to resolve them against
#[derive(Debug, Clone)]
pub struct GraphRoot {
    pub seeds: Vec<String>,
    pub types: Vec<IntrospectionType>,
}

fn root_field(operation: &str, root: &NamedTypeRef) -> Field {
    Field {
        name: operation.to_string(),
        args: None,
        type_ref: TypeRef::named(TypeKind::Object, root.name.clone()),
        is_deprecated: false,
        deprecation_reason: None,
    }
}

pub fn resolve_root(schema: IntrospectionSchema) -> GraphRoot {
    let IntrospectionSchema {
        query_type,
        mutation_type,
        subscription_type,
        mut types,
    } = schema;

    let roots: Vec<(&str, NamedTypeRef)> = [
        ("query", query_type),
        ("mutation", mutation_type),
        ("subscription", subscription_type),
    ]
    .into_iter()
    .filter_map(|(operation, root)| root.map(|root| (operation, root)))
    .collect();

    match roots.as_slice() {
        [] => GraphRoot {
            seeds: Vec::new(),
            types,
        },
        [(_, root)] => GraphRoot {
            seeds: vec![root.name.clone()],
            types,
        },
        _ => {
            types.push(IntrospectionType {
                kind: TypeKind::Object,
                name: schema_root::TYPE_NAME.to_string(),
                fields: Some(
                    roots
                        .iter()
                        .map(|(operation, root)| root_field(operation, root))
                        .collect(),
                ),
                input_fields: None,
                enum_values: None,
                possible_types: None,
            });

            GraphRoot {
                seeds: vec![schema_root::TYPE_NAME.to_string()],
                types,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn schema(value: serde_json::Value) -> IntrospectionSchema {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_single_root() {
        let root = resolve_root(schema(json!({
            "queryType": {"name": "Query"},
            "mutationType": null,
            "types": [{"kind": "OBJECT", "name": "Query", "fields": []}]
        })));

        assert_eq!(root.seeds, vec!["Query".to_string()]);
        assert_eq!(root.types.len(), 1);
    }

    #[test]
    fn test_multiple_roots_use_synthetic_schema() {
        let root = resolve_root(schema(json!({
            "queryType": {"name": "Query"},
            "mutationType": {"name": "Mutation"},
            "types": [
                {"kind": "OBJECT", "name": "Query", "fields": []},
                {"kind": "OBJECT", "name": "Mutation", "fields": []}
            ]
        })));

        assert_eq!(root.seeds, vec![schema_root::TYPE_NAME.to_string()]);
        assert_eq!(root.types.len(), 3);

        let synthetic = root.types.last().unwrap();
        let fields: Vec<(&str, Option<&str>)> = synthetic
            .fields()
            .iter()
            .map(|f| (f.name.as_str(), f.type_ref.name.as_deref()))
            .collect();
        assert_eq!(
            fields,
            vec![("query", Some("Query")), ("mutation", Some("Mutation"))]
        );
    }

    #[test]
    fn test_no_roots() {
        let root = resolve_root(schema(json!({"types": []})));
        assert!(root.seeds.is_empty());
    }
}
