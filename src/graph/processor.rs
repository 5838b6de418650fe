//! Entity resolution
//!
//! Object, interface and union types are discovered by a breadth-first
//! worklist starting at the schema root: processing a type yields the names of
//! the types it references, which are queued in turn. Enums and input types
//! are taken from the registry wholesale.

use std::collections::VecDeque;

use super::root::GraphRoot;
use super::types::{Category, Entity, EntitySet, EnumValueDescriptor, Member};
use crate::config::Theme;
use crate::error::GraphqlVizError;
use crate::introspection::{FieldDescriptor, IntrospectionType, TypeKind};

/// Worklist-driven builder of object, interface and union entities
pub struct TypeProcessor<'a> {
    types: &'a [IntrospectionType],
    theme: &'a Theme,
    entities: EntitySet,
}

impl<'a> TypeProcessor<'a> {
    pub fn new(types: &'a [IntrospectionType], theme: &'a Theme) -> Self {
        Self {
            types,
            theme,
            entities: EntitySet::new(),
        }
    }

    fn find_type(&self, name: &str) -> Result<&'a IntrospectionType, GraphqlVizError> {
        self.types
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| GraphqlVizError::TypeResolution {
                name: name.to_string(),
            })
    }

    fn expands_possible_types(&self, field: &FieldDescriptor) -> bool {
        match field.kind {
            TypeKind::Union => !self.theme.unions.hide,
            TypeKind::Interface => !self.theme.interfaces.hide,
            TypeKind::Scalar
            | TypeKind::Object
            | TypeKind::Enum
            | TypeKind::InputObject
            | TypeKind::List
            | TypeKind::NonNull => false,
        }
    }

    /// Record the entity for `name` and return the type names it references
    ///
    /// Members of visible unions and interfaces are discovered eagerly along
    /// with the union or interface itself; hidden ones pull in nothing.
    pub fn process_type(&mut self, name: &str) -> Result<Vec<String>, GraphqlVizError> {
        let ty = self.find_type(name)?;

        let mut additional: Vec<String> = Vec::new();
        let mut members = Vec::with_capacity(ty.fields().len());

        for field in ty.fields() {
            let descriptor = FieldDescriptor::from_field(field);

            if self.expands_possible_types(&descriptor) {
                let abstract_type = self.find_type(&descriptor.type_name)?;
                additional.extend(abstract_type.possible_type_names());
                additional.push(abstract_type.name.clone());
            }

            members.push(Member::Field(descriptor));
        }

        let category = match ty.kind {
            TypeKind::Interface => Category::Interfaces,
            TypeKind::Union => Category::Unions,
            TypeKind::Scalar
            | TypeKind::Object
            | TypeKind::Enum
            | TypeKind::InputObject
            | TypeKind::List
            | TypeKind::NonNull => Category::Types,
        };

        let entity = Entity {
            name: ty.name.clone(),
            category,
            members,
            possible_types: ty.possible_type_names(),
        };

        let mut linked: Vec<String> = Vec::new();
        let referenced = entity
            .fields()
            .filter(|field| field.is_object_type())
            .map(|field| field.type_name.clone())
            .chain(additional);
        for type_name in referenced {
            if !linked.contains(&type_name) {
                linked.push(type_name);
            }
        }

        self.entities.insert(entity);
        Ok(linked)
    }

    /// Drain the worklist starting from `seeds`
    ///
    /// A name is skipped when dequeued if it was already processed, so
    /// duplicate enqueues are harmless.
    pub fn process_all(&mut self, seeds: &[String]) -> Result<(), GraphqlVizError> {
        let mut queue: VecDeque<String> = seeds.iter().cloned().collect();

        while let Some(current) = queue.pop_front() {
            if self.entities.contains(&current) {
                continue;
            }
            queue.extend(self.process_type(&current)?);
        }

        Ok(())
    }

    pub fn into_entities(self) -> EntitySet {
        self.entities
    }
}

pub fn process_enum_type(ty: &IntrospectionType) -> Entity {
    Entity {
        name: ty.name.clone(),
        category: Category::Enums,
        members: ty
            .enum_values()
            .iter()
            .map(|value| {
                Member::Value(EnumValueDescriptor {
                    name: value.name.clone(),
                    is_deprecated: value.is_deprecated,
                    deprecation_reason: value.deprecation_reason.clone(),
                })
            })
            .collect(),
        possible_types: Vec::new(),
    }
}

pub fn process_input_type(ty: &IntrospectionType) -> Entity {
    Entity {
        name: ty.name.clone(),
        category: Category::Inputs,
        members: ty
            .input_fields()
            .iter()
            .map(|field| Member::Field(FieldDescriptor::from_input_value(field)))
            .collect(),
        possible_types: Vec::new(),
    }
}

fn registry_entities<'a>(
    types: &'a [IntrospectionType],
    kind: TypeKind,
    process: fn(&IntrospectionType) -> Entity,
) -> impl Iterator<Item = Entity> + 'a {
    types
        .iter()
        .filter(move |t| t.kind == kind && !t.is_reserved())
        .map(process)
}

/// Resolve every entity of the graph, ordered by category
///
/// Objects, enums, interfaces, inputs and unions follow each other in that
/// order; within a category worklist entities keep discovery order and
/// registry entities keep declaration order.
pub fn resolve_entities(root: &GraphRoot, theme: &Theme) -> Result<EntitySet, GraphqlVizError> {
    let mut processor = TypeProcessor::new(&root.types, theme);
    processor.process_all(&root.seeds)?;
    let discovered = processor.into_entities();

    let mut entities = EntitySet::new();
    for category in Category::ALL {
        match category {
            Category::Enums => {
                if !theme.enums.hide {
                    for entity in registry_entities(&root.types, TypeKind::Enum, process_enum_type) {
                        entities.insert(entity);
                    }
                }
            }
            Category::Inputs => {
                if !theme.inputs.hide {
                    for entity in
                        registry_entities(&root.types, TypeKind::InputObject, process_input_type)
                    {
                        entities.insert(entity);
                    }
                }
            }
            Category::Types | Category::Interfaces | Category::Unions => {
                for entity in discovered.in_category(category) {
                    entities.insert(entity.clone());
                }
            }
        }
    }

    if theme.field.sort {
        entities.sort_members();
    }

    Ok(entities)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::graph::root::resolve_root;
    use crate::introspection::IntrospectionSchema;

    fn pets_schema() -> IntrospectionSchema {
        serde_json::from_value(json!({
            "queryType": {"name": "Query"},
            "types": [
                {"kind": "OBJECT", "name": "Query", "fields": [
                    {"name": "pets", "type": {"kind": "LIST", "ofType": {"kind": "OBJECT", "name": "Pet"}}},
                    {"name": "search", "type": {"kind": "UNION", "name": "SearchResult"},
                     "args": [{"name": "filter", "type": {"kind": "INPUT_OBJECT", "name": "Filter"}}]},
                    {"name": "node", "type": {"kind": "INTERFACE", "name": "Node"}}
                ]},
                {"kind": "OBJECT", "name": "Pet", "fields": [
                    {"name": "owner", "type": {"kind": "NON_NULL", "ofType": {"kind": "OBJECT", "name": "Person"}}},
                    {"name": "color", "type": {"kind": "ENUM", "name": "Color"}}
                ]},
                {"kind": "OBJECT", "name": "Person", "fields": [
                    {"name": "pets", "type": {"kind": "LIST", "ofType": {"kind": "OBJECT", "name": "Pet"}}}
                ]},
                {"kind": "OBJECT", "name": "Store", "fields": [
                    {"name": "name", "type": {"kind": "SCALAR", "name": "String"}}
                ]},
                {"kind": "UNION", "name": "SearchResult", "possibleTypes": [{"name": "Pet"}, {"name": "Store"}]},
                {"kind": "INTERFACE", "name": "Node",
                 "fields": [{"name": "id", "type": {"kind": "SCALAR", "name": "ID"}}],
                 "possibleTypes": [{"name": "Pet"}]},
                {"kind": "ENUM", "name": "Color", "enumValues": [{"name": "RED"}, {"name": "BLUE"}]},
                {"kind": "ENUM", "name": "__TypeKind", "enumValues": [{"name": "OBJECT"}]},
                {"kind": "INPUT_OBJECT", "name": "Filter", "inputFields": [
                    {"name": "color", "type": {"kind": "ENUM", "name": "Color"}}
                ]},
                {"kind": "SCALAR", "name": "String"}
            ]
        }))
        .unwrap()
    }

    fn names(entities: &EntitySet) -> Vec<&str> {
        entities.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_process_type_returns_references() {
        let root = resolve_root(pets_schema());
        let theme = Theme::default();
        let mut processor = TypeProcessor::new(&root.types, &theme);

        let linked = processor.process_type("Query").unwrap();
        assert_eq!(
            linked,
            vec!["Pet", "Store", "SearchResult", "Node"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_worklist_order_and_categories() {
        let root = resolve_root(pets_schema());
        let entities = resolve_entities(&root, &Theme::default()).unwrap();

        assert_eq!(
            names(&entities),
            vec![
                "Query", "Pet", "Store", "Person", "Color", "Node", "Filter", "SearchResult"
            ]
        );
        assert_eq!(entities.get("Node").unwrap().category, Category::Interfaces);
        assert_eq!(
            entities.get("SearchResult").unwrap().possible_types,
            vec!["Pet".to_string(), "Store".to_string()]
        );
    }

    #[test]
    fn test_hidden_union_pulls_in_nothing() {
        let root = resolve_root(pets_schema());
        let theme = Theme::merged(&json!({"unions": {"hide": true}})).unwrap();
        let entities = resolve_entities(&root, &theme).unwrap();

        assert!(!entities.contains("SearchResult"));
        assert!(!entities.contains("Store"));
        assert!(entities.contains("Node"));
    }

    #[test]
    fn test_hidden_registry_categories() {
        let root = resolve_root(pets_schema());
        let theme = Theme::merged(&json!({"enums": {"hide": true}, "inputs": {"hide": true}})).unwrap();
        let entities = resolve_entities(&root, &theme).unwrap();

        assert!(!entities.contains("Color"));
        assert!(!entities.contains("Filter"));
        assert!(entities.contains("Pet"));
    }

    #[test]
    fn test_reserved_types_skipped() {
        let root = resolve_root(pets_schema());
        let entities = resolve_entities(&root, &Theme::default()).unwrap();
        assert!(!entities.contains("__TypeKind"));
    }

    #[test]
    fn test_unknown_type_fails() {
        let root = GraphRoot {
            seeds: vec!["Missing".to_string()],
            types: Vec::new(),
        };
        let err = resolve_entities(&root, &Theme::default()).unwrap_err();
        assert!(matches!(err, GraphqlVizError::TypeResolution { name } if name == "Missing"));
    }

    #[test]
    fn test_sort_applies_to_every_entity() {
        let root = resolve_root(pets_schema());
        let theme = Theme::merged(&json!({"field": {"sort": true}})).unwrap();
        let entities = resolve_entities(&root, &theme).unwrap();

        let query: Vec<&str> = entities
            .get("Query")
            .unwrap()
            .members
            .iter()
            .map(Member::name)
            .collect();
        assert_eq!(query, vec!["node", "pets", "search"]);

        let color: Vec<&str> = entities
            .get("Color")
            .unwrap()
            .members
            .iter()
            .map(Member::name)
            .collect();
        assert_eq!(color, vec!["BLUE", "RED"]);
    }
}
