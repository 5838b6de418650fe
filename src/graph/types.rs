//! Core graph types
//!
//! This module contains the fundamental data structures used between entity
//! resolution and DOT emission.

use std::collections::HashMap;

use crate::config::{CategoryTheme, Theme};
use crate::constants::schema_root;
use crate::introspection::FieldDescriptor;

/// Display category of an entity; each has its own theme section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Types,
    Enums,
    Interfaces,
    Inputs,
    Unions,
}

impl Category {
    /// Emission order of the node pass
    pub const ALL: [Category; 5] = [
        Category::Types,
        Category::Enums,
        Category::Interfaces,
        Category::Inputs,
        Category::Unions,
    ];

    pub fn theme(self, theme: &Theme) -> &CategoryTheme {
        match self {
            Category::Types => &theme.types,
            Category::Enums => &theme.enums,
            Category::Interfaces => &theme.interfaces,
            Category::Inputs => &theme.inputs,
            Category::Unions => &theme.unions,
        }
    }

    pub fn is_hidden(self, theme: &Theme) -> bool {
        self.theme(theme).hide
    }
}

/// One enum value of an enum entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDescriptor {
    pub name: String,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
}

/// One row of an entity table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Field(FieldDescriptor),
    Value(EnumValueDescriptor),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Field(field) => &field.name,
            Member::Value(value) => &value.name,
        }
    }

    pub fn is_deprecated(&self) -> bool {
        match self {
            Member::Field(field) => field.is_deprecated,
            Member::Value(value) => value.is_deprecated,
        }
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        match self {
            Member::Field(field) => field.deprecation_reason.as_deref(),
            Member::Value(value) => value.deprecation_reason.as_deref(),
        }
    }

    pub fn as_field(&self) -> Option<&FieldDescriptor> {
        match self {
            Member::Field(field) => Some(field),
            Member::Value(_) => None,
        }
    }
}

/// A processed schema type, ready for emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub category: Category,
    pub members: Vec<Member>,
    /// Possible types of an interface or union, in declaration order
    pub possible_types: Vec<String>,
}

impl Entity {
    /// Name shown in the diagram; the synthetic root is shown as `Schema`
    pub fn display_name(&self) -> &str {
        display_name(&self.name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.members.iter().filter_map(Member::as_field)
    }

    /// Stable sort of the rows by name
    pub fn sort_members(&mut self) {
        self.members.sort_by(|a, b| a.name().cmp(b.name()));
    }
}

pub fn display_name(type_name: &str) -> &str {
    if type_name == schema_root::TYPE_NAME {
        schema_root::DISPLAY_NAME
    } else {
        type_name
    }
}

/// All processed entities in emission order, indexed by type name
#[derive(Debug, Clone, Default)]
pub struct EntitySet {
    entities: Vec<Entity>,
    index: HashMap<String, usize>,
}

impl EntitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity; a name already present keeps its first entity
    pub fn insert(&mut self, entity: Entity) -> bool {
        if self.index.contains_key(&entity.name) {
            return false;
        }
        self.index.insert(entity.name.clone(), self.entities.len());
        self.entities.push(entity);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.index.get(name).map(|&i| &self.entities[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn sort_members(&mut self) {
        for entity in &mut self.entities {
            entity.sort_members();
        }
    }
}

/// What an edge of the schema graph stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// A field returns the target type
    Reference,
    /// An argument of a field takes the source type
    Input,
    /// The target is a possible type of the source interface or union
    PossibleType,
}

/// An edge of the schema graph with its DOT attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub kind: RelationKind,
    pub from_port: Option<String>,
    pub to_port: Option<String>,
    pub color: String,
    pub label: Option<String>,
    pub weight: Option<u32>,
}

impl Relation {
    pub fn builder() -> RelationBuilder {
        RelationBuilder::new()
    }
}

#[derive(Default)]
pub struct RelationBuilder {
    kind: Option<RelationKind>,
    from_port: Option<String>,
    to_port: Option<String>,
    color: Option<String>,
    label: Option<String>,
    weight: Option<u32>,
}

impl RelationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: RelationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_from_port(mut self, port: Option<String>) -> Self {
        self.from_port = port;
        self
    }

    pub fn with_to_port(mut self, port: Option<String>) -> Self {
        self.to_port = port;
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Empty labels are dropped
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = (!label.is_empty()).then(|| label.to_string());
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }
}

impl crate::common::ConfigBuilder for RelationBuilder {
    type Config = Relation;

    fn build(self) -> Result<Self::Config, crate::error::GraphqlVizError> {
        Ok(Relation {
            kind: self.kind.ok_or_else(|| {
                crate::error::GraphqlVizError::ConfigurationError {
                    message: "Missing required field: kind".to_string(),
                }
            })?,
            from_port: self.from_port,
            to_port: self.to_port,
            color: self.color.ok_or_else(|| {
                crate::error::GraphqlVizError::ConfigurationError {
                    message: "Missing required field: color".to_string(),
                }
            })?,
            label: self.label,
            weight: self.weight,
        })
    }
}
