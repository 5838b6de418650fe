//! Introspection result data model
//!
//! These types mirror the `__schema` object returned by the standard
//! introspection query. Lists the server may report as `null` (for example
//! `fields` on a scalar) are modelled as `Option<Vec<_>>` and exposed through
//! slice accessors.

use serde::{Deserialize, Serialize};

/// The `kind` of a GraphQL type or type reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    /// Whether this kind wraps another type reference
    pub fn is_wrapper(self) -> bool {
        match self {
            TypeKind::List | TypeKind::NonNull => true,
            TypeKind::Scalar
            | TypeKind::Object
            | TypeKind::Interface
            | TypeKind::Union
            | TypeKind::Enum
            | TypeKind::InputObject => false,
        }
    }
}

/// A `{ name }` reference, as used by the operation roots and `possibleTypes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTypeRef {
    pub name: String,
}

/// A possibly-wrapped type expression (`NON_NULL` -> `LIST` -> named type)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub kind: TypeKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    pub fn wrapping(kind: TypeKind, inner: TypeRef) -> Self {
        Self {
            kind,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// Innermost reference of the chain
    pub fn innermost(&self) -> &TypeRef {
        let mut current = self;
        while let Some(inner) = current.of_type.as_deref() {
            current = inner;
        }
        current
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValue {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub args: Option<Vec<InputValue>>,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

impl Field {
    pub fn args(&self) -> &[InputValue] {
        self.args.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub name: String,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub deprecation_reason: Option<String>,
}

/// One entry of `__schema.types`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionType {
    pub kind: TypeKind,
    pub name: String,
    #[serde(default)]
    pub fields: Option<Vec<Field>>,
    #[serde(default)]
    pub input_fields: Option<Vec<InputValue>>,
    #[serde(default)]
    pub enum_values: Option<Vec<EnumValue>>,
    #[serde(default)]
    pub possible_types: Option<Vec<NamedTypeRef>>,
}

impl IntrospectionType {
    pub fn fields(&self) -> &[Field] {
        self.fields.as_deref().unwrap_or_default()
    }

    pub fn input_fields(&self) -> &[InputValue] {
        self.input_fields.as_deref().unwrap_or_default()
    }

    pub fn enum_values(&self) -> &[EnumValue] {
        self.enum_values.as_deref().unwrap_or_default()
    }

    pub fn possible_type_names(&self) -> Vec<String> {
        self.possible_types
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|t| t.name.clone())
            .collect()
    }

    /// Whether the type is introspection-internal (`__Type`, `__Schema`, ...)
    pub fn is_reserved(&self) -> bool {
        self.name
            .starts_with(crate::constants::introspection::RESERVED_PREFIX)
    }
}

/// The `__schema` object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionSchema {
    #[serde(default)]
    pub query_type: Option<NamedTypeRef>,
    #[serde(default)]
    pub mutation_type: Option<NamedTypeRef>,
    #[serde(default)]
    pub subscription_type: Option<NamedTypeRef>,
    pub types: Vec<IntrospectionType>,
}
