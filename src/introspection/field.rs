//! Field analysis
//!
//! Flattens a field's wrapped type expression into a [`FieldDescriptor`].
//! Unwrapping is bounded to `NON_NULL -> LIST -> NON_NULL`, which covers
//! `T`, `T!`, `[T]`, `[T!]`, `[T]!` and `[T!]!`. Deeper nesting such as
//! `[[T]]` keeps only the outer list flags; the base name and kind are then
//! taken from the innermost named type so references still resolve.

use super::types::{Field, InputValue, TypeKind, TypeRef};

/// Normalized view of one field, argument or input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    /// Name of the base named type
    pub type_name: String,
    /// Kind of the base named type
    pub kind: TypeKind,
    /// Outermost `NON_NULL`
    pub is_required: bool,
    pub is_list: bool,
    /// `NON_NULL` inside the list
    pub is_nested_required: bool,
    /// Own arguments only; arguments never carry arguments
    pub args: Vec<FieldDescriptor>,
    pub is_deprecated: bool,
    pub deprecation_reason: Option<String>,
    pub default_value: Option<String>,
}

impl FieldDescriptor {
    pub fn from_field(field: &Field) -> Self {
        let mut descriptor = describe(&field.name, &field.type_ref);
        descriptor.is_deprecated = field.is_deprecated;
        descriptor.deprecation_reason = field.deprecation_reason.clone();
        descriptor.args = field.args().iter().map(Self::from_input_value).collect();
        descriptor
    }

    pub fn from_input_value(value: &InputValue) -> Self {
        let mut descriptor = describe(&value.name, &value.type_ref);
        descriptor.is_deprecated = value.is_deprecated;
        descriptor.deprecation_reason = value.deprecation_reason.clone();
        descriptor.default_value = value.default_value.clone();
        descriptor
    }

    pub fn is_object_type(&self) -> bool {
        self.kind == TypeKind::Object
    }

    pub fn is_interface_type(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn is_union_type(&self) -> bool {
        self.kind == TypeKind::Union
    }

    pub fn is_enum_type(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    pub fn is_input_type(&self) -> bool {
        self.kind == TypeKind::InputObject
    }

    /// Type expression rebuilt from the flags, e.g. `[Pet!]!`
    pub fn type_expression(&self) -> String {
        let mut expression = String::new();
        if self.is_list {
            expression.push('[');
        }
        expression.push_str(&self.type_name);
        if self.is_nested_required {
            expression.push('!');
        }
        if self.is_list {
            expression.push(']');
        }
        if self.is_required {
            expression.push('!');
        }
        expression
    }
}

fn unwrap_if(type_ref: &TypeRef, kind: TypeKind) -> (bool, &TypeRef) {
    match type_ref.of_type.as_deref() {
        Some(inner) if type_ref.kind == kind => (true, inner),
        _ => (false, type_ref),
    }
}

fn describe(name: &str, type_ref: &TypeRef) -> FieldDescriptor {
    let (is_required, current) = unwrap_if(type_ref, TypeKind::NonNull);
    let (is_list, current) = unwrap_if(current, TypeKind::List);
    let (is_nested_required, current) = unwrap_if(current, TypeKind::NonNull);

    let named = if current.kind.is_wrapper() {
        current.innermost()
    } else {
        current
    };

    FieldDescriptor {
        name: name.to_string(),
        type_name: named.name.clone().unwrap_or_default(),
        kind: named.kind,
        is_required,
        is_list,
        is_nested_required,
        args: Vec::new(),
        is_deprecated: false,
        deprecation_reason: None,
        default_value: None,
    }
}
