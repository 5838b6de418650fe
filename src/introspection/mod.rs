//! # Introspection Module
//!
//! Reading side of the render pipeline: the typed model of an introspection
//! result, the breadth-first locator that finds the `__schema` object inside
//! an arbitrary JSON envelope, and the field analyzer that flattens wrapped
//! type expressions.
//!
//! ## Example
//!
//! ```
//! use graphqlviz::introspection::{FieldDescriptor, Field, find_key};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = json!({"data": {"__schema": {"types": []}}});
//! let path = find_key(&root, "__schema").expect("schema present");
//! assert_eq!(path.to_pointer(), "/data/__schema");
//!
//! let field: Field = serde_json::from_value(json!({
//!     "name": "owner",
//!     "type": {"kind": "NON_NULL", "ofType": {"kind": "OBJECT", "name": "Person"}}
//! }))?;
//! let descriptor = FieldDescriptor::from_field(&field);
//! assert_eq!(descriptor.type_expression(), "Person!");
//! # Ok(())
//! # }
//! ```

mod field;
mod locator;
mod types;

pub use field::FieldDescriptor;
pub use locator::{JsonPath, PathSegment, find_key};
pub use types::{
    EnumValue, Field, InputValue, IntrospectionSchema, IntrospectionType, NamedTypeRef, TypeKind,
    TypeRef,
};
