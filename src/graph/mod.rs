//! # Schema Graph Construction and Rendering Module
//!
//! Turns a decoded introspection schema into a Graphviz document.
//!
//! ## Components
//!
//! ### Entity Resolution
//! - **resolve_root**: Picks the worklist seeds, adding a synthetic `Schema`
//!   root when the schema declares more than one operation type
//! - **TypeProcessor**: Breadth-first discovery of object, interface and union
//!   types reachable from the root
//! - **resolve_entities**: Adds enums and input types and orders everything by
//!   category
//!
//! ### Graph Building
//! - **SchemaGraphBuilder**: Materializes visible entities and their relations
//!   (field references, argument inputs, possible types) as a petgraph graph
//!
//! ### Rendering
//! - **DotRenderer**: Writes the graph as DOT with HTML-like record tables
//!
//! ## Example
//!
//! ```
//! use graphqlviz::config::Theme;
//! use graphqlviz::graph::{DotRenderer, SchemaGraphBuilder, resolve_entities, resolve_root};
//! use graphqlviz::introspection::IntrospectionSchema;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema: IntrospectionSchema = serde_json::from_value(json!({
//!     "queryType": {"name": "Query"},
//!     "types": [
//!         {"kind": "OBJECT", "name": "Query", "fields": [
//!             {"name": "hello", "type": {"kind": "SCALAR", "name": "String"}}
//!         ]}
//!     ]
//! }))?;
//!
//! let theme = Theme::default();
//! let entities = resolve_entities(&resolve_root(schema), &theme)?;
//! let graph = SchemaGraphBuilder::new(&theme).build(&entities)?;
//!
//! let mut output = Vec::new();
//! DotRenderer::new(&theme).render_dot(&graph, &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("hello: String"));
//! assert!(!dot_output.contains("->"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod processor;
mod renderer;
mod root;
mod types;

pub use builder::{SchemaGraph, SchemaGraphBuilder, row_port};
pub use processor::{TypeProcessor, process_enum_type, process_input_type, resolve_entities};
pub use renderer::DotRenderer;
pub use root::{GraphRoot, resolve_root};
pub use types::{
    Category, Entity, EntitySet, EnumValueDescriptor, Member, Relation, RelationBuilder,
    RelationKind, display_name,
};
