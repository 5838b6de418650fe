//! # graphqlviz - Visualize GraphQL Schemas
//!
//! graphqlviz turns the result of a GraphQL introspection query into a
//! Graphviz DOT document: every object, interface, union, enum and input type
//! becomes a record node with one row per field, and edges connect fields to
//! the types they return, argument types to the fields that take them, and
//! unions and interfaces to their members.
//!
//! ## Main Components
//!
//! - **Introspection**: Typed model of the introspection result and the
//!   locator that finds `__schema` inside any JSON envelope
//! - **Graph**: Entity resolution, the petgraph schema graph and the DOT
//!   renderer
//! - **Config**: The theme with its deep-merged overrides, and render options
//!
//! ## Usage
//!
//! ```
//! use graphqlviz::config::RenderOptions;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let introspection = json!({
//!     "data": {
//!         "__schema": {
//!             "queryType": {"name": "Query"},
//!             "types": [
//!                 {"kind": "OBJECT", "name": "Query", "fields": [
//!                     {"name": "pet", "type": {"kind": "OBJECT", "name": "Pet"}}
//!                 ]},
//!                 {"kind": "OBJECT", "name": "Pet", "fields": [
//!                     {"name": "name", "type": {"kind": "SCALAR", "name": "String"}}
//!                 ]}
//!             ]
//!         }
//!     }
//! });
//!
//! let options: RenderOptions = serde_json::from_value(json!({
//!     "sort": true,
//!     "theme": {"types": {"color": "DARKBLUE"}}
//! }))?;
//!
//! let dot = graphqlviz::render(introspection, &options)?;
//! assert!(dot.starts_with("digraph erd {"));
//! assert!(dot.contains("\"Query\":petport -> \"Pet\""));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Fetching the Query to Send
//!
//! ```
//! assert!(graphqlviz::INTROSPECTION_QUERY.contains("__schema"));
//! ```

// Private modules
mod constants;
mod render;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod introspection;

pub use constants::introspection::QUERY as INTROSPECTION_QUERY;
pub use render::{SchemaInput, parse_schema, render};

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
