//! Command implementations for the graphqlviz CLI
//!
//! This module contains the implementations for each CLI command:
//! - render: Render an introspection result as a DOT graph
//! - query: Print the introspection query
//! - theme: Print the default theme

pub mod query;
pub mod render;
pub mod theme;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Render { .. } => render::execute_render_command(command),
        Commands::Query { .. } => query::execute_query_command(command),
        Commands::Theme { .. } => theme::execute_theme_command(command),
    }
}
