//! Query command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::FromCommand;
use crate::config::QueryConfig;
use crate::error::GraphqlVizError;

impl FromCommand for QueryConfig {
    fn from_command(command: Commands) -> Result<Self, GraphqlVizError> {
        match command {
            Commands::Query { output } => Ok(QueryConfig {
                output: output.output,
            }),
            _ => Err(GraphqlVizError::ConfigurationError {
                message: "Invalid command type for QueryConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(QueryConfig);

/// Execute the query command
pub fn execute_query_command(command: Commands) -> Result<()> {
    let config = QueryConfig::from_command(command)
        .wrap_err("Failed to parse query command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::query::QueryExecutor;
    QueryExecutor::execute(config)
}
