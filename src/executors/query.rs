//! Query command executor

use miette::{IntoDiagnostic, Result, WrapErr};
use serde_json::json;

use crate::config::QueryConfig;
use crate::constants::introspection::QUERY;
use crate::executors::{CommandExecutor, write_output};

pub struct QueryExecutor;

impl CommandExecutor for QueryExecutor {
    type Config = QueryConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let body = serde_json::to_string_pretty(&json!({ "query": QUERY }))
            .into_diagnostic()
            .wrap_err("Failed to serialize introspection query")?;

        write_output(config.output.as_deref(), &format!("{body}\n"))
    }
}
