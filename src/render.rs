//! Render entry point

use serde_json::Value;

use crate::config::RenderOptions;
use crate::constants::introspection::SCHEMA_KEY;
use crate::error::GraphqlVizError;
use crate::graph::{DotRenderer, SchemaGraphBuilder, resolve_entities, resolve_root};
use crate::introspection::{IntrospectionSchema, find_key};

/// An introspection result, either still encoded or already parsed
#[derive(Debug, Clone)]
pub enum SchemaInput {
    Text(String),
    Value(Value),
}

impl From<String> for SchemaInput {
    fn from(text: String) -> Self {
        SchemaInput::Text(text)
    }
}

impl From<&str> for SchemaInput {
    fn from(text: &str) -> Self {
        SchemaInput::Text(text.to_string())
    }
}

impl From<Value> for SchemaInput {
    fn from(value: Value) -> Self {
        SchemaInput::Value(value)
    }
}

impl SchemaInput {
    fn into_object(self) -> Result<Value, GraphqlVizError> {
        let value = match self {
            SchemaInput::Text(text) => {
                serde_json::from_str(&text).map_err(|err| GraphqlVizError::InputFormat {
                    message: format!("Not valid JSON ({err})"),
                })?
            }
            SchemaInput::Value(value) => value,
        };

        if value.is_object() {
            Ok(value)
        } else {
            Err(GraphqlVizError::InputFormat {
                message: "Must be plain object".to_string(),
            })
        }
    }
}

/// Decode the `__schema` object wherever it sits inside `input`
pub fn parse_schema(input: impl Into<SchemaInput>) -> Result<IntrospectionSchema, GraphqlVizError> {
    let root = input.into().into_object()?;
    let path = find_key(&root, SCHEMA_KEY).ok_or(GraphqlVizError::SchemaNotFound)?;
    let schema = path
        .resolve(&root)
        .ok_or(GraphqlVizError::SchemaNotFound)?
        .clone();

    serde_json::from_value(schema).map_err(|source| GraphqlVizError::MalformedSchema { source })
}

/// Render an introspection result as a Graphviz DOT document
///
/// The whole document is produced in memory; on failure nothing is returned.
pub fn render(
    input: impl Into<SchemaInput>,
    options: &RenderOptions,
) -> Result<String, GraphqlVizError> {
    let schema = parse_schema(input)?;
    let theme = options.resolve_theme()?;

    let entities = resolve_entities(&resolve_root(schema), &theme)?;
    let graph = SchemaGraphBuilder::new(&theme).build(&entities)?;

    let mut output = Vec::new();
    DotRenderer::new(&theme).render_dot(&graph, &mut output)?;

    Ok(String::from_utf8_lossy(&output).into_owned())
}
