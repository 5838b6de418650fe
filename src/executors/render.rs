//! Render command executor

use std::io::{self, Read};
use std::path::PathBuf;

use console::style;
use miette::{Result, WrapErr};

use crate::config::RenderConfig;
use crate::error::GraphqlVizError;
use crate::executors::{CommandExecutor, write_output};

pub struct RenderExecutor;

fn read_input(input: Option<&PathBuf>) -> Result<String, GraphqlVizError> {
    match input {
        Some(path) => std::fs::read_to_string(path).map_err(|e| GraphqlVizError::FileReadError {
            path: path.clone(),
            source: e,
        }),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| GraphqlVizError::FileReadError {
                    path: PathBuf::from("<stdin>"),
                    source: e,
                })?;
            Ok(text)
        }
    }
}

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let source = config
            .input
            .as_ref()
            .map_or_else(|| "stdin".to_string(), |path| path.display().to_string());
        eprintln!("{} Rendering schema from {}...", style("📊").cyan(), source);

        let text = read_input(config.input.as_ref()).wrap_err("Failed to read introspection result")?;
        if text.trim().is_empty() {
            return Err(GraphqlVizError::InputFormat {
                message: "No input given; pass a file or pipe the introspection result into \
                          `graphqlviz render`"
                    .to_string(),
            }
            .into());
        }

        let dot = match crate::render(text.as_str(), &config.options) {
            Ok(dot) => dot,
            Err(err) => {
                if config.verbose {
                    eprintln!("{} Raw input:", style("ℹ").blue());
                    eprintln!("{text}");
                }
                return Err(err).wrap_err("Failed to render schema");
            }
        };

        write_output(config.output.as_deref(), &dot)
    }
}
