//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand, RenderArgs};
use crate::config::{RenderConfig, RenderOptions, load_theme_overrides, parse_assignment};
use crate::error::GraphqlVizError;

/// Collect the theme file and `--set` overrides, in that order, into options
fn render_options(args: RenderArgs) -> Result<RenderOptions, GraphqlVizError> {
    let mut builder = RenderOptions::builder()
        .with_noargs(args.noargs)
        .with_sort(args.sort);

    if let Some(path) = &args.theme {
        builder = builder.with_theme_override(&load_theme_overrides(path)?);
    }
    for assignment in &args.overrides {
        builder = builder.with_theme_override(&parse_assignment(assignment)?);
    }

    builder.build()
}

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, GraphqlVizError> {
        match command {
            Commands::Render {
                input,
                render,
                output,
                verbose,
            } => RenderConfig::builder()
                .with_input(input)
                .with_output(output.output)
                .with_options(render_options(render)?)
                .with_verbose(verbose)
                .build(),
            _ => Err(GraphqlVizError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render command
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderConfig::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
