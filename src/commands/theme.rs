//! Theme command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ThemeConfig;
use crate::error::GraphqlVizError;

impl FromCommand for ThemeConfig {
    fn from_command(command: Commands) -> Result<Self, GraphqlVizError> {
        match command {
            Commands::Theme { format, output } => ThemeConfig::builder()
                .with_format(format)
                .with_output(output.output)
                .build(),
            _ => Err(GraphqlVizError::ConfigurationError {
                message: "Invalid command type for ThemeConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ThemeConfig);

/// Execute the theme command
pub fn execute_theme_command(command: Commands) -> Result<()> {
    let config = ThemeConfig::from_command(command)
        .wrap_err("Failed to parse theme command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::theme::ThemeExecutor;
    ThemeExecutor::execute(config)
}
