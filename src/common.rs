//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Rendering arguments
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Do not render field arguments
    #[arg(long, env = "GRAPHQLVIZ_NOARGS")]
    pub noargs: bool,

    /// Sort fields and enum values by name
    #[arg(long, env = "GRAPHQLVIZ_SORT")]
    pub sort: bool,

    /// Theme file with overrides (.toml, otherwise JSON)
    #[arg(short, long, value_name = "FILE", env = "GRAPHQLVIZ_THEME")]
    pub theme: Option<PathBuf>,

    /// Override a single theme key, e.g. `--set inputs.hide=true`
    #[arg(
        long = "set",
        value_name = "KEY=VALUE",
        env = "GRAPHQLVIZ_SET",
        value_delimiter = ';'
    )]
    pub overrides: Vec<String>,
}

/// Common output arguments
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE", env = "GRAPHQLVIZ_OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::GraphqlVizError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::GraphqlVizError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::GraphqlVizError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
