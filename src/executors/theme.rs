//! Theme command executor

use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::ThemeFormat;
use crate::config::{Theme, ThemeConfig};
use crate::executors::{CommandExecutor, write_output};

pub struct ThemeExecutor;

impl CommandExecutor for ThemeExecutor {
    type Config = ThemeConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let theme = Theme::default();

        let content = match config.format {
            ThemeFormat::Json => serde_json::to_string_pretty(&theme)
                .map(|json| format!("{json}\n"))
                .into_diagnostic()
                .wrap_err("Failed to serialize theme as JSON")?,
            ThemeFormat::Toml => toml::to_string_pretty(&theme)
                .into_diagnostic()
                .wrap_err("Failed to serialize theme as TOML")?,
        };

        write_output(config.output.as_deref(), &content)
    }
}
