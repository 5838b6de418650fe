//! CLI command configuration

use std::path::PathBuf;

use super::render::RenderOptions;
use crate::cli::ThemeFormat;
use crate::error::GraphqlVizError;

fn missing(field: &str) -> GraphqlVizError {
    GraphqlVizError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

/// Configuration for the `render` command
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Introspection file; stdin when absent
    pub input: Option<PathBuf>,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
    pub options: RenderOptions,
    /// Echo the raw input to stderr when rendering fails
    pub verbose: bool,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    options: Option<RenderOptions>,
    verbose: bool,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `-` is treated like an absent path
    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input.filter(|path| path.as_os_str() != "-");
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl crate::common::ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, GraphqlVizError> {
        Ok(RenderConfig {
            input: self.input,
            output: self.output,
            options: self.options.ok_or_else(|| missing("options"))?,
            verbose: self.verbose,
        })
    }
}

/// Configuration for the `query` command
#[derive(Debug, Clone)]
pub struct QueryConfig {
    pub output: Option<PathBuf>,
}

/// Configuration for the `theme` command
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    pub format: ThemeFormat,
    pub output: Option<PathBuf>,
}

impl ThemeConfig {
    pub fn builder() -> ThemeConfigBuilder {
        ThemeConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct ThemeConfigBuilder {
    format: Option<ThemeFormat>,
    output: Option<PathBuf>,
}

impl ThemeConfigBuilder {
    pub fn with_format(mut self, format: ThemeFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }
}

impl crate::common::ConfigBuilder for ThemeConfigBuilder {
    type Config = ThemeConfig;

    fn build(self) -> Result<Self::Config, GraphqlVizError> {
        Ok(ThemeConfig {
            format: self.format.ok_or_else(|| missing("format"))?,
            output: self.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_dash_input_means_stdin() {
        let config = RenderConfig::builder()
            .with_input(Some(PathBuf::from("-")))
            .with_options(RenderOptions::default())
            .build()
            .unwrap();
        assert!(config.input.is_none());
    }

    #[test]
    fn test_render_config_requires_options() {
        let err = RenderConfig::builder().build().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: options"
        );
    }

    #[test]
    fn test_theme_config_requires_format() {
        assert!(ThemeConfig::builder().build().is_err());
        let config = ThemeConfig::builder()
            .with_format(ThemeFormat::Toml)
            .build()
            .unwrap();
        assert_eq!(config.format, ThemeFormat::Toml);
    }
}
