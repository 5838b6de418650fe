//! Render options

use serde::Deserialize;
use serde_json::Value;

use super::theme::Theme;
use crate::error::GraphqlVizError;

/// Options accepted by [`crate::render`]
///
/// Deserializes from an options object such as
/// `{"noargs": true, "sort": false, "theme": {"inputs": {"hide": true}}}`;
/// `config` is accepted as an alias of `theme`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Suppress field arguments
    pub noargs: bool,
    /// Sort members of every type by name
    pub sort: bool,
    /// Partial theme merged over the defaults
    #[serde(alias = "config")]
    pub theme: Option<Value>,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }

    /// Merge the override over the default theme and fold `noargs`/`sort` in
    pub fn resolve_theme(&self) -> Result<Theme, GraphqlVizError> {
        let mut theme = match &self.theme {
            Some(overrides) => Theme::merged(overrides)?,
            None => Theme::default(),
        };
        theme.field.noargs |= self.noargs;
        theme.field.sort |= self.sort;
        Ok(theme)
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    noargs: bool,
    sort: bool,
    theme: Option<Value>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_noargs(mut self, noargs: bool) -> Self {
        self.noargs = noargs;
        self
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_theme(mut self, theme: Value) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Merge one more override into the accumulated theme override
    pub fn with_theme_override(mut self, overrides: &Value) -> Self {
        let theme = self.theme.get_or_insert_with(|| Value::Object(Default::default()));
        super::theme::merge_values(theme, overrides);
        self
    }
}

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, GraphqlVizError> {
        if let Some(theme) = &self.theme
            && !theme.is_object()
        {
            return Err(GraphqlVizError::ConfigurationError {
                message: "Theme overrides must be a JSON object".to_string(),
            });
        }

        Ok(RenderOptions {
            noargs: self.noargs,
            sort: self.sort,
            theme: self.theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_default_options_resolve_default_theme() {
        let theme = RenderOptions::default().resolve_theme().unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_flags_fold_into_theme() {
        let options = RenderOptions::builder()
            .with_noargs(true)
            .with_sort(true)
            .build()
            .unwrap();
        let theme = options.resolve_theme().unwrap();

        assert!(theme.field.noargs);
        assert!(theme.field.sort);
    }

    #[test]
    fn test_theme_flags_survive_unset_options() {
        let options = RenderOptions::builder()
            .with_theme(json!({"field": {"sort": true}}))
            .build()
            .unwrap();
        assert!(options.resolve_theme().unwrap().field.sort);
    }

    #[test]
    fn test_overrides_accumulate() {
        let options = RenderOptions::builder()
            .with_theme_override(&json!({"inputs": {"color": "BLUE"}}))
            .with_theme_override(&json!({"inputs": {"hide": true}}))
            .build()
            .unwrap();
        let theme = options.resolve_theme().unwrap();

        assert_eq!(theme.inputs.color, "BLUE");
        assert!(theme.inputs.hide);
    }

    #[test]
    fn test_deserialize_with_config_alias() {
        let options: RenderOptions = serde_json::from_value(json!({
            "noargs": true,
            "config": {"edgesToSelf": true}
        }))
        .unwrap();

        assert!(options.noargs);
        assert!(!options.sort);
        assert!(options.resolve_theme().unwrap().edges_to_self);
    }

    #[test]
    fn test_builder_rejects_non_object_theme() {
        let result = RenderOptions::builder().with_theme(json!("dark")).build();
        assert!(result.is_err());
    }
}
