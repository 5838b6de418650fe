//! Theme file loading
//!
//! Theme files hold partial overrides. Files ending in `.toml` are parsed as
//! TOML, everything else as JSON; both produce a JSON override value.

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde_json::Value;

use super::theme::path_override;
use crate::error::{GraphqlVizError, ThemeParseError};

pub fn load_theme_overrides(path: &Path) -> Result<Value, GraphqlVizError> {
    let content = std::fs::read_to_string(path).map_err(|e| GraphqlVizError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let overrides = if is_toml {
        parse_toml_theme(path, content)?
    } else {
        serde_json::from_str(&content)?
    };

    if !overrides.is_object() {
        return Err(GraphqlVizError::ConfigurationError {
            message: format!(
                "Theme file '{}' must contain an object at the top level",
                path.display()
            ),
        });
    }

    Ok(overrides)
}

fn parse_toml_theme(path: &Path, content: String) -> Result<Value, GraphqlVizError> {
    let table: toml::Table = toml::from_str(&content).map_err(|e| {
        let span = e
            .span()
            .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

        GraphqlVizError::ThemeParse(Box::new(ThemeParseError {
            file: path.display().to_string(),
            source_code: NamedSource::new(path.display().to_string(), content.clone()),
            span,
            source: e,
        }))
    })?;

    Ok(serde_json::to_value(table)?)
}

/// Turn a `key.path=value` assignment into a nested override
///
/// The value is read as JSON when it parses (`true`, `3`, `"x"`, `{...}`)
/// and kept as a plain string otherwise, so `types.color=RED` works unquoted.
pub fn parse_assignment(assignment: &str) -> Result<Value, GraphqlVizError> {
    let Some((path, raw)) = assignment.split_once('=') else {
        return Err(GraphqlVizError::ConfigurationError {
            message: format!("Expected KEY=VALUE, got '{assignment}'"),
        });
    };

    let value = serde_json::from_str(raw.trim()).unwrap_or_else(|_| Value::String(raw.to_string()));
    path_override(path.trim(), value)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_json_theme() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, r#"{"inputs": {"color": "BLUE"}}"#).unwrap();

        let overrides = load_theme_overrides(&path).unwrap();
        assert_eq!(overrides, json!({"inputs": {"color": "BLUE"}}));
    }

    #[test]
    fn test_load_toml_theme() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(&path, "edgesToSelf = true\n\n[header]\ninvert = true\n").unwrap();

        let overrides = load_theme_overrides(&path).unwrap();
        assert_eq!(
            overrides,
            json!({"edgesToSelf": true, "header": {"invert": true}})
        );
    }

    #[test]
    fn test_toml_syntax_error_has_span() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(&path, "[header\ninvert = true\n").unwrap();

        match load_theme_overrides(&path).unwrap_err() {
            GraphqlVizError::ThemeParse(err) => assert!(err.span.is_some()),
            other => panic!("Expected ThemeParse, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_theme_overrides(Path::new("/nonexistent/theme.json")).unwrap_err();
        assert!(matches!(err, GraphqlVizError::FileReadError { .. }));
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("inputs.hide=true").unwrap(),
            json!({"inputs": {"hide": true}})
        );
        assert_eq!(
            parse_assignment("types.color=DARKGREEN").unwrap(),
            json!({"types": {"color": "DARKGREEN"}})
        );
        assert_eq!(
            parse_assignment("edgeLabels.union=\"a=b\"").unwrap(),
            json!({"edgeLabels": {"union": "a=b"}})
        );
    }

    #[test]
    fn test_parse_assignment_rejects_bad_input() {
        assert!(parse_assignment("inputs.hide").is_err());
        assert!(parse_assignment("inputs..hide=true").is_err());
    }

    #[test]
    fn test_non_object_json_theme() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, "[]").unwrap();

        let err = load_theme_overrides(&path).unwrap_err();
        assert!(matches!(err, GraphqlVizError::ConfigurationError { .. }));
    }
}
