use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in theme file '{file}'")]
#[diagnostic(
    code(graphqlviz::theme_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct ThemeParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum GraphqlVizError {
    #[error("Invalid input: {message}")]
    #[diagnostic(
        code(graphqlviz::input_format),
        help("Provide an introspection result as a JSON object or a JSON-encoded string")
    )]
    InputFormat { message: String },

    #[error("Cannot find \"__schema\" object")]
    #[diagnostic(
        code(graphqlviz::schema_not_found),
        help("The input must contain the result of a GraphQL introspection query")
    )]
    SchemaNotFound,

    #[error("Type '{name}' is referenced but not declared in the schema")]
    #[diagnostic(
        code(graphqlviz::type_resolution),
        help("The introspection result is inconsistent; regenerate it from the server")
    )]
    TypeResolution { name: String },

    #[error("Malformed introspection result")]
    #[diagnostic(
        code(graphqlviz::malformed_schema),
        help("The \"__schema\" object does not match the introspection query shape")
    )]
    MalformedSchema {
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ThemeParse(Box<ThemeParseError>),

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(graphqlviz::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(graphqlviz::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(graphqlviz::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(graphqlviz::config_error),
        help("Check your theme overrides and command arguments")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_theme_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = ThemeParseError {
            file: "theme.toml".to_string(),
            source_code: NamedSource::new("theme.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        assert_eq!(
            error.to_string(),
            "Invalid TOML syntax in theme file 'theme.toml'"
        );
    }

    #[test]
    fn test_schema_not_found_message() {
        assert_eq!(
            GraphqlVizError::SchemaNotFound.to_string(),
            "Cannot find \"__schema\" object"
        );
    }

    #[test]
    fn test_type_resolution_message() {
        let error = GraphqlVizError::TypeResolution {
            name: "Ghost".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Type 'Ghost' is referenced but not declared in the schema"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = GraphqlVizError::FileReadError {
            path: PathBuf::from("/tmp/missing.json"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.json'");
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = GraphqlVizError::InputFormat {
            message: "Must be plain object".to_string(),
        };
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: GraphqlVizError = json_err.into();

        match error {
            GraphqlVizError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
