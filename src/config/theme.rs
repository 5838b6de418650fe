//! Theme configuration
//!
//! The theme controls every display decision of the DOT output: colors,
//! grouping, labels and which categories of types are drawn at all. Callers
//! override it with a partial JSON value that is deep-merged over the
//! defaults.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::GraphqlVizError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderTheme {
    /// Fill the header cell with the category color and write the name in white
    pub invert: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnchorTheme {
    /// End argument edges on the field row instead of the type header
    pub input: bool,
    /// Anchor edges on the header cell
    pub header: bool,
}

/// Horizontal alignment of field rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl FieldAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldAlign::Left => "LEFT",
            FieldAlign::Center => "CENTER",
            FieldAlign::Right => "RIGHT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldTheme {
    pub align: FieldAlign,
    pub hide_seperators: bool,
    pub color_args: bool,
    pub sort: bool,
    pub noargs: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeLabels {
    pub input: String,
    pub union: String,
    pub interface: String,
}

/// Display policy for one category of types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryTheme {
    pub color: String,
    pub hide: bool,
    pub group: bool,
    pub group_label: String,
    pub stereotype: Option<String>,
}

impl Default for CategoryTheme {
    fn default() -> Self {
        Self::new("Types", None)
    }
}

impl CategoryTheme {
    fn new(group_label: &str, stereotype: Option<&str>) -> Self {
        Self {
            color: "BLACK".to_string(),
            hide: false,
            group: false,
            group_label: group_label.to_string(),
            stereotype: stereotype.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub header: HeaderTheme,
    pub anchor: AnchorTheme,
    pub edges_to_self: bool,
    pub field: FieldTheme,
    pub edge_labels: EdgeLabels,
    pub types: CategoryTheme,
    pub inputs: CategoryTheme,
    pub enums: CategoryTheme,
    pub interfaces: CategoryTheme,
    pub unions: CategoryTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: HeaderTheme::default(),
            anchor: AnchorTheme::default(),
            edges_to_self: false,
            field: FieldTheme::default(),
            edge_labels: EdgeLabels::default(),
            types: CategoryTheme::new("Types", None),
            inputs: CategoryTheme::new("Input Types", Some("input")),
            enums: CategoryTheme::new("Enum Types", Some("enumeration")),
            interfaces: CategoryTheme::new("Interface Types", Some("interface")),
            unions: CategoryTheme::new("Unions", Some("union")),
        }
    }
}

impl Theme {
    /// Default theme with `overrides` deep-merged over it
    pub fn merged(overrides: &Value) -> Result<Self, GraphqlVizError> {
        Self::default().merge(overrides)
    }

    /// This theme with `overrides` deep-merged over it
    ///
    /// A `null` leaf clears an optional setting such as `stereotype`; on any
    /// other setting it is rejected. A top-level `null` overrides nothing.
    pub fn merge(&self, overrides: &Value) -> Result<Self, GraphqlVizError> {
        if overrides.is_null() {
            return Ok(self.clone());
        }
        if !overrides.is_object() {
            return Err(GraphqlVizError::ConfigurationError {
                message: "Theme overrides must be a JSON object".to_string(),
            });
        }

        let mut base = serde_json::to_value(self)?;
        merge_values(&mut base, overrides);
        serde_json::from_value(base).map_err(|e| GraphqlVizError::ConfigurationError {
            message: format!("Invalid theme: {e}"),
        })
    }

    /// Override a single dotted key path, e.g. `("header.invert", true)`
    pub fn set_path(&self, path: &str, value: Value) -> Result<Self, GraphqlVizError> {
        self.merge(&path_override(path, value)?)
    }
}

/// Build a nested override object from a dotted key path
pub fn path_override(path: &str, value: Value) -> Result<Value, GraphqlVizError> {
    let keys: Vec<&str> = path.split('.').collect();
    if keys.iter().any(|key| key.is_empty()) {
        return Err(GraphqlVizError::ConfigurationError {
            message: format!("Invalid theme key path '{path}'"),
        });
    }

    Ok(keys.iter().rev().fold(value, |inner, key| {
        let mut map = Map::new();
        map.insert((*key).to_string(), inner);
        Value::Object(map)
    }))
}

/// Recursively merge `overrides` into `base`: objects merge key by key,
/// anything else replaces the base value, `null` included.
pub fn merge_values(base: &mut Value, overrides: &Value) {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            for (key, value) in override_map {
                match base_map.get_mut(key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, value) => *base = value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_matches_wire_format() {
        let value = serde_json::to_value(Theme::default()).unwrap();

        assert_eq!(value["header"]["invert"], json!(false));
        assert_eq!(value["edgesToSelf"], json!(false));
        assert_eq!(value["field"]["align"], json!("CENTER"));
        assert_eq!(value["field"]["hideSeperators"], json!(false));
        assert_eq!(value["edgeLabels"]["union"], json!(""));
        assert_eq!(value["types"]["stereotype"], json!(null));
        assert_eq!(value["inputs"]["groupLabel"], json!("Input Types"));
        assert_eq!(value["enums"]["stereotype"], json!("enumeration"));
        assert_eq!(value["unions"]["color"], json!("BLACK"));
    }

    #[test]
    fn test_empty_override_is_identity() {
        assert_eq!(Theme::merged(&json!({})).unwrap(), Theme::default());
        assert_eq!(Theme::merged(&Value::Null).unwrap(), Theme::default());
    }

    #[test]
    fn test_partial_override_keeps_siblings() {
        let theme = Theme::merged(&json!({
            "inputs": {"color": "BLUE", "hide": true},
            "field": {"align": "LEFT"}
        }))
        .unwrap();

        assert_eq!(theme.inputs.color, "BLUE");
        assert!(theme.inputs.hide);
        assert_eq!(theme.inputs.group_label, "Input Types");
        assert_eq!(theme.inputs.stereotype.as_deref(), Some("input"));
        assert_eq!(theme.field.align, FieldAlign::Left);
        assert!(!theme.field.color_args);
    }

    #[test]
    fn test_invalid_override_shape() {
        let err = Theme::merged(&json!({"header": {"invert": "yes"}})).unwrap_err();
        assert!(matches!(err, GraphqlVizError::ConfigurationError { .. }));

        let err = Theme::merged(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, GraphqlVizError::ConfigurationError { .. }));
    }

    #[test]
    fn test_set_path() {
        let theme = Theme::default()
            .set_path("header.invert", json!(true))
            .unwrap()
            .set_path("edgeLabels.input", json!("args"))
            .unwrap();

        assert!(theme.header.invert);
        assert_eq!(theme.edge_labels.input, "args");
        assert!(Theme::default().set_path("header..invert", json!(true)).is_err());
    }

    #[test]
    fn test_null_override_clears_optional_setting() {
        let theme = Theme::default()
            .merge(&json!({"enums": {"stereotype": null}}))
            .unwrap();
        assert_eq!(theme.enums.stereotype, None);
        assert_eq!(theme.enums.group_label, "Enum Types");

        let theme = Theme::default()
            .merge(&json!({"enums": {"stereotype": ""}}))
            .unwrap();
        assert_eq!(theme.enums.stereotype.as_deref(), Some(""));
    }

    #[test]
    fn test_null_override_rejected_for_required_setting() {
        let err = Theme::default()
            .merge(&json!({"header": {"invert": null}}))
            .unwrap_err();
        assert!(matches!(err, GraphqlVizError::ConfigurationError { .. }));

        let err = Theme::merged(&json!({"types": null})).unwrap_err();
        assert!(matches!(err, GraphqlVizError::ConfigurationError { .. }));
    }

    #[test]
    fn test_merge_values_writes_null() {
        let mut base = json!({"enums": {"stereotype": "enumeration", "hide": false}});
        merge_values(&mut base, &json!({"enums": {"stereotype": null}}));
        assert_eq!(base, json!({"enums": {"stereotype": null, "hide": false}}));
    }
}
