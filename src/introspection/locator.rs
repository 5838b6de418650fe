//! Breadth-first key search over arbitrary JSON
//!
//! Callers may wrap the introspection root in any envelope (`{"data": ...}`,
//! a list of responses, ...). The locator walks the value level by level and
//! returns the path to the shallowest matching key. The input must be a tree;
//! plain deserialized JSON always is.

use std::collections::VecDeque;
use std::fmt;

use serde_json::Value;

/// One step of a [`JsonPath`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Access path from a JSON root to one of its descendants
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath(Vec<PathSegment>);

impl JsonPath {
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }

    fn last_key(&self) -> Option<&str> {
        match self.0.last() {
            Some(PathSegment::Key(key)) => Some(key),
            _ => None,
        }
    }

    /// RFC 6901 pointer usable with [`Value::pointer`]
    pub fn to_pointer(&self) -> String {
        self.0
            .iter()
            .map(|segment| match segment {
                PathSegment::Key(key) => format!("/{}", key.replace('~', "~0").replace('/', "~1")),
                PathSegment::Index(index) => format!("/{index}"),
            })
            .collect()
    }

    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.0.iter().try_fold(root, |node, segment| match segment {
            PathSegment::Key(key) => node.get(key.as_str()),
            PathSegment::Index(index) => node.get(*index),
        })
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            match segment {
                PathSegment::Key(key) => write!(f, "[{key:?}]")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

fn push_children<'a>(queue: &mut VecDeque<(JsonPath, &'a Value)>, path: &JsonPath, node: &'a Value) {
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                queue.push_back((path.child(PathSegment::Key(key.clone())), child));
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                queue.push_back((path.child(PathSegment::Index(index)), child));
            }
        }
        _ => {}
    }
}

/// Find the shallowest object key equal to `target`
///
/// Every level is exhausted before the next one is visited, so a match closer
/// to the root always wins. Array indices never match.
pub fn find_key(root: &Value, target: &str) -> Option<JsonPath> {
    let mut queue = VecDeque::new();
    push_children(&mut queue, &JsonPath::default(), root);

    while let Some((path, node)) = queue.pop_front() {
        if path.last_key() == Some(target) {
            return Some(path);
        }
        push_children(&mut queue, &path, node);
    }

    None
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_finds_top_level_key() {
        let root = json!({"__schema": {"types": []}});
        let path = find_key(&root, "__schema").unwrap();
        assert_eq!(path.to_pointer(), "/__schema");
        assert_eq!(path.resolve(&root), Some(&json!({"types": []})));
    }

    #[test]
    fn test_finds_wrapped_key() {
        let root = json!({"data": {"__schema": {"types": []}}});
        let path = find_key(&root, "__schema").unwrap();
        assert_eq!(path.to_string(), r#"["data"]["__schema"]"#);
        assert!(root.pointer(&path.to_pointer()).is_some());
    }

    #[test]
    fn test_descends_into_arrays() {
        let root = json!({"responses": [{"ignored": 1}, {"__schema": 42}]});
        let path = find_key(&root, "__schema").unwrap();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("responses".to_string()),
                PathSegment::Index(1),
                PathSegment::Key("__schema".to_string()),
            ]
        );
        assert_eq!(path.resolve(&root), Some(&json!(42)));
    }

    #[test]
    fn test_shallowest_match_wins() {
        // The deep match sorts first by key but sits one level lower.
        let root = json!({
            "a": {"b": {"__schema": "deep"}},
            "z": {"__schema": "shallow"}
        });
        let path = find_key(&root, "__schema").unwrap();
        assert_eq!(path.resolve(&root), Some(&json!("shallow")));
    }

    #[test]
    fn test_same_depth_follows_document_order() {
        let root: Value = serde_json::from_str(
            r#"{"z": {"__schema": "first"}, "a": {"__schema": "second"}}"#,
        )
        .unwrap();
        let path = find_key(&root, "__schema").unwrap();
        assert_eq!(path.to_pointer(), "/z/__schema");
        assert_eq!(path.resolve(&root), Some(&json!("first")));
    }

    #[test]
    fn test_missing_key() {
        assert!(find_key(&json!({}), "__schema").is_none());
        assert!(find_key(&json!({"data": [1, 2, {"x": null}]}), "__schema").is_none());
        assert!(find_key(&json!("__schema"), "__schema").is_none());
    }

    #[test]
    fn test_pointer_escaping() {
        let root = json!({"a/b": {"c~d": {"__schema": true}}});
        let path = find_key(&root, "__schema").unwrap();
        assert_eq!(path.to_pointer(), "/a~1b/c~0d/__schema");
        assert_eq!(root.pointer(&path.to_pointer()), Some(&json!(true)));
    }
}
