//! Constants shared by the render engine and the CLI
//!
//! Wire-level names from the introspection format, the identity of the
//! synthetic schema root and the standard introspection query live here so
//! the engine and its callers agree on them.

/// Names used inside introspection results
pub mod introspection {
    /// Key holding the introspection root object
    pub const SCHEMA_KEY: &str = "__schema";

    /// Prefix reserved for introspection-internal types (`__Type`, `__Field`, ...)
    pub const RESERVED_PREFIX: &str = "__";

    /// The standard GraphQL introspection query
    pub const QUERY: &str = r#"
  query IntrospectionQuery {
    __schema {
      queryType { name }
      mutationType { name }
      subscriptionType { name }
      types {
        ...FullType
      }
      directives {
        name
        description
        locations
        args {
          ...InputValue
        }
      }
    }
  }

  fragment FullType on __Type {
    kind
    name
    description
    fields(includeDeprecated: true) {
      name
      description
      args {
        ...InputValue
      }
      type {
        ...TypeRef
      }
      isDeprecated
      deprecationReason
    }
    inputFields {
      ...InputValue
    }
    interfaces {
      ...TypeRef
    }
    enumValues(includeDeprecated: true) {
      name
      description
      isDeprecated
      deprecationReason
    }
    possibleTypes {
      ...TypeRef
    }
  }

  fragment InputValue on __InputValue {
    name
    description
    type { ...TypeRef }
    defaultValue
  }

  fragment TypeRef on __Type {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
                ofType {
                  kind
                  name
                }
              }
            }
          }
        }
      }
    }
  }
"#;
}

/// Identity of the synthetic root used when a schema has several operation roots
pub mod schema_root {
    /// Registry name of the synthetic root; cannot collide with a GraphQL name
    pub const TYPE_NAME: &str = "__GraphQLVizSchema__";

    /// Name shown in the rendered diagram
    pub const DISPLAY_NAME: &str = "Schema";
}

/// DOT output details
pub mod dot {
    /// Port of the header cell of every node table
    pub const HEADER_PORT: &str = "__title";

    /// Suffix appended to a field name to form its row port
    pub const ROW_PORT_SUFFIX: &str = "port";

    /// Compass point used when an edge ends on a field row
    pub const ROW_COMPASS: &str = "w";

    /// Layout weight of argument (input) edges
    pub const INPUT_EDGE_WEIGHT: u32 = 1000;

    /// Annotation shown for deprecated members without a reason
    pub const DEPRECATED_FALLBACK: &str = "Deprecated";

    /// Font color of deprecation annotations
    pub const DEPRECATED_COLOR: &str = "RED";
}

/// CLI output configuration
pub mod output {
    /// Default format for `graphqlviz theme`
    pub const DEFAULT_THEME_FORMAT: &str = "json";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_requests_schema_roots() {
        assert!(introspection::QUERY.contains("__schema"));
        assert!(introspection::QUERY.contains("queryType { name }"));
        assert!(introspection::QUERY.contains("possibleTypes"));
    }

    #[test]
    fn test_synthetic_root_is_reserved() {
        assert!(schema_root::TYPE_NAME.starts_with(introspection::RESERVED_PREFIX));
    }
}
