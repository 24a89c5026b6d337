use serde_json::{Map, Value};

/// A document node, classified once so traversal can match on it.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An object; always descended into, never emitted
    Mapping(Map<String, Value>),

    /// Anything else, arrays included
    Leaf(Value),
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Node::Mapping(map),
            other => Node::Leaf(other),
        }
    }
}

/// Name of a value's JSON type, as used in diagnostics
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Configuration for the flattening process
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenConfig {
    /// String placed between path segments (must not be empty)
    pub separator: String,

    /// Prefix for every generated key; empty means keys start at the root
    pub prefix: String,

    /// When set, each leaf is emitted as `{ <wrap_key>: leaf }`
    pub wrap_key: Option<String>,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        FlattenConfig {
            separator: String::from("."),
            prefix: String::new(),
            wrap_key: None,
        }
    }
}

impl FlattenConfig {
    /// Wrap every leaf under the given key
    pub fn with_wrap_key(mut self, key: impl Into<String>) -> Self {
        self.wrap_key = Some(key.into());
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
