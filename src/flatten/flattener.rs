use crate::error::{FlattenError, Result};
use crate::flatten::types::{json_type_name, FlattenConfig, Node};
use serde_json::{map, Map, Value};

/// Flatten a nested object into a single-level object keyed by joined paths.
///
/// `prefix` is prepended to every generated key (pass `""` at the top level)
/// and `separator` joins path segments. Objects are always descended into;
/// every other value, arrays included, is copied through as a leaf. When two
/// paths join to the same key the one visited last wins. Only leaves are
/// cloned; arrays are cloned whole, so their own nesting still recurses.
///
/// ```rust
/// use flatjson::flatten;
/// use serde_json::json;
///
/// let doc = json!({"a": 1, "b": {"c": 2}});
/// let flat = flatten(doc.as_object().unwrap(), "", ".");
/// assert_eq!(serde_json::Value::Object(flat), json!({"a": 1, "b.c": 2}));
/// ```
pub fn flatten(document: &Map<String, Value>, prefix: &str, separator: &str) -> Map<String, Value> {
    let mut flat = Map::new();
    let mut stack: Vec<(String, map::Iter<'_>)> = vec![(prefix.to_string(), document.iter())];

    while let Some((prefix, entries)) = stack.last_mut() {
        let Some((key, value)) = entries.next() else {
            stack.pop();
            continue;
        };

        let path = join_path(prefix, key, separator);

        match value {
            Value::Object(child) => stack.push((path, child.iter())),
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }

    flat
}

/// Depth-first traversal over an explicit stack of (prefix, entries) frames.
///
/// Emits `(path, leaf)` pairs in the same order a recursive descent would.
fn walk<F>(document: Map<String, Value>, prefix: String, separator: &str, mut emit: F)
where
    F: FnMut(String, Value),
{
    let mut stack: Vec<(String, map::IntoIter)> = vec![(prefix, document.into_iter())];

    while let Some((prefix, entries)) = stack.last_mut() {
        let Some((key, value)) = entries.next() else {
            stack.pop();
            continue;
        };

        let path = join_path(prefix, &key, separator);

        match Node::from(value) {
            Node::Mapping(child) => stack.push((path, child.into_iter())),
            Node::Leaf(leaf) => emit(path, leaf),
        }
    }
}

fn join_path(prefix: &str, key: &str, separator: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}{}{}", prefix, separator, key)
    }
}

/// Flattens parsed JSON documents according to a `FlattenConfig`
#[derive(Debug, Clone)]
pub struct Flattener {
    config: FlattenConfig,
}

impl Flattener {
    pub fn new(config: FlattenConfig) -> Result<Self> {
        if config.separator.is_empty() {
            return Err(FlattenError::EmptySeparator);
        }
        Ok(Flattener { config })
    }

    /// Flatten a parsed JSON value; the top level must be an object
    pub fn flatten(&self, value: Value) -> Result<Map<String, Value>> {
        match Node::from(value) {
            Node::Mapping(document) => Ok(self.flatten_map(document)),
            Node::Leaf(other) => Err(FlattenError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Flatten an object, consuming it
    pub fn flatten_map(&self, document: Map<String, Value>) -> Map<String, Value> {
        let input_keys = document.len();
        let mut flat = Map::new();
        let mut collisions = 0usize;

        walk(document, self.config.prefix.clone(), &self.config.separator, |path, leaf| {
            let leaf = self.wrap_leaf(leaf);
            if flat.contains_key(&path) {
                tracing::warn!(key = %path, "flattened key collision, later value wins");
                collisions += 1;
            }
            flat.insert(path, leaf);
        });

        tracing::debug!(
            input_keys,
            output_keys = flat.len(),
            collisions,
            "flattened document"
        );

        flat
    }

    fn wrap_leaf(&self, leaf: Value) -> Value {
        match &self.config.wrap_key {
            Some(key) => {
                let mut wrapper = Map::new();
                wrapper.insert(key.clone(), leaf);
                Value::Object(wrapper)
            }
            None => leaf,
        }
    }
}
