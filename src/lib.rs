//! # flatjson - JSON flattening
//!
//! Turns a nested JSON object into a single-level object whose keys are the
//! dotted paths to each leaf.
//!
//! ## Quick Start
//!
//! ```rust
//! use flatjson::{FlattenConfig, Flattener};
//! use serde_json::json;
//!
//! # fn main() -> flatjson::Result<()> {
//! let data = json!({
//!     "a": 1,
//!     "b": {"c": 2, "d": {"e": 3}},
//!     "tags": ["x", {"y": 1}]
//! });
//!
//! let flattener = Flattener::new(FlattenConfig::default())?;
//! let flat = flattener.flatten(data)?;
//!
//! assert_eq!(
//!     serde_json::Value::Object(flat),
//!     json!({"a": 1, "b.c": 2, "b.d.e": 3, "tags": ["x", {"y": 1}]})
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Keys that join to the same path overwrite each other, last visited wins:
//! `{"a.b": 1, "a": {"b": 2}}` flattens to `{"a.b": 2}`.

use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

pub mod error;
pub mod flatten;

pub use error::{FlattenError, Result};
pub use flatten::{flatten, read_document, FlatWriter, FlattenConfig, Flattener, Node};

/// Main entry point: flatten the JSON document held by a reader
pub fn flatten_json<R: Read>(reader: R, config: FlattenConfig) -> Result<Map<String, Value>> {
    let flattener = Flattener::new(config)?;
    let value = flatten::parse_document(reader, "input")?;
    flattener.flatten(value)
}

/// Read a JSON file and flatten it
pub fn flatten_file<P: AsRef<Path>>(path: P, config: FlattenConfig) -> Result<Map<String, Value>> {
    let flattener = Flattener::new(config)?;
    let value = read_document(path)?;
    flattener.flatten(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_json_from_reader() {
        let input = r#"{"id": 1, "profile": {"name": "Alice", "langs": ["it", "en"]}}"#;

        let flat = flatten_json(input.as_bytes(), FlattenConfig::default()).unwrap();

        assert_eq!(
            Value::Object(flat),
            json!({"id": 1, "profile.name": "Alice", "profile.langs": ["it", "en"]})
        );
    }

    #[test]
    fn test_config_checked_before_reading() {
        let config = FlattenConfig::default().with_separator("");
        let err = flatten_json("not json".as_bytes(), config).unwrap_err();
        assert!(matches!(err, FlattenError::EmptySeparator));
    }

    #[test]
    fn test_flatten_file_rejects_top_level_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[{\"a\": 1}]").unwrap();

        let err = flatten_file(file.path(), FlattenConfig::default()).unwrap_err();
        assert!(matches!(err, FlattenError::NotAnObject { found: "array" }));
    }
}
