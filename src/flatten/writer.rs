use crate::error::{FlattenError, Result};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{Stdout, Write};
use std::path::Path;

/// Serializes flat documents to an output, pretty-printed by default
pub struct FlatWriter<W: Write> {
    writer: W,
    target: String,
    pretty: bool,
}

impl FlatWriter<Stdout> {
    pub fn stdout() -> Self {
        FlatWriter::new(std::io::stdout(), "stdout")
    }
}

impl FlatWriter<File> {
    /// Create (or truncate) a file to write to
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let target = path.as_ref().display().to_string();
        let file = File::create(path.as_ref()).map_err(|source| FlattenError::Output {
            target: target.clone(),
            source,
        })?;
        Ok(FlatWriter::new(file, target))
    }
}

impl<W: Write> FlatWriter<W> {
    pub fn new(writer: W, target: impl Into<String>) -> Self {
        FlatWriter {
            writer,
            target: target.into(),
            pretty: true,
        }
    }

    /// Write single-line JSON instead of the two-space indented form
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Write one document followed by a newline, then flush.
    ///
    /// The document is serialized in full before anything is written, so a
    /// serialization failure leaves the output untouched.
    pub fn write_document(&mut self, flat: &Map<String, Value>) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(flat)
        } else {
            serde_json::to_string(flat)
        }
        .map_err(FlattenError::Serialize)?;

        writeln!(self.writer, "{}", json)
            .and_then(|_| self.writer.flush())
            .map_err(|source| FlattenError::Output {
                target: self.target.clone(),
                source,
            })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_pretty_two_space_indent() {
        let mut writer = FlatWriter::new(Vec::new(), "buffer");
        writer.write_document(&map(json!({"a": 1, "b.c": [1, 2]}))).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "{\n  \"a\": 1,\n  \"b.c\": [\n    1,\n    2\n  ]\n}\n");
    }

    #[test]
    fn test_non_ascii_written_literally() {
        let mut writer = FlatWriter::new(Vec::new(), "buffer");
        writer.write_document(&map(json!({"saluto": "perché 日本"}))).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert!(output.contains("perché 日本"));
        assert!(!output.contains("\\u"));
    }

    #[test]
    fn test_compact_and_empty() {
        let mut writer = FlatWriter::new(Vec::new(), "buffer").compact();
        writer.write_document(&map(json!({"a": {"value": 1}}))).unwrap();
        writer.write_document(&Map::new()).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "{\"a\":{\"value\":1}}\n{}\n");
    }

    #[test]
    fn test_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut writer = FlatWriter::create(&path).unwrap();
        writer.write_document(&map(json!({"x.y": true}))).unwrap();
        drop(writer);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"x.y\": true\n}\n");
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.json");

        let err = FlatWriter::create(&path).err().unwrap();
        assert!(matches!(err, FlattenError::Output { .. }));
    }
}
