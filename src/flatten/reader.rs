use crate::error::{FlattenError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read and parse a JSON document from a file
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let origin = path.display().to_string();

    let file = File::open(path).map_err(|source| FlattenError::Io {
        origin: origin.clone(),
        source,
    })?;

    tracing::debug!(path = %origin, "reading document");
    parse_document(BufReader::new(file), &origin)
}

/// Parse a single JSON document from a reader.
///
/// `origin` names the source in diagnostics. Read failures surfaced by the
/// parser are reported as `Io`, everything else as `Parse`. There is no
/// nesting limit: the parser grows its stack on the heap as it descends.
pub fn parse_document<R: Read>(reader: R, origin: &str) -> Result<Value> {
    let mut de = serde_json::Deserializer::from_reader(reader);
    de.disable_recursion_limit();

    Value::deserialize(serde_stacker::Deserializer::new(&mut de))
        .and_then(|value| de.end().map(|_| value))
        .map_err(|source| {
            if source.is_io() {
                FlattenError::Io {
                    origin: origin.to_string(),
                    source: source.into(),
                }
            } else {
                FlattenError::Parse {
                    origin: origin.to_string(),
                    source,
                }
            }
        })
}
