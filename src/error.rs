use thiserror::Error;

/// Errors produced while reading, flattening or writing a document
#[derive(Debug, Error)]
pub enum FlattenError {
    /// The input could not be opened or read
    #[error("failed to read {origin}")]
    Io {
        origin: String,
        source: std::io::Error,
    },

    /// The input is not valid JSON; the source carries line and column
    #[error("failed to parse {origin}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },

    #[error("top-level value must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("separator must not be empty")]
    EmptySeparator,

    #[error("failed to serialize flattened document")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {target}")]
    Output {
        target: String,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FlattenError>;
