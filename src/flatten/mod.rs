//! JSON flattening - collapse nested objects into one level of path keys
//!
//! Nested object keys are joined with a separator (`.` by default), so
//! `{"b": {"c": 2}}` becomes `{"b.c": 2}`. Arrays and scalars are leaves and
//! are copied through untouched.

pub mod types;
pub mod flattener;
pub mod reader;
pub mod writer;

pub use types::{json_type_name, FlattenConfig, Node};
pub use flattener::{flatten, Flattener};
pub use reader::{parse_document, read_document};
pub use writer::FlatWriter;
