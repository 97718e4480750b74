//! flatview
//!
//! This crate is the user-facing entry point for decoding flat memory
//! snapshots:
//!
//! - [compile_schema] (re-exported from the compiler) builds an immutable
//!   descriptor tree once per distinct schema string,
//! - [Value::decode] walks a byte region with that tree,
//! - [decode_to_json] composes the two for one-shot inspection.

use thiserror::Error;

pub use flatview_compiler::{compile_schema, SchemaError};
pub use flatview_schema::{DecodeError, DecodeWarning, Decoded, Field, FieldKind, Region, Value};

/// Any failure the one-shot entry points can surface.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Compile `schema` and decode the record at `offset` of `bytes` into a
/// pretty-printed JSON string. Recovered defects are not part of the JSON;
/// callers that need them should compile once and use [Value::decode].
pub fn decode_to_json(schema: &str, bytes: &[u8], offset: usize) -> Result<String, Error> {
    let fields = compile_schema(schema)?;
    let decoded = Value::decode(&fields, &Region::new(bytes), offset)?;
    Ok(serde_json::to_string_pretty(&decoded.value)?)
}

pub mod error {
    pub use crate::Error;
    pub use flatview_compiler::SchemaError;
    pub use flatview_schema::{DecodeError, DecodeWarning};
}

pub mod schema {
    pub use flatview_schema::{Decoded, Field, FieldKind, Region, Value};
}
