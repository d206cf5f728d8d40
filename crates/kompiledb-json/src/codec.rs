//! `serde_json`-backed [`JsonIo`] implementation.

use kompiledb_core::{CompilationDatabase, DatabaseError, JsonIo, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::decode::decode_database;
use crate::options::{JsonOptions, Layout};

/// Compilation database codec built on `serde_json`.
///
/// Holds its [`JsonOptions`] by value; instances are cheap to copy and can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerdeJsonIo {
    options: JsonOptions,
}

impl SerdeJsonIo {
    pub fn new(options: JsonOptions) -> Self {
        Self { options }
    }

    /// Codec with indented output.
    pub fn pretty() -> Self {
        Self::new(JsonOptions::pretty())
    }

    pub fn options(&self) -> JsonOptions {
        self.options
    }

    fn write<T: Serialize>(&self, value: &T) -> serde_json::Result<String> {
        match self.options.layout {
            Layout::Compact => serde_json::to_string(value),
            Layout::Pretty { indent } => {
                let indent = vec![b' '; indent];
                let mut buf = Vec::new();
                let formatter = PrettyFormatter::with_indent(&indent);
                value.serialize(&mut serde_json::Serializer::with_formatter(&mut buf, formatter))?;
                String::from_utf8(buf).map_err(serde::ser::Error::custom)
            }
        }
    }
}

impl JsonIo for SerdeJsonIo {
    fn to_json(&self, database: &CompilationDatabase) -> String {
        // Only strings, arrays and objects with string keys are written into
        // an in-memory buffer, so serialization cannot fail.
        self.write(database)
            .expect("compilation database serialization is infallible")
    }

    fn to_compilation_database(&self, json: &str) -> Result<CompilationDatabase> {
        let value: Value = serde_json::from_str(json).map_err(DatabaseError::syntax)?;
        decode_database(&value)
    }
}
