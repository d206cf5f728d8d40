//! Error taxonomy for reading compilation databases.

use std::fmt;
use std::path::PathBuf;

/// The kind of a JSON value, as named in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Object => "JSON object",
            Self::Array => "JSON array",
            Self::String => "JSON string",
            Self::Number => "JSON number",
            Self::Boolean => "JSON boolean",
            Self::Null => "JSON null",
        };
        f.write_str(name)
    }
}

/// Why a single array element was rejected.
///
/// `rendered` fields hold the compact JSON of the whole offending record so
/// a diagnostic can be traced back to the input without the source file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("Expected a JSON object but was a {actual}: {rendered}")]
    NotAnObject { actual: JsonType, rendered: String },

    #[error("Required field `{field}` is missing: {rendered}")]
    MissingField {
        field: &'static str,
        rendered: String,
    },

    #[error("Expected `{path}` to be a string but was a {actual}: {rendered}")]
    NotAString {
        path: String,
        actual: JsonType,
        rendered: String,
    },

    #[error("Expected `{path}` to be an array but was a {actual}: {rendered}")]
    NotAnArray {
        path: String,
        actual: JsonType,
        rendered: String,
    },

    #[error("Field `file` must not be empty: {rendered}")]
    EmptyFile { rendered: String },

    #[error("Either `arguments` or `command` is required")]
    MissingInvocation,

    #[error("Only one of `arguments` or `command` is allowed: {rendered}")]
    AmbiguousInvocation { rendered: String },
}

/// Document-level and I/O failures. Any of these aborts the whole read.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Syntax(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("When reading a database, expected a JSON array but was a {actual}: {rendered}")]
    NotAnArray { actual: JsonType, rendered: String },
}

impl DatabaseError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap an error reported by the JSON engine while parsing.
    pub fn syntax(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Syntax(Box::new(err))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type for compilation database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
