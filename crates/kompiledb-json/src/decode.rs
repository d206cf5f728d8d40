//! Tolerant decoding of `serde_json::Value` trees into compilation databases.
//!
//! Every array element is validated on its own. A bad element is recorded in
//! the database's error map under its original index and decoding moves on
//! to the next one; only a non-array top level fails the whole decode.

use std::collections::BTreeMap;

use kompiledb_core::{
    obs, CompilationCommand, CompilationDatabase, DatabaseError, Invocation, JsonType,
    RecordError, Result,
};
use serde_json::{Map, Value};

/// Classify a JSON value.
pub fn json_type(value: &Value) -> JsonType {
    match value {
        Value::Object(_) => JsonType::Object,
        Value::Array(_) => JsonType::Array,
        Value::String(_) => JsonType::String,
        Value::Number(_) => JsonType::Number,
        Value::Bool(_) => JsonType::Boolean,
        Value::Null => JsonType::Null,
    }
}

/// Decode a parsed JSON document into a database.
///
/// # Errors
///
/// `DatabaseError::NotAnArray` when `value` is not a JSON array. Problems
/// with individual elements never fail the call.
pub fn decode_database(value: &Value) -> Result<CompilationDatabase> {
    let Value::Array(items) = value else {
        return Err(DatabaseError::NotAnArray {
            actual: json_type(value),
            rendered: value.to_string(),
        });
    };

    let mut commands = Vec::with_capacity(items.len());
    let mut errors = BTreeMap::new();

    for (index, item) in items.iter().enumerate() {
        match decode_command(item) {
            Ok(command) => commands.push(command),
            Err(err) => {
                let message = err.to_string();
                obs::emit_record_rejected(index, &message);
                errors.insert(index, message);
            }
        }
    }

    obs::emit_database_decoded(commands.len(), errors.len());
    Ok(CompilationDatabase::with_errors(commands, errors))
}

/// Decode a single database record.
///
/// Checks run in the order `directory`, `file`, invocation, `output`; the
/// first failure is returned. Unknown keys are ignored and an explicit
/// `"output": null` is treated as absent.
///
/// # Errors
///
/// The [`RecordError`] describing the first problem found.
pub fn decode_command(value: &Value) -> std::result::Result<CompilationCommand, RecordError> {
    let Value::Object(fields) = value else {
        return Err(RecordError::NotAnObject {
            actual: json_type(value),
            rendered: value.to_string(),
        });
    };
    let record = Record { value, fields };

    let directory = record.required_string("directory")?;
    let file = record.required_string("file")?;
    if file.is_empty() {
        return Err(RecordError::EmptyFile {
            rendered: record.render(),
        });
    }
    let invocation = record.invocation()?;
    let output = record.optional_string("output")?;

    let command = CompilationCommand::new(directory, file, invocation);
    Ok(match output {
        Some(output) => command.with_output(output),
        None => command,
    })
}

struct Record<'a> {
    value: &'a Value,
    fields: &'a Map<String, Value>,
}

impl Record<'_> {
    fn render(&self) -> String {
        self.value.to_string()
    }

    fn required_string(&self, field: &'static str) -> std::result::Result<&str, RecordError> {
        match self.fields.get(field) {
            Some(value) => self.expect_string(field.to_string(), value),
            None => Err(RecordError::MissingField {
                field,
                rendered: self.render(),
            }),
        }
    }

    fn optional_string(
        &self,
        field: &'static str,
    ) -> std::result::Result<Option<&str>, RecordError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => self.expect_string(field.to_string(), value).map(Some),
        }
    }

    fn invocation(&self) -> std::result::Result<Invocation, RecordError> {
        match (
            self.fields.get(Invocation::ARGUMENTS),
            self.fields.get(Invocation::COMMAND),
        ) {
            (None, None) => Err(RecordError::MissingInvocation),
            (Some(_), Some(_)) => Err(RecordError::AmbiguousInvocation {
                rendered: self.render(),
            }),
            (Some(arguments), None) => self.arguments(arguments).map(Invocation::Arguments),
            (None, Some(command)) => self
                .expect_string(Invocation::COMMAND.to_string(), command)
                .map(Invocation::command),
        }
    }

    fn arguments(&self, value: &Value) -> std::result::Result<Vec<String>, RecordError> {
        let Value::Array(items) = value else {
            return Err(RecordError::NotAnArray {
                path: Invocation::ARGUMENTS.to_string(),
                actual: json_type(value),
                rendered: self.render(),
            });
        };

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                self.expect_string(format!("{}[{i}]", Invocation::ARGUMENTS), item)
                    .map(str::to_string)
            })
            .collect()
    }

    fn expect_string<'v>(
        &self,
        path: String,
        value: &'v Value,
    ) -> std::result::Result<&'v str, RecordError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(RecordError::NotAString {
                path,
                actual: json_type(other),
                rendered: self.render(),
            }),
        }
    }
}
