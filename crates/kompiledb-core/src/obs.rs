//! Structured tracing events for database reads and writes.
//!
//! Events carry an `event` field so log pipelines can filter on it, e.g.
//! `event=database.decoded commands=12 errors=1`.

use std::path::Path;

use tracing::{debug, info};

/// Emit event: a JSON array was decoded into a database.
pub fn emit_database_decoded(commands: usize, errors: usize) {
    info!(event = "database.decoded", commands = commands, errors = errors);
}

/// Emit event: an array element failed validation and was skipped.
pub fn emit_record_rejected(index: usize, message: &str) {
    debug!(event = "record.rejected", index = index, message = %message);
}

/// Emit event: a database file was read from disk.
pub fn emit_database_read(path: &Path, bytes: usize) {
    info!(event = "database.read", path = %path.display(), bytes = bytes);
}

/// Emit event: a database file was written to disk.
pub fn emit_database_written(path: &Path, commands: usize) {
    info!(event = "database.written", path = %path.display(), commands = commands);
}
