//! Codec boundary and file helpers.
//!
//! A codec turns a [`CompilationDatabase`] into JSON text and back. File
//! helpers are provided on top of the two text operations, so every codec
//! reports I/O failures the same way: as [`DatabaseError::Io`], never as a
//! record-level error.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::{CompilationDatabase, DatabaseError, Result};
use crate::obs;

/// A JSON codec for compilation databases.
pub trait JsonIo: Send + Sync {
    /// Serialize `database` as a JSON array.
    ///
    /// Layout (compact or indented) is the codec's own configuration.
    fn to_json(&self, database: &CompilationDatabase) -> String;

    /// Decode JSON text into a database.
    ///
    /// Invalid elements land in [`CompilationDatabase::errors`]; only a
    /// syntax error or a non-array top level fails the call.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::Syntax`: `json` is not well-formed JSON.
    /// - `DatabaseError::NotAnArray`: the top-level value is not an array.
    fn to_compilation_database(&self, json: &str) -> Result<CompilationDatabase>;

    /// Read and decode the database stored at `path`.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Io` when `path` is missing, is not a regular file, or
    /// cannot be read; otherwise the errors of
    /// [`to_compilation_database`](JsonIo::to_compilation_database).
    fn read_compilation_database(&self, path: &Path) -> Result<CompilationDatabase> {
        let json = read_regular_file(path)?;
        obs::emit_database_read(path, json.len());
        self.to_compilation_database(&json)
    }

    /// Serialize `database` and atomically replace the file at `path`.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Io` when the file cannot be written.
    fn write_compilation_database(&self, database: &CompilationDatabase, path: &Path) -> Result<()> {
        let json = self.to_json(database);
        write_atomically(path, json.as_bytes()).map_err(|e| DatabaseError::io(path, e))?;
        obs::emit_database_written(path, database.len());
        Ok(())
    }
}

fn read_regular_file(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| DatabaseError::io(path, e))?;
    if !metadata.is_file() {
        return Err(DatabaseError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }
    fs::read_to_string(path).map_err(|e| DatabaseError::io(path, e))
}

fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // Write to a temp file in the same directory, then rename over the target.
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompilationCommand, Invocation};
    use std::collections::BTreeMap;

    /// Codec that stores only the number of commands, enough to exercise the
    /// provided file helpers.
    struct CountingIo;

    impl JsonIo for CountingIo {
        fn to_json(&self, database: &CompilationDatabase) -> String {
            database.len().to_string()
        }

        fn to_compilation_database(&self, json: &str) -> Result<CompilationDatabase> {
            let count: usize = json.trim().parse().map_err(DatabaseError::syntax)?;
            let commands = (0..count)
                .map(|i| {
                    CompilationCommand::new("", format!("{i}.c"), Invocation::command("cc"))
                })
                .collect();
            Ok(CompilationDatabase::with_errors(commands, BTreeMap::new()))
        }
    }

    fn sample() -> CompilationDatabase {
        CompilationDatabase::new(vec![
            CompilationCommand::new("", "0.c", Invocation::command("cc")),
            CompilationCommand::new("", "1.c", Invocation::command("cc")),
        ])
    }

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("compile_commands.json");

        CountingIo.write_compilation_database(&sample(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "2");

        let db = CountingIo.read_compilation_database(&path).unwrap();
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compile_commands.json");
        fs::write(&path, "stale contents that are longer").unwrap();

        CountingIo.write_compilation_database(&sample(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "2");

        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn reading_a_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CountingIo.read_compilation_database(dir.path()).unwrap_err();
        match err {
            DatabaseError::Io { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidInput);
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn reading_a_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::COMPILE_COMMANDS_JSON);
        let err = CountingIo.read_compilation_database(&path).unwrap_err();
        match err {
            DatabaseError::Io { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn decode_errors_pass_through_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compile_commands.json");
        fs::write(&path, "not a number").unwrap();

        let err = CountingIo.read_compilation_database(&path).unwrap_err();
        assert!(matches!(err, DatabaseError::Syntax(_)));
    }
}
