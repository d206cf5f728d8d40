//! kompiledb core library
//!
//! Data model for `compile_commands.json` compilation databases and the
//! [`JsonIo`] boundary codecs implement. The `serde_json` codec lives in the
//! `kompiledb-json` crate.

pub mod domain;
pub mod io;
pub mod obs;

pub use domain::{
    CompilationCommand, CompilationDatabase, DatabaseError, EnvPath, Invocation, JsonType,
    RecordError, Result, COMPILE_COMMANDS_JSON,
};
pub use io::JsonIo;
