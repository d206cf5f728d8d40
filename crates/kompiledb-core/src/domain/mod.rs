//! Domain model for compilation databases.
//!
//! - `EnvPath`: a path exactly as the build environment spelled it
//! - `Invocation`: argv or shell command line, never both
//! - `CompilationCommand`: one translation unit
//! - `CompilationDatabase`: valid commands plus per-record diagnostics

pub mod command;
pub mod database;
pub mod env_path;
pub mod error;

pub use command::{CompilationCommand, Invocation};
pub use database::{CompilationDatabase, COMPILE_COMMANDS_JSON};
pub use env_path::EnvPath;
pub use error::{DatabaseError, JsonType, RecordError, Result};
