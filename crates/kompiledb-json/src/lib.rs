//! `serde_json` codec for kompiledb compilation databases.
//!
//! [`SerdeJsonIo`] implements [`kompiledb_core::JsonIo`]. Callers that already
//! hold a parsed `serde_json::Value` can use [`decode_database`] and
//! [`decode_command`] directly.

pub mod codec;
pub mod decode;
pub mod options;

pub use codec::SerdeJsonIo;
pub use decode::{decode_command, decode_database, json_type};
pub use options::{JsonOptions, Layout};
