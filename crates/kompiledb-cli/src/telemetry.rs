//! Tracing setup for the `kompiledb` binary.
//!
//! `check` prints its report on stdout and `format` may be pointed at
//! `/dev/stdout`, so diagnostics (`record.rejected`, `database.read`, ...)
//! always go to stderr.

use std::io;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber for the `kompiledb` process.
///
/// `--verbose` maps to `Level::DEBUG`, which surfaces one `record.rejected`
/// line per invalid database entry; `RUST_LOG` overrides it. `--json` switches
/// stderr to one JSON object per line. A subscriber that is already installed
/// is left in place.
pub fn init_tracing(json: bool, level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let layer = fmt::layer().with_target(false).with_writer(io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if json {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer).try_init()
    };
    installed.ok();
}
