//! kompiledb - inspect and normalize compilation databases
//!
//! ## Commands
//!
//! - `check`: decode a database and report records that fail validation
//! - `format`: rewrite a database in canonical form

mod telemetry;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use kompiledb_core::{CompilationDatabase, JsonIo, COMPILE_COMMANDS_JSON};
use kompiledb_json::{JsonOptions, SerdeJsonIo};
use tracing::{info, warn, Level};

#[derive(Parser)]
#[command(name = "kompiledb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and normalize compile_commands.json databases", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every record and report the ones that fail
    Check {
        /// Database to read
        #[arg(default_value = COMPILE_COMMANDS_JSON)]
        path: PathBuf,

        /// Exit with an error if any record is invalid
        #[arg(long)]
        strict: bool,
    },

    /// Rewrite a database with canonical key order and layout
    Format {
        /// Database to read
        #[arg(default_value = COMPILE_COMMANDS_JSON)]
        path: PathBuf,

        /// Where to write the result (default: overwrite PATH)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indentation width for pretty output
        #[arg(long, env = "KOMPILEDB_INDENT", default_value_t = JsonOptions::DEFAULT_INDENT)]
        indent: usize,

        /// Write everything on a single line (overrides --indent)
        #[arg(long)]
        compact: bool,

        /// Drop invalid records instead of refusing to rewrite
        #[arg(long)]
        drop_invalid: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    telemetry::init_tracing(cli.json, level);

    match cli.command {
        Commands::Check { path, strict } => cmd_check(&path, strict),
        Commands::Format {
            path,
            output,
            indent,
            compact,
            drop_invalid,
        } => cmd_format(
            &path,
            output.as_deref(),
            format_options(indent, compact),
            drop_invalid,
        ),
    }
}

fn format_options(indent: usize, compact: bool) -> JsonOptions {
    if compact {
        JsonOptions::compact()
    } else {
        JsonOptions::indented(indent)
    }
}

fn cmd_check(path: &Path, strict: bool) -> Result<()> {
    let database = read_database(path)?;
    print!("{}", render_report(&database));

    if strict && !database.is_complete() {
        bail!(
            "{} invalid record(s) in {}",
            database.errors().len(),
            path.display()
        );
    }
    Ok(())
}

fn cmd_format(
    path: &Path,
    output: Option<&Path>,
    options: JsonOptions,
    drop_invalid: bool,
) -> Result<()> {
    let database = read_database(path)?;

    if !database.is_complete() {
        if !drop_invalid {
            bail!(
                "{} invalid record(s) in {}; rerun with --drop-invalid to discard them",
                database.errors().len(),
                path.display()
            );
        }
        for (index, message) in database.errors() {
            warn!(index = index, message = %message, "dropping invalid record");
        }
    }

    let database = CompilationDatabase::new(database.into_commands());
    let target = output.unwrap_or(path);
    SerdeJsonIo::new(options)
        .write_compilation_database(&database, target)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    info!(path = %target.display(), commands = database.len(), "database formatted");
    Ok(())
}

fn read_database(path: &Path) -> Result<CompilationDatabase> {
    SerdeJsonIo::default()
        .read_compilation_database(path)
        .with_context(|| format!("Failed to read compilation database {}", path.display()))
}

fn render_report(database: &CompilationDatabase) -> String {
    let mut out = format!(
        "{} commands, {} errors\n",
        database.commands().len(),
        database.errors().len()
    );
    for (index, message) in database.errors() {
        let _ = writeln!(out, "[{index}] {message}");
    }
    out
}
