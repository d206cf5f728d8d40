//! The top-level compilation database aggregate.

use std::collections::BTreeMap;

use serde::Serialize;

use super::command::CompilationCommand;

/// Conventional file name of a compilation database.
pub const COMPILE_COMMANDS_JSON: &str = "compile_commands.json";

/// A set of compilation commands, plus the diagnostics for every input
/// record that could not be decoded.
///
/// `errors` is keyed by the record's zero-based position in the source JSON
/// array, so diagnostics stay correlated with the input even when earlier
/// records were dropped. A database read from JSON satisfies
/// `commands().len() + errors().len() == <array length>`; one built in memory
/// has no errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompilationDatabase {
    commands: Vec<CompilationCommand>,
    #[serde(skip)]
    errors: BTreeMap<usize, String>,
}

impl CompilationDatabase {
    pub fn new(commands: Vec<CompilationCommand>) -> Self {
        Self {
            commands,
            errors: BTreeMap::new(),
        }
    }

    /// Assemble a database from a decode pass.
    ///
    /// Intended for codecs: `errors` must be keyed by original array index.
    pub fn with_errors(
        commands: Vec<CompilationCommand>,
        errors: BTreeMap<usize, String>,
    ) -> Self {
        Self { commands, errors }
    }

    /// Successfully decoded commands, in input order.
    pub fn commands(&self) -> &[CompilationCommand] {
        &self.commands
    }

    /// Record-level errors, keyed by original array index.
    pub fn errors(&self) -> &BTreeMap<usize, String> {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// `true` when every input record decoded.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompilationCommand> {
        self.commands.iter()
    }

    /// Drop the diagnostics, keeping only the valid commands.
    pub fn into_commands(self) -> Vec<CompilationCommand> {
        self.commands
    }
}

impl From<Vec<CompilationCommand>> for CompilationDatabase {
    fn from(commands: Vec<CompilationCommand>) -> Self {
        Self::new(commands)
    }
}

impl FromIterator<CompilationCommand> for CompilationDatabase {
    fn from_iter<I: IntoIterator<Item = CompilationCommand>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CompilationDatabase {
    type Item = &'a CompilationCommand;
    type IntoIter = std::slice::Iter<'a, CompilationCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Invocation;

    fn command(file: &str) -> CompilationCommand {
        CompilationCommand::new("", file, Invocation::arguments(["clang", "-c", file]))
    }

    #[test]
    fn programmatic_database_has_no_errors() {
        let db: CompilationDatabase = vec![command("a.c"), command("b.c")].into_iter().collect();
        assert_eq!(db.len(), 2);
        assert!(db.is_complete());
        assert!(db.errors().is_empty());
    }

    #[test]
    fn default_is_empty() {
        let db = CompilationDatabase::default();
        assert!(db.is_empty());
        assert!(db.is_complete());
    }

    #[test]
    fn serializes_as_array_of_commands() {
        let mut errors = BTreeMap::new();
        errors.insert(1, "broken".to_string());
        let db = CompilationDatabase::with_errors(vec![command("a.c")], errors);

        let value = serde_json::to_value(&db).unwrap();
        let items = value.as_array().expect("top-level array");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["file"], "a.c");
    }

    #[test]
    fn empty_database_serializes_to_empty_array() {
        let json = serde_json::to_string(&CompilationDatabase::default()).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn iteration_preserves_order() {
        let db = CompilationDatabase::new(vec![command("b.c"), command("a.c")]);
        let files: Vec<&str> = db.iter().map(|c| c.file().as_str()).collect();
        assert_eq!(files, vec!["b.c", "a.c"]);
    }
}
