//! A single translation-unit record.

use serde::Serialize;

use super::env_path::EnvPath;

/// How the compiler was invoked for a translation unit.
///
/// A record carries exactly one of the two forms. `Command` is kept verbatim
/// and never tokenized, so a database written back out uses the same field
/// the input used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Invocation {
    /// Tokenized argv; the first element is conventionally the compiler.
    Arguments(Vec<String>),

    /// A single shell-escaped command line.
    Command(String),
}

impl Invocation {
    /// JSON key of the tokenized form.
    pub const ARGUMENTS: &'static str = "arguments";

    /// JSON key of the shell-line form.
    pub const COMMAND: &'static str = "command";

    /// Build an `Arguments` invocation from anything string-like.
    pub fn arguments<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Arguments(args.into_iter().map(Into::into).collect())
    }

    pub fn command(line: impl Into<String>) -> Self {
        Self::Command(line.into())
    }

    /// The argv, when this is the tokenized form.
    pub fn as_arguments(&self) -> Option<&[String]> {
        match self {
            Self::Arguments(args) => Some(args),
            Self::Command(_) => None,
        }
    }

    /// The command line, when this is the shell-line form.
    pub fn as_command(&self) -> Option<&str> {
        match self {
            Self::Arguments(_) => None,
            Self::Command(line) => Some(line),
        }
    }
}

/// One entry of a compilation database.
///
/// Serializes with keys in the order `directory`, `file`,
/// `arguments`/`command`, `output`; `output` is omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CompilationCommand {
    directory: EnvPath,
    file: EnvPath,
    #[serde(flatten)]
    invocation: Invocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<EnvPath>,
}

impl CompilationCommand {
    /// Create a command without an output path.
    ///
    /// # Panics
    ///
    /// Panics if `file` is empty. Input read from JSON is validated by the
    /// codec instead, which reports an empty `file` as a record error.
    pub fn new(
        directory: impl Into<EnvPath>,
        file: impl Into<EnvPath>,
        invocation: Invocation,
    ) -> Self {
        let file = file.into();
        assert!(
            !file.is_empty(),
            "compilation command requires a non-empty `file`"
        );
        Self {
            directory: directory.into(),
            file,
            invocation,
            output: None,
        }
    }

    /// Set the output artifact path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<EnvPath>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn directory(&self) -> &EnvPath {
        &self.directory
    }

    pub fn file(&self) -> &EnvPath {
        &self.file
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    pub fn output(&self) -> Option<&EnvPath> {
        self.output.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clang(file: &str) -> CompilationCommand {
        CompilationCommand::new("", file, Invocation::arguments(["clang", "-c", file]))
    }

    #[test]
    fn serialized_keys_follow_canonical_order() {
        let cmd = clang("file1.c").with_output("file1.o");
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(
            json,
            r#"{"directory":"","file":"file1.c","arguments":["clang","-c","file1.c"],"output":"file1.o"}"#
        );
    }

    #[test]
    fn command_form_serializes_under_command_key() {
        let cmd = CompilationCommand::new("/build", "a.c", Invocation::command("cc -c a.c"));
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(
            json,
            r#"{"directory":"/build","file":"a.c","command":"cc -c a.c"}"#
        );
    }

    #[test]
    fn field_constants_match_serialized_keys() {
        let args = serde_json::to_value(clang("a.c")).unwrap();
        assert!(args.get(Invocation::ARGUMENTS).is_some());

        let line = CompilationCommand::new("", "a.c", Invocation::command("cc"));
        let line = serde_json::to_value(line).unwrap();
        assert!(line.get(Invocation::COMMAND).is_some());
    }

    #[test]
    fn absent_output_is_omitted() {
        let value = serde_json::to_value(clang("a.c")).unwrap();
        assert!(value.get("output").is_none());
    }

    #[test]
    fn invocation_accessors_are_exclusive() {
        let args = Invocation::arguments(["gcc", "-c", "x.c"]);
        assert_eq!(args.as_arguments().map(<[String]>::len), Some(3));
        assert!(args.as_command().is_none());

        let line = Invocation::command("gcc -c x.c");
        assert_eq!(line.as_command(), Some("gcc -c x.c"));
        assert!(line.as_arguments().is_none());
    }

    #[test]
    #[should_panic(expected = "non-empty `file`")]
    fn empty_file_fails_fast() {
        let _ = CompilationCommand::new("", "", Invocation::command("cc"));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(clang("a.c"), clang("a.c"));
        assert_ne!(clang("a.c"), clang("a.c").with_output("a.o"));
    }
}
