use crate::GraphQLErrorNote;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLErrorNotes;
use crate::GraphQLSyntaxErrorKind;

/// A syntax error with location information and contextual notes.
///
/// Raised by [`Utf8GraphQLLexer`](crate::Utf8GraphQLLexer) when a malformed
/// construct is encountered. Errors are fatal to the current scan; the
/// lexer does not self-recover.
///
/// The `line` and `column` are 1-indexed and point at the offending byte
/// (for unterminated literals, at the position where the closing delimiter
/// was expected).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLSyntaxError {
    /// Human-readable primary error message.
    ///
    /// Examples: "Unexpected character `?`", "Unterminated string literal"
    message: String,

    /// Categorized error kind for programmatic handling.
    ///
    /// Enables tools to pattern-match on error types without parsing
    /// messages.
    kind: GraphQLSyntaxErrorKind,

    /// 1-indexed line number of the offending byte.
    line: usize,

    /// 1-indexed column of the offending byte.
    column: usize,

    /// Additional notes providing context, suggestions, and spec links.
    notes: GraphQLErrorNotes,
}

impl GraphQLSyntaxError {
    /// Creates a new syntax error with no notes.
    pub fn new(
        message: impl Into<String>,
        kind: GraphQLSyntaxErrorKind,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            line,
            column,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Creates a new syntax error with notes.
    pub fn with_notes(
        message: impl Into<String>,
        kind: GraphQLSyntaxErrorKind,
        line: usize,
        column: usize,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            line,
            column,
            notes,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> GraphQLSyntaxErrorKind {
        self.kind
    }

    /// Returns the 1-indexed line number of the offending byte.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-indexed column of the offending byte.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// Adds a general note.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    /// Adds a help note.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    /// Adds a spec reference note.
    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// 5:12: error: Unterminated string literal
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}:{}: error: {}", self.line, self.column, self.message)
    }

    /// Formats this error as a multi-line diagnostic including notes.
    ///
    /// Produces output like:
    /// ```text
    /// error: Unterminated string literal
    ///   --> 5:12
    ///    = help: Add a closing `"`
    /// ```
    pub fn format_detailed(&self) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!("  --> {}:{}\n", self.line, self.column));

        for note in &self.notes {
            let prefix = match note.kind {
                GraphQLErrorNoteKind::General => "note",
                GraphQLErrorNoteKind::Help => "help",
                GraphQLErrorNoteKind::Spec => "spec",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));
        }

        output
    }
}
