use crate::GraphQLErrorNoteKind;
use crate::SmallVec;

/// An error note providing additional context about a syntax error.
///
/// Notes augment the primary error message with explanatory context (why
/// the error occurred), actionable suggestions (how to fix it), or
/// specification references (where to learn more). The error itself pins
/// the line and column; notes never carry positions of their own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLErrorNote {
    /// The kind of note (determines rendering prefix).
    pub kind: GraphQLErrorNoteKind,

    /// The note message.
    pub message: String,
}

impl GraphQLErrorNote {
    /// Creates a general note.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
        }
    }

    /// Creates a help note.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
        }
    }

    /// Creates a spec reference note.
    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Spec,
            message: url.into(),
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since most errors have 0-2 notes, avoiding heap
/// allocation in the common case.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
