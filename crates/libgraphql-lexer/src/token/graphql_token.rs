use crate::token::GraphQLTokenKind;
use crate::ByteSpan;
use crate::GraphQLFloatFormat;

/// A snapshot of one lexed token: kind, raw value, span, and the 1-indexed
/// line/column of the token's start.
///
/// # Lifetime Parameter
///
/// The `'src` lifetime represents the source buffer this token was lexed
/// from. `value` borrows directly from that buffer; nothing is copied.
///
/// Produced by [`Utf8GraphQLLexer::token()`](crate::Utf8GraphQLLexer::token)
/// and by the [`GraphQLTokens`](crate::GraphQLTokens) iterator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphQLToken<'src> {
    /// The kind of token.
    pub kind: GraphQLTokenKind,

    /// The token's payload: a byte sub-slice of the source buffer. Empty
    /// for punctuators and the end-of-file sentinel. For strings and block
    /// strings this excludes the enclosing quotes; for comments the leading
    /// `#`/space/tab run is trimmed.
    pub value: &'src [u8],

    /// The byte range the token occupies in the source buffer.
    pub span: ByteSpan,

    /// 1-indexed line number of the token's start.
    pub line: usize,

    /// 1-indexed column of the token's start.
    pub column: usize,

    /// The observed float format; present only on `Float` tokens.
    pub float_format: Option<GraphQLFloatFormat>,
}

impl<'src> GraphQLToken<'src> {
    /// Returns the token value as a UTF-8 string slice, or `None` if the
    /// value bytes are not valid UTF-8 on their own (e.g. a multi-byte
    /// character split by a comment trim; never the case for values lexed
    /// from valid UTF-8 documents).
    pub fn value_as_str(&self) -> Option<&'src str> {
        std::str::from_utf8(self.value).ok()
    }
}
