//! An iterator adapter over the cursor-style lexer.

use crate::lexer::Utf8GraphQLLexer;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::ByteSpan;
use crate::GraphQLSyntaxError;

impl<'src> Utf8GraphQLLexer<'src> {
    /// Returns a snapshot of the current token.
    pub fn token(&self) -> GraphQLToken<'src> {
        GraphQLToken {
            kind: self.kind(),
            value: self.value(),
            span: ByteSpan::new(self.start(), self.end()),
            line: self.line(),
            column: self.column(),
            float_format: self.float_format(),
        }
    }

    /// Consumes the lexer and returns an iterator over its tokens.
    pub fn into_tokens(self) -> GraphQLTokens<'src> {
        GraphQLTokens {
            lexer: self,
            finished: false,
        }
    }
}

/// An iterator that drives an [`Utf8GraphQLLexer`] to completion.
///
/// Yields one `Ok(GraphQLToken)` per token, then a final `Ok` item for the
/// terminal `EndOfFile` token, then `None`. A syntax error is yielded once
/// as `Err` and fuses the iterator (the lexer does not self-recover).
pub struct GraphQLTokens<'src> {
    lexer: Utf8GraphQLLexer<'src>,
    finished: bool,
}

impl<'src> Iterator for GraphQLTokens<'src> {
    type Item = Result<GraphQLToken<'src>, GraphQLSyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.lexer.advance() {
            Ok(true) => Some(Ok(self.lexer.token())),
            Ok(false) => {
                debug_assert_eq!(self.lexer.kind(), GraphQLTokenKind::EndOfFile);
                self.finished = true;
                Some(Ok(self.lexer.token()))
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}
