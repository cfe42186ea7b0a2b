//! A hand-rolled lexical analyzer for GraphQL source text.
//!
//! This crate scans a contiguous UTF-8 byte buffer and produces classified
//! tokens (names, numbers, strings, block strings, comments, punctuators)
//! together with precise source positions for downstream parsing and error
//! reporting.
//!
//! # Design
//!
//! - **Zero-copy lexing**: token values are byte sub-slices of the source
//!   buffer. The `'src` lifetime ties every token value to the input; nothing
//!   is copied or allocated on the hot path.
//! - **Table-driven dispatch**: a precomputed 256-entry byte-classification
//!   table drives the scanner's dispatch in O(1) per byte.
//! - **Cursor API plus iterator**: [`Utf8GraphQLLexer`] exposes an
//!   `advance()`-style cursor over the current token's state; `into_tokens()`
//!   wraps it in a [`GraphQLTokens`] iterator for callers that prefer one.
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_lexer::GraphQLTokenKind;
//! use libgraphql_lexer::Utf8GraphQLLexer;
//!
//! let mut lexer = Utf8GraphQLLexer::from_str("{ name }")?;
//! while lexer.advance()? {
//!     println!("{:?} at {}:{}", lexer.kind(), lexer.line(), lexer.column());
//! }
//! assert_eq!(lexer.kind(), GraphQLTokenKind::EndOfFile);
//! # Ok::<(), libgraphql_lexer::GraphQLSyntaxError>(())
//! ```

mod byte_span;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_float_format;
mod graphql_syntax_error;
mod graphql_syntax_error_kind;
pub mod lexer;
pub mod token;

pub use byte_span::ByteSpan;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_float_format::GraphQLFloatFormat;
pub use graphql_syntax_error::GraphQLSyntaxError;
pub use graphql_syntax_error_kind::GraphQLSyntaxErrorKind;
pub use lexer::GraphQLTokens;
pub use lexer::Utf8GraphQLLexer;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use token::GraphQLToken;
pub use token::GraphQLTokenKind;
