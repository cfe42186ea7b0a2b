//! The byte-cursor scanner and its classification tables.

pub(crate) mod byte_class;
mod graphql_tokens;
mod utf8_graphql_lexer;

pub use graphql_tokens::GraphQLTokens;
pub use utf8_graphql_lexer::Utf8GraphQLLexer;

#[cfg(test)]
mod tests;
