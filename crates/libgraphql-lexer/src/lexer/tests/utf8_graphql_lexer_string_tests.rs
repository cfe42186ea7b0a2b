//! Tests for the single-line string recognizer: spans, raw values, escape
//! validation, and termination rules.

use crate::lexer::Utf8GraphQLLexer;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSyntaxErrorKind;

/// Helper to lex the first token of `source`.
fn lex_first(source: &str) -> Utf8GraphQLLexer<'_> {
    let mut lexer = Utf8GraphQLLexer::from_str(source).expect("source is non-empty");
    assert!(lexer.advance().expect("token lexes"));
    lexer
}

// =============================================================================
// Values and spans
// =============================================================================

/// Verifies a simple string: `start` on the opening quote, `end` on the
/// closing quote, value excluding both, cursor past the close.
#[test]
fn simple_string() {
    let lexer = lex_first("\"hi\"");
    assert_eq!(lexer.kind(), GraphQLTokenKind::String);
    assert_eq!(lexer.start(), 0);
    assert_eq!(lexer.end(), 3);
    assert_eq!(lexer.value(), b"hi");
    assert_eq!(lexer.position(), 4);
}

/// Verifies the empty string literal.
#[test]
fn empty_string() {
    let lexer = lex_first("\"\"");
    assert_eq!(lexer.kind(), GraphQLTokenKind::String);
    assert_eq!(lexer.start(), 0);
    assert_eq!(lexer.end(), 1);
    assert_eq!(lexer.value(), b"");
}

/// Verifies that the value is the raw inner slice: escapes are validated
/// but never decoded at this layer.
#[test]
fn escapes_are_not_decoded() {
    let lexer = lex_first(r#""a\nb""#);
    assert_eq!(lexer.kind(), GraphQLTokenKind::String);
    assert_eq!(lexer.value(), br"a\nb");
}

/// Verifies that every escape character of the grammar is accepted:
/// `" \ / b f n r t u`.
///
/// Per GraphQL spec:
/// <https://spec.graphql.org/September2025/#sec-String-Value>
#[test]
fn all_escape_characters_accepted() {
    let lexer = lex_first(r#""\"\\\/\b\f\n\r\tA""#);
    assert_eq!(lexer.kind(), GraphQLTokenKind::String);
    assert_eq!(lexer.value(), br#"\"\\\/\b\f\n\r\tA"#);
}

/// Verifies that an escaped quote does not close the literal.
#[test]
fn escaped_quote_does_not_close() {
    let lexer = lex_first(r#""a\"b""#);
    assert_eq!(lexer.kind(), GraphQLTokenKind::String);
    assert_eq!(lexer.value(), br#"a\"b"#);
}

/// Verifies that horizontal tab is legal string content (it is excluded
/// from the control-character class).
#[test]
fn tab_is_legal_content() {
    let lexer = lex_first("\"a\tb\"");
    assert_eq!(lexer.kind(), GraphQLTokenKind::String);
    assert_eq!(lexer.value(), b"a\tb");
}

/// Verifies that multi-byte UTF-8 content passes through untouched.
#[test]
fn unicode_content() {
    let lexer = lex_first("\"caf\u{00E9} \u{2615}\"");
    assert_eq!(lexer.kind(), GraphQLTokenKind::String);
    assert_eq!(lexer.value_as_str(), Some("caf\u{00E9} \u{2615}"));
}

/// Verifies that two consecutive string literals produce two tokens.
#[test]
fn consecutive_strings() {
    let mut lexer = Utf8GraphQLLexer::from_str("\"a\" \"b\"").expect("source is non-empty");
    assert!(lexer.advance().expect("first string lexes"));
    assert_eq!(lexer.value(), b"a");
    assert!(lexer.advance().expect("second string lexes"));
    assert_eq!(lexer.value(), b"b");
}

// =============================================================================
// Errors
// =============================================================================

/// Verifies that an invalid escape character is rejected.
#[test]
fn invalid_escape_is_rejected() {
    let mut lexer = Utf8GraphQLLexer::from_str(r#""\q""#).expect("source is non-empty");
    let error = lexer.advance().expect_err("bad escape must fail");
    assert_eq!(
        error.kind(),
        GraphQLSyntaxErrorKind::InvalidEscapeSequence { found: b'q' }
    );
    // Pinned at the byte following the backslash.
    assert_eq!(error.line(), 1);
    assert_eq!(error.column(), 3);
}

/// Verifies that a control character inside a string is rejected.
#[test]
fn control_character_is_rejected() {
    let mut lexer = Utf8GraphQLLexer::from_str("\"a\u{0001}b\"").expect("source is non-empty");
    let error = lexer.advance().expect_err("control byte must fail");
    assert_eq!(
        error.kind(),
        GraphQLSyntaxErrorKind::InvalidCharacterInString { found: 0x01 }
    );
}

/// Verifies that a raw line feed terminates the literal as unterminated:
/// the closing quote can never appear on the opening line.
#[test]
fn raw_line_feed_is_unterminated() {
    let mut lexer = Utf8GraphQLLexer::from_str("\"ab\ncd\"").expect("source is non-empty");
    let error = lexer.advance().expect_err("newline must fail");
    assert_eq!(error.kind(), GraphQLSyntaxErrorKind::UnterminatedString);
    assert_eq!(error.line(), 1);
    assert_eq!(error.column(), 4);
}

/// Verifies that a raw carriage return is treated the same way.
#[test]
fn raw_carriage_return_is_unterminated() {
    let mut lexer = Utf8GraphQLLexer::from_str("\"ab\rcd\"").expect("source is non-empty");
    let error = lexer.advance().expect_err("carriage return must fail");
    assert_eq!(error.kind(), GraphQLSyntaxErrorKind::UnterminatedString);
}

/// Verifies that reaching end of input without a closing quote is
/// rejected, with a help note pointing at the fix.
#[test]
fn unterminated_at_end_of_input() {
    let mut lexer = Utf8GraphQLLexer::from_str("\"abc").expect("source is non-empty");
    let error = lexer.advance().expect_err("unterminated must fail");
    assert_eq!(error.kind(), GraphQLSyntaxErrorKind::UnterminatedString);
    assert!(!error.notes().is_empty());
}

/// Verifies that a trailing backslash at end of input is unterminated
/// rather than an invalid escape.
#[test]
fn trailing_backslash_is_unterminated() {
    let mut lexer = Utf8GraphQLLexer::from_str("\"\\").expect("source is non-empty");
    let error = lexer.advance().expect_err("trailing backslash must fail");
    assert_eq!(error.kind(), GraphQLSyntaxErrorKind::UnterminatedString);
}
