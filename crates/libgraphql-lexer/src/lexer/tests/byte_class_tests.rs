//! Tests for the byte-classification tables: every predicate is checked
//! against a straightforward reference definition over all 256 bytes.

use crate::lexer::byte_class;
use crate::token::GraphQLTokenKind;

/// Verifies `is_punctuator` over the full byte range.
#[test]
fn punctuator_class() {
    for byte in 0..=255u8 {
        let expected = matches!(
            byte,
            b'!' | b'$'
                | b'&'
                | b'('
                | b')'
                | b'.'
                | b':'
                | b'='
                | b'@'
                | b'['
                | b']'
                | b'{'
                | b'|'
                | b'}'
        );
        assert_eq!(
            byte_class::is_punctuator(byte),
            expected,
            "byte 0x{byte:02X}"
        );
    }
}

/// Verifies `is_digit` and `is_digit_or_minus` over the full byte range.
#[test]
fn digit_classes() {
    for byte in 0..=255u8 {
        assert_eq!(
            byte_class::is_digit(byte),
            byte.is_ascii_digit(),
            "byte 0x{byte:02X}"
        );
        assert_eq!(
            byte_class::is_digit_or_minus(byte),
            byte.is_ascii_digit() || byte == b'-',
            "byte 0x{byte:02X}"
        );
    }
}

/// Verifies the name-start and name-continue classes over the full byte
/// range.
#[test]
fn name_classes() {
    for byte in 0..=255u8 {
        let starts = byte == b'_' || byte.is_ascii_alphabetic();
        let continues = starts || byte.is_ascii_digit();
        assert_eq!(
            byte_class::is_letter_or_underscore(byte),
            starts,
            "byte 0x{byte:02X}"
        );
        assert_eq!(
            byte_class::is_letter_or_digit_or_underscore(byte),
            continues,
            "byte 0x{byte:02X}"
        );
    }
}

/// Verifies `is_escape_character` admits exactly `" \ / b f n r t u`.
#[test]
fn escape_class() {
    for byte in 0..=255u8 {
        let expected = matches!(
            byte,
            b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' | b'u'
        );
        assert_eq!(
            byte_class::is_escape_character(byte),
            expected,
            "byte 0x{byte:02X}"
        );
    }
}

/// Verifies the control classes: below 0x20 excluding tab, plus DEL; the
/// "no new line" variant additionally excludes `LF` and `CR`.
#[test]
fn control_classes() {
    for byte in 0..=255u8 {
        let control = (byte < 0x20 && byte != b'\t') || byte == 0x7F;
        let control_no_new_line = control && byte != b'\n' && byte != b'\r';
        assert_eq!(
            byte_class::is_control_character(byte),
            control,
            "byte 0x{byte:02X}"
        );
        assert_eq!(
            byte_class::is_control_character_no_new_line(byte),
            control_no_new_line,
            "byte 0x{byte:02X}"
        );
    }
}

/// Verifies the punctuator-kind table: every single-byte punctuator maps
/// to its kind, `.` resolves through the spread recognizer instead, and
/// all other bytes map to nothing.
#[test]
fn punctuator_kind_table() {
    let expected = [
        (b'!', GraphQLTokenKind::Bang),
        (b'$', GraphQLTokenKind::Dollar),
        (b'&', GraphQLTokenKind::Ampersand),
        (b'(', GraphQLTokenKind::ParenOpen),
        (b')', GraphQLTokenKind::ParenClose),
        (b':', GraphQLTokenKind::Colon),
        (b'=', GraphQLTokenKind::Equals),
        (b'@', GraphQLTokenKind::At),
        (b'[', GraphQLTokenKind::SquareBracketOpen),
        (b']', GraphQLTokenKind::SquareBracketClose),
        (b'{', GraphQLTokenKind::CurlyBraceOpen),
        (b'|', GraphQLTokenKind::Pipe),
        (b'}', GraphQLTokenKind::CurlyBraceClose),
    ];
    for (byte, kind) in expected {
        assert_eq!(byte_class::punctuator_kind(byte), Some(kind));
    }
    assert_eq!(byte_class::punctuator_kind(b'.'), None);

    let mapped: Vec<u8> = (0..=255u8)
        .filter(|&byte| byte_class::punctuator_kind(byte).is_some())
        .collect();
    assert_eq!(mapped.len(), expected.len());
}
