//! Precomputed byte-classification tables for the scanner.
//!
//! A single 256-entry flag table classifies every possible byte into the
//! categories the scanner branches on; a second table maps single-byte
//! punctuators to their token kind. Both tables are built at compile time,
//! are immutable, and are shared process-wide, so classification is one
//! indexed load per byte.

use crate::token::GraphQLTokenKind;

// =============================================================================
// Byte constants fixed by the lexical grammar
// =============================================================================

pub(crate) const HASH: u8 = b'#';
pub(crate) const QUOTE: u8 = b'"';
pub(crate) const BACKSLASH: u8 = b'\\';
pub(crate) const DOT: u8 = b'.';
pub(crate) const MINUS: u8 = b'-';
pub(crate) const PLUS: u8 = b'+';
pub(crate) const ZERO: u8 = b'0';
pub(crate) const LOWERCASE_E: u8 = b'e';
pub(crate) const UPPERCASE_E: u8 = b'E';
pub(crate) const SPACE: u8 = b' ';
pub(crate) const TAB: u8 = b'\t';
pub(crate) const COMMA: u8 = b',';
pub(crate) const NEW_LINE: u8 = b'\n';
pub(crate) const RETURN: u8 = b'\r';
pub(crate) const DELETE: u8 = 0x7F;

/// The UTF-8 byte order mark, ignored at offset 0.
pub(crate) const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// The leading bytes of a UTF-16 (big endian) byte order mark, ignored at
/// offset 0.
pub(crate) const UTF16_BOM: [u8; 2] = [0xFE, 0xFF];

// =============================================================================
// Classification flags, one bit per byte class
// =============================================================================

const PUNCTUATOR: u8 = 0b0000_0001;
const DIGIT: u8 = 0b0000_0010;
const LETTER_OR_UNDERSCORE: u8 = 0b0000_0100;
const LETTER_OR_DIGIT_OR_UNDERSCORE: u8 = 0b0000_1000;
const ESCAPE: u8 = 0b0001_0000;
const CONTROL: u8 = 0b0010_0000;
const CONTROL_NO_NEW_LINE: u8 = 0b0100_0000;

/// Pre-computed classification table: `CLASS_TABLE[b]` holds the flag bits
/// of byte `b`.
const CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let byte = i as u8;
        let mut flags = 0u8;

        if matches!(
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
        ) {
            flags |= PUNCTUATOR;
        }

        if byte.is_ascii_digit() {
            flags |= DIGIT | LETTER_OR_DIGIT_OR_UNDERSCORE;
        }

        if matches!(byte, b'A'..=b'Z' | b'a'..=b'z' | b'_') {
            flags |= LETTER_OR_UNDERSCORE | LETTER_OR_DIGIT_OR_UNDERSCORE;
        }

        if matches!(
            byte,
            b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' | b'u'
        ) {
            flags |= ESCAPE;
        }

        // Control characters: everything below 0x20 except horizontal tab,
        // plus DEL. Line terminators are excluded from the "no new line"
        // variant used inside block strings.
        if (byte < 0x20 && byte != TAB) || byte == DELETE {
            flags |= CONTROL;
            if byte != NEW_LINE && byte != RETURN {
                flags |= CONTROL_NO_NEW_LINE;
            }
        }

        table[i] = flags;
        i += 1;
    }
    table
};

/// Maps each single-byte punctuator to its token kind.
///
/// `.` stays `None`: it resolves through the spread recognizer, which needs
/// the three-dot lookahead.
const PUNCTUATOR_KIND_TABLE: [Option<GraphQLTokenKind>; 256] = {
    let mut table: [Option<GraphQLTokenKind>; 256] = [None; 256];
    table[b'!' as usize] = Some(GraphQLTokenKind::Bang);
    table[b'$' as usize] = Some(GraphQLTokenKind::Dollar);
    table[b'&' as usize] = Some(GraphQLTokenKind::Ampersand);
    table[b'(' as usize] = Some(GraphQLTokenKind::ParenOpen);
    table[b')' as usize] = Some(GraphQLTokenKind::ParenClose);
    table[b':' as usize] = Some(GraphQLTokenKind::Colon);
    table[b'=' as usize] = Some(GraphQLTokenKind::Equals);
    table[b'@' as usize] = Some(GraphQLTokenKind::At);
    table[b'[' as usize] = Some(GraphQLTokenKind::SquareBracketOpen);
    table[b']' as usize] = Some(GraphQLTokenKind::SquareBracketClose);
    table[b'{' as usize] = Some(GraphQLTokenKind::CurlyBraceOpen);
    table[b'|' as usize] = Some(GraphQLTokenKind::Pipe);
    table[b'}' as usize] = Some(GraphQLTokenKind::CurlyBraceClose);
    table
};

// =============================================================================
// Predicates
// =============================================================================

#[inline]
const fn class_of(byte: u8) -> u8 {
    CLASS_TABLE[byte as usize]
}

/// Returns `true` for the punctuator bytes `! $ & ( ) . : = @ [ ] { | }`.
#[inline]
pub(crate) const fn is_punctuator(byte: u8) -> bool {
    class_of(byte) & PUNCTUATOR != 0
}

/// Returns `true` for `0-9`.
#[inline]
pub(crate) const fn is_digit(byte: u8) -> bool {
    class_of(byte) & DIGIT != 0
}

/// Returns `true` for `0-9` and `-` (the bytes that can start a numeric
/// literal).
#[inline]
pub(crate) const fn is_digit_or_minus(byte: u8) -> bool {
    is_digit(byte) || byte == MINUS
}

/// Returns `true` for `A-Z a-z _` (the bytes that can start a name).
#[inline]
pub(crate) const fn is_letter_or_underscore(byte: u8) -> bool {
    class_of(byte) & LETTER_OR_UNDERSCORE != 0
}

/// Returns `true` for `A-Z a-z 0-9 _` (the bytes that can continue a name).
#[inline]
pub(crate) const fn is_letter_or_digit_or_underscore(byte: u8) -> bool {
    class_of(byte) & LETTER_OR_DIGIT_OR_UNDERSCORE != 0
}

/// Returns `true` for the bytes that may follow a backslash in a string
/// literal: `" \ / b f n r t u`.
#[inline]
pub(crate) const fn is_escape_character(byte: u8) -> bool {
    class_of(byte) & ESCAPE != 0
}

/// Returns `true` for control characters: bytes below 0x20 excluding
/// horizontal tab, plus DEL (0x7F).
#[inline]
pub(crate) const fn is_control_character(byte: u8) -> bool {
    class_of(byte) & CONTROL != 0
}

/// Like [`is_control_character`], but additionally excludes `LF` and `CR`.
/// Used inside block strings, where line terminators are legal content.
#[inline]
pub(crate) const fn is_control_character_no_new_line(byte: u8) -> bool {
    class_of(byte) & CONTROL_NO_NEW_LINE != 0
}

/// Returns the token kind of a single-byte punctuator, or `None` for every
/// other byte (including `.`, which the spread recognizer owns).
#[inline]
pub(crate) const fn punctuator_kind(byte: u8) -> Option<GraphQLTokenKind> {
    PUNCTUATOR_KIND_TABLE[byte as usize]
}
