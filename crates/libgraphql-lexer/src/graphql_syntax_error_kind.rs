/// Categorizes syntax errors for programmatic handling.
///
/// Each variant contains the minimal data needed for programmatic
/// decisions. Human-readable context (the offending byte rendered as a
/// character, suggestions, spec links) belongs in the `message` and
/// `notes` fields of `GraphQLSyntaxError`.
///
/// The `#[error(...)]` messages are concise/programmatic. Full
/// human-readable messages are in `GraphQLSyntaxError::message`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphQLSyntaxErrorKind {
    /// A byte that cannot begin any token was encountered.
    ///
    /// # Example
    /// ```text
    /// { field ? }
    ///         ^ unexpected character
    /// ```
    #[error("unexpected character (byte 0x{found:02X})")]
    UnexpectedCharacter {
        /// The offending byte.
        found: u8,
    },

    /// A `.` that does not begin a full `...` spread operator.
    ///
    /// # Example
    /// ```text
    /// { ..fragmentName }
    ///   ^ expected `...`
    /// ```
    #[error("invalid spread token")]
    InvalidSpreadToken,

    /// A numeric literal whose integer part starts with `0` followed by
    /// another digit (e.g. `00`, `09`).
    #[error("invalid number: leading zero")]
    InvalidNumberLeadingZero,

    /// A required digit run is absent (after `-`, after the decimal point,
    /// or after the exponent marker).
    ///
    /// # Example
    /// ```text
    /// { field(arg: 1.) }
    ///                ^ expected a digit
    /// ```
    #[error("invalid number: expected digit")]
    InvalidNumberExpectedDigit,

    /// A backslash inside a string literal is not followed by a valid
    /// escape character (`"` `\` `/` `b` `f` `n` `r` `t` `u`).
    #[error("invalid escape sequence (byte 0x{found:02X})")]
    InvalidEscapeSequence {
        /// The byte that followed the backslash.
        found: u8,
    },

    /// A control character appeared inside a string or block string
    /// literal.
    #[error("invalid character in string (byte 0x{found:02X})")]
    InvalidCharacterInString {
        /// The offending byte.
        found: u8,
    },

    /// A string or block string literal was never closed.
    #[error("unterminated string")]
    UnterminatedString,

    /// The lexer was constructed over an empty buffer.
    #[error("empty input")]
    EmptyInput,

    /// A caller-supplied argument was outside its valid range (e.g.
    /// `set_new_lines(0)`).
    #[error("argument out of range")]
    ArgumentOutOfRange,
}
