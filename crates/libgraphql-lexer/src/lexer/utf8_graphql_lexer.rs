//! A single-pass, allocation-free lexer over a UTF-8 byte buffer.
//!
//! The lexer is a byte cursor: each call to [`Utf8GraphQLLexer::advance`]
//! skips insignificant bytes (whitespace, commas, line terminators, the
//! offset-0 BOM), then dispatches on the first significant byte through the
//! precomputed classification tables to one of the per-token recognizers.
//! The recognizer writes the new token's kind, span, and value slice into
//! the lexer state; token values are sub-slices of the source buffer and
//! are never copied.
//!
//! # Position tracking
//!
//! `line` and `column` are 1-indexed and always describe the *current
//! token's start*, not the cursor. Line terminators inside a block string
//! are counted during the scan but only applied to `line` on the next
//! skip phase, so the block string token itself still reports its starting
//! line (see `pending_new_lines`).

use crate::lexer::byte_class;
use crate::smallvec;
use crate::token::GraphQLTokenKind;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLFloatFormat;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;

const INT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/September2025/#sec-Int-Value";
const FLOAT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/September2025/#sec-Float-Value";
const STRING_VALUE_SPEC_URL: &str = "https://spec.graphql.org/September2025/#sec-String-Value";

/// A lexer that scans GraphQL tokens from a UTF-8 encoded byte buffer.
///
/// The lexer holds the state of the most recently produced token; the
/// `'src` lifetime ties the borrowed `value` slice to the source buffer.
/// It advances monotonically and is neither restartable nor seekable.
///
/// See the module documentation for details.
#[derive(Debug)]
pub struct Utf8GraphQLLexer<'src> {
    /// The full source buffer being lexed (read-only).
    data: &'src [u8],

    /// `data` length in bytes.
    length: usize,

    /// Cursor: byte index of the next byte to inspect.
    position: usize,

    /// Kind of the current (most recently produced) token.
    kind: GraphQLTokenKind,

    /// Byte index of the current token's first byte.
    start: usize,

    /// Byte index one past the current token's last byte.
    ///
    /// Block strings are the one exception: their `end` sits on the last
    /// byte of the closing `"""` delimiter.
    end: usize,

    /// The current token's payload: a sub-slice of `data`. Empty for
    /// punctuators and the end-of-file sentinel.
    value: &'src [u8],

    /// The observed float format; `Some` only while `kind` is `Float`.
    float_format: Option<GraphQLFloatFormat>,

    /// 1-indexed line number of the current token's start.
    line: usize,

    /// Byte index of the first byte of the current line.
    line_start: usize,

    /// 1-indexed column of the current token's start
    /// (`1 + start - line_start`).
    column: usize,

    /// Line terminators counted inside the most recently scanned block
    /// string, applied to `line` on the next skip phase.
    pending_new_lines: usize,
}

impl<'src> Utf8GraphQLLexer<'src> {
    /// Creates a new lexer over a non-empty byte buffer.
    ///
    /// # Errors
    ///
    /// Returns an [`EmptyInput`](GraphQLSyntaxErrorKind::EmptyInput) error
    /// if `data` is empty.
    pub fn new(data: &'src [u8]) -> Result<Self, GraphQLSyntaxError> {
        if data.is_empty() {
            return Err(GraphQLSyntaxError::new(
                "The source buffer must not be empty",
                GraphQLSyntaxErrorKind::EmptyInput,
                1,
                1,
            ));
        }
        Ok(Self {
            data,
            length: data.len(),
            position: 0,
            kind: GraphQLTokenKind::StartOfFile,
            start: 0,
            end: 0,
            value: &[],
            float_format: None,
            line: 1,
            line_start: 0,
            column: 1,
            pending_new_lines: 0,
        })
    }

    /// Creates a new lexer over the bytes of a string slice.
    pub fn from_str(source: &'src str) -> Result<Self, GraphQLSyntaxError> {
        Self::new(source.as_bytes())
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Returns the kind of the current token.
    pub fn kind(&self) -> GraphQLTokenKind {
        self.kind
    }

    /// Returns the byte index of the current token's first byte.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the byte index one past the current token's last byte (for
    /// block strings: the index of the last delimiter byte).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the cursor: the byte index of the next byte to inspect.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the 1-indexed line number of the current token's start.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-indexed column of the current token's start.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the byte index of the first byte of the current line.
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    /// Returns the current token's payload as a byte slice borrowed from
    /// the source buffer. Empty for punctuators and the end-of-file
    /// sentinel.
    pub fn value(&self) -> &'src [u8] {
        self.value
    }

    /// Returns the current token's payload as a UTF-8 string slice, or
    /// `None` if the payload is not valid UTF-8 on its own.
    pub fn value_as_str(&self) -> Option<&'src str> {
        std::str::from_utf8(self.value).ok()
    }

    /// Returns the observed float format of the current token; `Some` only
    /// for `Float` tokens.
    pub fn float_format(&self) -> Option<GraphQLFloatFormat> {
        self.float_format
    }

    /// Returns `true` once the cursor has consumed the entire buffer.
    pub fn is_end_of_stream(&self) -> bool {
        self.position >= self.length
    }

    // =========================================================================
    // Position maintenance for higher layers
    // =========================================================================

    /// Records one line break at the current cursor position.
    ///
    /// Public so that higher layers (e.g. a block-string post-processor
    /// that materializes the literal's lines) can keep the lexer's line
    /// accounting in sync.
    pub fn set_new_line(&mut self) {
        self.line += 1;
        self.line_start = self.position;
        self.update_column();
    }

    /// Records `count` line breaks at the current cursor position.
    ///
    /// # Errors
    ///
    /// Returns an [`ArgumentOutOfRange`](GraphQLSyntaxErrorKind::ArgumentOutOfRange)
    /// error if `count` is zero.
    pub fn set_new_lines(&mut self, count: usize) -> Result<(), GraphQLSyntaxError> {
        if count < 1 {
            return Err(GraphQLSyntaxError::new(
                "The new-line count must be at least 1",
                GraphQLSyntaxErrorKind::ArgumentOutOfRange,
                self.line,
                self.column,
            ));
        }
        self.line += count;
        self.line_start = self.position;
        self.update_column();
        Ok(())
    }

    /// Recomputes `column` from the cursor and the current line start.
    pub fn update_column(&mut self) {
        self.column = 1 + self.position - self.line_start;
    }

    // =========================================================================
    // Main loop
    // =========================================================================

    /// Advances to the next token.
    ///
    /// Returns `Ok(true)` when a real token was produced and `Ok(false)`
    /// exactly when the terminal `EndOfFile` token is produced. Once
    /// `EndOfFile` has been produced, further calls are idempotent and keep
    /// returning `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphQLSyntaxError`] carrying the offending line/column
    /// when a malformed construct is encountered. Errors are fatal to the
    /// scan; the lexer does not self-recover.
    pub fn advance(&mut self) -> Result<bool, GraphQLSyntaxError> {
        if self.kind == GraphQLTokenKind::EndOfFile {
            return Ok(false);
        }

        self.float_format = None;

        if self.position == 0 {
            self.skip_byte_order_mark();
        }
        self.skip_insignificant();
        self.update_column();

        if self.position >= self.length {
            self.kind = GraphQLTokenKind::EndOfFile;
            self.start = self.position;
            self.end = self.position;
            self.value = &[];
            return Ok(false);
        }

        let byte = self.data[self.position];
        if byte_class::is_punctuator(byte) {
            self.read_punctuator(byte)?;
        } else if byte_class::is_letter_or_underscore(byte) {
            self.read_name();
        } else if byte_class::is_digit_or_minus(byte) {
            self.read_number()?;
        } else if byte == byte_class::HASH {
            self.read_comment();
        } else if byte == byte_class::QUOTE {
            self.read_string_or_block_string()?;
        } else {
            return Err(self.error_at(
                self.position,
                format!("Unexpected character {}", describe_byte(byte)),
                GraphQLSyntaxErrorKind::UnexpectedCharacter { found: byte },
            ));
        }
        Ok(true)
    }

    /// Skips the UTF-8 BOM, or the leading two bytes of a UTF-16 (BE) BOM,
    /// when the buffer starts with one. Only ever called at offset 0.
    fn skip_byte_order_mark(&mut self) {
        if self.data.starts_with(&byte_class::UTF8_BOM) {
            self.position = byte_class::UTF8_BOM.len();
        } else if self.data.starts_with(&byte_class::UTF16_BOM) {
            self.position = byte_class::UTF16_BOM.len();
        }
    }

    /// Skips insignificant bytes: whitespace, commas, and line terminators
    /// (`CRLF` counts as one). Any line terminators pending from a block
    /// string scan are applied first, so `line` reflects the position the
    /// next token starts on.
    fn skip_insignificant(&mut self) {
        if self.pending_new_lines > 0 {
            self.line += self.pending_new_lines;
            self.line_start = self.position;
            self.pending_new_lines = 0;
        }
        while self.position < self.length {
            match self.data[self.position] {
                byte_class::SPACE | byte_class::TAB | byte_class::COMMA => {
                    self.position += 1;
                }
                byte_class::NEW_LINE => {
                    self.position += 1;
                    self.line += 1;
                    self.line_start = self.position;
                }
                byte_class::RETURN => {
                    self.position += 1;
                    if self.position < self.length
                        && self.data[self.position] == byte_class::NEW_LINE
                    {
                        self.position += 1;
                    }
                    self.line += 1;
                    self.line_start = self.position;
                }
                _ => break,
            }
        }
    }

    // =========================================================================
    // Punctuator recognizer
    // =========================================================================

    /// Reads a single-byte punctuator, or hands `.` to the spread
    /// recognizer.
    fn read_punctuator(&mut self, byte: u8) -> Result<(), GraphQLSyntaxError> {
        if byte == byte_class::DOT {
            return self.read_spread();
        }
        let Some(kind) = byte_class::punctuator_kind(byte) else {
            return Err(self.error_at(
                self.position,
                format!("Unexpected character {}", describe_byte(byte)),
                GraphQLSyntaxErrorKind::UnexpectedCharacter { found: byte },
            ));
        };
        self.kind = kind;
        self.start = self.position;
        self.end = self.position + 1;
        self.value = &[];
        self.position += 1;
        Ok(())
    }

    /// Reads the three-dot spread operator `...`.
    fn read_spread(&mut self) -> Result<(), GraphQLSyntaxError> {
        let start = self.position;
        if start + 2 >= self.length
            || self.data[start + 1] != byte_class::DOT
            || self.data[start + 2] != byte_class::DOT
        {
            return Err(self.error_with_notes(
                start,
                "Invalid token: expected the spread operator `...`",
                GraphQLSyntaxErrorKind::InvalidSpreadToken,
                smallvec![GraphQLErrorNote::help(
                    "A `.` can only appear as part of the three-dot spread \
                     operator `...`."
                )],
            ));
        }
        self.kind = GraphQLTokenKind::Ellipsis;
        self.start = start;
        self.end = start + 3;
        self.value = &[];
        self.position = start + 3;
        Ok(())
    }

    // =========================================================================
    // Name recognizer
    // =========================================================================

    /// Reads a name: `/[_A-Za-z][_0-9A-Za-z]*/`.
    fn read_name(&mut self) {
        let start = self.position;
        self.position += 1;
        while self.position < self.length
            && byte_class::is_letter_or_digit_or_underscore(self.data[self.position])
        {
            self.position += 1;
        }
        self.kind = GraphQLTokenKind::Name;
        self.start = start;
        self.end = self.position;
        self.value = &self.data[start..self.position];
    }

    // =========================================================================
    // Number recognizer
    // =========================================================================

    /// Reads an integer or float literal:
    ///
    /// ```text
    /// Number   := '-'? IntPart FracPart? ExpPart?
    /// IntPart  := '0' | [1-9] [0-9]*
    /// FracPart := '.' [0-9]+
    /// ExpPart  := ('e'|'E') ('+'|'-')? [0-9]+
    /// ```
    fn read_number(&mut self) -> Result<(), GraphQLSyntaxError> {
        let start = self.position;
        let mut kind = GraphQLTokenKind::Integer;

        if self.data[self.position] == byte_class::MINUS {
            self.position += 1;
        }

        let first_digit = self.expect_digit()?;
        if first_digit == byte_class::ZERO {
            // `0` must not be immediately followed by another digit.
            if self.position < self.length && byte_class::is_digit(self.data[self.position]) {
                return Err(self.error_with_notes(
                    self.position,
                    "Invalid number: leading zeros are not allowed",
                    GraphQLSyntaxErrorKind::InvalidNumberLeadingZero,
                    smallvec![GraphQLErrorNote::spec(INT_VALUE_SPEC_URL)],
                ));
            }
        } else {
            self.skip_digits();
        }

        if self.position < self.length && self.data[self.position] == byte_class::DOT {
            kind = GraphQLTokenKind::Float;
            self.float_format = Some(GraphQLFloatFormat::FixedPoint);
            self.position += 1;
            self.expect_digit()?;
            self.skip_digits();
        }

        if self.position < self.length
            && (self.data[self.position] == byte_class::LOWERCASE_E
                || self.data[self.position] == byte_class::UPPERCASE_E)
        {
            kind = GraphQLTokenKind::Float;
            self.float_format = Some(GraphQLFloatFormat::Exponential);
            self.position += 1;
            if self.position < self.length
                && (self.data[self.position] == byte_class::PLUS
                    || self.data[self.position] == byte_class::MINUS)
            {
                self.position += 1;
            }
            self.expect_digit()?;
            self.skip_digits();
        }

        self.kind = kind;
        self.start = start;
        self.end = self.position;
        self.value = &self.data[start..self.position];
        Ok(())
    }

    /// Consumes one required digit, or reports where it was missing.
    fn expect_digit(&mut self) -> Result<u8, GraphQLSyntaxError> {
        if self.position >= self.length || !byte_class::is_digit(self.data[self.position]) {
            return Err(self.error_with_notes(
                self.position,
                "Invalid number: expected a digit",
                GraphQLSyntaxErrorKind::InvalidNumberExpectedDigit,
                smallvec![GraphQLErrorNote::spec(FLOAT_VALUE_SPEC_URL)],
            ));
        }
        let byte = self.data[self.position];
        self.position += 1;
        Ok(byte)
    }

    /// Consumes a (possibly empty) run of digits.
    fn skip_digits(&mut self) {
        while self.position < self.length && byte_class::is_digit(self.data[self.position]) {
            self.position += 1;
        }
    }

    // =========================================================================
    // Comment recognizer
    // =========================================================================

    /// Reads a `#` comment up to (exclusive) the next line terminator or
    /// other control character.
    ///
    /// The payload trims the leading run of `#`, spaces, and tabs; once any
    /// other byte appears, trimming stops for the remainder of the comment,
    /// so trailing whitespace survives. Consecutive `#` at the start are
    /// all discarded, which keeps `##`-style banner comments clean.
    fn read_comment(&mut self) {
        let start = self.position;
        let mut value_start = self.position;
        let mut trimming = true;
        while self.position < self.length {
            let byte = self.data[self.position];
            if byte_class::is_control_character(byte) {
                break;
            }
            if trimming {
                if byte == byte_class::HASH
                    || byte == byte_class::SPACE
                    || byte == byte_class::TAB
                {
                    value_start = self.position + 1;
                } else {
                    trimming = false;
                }
            }
            self.position += 1;
        }
        self.kind = GraphQLTokenKind::Comment;
        self.start = start;
        self.end = self.position;
        self.value = &self.data[value_start..self.position];
    }

    // =========================================================================
    // String recognizers
    // =========================================================================

    /// Dispatches a leading `"` to the single-line or block string
    /// recognizer, using the three-quote lookahead.
    fn read_string_or_block_string(&mut self) -> Result<(), GraphQLSyntaxError> {
        if self.position + 2 < self.length
            && self.data[self.position + 1] == byte_class::QUOTE
            && self.data[self.position + 2] == byte_class::QUOTE
        {
            self.read_block_string()
        } else {
            self.read_string()
        }
    }

    /// Reads a single-line `"`-delimited string literal.
    ///
    /// Escape sequences are validated but not decoded; the payload is the
    /// raw inner byte slice. A raw line terminator inside the literal means
    /// the closing quote can never appear on this line, so it is reported
    /// as unterminated.
    fn read_string(&mut self) -> Result<(), GraphQLSyntaxError> {
        let start = self.position;
        let mut cursor = start + 1;
        while cursor < self.length {
            let byte = self.data[cursor];
            match byte {
                byte_class::QUOTE => {
                    self.kind = GraphQLTokenKind::String;
                    self.start = start;
                    self.end = cursor;
                    self.value = &self.data[start + 1..cursor];
                    self.position = cursor + 1;
                    return Ok(());
                }
                byte_class::NEW_LINE | byte_class::RETURN => {
                    return Err(self.error_with_notes(
                        cursor,
                        "Unterminated string literal",
                        GraphQLSyntaxErrorKind::UnterminatedString,
                        smallvec![
                            GraphQLErrorNote::general(
                                "Single-line strings cannot contain unescaped line \
                                 terminators"
                            ),
                            GraphQLErrorNote::help(
                                "Use a block string (`\"\"\"`) for multi-line content, \
                                 or escape the line break with `\\n`"
                            ),
                        ],
                    ));
                }
                byte_class::BACKSLASH => match self.data.get(cursor + 1) {
                    Some(&escaped) if byte_class::is_escape_character(escaped) => {
                        cursor += 2;
                    }
                    Some(&escaped) => {
                        return Err(self.error_with_notes(
                            cursor + 1,
                            format!(
                                "Invalid escape sequence: `\\` followed by {}",
                                describe_byte(escaped)
                            ),
                            GraphQLSyntaxErrorKind::InvalidEscapeSequence { found: escaped },
                            smallvec![GraphQLErrorNote::spec(STRING_VALUE_SPEC_URL)],
                        ));
                    }
                    None => {
                        return Err(self.unterminated_string_error(cursor + 1));
                    }
                },
                _ if byte_class::is_control_character(byte) => {
                    return Err(self.error_at(
                        cursor,
                        format!(
                            "Invalid character {} in string literal",
                            describe_byte(byte)
                        ),
                        GraphQLSyntaxErrorKind::InvalidCharacterInString { found: byte },
                    ));
                }
                _ => cursor += 1,
            }
        }
        Err(self.unterminated_string_error(self.length))
    }

    /// Reads a `"""`-delimited block string literal.
    ///
    /// Line terminators inside the literal are legal content; they are
    /// counted into `pending_new_lines` and applied to the line counter on
    /// the next skip phase, so this token still reports its starting line.
    /// `\"""` is the escaped-triple-quote sequence and does not close the
    /// block. Indentation is not normalized here.
    fn read_block_string(&mut self) -> Result<(), GraphQLSyntaxError> {
        let start = self.position;
        let mut cursor = start + 3;
        let mut new_lines = 0usize;
        while cursor < self.length {
            let byte = self.data[cursor];
            match byte {
                byte_class::QUOTE => {
                    if cursor + 2 < self.length
                        && self.data[cursor + 1] == byte_class::QUOTE
                        && self.data[cursor + 2] == byte_class::QUOTE
                    {
                        self.kind = GraphQLTokenKind::BlockString;
                        self.start = start;
                        // `end` sits on the last delimiter byte.
                        self.end = cursor + 2;
                        self.value = &self.data[start + 3..cursor];
                        self.position = cursor + 3;
                        self.pending_new_lines = new_lines;
                        return Ok(());
                    }
                    cursor += 1;
                }
                byte_class::BACKSLASH => {
                    if cursor + 3 < self.length
                        && self.data[cursor + 1] == byte_class::QUOTE
                        && self.data[cursor + 2] == byte_class::QUOTE
                        && self.data[cursor + 3] == byte_class::QUOTE
                    {
                        // Escaped `\"""`; consume all four bytes so none of
                        // its quotes can be re-read as a close.
                        cursor += 4;
                    } else {
                        cursor += 1;
                    }
                }
                byte_class::NEW_LINE => {
                    new_lines += 1;
                    cursor += 1;
                }
                byte_class::RETURN => {
                    new_lines += 1;
                    cursor += 1;
                    if cursor < self.length && self.data[cursor] == byte_class::NEW_LINE {
                        cursor += 1;
                    }
                }
                _ if byte_class::is_control_character_no_new_line(byte) => {
                    return Err(self.error_at(
                        cursor,
                        format!(
                            "Invalid character {} in string literal",
                            describe_byte(byte)
                        ),
                        GraphQLSyntaxErrorKind::InvalidCharacterInString { found: byte },
                    ));
                }
                _ => cursor += 1,
            }
        }
        Err(self.unterminated_block_string_error(start))
    }

    // =========================================================================
    // Error helpers
    // =========================================================================

    /// Builds a syntax error pinned at `position` on the current line.
    fn error_at(
        &self,
        position: usize,
        message: impl Into<String>,
        kind: GraphQLSyntaxErrorKind,
    ) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(message, kind, self.line, self.column_at(position))
    }

    /// Builds a syntax error with notes, pinned at `position` on the
    /// current line.
    fn error_with_notes(
        &self,
        position: usize,
        message: impl Into<String>,
        kind: GraphQLSyntaxErrorKind,
        notes: GraphQLErrorNotes,
    ) -> GraphQLSyntaxError {
        GraphQLSyntaxError::with_notes(message, kind, self.line, self.column_at(position), notes)
    }

    fn unterminated_string_error(&self, position: usize) -> GraphQLSyntaxError {
        self.error_with_notes(
            position,
            "Unterminated string literal",
            GraphQLSyntaxErrorKind::UnterminatedString,
            smallvec![GraphQLErrorNote::help("Add a closing `\"`")],
        )
    }

    fn unterminated_block_string_error(&self, position: usize) -> GraphQLSyntaxError {
        self.error_with_notes(
            position,
            "Unterminated block string literal",
            GraphQLSyntaxErrorKind::UnterminatedString,
            smallvec![GraphQLErrorNote::help("Add a closing `\"\"\"`")],
        )
    }

    /// 1-indexed column of `position` relative to the current line start.
    fn column_at(&self, position: usize) -> usize {
        1 + position - self.line_start
    }
}

/// Renders a byte for an error message: printable ASCII in backticks,
/// anything else as a hex code.
fn describe_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == byte_class::SPACE {
        format!("`{}`", byte as char)
    } else {
        format!("0x{byte:02X}")
    }
}
