/// The kind of a GraphQL token.
///
/// Kinds are fieldless: the current token's payload (its raw byte slice),
/// span, and float format live on the lexer state and on
/// [`GraphQLToken`](crate::token::GraphQLToken) snapshots. Keeping the kind
/// `Copy` lets the punctuator dispatch table be built in a `const`
/// initializer.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens, not as separate
/// minus and number tokens. This matches the GraphQL spec's grammar for
/// `IntValue`/`FloatValue`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTokenKind {
    // =========================================================================
    // Sentinels
    // =========================================================================
    /// The state of a freshly constructed lexer, before the first
    /// `advance()`. Never produced by a scan.
    StartOfFile,
    /// End of input. Produced exactly once, then sticky.
    EndOfFile,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Lexemes with a payload
    // =========================================================================
    /// A GraphQL name/identifier (`/[_A-Za-z][_0-9A-Za-z]*/`).
    Name,
    /// An integer literal, including any leading `-`.
    Integer,
    /// A float literal; the lexer additionally tags it with a
    /// [`GraphQLFloatFormat`](crate::GraphQLFloatFormat).
    Float,
    /// A single-line `"`-delimited string literal. The payload excludes the
    /// enclosing quotes; escapes are validated but not decoded.
    String,
    /// A `"""`-delimited block string literal. The payload excludes both
    /// delimiters; indentation is not normalized at this layer.
    BlockString,
    /// A `#` comment. The payload has the leading `#`s, spaces, and tabs
    /// trimmed; trailing whitespace is preserved.
    Comment,
}

impl GraphQLTokenKind {
    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        match self {
            GraphQLTokenKind::Ampersand
            | GraphQLTokenKind::At
            | GraphQLTokenKind::Bang
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::Dollar
            | GraphQLTokenKind::Ellipsis
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::Pipe
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::SquareBracketOpen => true,

            GraphQLTokenKind::StartOfFile
            | GraphQLTokenKind::EndOfFile
            | GraphQLTokenKind::Name
            | GraphQLTokenKind::Integer
            | GraphQLTokenKind::Float
            | GraphQLTokenKind::String
            | GraphQLTokenKind::BlockString
            | GraphQLTokenKind::Comment => false,
        }
    }

    /// Returns a short human-readable description of this kind for
    /// diagnostics: the backticked lexeme for punctuators, a prose phrase
    /// for everything else (e.g. "a name", "an integer literal").
    pub fn description(&self) -> &'static str {
        match self {
            GraphQLTokenKind::Ampersand => "`&`",
            GraphQLTokenKind::At => "`@`",
            GraphQLTokenKind::Bang => "`!`",
            GraphQLTokenKind::Colon => "`:`",
            GraphQLTokenKind::CurlyBraceClose => "`}`",
            GraphQLTokenKind::CurlyBraceOpen => "`{`",
            GraphQLTokenKind::Dollar => "`$`",
            GraphQLTokenKind::Ellipsis => "`...`",
            GraphQLTokenKind::Equals => "`=`",
            GraphQLTokenKind::ParenClose => "`)`",
            GraphQLTokenKind::ParenOpen => "`(`",
            GraphQLTokenKind::Pipe => "`|`",
            GraphQLTokenKind::SquareBracketClose => "`]`",
            GraphQLTokenKind::SquareBracketOpen => "`[`",

            GraphQLTokenKind::StartOfFile => "start of input",
            GraphQLTokenKind::EndOfFile => "end of input",
            GraphQLTokenKind::Name => "a name",
            GraphQLTokenKind::Integer => "an integer literal",
            GraphQLTokenKind::Float => "a float literal",
            GraphQLTokenKind::String => "a string literal",
            GraphQLTokenKind::BlockString => "a block string literal",
            GraphQLTokenKind::Comment => "a comment",
        }
    }

    /// Returns the string representation of this token if it is a
    /// punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::Ampersand => Some("&"),
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::StartOfFile
            | GraphQLTokenKind::EndOfFile
            | GraphQLTokenKind::Name
            | GraphQLTokenKind::Integer
            | GraphQLTokenKind::Float
            | GraphQLTokenKind::String
            | GraphQLTokenKind::BlockString
            | GraphQLTokenKind::Comment => None,
        }
    }
}
