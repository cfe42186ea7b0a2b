/// Distinguishes the two lexical shapes of a GraphQL float literal.
///
/// The lexer tags every `Float` token with the format it observed. Parsers
/// and printers can use the tag to round-trip literals faithfully (e.g.
/// `1.5` stays fixed-point, `1e3` stays exponential).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLFloatFormat {
    /// A decimal point is present and no exponent follows (e.g. `1.5`,
    /// `-0.25`).
    FixedPoint,

    /// An exponent part is present, with or without a decimal point (e.g.
    /// `1e10`, `-0.5e-3`). When both parts appear, the exponent wins.
    Exponential,
}
