//! GraphQL source fixtures for the lexing benchmarks.

/// A minimal selection set.
pub const SIMPLE_QUERY: &str = "{ hero { name } }";

/// An operation exercising variables, arguments, directives, fragments,
/// and literals.
pub const COMPLEX_QUERY: &str = r#"
query HeroComparison($first: Int = 3, $includeFriends: Boolean!) {
  leftComparison: hero(episode: EMPIRE) {
    ...comparisonFields @include(if: $includeFriends)
  }
  rightComparison: hero(episode: JEDI) {
    ...comparisonFields
  }
}

fragment comparisonFields on Character {
  name
  friendsConnection(first: $first) {
    totalCount
    edges {
      node {
        name
      }
    }
  }
}
"#;

/// A schema document with descriptions, making heavy use of block strings
/// and comments.
pub const SMALL_SCHEMA: &str = r#"
# The root query type.
type Query {
  """
  Fetches a hero of the saga.

  Defaults to the hero of the whole saga when no episode is given.
  """
  hero(episode: Episode): Character
  reviews(episode: Episode!, first: Int = 10, after: String): ReviewConnection
}

"""One of the films in the saga."""
enum Episode {
  NEWHOPE
  EMPIRE
  JEDI
}

interface Character {
  id: ID!
  name: String!
  friends(first: Int, after: String): [Character]
  appearsIn: [Episode]!
}

type Review {
  episode: Episode
  stars: Int!
  commentary: String
}

input ReviewInput {
  stars: Int! = 5
  commentary: String = "No commentary provided"
  ratio: Float = 0.5
}
"#;

/// A document dominated by numeric and string literals.
pub const LITERAL_HEAVY: &str = r#"
{
  a(w: 0, x: -42, y: 1.5, z: -0.5e-3)
  b(w: 1e50, x: 2.25E+6, y: 9876543210)
  c(s: "plain", t: "with \"escapes\" and \t tabs", u: "café")
  d(v: """
    A block string,
    spanning several lines.
  """)
}
"#;
