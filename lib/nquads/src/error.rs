use std::fmt::{Display, Formatter};
use thiserror::Error;

/// A position in the source document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    /// Byte offset from the start of the document.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Location {
    pub const START: Location = Location {
        offset: 0,
        line: 1,
        column: 1,
    };
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A lexical error that aborts tokenizing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind} at {location}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub location: Location,
}

impl SyntaxError {
    pub(crate) fn new(kind: SyntaxErrorKind, location: Location) -> Self {
        Self { kind, location }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyntaxErrorKind {
    #[error("Unterminated IRI, expected '>'")]
    UnterminatedIri,
    #[error("Unterminated literal, expected '\"'")]
    UnterminatedLiteral,
    #[error("Expected a language tag after '@'")]
    UnterminatedLanguageTag,
    #[error("Expected an IRI after '^^'")]
    DatatypeWithoutIri,
    #[error("A literal cannot have both a language tag and a datatype")]
    LanguageAndDatatype,
    #[error("Expected a blank node identifier after '_:'")]
    EmptyBlankNode,
    #[error("Invalid escape sequence {0}")]
    InvalidEscape(String),
}

/// An error raised while turning a quad document into entities.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The number of terms is not a multiple of four. The location points to the first term of
    /// the incomplete quad.
    #[error("Truncated quad at {location}: {remaining} trailing term(s) do not form a complete quad")]
    TruncatedQuad { remaining: usize, location: Location },
    #[error("Invalid subject at {location}: a {found} cannot be the subject of a quad")]
    InvalidSubject {
        found: &'static str,
        location: Location,
    },
    #[error("Invalid predicate at {location}: expected an IRI, found a {found}")]
    InvalidPredicate {
        found: &'static str,
        location: Location,
    },
    #[error("Invalid graph name at {location}: expected an IRI, found a {found}")]
    InvalidGraph {
        found: &'static str,
        location: Location,
    },
}

impl ParseError {
    /// The location of the term that caused the error.
    pub fn location(&self) -> Location {
        match self {
            ParseError::Syntax(error) => error.location,
            ParseError::TruncatedQuad { location, .. }
            | ParseError::InvalidSubject { location, .. }
            | ParseError::InvalidPredicate { location, .. }
            | ParseError::InvalidGraph { location, .. } => *location,
        }
    }
}
