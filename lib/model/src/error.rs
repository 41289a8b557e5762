use oxiri::IriParseError;
use oxrdf::{BlankNodeIdParseError, LanguageTagParseError};
use thiserror::Error;

/// An error raised when a dynamically shaped term object does not describe any known RDF term.
///
/// The backend hands out terms as JSON objects tagged with a `type` field. Anything that is not
/// one of the known shapes is reported instead of being rendered as an empty term, as that would
/// hide contract violations of the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TermShapeError {
    #[error("A term must be a JSON object, found {0}")]
    NotAnObject(String),
    #[error("The term object has no \"type\" field")]
    MissingType,
    #[error("Unknown term type \"{0}\"")]
    UnknownType(String),
    #[error("The {kind} term has no \"{field}\" field")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
    #[error("The \"{field}\" field of the {kind} term must be a string")]
    InvalidField {
        kind: &'static str,
        field: &'static str,
    },
}

/// An error raised when a parsed token cannot be represented as an oxrdf term.
#[derive(Debug, Error)]
pub enum TermConversionError {
    #[error("Invalid IRI <{iri}>: {source}")]
    Iri {
        iri: String,
        #[source]
        source: IriParseError,
    },
    #[error("Invalid blank node identifier _:{id}: {source}")]
    BlankNode {
        id: String,
        #[source]
        source: BlankNodeIdParseError,
    },
    #[error("Invalid language tag @{tag}: {source}")]
    LanguageTag {
        tag: String,
        #[source]
        source: LanguageTagParseError,
    },
    #[error("A literal cannot carry both a language tag and a datatype")]
    LanguageAndDatatype,
    #[error("Expected a {expected}, found a {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },
}
