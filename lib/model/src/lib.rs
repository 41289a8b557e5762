mod error;
mod term;
mod token;
pub mod vocab;

pub use error::*;
pub use term::*;
pub use token::*;

// Re-export some oxrdf types.
pub use oxiri::{Iri, IriParseError};
pub use oxrdf::{
    BlankNode, BlankNodeIdParseError, GraphName, LanguageTagParseError, Literal, NamedNode,
    NamedOrBlankNode, Quad, Term,
};
