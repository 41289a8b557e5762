//! Parses quad documents into entities grouped by subject.
//!
//! ```
//! let entities = quadlens_nquads::parse_entities(
//!     "<http://ex.org/s> <http://ex.org/p> \"o\" <http://ex.org/g> .",
//! )?;
//! let entity = entities.get_iri("http://ex.org/s").expect("entity exists");
//! assert_eq!(entity.triples.len(), 1);
//! # Ok::<_, quadlens_nquads::ParseError>(())
//! ```

mod builder;
mod error;
mod tokenizer;

pub use builder::*;
pub use error::*;
pub use tokenizer::*;
