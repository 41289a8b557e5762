use crate::{Location, ParseError, Spanned, Tokenizer};
use oxrdf::Quad;
use quadlens_model::{TermConversionError, Token};
use rustc_hash::FxHashMap;
use std::fmt::{Display, Formatter};

/// Parses a quad document and groups its quads by subject.
pub fn parse_entities(input: &str) -> Result<EntityMap, ParseError> {
    let mut builder = QuadSetBuilder::new();
    for token in Tokenizer::new(input).spanned()? {
        builder.push_token(token)?;
    }
    builder.finish()
}

/// Identifies an entity. IRIs and blank node ids live in separate namespaces, so that
/// `<b0>` and `_:b0` never end up in the same record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKey {
    Iri(String),
    Blank(String),
}

impl EntityKey {
    /// Returns the subject token this key was derived from.
    pub fn to_token(&self) -> Token {
        match self {
            EntityKey::Iri(iri) => Token::Iri(iri.clone()),
            EntityKey::Blank(id) => Token::Blank(id.clone()),
        }
    }
}

impl Display for EntityKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKey::Iri(iri) => f.write_str(iri),
            EntityKey::Blank(id) => write!(f, "_:{id}"),
        }
    }
}

/// All triples that share one subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRecord {
    /// The subject IRI or blank node id.
    pub id: String,
    pub is_iri: bool,
    /// The graph of the first quad that mentioned this subject.
    pub graph: String,
    /// The outgoing triples, in document order.
    pub triples: Vec<Triple>,
}

impl EntityRecord {
    pub fn key(&self) -> EntityKey {
        if self.is_iri {
            EntityKey::Iri(self.id.clone())
        } else {
            EntityKey::Blank(self.id.clone())
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triple {
    pub predicate: String,
    pub object: Token,
    pub graph: String,
    /// Position of the originating quad in the document.
    pub ordinal: usize,
}

/// A quad as a tuple of tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenQuad {
    pub subject: Token,
    pub predicate: Token,
    pub object: Token,
    pub graph: Token,
}

impl Display for TokenQuad {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} .",
            self.subject, self.predicate, self.object, self.graph
        )
    }
}

/// The entities of one quad document, keyed by subject.
///
/// The iteration order of the map is unspecified. Use [`EntityMap::sorted_keys`] for a stable
/// order or [`EntityMap::quads`] to replay the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityMap {
    entities: FxHashMap<EntityKey, EntityRecord>,
    quad_count: usize,
}

impl EntityMap {
    pub fn get(&self, key: &EntityKey) -> Option<&EntityRecord> {
        self.entities.get(key)
    }

    pub fn get_iri(&self, iri: &str) -> Option<&EntityRecord> {
        self.entities.get(&EntityKey::Iri(iri.to_owned()))
    }

    pub fn get_blank(&self, id: &str) -> Option<&EntityRecord> {
        self.entities.get(&EntityKey::Blank(id.to_owned()))
    }

    /// The number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The number of quads the map was built from.
    pub fn quad_count(&self) -> usize {
        self.quad_count
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityKey, &EntityRecord)> {
        self.entities.iter()
    }

    /// Returns the keys with IRIs first, then blank nodes, each in lexicographic order.
    pub fn sorted_keys(&self) -> Vec<&EntityKey> {
        let mut keys = self.entities.keys().collect::<Vec<_>>();
        keys.sort();
        keys
    }

    /// Flattens the entities back into quads, in the order they appeared in the document.
    pub fn quads(&self) -> Vec<TokenQuad> {
        let mut quads = self
            .entities
            .iter()
            .flat_map(|(key, entity)| {
                entity.triples.iter().map(move |triple| {
                    (
                        triple.ordinal,
                        TokenQuad {
                            subject: key.to_token(),
                            predicate: Token::Iri(triple.predicate.clone()),
                            object: triple.object.clone(),
                            graph: Token::Iri(triple.graph.clone()),
                        },
                    )
                })
            })
            .collect::<Vec<_>>();
        quads.sort_unstable_by_key(|(ordinal, _)| *ordinal);
        quads.into_iter().map(|(_, quad)| quad).collect()
    }

    /// Converts all quads into validated oxrdf quads, in document order.
    pub fn to_oxrdf_quads(&self) -> Result<Vec<Quad>, TermConversionError> {
        self.quads()
            .iter()
            .map(|quad| -> Result<Quad, TermConversionError> {
                let predicate = quad.predicate.to_named_node()?;
                let object = quad.object.to_term()?;
                let graph = quad.graph.to_named_node()?;
                Ok(match &quad.subject {
                    Token::Blank(_) => {
                        Quad::new(quad.subject.to_blank_node()?, predicate, object, graph)
                    }
                    _ => Quad::new(quad.subject.to_named_node()?, predicate, object, graph),
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a EntityMap {
    type Item = (&'a EntityKey, &'a EntityRecord);
    type IntoIter = std::collections::hash_map::Iter<'a, EntityKey, EntityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

/// Groups a flat token sequence into entities, four tokens per quad.
#[derive(Debug, Default)]
pub struct QuadSetBuilder {
    map: EntityMap,
    pending: Vec<Spanned<Token>>,
}

impl QuadSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the next token of the document. Every fourth token completes a quad.
    pub fn push_token(&mut self, token: Spanned<Token>) -> Result<(), ParseError> {
        self.pending.push(token);
        match <[Spanned<Token>; 4]>::try_from(std::mem::take(&mut self.pending)) {
            Ok([subject, predicate, object, graph]) => {
                self.push_quad(subject, predicate, object, graph)
            }
            Err(pending) => {
                self.pending = pending;
                Ok(())
            }
        }
    }

    /// Adds a complete quad.
    pub fn push_quad(
        &mut self,
        subject: Spanned<Token>,
        predicate: Spanned<Token>,
        object: Spanned<Token>,
        graph: Spanned<Token>,
    ) -> Result<(), ParseError> {
        let key = match subject.value {
            Token::Iri(iri) => EntityKey::Iri(iri),
            Token::Blank(id) => EntityKey::Blank(id),
            Token::Literal(_) => {
                return Err(ParseError::InvalidSubject {
                    found: "literal",
                    location: subject.location,
                })
            }
        };
        let predicate = expect_iri(predicate, |found, location| {
            ParseError::InvalidPredicate { found, location }
        })?;
        let graph = expect_iri(graph, |found, location| ParseError::InvalidGraph {
            found,
            location,
        })?;

        let entity = self.map.entities.entry(key).or_insert_with_key(|key| {
            let (id, is_iri) = match key {
                EntityKey::Iri(iri) => (iri.clone(), true),
                EntityKey::Blank(id) => (id.clone(), false),
            };
            EntityRecord {
                id,
                is_iri,
                graph: graph.clone(),
                triples: Vec::new(),
            }
        });
        entity.triples.push(Triple {
            predicate,
            object: object.value,
            graph,
            ordinal: self.map.quad_count,
        });
        self.map.quad_count += 1;
        Ok(())
    }

    /// Returns the entity map. Fails if the tokens pushed so far do not end on a quad boundary.
    pub fn finish(self) -> Result<EntityMap, ParseError> {
        if let Some(first) = self.pending.first() {
            return Err(ParseError::TruncatedQuad {
                remaining: self.pending.len(),
                location: first.location,
            });
        }
        tracing::debug!(
            quads = self.map.quad_count,
            entities = self.map.len(),
            "Built entity map"
        );
        Ok(self.map)
    }
}

fn expect_iri(
    token: Spanned<Token>,
    error: impl FnOnce(&'static str, Location) -> ParseError,
) -> Result<String, ParseError> {
    match token.value {
        Token::Iri(iri) => Ok(iri),
        other => Err(error(other.kind_name(), token.location)),
    }
}
