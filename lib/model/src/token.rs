use crate::TermConversionError;
use oxrdf::{BlankNode, Literal, NamedNode, Term};
use std::fmt::{Display, Formatter, Write};

/// A single RDF term as it appears in a quad document.
///
/// Tokens are produced by the tokenizer in the order they are encountered. They are kept as plain
/// strings: IRIs are not resolved or percent-decoded and no validation beyond the lexical level
/// has happened. Use [`Token::to_term`] to obtain a validated [`Term`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    /// An IRI reference (`<...>`).
    Iri(String),
    /// A blank node reference (`_:id`). Holds the id without the `_:` prefix.
    Blank(String),
    /// A quoted literal with an optional language tag or datatype.
    Literal(LiteralToken),
}

impl Token {
    /// Returns the literal if this token is a literal.
    pub fn as_literal(&self) -> Option<&LiteralToken> {
        match self {
            Token::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// A short, human-readable name of the token kind. Used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Iri(_) => "IRI",
            Token::Blank(_) => "blank node",
            Token::Literal(_) => "literal",
        }
    }

    /// Converts the token into an oxrdf [`Term`], validating IRIs, blank node ids and language
    /// tags on the way.
    pub fn to_term(&self) -> Result<Term, TermConversionError> {
        Ok(match self {
            Token::Iri(iri) => named_node(iri)?.into(),
            Token::Blank(id) => blank_node(id)?.into(),
            Token::Literal(literal) => literal.to_literal()?.into(),
        })
    }

    /// Converts an IRI token into an oxrdf [`NamedNode`].
    pub fn to_named_node(&self) -> Result<NamedNode, TermConversionError> {
        match self {
            Token::Iri(iri) => named_node(iri),
            other => Err(TermConversionError::UnexpectedKind {
                expected: "IRI",
                found: other.kind_name(),
            }),
        }
    }

    /// Converts a blank node token into an oxrdf [`BlankNode`].
    pub fn to_blank_node(&self) -> Result<BlankNode, TermConversionError> {
        match self {
            Token::Blank(id) => blank_node(id),
            other => Err(TermConversionError::UnexpectedKind {
                expected: "blank node",
                found: other.kind_name(),
            }),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Iri(iri) => write!(f, "<{iri}>"),
            Token::Blank(id) => write!(f, "_:{id}"),
            Token::Literal(literal) => literal.fmt(f),
        }
    }
}

/// The lexical parts of a quoted literal.
///
/// The language tag and the datatype are mutually exclusive in RDF. The tokenizer never produces
/// a token with both set, but hand-built tokens may, hence both are kept independently.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LiteralToken {
    /// The unescaped lexical form, without the surrounding quotes.
    pub lexical: String,
    pub language: Option<String>,
    pub datatype: Option<String>,
}

impl LiteralToken {
    pub fn simple(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            language: None,
            datatype: None,
        }
    }

    pub fn language_tagged(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            language: Some(language.into()),
            datatype: None,
        }
    }

    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            language: None,
            datatype: Some(datatype.into()),
        }
    }

    /// Converts the token into an oxrdf [`Literal`].
    pub fn to_literal(&self) -> Result<Literal, TermConversionError> {
        match (&self.language, &self.datatype) {
            (None, None) => Ok(Literal::new_simple_literal(&self.lexical)),
            (Some(language), None) => {
                Literal::new_language_tagged_literal(&self.lexical, language).map_err(|source| {
                    TermConversionError::LanguageTag {
                        tag: language.clone(),
                        source,
                    }
                })
            }
            (None, Some(datatype)) => Ok(Literal::new_typed_literal(
                &self.lexical,
                named_node(datatype)?,
            )),
            (Some(_), Some(_)) => Err(TermConversionError::LanguageAndDatatype),
        }
    }
}

impl Display for LiteralToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_char('"')?;
        for c in self.lexical.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")?;
        }
        if let Some(datatype) = &self.datatype {
            write!(f, "^^<{datatype}>")?;
        }
        Ok(())
    }
}

fn named_node(iri: &str) -> Result<NamedNode, TermConversionError> {
    NamedNode::new(iri).map_err(|source| TermConversionError::Iri {
        iri: iri.to_owned(),
        source,
    })
}

fn blank_node(id: &str) -> Result<BlankNode, TermConversionError> {
    BlankNode::new(id).map_err(|source| TermConversionError::BlankNode {
        id: id.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::xsd;

    #[test]
    fn display_uses_nquads_syntax() {
        assert_eq!(
            Token::Iri("http://ex.org/s".to_owned()).to_string(),
            "<http://ex.org/s>"
        );
        assert_eq!(Token::Blank("b0".to_owned()).to_string(), "_:b0");
        assert_eq!(
            Token::Literal(LiteralToken::language_tagged("chat", "fr")).to_string(),
            "\"chat\"@fr"
        );
        assert_eq!(
            Token::Literal(LiteralToken::simple("a\"b\\c\nd")).to_string(),
            r#""a\"b\\c\nd""#
        );
    }

    #[test]
    fn to_term_builds_oxrdf_terms() {
        let term = Token::Literal(LiteralToken::typed("42", xsd::INTEGER))
            .to_term()
            .unwrap();
        assert_eq!(
            term.to_string(),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );

        let term = Token::Blank("b1".to_owned()).to_term().unwrap();
        assert_eq!(term, Term::BlankNode(BlankNode::new_unchecked("b1")));

        let node = Token::Iri("http://ex.org/s".to_owned())
            .to_named_node()
            .unwrap();
        assert_eq!(node.as_str(), "http://ex.org/s");
    }

    #[test]
    fn to_term_rejects_invalid_input() {
        assert!(matches!(
            Token::Iri("not an iri".to_owned()).to_term(),
            Err(TermConversionError::Iri { .. })
        ));
        assert!(matches!(
            Token::Literal(LiteralToken::language_tagged("x", "not a tag!")).to_term(),
            Err(TermConversionError::LanguageTag { .. })
        ));
        assert!(matches!(
            Token::Blank("b".to_owned()).to_named_node(),
            Err(TermConversionError::UnexpectedKind {
                expected: "IRI",
                found: "blank node"
            })
        ));
        let both = LiteralToken {
            lexical: "x".to_owned(),
            language: Some("en".to_owned()),
            datatype: Some(xsd::STRING.to_owned()),
        };
        assert!(matches!(
            both.to_literal(),
            Err(TermConversionError::LanguageAndDatatype)
        ));
    }
}
