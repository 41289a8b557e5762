use crate::{LiteralToken, TermShapeError, Token};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// A typed RDF term as consumed by the renderer.
///
/// Terms either stem from a parsed quad document (converted from a [`Token`]) or from JSON term
/// objects returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Value")]
pub enum RdfTerm {
    Iri(String),
    /// A blank node. Holds the id without the `_:` prefix.
    BlankNode(String),
    /// A query variable. Holds the name without the `?` prefix.
    Variable(String),
    Literal {
        value: String,
        language: Option<String>,
        datatype: Option<String>,
    },
}

impl RdfTerm {
    pub fn iri(iri: impl Into<String>) -> Self {
        RdfTerm::Iri(iri.into())
    }

    pub fn simple_literal(value: impl Into<String>) -> Self {
        RdfTerm::Literal {
            value: value.into(),
            language: None,
            datatype: None,
        }
    }
}

impl From<Token> for RdfTerm {
    fn from(token: Token) -> Self {
        match token {
            Token::Iri(iri) => RdfTerm::Iri(iri),
            Token::Blank(id) => RdfTerm::BlankNode(id),
            Token::Literal(literal) => literal.into(),
        }
    }
}

impl From<LiteralToken> for RdfTerm {
    fn from(literal: LiteralToken) -> Self {
        RdfTerm::Literal {
            value: literal.lexical,
            language: literal.language,
            datatype: literal.datatype,
        }
    }
}

impl TryFrom<Value> for RdfTerm {
    type Error = TermShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        RdfTerm::try_from(&value)
    }
}

impl TryFrom<&Value> for RdfTerm {
    type Error = TermShapeError;

    /// Decodes a JSON term object such as `{"type": "uri", "value": "http://ex.org/s"}`.
    ///
    /// Accepted `type` tags are `iri`, `uri`, `bnode`, `blank`, `variable`, `literal` and
    /// `typed-literal`. Literals may carry their text in `lexical` or `value` and their language
    /// tag in `xml:lang`, `lang` or `language`.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Object(object) = value else {
            return Err(TermShapeError::NotAnObject(json_kind(value).to_owned()));
        };
        let term_type = match object.get("type") {
            None | Some(Value::Null) => return Err(TermShapeError::MissingType),
            Some(Value::String(term_type)) => term_type.as_str(),
            Some(_) => {
                return Err(TermShapeError::InvalidField {
                    kind: "term",
                    field: "type",
                })
            }
        };

        match term_type {
            "iri" | "uri" => Ok(RdfTerm::Iri(required(object, "IRI", "value")?.to_owned())),
            "bnode" | "blank" => {
                let id = required(object, "blank node", "value")?;
                Ok(RdfTerm::BlankNode(
                    id.strip_prefix("_:").unwrap_or(id).to_owned(),
                ))
            }
            "variable" => {
                let name = required(object, "variable", "value")?;
                Ok(RdfTerm::Variable(
                    name.strip_prefix('?').unwrap_or(name).to_owned(),
                ))
            }
            "literal" | "typed-literal" => {
                let value = match optional(object, "literal", "lexical")? {
                    Some(lexical) => lexical,
                    None => required(object, "literal", "value")?,
                };
                let mut language = None;
                for field in ["xml:lang", "lang", "language"] {
                    if let Some(tag) = optional(object, "literal", field)? {
                        language = Some(tag.to_owned());
                        break;
                    }
                }
                Ok(RdfTerm::Literal {
                    value: value.to_owned(),
                    language,
                    datatype: optional(object, "literal", "datatype")?.map(str::to_owned),
                })
            }
            other => Err(TermShapeError::UnknownType(other.to_owned())),
        }
    }
}

impl Serialize for RdfTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RdfTerm::Iri(iri) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "iri")?;
                map.serialize_entry("value", iri)?;
                map.end()
            }
            RdfTerm::BlankNode(id) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "bnode")?;
                map.serialize_entry("value", id)?;
                map.end()
            }
            RdfTerm::Variable(name) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "variable")?;
                map.serialize_entry("value", name)?;
                map.end()
            }
            RdfTerm::Literal {
                value,
                language,
                datatype,
            } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "literal")?;
                map.serialize_entry("value", value)?;
                if let Some(language) = language {
                    map.serialize_entry("xml:lang", language)?;
                }
                if let Some(datatype) = datatype {
                    map.serialize_entry("datatype", datatype)?;
                }
                map.end()
            }
        }
    }
}

fn required<'a>(
    object: &'a Map<String, Value>,
    kind: &'static str,
    field: &'static str,
) -> Result<&'a str, TermShapeError> {
    optional(object, kind, field)?.ok_or(TermShapeError::MissingField { kind, field })
}

/// Returns the string value of `field`. A `null` value counts as absent.
fn optional<'a>(
    object: &'a Map<String, Value>,
    kind: &'static str,
    field: &'static str,
) -> Result<Option<&'a str>, TermShapeError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(TermShapeError::InvalidField { kind, field }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
