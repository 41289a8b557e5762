use crate::{
    EntityRow, EntityView, Fragment, FragmentClass, NavigationTarget, RenderConfig, RenderError,
};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use quadlens_model::{RdfTerm, Token};
use quadlens_nquads::EntityRecord;
use serde_json::Value;

/// Renders RDF terms into [`Fragment`]s.
///
/// Rendering is a pure function of the term and the configuration, so a renderer can be shared
/// freely.
#[derive(Clone, Debug, Default)]
pub struct TermRenderer {
    config: RenderConfig,
}

impl TermRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renders a typed term.
    ///
    /// - IRIs become links labelled with their abbreviation.
    /// - Blank nodes and variables become text labelled `_:id` and `?name`.
    /// - Literals become the quoted value, followed by a `^^<datatype>` link and/or an `@lang`
    ///   badge. Both annotations are rendered if both are present.
    pub fn render(&self, term: &RdfTerm) -> Fragment {
        match term {
            RdfTerm::Iri(iri) => self.render_iri(iri),
            RdfTerm::BlankNode(id) => Fragment::Text {
                text: format!("_:{id}"),
                class: FragmentClass::BlankNode,
            },
            RdfTerm::Variable(name) => Fragment::Text {
                text: format!("?{name}"),
                class: FragmentClass::Variable,
            },
            RdfTerm::Literal {
                value,
                language,
                datatype,
            } => {
                let mut parts = vec![Fragment::Text {
                    text: format!("\"{value}\""),
                    class: FragmentClass::Literal,
                }];
                if let Some(datatype) = datatype {
                    parts.push(Fragment::Text {
                        text: "^^<".to_owned(),
                        class: FragmentClass::Datatype,
                    });
                    parts.push(self.render_iri(datatype));
                    parts.push(Fragment::Text {
                        text: ">".to_owned(),
                        class: FragmentClass::Datatype,
                    });
                }
                if let Some(language) = language {
                    parts.push(Fragment::Badge {
                        text: format!("@{language}"),
                        class: FragmentClass::Language,
                    });
                }
                Fragment::Group(parts)
            }
        }
    }

    /// Renders a term of a parsed quad document.
    pub fn render_token(&self, token: &Token) -> Fragment {
        self.render(&RdfTerm::from(token.clone()))
    }

    /// Renders a JSON term object as returned by the backend.
    ///
    /// Fails if the object does not describe a known term shape.
    pub fn render_json(&self, value: &Value) -> Result<Fragment, RenderError> {
        let term = RdfTerm::try_from(value).inspect_err(|error| {
            tracing::warn!(%error, "Refusing to render unrecognized term");
        })?;
        Ok(self.render(&term))
    }

    /// Renders all triples of an entity.
    pub fn render_entity(&self, entity: &EntityRecord) -> EntityView {
        let subject = if entity.is_iri {
            self.render_iri(&entity.id)
        } else {
            self.render(&RdfTerm::BlankNode(entity.id.clone()))
        };
        EntityView {
            subject,
            graph: self.render_iri(&entity.graph),
            rows: entity
                .triples
                .iter()
                .map(|triple| EntityRow {
                    property: self.render_iri(&triple.predicate),
                    value: self.render_token(&triple.object),
                    graph: self.render_iri(&triple.graph),
                })
                .collect(),
        }
    }

    /// Renders a link to the exploration view of `iri`.
    pub fn render_iri(&self, iri: &str) -> Fragment {
        Fragment::Link {
            label: self.config.prefixes.label(iri),
            target: self.navigation_target(iri),
        }
    }

    pub fn navigation_target(&self, iri: &str) -> NavigationTarget {
        NavigationTarget {
            iri: iri.to_owned(),
            href: format!(
                "{}?iri={}",
                self.config.explore_path,
                utf8_percent_encode(iri, NON_ALPHANUMERIC)
            ),
        }
    }
}
