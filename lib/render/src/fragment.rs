use std::fmt::{Display, Formatter};

/// The presentational role of a fragment. Maps onto a CSS class in HTML output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FragmentClass {
    Iri,
    BlankNode,
    Variable,
    Literal,
    Datatype,
    Language,
}

impl FragmentClass {
    pub fn css_class(self) -> &'static str {
        match self {
            FragmentClass::Iri => "rdf-iri",
            FragmentClass::BlankNode => "rdf-bnode",
            FragmentClass::Variable => "rdf-variable",
            FragmentClass::Literal => "rdf-literal",
            FragmentClass::Datatype => "rdf-datatype",
            FragmentClass::Language => "rdf-lang",
        }
    }
}

/// Where a link navigates to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavigationTarget {
    /// The full IRI of the linked resource.
    pub iri: String,
    /// The href of the exploration view for `iri`.
    pub href: String,
}

/// A rendered term, ready to be placed into a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    /// A clickable reference to a resource.
    Link {
        label: String,
        target: NavigationTarget,
    },
    Text {
        text: String,
        class: FragmentClass,
    },
    /// A small annotation such as a language tag.
    Badge {
        text: String,
        class: FragmentClass,
    },
    Group(Vec<Fragment>),
}

impl Fragment {
    /// Returns all navigation targets in this fragment, in order.
    pub fn targets(&self) -> Vec<&NavigationTarget> {
        let mut targets = Vec::new();
        self.collect_targets(&mut targets);
        targets
    }

    fn collect_targets<'a>(&'a self, targets: &mut Vec<&'a NavigationTarget>) {
        match self {
            Fragment::Link { target, .. } => targets.push(target),
            Fragment::Group(children) => {
                for child in children {
                    child.collect_targets(targets);
                }
            }
            Fragment::Text { .. } | Fragment::Badge { .. } => {}
        }
    }

    /// Writes the fragment as HTML.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    pub(crate) fn write_html(&self, html: &mut String) {
        match self {
            Fragment::Link { label, target } => {
                html.push_str("<a class=\"");
                html.push_str(FragmentClass::Iri.css_class());
                html.push_str("\" href=\"");
                escape_html(&target.href, html);
                html.push_str("\" title=\"");
                escape_html(&target.iri, html);
                html.push_str("\">");
                escape_html(label, html);
                html.push_str("</a>");
            }
            Fragment::Text { text, class } => {
                html.push_str("<span class=\"");
                html.push_str(class.css_class());
                html.push_str("\">");
                escape_html(text, html);
                html.push_str("</span>");
            }
            Fragment::Badge { text, class } => {
                html.push_str("<span class=\"badge ");
                html.push_str(class.css_class());
                html.push_str("\">");
                escape_html(text, html);
                html.push_str("</span>");
            }
            Fragment::Group(children) => {
                html.push_str("<span class=\"rdf-term\">");
                for child in children {
                    child.write_html(html);
                }
                html.push_str("</span>");
            }
        }
    }
}

impl Display for Fragment {
    /// Writes the plain text of the fragment.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Fragment::Link { label, .. } => f.write_str(label),
            Fragment::Text { text, .. } | Fragment::Badge { text, .. } => f.write_str(text),
            Fragment::Group(children) => children.iter().try_for_each(|child| child.fmt(f)),
        }
    }
}

pub(crate) fn escape_html(text: &str, html: &mut String) {
    for c in text.chars() {
        match c {
            '&' => html.push_str("&amp;"),
            '<' => html.push_str("&lt;"),
            '>' => html.push_str("&gt;"),
            '"' => html.push_str("&quot;"),
            '\'' => html.push_str("&#39;"),
            c => html.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_is_escaped() {
        let fragment = Fragment::Text {
            text: "<b>\"x\" & 'y'</b>".to_owned(),
            class: FragmentClass::Literal,
        };
        assert_eq!(
            fragment.to_html(),
            "<span class=\"rdf-literal\">&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;</span>"
        );
    }

    #[test]
    fn targets_are_collected_from_groups() {
        let target = NavigationTarget {
            iri: "http://ex.org/dt".to_owned(),
            href: "#/explore?iri=x".to_owned(),
        };
        let fragment = Fragment::Group(vec![
            Fragment::Text {
                text: "\"1\"".to_owned(),
                class: FragmentClass::Literal,
            },
            Fragment::Link {
                label: "ex:dt".to_owned(),
                target: target.clone(),
            },
        ]);
        assert_eq!(fragment.targets(), vec![&target]);
        assert_eq!(fragment.to_string(), "\"1\"ex:dt");
    }
}
