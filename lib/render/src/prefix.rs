use quadlens_model::vocab::WELL_KNOWN_PREFIXES;

/// Maps namespace IRIs to short prefixes (e.g. `rdf:type`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixTable {
    /// `(prefix, namespace)` pairs.
    entries: Vec<(String, String)>,
}

impl PrefixTable {
    /// Creates a table without any prefixes.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a prefix, replacing an existing prefix with the same name.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let namespace = namespace.into();
        match self.entries.iter_mut().find(|(name, _)| *name == prefix) {
            Some(entry) => entry.1 = namespace,
            None => self.entries.push((prefix, namespace)),
        }
        self
    }

    /// Abbreviates `iri` with the longest matching namespace. Returns `None` if no namespace
    /// matches.
    pub fn abbreviate(&self, iri: &str) -> Option<String> {
        self.entries
            .iter()
            .filter(|(_, namespace)| !namespace.is_empty())
            .filter_map(|(prefix, namespace)| {
                iri.strip_prefix(namespace.as_str())
                    .map(|local| (namespace.len(), prefix, local))
            })
            .max_by_key(|(len, _, _)| *len)
            .map(|(_, prefix, local)| format!("{prefix}:{local}"))
    }

    /// The label of `iri`: its abbreviation or, if no namespace matches, the IRI itself.
    pub fn label(&self, iri: &str) -> String {
        self.abbreviate(iri).unwrap_or_else(|| iri.to_owned())
    }
}

impl Default for PrefixTable {
    /// The `rdf`, `rdfs`, `xsd` and `owl` namespaces.
    fn default() -> Self {
        WELL_KNOWN_PREFIXES
            .iter()
            .fold(Self::empty(), |table, (prefix, namespace)| {
                table.with_prefix(*prefix, *namespace)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadlens_model::vocab::{owl, rdf, rdfs, xsd};

    #[test]
    fn default_table_abbreviates_well_known_namespaces() {
        let table = PrefixTable::default();
        assert_eq!(table.label(rdf::TYPE), "rdf:type");
        assert_eq!(table.label(rdfs::LABEL), "rdfs:label");
        assert_eq!(table.label(xsd::INTEGER), "xsd:integer");
        assert_eq!(
            table.label(&format!("{}sameAs", owl::NAMESPACE)),
            "owl:sameAs"
        );
    }

    #[test]
    fn unknown_namespace_keeps_iri() {
        let table = PrefixTable::default();
        assert_eq!(table.abbreviate("http://ex.org/s"), None);
        assert_eq!(table.label("http://ex.org/s"), "http://ex.org/s");
    }

    #[test]
    fn longest_namespace_wins() {
        let table = PrefixTable::empty()
            .with_prefix("ex", "http://ex.org/")
            .with_prefix("exv", "http://ex.org/vocab#");
        assert_eq!(table.label("http://ex.org/vocab#name"), "exv:name");
        assert_eq!(table.label("http://ex.org/thing"), "ex:thing");
    }

    #[test]
    fn with_prefix_replaces_existing_prefix() {
        let table = PrefixTable::default().with_prefix("rdf", "http://ex.org/rdf#");
        assert_eq!(table.entries.len(), 4);
        assert_eq!(table.label("http://ex.org/rdf#x"), "rdf:x");
        assert_eq!(table.label(rdf::TYPE), rdf::TYPE);
    }
}
