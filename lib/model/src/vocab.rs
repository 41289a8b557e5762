//! Namespaces of the well-known vocabularies the console abbreviates.

pub mod rdf {
    //! [RDF](https://www.w3.org/TR/rdf11-concepts/) vocabulary.
    pub const PREFIX: &str = "rdf";
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

pub mod rdfs {
    //! [RDFS](https://www.w3.org/TR/rdf-schema/) vocabulary.
    pub const PREFIX: &str = "rdfs";
    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

pub mod xsd {
    //! [XML Schema](https://www.w3.org/TR/xmlschema11-2/) datatypes.
    pub const PREFIX: &str = "xsd";
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
}

pub mod owl {
    //! [OWL](https://www.w3.org/TR/owl2-overview/) vocabulary.
    pub const PREFIX: &str = "owl";
    pub const NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";
}

/// The `(prefix, namespace)` pairs abbreviated by default.
pub const WELL_KNOWN_PREFIXES: [(&str, &str); 4] = [
    (rdf::PREFIX, rdf::NAMESPACE),
    (rdfs::PREFIX, rdfs::NAMESPACE),
    (xsd::PREFIX, xsd::NAMESPACE),
    (owl::PREFIX, owl::NAMESPACE),
];
