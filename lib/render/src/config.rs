use crate::PrefixTable;

/// The default path of the entity exploration view.
pub const DEFAULT_EXPLORE_PATH: &str = "#/explore";

/// Holds the configuration of a [`TermRenderer`](crate::TermRenderer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Namespaces abbreviated in IRI labels.
    pub prefixes: PrefixTable,
    /// The view that links navigate to. The full IRI is appended as the `iri` query parameter.
    pub explore_path: String,
}

impl RenderConfig {
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.prefixes = self.prefixes.with_prefix(prefix, namespace);
        self
    }

    #[must_use]
    pub fn with_explore_path(mut self, explore_path: impl Into<String>) -> Self {
        self.explore_path = explore_path.into();
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            prefixes: PrefixTable::default(),
            explore_path: DEFAULT_EXPLORE_PATH.to_owned(),
        }
    }
}
