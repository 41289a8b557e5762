use quadlens_model::TermShapeError;

/// An error raised while rendering a term.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RenderError {
    /// The input does not describe any known term shape.
    #[error("Unrecognized term: {0}")]
    UnrecognizedTerm(#[from] TermShapeError),
}
