use rdf_paths_common::error::GraphAccessError;

/// An error raised while evaluating a property path.
///
/// Errors abort the whole evaluation call. There is no partial result.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PathEvaluationError {
    /// The path uses an operator that the engines cannot evaluate. Contains the rendered path.
    #[error("Path evaluation is not implemented for {0}")]
    NotImplemented(String),
    /// Error from the underlying graph.
    #[error(transparent)]
    Graph(#[from] GraphAccessError),
    /// The evaluation nested deeper than the configured limit.
    #[error("The path evaluation exceeded the maximum depth of {limit}")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}
