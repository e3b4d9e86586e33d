use std::error::Error;
use std::io;

/// An error raised by a [TripleSource](crate::TripleSource) while answering a lookup.
///
/// The evaluation engines never retry. A single failed lookup aborts the evaluation call that
/// issued it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GraphAccessError {
    /// Error from the OS I/O layer.
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Other(#[source] Box<dyn Error + Send + Sync + 'static>),
}

impl GraphAccessError {
    /// Wraps an arbitrary error of the underlying graph.
    #[inline]
    pub fn other(error: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        Self::Other(error.into())
    }
}

impl From<GraphAccessError> for io::Error {
    #[inline]
    fn from(error: GraphAccessError) -> Self {
        match error {
            GraphAccessError::Io(error) => error,
            GraphAccessError::Other(error) => Self::other(error),
        }
    }
}
