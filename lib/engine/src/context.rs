/// Options for a single path evaluation.
///
/// The default imposes no limits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvaluationContext {
    max_depth: Option<usize>,
}

impl EvaluationContext {
    /// Creates a new [EvaluationContext] with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits how deeply sub-evaluations may nest.
    ///
    /// Each nested path operator and each step of a fixed- or bounded-length repetition counts as
    /// one level. Closures walk the graph iteratively and only count the nesting of their
    /// sub-path. Exceeding the limit fails the evaluation.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}
