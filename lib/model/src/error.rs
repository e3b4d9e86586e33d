use thiserror::Error;

/// An error raised while constructing a [PropertyPath](crate::PropertyPath).
///
/// The evaluation engines rely on these checks. A path that was built successfully never has
/// contradicting repetition bounds or an empty negated property set.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidPathError {
    /// The upper bound of a repetition is smaller than its lower bound.
    #[error("Invalid repetition bounds: the maximum {max} is smaller than the minimum {min}")]
    InvalidRepetitionBounds {
        /// The lower bound.
        min: u64,
        /// The upper bound.
        max: u64,
    },
    /// A negated property set must exclude at least one property.
    #[error("The negated property set must not be empty")]
    EmptyNegatedPropertySet,
}
