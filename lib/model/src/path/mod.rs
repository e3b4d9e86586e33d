mod bounds;
mod display;
mod negated;
mod sparql;

pub use bounds::RepetitionBounds;
pub use negated::NegatedPropertySet;

use crate::InvalidPathError;
use oxrdf::NamedNode;

/// A property path expression.
///
/// The tree is immutable. Evaluating it never changes it, and sub-paths are owned by their parent.
///
/// The closure operators come in two flavours. [PropertyPath::ZeroOrMore] and
/// [PropertyPath::OneOrMore] never expand a node twice during one walk, while
/// [PropertyPath::ZeroOrMoreN] and [PropertyPath::OneOrMoreN] allow a node to be reached again via
/// a different branch, which is what counting paths requires.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyPath {
    /// A single step along the given property.
    Link(NamedNode),
    /// A single step against the given property. Used within negated property sets.
    ReverseLink(NamedNode),
    /// The inner path, evaluated in the opposite direction.
    Inverse(Box<Self>),
    /// The left path followed by the right path.
    Sequence(Box<Self>, Box<Self>),
    /// The union of both paths.
    Alternative(Box<Self>, Box<Self>),
    /// The inner path or no step at all.
    ZeroOrOne(Box<Self>),
    /// The reflexive transitive closure of the inner path.
    ZeroOrMore(Box<Self>),
    /// The reflexive transitive closure of the inner path, counting every distinct route.
    ZeroOrMoreN(Box<Self>),
    /// The transitive closure of the inner path.
    OneOrMore(Box<Self>),
    /// The transitive closure of the inner path, counting every distinct route.
    OneOrMoreN(Box<Self>),
    /// Exactly `n` repetitions of the inner path.
    FixedLength(Box<Self>, u64),
    /// A bounded repetition of the inner path.
    Mod(Box<Self>, RepetitionBounds),
    /// A single step along any property that is not excluded.
    NegatedPropertySet(NegatedPropertySet),
    /// Evaluates the inner path such that no node is reported twice.
    Distinct(Box<Self>),
    /// Evaluates the inner path such that every route to a node is reported.
    Multi(Box<Self>),
    /// Shortest path semantics. Not supported by the evaluation engines.
    Shortest(Box<Self>),
}

impl PropertyPath {
    pub fn link(property: impl Into<NamedNode>) -> Self {
        Self::Link(property.into())
    }

    pub fn reverse_link(property: impl Into<NamedNode>) -> Self {
        Self::ReverseLink(property.into())
    }

    pub fn inverse(inner: Self) -> Self {
        Self::Inverse(Box::new(inner))
    }

    pub fn sequence(lhs: Self, rhs: Self) -> Self {
        Self::Sequence(Box::new(lhs), Box::new(rhs))
    }

    pub fn alternative(lhs: Self, rhs: Self) -> Self {
        Self::Alternative(Box::new(lhs), Box::new(rhs))
    }

    pub fn zero_or_one(inner: Self) -> Self {
        Self::ZeroOrOne(Box::new(inner))
    }

    pub fn zero_or_more(inner: Self) -> Self {
        Self::ZeroOrMore(Box::new(inner))
    }

    pub fn zero_or_more_n(inner: Self) -> Self {
        Self::ZeroOrMoreN(Box::new(inner))
    }

    pub fn one_or_more(inner: Self) -> Self {
        Self::OneOrMore(Box::new(inner))
    }

    pub fn one_or_more_n(inner: Self) -> Self {
        Self::OneOrMoreN(Box::new(inner))
    }

    pub fn fixed_length(inner: Self, count: u64) -> Self {
        Self::FixedLength(Box::new(inner), count)
    }

    /// Creates a bounded repetition `inner{min,max}`. `None` leaves the respective bound open.
    ///
    /// Fails if both bounds are set and `max < min`.
    pub fn repeat(inner: Self, min: Option<u64>, max: Option<u64>) -> Result<Self, InvalidPathError> {
        Ok(Self::Mod(Box::new(inner), RepetitionBounds::new(min, max)?))
    }

    /// Creates a negated property set `!(forward|^backward)`.
    ///
    /// Fails if both lists are empty.
    pub fn negated(
        forward: impl IntoIterator<Item = NamedNode>,
        backward: impl IntoIterator<Item = NamedNode>,
    ) -> Result<Self, InvalidPathError> {
        Ok(Self::NegatedPropertySet(NegatedPropertySet::new(
            forward, backward,
        )?))
    }

    pub fn distinct(inner: Self) -> Self {
        Self::Distinct(Box::new(inner))
    }

    pub fn multi(inner: Self) -> Self {
        Self::Multi(Box::new(inner))
    }

    pub fn shortest(inner: Self) -> Self {
        Self::Shortest(Box::new(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> PropertyPath {
        PropertyPath::link(NamedNode::new_unchecked("http://example.com/p"))
    }

    #[test]
    fn repeat_rejects_inverted_bounds() {
        let result = PropertyPath::repeat(p(), Some(3), Some(1));
        assert_eq!(
            result,
            Err(InvalidPathError::InvalidRepetitionBounds { min: 3, max: 1 })
        );
    }

    #[test]
    fn repeat_accepts_open_bounds() {
        assert!(PropertyPath::repeat(p(), None, Some(1)).is_ok());
        assert!(PropertyPath::repeat(p(), Some(4), None).is_ok());
        assert!(PropertyPath::repeat(p(), None, None).is_ok());
    }

    #[test]
    fn negated_rejects_empty_set() {
        let result = PropertyPath::negated([], []);
        assert_eq!(result, Err(InvalidPathError::EmptyNegatedPropertySet));
    }
}
