use crate::InvalidPathError;
use oxrdf::NamedNode;

/// The properties excluded by a negated property set `!(:a|:b|^:c|^:d)`.
///
/// `X !(:a|:b|^:c|^:d) Y` is `{ X !(:a|:b) Y } UNION { Y !(:c|:d) X }`, hence the forward and the
/// backward exclusions are kept apart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NegatedPropertySet {
    forward: Vec<NamedNode>,
    backward: Vec<NamedNode>,
}

impl NegatedPropertySet {
    /// Creates a new [NegatedPropertySet]. At least one property must be excluded.
    pub fn new(
        forward: impl IntoIterator<Item = NamedNode>,
        backward: impl IntoIterator<Item = NamedNode>,
    ) -> Result<Self, InvalidPathError> {
        let forward = forward.into_iter().collect::<Vec<_>>();
        let backward = backward.into_iter().collect::<Vec<_>>();
        if forward.is_empty() && backward.is_empty() {
            return Err(InvalidPathError::EmptyNegatedPropertySet);
        }
        Ok(Self { forward, backward })
    }

    /// Used for sets coming from an already validated algebra.
    pub(crate) fn from_parts(forward: Vec<NamedNode>, backward: Vec<NamedNode>) -> Self {
        Self { forward, backward }
    }

    /// Properties excluded when stepping from subject to object.
    pub fn forward(&self) -> &[NamedNode] {
        &self.forward
    }

    /// Properties excluded when stepping from object to subject.
    pub fn backward(&self) -> &[NamedNode] {
        &self.backward
    }
}
