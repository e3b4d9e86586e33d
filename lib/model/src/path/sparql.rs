use crate::{NegatedPropertySet, PropertyPath};
use spargebra::algebra::PropertyPathExpression;

/// Converts a path from the SPARQL algebra.
///
/// The SPARQL grammar has no counting closures, so `*` and `+` become [PropertyPath::ZeroOrMore]
/// and [PropertyPath::OneOrMore]. The parser represents `!(^:p)` as a reversed negated property
/// set, which is turned into a set with backward exclusions.
impl From<&PropertyPathExpression> for PropertyPath {
    fn from(path: &PropertyPathExpression) -> Self {
        match path {
            PropertyPathExpression::NamedNode(node) => Self::Link(node.clone()),
            PropertyPathExpression::Reverse(inner) => match inner.as_ref() {
                PropertyPathExpression::NegatedPropertySet(nodes) if !nodes.is_empty() => {
                    Self::NegatedPropertySet(backward_only(nodes))
                }
                inner => Self::inverse(inner.into()),
            },
            PropertyPathExpression::Sequence(lhs, rhs) => {
                Self::sequence(lhs.as_ref().into(), rhs.as_ref().into())
            }
            PropertyPathExpression::Alternative(lhs, rhs) => {
                Self::alternative(lhs.as_ref().into(), rhs.as_ref().into())
            }
            PropertyPathExpression::ZeroOrMore(inner) => Self::zero_or_more(inner.as_ref().into()),
            PropertyPathExpression::OneOrMore(inner) => Self::one_or_more(inner.as_ref().into()),
            PropertyPathExpression::ZeroOrOne(inner) => Self::zero_or_one(inner.as_ref().into()),
            PropertyPathExpression::NegatedPropertySet(nodes) => {
                Self::NegatedPropertySet(forward_only(nodes))
            }
        }
    }
}

impl From<PropertyPathExpression> for PropertyPath {
    fn from(path: PropertyPathExpression) -> Self {
        Self::from(&path)
    }
}

fn forward_only(nodes: &[oxrdf::NamedNode]) -> NegatedPropertySet {
    NegatedPropertySet::from_parts(nodes.to_vec(), Vec::new())
}

fn backward_only(nodes: &[oxrdf::NamedNode]) -> NegatedPropertySet {
    NegatedPropertySet::from_parts(Vec::new(), nodes.to_vec())
}

#[cfg(test)]
mod tests {
    use crate::PropertyPath;
    use oxrdf::NamedNode;
    use spargebra::algebra::PropertyPathExpression;

    fn node(name: &str) -> NamedNode {
        NamedNode::new_unchecked(format!("http://example.com/{name}"))
    }

    #[test]
    fn converts_closures_to_single_accumulator_forms() {
        let path = PropertyPathExpression::Sequence(
            Box::new(PropertyPathExpression::ZeroOrMore(Box::new(
                PropertyPathExpression::NamedNode(node("a")),
            ))),
            Box::new(PropertyPathExpression::OneOrMore(Box::new(
                PropertyPathExpression::NamedNode(node("b")),
            ))),
        );

        assert_eq!(
            PropertyPath::from(&path),
            PropertyPath::sequence(
                PropertyPath::zero_or_more(PropertyPath::link(node("a"))),
                PropertyPath::one_or_more(PropertyPath::link(node("b"))),
            )
        );
    }

    #[test]
    fn converts_reverse_negated_property_set() {
        let path = PropertyPathExpression::Alternative(
            Box::new(PropertyPathExpression::NegatedPropertySet(vec![node("a")])),
            Box::new(PropertyPathExpression::Reverse(Box::new(
                PropertyPathExpression::NegatedPropertySet(vec![node("c")]),
            ))),
        );

        insta::assert_snapshot!(
            PropertyPath::from(&path),
            @"(!(<http://example.com/a>) | !(^<http://example.com/c>))"
        );
    }

    #[test]
    fn converts_reverse_to_inverse() {
        let path = PropertyPathExpression::Reverse(Box::new(PropertyPathExpression::ZeroOrOne(
            Box::new(PropertyPathExpression::NamedNode(node("a"))),
        )));

        assert_eq!(
            PropertyPath::from(path),
            PropertyPath::inverse(PropertyPath::zero_or_one(PropertyPath::link(node("a"))))
        );
    }
}
