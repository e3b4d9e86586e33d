use crate::{NegatedPropertySet, PropertyPath, RepetitionBounds};
use std::fmt::{Display, Formatter};

/// Renders the path in a SPARQL-like syntax. Binary operators are always parenthesized, which
/// keeps the output unambiguous without tracking operator precedence.
impl Display for PropertyPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyPath::Link(property) => write!(f, "{property}"),
            PropertyPath::ReverseLink(property) => write!(f, "^{property}"),
            PropertyPath::Inverse(inner) => write!(f, "^{inner}"),
            PropertyPath::Sequence(lhs, rhs) => write!(f, "({lhs} / {rhs})"),
            PropertyPath::Alternative(lhs, rhs) => write!(f, "({lhs} | {rhs})"),
            PropertyPath::ZeroOrOne(inner) => write!(f, "{inner}?"),
            PropertyPath::ZeroOrMore(inner) => write!(f, "{inner}*"),
            PropertyPath::ZeroOrMoreN(inner) => write!(f, "{inner}{{*}}"),
            PropertyPath::OneOrMore(inner) => write!(f, "{inner}+"),
            PropertyPath::OneOrMoreN(inner) => write!(f, "{inner}{{+}}"),
            PropertyPath::FixedLength(inner, count) => write!(f, "{inner}{{{count}}}"),
            PropertyPath::Mod(inner, bounds) => write!(f, "{inner}{bounds}"),
            PropertyPath::NegatedPropertySet(set) => write!(f, "{set}"),
            PropertyPath::Distinct(inner) => write!(f, "distinct({inner})"),
            PropertyPath::Multi(inner) => write!(f, "multi({inner})"),
            PropertyPath::Shortest(inner) => write!(f, "shortest({inner})"),
        }
    }
}

impl Display for RepetitionBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        if let Some(min) = self.min() {
            write!(f, "{min}")?;
        }
        f.write_str(",")?;
        if let Some(max) = self.max() {
            write!(f, "{max}")?;
        }
        f.write_str("}")
    }
}

impl Display for NegatedPropertySet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let forward = self.forward().iter().map(ToString::to_string);
        let backward = self.backward().iter().map(|p| format!("^{p}"));
        let elements = forward.chain(backward).collect::<Vec<_>>();
        write!(f, "!({})", elements.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use crate::PropertyPath;
    use oxrdf::NamedNode;

    fn link(name: &str) -> PropertyPath {
        PropertyPath::link(NamedNode::new_unchecked(format!("http://example.com/{name}")))
    }

    #[test]
    fn display_sequence_of_closures() {
        let path = PropertyPath::sequence(
            PropertyPath::zero_or_more(link("a")),
            PropertyPath::one_or_more_n(PropertyPath::inverse(link("b"))),
        );
        insta::assert_snapshot!(path, @"(<http://example.com/a>* / ^<http://example.com/b>{+})");
    }

    #[test]
    fn display_bounded_repetitions() {
        let open_max = PropertyPath::repeat(link("a"), Some(2), None).unwrap();
        let open_min = PropertyPath::repeat(link("a"), None, Some(3)).unwrap();
        let fixed = PropertyPath::fixed_length(link("a"), 4);

        insta::assert_snapshot!(open_max, @"<http://example.com/a>{2,}");
        insta::assert_snapshot!(open_min, @"<http://example.com/a>{,3}");
        insta::assert_snapshot!(fixed, @"<http://example.com/a>{4}");
    }

    #[test]
    fn display_negated_property_set() {
        let path = PropertyPath::negated(
            [NamedNode::new_unchecked("http://example.com/a")],
            [NamedNode::new_unchecked("http://example.com/c")],
        )
        .unwrap();
        insta::assert_snapshot!(path, @"!(<http://example.com/a>|^<http://example.com/c>)");
    }

    #[test]
    fn display_wrappers() {
        let path = PropertyPath::shortest(PropertyPath::alternative(
            PropertyPath::distinct(link("a")),
            PropertyPath::multi(PropertyPath::zero_or_one(link("b"))),
        ));
        insta::assert_snapshot!(
            path,
            @"shortest((distinct(<http://example.com/a>) | multi(<http://example.com/b>?)))"
        );
    }
}
