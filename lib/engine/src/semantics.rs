use std::fmt::{Display, Formatter};

/// The duplicate policy used while evaluating a path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvaluationSemantics {
    /// SPARQL property path semantics. Closures eliminate duplicates, other operators do not.
    ///
    /// The zero-length path always yields the start node, even if the node does not appear in the
    /// graph. Fixed- and bounded-length repetitions are an extension.
    #[default]
    Sparql,
    /// No operator reports the same node twice.
    Unique,
    /// Every route to a node is reported, hence nodes may be reported multiple times. Used for
    /// counting paths.
    Counting,
}

impl Display for EvaluationSemantics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EvaluationSemantics::Sparql => "sparql",
            EvaluationSemantics::Unique => "unique",
            EvaluationSemantics::Counting => "counting",
        };
        f.write_str(name)
    }
}
