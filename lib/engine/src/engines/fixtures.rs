use crate::{Direction, EvaluationContext, EvaluationSemantics, PathEvaluator};
use rdf_paths_model::{Graph, NamedNode, PropertyPath, Term, TripleRef};

pub(crate) fn node(name: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("http://example.com/{name}"))
}

pub(crate) fn term(name: &str) -> Term {
    node(name).into()
}

pub(crate) fn link(name: &str) -> PropertyPath {
    PropertyPath::link(node(name))
}

/// Builds a graph from `(subject, predicate, object)` names.
pub(crate) fn graph(edges: &[(&str, &str, &str)]) -> Graph {
    let mut graph = Graph::new();
    for (subject, predicate, object) in edges {
        graph.insert(TripleRef::new(
            &node(subject),
            &node(predicate),
            &node(object),
        ));
    }
    graph
}

pub(crate) fn evaluate(
    graph: &Graph,
    path: &PropertyPath,
    start: &str,
    direction: Direction,
    semantics: EvaluationSemantics,
) -> Vec<Term> {
    let context = EvaluationContext::default();
    let mut output = Vec::new();
    PathEvaluator::new(graph, &context)
        .evaluate(path, &term(start), direction, semantics, &mut output)
        .unwrap();
    output
}

/// Sorts nodes such that results can be compared independently of the graph's index order.
pub(crate) fn sorted(mut nodes: Vec<Term>) -> Vec<Term> {
    nodes.sort_by_key(ToString::to_string);
    nodes
}
