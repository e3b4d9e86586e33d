use crate::model::{PropertyPath, Term};
use crate::{evaluate_backward, evaluate_forward, EvaluationContext, PathNodes, PathResult};
use rdf_paths_common::TripleSource;
use spargebra::algebra::PropertyPathExpression;

/// Returns the nodes reachable from `node` via a path of the SPARQL algebra.
///
/// Uses the SPARQL semantics and the default [EvaluationContext].
pub fn walk_forwards<G: TripleSource + ?Sized>(
    graph: &G,
    node: &Term,
    path: &PropertyPathExpression,
) -> PathResult<PathNodes> {
    evaluate_forward(
        graph,
        node,
        &PropertyPath::from(path),
        &EvaluationContext::default(),
    )
}

/// Returns the nodes from which `node` is reachable via a path of the SPARQL algebra.
///
/// Uses the SPARQL semantics and the default [EvaluationContext].
pub fn walk_backwards<G: TripleSource + ?Sized>(
    graph: &G,
    node: &Term,
    path: &PropertyPathExpression,
) -> PathResult<PathNodes> {
    evaluate_backward(
        graph,
        node,
        &PropertyPath::from(path),
        &EvaluationContext::default(),
    )
}
