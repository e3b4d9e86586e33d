use crate::{Direction, EvaluationContext, EvaluationSemantics, PathEvaluator, PathResult};
use rdf_paths_common::TripleSource;
use rdf_paths_model::{PropertyPath, Term};

/// The nodes reached by a path evaluation, in the order in which they were reached.
pub type PathNodes = std::vec::IntoIter<Term>;

/// Evaluates `path` from `node` and appends the reached nodes to `output`.
///
/// If the evaluation fails, `output` is left untouched.
pub fn evaluate<G: TripleSource + ?Sized>(
    graph: &G,
    node: &Term,
    path: &PropertyPath,
    direction: Direction,
    semantics: EvaluationSemantics,
    context: &EvaluationContext,
    output: &mut Vec<Term>,
) -> PathResult<()> {
    tracing::debug!(%node, %path, ?direction, %semantics, "Evaluating property path");

    let mut nodes = Vec::new();
    PathEvaluator::new(graph, context).evaluate(path, node, direction, semantics, &mut nodes)?;

    tracing::debug!(results = nodes.len(), "Property path evaluated");
    output.extend(nodes);
    Ok(())
}

fn evaluate_to_nodes<G: TripleSource + ?Sized>(
    graph: &G,
    node: &Term,
    path: &PropertyPath,
    direction: Direction,
    semantics: EvaluationSemantics,
    context: &EvaluationContext,
) -> PathResult<PathNodes> {
    let mut output = Vec::new();
    evaluate(graph, node, path, direction, semantics, context, &mut output)?;
    Ok(output.into_iter())
}

/// Returns the nodes reachable from `node` via `path` under SPARQL semantics.
pub fn evaluate_forward<G: TripleSource + ?Sized>(
    graph: &G,
    node: &Term,
    path: &PropertyPath,
    context: &EvaluationContext,
) -> PathResult<PathNodes> {
    evaluate_to_nodes(
        graph,
        node,
        path,
        Direction::Forward,
        EvaluationSemantics::Sparql,
        context,
    )
}

/// Returns the nodes from which `node` is reachable via `path` under SPARQL semantics.
pub fn evaluate_backward<G: TripleSource + ?Sized>(
    graph: &G,
    node: &Term,
    path: &PropertyPath,
    context: &EvaluationContext,
) -> PathResult<PathNodes> {
    evaluate_to_nodes(
        graph,
        node,
        path,
        Direction::Backward,
        EvaluationSemantics::Sparql,
        context,
    )
}

/// Like [evaluate_forward] but reports a node once per route.
pub fn evaluate_counting_forward<G: TripleSource + ?Sized>(
    graph: &G,
    node: &Term,
    path: &PropertyPath,
    context: &EvaluationContext,
) -> PathResult<PathNodes> {
    evaluate_to_nodes(
        graph,
        node,
        path,
        Direction::Forward,
        EvaluationSemantics::Counting,
        context,
    )
}

/// Like [evaluate_backward] but reports a node once per route.
pub fn evaluate_counting_backward<G: TripleSource + ?Sized>(
    graph: &G,
    node: &Term,
    path: &PropertyPath,
    context: &EvaluationContext,
) -> PathResult<PathNodes> {
    evaluate_to_nodes(
        graph,
        node,
        path,
        Direction::Backward,
        EvaluationSemantics::Counting,
        context,
    )
}

/// Like [evaluate_forward] but never reports a node twice.
pub fn evaluate_unique_forward<G: TripleSource + ?Sized>(
    graph: &G,
    node: &Term,
    path: &PropertyPath,
    context: &EvaluationContext,
) -> PathResult<PathNodes> {
    evaluate_to_nodes(
        graph,
        node,
        path,
        Direction::Forward,
        EvaluationSemantics::Unique,
        context,
    )
}

/// Like [evaluate_backward] but never reports a node twice.
pub fn evaluate_unique_backward<G: TripleSource + ?Sized>(
    graph: &G,
    node: &Term,
    path: &PropertyPath,
    context: &EvaluationContext,
) -> PathResult<PathNodes> {
    evaluate_to_nodes(
        graph,
        node,
        path,
        Direction::Backward,
        EvaluationSemantics::Unique,
        context,
    )
}
