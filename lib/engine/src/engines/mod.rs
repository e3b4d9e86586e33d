//! The evaluation engines, one per [EvaluationSemantics](crate::EvaluationSemantics).
//!
//! An engine decides how each path operator treats duplicates. The graph primitives and the
//! recursion over the path tree are provided by the [PathEvaluator], which calls back into the
//! engine for every operator.

mod counting;
#[cfg(test)]
mod fixtures;
mod sparql;
mod unique;

pub(crate) use counting::CountingEngine;
pub(crate) use sparql::SparqlEngine;
pub(crate) use unique::UniqueEngine;

use crate::{Direction, PathEvaluator, PathResult};
use rdf_paths_common::TripleSource;
use rdf_paths_model::{NegatedPropertySet, PropertyPath, RepetitionBounds, Term};
use rustc_hash::FxHashSet;

/// The operators of a path evaluation engine.
///
/// All operators append the nodes reached from `node` to `output`. They never remove or reorder
/// what `output` already contains.
pub(crate) trait PathEngine {
    /// Returns an empty accumulator for intermediate results.
    fn collector() -> Vec<Term> {
        Vec::new()
    }

    /// `lhs / rhs`
    fn sequence<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        lhs: &PropertyPath,
        rhs: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()>;

    /// `lhs | rhs`
    fn alternative<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        lhs: &PropertyPath,
        rhs: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()>;

    /// `!(:a|^:b)`
    fn negated_property_set<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        set: &NegatedPropertySet,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        negated_steps(evaluator, set, node, direction, output)
    }

    /// `path?`
    fn zero_or_one<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()>;

    /// `path*`
    fn zero_or_more<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()>;

    /// `path{*}`
    fn zero_or_more_n<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()>;

    /// `path+`
    fn one_or_more<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()>;

    /// `path{+}`
    fn one_or_more_n<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()>;

    /// `path{n}`
    fn fixed_length<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        count: u64,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()>;

    /// `path{min,max}` that is neither a closure nor a fixed-length path.
    fn multi_length<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        bounds: RepetitionBounds,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()>;

    /// The zero-length path. Always yields the start node, whether or not it occurs in the graph.
    fn zero(node: &Term, output: &mut Vec<Term>) {
        output.push(node.clone());
    }
}

/// A set of nodes that remembers the order of insertion.
#[derive(Debug, Default)]
pub(crate) struct UniqueNodes {
    seen: FxHashSet<Term>,
    nodes: Vec<Term>,
}

impl UniqueNodes {
    /// Inserts `node`, returning whether it was new.
    pub(crate) fn insert(&mut self, node: &Term) -> bool {
        if self.seen.contains(node) {
            return false;
        }
        self.seen.insert(node.clone());
        self.nodes.push(node.clone());
        true
    }

    pub(crate) fn extend(&mut self, nodes: impl IntoIterator<Item = Term>) {
        for node in nodes {
            if self.seen.insert(node.clone()) {
                self.nodes.push(node);
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.nodes.iter()
    }

    pub(crate) fn into_vec(self) -> Vec<Term> {
        self.nodes
    }
}

/// The nodes that were already expanded by a closure walk.
pub(crate) trait VisitedNodes {
    /// Marks `node` as visited, returning whether it was not visited before.
    fn visit(&mut self, node: &Term) -> bool;
}

/// Membership is checked with a linear scan.
impl VisitedNodes for Vec<Term> {
    fn visit(&mut self, node: &Term) -> bool {
        if self.contains(node) {
            return false;
        }
        self.push(node.clone());
        true
    }
}

impl VisitedNodes for UniqueNodes {
    fn visit(&mut self, node: &Term) -> bool {
        self.insert(node)
    }
}

/// Appends every node of `nodes` that is not yet in `output`.
pub(crate) fn fill_unique(nodes: impl IntoIterator<Item = Term>, output: &mut Vec<Term>) {
    let mut seen = output.iter().cloned().collect::<FxHashSet<_>>();
    for node in nodes {
        if !seen.contains(&node) {
            seen.insert(node.clone());
            output.push(node);
        }
    }
}

/// `X !(:a|^:b) Y` is `{ X !(:a) Y } UNION { Y !(:b) X }`. When walking backward, the roles of
/// both exclusion lists swap.
pub(crate) fn negated_steps<G: TripleSource + ?Sized>(
    evaluator: &mut PathEvaluator<'_, G>,
    set: &NegatedPropertySet,
    node: &Term,
    direction: Direction,
    output: &mut Vec<Term>,
) -> PathResult<()> {
    let (forward, backward) = direction.order(set.forward(), set.backward());
    if !forward.is_empty() {
        output.extend(evaluator.step_exclude_forwards(node, forward)?);
    }
    if !backward.is_empty() {
        output.extend(evaluator.step_exclude_backwards(node, backward)?);
    }
    Ok(())
}

/// Evaluates `lhs / rhs` by evaluating the second operand from every node reached by the first
/// one. Walking backward, `rhs` is the first operand.
pub(crate) fn compose<E: PathEngine, G: TripleSource + ?Sized>(
    evaluator: &mut PathEvaluator<'_, G>,
    lhs: &PropertyPath,
    rhs: &PropertyPath,
    node: &Term,
    direction: Direction,
    output: &mut Vec<Term>,
) -> PathResult<()> {
    let (first, second) = direction.order(lhs, rhs);
    let intermediate = evaluator.collect::<E>(first, node, direction)?;
    for middle in &intermediate {
        evaluator.visit::<E>(second, middle, direction, output)?;
    }
    Ok(())
}

/// Evaluates `lhs | rhs` by appending the results of both operands.
pub(crate) fn union<E: PathEngine, G: TripleSource + ?Sized>(
    evaluator: &mut PathEvaluator<'_, G>,
    lhs: &PropertyPath,
    rhs: &PropertyPath,
    node: &Term,
    direction: Direction,
    output: &mut Vec<Term>,
) -> PathResult<()> {
    evaluator.visit::<E>(lhs, node, direction, output)?;
    evaluator.visit::<E>(rhs, node, direction, output)
}

/// Walks the closure of `inner` from `start` depth-first, expanding every node at most once per
/// `visited`.
///
/// The walk reaches the nodes in the same order as a recursive depth-first search but keeps its
/// own stack. Every reached node, including `start`, is added to `visited`.
pub(crate) fn walk_reachable<E: PathEngine, G: TripleSource + ?Sized>(
    evaluator: &mut PathEvaluator<'_, G>,
    inner: &PropertyPath,
    start: &Term,
    direction: Direction,
    visited: &mut impl VisitedNodes,
) -> PathResult<()> {
    let mut reached = 0_usize;
    let mut stack = vec![start.clone()];
    while let Some(node) = stack.pop() {
        if !visited.visit(&node) {
            continue;
        }
        reached += 1;
        let successors = evaluator.collect::<E>(inner, &node, direction)?;
        stack.extend(successors.into_iter().rev());
    }

    tracing::trace!(%start, reached, "closure walk finished");
    Ok(())
}

/// A node on the current route of [walk_paths] together with its unexplored successors.
struct RouteFrame {
    node: Term,
    successors: std::vec::IntoIter<Term>,
}

/// Walks every cycle-free route of `inner` repetitions from `start`, appending the end of each
/// route to `output`.
///
/// A node is only excluded while it is on the current route. Once all of its successors have
/// been explored, it is removed from `visited` again, hence it may be reached via another branch.
/// `start` is skipped if it is already in `visited`.
pub(crate) fn walk_paths<E: PathEngine, G: TripleSource + ?Sized>(
    evaluator: &mut PathEvaluator<'_, G>,
    inner: &PropertyPath,
    start: &Term,
    direction: Direction,
    visited: &mut FxHashSet<Term>,
    output: &mut Vec<Term>,
) -> PathResult<()> {
    if visited.contains(start) {
        return Ok(());
    }

    let first = enter_route::<E, G>(evaluator, inner, start, direction, visited, output)?;
    let mut reached = 1_usize;
    let mut route = vec![first];
    while let Some(frame) = route.last_mut() {
        match frame.successors.next() {
            Some(next) if !visited.contains(&next) => {
                let frame = enter_route::<E, G>(evaluator, inner, &next, direction, visited, output)?;
                route.push(frame);
                reached += 1;
            }
            Some(_) => {}
            None => {
                if let Some(frame) = route.pop() {
                    visited.remove(&frame.node);
                }
            }
        }
    }

    tracing::trace!(%start, reached, "path walk finished");
    Ok(())
}

fn enter_route<E: PathEngine, G: TripleSource + ?Sized>(
    evaluator: &mut PathEvaluator<'_, G>,
    inner: &PropertyPath,
    node: &Term,
    direction: Direction,
    visited: &mut FxHashSet<Term>,
    output: &mut Vec<Term>,
) -> PathResult<RouteFrame> {
    output.push(node.clone());
    visited.insert(node.clone());
    let successors = evaluator.collect::<E>(inner, node, direction)?;
    Ok(RouteFrame {
        node: node.clone(),
        successors: successors.into_iter(),
    })
}

/// Evaluates `inner{count}` by taking one step and recursing with `count - 1` from every reached
/// node.
pub(crate) fn fixed_length_by_recursion<E: PathEngine, G: TripleSource + ?Sized>(
    evaluator: &mut PathEvaluator<'_, G>,
    inner: &PropertyPath,
    node: &Term,
    count: u64,
    direction: Direction,
    output: &mut Vec<Term>,
) -> PathResult<()> {
    if count == 0 {
        E::zero(node, output);
        return Ok(());
    }

    let step = evaluator.collect::<E>(inner, node, direction)?;
    if count == 1 {
        output.extend(step);
        return Ok(());
    }

    for next in &step {
        evaluator.nested(|evaluator| {
            fixed_length_by_recursion::<E, G>(evaluator, inner, next, count - 1, direction, output)
        })?;
    }
    Ok(())
}

/// Evaluates `inner{min,max}` by taking one step and recursing with both bounds decremented.
///
/// The remaining repetition is classified again, so `{3,}` becomes `{2,}` and finally `{1,}`,
/// which is evaluated as a closure. Walking backward, the remaining repetition is evaluated first
/// and the single step is taken from its results.
pub(crate) fn multi_length_by_decrement<E: PathEngine, G: TripleSource + ?Sized>(
    evaluator: &mut PathEvaluator<'_, G>,
    inner: &PropertyPath,
    node: &Term,
    bounds: RepetitionBounds,
    direction: Direction,
    output: &mut Vec<Term>,
) -> PathResult<()> {
    if bounds.includes_zero() {
        E::zero(node, output);
    }
    if bounds.max() == Some(0) {
        return Ok(());
    }

    let remaining = bounds.decrement();
    match direction {
        Direction::Forward => {
            let step = evaluator.collect::<E>(inner, node, direction)?;
            for next in &step {
                evaluator.nested(|evaluator| {
                    evaluator.repetition::<E>(inner, remaining, next, direction, output)
                })?;
            }
        }
        Direction::Backward => {
            let mut rest = E::collector();
            evaluator.nested(|evaluator| {
                evaluator.repetition::<E>(inner, remaining, node, direction, &mut rest)
            })?;
            for next in &rest {
                evaluator.visit::<E>(inner, next, direction, output)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_paths_model::NamedNode;

    fn term(name: &str) -> Term {
        NamedNode::new_unchecked(format!("http://example.com/{name}")).into()
    }

    #[test]
    fn fill_unique_keeps_existing_order() {
        let mut output = vec![term("b"), term("a")];
        fill_unique([term("a"), term("c"), term("b"), term("c")], &mut output);
        assert_eq!(output, vec![term("b"), term("a"), term("c")]);
    }

    #[test]
    fn unique_nodes_report_new_insertions() {
        let mut nodes = UniqueNodes::default();
        assert!(nodes.insert(&term("a")));
        assert!(!nodes.insert(&term("a")));
        nodes.extend([term("b"), term("a")]);
        assert_eq!(nodes.into_vec(), vec![term("a"), term("b")]);
    }

    #[test]
    fn visited_vector_grows_once_per_node() {
        let mut visited: Vec<Term> = Vec::new();
        assert!(visited.visit(&term("a")));
        assert!(!visited.visit(&term("a")));
        assert_eq!(visited, vec![term("a")]);
    }
}
