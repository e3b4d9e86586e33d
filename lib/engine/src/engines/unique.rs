use crate::engines::{fill_unique, negated_steps, walk_reachable, PathEngine, UniqueNodes};
use crate::{Direction, PathEvaluator, PathResult};
use rdf_paths_common::TripleSource;
use rdf_paths_model::{NegatedPropertySet, PropertyPath, RepetitionBounds, Term};
use rustc_hash::FxHashMap;

/// Evaluates paths according to [crate::EvaluationSemantics::Unique].
///
/// Every operator deduplicates what it appends against the output. Closures never expand a node
/// twice, hence the counting closures behave like their SPARQL counterparts. Repetitions are
/// evaluated level by level instead of route by route.
pub(crate) struct UniqueEngine;

impl PathEngine for UniqueEngine {
    fn sequence<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        lhs: &PropertyPath,
        rhs: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        let (first, second) = direction.order(lhs, rhs);
        let mut intermediate = UniqueNodes::default();
        intermediate.extend(evaluator.collect::<Self>(first, node, direction)?);

        let mut reached = UniqueNodes::default();
        for middle in intermediate.iter() {
            reached.extend(evaluator.collect::<Self>(second, middle, direction)?);
        }
        fill_unique(reached.into_vec(), output);
        Ok(())
    }

    fn alternative<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        lhs: &PropertyPath,
        rhs: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        let mut reached = UniqueNodes::default();
        reached.extend(evaluator.collect::<Self>(lhs, node, direction)?);
        reached.extend(evaluator.collect::<Self>(rhs, node, direction)?);
        fill_unique(reached.into_vec(), output);
        Ok(())
    }

    fn negated_property_set<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        set: &NegatedPropertySet,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        let mut reached = Self::collector();
        negated_steps(evaluator, set, node, direction, &mut reached)?;
        fill_unique(reached, output);
        Ok(())
    }

    fn zero_or_one<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        let mut reached = UniqueNodes::default();
        reached.insert(node);
        reached.extend(evaluator.collect::<Self>(inner, node, direction)?);
        fill_unique(reached.into_vec(), output);
        Ok(())
    }

    fn zero_or_more<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        let mut visited = UniqueNodes::default();
        walk_reachable::<Self, G>(evaluator, inner, node, direction, &mut visited)?;
        fill_unique(visited.into_vec(), output);
        Ok(())
    }

    fn zero_or_more_n<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        Self::zero_or_more(evaluator, inner, node, direction, output)
    }

    fn one_or_more<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        let mut visited = UniqueNodes::default();
        for next in evaluator.collect::<Self>(inner, node, direction)? {
            walk_reachable::<Self, G>(evaluator, inner, &next, direction, &mut visited)?;
        }
        fill_unique(visited.into_vec(), output);
        Ok(())
    }

    fn one_or_more_n<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        Self::one_or_more(evaluator, inner, node, direction, output)
    }

    fn fixed_length<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        count: u64,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        let frontier = frontier(evaluator, inner, node, count, direction)?;
        fill_unique(frontier.into_vec(), output);
        Ok(())
    }

    /// Walks `min` levels first. From the resulting frontier, an unbounded repetition continues
    /// as a closure while a bounded one walks at most `max - min` further steps.
    fn multi_length<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        bounds: RepetitionBounds,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        let min = bounds.effective_min();
        let starts = frontier(evaluator, inner, node, min, direction)?;

        let mut reached = UniqueNodes::default();
        match bounds.max() {
            None => {
                for start in starts.iter() {
                    walk_reachable::<Self, G>(evaluator, inner, start, direction, &mut reached)?;
                }
            }
            Some(max) => {
                let mut budgets = FxHashMap::default();
                for start in starts.iter() {
                    walk_bounded(
                        evaluator,
                        inner,
                        start,
                        max - min,
                        direction,
                        &mut budgets,
                        &mut reached,
                    )?;
                }
            }
        }

        fill_unique(reached.into_vec(), output);
        Ok(())
    }
}

/// Returns the distinct nodes that are exactly `count` steps of `inner` away from `node`.
fn frontier<G: TripleSource + ?Sized>(
    evaluator: &mut PathEvaluator<'_, G>,
    inner: &PropertyPath,
    node: &Term,
    count: u64,
    direction: Direction,
) -> PathResult<UniqueNodes> {
    let mut frontier = UniqueNodes::default();
    frontier.insert(node);

    for _ in 0..count {
        if frontier.is_empty() {
            break;
        }
        let mut next = UniqueNodes::default();
        for current in frontier.iter() {
            next.extend(evaluator.collect::<UniqueEngine>(inner, current, direction)?);
        }
        frontier = next;
    }
    Ok(frontier)
}

/// Collects every node that is at most `budget` steps of `inner` away from `node`.
///
/// `budgets` holds the largest remaining budget a node was expanded with. A node is only expanded
/// again if it is reached with a strictly larger budget, as only then can it lead to new nodes.
fn walk_bounded<G: TripleSource + ?Sized>(
    evaluator: &mut PathEvaluator<'_, G>,
    inner: &PropertyPath,
    node: &Term,
    budget: u64,
    direction: Direction,
    budgets: &mut FxHashMap<Term, u64>,
    reached: &mut UniqueNodes,
) -> PathResult<()> {
    if budgets.get(node).is_some_and(|best| *best >= budget) {
        return Ok(());
    }
    budgets.insert(node.clone(), budget);
    reached.insert(node);

    if budget == 0 {
        return Ok(());
    }
    for next in evaluator.collect::<UniqueEngine>(inner, node, direction)? {
        evaluator.nested(|evaluator| {
            walk_bounded(
                evaluator,
                inner,
                &next,
                budget - 1,
                direction,
                budgets,
                reached,
            )
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::engines::fixtures::{evaluate, graph, link, sorted, term};
    use crate::{Direction, EvaluationSemantics};
    use rdf_paths_model::{Graph, PropertyPath, Term};

    fn forward(graph: &Graph, path: &PropertyPath, start: &str) -> Vec<Term> {
        evaluate(graph, path, start, Direction::Forward, EvaluationSemantics::Unique)
    }

    fn diamond() -> Graph {
        graph(&[("a", "p", "b"), ("a", "p", "c"), ("b", "p", "d"), ("c", "p", "d")])
    }

    #[test]
    fn counting_closure_reports_each_node_once() {
        let nodes = forward(&diamond(), &PropertyPath::zero_or_more_n(link("p")), "a");
        assert_eq!(nodes.first(), Some(&term("a")));
        assert_eq!(sorted(nodes), vec![term("a"), term("b"), term("c"), term("d")]);

        let nodes = forward(&diamond(), &PropertyPath::one_or_more_n(link("p")), "a");
        assert_eq!(sorted(nodes), vec![term("b"), term("c"), term("d")]);
    }

    #[test]
    fn fixed_length_deduplicates_levels() {
        let nodes = forward(&diamond(), &PropertyPath::fixed_length(link("p"), 2), "a");
        assert_eq!(nodes, vec![term("d")]);

        let nodes = forward(&diamond(), &PropertyPath::fixed_length(link("p"), 3), "a");
        assert!(nodes.is_empty());
    }

    #[test]
    fn sequence_and_alternative_deduplicate() {
        let diamond = graph(&[("a", "p", "b"), ("a", "p", "c"), ("b", "q", "d"), ("c", "q", "d")]);
        let path = PropertyPath::sequence(link("p"), link("q"));
        assert_eq!(forward(&diamond, &path, "a"), vec![term("d")]);

        let path = PropertyPath::alternative(link("q"), link("q"));
        assert_eq!(forward(&diamond, &path, "b"), vec![term("d")]);
    }

    #[test]
    fn zero_or_one_on_self_loop() {
        let graph = graph(&[("a", "p", "a")]);
        let nodes = forward(&graph, &PropertyPath::zero_or_one(link("p")), "a");
        assert_eq!(nodes, vec![term("a")]);
    }

    #[test]
    fn bounded_repetition_on_cycle() {
        let cycle = graph(&[("a", "p", "b"), ("b", "p", "c"), ("c", "p", "a")]);
        let path = PropertyPath::repeat(link("p"), Some(1), Some(3)).unwrap();
        let nodes = forward(&cycle, &path, "a");
        assert_eq!(nodes, vec![term("b"), term("c"), term("a")]);

        let path = PropertyPath::repeat(link("p"), Some(2), None).unwrap();
        let nodes = forward(&cycle, &path, "a");
        assert_eq!(nodes, vec![term("c"), term("a"), term("b")]);
    }

    #[test]
    fn bounded_repetition_reexpands_with_larger_budget() {
        // Depending on the index order, b is first reached via c with a smaller budget.
        let graph = graph(&[("a", "p", "b"), ("a", "p", "c"), ("c", "p", "b"), ("b", "p", "d")]);
        let path = PropertyPath::repeat(link("p"), Some(0), Some(2)).unwrap();
        let nodes = forward(&graph, &path, "a");
        assert_eq!(
            sorted(nodes),
            vec![term("a"), term("b"), term("c"), term("d")]
        );
    }

    #[test]
    fn bounded_repetition_backward() {
        let chain = graph(&[("a", "p", "b"), ("b", "p", "c"), ("c", "p", "d")]);
        let path = PropertyPath::repeat(link("p"), Some(1), Some(2)).unwrap();
        let nodes = evaluate(
            &chain,
            &path,
            "d",
            Direction::Backward,
            EvaluationSemantics::Unique,
        );
        assert_eq!(nodes, vec![term("c"), term("b")]);
    }
}
