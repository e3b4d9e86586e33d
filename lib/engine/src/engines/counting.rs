use crate::engines::{
    compose, fixed_length_by_recursion, multi_length_by_decrement, union, walk_paths, PathEngine,
};
use crate::{Direction, PathEvaluator, PathResult};
use rdf_paths_common::TripleSource;
use rdf_paths_model::{PropertyPath, RepetitionBounds, Term};
use rustc_hash::FxHashSet;

/// Evaluates paths according to [crate::EvaluationSemantics::Counting].
///
/// A node is reported once for every cycle-free route that reaches it. Closures only exclude the
/// nodes on the current route, hence `path*` and `path{*}` behave the same.
pub(crate) struct CountingEngine;

impl PathEngine for CountingEngine {
    fn sequence<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        lhs: &PropertyPath,
        rhs: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        compose::<Self, G>(evaluator, lhs, rhs, node, direction, output)
    }

    fn alternative<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        lhs: &PropertyPath,
        rhs: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        union::<Self, G>(evaluator, lhs, rhs, node, direction, output)
    }

    fn zero_or_one<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        Self::zero(node, output);
        evaluator.visit::<Self>(inner, node, direction, output)
    }

    fn zero_or_more<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        Self::zero_or_more_n(evaluator, inner, node, direction, output)
    }

    fn zero_or_more_n<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        let mut visited = FxHashSet::default();
        walk_paths::<Self, G>(evaluator, inner, node, direction, &mut visited, output)
    }

    fn one_or_more<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        Self::one_or_more_n(evaluator, inner, node, direction, output)
    }

    fn one_or_more_n<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        let mut visited = FxHashSet::default();
        for next in evaluator.collect::<Self>(inner, node, direction)? {
            walk_paths::<Self, G>(evaluator, inner, &next, direction, &mut visited, output)?;
        }
        Ok(())
    }

    fn fixed_length<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        count: u64,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        fixed_length_by_recursion::<Self, G>(evaluator, inner, node, count, direction, output)
    }

    fn multi_length<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        bounds: RepetitionBounds,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        multi_length_by_decrement::<Self, G>(evaluator, inner, node, bounds, direction, output)
    }
}

#[cfg(test)]
mod tests {
    use crate::engines::fixtures::{evaluate, graph, link, sorted, term};
    use crate::{Direction, EvaluationSemantics};
    use rdf_paths_model::{Graph, PropertyPath, Term};

    fn forward(graph: &Graph, path: &PropertyPath, start: &str) -> Vec<Term> {
        evaluate(graph, path, start, Direction::Forward, EvaluationSemantics::Counting)
    }

    fn diamond() -> Graph {
        graph(&[("a", "p", "b"), ("a", "p", "c"), ("b", "p", "d"), ("c", "p", "d")])
    }

    #[test]
    fn closures_count_every_route() {
        let expected = vec![term("a"), term("b"), term("c"), term("d"), term("d")];
        let nodes = forward(&diamond(), &PropertyPath::zero_or_more(link("p")), "a");
        assert_eq!(sorted(nodes), expected);

        let nodes = forward(&diamond(), &PropertyPath::zero_or_more_n(link("p")), "a");
        assert_eq!(sorted(nodes), expected);
    }

    #[test]
    fn closures_terminate_on_cycles() {
        let cycle = graph(&[("a", "p", "b"), ("b", "p", "a")]);
        let nodes = forward(&cycle, &PropertyPath::one_or_more(link("p")), "a");
        assert_eq!(nodes, vec![term("b"), term("a")]);

        let nodes = forward(&cycle, &PropertyPath::zero_or_more(link("p")), "a");
        assert_eq!(nodes, vec![term("a"), term("b")]);
    }

    #[test]
    fn zero_or_one_keeps_start_duplicate() {
        let graph = graph(&[("a", "p", "a")]);
        let nodes = forward(&graph, &PropertyPath::zero_or_one(link("p")), "a");
        assert_eq!(nodes, vec![term("a"), term("a")]);
    }

    #[test]
    fn repetitions_count_every_route() {
        let nodes = forward(&diamond(), &PropertyPath::fixed_length(link("p"), 2), "a");
        assert_eq!(nodes, vec![term("d"), term("d")]);

        let path = PropertyPath::repeat(link("p"), Some(1), Some(2)).unwrap();
        let nodes = forward(&diamond(), &path, "a");
        assert_eq!(
            sorted(nodes),
            vec![term("b"), term("c"), term("d"), term("d")]
        );
    }

    #[test]
    fn alternative_keeps_duplicates() {
        let graph = graph(&[("a", "p", "b")]);
        let path = PropertyPath::alternative(link("p"), link("p"));
        assert_eq!(forward(&graph, &path, "a"), vec![term("b"), term("b")]);
    }
}
