use crate::engines::{
    compose, fixed_length_by_recursion, multi_length_by_decrement, union, walk_paths,
    walk_reachable, PathEngine, UniqueNodes,
};
use crate::{Direction, PathEvaluator, PathResult};
use rdf_paths_common::TripleSource;
use rdf_paths_model::{PropertyPath, RepetitionBounds, Term};
use rustc_hash::FxHashSet;

/// Evaluates paths according to [crate::EvaluationSemantics::Sparql].
///
/// `path*` and `path+` report every reachable node once. `path?` reports the start node and every
/// other reachable node once. All remaining operators, including the counting closures, keep
/// duplicates.
pub(crate) struct SparqlEngine;

impl PathEngine for SparqlEngine {
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
        let reached = evaluator.collect::<Self>(inner, node, direction)?;
        let mut nodes = UniqueNodes::default();
        nodes.insert(node);
        nodes.extend(reached);
        output.extend(nodes.into_vec());
        Ok(())
    }

    fn zero_or_more<G: TripleSource + ?Sized>(
        evaluator: &mut PathEvaluator<'_, G>,
        inner: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        let mut visited = Self::collector();
        walk_reachable::<Self, G>(evaluator, inner, node, direction, &mut visited)?;
        output.extend(visited);
        Ok(())
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
        // The start node is not visited, it is only reported if a cycle leads back to it.
        let mut visited = Self::collector();
        for next in evaluator.collect::<Self>(inner, node, direction)? {
            walk_reachable::<Self, G>(evaluator, inner, &next, direction, &mut visited)?;
        }
        output.extend(visited);
        Ok(())
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
