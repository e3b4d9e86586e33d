use crate::engines::{CountingEngine, PathEngine, SparqlEngine, UniqueEngine};
use crate::error::PathEvaluationError;
use crate::{Direction, EvaluationContext, EvaluationSemantics, PathResult};
use itertools::Itertools;
use rdf_paths_common::error::GraphAccessError;
use rdf_paths_common::TripleSource;
use rdf_paths_model::{NamedNode, PropertyPath, RepetitionBounds, Term, Triple};

/// Evaluates a [PropertyPath] from a fixed start node and appends the reached nodes to an output
/// list.
///
/// The evaluator dispatches each path operator to the engine of the active
/// [EvaluationSemantics]. `Distinct` and `Multi` switch the engine for their sub-path, `Inverse`
/// flips the [Direction] for its sub-path. Both are passed down the recursion instead of being
/// stored in the evaluator, hence leaving a sub-path restores them implicitly.
///
/// An evaluator is meant for a single evaluation call and must not be shared across threads.
pub struct PathEvaluator<'a, G: ?Sized> {
    /// The graph that is walked.
    graph: &'a G,
    /// Options of the evaluation.
    context: &'a EvaluationContext,
    /// The number of currently nested sub-evaluations.
    depth: usize,
}

impl<'a, G: TripleSource + ?Sized> PathEvaluator<'a, G> {
    /// Creates a new [PathEvaluator] over `graph`.
    pub fn new(graph: &'a G, context: &'a EvaluationContext) -> Self {
        Self {
            graph,
            context,
            depth: 0,
        }
    }

    /// Evaluates `path` from `node` and appends the reached nodes to `output`.
    ///
    /// Returns an error for [PropertyPath::Shortest], if the graph fails, or if the depth limit of
    /// the [EvaluationContext] is exceeded. On error, `output` may contain some of the nodes
    /// reached before the failure.
    pub fn evaluate(
        &mut self,
        path: &PropertyPath,
        node: &Term,
        direction: Direction,
        semantics: EvaluationSemantics,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        match semantics {
            EvaluationSemantics::Sparql => {
                self.visit::<SparqlEngine>(path, node, direction, output)
            }
            EvaluationSemantics::Unique => {
                self.visit::<UniqueEngine>(path, node, direction, output)
            }
            EvaluationSemantics::Counting => {
                self.visit::<CountingEngine>(path, node, direction, output)
            }
        }
    }

    /// Evaluates `path` with the engine `E`.
    pub(crate) fn visit<E: PathEngine>(
        &mut self,
        path: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        self.nested(|evaluator| evaluator.dispatch::<E>(path, node, direction, output))
    }

    /// Evaluates `path` with the engine `E` into a fresh collector of `E`.
    pub(crate) fn collect<E: PathEngine>(
        &mut self,
        path: &PropertyPath,
        node: &Term,
        direction: Direction,
    ) -> PathResult<Vec<Term>> {
        let mut nodes = E::collector();
        self.visit::<E>(path, node, direction, &mut nodes)?;
        Ok(nodes)
    }

    /// Runs `f` one level deeper, checking the depth limit of the context.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> PathResult<T>,
    ) -> PathResult<T> {
        if let Some(limit) = self.context.max_depth() {
            if self.depth >= limit {
                tracing::trace!(limit, "path evaluation depth limit exceeded");
                return Err(PathEvaluationError::DepthLimitExceeded { limit });
            }
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn dispatch<E: PathEngine>(
        &mut self,
        path: &PropertyPath,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        match path {
            PropertyPath::Link(property) => {
                output.extend(self.one_step(node, property, direction)?);
                Ok(())
            }
            PropertyPath::ReverseLink(property) => {
                output.extend(self.one_step(node, property, direction.flip())?);
                Ok(())
            }
            PropertyPath::Inverse(inner) => self.visit::<E>(inner, node, direction.flip(), output),
            PropertyPath::NegatedPropertySet(set) => {
                E::negated_property_set(self, set, node, direction, output)
            }
            PropertyPath::Mod(inner, bounds) => {
                self.repetition::<E>(inner, *bounds, node, direction, output)
            }
            PropertyPath::FixedLength(inner, count) => {
                E::fixed_length(self, inner, node, *count, direction, output)
            }
            PropertyPath::ZeroOrOne(inner) => E::zero_or_one(self, inner, node, direction, output),
            PropertyPath::ZeroOrMore(inner) => {
                E::zero_or_more(self, inner, node, direction, output)
            }
            PropertyPath::ZeroOrMoreN(inner) => {
                E::zero_or_more_n(self, inner, node, direction, output)
            }
            PropertyPath::OneOrMore(inner) => E::one_or_more(self, inner, node, direction, output),
            PropertyPath::OneOrMoreN(inner) => {
                E::one_or_more_n(self, inner, node, direction, output)
            }
            PropertyPath::Alternative(lhs, rhs) => {
                E::alternative(self, lhs, rhs, node, direction, output)
            }
            PropertyPath::Sequence(lhs, rhs) => E::sequence(self, lhs, rhs, node, direction, output),
            PropertyPath::Distinct(inner) => {
                self.visit::<UniqueEngine>(inner, node, direction, output)
            }
            PropertyPath::Multi(inner) => {
                self.visit::<CountingEngine>(inner, node, direction, output)
            }
            PropertyPath::Shortest(_) => {
                Err(PathEvaluationError::NotImplemented(path.to_string()))
            }
        }
    }

    /// Evaluates `inner{min,max}`.
    ///
    /// Open-ended repetitions starting at zero or one are closures and use the counting closure
    /// operators. Equal bounds are a fixed-length path.
    pub(crate) fn repetition<E: PathEngine>(
        &mut self,
        inner: &PropertyPath,
        bounds: RepetitionBounds,
        node: &Term,
        direction: Direction,
        output: &mut Vec<Term>,
    ) -> PathResult<()> {
        if bounds.is_zero_or_more() {
            E::zero_or_more_n(self, inner, node, direction, output)
        } else if bounds.is_one_or_more() {
            E::one_or_more_n(self, inner, node, direction, output)
        } else if let Some(count) = bounds.fixed_length() {
            E::fixed_length(self, inner, node, count, direction, output)
        } else {
            E::multi_length(self, inner, node, bounds, direction, output)
        }
    }

    /// Takes a single step along `property`. Forward, this matches `node` as the subject and
    /// returns the objects. Backward, this matches `node` as the object and returns the subjects.
    pub(crate) fn one_step(
        &self,
        node: &Term,
        property: &NamedNode,
        direction: Direction,
    ) -> PathResult<Vec<Term>> {
        let triples = match direction {
            Direction::Forward => {
                self.graph
                    .find(Some(node.as_ref()), Some(property.as_ref()), None)
            }
            Direction::Backward => {
                self.graph
                    .find(None, Some(property.as_ref()), Some(node.as_ref()))
            }
        };

        let nodes = triples
            .map_ok(|triple| endpoint(triple, direction))
            .collect::<Result<Vec<_>, GraphAccessError>>()?;
        Ok(nodes)
    }

    /// Returns the objects of all triples with `node` as the subject whose predicate is not in
    /// `excluded`.
    pub(crate) fn step_exclude_forwards(
        &self,
        node: &Term,
        excluded: &[NamedNode],
    ) -> PathResult<Vec<Term>> {
        let nodes = self
            .graph
            .find(Some(node.as_ref()), None, None)
            .filter_ok(|triple| !excluded.contains(&triple.predicate))
            .map_ok(|triple| endpoint(triple, Direction::Forward))
            .collect::<Result<Vec<_>, GraphAccessError>>()?;
        Ok(nodes)
    }

    /// Returns the subjects of all triples with `node` as the object whose predicate is not in
    /// `excluded`.
    pub(crate) fn step_exclude_backwards(
        &self,
        node: &Term,
        excluded: &[NamedNode],
    ) -> PathResult<Vec<Term>> {
        let nodes = self
            .graph
            .find(None, None, Some(node.as_ref()))
            .filter_ok(|triple| !excluded.contains(&triple.predicate))
            .map_ok(|triple| endpoint(triple, Direction::Backward))
            .collect::<Result<Vec<_>, GraphAccessError>>()?;
        Ok(nodes)
    }
}

/// The node a step arrives at.
fn endpoint(triple: Triple, direction: Direction) -> Term {
    match direction {
        Direction::Forward => triple.object,
        Direction::Backward => triple.subject.into(),
    }
}
