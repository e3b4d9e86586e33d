//! Evaluation of property paths from a fixed start node.
//!
//! Three evaluation semantics are available, see [EvaluationSemantics]. All of them walk the graph
//! through a [TripleSource](rdf_paths_common::TripleSource) and accumulate the reached nodes in a
//! list.

mod api;
mod context;
mod direction;
mod engines;
pub mod error;
mod evaluator;
mod semantics;

pub use api::*;
pub use context::EvaluationContext;
pub use direction::Direction;
pub use evaluator::PathEvaluator;
pub use semantics::EvaluationSemantics;

/// The result type of path evaluations.
pub type PathResult<T> = Result<T, error::PathEvaluationError>;
