#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod walk;

pub use rdf_paths_engine::{
    evaluate, evaluate_backward, evaluate_counting_backward, evaluate_counting_forward,
    evaluate_forward, evaluate_unique_backward, evaluate_unique_forward, Direction,
    EvaluationContext, EvaluationSemantics, PathEvaluator, PathNodes, PathResult,
};
pub use walk::{walk_backwards, walk_forwards};

pub mod model {
    pub use rdf_paths_model::*;
}

pub mod common {
    pub use rdf_paths_common::*;
}

pub mod error {
    pub use rdf_paths_common::error::GraphAccessError;
    pub use rdf_paths_engine::error::PathEvaluationError;
    pub use rdf_paths_model::InvalidPathError;
}
