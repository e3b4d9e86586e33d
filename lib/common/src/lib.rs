pub mod error;
mod memory;
mod triple_source;

pub use triple_source::{TripleIter, TripleSource};
