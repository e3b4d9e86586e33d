mod error;
mod path;

pub use error::*;
pub use path::*;

// Re-export some oxrdf types.
pub use oxrdf::{
    BlankNode, BlankNodeRef, Graph, Literal, LiteralRef, NamedNode, NamedNodeRef, Subject,
    SubjectRef, Term, TermRef, Triple, TripleRef,
};
