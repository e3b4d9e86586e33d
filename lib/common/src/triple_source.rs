use crate::error::GraphAccessError;
use rdf_paths_model::{NamedNodeRef, TermRef, Triple};
use std::sync::Arc;

/// The triples returned by a [TripleSource] lookup.
pub type TripleIter<'a> = Box<dyn Iterator<Item = Result<Triple, GraphAccessError>> + 'a>;

/// Read access to an RDF graph.
///
/// This is the only capability that the path evaluation engines consume. Each component of the
/// pattern is either a fixed term or `None`, which matches anything.
///
/// # Consistency
///
/// A single path evaluation issues many lookups. It is the responsibility of the implementation to
/// answer all of them from the same snapshot of the graph. The engines only read, hence lookups
/// may be served concurrently to independent evaluations.
pub trait TripleSource {
    /// Returns all triples matching the given pattern. The order is irrelevant.
    ///
    /// The returned iterator must not borrow the pattern.
    fn find(
        &self,
        subject: Option<TermRef<'_>>,
        predicate: Option<NamedNodeRef<'_>>,
        object: Option<TermRef<'_>>,
    ) -> TripleIter<'_>;
}

impl<T: TripleSource + ?Sized> TripleSource for &T {
    fn find(
        &self,
        subject: Option<TermRef<'_>>,
        predicate: Option<NamedNodeRef<'_>>,
        object: Option<TermRef<'_>>,
    ) -> TripleIter<'_> {
        (**self).find(subject, predicate, object)
    }
}

impl<T: TripleSource + ?Sized> TripleSource for Arc<T> {
    fn find(
        &self,
        subject: Option<TermRef<'_>>,
        predicate: Option<NamedNodeRef<'_>>,
        object: Option<TermRef<'_>>,
    ) -> TripleIter<'_> {
        self.as_ref().find(subject, predicate, object)
    }
}
