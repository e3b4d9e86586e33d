use crate::{TripleIter, TripleSource};
use rdf_paths_model::{Graph, NamedNodeRef, SubjectRef, TermRef, Triple, TripleRef};

/// Answers lookups from the indexes of the in-memory [Graph].
///
/// The matches are materialized before returning, so the iterator only borrows the graph.
impl TripleSource for Graph {
    fn find(
        &self,
        subject: Option<TermRef<'_>>,
        predicate: Option<NamedNodeRef<'_>>,
        object: Option<TermRef<'_>>,
    ) -> TripleIter<'_> {
        let matches = |triple: &TripleRef<'_>| {
            predicate.map_or(true, |predicate| triple.predicate == predicate)
                && object.map_or(true, |object| triple.object == object)
        };

        let triples: Vec<Triple> = match (subject, predicate, object) {
            (Some(subject), _, _) => match as_subject(subject) {
                Some(subject) => self
                    .triples_for_subject(subject)
                    .filter(matches)
                    .map(TripleRef::into_owned)
                    .collect(),
                // A literal is never the subject of a triple.
                None => Vec::new(),
            },
            (None, _, Some(object)) => self
                .triples_for_object(object)
                .filter(matches)
                .map(TripleRef::into_owned)
                .collect(),
            (None, Some(predicate), None) => self
                .triples_for_predicate(predicate)
                .map(TripleRef::into_owned)
                .collect(),
            (None, None, None) => self.iter().map(TripleRef::into_owned).collect(),
        };

        Box::new(triples.into_iter().map(Ok))
    }
}

fn as_subject(term: TermRef<'_>) -> Option<SubjectRef<'_>> {
    match term {
        TermRef::NamedNode(node) => Some(node.into()),
        TermRef::BlankNode(node) => Some(node.into()),
        _ => None,
    }
}
