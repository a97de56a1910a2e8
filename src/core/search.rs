//! Title search over a document collection

use super::document::Document;

/// Documents whose title contains `term`, ignoring case.
///
/// An empty term matches everything. Results keep collection order and are
/// recomputed from scratch on every call.
pub fn search<'a>(documents: &'a [Document], term: &str) -> impl Iterator<Item = &'a Document> + 'a {
    let term = term.to_lowercase();
    documents
        .iter()
        .filter(move |doc| doc.title_contains_lowercase(&term))
}
