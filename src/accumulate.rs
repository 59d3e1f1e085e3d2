//! In-memory posting accumulation during a build.

use std::collections::HashMap;

use crate::binary::postings::DocPositions;

/// Collects `(term, doc_id, position)` triples in ingestion order.
///
/// Callers feed non-decreasing doc ids per term and strictly increasing
/// positions per `(term, doc)` pair; both fall out of processing documents
/// in id order and emitting tokens left to right, so `add` only ever appends.
///
/// The whole structure lives in memory until the writer drains it — peak
/// residency is proportional to the total number of postings.
#[derive(Debug, Default)]
pub struct PostingsAccumulator {
    terms: HashMap<String, Vec<DocPositions>>,
}

impl PostingsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `term` at `position` within `doc_id`.
    ///
    /// Appends to the term's last doc entry when the doc id matches, and
    /// opens a new entry otherwise.
    pub fn add(&mut self, term: String, doc_id: u32, position: u32) {
        let entries = self.terms.entry(term).or_default();
        match entries.last_mut() {
            Some(last) if last.doc_id == doc_id => last.positions.push(position),
            _ => entries.push(DocPositions {
                doc_id,
                positions: vec![position],
            }),
        }
    }

    /// Number of distinct terms seen so far.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Drain the accumulated postings term by term, in arbitrary order.
    /// Dictionary order is not observable to readers: the dict is a keyed
    /// lookup.
    pub fn into_terms(self) -> impl Iterator<Item = (String, Vec<DocPositions>)> {
        self.terms.into_iter()
    }
}
