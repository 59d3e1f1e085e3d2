//! Shared corpus fixtures for integration and property tests.

#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;

use talpa::{analyze, write_index, DocRecord, Index, PostingsAccumulator};

/// Build an index from `(url, title, body)` records and load it back.
pub fn build_corpus(records: &[(&str, &str, &str)]) -> (TempDir, Index) {
    let dir = TempDir::new().expect("create temp dir");
    write_corpus(dir.path(), records);
    let index = Index::open(dir.path()).expect("open index");
    (dir, index)
}

/// Write the three index files for `records` into `dir`, the way the
/// indexer binary does: analyze each body, feed the accumulator in doc-id
/// order, serialize.
pub fn write_corpus(dir: &Path, records: &[(&str, &str, &str)]) {
    let mut docs = Vec::new();
    let mut accumulator = PostingsAccumulator::new();
    for (doc_id, (url, title, body)) in records.iter().enumerate() {
        for (position, token) in analyze(body).into_iter().enumerate() {
            accumulator.add(token, doc_id as u32, position as u32);
        }
        docs.push(DocRecord {
            url: (*url).to_owned(),
            title: (*title).to_owned(),
        });
    }
    write_index(dir, &docs, accumulator).expect("write index");
}

/// Render result doc ids as the REPL's `<title> (<url>)` rows.
pub fn titles(index: &Index, doc_ids: &[u32]) -> Vec<String> {
    doc_ids
        .iter()
        .map(|&doc_id| {
            let doc = index.doc(doc_id).expect("doc id in range");
            format!("{} ({})", doc.title, doc.url)
        })
        .collect()
}
