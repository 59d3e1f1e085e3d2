// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serialization of the three index files.
//!
//! One pass over the accumulator: each term's dictionary record and postings
//! block are streamed out together, then the dictionary's `term_count` field
//! is backpatched. Record offsets in `index.docs` are computed up front
//! because the offset table precedes the records. Files are created fresh;
//! a failed build may leave partial files behind — there is no rollback.

use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use crate::accumulate::PostingsAccumulator;
use crate::binary::{
    postings, MAGIC_DICT, MAGIC_DOCS, MAGIC_POST, MAX_FIELD_LEN, MAX_TERM_LEN, PREAMBLE_SIZE,
    VERSION,
};
use crate::error::IndexError;

/// Document attributes captured at ingestion, in doc-id order.
#[derive(Debug, Clone)]
pub struct DocRecord {
    pub url: String,
    pub title: String,
}

/// Totals reported by a successful write.
#[derive(Debug, Clone, Copy)]
pub struct WriteSummary {
    pub doc_count: u32,
    pub term_count: u32,
    /// Final size of `index.postings`, preamble included.
    pub postings_bytes: u64,
}

/// Write `index.docs`, `index.dict` and `index.postings` into `dir`.
pub fn write_index(
    dir: &Path,
    docs: &[DocRecord],
    accumulator: PostingsAccumulator,
) -> Result<WriteSummary, IndexError> {
    write_docs_file(&dir.join("index.docs"), docs)?;
    let (term_count, postings_bytes) = write_dict_and_postings(
        &dir.join("index.dict"),
        &dir.join("index.postings"),
        accumulator,
    )?;
    Ok(WriteSummary {
        doc_count: docs.len() as u32,
        term_count,
        postings_bytes,
    })
}

fn create(path: &Path) -> Result<BufWriter<File>, IndexError> {
    let file = File::create(path).map_err(|source| IndexError::Open {
        path: path.to_owned(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

fn write_docs_file(path: &Path, docs: &[DocRecord]) -> Result<(), IndexError> {
    let mut w = create(path)?;

    w.write_all(&MAGIC_DOCS)?;
    w.write_all(&VERSION.to_le_bytes())?;
    w.write_all(&(docs.len() as u32).to_le_bytes())?;

    // Offsets are known up front: records start right after the table.
    let mut offset = (PREAMBLE_SIZE + 4 + docs.len() * 8) as u64;
    for doc in docs {
        w.write_all(&offset.to_le_bytes())?;
        let url_len = doc.url.len().min(MAX_FIELD_LEN);
        let title_len = doc.title.len().min(MAX_FIELD_LEN);
        offset += (2 + url_len + 2 + title_len) as u64;
    }

    for doc in docs {
        write_field(&mut w, &doc.url)?;
        write_field(&mut w, &doc.title)?;
    }
    w.flush()?;
    Ok(())
}

/// Length-prefixed field, silently cut at the u16 cap.
fn write_field<W: Write>(w: &mut W, value: &str) -> Result<(), IndexError> {
    let len = value.len().min(MAX_FIELD_LEN);
    w.write_all(&(len as u16).to_le_bytes())?;
    w.write_all(&value.as_bytes()[..len])?;
    Ok(())
}

fn write_dict_and_postings(
    dict_path: &Path,
    post_path: &Path,
    accumulator: PostingsAccumulator,
) -> Result<(u32, u64), IndexError> {
    let mut dict = create(dict_path)?;
    let mut post = create(post_path)?;

    dict.write_all(&MAGIC_DICT)?;
    dict.write_all(&VERSION.to_le_bytes())?;
    dict.write_all(&0u32.to_le_bytes())?; // term_count, backpatched below

    post.write_all(&MAGIC_POST)?;
    post.write_all(&VERSION.to_le_bytes())?;

    let mut term_count = 0u32;
    let mut post_offset = PREAMBLE_SIZE as u64;
    let mut block = Vec::new();

    for (term, entries) in accumulator.into_terms() {
        term_count += 1;

        let term_bytes = term.as_bytes();
        let term_len = term_bytes.len().min(MAX_TERM_LEN);
        dict.write_all(&[term_len as u8])?;
        dict.write_all(&term_bytes[..term_len])?;
        dict.write_all(&post_offset.to_le_bytes())?;
        dict.write_all(&(entries.len() as u32).to_le_bytes())?;

        block.clear();
        postings::encode_block(&entries, &mut block);
        post.write_all(&block)?;
        post_offset += block.len() as u64;
    }

    dict.seek(SeekFrom::Start(PREAMBLE_SIZE as u64))?;
    dict.write_all(&term_count.to_le_bytes())?;
    dict.flush()?;
    post.flush()?;
    Ok((term_count, post_offset))
}
