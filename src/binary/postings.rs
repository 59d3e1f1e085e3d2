// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-term postings blocks: gap-encoded doc ids with inline position lists.
//!
//! Postings are the heart of an inverted index: for each term, which
//! documents contain it and where. Doc ids cluster, so we store gaps instead
//! of absolutes; the same goes for positions inside a document. Decoding
//! rebuilds both by running sum.
//!
//! Two decoders share one layout: the boolean engine only needs doc ids and
//! skips the position payloads; the phrase matcher materializes them.

use crate::error::IndexError;

use super::varbyte;

/// Decoded positional postings for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPositions {
    pub doc_id: u32,
    /// Strictly ascending token offsets of the term within the document.
    pub positions: Vec<u32>,
}

/// Encode one term's postings block.
///
/// `entries` must be strictly ascending by doc id, each with strictly
/// ascending, non-empty positions — the accumulator produces exactly that.
pub fn encode_block(entries: &[DocPositions], out: &mut Vec<u8>) {
    varbyte::encode(entries.len() as u32, out);
    let mut prev_doc = 0u32;
    for entry in entries {
        varbyte::encode(entry.doc_id - prev_doc, out);
        prev_doc = entry.doc_id;
        varbyte::encode(entry.positions.len() as u32, out);
        varbyte::encode_deltas(&entry.positions, out);
    }
}

/// Decode only the doc ids of a block, reading and discarding positions.
pub fn decode_doc_ids(bytes: &[u8]) -> Result<Vec<u32>, IndexError> {
    let (doc_freq, mut pos) = varbyte::decode(bytes)?;
    // Every doc entry needs at least two bytes, so a count beyond the block
    // bytes can only be corruption.
    if doc_freq as usize > bytes.len() {
        return Err(IndexError::MalformedPostings(
            "doc_freq exceeds block bytes",
        ));
    }

    let mut doc_ids = Vec::with_capacity(doc_freq as usize);
    let mut current = 0u32;
    for _ in 0..doc_freq {
        let (gap, used) = varbyte::decode(&bytes[pos..])?;
        pos += used;
        current = current.wrapping_add(gap);
        doc_ids.push(current);

        let (pos_count, used) = varbyte::decode(&bytes[pos..])?;
        pos += used;
        for _ in 0..pos_count {
            let (_, used) = varbyte::decode(&bytes[pos..])?;
            pos += used;
        }
    }
    Ok(doc_ids)
}

/// Decode a block with positions materialized.
pub fn decode_positional(bytes: &[u8]) -> Result<Vec<DocPositions>, IndexError> {
    let (doc_freq, mut pos) = varbyte::decode(bytes)?;
    if doc_freq as usize > bytes.len() {
        return Err(IndexError::MalformedPostings(
            "doc_freq exceeds block bytes",
        ));
    }

    let mut entries = Vec::with_capacity(doc_freq as usize);
    let mut current = 0u32;
    for _ in 0..doc_freq {
        let (gap, used) = varbyte::decode(&bytes[pos..])?;
        pos += used;
        current = current.wrapping_add(gap);

        let (pos_count, used) = varbyte::decode(&bytes[pos..])?;
        pos += used;
        if pos_count as usize > bytes.len() - pos {
            return Err(IndexError::MalformedPostings(
                "pos_count exceeds block bytes",
            ));
        }

        let mut positions = Vec::with_capacity(pos_count as usize);
        pos += varbyte::decode_deltas(&bytes[pos..], pos_count as usize, &mut positions)?;
        entries.push(DocPositions {
            doc_id: current,
            positions,
        });
    }
    Ok(entries)
}
