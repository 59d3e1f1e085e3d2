// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional phrase and bounded-window proximity matching.
//!
//! `phrase_search` takes already-analyzed terms: stemming is not idempotent,
//! so the primitive must not re-analyze its input. When `max_dist` equals
//! the term count, the match degenerates to exact adjacency in order;
//! otherwise any in-order placement whose span from the first to the last
//! matched position stays within `max_dist` qualifies.
//!
//! The boolean grammar does not expose this operation; it is a library
//! primitive for direct callers.

use crate::error::IndexError;
use crate::loader::Index;

use super::set_ops;

/// Return ascending doc ids containing `terms` in order within `max_dist`.
pub fn phrase_search(
    index: &Index,
    terms: &[String],
    max_dist: u32,
) -> Result<Vec<u32>, IndexError> {
    if terms.is_empty() {
        return Ok(Vec::new());
    }

    let mut candidates = index.doc_ids(&terms[0])?;
    for term in &terms[1..] {
        candidates = set_ops::intersect(&candidates, &index.doc_ids(term)?);
    }
    if candidates.is_empty() {
        return Ok(candidates);
    }

    // One positional decode per term, reused across every candidate doc.
    let mut term_postings = Vec::with_capacity(terms.len());
    for term in terms {
        term_postings.push(index.positional_postings(term)?);
    }

    let exact = max_dist as usize == terms.len();
    let mut matched = Vec::new();

    'docs: for &doc_id in &candidates {
        let mut lists: Vec<&[u32]> = Vec::with_capacity(terms.len());
        for postings in &term_postings {
            // Linear scan; the candidate set is an intersection and stays
            // small in practice.
            match postings.iter().find(|entry| entry.doc_id == doc_id) {
                Some(entry) if !entry.positions.is_empty() => lists.push(&entry.positions),
                _ => continue 'docs,
            }
        }
        if window_match(&lists, max_dist, exact) {
            matched.push(doc_id);
        }
    }
    Ok(matched)
}

/// Depth-first search for ascending positions `p_0 < … < p_{k-1}`, one from
/// each list. The window is anchored at `p_0`; in exact mode each position
/// must follow its predecessor immediately.
fn window_match(lists: &[&[u32]], max_dist: u32, exact: bool) -> bool {
    for &first in lists[0] {
        if extend(lists, 1, first, first, max_dist, exact) {
            return true;
        }
    }
    false
}

fn extend(lists: &[&[u32]], depth: usize, prev: u32, first: u32, max_dist: u32, exact: bool) -> bool {
    if depth == lists.len() {
        return true;
    }
    for &pos in lists[depth] {
        if pos <= prev {
            continue;
        }
        if exact && pos != prev + 1 {
            continue;
        }
        if pos - first > max_dist {
            continue;
        }
        if extend(lists, depth + 1, pos, first, max_dist, exact) {
            return true;
        }
    }
    false
}
