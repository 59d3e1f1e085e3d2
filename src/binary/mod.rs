// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! On-disk format for the three index files.
//!
//! All multi-byte integers are little-endian. Strings are raw bytes with a
//! length prefix, never null-terminated. Every file opens with the same
//! six-byte preamble: four magic bytes and a u16 version.
//!
//! ```text
//! index.docs                      index.dict
//! ┌──────────────────────────┐    ┌──────────────────────────┐
//! │ magic "DOCS"             │    │ magic "DICT"             │
//! │ version: u16 = 3         │    │ version: u16 = 3         │
//! │ doc_count: u32           │    │ term_count: u32 (written │
//! │ offsets: doc_count × u64 │    │   last, backpatched)     │
//! │ records:                 │    │ entries:                 │
//! │   url_len: u16           │    │   term_len: u8 (≤ 255)   │
//! │   url: bytes             │    │   term: bytes            │
//! │   title_len: u16         │    │   post_off: u64          │
//! │   title: bytes           │    │   doc_freq: u32          │
//! └──────────────────────────┘    └──────────────────────────┘
//!
//! index.postings
//! ┌────────────────────────────────────────────────┐
//! │ magic "POST", version: u16 = 3                 │
//! │ per-term blocks, each:                         │
//! │   varbyte doc_freq                             │
//! │   doc_freq × {                                 │
//! │     varbyte doc_id gap   (gaps restart at 0)   │
//! │     varbyte pos_count                          │
//! │     pos_count × varbyte position gap           │
//! │   }                                            │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! `post_off` is the absolute byte offset of the term's block inside
//! `index.postings`, so the first block sits at offset 6. The stream is not
//! self-framed per document: skipping a document's positions still means
//! decoding and discarding its varbytes.

pub mod postings;
pub mod varbyte;

/// Magic bytes of `index.docs`.
pub const MAGIC_DOCS: [u8; 4] = *b"DOCS";

/// Magic bytes of `index.dict`.
pub const MAGIC_DICT: [u8; 4] = *b"DICT";

/// Magic bytes of `index.postings`.
pub const MAGIC_POST: [u8; 4] = *b"POST";

/// Format version, shared by all three files.
pub const VERSION: u16 = 3;

/// Byte size of the shared preamble (magic + version).
pub const PREAMBLE_SIZE: usize = 6;

/// Dictionary terms carry a one-byte length; longer stems are cut on write.
pub const MAX_TERM_LEN: usize = 255;

/// URL and title fields carry a two-byte length.
pub const MAX_FIELD_LEN: usize = 65_535;
