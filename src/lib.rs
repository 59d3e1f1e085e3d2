//! Batch-built positional inverted index with a boolean/phrase query engine.
//!
//! # Architecture
//!
//! ```text
//! build:  stdin records ─▶ analyzer ─▶ accumulator ─▶ writer ─▶ three files
//! query:  three files ─▶ loader ─▶ boolean parser / phrase matcher ─▶ ids
//! ```
//!
//! The persistent artifacts are three little-endian files — `index.docs`,
//! `index.dict`, `index.postings` — with gap-encoded varbyte postings; see
//! [`binary`] for the exact layout. The index is write-once: a build streams
//! documents from stdin to the accumulator and serializes in a single pass,
//! and the query engine loads the result immutably, decoding postings on
//! demand per query.
//!
//! Results are plain ascending doc-id sets; there is no scoring.

pub mod accumulate;
pub mod analyzer;
pub mod binary;
pub mod error;
pub mod loader;
pub mod search;
pub mod writer;

pub use accumulate::PostingsAccumulator;
pub use analyzer::{analyze, analyze_term};
pub use binary::postings::DocPositions;
pub use error::IndexError;
pub use loader::{DocInfo, Index};
pub use search::{evaluate, phrase_search};
pub use writer::{write_index, DocRecord, WriteSummary};
