//! Error type shared by the index builder and the query engine.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while building, loading, or querying an
/// index.
///
/// Loader errors are fatal to startup. Query-time errors (a malformed
/// postings block, an out-of-range doc id) are isolated to the query that
/// triggered them.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read or write failed, including short reads of a truncated file.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The file does not start with the expected magic bytes.
    #[error("{file}: bad magic {found:?}, expected {expected:?}")]
    BadMagic {
        file: &'static str,
        expected: [u8; 4],
        found: [u8; 4],
    },

    /// The file carries a format version this build does not read.
    #[error("{file}: unsupported format version {found}, expected {expected}")]
    BadVersion {
        file: &'static str,
        expected: u16,
        found: u16,
    },

    /// A postings block failed to decode: varbyte overrun, truncated block,
    /// or a count that cannot fit in the remaining bytes.
    #[error("malformed postings: {0}")]
    MalformedPostings(&'static str),

    /// A document id outside `[0, doc_count)`.
    #[error("document id {0} out of range")]
    DocOutOfBounds(u32),
}
