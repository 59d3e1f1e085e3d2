// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index loading and on-demand postings decoding.
//!
//! All three files are read fully into memory. The doc table and the term
//! dictionary are materialized; the postings file stays an opaque byte
//! buffer indexed by the offsets the dictionary carries. Nothing mutates
//! after [`Index::open`] returns, so the structure can be shared freely;
//! decoded postings are transient per query.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::binary::{
    postings::{self, DocPositions},
    MAGIC_DICT, MAGIC_DOCS, MAGIC_POST, PREAMBLE_SIZE, VERSION,
};
use crate::error::IndexError;

/// Immutable attributes of one indexed document.
#[derive(Debug, Clone)]
pub struct DocInfo {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Copy)]
struct TermEntry {
    offset: u64,
    doc_freq: u32,
}

/// A loaded index: doc table, term dictionary, raw postings blob.
pub struct Index {
    docs: Vec<DocInfo>,
    dict: HashMap<String, TermEntry>,
    postings: Vec<u8>,
}

impl Index {
    /// Load `index.docs`, `index.dict` and `index.postings` from `dir`.
    pub fn open(dir: &Path) -> Result<Self, IndexError> {
        let docs = load_docs(&dir.join("index.docs"))?;
        let dict = load_dict(&dir.join("index.dict"))?;
        let postings = load_postings(&dir.join("index.postings"))?;
        Ok(Self {
            docs,
            dict,
            postings,
        })
    }

    pub fn doc_count(&self) -> u32 {
        self.docs.len() as u32
    }

    pub fn term_count(&self) -> usize {
        self.dict.len()
    }

    /// Look up one document by id.
    pub fn doc(&self, doc_id: u32) -> Result<&DocInfo, IndexError> {
        self.docs
            .get(doc_id as usize)
            .ok_or(IndexError::DocOutOfBounds(doc_id))
    }

    /// The whole doc table, in doc-id order.
    pub fn docs(&self) -> &[DocInfo] {
        &self.docs
    }

    /// Iterate dictionary entries as `(term, doc_freq)`, in arbitrary order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.dict
            .iter()
            .map(|(term, entry)| (term.as_str(), entry.doc_freq))
    }

    /// Size of the raw postings blob, preamble included.
    pub fn postings_bytes(&self) -> usize {
        self.postings.len()
    }

    /// Sorted doc ids for `term`; empty when the term is absent.
    ///
    /// Position payloads are decoded only to be discarded — the stream is
    /// not self-framed per document.
    pub fn doc_ids(&self, term: &str) -> Result<Vec<u32>, IndexError> {
        match self.block(term)? {
            Some(block) => postings::decode_doc_ids(block),
            None => Ok(Vec::new()),
        }
    }

    /// Full positional postings for `term`; empty when the term is absent.
    pub fn positional_postings(&self, term: &str) -> Result<Vec<DocPositions>, IndexError> {
        match self.block(term)? {
            Some(block) => postings::decode_positional(block),
            None => Ok(Vec::new()),
        }
    }

    fn block(&self, term: &str) -> Result<Option<&[u8]>, IndexError> {
        let Some(entry) = self.dict.get(term) else {
            return Ok(None);
        };
        let offset = entry.offset as usize;
        if offset > self.postings.len() {
            return Err(IndexError::MalformedPostings(
                "postings offset beyond end of file",
            ));
        }
        Ok(Some(&self.postings[offset..]))
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, IndexError> {
    let mut file = File::open(path).map_err(|source| IndexError::Open {
        path: path.to_owned(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn truncated(file: &'static str) -> IndexError {
    IndexError::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("{file}: unexpected end of file"),
    ))
}

/// Validate the six-byte preamble: magic, then exactly version 3. The
/// version check is this build's documented compatibility policy.
fn check_preamble(bytes: &[u8], file: &'static str, expected: [u8; 4]) -> Result<(), IndexError> {
    if bytes.len() < PREAMBLE_SIZE {
        return Err(truncated(file));
    }
    let found = [bytes[0], bytes[1], bytes[2], bytes[3]];
    if found != expected {
        return Err(IndexError::BadMagic {
            file,
            expected,
            found,
        });
    }
    let version = u16::from_le_bytes([bytes[4], bytes[5]]);
    if version != VERSION {
        return Err(IndexError::BadVersion {
            file,
            expected: VERSION,
            found: version,
        });
    }
    Ok(())
}

/// Bounds-checked little-endian reader over a loaded file.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    file: &'static str,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8], file: &'static str) -> Self {
        Self {
            bytes,
            pos: PREAMBLE_SIZE,
            file,
        }
    }

    fn seek(&mut self, pos: usize) -> Result<(), IndexError> {
        if pos > self.bytes.len() {
            return Err(truncated(self.file));
        }
        self.pos = pos;
        Ok(())
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], IndexError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| truncated(self.file))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u8(&mut self) -> Result<u8, IndexError> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16, IndexError> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32, IndexError> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn u64(&mut self) -> Result<u64, IndexError> {
        let b = self.take(8)?;
        Ok(u64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// u16 length prefix + raw bytes, decoded leniently.
    fn field(&mut self) -> Result<String, IndexError> {
        let len = self.u16()? as usize;
        let bytes = self.take(len)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

fn load_docs(path: &Path) -> Result<Vec<DocInfo>, IndexError> {
    let bytes = read_file(path)?;
    check_preamble(&bytes, "index.docs", MAGIC_DOCS)?;
    let mut cur = Cursor::new(&bytes, "index.docs");

    let doc_count = cur.u32()? as usize;
    // A count larger than the offset table itself can only be corruption;
    // cap the reservation by what the file can actually hold.
    let mut offsets = Vec::with_capacity(doc_count.min(bytes.len() / 8));
    for _ in 0..doc_count {
        offsets.push(cur.u64()?);
    }

    let mut docs = Vec::with_capacity(offsets.len());
    for &offset in &offsets {
        cur.seek(offset as usize)?;
        let url = cur.field()?;
        let title = cur.field()?;
        docs.push(DocInfo { url, title });
    }
    Ok(docs)
}

fn load_dict(path: &Path) -> Result<HashMap<String, TermEntry>, IndexError> {
    let bytes = read_file(path)?;
    check_preamble(&bytes, "index.dict", MAGIC_DICT)?;
    let mut cur = Cursor::new(&bytes, "index.dict");

    let term_count = cur.u32()? as usize;
    // Smallest possible record is 13 bytes (empty term).
    let mut dict = HashMap::with_capacity(term_count.min(bytes.len() / 13));
    for _ in 0..term_count {
        let len = cur.u8()? as usize;
        let term = String::from_utf8(cur.take(len)?.to_vec()).map_err(|_| {
            IndexError::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                "index.dict: term is not valid UTF-8",
            ))
        })?;
        let offset = cur.u64()?;
        let doc_freq = cur.u32()?;
        dict.insert(term, TermEntry { offset, doc_freq });
    }
    Ok(dict)
}

fn load_postings(path: &Path) -> Result<Vec<u8>, IndexError> {
    let bytes = read_file(path)?;
    check_preamble(&bytes, "index.postings", MAGIC_POST)?;
    Ok(bytes)
}
