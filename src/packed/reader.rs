//! Loading and querying packed DAWGs.

use std::path::Path;

use log::debug;

use crate::dawg::DawgChar;

use super::encoder::TRAILER_LEN;
use super::error::DecodeError;
use super::record::{EdgeRecord, Header, SYMBOL_MASK};
use super::width::ByteWidth;

/// A packed DAWG loaded back into memory.
///
/// Loading validates the whole array, so lookups never index out of bounds
/// and never loop.
///
/// # Examples
///
/// ```
/// use packed_dawg::dawg::build_dawg;
/// use packed_dawg::packed::{encode, PackedDawg};
///
/// let bytes = encode(&build_dawg(["bake", "cake"]).unwrap()).unwrap().to_bytes().unwrap();
/// let packed = PackedDawg::from_bytes(&bytes).unwrap();
/// assert_eq!(packed.words().collect::<Vec<_>>(), ["bake", "cake"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackedDawg {
    header: Header,
    records: Vec<EdgeRecord>,
    word_count: u32,
    node_count: u32,
}

fn read_le(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .rev()
        .fold(0, |word, &byte| word << 8 | u32::from(byte))
}

impl PackedDawg {
    /// Parses and validates packed bytes.
    ///
    /// # Errors
    ///
    /// A [`DecodeError`] describing the first problem found.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let truncated = || DecodeError::Truncated { len: bytes.len() };
        let first = *bytes.first().ok_or_else(truncated)?;
        let width = ByteWidth::from_bytes(first & SYMBOL_MASK as u8).ok_or(DecodeError::BadHeader {
            word: u32::from(first),
        })?;
        let w = width.bytes();
        if bytes.len() < w + TRAILER_LEN {
            return Err(truncated());
        }

        let word = read_le(&bytes[..w]);
        let header = Header::unpack(word)
            .filter(|h| h.byte_width == width && h.slot_count > 0)
            .ok_or(DecodeError::BadHeader { word })?;
        let slots = header.slot_count as usize;
        let expected = slots * w + TRAILER_LEN;
        if bytes.len() != expected {
            return Err(DecodeError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let (body, trailer) = bytes.split_at(slots * w);
        let records: Vec<EdgeRecord> = body.chunks_exact(w).map(read_le).map(EdgeRecord::unpack).collect();
        validate(&records)?;

        let packed = PackedDawg {
            header,
            records,
            word_count: read_le(&trailer[..4]),
            node_count: read_le(&trailer[4..]),
        };
        debug!(
            "loaded packed DAWG: {} slots of {} bytes, {} words, {} nodes",
            slots, w, packed.word_count, packed.node_count
        );
        Ok(packed)
    }

    /// Reads and validates a packed DAWG file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        Self::from_bytes(&std::fs::read(path)?)
    }

    /// Bytes per record.
    pub fn byte_width(&self) -> ByteWidth {
        self.header.byte_width
    }

    /// Number of records, header included.
    pub fn slot_count(&self) -> usize {
        self.records.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.records.len() - 1
    }

    /// Word count from the trailer.
    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    /// Node count from the trailer, root excluded.
    pub fn node_count(&self) -> u32 {
        self.node_count
    }

    /// The header record.
    pub fn header(&self) -> Header {
        self.header
    }

    /// All records. Slot 0 is the header seen as a plain record.
    pub fn records(&self) -> &[EdgeRecord] {
        &self.records
    }

    /// Scans the edge list starting at `start` for `code`.
    fn find(&self, start: usize, code: u8) -> Option<EdgeRecord> {
        for record in &self.records[start..] {
            if record.symbol == code {
                return Some(*record);
            }
            if record.end_of_list {
                break;
            }
        }
        None
    }

    /// Returns true if `word` is stored. Prefixes of stored words are not.
    pub fn contains(&self, word: &str) -> bool {
        let mut list = 1;
        let mut accepted = false;
        for ch in word.chars() {
            if list == 0 || list >= self.records.len() {
                return false;
            }
            let Some(record) = ch.packed_code().and_then(|code| self.find(list, code)) else {
                return false;
            };
            accepted = record.is_final;
            list = record.target as usize;
        }
        accepted
    }

    /// Iterates over the stored words in ascending order.
    pub fn words(&self) -> PackedWords<'_> {
        PackedWords {
            records: &self.records,
            stack: vec![(self.records.len() > 1).then_some(1)],
            prefix: String::new(),
        }
    }
}

/// Checks every record, then that the target graph is acyclic.
fn validate(records: &[EdgeRecord]) -> Result<(), DecodeError> {
    for (index, record) in records.iter().enumerate().skip(1) {
        if char::from_packed_code(record.symbol).is_none() {
            return Err(DecodeError::InvalidSymbol {
                index,
                code: record.symbol,
            });
        }
        if record.target as usize >= records.len() {
            return Err(DecodeError::IndexOutOfRange {
                index,
                target: record.target,
            });
        }
    }
    if records.len() > 1 && records.last().is_some_and(|r| !r.end_of_list) {
        return Err(DecodeError::MissingEndOfList);
    }
    check_acyclic(records)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    New,
    OnPath,
    Done,
}

/// Depth-first walk over edge lists, keyed by the slot they start at.
fn check_acyclic(records: &[EdgeRecord]) -> Result<(), DecodeError> {
    if records.len() <= 1 {
        return Ok(());
    }
    let mut state = vec![Visit::New; records.len()];
    // (first slot of the list, next record to look at)
    let mut stack = vec![(1, Some(1))];
    state[1] = Visit::OnPath;
    while let Some(top) = stack.last_mut() {
        let (start, cursor) = *top;
        let Some(index) = cursor else {
            state[start] = Visit::Done;
            stack.pop();
            continue;
        };
        let record = records[index];
        top.1 = (!record.end_of_list).then_some(index + 1);
        let target = record.target as usize;
        if target == 0 {
            continue;
        }
        match state[target] {
            Visit::OnPath => return Err(DecodeError::Cycle { index }),
            Visit::New => {
                state[target] = Visit::OnPath;
                stack.push((target, Some(target)));
            }
            Visit::Done => {}
        }
    }
    Ok(())
}

/// Depth-first iterator over the words of a [`PackedDawg`].
pub struct PackedWords<'a> {
    records: &'a [EdgeRecord],
    /// Per open edge list, the next record to visit.
    stack: Vec<Option<usize>>,
    prefix: String,
}

impl Iterator for PackedWords<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(top) = self.stack.last_mut() {
            let Some(index) = *top else {
                self.stack.pop();
                self.prefix.pop();
                continue;
            };
            let record = self.records[index];
            *top = (!record.end_of_list).then_some(index + 1);
            self.prefix.push(record.label().unwrap_or(char::REPLACEMENT_CHARACTER));
            self.stack.push((record.target != 0).then_some(record.target as usize));
            if record.is_final {
                return Some(self.prefix.clone());
            }
        }
        None
    }
}
