//! Linearizes a frozen DAWG into the packed edge array and writes it out.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use mark_last::MarkLastIterator;

use crate::dawg::{Dawg, DawgChar};

use super::error::EncodeError;
use super::record::{EdgeRecord, Header};
use super::renumber::Numbering;
use super::width::ByteWidth;

/// Size in bytes of the word and node count trailer.
pub const TRAILER_LEN: usize = 8;

/// A DAWG flattened into edge records, ready to be written.
///
/// Slot 0 holds [`EdgeRecord::SENTINEL`]; the header replaces it on output.
/// Every node's edges form one contiguous run in ascending label order, the
/// last flagged end-of-list. A record refers to its target by the slot of the
/// target's first edge, never by node identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedDawg {
    byte_width: ByteWidth,
    records: Vec<EdgeRecord>,
    word_count: u32,
    node_count: u32,
}

/// Flattens `dawg` into packed edge records.
///
/// # Errors
///
/// * [`EncodeError::AlphabetOverflow`] for a label outside `a`-`z`.
/// * [`EncodeError::ByteWidthOverflow`] if the edge array, the word count or
///   the node count is too large for the format.
///
/// # Examples
///
/// ```
/// use packed_dawg::dawg::build_dawg;
/// use packed_dawg::packed::{encode, PackedDawg};
///
/// let dawg = build_dawg(["cat", "cats", "dog"]).unwrap();
/// let encoded = encode(&dawg).unwrap();
/// assert_eq!(encoded.edge_count(), 7);
///
/// let packed = PackedDawg::from_bytes(&encoded.to_bytes().unwrap()).unwrap();
/// assert!(packed.contains("cats"));
/// assert!(!packed.contains("ca"));
/// ```
pub fn encode<C: DawgChar>(dawg: &Dawg<C>) -> Result<EncodedDawg, EncodeError> {
    let numbering = Numbering::new(dawg);

    // First pass: where each node's edge list starts. Leaves own no slots and
    // are referenced as 0.
    let mut first_edge = vec![0usize; numbering.len()];
    let mut slot_count = 1;
    for (dense, &slot) in numbering.order().iter().enumerate() {
        let node = numbering.resolve(dawg, slot);
        if !node.is_leaf() {
            first_edge[dense] = slot_count;
            slot_count += node.child_count();
        }
    }

    let byte_width = ByteWidth::for_slot_count(slot_count)?;
    debug!(
        "linearizing {} nodes into {} slots of {} bytes",
        numbering.len(),
        slot_count,
        byte_width.bytes()
    );

    // Second pass: emit the records.
    let mut records = Vec::with_capacity(slot_count);
    records.push(EdgeRecord::SENTINEL);
    for &slot in numbering.order() {
        let node = numbering.resolve(dawg, slot);
        for (last, (ch, target)) in node.children().mark_last() {
            let symbol = ch
                .packed_code()
                .ok_or(EncodeError::AlphabetOverflow { symbol: ch.to_char() })?;
            let target_index = first_edge[numbering.id(target)] as u64;
            records.push(EdgeRecord {
                symbol,
                is_final: dawg.node(target).is_word(),
                end_of_list: last,
                target: byte_width.check(target_index)?,
            });
        }
    }
    debug_assert_eq!(records.len(), slot_count);

    Ok(EncodedDawg {
        byte_width,
        records,
        word_count: fit_u32(dawg.word_count())?,
        node_count: fit_u32(dawg.node_count())?,
    })
}

fn fit_u32(value: usize) -> Result<u32, EncodeError> {
    u32::try_from(value).map_err(|_| EncodeError::ByteWidthOverflow {
        value: value as u64,
        limit: 1 << 32,
    })
}

impl EncodedDawg {
    /// Bytes per record.
    pub fn byte_width(&self) -> ByteWidth {
        self.byte_width
    }

    /// Number of records, header slot included.
    pub fn slot_count(&self) -> usize {
        self.records.len()
    }

    /// Number of edges, root edges included.
    pub fn edge_count(&self) -> usize {
        self.records.len() - 1
    }

    /// Words the DAWG was built from.
    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    /// Canonical nodes, root excluded.
    pub fn node_count(&self) -> u32 {
        self.node_count
    }

    /// All records, slot 0 holding the sentinel.
    pub fn records(&self) -> &[EdgeRecord] {
        &self.records
    }

    /// The header written in slot 0.
    pub fn header(&self) -> Header {
        Header {
            byte_width: self.byte_width,
            // for_slot_count() already proved the count fits the index field.
            slot_count: self.records.len() as u32,
        }
    }

    /// Size of the output in bytes.
    pub fn byte_len(&self) -> usize {
        self.records.len() * self.byte_width.bytes() + TRAILER_LEN
    }

    /// Checks that the stream ends on an end-of-list record. Done before any
    /// byte is written.
    fn validate(&self) -> Result<(), EncodeError> {
        match self.records.last() {
            Some(record) if record.end_of_list => Ok(()),
            _ => Err(EncodeError::InconsistentEdgeStream {
                index: self.records.len().saturating_sub(1),
            }),
        }
    }

    /// Writes the header, every record truncated to the byte width (least
    /// significant byte first) and the 8-byte trailer.
    ///
    /// # Errors
    ///
    /// [`EncodeError::InconsistentEdgeStream`] if the last record is not
    /// marked end-of-list, or [`EncodeError::Io`] if writing fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), EncodeError> {
        self.validate()?;
        let width = self.byte_width.bytes();
        out.write_all(&self.header().pack().to_le_bytes()[..width])?;
        for record in &self.records[1..] {
            out.write_all(&record.pack().to_le_bytes()[..width])?;
        }
        // The counts can exceed the record width, so they always take 4 bytes.
        out.write_all(&self.word_count.to_le_bytes())?;
        out.write_all(&self.node_count.to_le_bytes())?;
        Ok(())
    }

    /// Returns the packed bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut bytes = Vec::with_capacity(self.byte_len());
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Writes the packed bytes to a file.
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<(), EncodeError> {
        self.validate()?;
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }
}
