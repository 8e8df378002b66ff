//! Bit layout of a single packed edge record.
//!
//! ```text
//!  31                                7   6     5    4        0
//! ┌───────────────────────────────────┬─────┬───────┬──────────┐
//! │ index of the target's first edge  │ eol │ final │  symbol  │
//! └───────────────────────────────────┴─────┴───────┴──────────┘
//! ```
//!
//! Records are stored truncated to the selected byte width, so the index field
//! is `8 * width - 7` bits wide.

use std::fmt;

use crate::dawg::DawgChar;

use super::width::ByteWidth;

/// Mask of the symbol field.
pub const SYMBOL_MASK: u32 = 0x1F;
/// Set when the edge's target is accepting.
pub const FINAL_BIT: u32 = 1 << 5;
/// Set on the last outgoing edge of a node.
pub const END_OF_LIST_BIT: u32 = 1 << 6;
/// Position of the index field.
pub const INDEX_SHIFT: u32 = 7;

/// One decoded edge of the packed array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdgeRecord {
    /// 1-based symbol code, 0 only in slot 0.
    pub symbol: u8,
    /// Whether the target node is accepting.
    pub is_final: bool,
    /// Whether this is the last edge of its source node.
    pub end_of_list: bool,
    /// Slot of the target's first edge, 0 if the target has no edges.
    pub target: u32,
}

impl EdgeRecord {
    /// Placeholder occupying slot 0 until the header replaces it.
    pub const SENTINEL: EdgeRecord = EdgeRecord {
        symbol: 0,
        is_final: true,
        end_of_list: true,
        target: 0,
    };

    /// Packs the record into its 32-bit form.
    #[inline]
    pub fn pack(self) -> u32 {
        let mut word = u32::from(self.symbol) & SYMBOL_MASK | self.target << INDEX_SHIFT;
        if self.is_final {
            word |= FINAL_BIT;
        }
        if self.end_of_list {
            word |= END_OF_LIST_BIT;
        }
        word
    }

    /// Splits a 32-bit word into its fields.
    #[inline]
    pub fn unpack(word: u32) -> Self {
        EdgeRecord {
            symbol: (word & SYMBOL_MASK) as u8,
            is_final: word & FINAL_BIT != 0,
            end_of_list: word & END_OF_LIST_BIT != 0,
            target: word >> INDEX_SHIFT,
        }
    }

    /// The edge label this record carries.
    pub fn label<C: DawgChar>(self) -> Option<C> {
        C::from_packed_code(self.symbol)
    }
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label::<char>().unwrap_or('-');
        write!(
            f,
            "{label} {} {} {}",
            u8::from(self.is_final),
            u8::from(self.end_of_list),
            self.target
        )
    }
}

/// The record stored in slot 0.
///
/// It reuses the final and end-of-list bits of a normal record (both set) but
/// carries the byte width in the symbol bits and the slot count, header
/// included, in the index field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Width of every record in the file.
    pub byte_width: ByteWidth,
    /// Number of records, header included.
    pub slot_count: u32,
}

impl Header {
    /// Packs the header into its 32-bit form.
    pub fn pack(self) -> u32 {
        FINAL_BIT | END_OF_LIST_BIT | self.byte_width.bytes() as u32 | self.slot_count << INDEX_SHIFT
    }

    /// Reads a header word. `None` if the flag bits or the width are invalid.
    pub fn unpack(word: u32) -> Option<Self> {
        let record = EdgeRecord::unpack(word);
        if !(record.is_final && record.end_of_list) {
            return None;
        }
        Some(Header {
            byte_width: ByteWidth::from_bytes(record.symbol)?,
            slot_count: record.target,
        })
    }
}
