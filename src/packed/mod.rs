//! The packed edge-array format.
//!
//! A packed DAWG is a flat array of fixed-width edge records. Every node's
//! outgoing edges sit next to each other, so a node is addressed by the slot
//! of its first edge. Slot 0 is a header, slot 1 starts the root's edges and
//! two 4-byte little-endian counts (words, then nodes) follow the array.

/// Bit layout of records and the header.
pub mod record;
/// Record width selection.
pub mod width;
/// Encoding and decoding errors.
pub mod error;
/// Dense node numbering used for layout.
pub mod renumber;
/// DAWG to packed records.
pub mod encoder;
/// Packed records back to lookups.
pub mod reader;

pub use encoder::{encode, EncodedDawg, TRAILER_LEN};
pub use error::{DecodeError, EncodeError};
pub use reader::{PackedDawg, PackedWords};
pub use record::{EdgeRecord, Header};
pub use renumber::{Numbering, Slot};
pub use width::ByteWidth;
