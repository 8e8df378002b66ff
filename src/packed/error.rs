//! Error types for encoding and decoding packed DAWGs.

use thiserror::Error;

/// Errors that can occur while linearizing or writing a DAWG.
///
/// All of them abort the encoding; nothing is written once one is detected.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// An edge label outside `a`-`z` reached the encoder.
    #[error("symbol {symbol:?} cannot be encoded; only 'a' through 'z' are supported")]
    AlphabetOverflow {
        /// The offending label.
        symbol: char,
    },

    /// The last record of the stream lacks its end-of-list bit, so a reader
    /// could walk past the end of the array.
    #[error("edge record {index} is the last one but is not marked end-of-list")]
    InconsistentEdgeStream {
        /// Slot of the offending record.
        index: usize,
    },

    /// A value does not fit the field it has to be stored in.
    #[error("value {value} does not fit: the limit is {limit}")]
    ByteWidthOverflow {
        /// The value that had to be stored.
        value: u64,
        /// Exclusive upper bound of the field.
        limit: u64,
    },

    /// Writing the packed bytes failed.
    #[error("failed to write packed DAWG")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while loading a packed DAWG.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Fewer bytes than a header and trailer need.
    #[error("packed DAWG is truncated: {len} bytes")]
    Truncated {
        /// Length of the input.
        len: usize,
    },

    /// The header record is not valid.
    #[error("invalid header record {word:#010x}")]
    BadHeader {
        /// The raw header word.
        word: u32,
    },

    /// The input length disagrees with the slot count in the header.
    #[error("packed DAWG should be {expected} bytes long but is {actual}")]
    LengthMismatch {
        /// Length implied by the header.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A record carries a symbol code outside 1..=26.
    #[error("edge record {index} has invalid symbol code {code}")]
    InvalidSymbol {
        /// Slot of the record.
        index: usize,
        /// The symbol code found.
        code: u8,
    },

    /// A record points past the end of the edge array.
    #[error("edge record {index} points to slot {target}, past the end of the array")]
    IndexOutOfRange {
        /// Slot of the record.
        index: usize,
        /// The target slot.
        target: u32,
    },

    /// The last record lacks its end-of-list bit.
    #[error("the last edge record is not marked end-of-list")]
    MissingEndOfList,

    /// Following targets leads back to an edge list already on the path.
    #[error("edge record {index} closes a cycle")]
    Cycle {
        /// Slot of the record that closes the cycle.
        index: usize,
    },

    /// Reading the input failed.
    #[error("failed to read packed DAWG")]
    Io(#[from] std::io::Error),
}
