//! Record width selection.
//!
//! The bands are derived from the width of the index field rather than listed
//! as constants, so they are monotonic by construction.

use super::error::EncodeError;
use super::record::INDEX_SHIFT;

/// Number of bytes each record occupies in the packed file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByteWidth {
    /// 9-bit index field.
    Two,
    /// 17-bit index field.
    Three,
    /// 25-bit index field.
    Four,
}

impl ByteWidth {
    /// All widths, narrowest first.
    pub const ALL: [ByteWidth; 3] = [ByteWidth::Two, ByteWidth::Three, ByteWidth::Four];

    /// Bytes per record.
    pub fn bytes(self) -> usize {
        match self {
            ByteWidth::Two => 2,
            ByteWidth::Three => 3,
            ByteWidth::Four => 4,
        }
    }

    /// Width of the index field in bits.
    pub fn index_bits(self) -> u32 {
        self.bytes() as u32 * 8 - INDEX_SHIFT
    }

    /// Exclusive upper bound of values the index field can hold.
    pub fn index_limit(self) -> u64 {
        1 << self.index_bits()
    }

    /// The narrowest width whose index field can hold every slot index and
    /// the slot count itself.
    ///
    /// # Errors
    ///
    /// [`EncodeError::ByteWidthOverflow`] if even four bytes are too narrow.
    pub fn for_slot_count(slot_count: usize) -> Result<Self, EncodeError> {
        let value = slot_count as u64;
        Self::ALL
            .into_iter()
            .find(|width| value < width.index_limit())
            .ok_or(EncodeError::ByteWidthOverflow {
                value,
                limit: ByteWidth::Four.index_limit(),
            })
    }

    /// Parses the width stored in a header.
    pub fn from_bytes(bytes: u8) -> Option<Self> {
        match bytes {
            2 => Some(ByteWidth::Two),
            3 => Some(ByteWidth::Three),
            4 => Some(ByteWidth::Four),
            _ => None,
        }
    }

    /// Checks that `value` fits the index field.
    pub(crate) fn check(self, value: u64) -> Result<u32, EncodeError> {
        if value < self.index_limit() {
            Ok(value as u32)
        } else {
            Err(EncodeError::ByteWidthOverflow {
                value,
                limit: self.index_limit(),
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn index_bits_per_width() {
        assert_eq!(ByteWidth::Two.index_bits(), 9);
        assert_eq!(ByteWidth::Three.index_bits(), 17);
        assert_eq!(ByteWidth::Four.index_bits(), 25);
    }

    #[test]
    fn band_edges() {
        assert_eq!(ByteWidth::for_slot_count(1).unwrap(), ByteWidth::Two);
        assert_eq!(ByteWidth::for_slot_count(511).unwrap(), ByteWidth::Two);
        assert_eq!(ByteWidth::for_slot_count(512).unwrap(), ByteWidth::Three);
        assert_eq!(ByteWidth::for_slot_count((1 << 17) - 1).unwrap(), ByteWidth::Three);
        assert_eq!(ByteWidth::for_slot_count(1 << 17).unwrap(), ByteWidth::Four);
        assert_eq!(ByteWidth::for_slot_count((1 << 25) - 1).unwrap(), ByteWidth::Four);
    }

    #[test]
    fn too_many_slots_overflow() {
        let err = ByteWidth::for_slot_count(1 << 25).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::ByteWidthOverflow { value, limit } if value == 1 << 25 && limit == 1 << 25
        ));
    }

    #[test]
    fn bands_are_monotonic() {
        for pair in ByteWidth::ALL.windows(2) {
            assert!(pair[0].index_limit() < pair[1].index_limit());
        }
    }

    #[test]
    fn selected_width_holds_largest_index_and_count() {
        for slots in [1usize, 2, 300, 511, 512, 513, 70_000, 131_071, 131_072, 1 << 20] {
            let width = ByteWidth::for_slot_count(slots).unwrap();
            assert!(width.check(slots as u64).is_ok(), "{slots}");
            assert!(width.check(slots as u64 - 1).is_ok(), "{slots}");
            // The record word must also fit in the selected number of bytes.
            let max_word = (slots as u64) << INDEX_SHIFT | 0x7F;
            assert!(max_word < 1 << (8 * width.bytes()), "{slots}");
        }
    }

    #[test]
    fn check_rejects_values_past_the_field() {
        assert!(ByteWidth::Two.check(511).is_ok());
        assert!(ByteWidth::Two.check(512).is_err());
    }

    #[test]
    fn header_widths_round_trip() {
        for width in ByteWidth::ALL {
            assert_eq!(ByteWidth::from_bytes(width.bytes() as u8), Some(width));
        }
        assert_eq!(ByteWidth::from_bytes(0), None);
        assert_eq!(ByteWidth::from_bytes(1), None);
        assert_eq!(ByteWidth::from_bytes(5), None);
    }
}
