use std::fmt::Debug;
use std::hash::Hash;

/// Highest symbol code the packed format can carry (`z`).
pub const MAX_SYMBOL_CODE: u8 = 26;

/// Trait for types that can serve as edge labels in a DAWG.
///
/// - `Copy`: edges store labels by value
/// - `Eq + Ord`: comparing and ordering edge labels
/// - `Hash`: structural signatures in the node registry
/// - `Debug`: error messages and debug printing of nodes
///
/// [`packed_code`](DawgChar::packed_code) maps a label onto the 1-based symbol
/// code of the packed edge format (`a` = 1 through `z` = 26). Labels outside
/// that alphabet return `None`; a graph containing them can still be built and
/// queried in memory but cannot be encoded.
pub trait DawgChar: Copy + Eq + Ord + Hash + Debug {
    /// Returns the packed symbol code for this label, if it has one.
    fn packed_code(self) -> Option<u8>;

    /// Converts a packed symbol code back into a label.
    fn from_packed_code(code: u8) -> Option<Self>;

    /// Renders the label for error messages and word listings.
    fn to_char(self) -> char;
}

/// Renders a label sequence as a `String`.
pub(crate) fn word_to_string<C: DawgChar>(word: &[C]) -> String {
    word.iter().map(|&ch| ch.to_char()).collect()
}

impl DawgChar for char {
    #[inline]
    fn packed_code(self) -> Option<u8> {
        u8::try_from(self).ok().and_then(|b| b.packed_code())
    }

    #[inline]
    fn from_packed_code(code: u8) -> Option<Self> {
        u8::from_packed_code(code).map(char::from)
    }

    #[inline]
    fn to_char(self) -> char {
        self
    }
}

impl DawgChar for u8 {
    #[inline]
    fn packed_code(self) -> Option<u8> {
        self.is_ascii_lowercase().then(|| self - b'a' + 1)
    }

    #[inline]
    fn from_packed_code(code: u8) -> Option<Self> {
        (1..=MAX_SYMBOL_CODE).contains(&code).then(|| b'a' + code - 1)
    }

    #[inline]
    fn to_char(self) -> char {
        char::from(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowercase_letters_are_one_based() {
        assert_eq!('a'.packed_code(), Some(1));
        assert_eq!('z'.packed_code(), Some(MAX_SYMBOL_CODE));
        assert_eq!(b'm'.packed_code(), Some(13));
    }

    #[test]
    fn everything_else_has_no_code() {
        for ch in ['A', '`', '{', '0', 'é', '\0', ' '] {
            assert_eq!(ch.packed_code(), None, "{ch:?}");
        }
    }

    #[test]
    fn codes_map_back_to_letters() {
        for ch in 'a'..='z' {
            let code = ch.packed_code().unwrap();
            assert_eq!(char::from_packed_code(code), Some(ch));
        }
        assert_eq!(char::from_packed_code(0), None);
        assert_eq!(char::from_packed_code(27), None);
    }
}
