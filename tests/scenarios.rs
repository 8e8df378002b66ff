use {
    packed_dawg::{
        dawg::{build_dawg, BuildError, Builder},
        lexicon::{prepare_words, LexiconOptions},
        packed::{encode, ByteWidth, EncodeError, PackedDawg, TRAILER_LEN},
    },
    pretty_assertions::assert_eq,
    test_log::test,
};

const PETS: &str = "
# some pets
Dog cat
cats cat dog
";

#[test]
fn cat_cats_dog() {
    let words = prepare_words(PETS, &LexiconOptions::default());
    assert_eq!(words, ["cat", "cats", "dog"]);

    let dawg = build_dawg(&words).unwrap();
    assert_eq!(dawg.trie_node_count(), 8);
    assert_eq!(dawg.node_count() + 1, 7);
    assert_eq!(dawg.edge_count(), 7);

    let encoded = encode(&dawg).unwrap();
    assert_eq!(encoded.header().slot_count, 8);
    assert_eq!(encoded.byte_width(), ByteWidth::Two);

    let bytes = encoded.to_bytes().unwrap();
    assert_eq!(bytes.len(), 8 * 2 + TRAILER_LEN);
    let packed = PackedDawg::from_bytes(&bytes).unwrap();
    for (word, expected) in [("cat", true), ("cats", true), ("dog", true), ("ca", false), ("do", false), ("dogs", false)] {
        assert_eq!(packed.contains(word), expected, "{word}");
    }
}

#[test]
fn single_word() {
    let dawg = build_dawg(["quiz"]).unwrap();
    assert_eq!(dawg.node_count(), 4);
    assert_eq!(dawg.edge_count(), 4);
    assert_eq!(dawg.nodes().filter(|(_, node)| node.is_word()).count(), 1);

    let packed = PackedDawg::from_bytes(&encode(&dawg).unwrap().to_bytes().unwrap()).unwrap();
    assert_eq!(packed.words().collect::<Vec<_>>(), ["quiz"]);
    assert!(!packed.contains("qui"));
}

#[test]
fn empty_input() {
    let dawg = build_dawg(Vec::<String>::new()).unwrap();
    assert_eq!(dawg.edge_count(), 0);
    let bytes = encode(&dawg).unwrap().to_bytes().unwrap();
    assert_eq!(bytes.len(), 2 + TRAILER_LEN);
    let packed = PackedDawg::from_bytes(&bytes).unwrap();
    assert_eq!(packed.word_count(), 0);
    assert!(!packed.contains("a"));
}

#[test]
fn builds_are_deterministic() {
    let text = "the rain in spain stays mainly in the plain while the main train remains";
    let words = prepare_words(text, &LexiconOptions::default());
    let first = build_dawg(&words).unwrap();
    let second = build_dawg(&words).unwrap();
    assert_eq!(first.stats(), second.stats());
    assert_eq!(
        encode(&first).unwrap().to_bytes().unwrap(),
        encode(&second).unwrap().to_bytes().unwrap()
    );
}

#[test]
fn suffix_sharing_shrinks_the_graph() {
    let words = ["baking", "caking", "faking", "making", "raking", "taking", "waking"];
    let dawg = build_dawg(words).unwrap();
    // Every initial letter leads into the same "aking" chain.
    assert_eq!(dawg.node_count(), "aking".len() + 1);
    assert!(dawg.node_count() + 1 < dawg.trie_node_count());
}

#[test]
fn out_of_order_input_is_reported() {
    let mut builder = Builder::<char>::new();
    builder.add_word("mango").unwrap();
    let err = builder.add_word("apple").unwrap_err();
    assert_eq!(
        err,
        BuildError::OutOfOrderInsertion {
            previous: "mango".into(),
            word: "apple".into(),
        }
    );
}

#[test]
fn labels_outside_the_alphabet_cannot_be_packed() {
    let dawg = build_dawg(["caf\u{e9}"]).unwrap();
    assert!(dawg.contains("caf\u{e9}"));
    let err = encode(&dawg).unwrap_err();
    assert!(matches!(err, EncodeError::AlphabetOverflow { symbol: '\u{e9}' }), "{err}");
}

#[test]
fn large_word_list_round_trips() {
    // Three-letter words over a-z where the letters are not all equal.
    let words: Vec<String> = (0..26u8)
        .flat_map(|a| (0..26u8).flat_map(move |b| (0..26u8).map(move |c| [a, b, c])))
        .filter(|[a, b, c]| !(a == b && b == c))
        .map(|letters| letters.iter().map(|l| char::from(b'a' + l)).collect())
        .collect();
    let dawg = build_dawg(&words).unwrap();
    let encoded = encode(&dawg).unwrap();
    let packed = PackedDawg::from_bytes(&encoded.to_bytes().unwrap()).unwrap();
    assert_eq!(packed.word_count() as usize, words.len());
    assert!(packed.contains("abc"));
    assert!(!packed.contains("aaa"));
    assert!(packed.contains("aab"));
    assert!(!packed.contains("ab"));
}

#[test]
fn long_chain_needs_four_byte_records() {
    // One word of 140 000 letters: 140 000 edges, past the three-byte band.
    let word: String = (0..140_000u32).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    let dawg = build_dawg([word.as_str()]).unwrap();
    let encoded = encode(&dawg).unwrap();
    assert_eq!(encoded.edge_count(), 140_000);
    assert_eq!(encoded.byte_width(), ByteWidth::Four);
    assert_eq!(encoded.header().slot_count, 140_001);

    let bytes = encoded.to_bytes().unwrap();
    assert_eq!(bytes.len(), 140_001 * 4 + TRAILER_LEN);
    let packed = PackedDawg::from_bytes(&bytes).unwrap();
    assert_eq!(packed.byte_width(), ByteWidth::Four);
    assert!(packed.contains(&word));
    assert!(!packed.contains(&word[..word.len() - 1]));
    assert_eq!(packed.words().collect::<Vec<_>>(), [word]);
}
