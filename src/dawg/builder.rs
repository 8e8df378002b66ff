use log::{debug, trace};
use mark_last::MarkLastIterator;
use smallvec::SmallVec;

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::automaton::Dawg;
use super::char_trait::{word_to_string, DawgChar};
use super::node::DawgNode;
use super::registry::Registry;

/// Trait for types that can be used as a word when building or querying a DAWG.
///
/// Implemented for common string and sequence types so that [`Builder::add_word`]
/// and [`build_dawg`] accept them directly without manual conversion.
pub trait IntoWord<C: DawgChar> {
    /// Collects this word into a label buffer.
    fn collect_word(self) -> SmallVec<[C; 32]>;
}

impl IntoWord<char> for &str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &&str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl<C: DawgChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: DawgChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: DawgChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

/// Errors that can occur when building a DAWG.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A word was not strictly greater than the word inserted before it.
    ///
    /// Minimization relies on strictly ascending input. The rejected word
    /// leaves the builder untouched; [`build_dawg`] aborts on it.
    #[error("out of order insertion: {word:?} came after {previous:?}; words must be strictly ascending")]
    OutOfOrderInsertion {
        /// The previously inserted word.
        previous: String,
        /// The rejected word.
        word: String,
    },
}

/// One entry of the pending chain: a node created since the last minimization
/// checkpoint, together with the label of the edge its parent will use.
///
/// The parent of `pending[i]` is `pending[i - 1]`, or the root for `i == 0`.
struct BuildState<C: DawgChar> {
    ch: C,
    node: DawgNode<C>,
}

/// A builder for constructing a minimal DAWG incrementally.
///
/// Words must be added in strictly ascending order. Because of that only one
/// contiguous path below the root is ever open; everything that falls off that
/// path is final and gets interned in the [`Registry`] right away. Nodes on the
/// open path are held by value and only become canonical once popped.
pub struct Builder<C: DawgChar> {
    root: DawgNode<C>,
    pending: Vec<BuildState<C>>,
    registry: Registry<C>,
    word_count: usize,
    created: usize,
    replaced: usize,
}

impl<C: DawgChar> Default for Builder<C> {
    fn default() -> Self {
        Builder {
            root: DawgNode::new(false),
            pending: Vec::new(),
            registry: Registry::new(),
            word_count: 0,
            created: 0,
            replaced: 0,
        }
    }
}

impl<C: DawgChar> Builder<C> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word to the DAWG being constructed.
    ///
    /// The word can be any type that implements [`IntoWord`], including `&str`,
    /// `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays like `[u8; 3]`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::OutOfOrderInsertion`] if the word is not strictly
    /// greater than the previously added word. The empty word is never greater
    /// than anything and is always rejected.
    pub fn add_word(&mut self, word: impl IntoWord<C>) -> Result<(), BuildError> {
        let word = word.collect_word();
        self.add_word_slice(&word)
    }

    fn add_word_slice(&mut self, word: &[C]) -> Result<(), BuildError> {
        let prefix_length = self.prefix_length(word)?;
        self.minimize(prefix_length);

        let suffix = &word[prefix_length..];
        self.pending
            .extend(suffix.iter().copied().mark_last().map(|(last, ch)| BuildState {
                ch,
                node: DawgNode::new(last),
            }));
        self.created += suffix.len();
        self.word_count += 1;
        trace!(
            "added word #{} with {} shared and {} new labels",
            self.word_count,
            prefix_length,
            suffix.len()
        );
        Ok(())
    }

    /// Length of the prefix `word` shares with the previous word, which is
    /// exactly the path still held in the pending chain.
    fn prefix_length(&self, word: &[C]) -> Result<usize, BuildError> {
        if word.is_empty() {
            return Err(self.order_error(word));
        }
        let mut prefix_len = 0;
        for (i, &ch) in word.iter().enumerate() {
            let is_last = i == word.len() - 1;
            if let Some(prev_state) = self.pending.get(prefix_len) {
                if ch > prev_state.ch {
                    break;
                }
                if ch < prev_state.ch || is_last {
                    return Err(self.order_error(word));
                }
                prefix_len += 1;
            } else {
                break;
            }
        }
        Ok(prefix_len)
    }

    fn order_error(&self, word: &[C]) -> BuildError {
        BuildError::OutOfOrderInsertion {
            previous: word_to_string(&self.previous_word()),
            word: word_to_string(word),
        }
    }

    fn previous_word(&self) -> Vec<C> {
        self.pending.iter().map(|e| e.ch).collect()
    }

    /// Interns the pending chain from its tail down to `down_to` entries.
    ///
    /// Deepest entries go first: a node's signature is only meaningful once
    /// all of its children are canonical.
    fn minimize(&mut self, down_to: usize) {
        while self.pending.len() > down_to {
            let Some(state) = self.pending.pop() else {
                break;
            };
            let (child, fresh) = self.registry.intern(state.node);
            if !fresh {
                self.replaced += 1;
            }
            self.open_tail().push_edge(state.ch, child);
        }
    }

    /// The deepest node that is still open: the last pending node, or the root.
    fn open_tail(&mut self) -> &mut DawgNode<C> {
        match self.pending.last_mut() {
            Some(state) => &mut state.node,
            None => &mut self.root,
        }
    }

    /// Returns the number of words added so far.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns the length of the pending chain. It never exceeds the length of
    /// the longest word added.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Finalizes construction and returns the frozen, minimal DAWG.
    ///
    /// Flushes the pending chain and annotates every node with the number of
    /// words reachable from it.
    pub fn build(mut self) -> Dawg<C> {
        self.minimize(0);
        debug!(
            "DAWG built: {} words, {} nodes created, {} merged into {} canonical nodes",
            self.word_count,
            self.created,
            self.replaced,
            self.registry.len()
        );
        Dawg::new(
            self.root,
            self.registry.freeze(),
            self.word_count,
            self.created + 1,
        )
    }
}

/// Builds a DAWG from an iterator of words.
///
/// Each word must implement [`IntoWord`], allowing this function to accept
/// `&str`, `String`, slices, vectors, arrays, or any other supported word type.
///
/// Words **must** be provided in strictly ascending order, or this function
/// will return an error. This requirement allows the builder to construct a
/// minimal DAWG efficiently in a single pass.
///
/// # Examples
///
/// ```
/// use packed_dawg::dawg::builder::build_dawg;
///
/// let dawg = build_dawg(["apple", "banana", "cherry"]).unwrap();
/// assert!(dawg.contains("banana"));
/// assert!(!dawg.contains("apricot"));
/// ```
pub fn build_dawg<C, W>(words: impl IntoIterator<Item = W>) -> Result<Dawg<C>, BuildError>
where
    C: DawgChar,
    W: IntoWord<C>,
{
    let mut builder = Builder::new();
    for word in words {
        builder.add_word(word)?;
    }
    Ok(builder.build())
}

/// Builds a DAWG from a sorted word list file.
///
/// Reads one word per line. Lines starting with '#' are treated as comments and
/// ignored. Empty lines are skipped. No case folding or filtering happens here;
/// see [`lexicon`](crate::lexicon) for preparing raw text.
///
/// # Examples
///
/// ```no_run
/// use packed_dawg::dawg::builder::build_dawg_from_file;
///
/// let dawg = build_dawg_from_file("words.txt").unwrap();
/// ```
pub fn build_dawg_from_file(path: impl AsRef<Path>) -> Result<Dawg<char>, Box<dyn Error>> {
    let mut builder = Builder::new();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    // Reuse one line buffer instead of allocating a String per line.
    let mut buf = String::with_capacity(80);
    loop {
        let bytes_read = reader.read_line(&mut buf);
        match bytes_read {
            Ok(0) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            builder.add_word(word)?;
        }
        buf.clear();
    }
    Ok(builder.build())
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
