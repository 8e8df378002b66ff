use std::fmt;

use smallvec::SmallVec;

use super::char_trait::DawgChar;

/// Identifier of a canonical node inside a [`Registry`](super::registry::Registry).
///
/// Identifiers are handed out densely in interning order. Children are always
/// interned before their parents, so every edge of a canonical node points to a
/// node with a smaller identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        let index = u32::try_from(index).expect("more than u32::MAX canonical nodes");
        NodeId(index)
    }

    /// Returns the position of this node in the registry.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outgoing edges of a node, ascending by label. Doesn't allocate until there
/// are at least three of them.
pub type Edges<C> = SmallVec<[(C, NodeId); 2]>;

/// A state in the directed acyclic word graph.
///
/// Edges only ever point at canonical nodes, so the derived `Hash` and `Eq` act
/// as the structural signature of the node: the word flag plus the ordered list
/// of `(label, canonical target)` pairs. Comparing two nodes never needs to
/// recurse below their direct children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DawgNode<C: DawgChar> {
    edges: Edges<C>,
    word: bool,
}

impl<C: DawgChar> DawgNode<C> {
    /// Creates a node without edges.
    ///
    /// # Arguments
    ///
    /// * `word` - Whether this node represents the end of a valid word
    pub fn new(word: bool) -> Self {
        DawgNode {
            edges: Edges::new(),
            word,
        }
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: C) -> Option<NodeId> {
        match self.edges.len() {
            0..=4 => self
                .edges
                .iter()
                .find(|&&(ch, _)| ch == letter)
                .map(|&(_, node)| node),
            _ => self
                .edges
                .binary_search_by(|&(ch, _)| ch.cmp(&letter))
                .ok()
                .map(|i| self.edges[i].1),
        }
    }

    /// True if this node corresponds to the end of a word.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.word
    }

    /// Appends an edge. Labels must arrive in ascending order, which sorted
    /// insertion guarantees.
    pub(crate) fn push_edge(&mut self, letter: C, target: NodeId) {
        debug_assert!(
            self.edges.last().map_or(true, |&(last, _)| last < letter),
            "edges must be added in ascending label order"
        );
        self.edges.push((letter, target));
    }

    /// Returns an iterator over `(label, target)` pairs in ascending label order.
    #[inline]
    pub fn children(&self) -> impl ExactSizeIterator<Item = (C, NodeId)> + '_ {
        self.edges.iter().copied()
    }

    /// Returns the number of outgoing edges.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the node has no outgoing edges.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }
}
