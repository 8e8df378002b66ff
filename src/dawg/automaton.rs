use std::fmt;

use super::builder::IntoWord;
use super::char_trait::DawgChar;
use super::node::{DawgNode, NodeId};
use super::reachable::Reachability;

/// A finished, minimal DAWG.
///
/// Produced by [`Builder::build`](super::builder::Builder::build). The node set
/// is frozen: the root plus the canonical nodes in interning order. Lookups,
/// statistics and the encoder only ever read it.
///
/// # Examples
///
/// ```
/// use packed_dawg::dawg::builder::build_dawg;
///
/// let dawg = build_dawg(["bake", "cake", "fake", "lake", "make"]).unwrap();
/// assert!(dawg.contains("cake"));
/// assert!(!dawg.contains("ake"));
/// assert!(!dawg.contains("cak"));
/// assert!(dawg.has_prefix("cak"));
/// ```
#[derive(Clone)]
pub struct Dawg<C: DawgChar> {
    root: DawgNode<C>,
    nodes: Vec<DawgNode<C>>,
    reachability: Reachability,
    word_count: usize,
    trie_nodes: usize,
}

impl<C: DawgChar> Dawg<C> {
    pub(crate) fn new(
        root: DawgNode<C>,
        nodes: Vec<DawgNode<C>>,
        word_count: usize,
        trie_nodes: usize,
    ) -> Self {
        let reachability = Reachability::annotate(&root, &nodes);
        debug_assert_eq!(reachability.root(), word_count);
        Dawg {
            root,
            nodes,
            reachability,
            word_count,
            trie_nodes,
        }
    }

    /// Returns the root node. It is never interned and has no [`NodeId`].
    pub fn root(&self) -> &DawgNode<C> {
        &self.root
    }

    /// Returns a canonical node.
    pub fn node(&self, id: NodeId) -> &DawgNode<C> {
        &self.nodes[id.index()]
    }

    /// Iterates over the canonical nodes in interning order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, &DawgNode<C>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }

    /// Number of canonical nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, root edges included.
    pub fn edge_count(&self) -> usize {
        self.root.child_count() + self.nodes.iter().map(DawgNode::child_count).sum::<usize>()
    }

    /// Number of words the DAWG was built from.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, root included, an unminimized trie of the same words
    /// would have.
    pub fn trie_node_count(&self) -> usize {
        self.trie_nodes
    }

    /// Per-node counts of words reachable from each node.
    pub fn reachability(&self) -> &Reachability {
        &self.reachability
    }

    /// Follows `word` from the root, returning the node reached.
    pub fn follow(&self, word: impl IntoWord<C>) -> Option<&DawgNode<C>> {
        word.collect_word()
            .iter()
            .try_fold(&self.root, |node, &ch| node.get(ch).map(|id| self.node(id)))
    }

    /// Like [`follow`](Self::follow), but returns the identifier of the node
    /// reached. `None` for the empty word, since the root has no identifier.
    pub fn follow_id(&self, word: impl IntoWord<C>) -> Option<NodeId> {
        let word = word.collect_word();
        let (&first, rest) = word.split_first()?;
        rest.iter()
            .try_fold(self.root.get(first)?, |id, &ch| self.node(id).get(ch))
    }

    /// Returns true if `word` was one of the words the DAWG was built from.
    ///
    /// Reaching the end of `word` is not enough: the node reached must be
    /// accepting, so proper prefixes of stored words are rejected.
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        self.follow(word).is_some_and(DawgNode::is_word)
    }

    /// Returns true if any stored word starts with `prefix`.
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        self.follow(prefix).is_some()
    }

    /// Iterates over all stored words in ascending order.
    pub fn words(&self) -> Words<'_, C> {
        Words {
            dawg: self,
            stack: vec![(&self.root, 0)],
            prefix: Vec::new(),
        }
    }

    /// Summary counts.
    pub fn stats(&self) -> DawgStats {
        DawgStats {
            words: self.word_count,
            nodes: self.node_count(),
            edges: self.edge_count(),
            trie_nodes: self.trie_nodes,
        }
    }
}

impl<C: DawgChar> fmt::Debug for Dawg<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dawg")
            .field("word_count", &self.word_count)
            .field("node_count", &self.node_count())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}

/// Depth-first iterator over the words of a [`Dawg`].
pub struct Words<'a, C: DawgChar> {
    dawg: &'a Dawg<C>,
    /// Nodes on the current path with the index of the next edge to visit.
    stack: Vec<(&'a DawgNode<C>, usize)>,
    prefix: Vec<C>,
}

impl<C: DawgChar> Iterator for Words<'_, C> {
    type Item = Vec<C>;

    fn next(&mut self) -> Option<Vec<C>> {
        while let Some(top) = self.stack.last_mut() {
            let node = top.0;
            match node.children().nth(top.1) {
                Some((ch, child)) => {
                    top.1 += 1;
                    let child = self.dawg.node(child);
                    self.prefix.push(ch);
                    self.stack.push((child, 0));
                    if child.is_word() {
                        return Some(self.prefix.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    self.prefix.pop();
                }
            }
        }
        None
    }
}

/// Size figures of a built DAWG.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DawgStats {
    /// Words inserted.
    pub words: usize,
    /// Canonical nodes, root excluded.
    pub nodes: usize,
    /// Edges, root edges included.
    pub edges: usize,
    /// Nodes, root included, of the equivalent trie.
    pub trie_nodes: usize,
}

impl fmt::Display for DawgStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words into {} nodes and {} edges (trie: {} nodes)",
            self.words, self.nodes, self.edges, self.trie_nodes
        )
    }
}

#[cfg(test)]
mod test {
    use super::super::builder::build_dawg;
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(dawg: &Dawg<char>) -> Vec<String> {
        dawg.words().map(|w| w.into_iter().collect()).collect()
    }

    #[test]
    fn basic_word_lookup() {
        let dawg = build_dawg(["bake", "cake", "fake", "lake"]).unwrap();
        assert!(dawg.contains("bake"));
        assert!(dawg.contains("lake"));
        assert!(!dawg.contains("make"));
        assert!(!dawg.contains("ake"));
        assert!(!dawg.contains(""));
    }

    #[test]
    fn prefixes_are_not_words() {
        let dawg = build_dawg(["cat", "cats", "dog"]).unwrap();
        assert!(dawg.contains("cat"));
        assert!(!dawg.contains("ca"));
        assert!(!dawg.contains("do"));
        assert!(dawg.has_prefix("ca"));
        assert!(dawg.has_prefix(""));
        assert!(!dawg.has_prefix("cx"));
        assert!(!dawg.contains("catsup"));
    }

    #[test]
    fn cat_cats_dog_scenario() {
        let dawg = build_dawg(["cat", "cats", "dog"]).unwrap();
        assert_eq!(
            dawg.stats(),
            DawgStats {
                words: 3,
                nodes: 6,
                edges: 7,
                trie_nodes: 8,
            }
        );
        // Both empty-suffix leaves collapse into one node.
        assert_eq!(dawg.follow_id("cats"), dawg.follow_id("dog"));
        assert_ne!(dawg.follow_id("cat"), dawg.follow_id("dog"));
    }

    #[test]
    fn single_word_is_a_chain() {
        let dawg = build_dawg(["quartz"]).unwrap();
        assert_eq!(dawg.node_count(), 6);
        assert_eq!(dawg.edge_count(), 6);
        assert_eq!(dawg.trie_node_count(), 7);
        let finals = dawg.nodes().filter(|(_, n)| n.is_word()).count();
        assert_eq!(finals, 1);
        let leaves = dawg.nodes().filter(|(_, n)| n.is_leaf()).count();
        assert_eq!(leaves, 1);
    }

    #[test]
    fn empty_input_is_root_only() {
        let dawg = build_dawg(Vec::<String>::new()).unwrap();
        assert_eq!(dawg.node_count(), 0);
        assert_eq!(dawg.edge_count(), 0);
        assert_eq!(dawg.word_count(), 0);
        assert!(dawg.root().is_leaf());
        assert_eq!(dawg.words().count(), 0);
    }

    #[test]
    fn words_come_back_sorted() {
        let input = ["bake", "baked", "baker", "cake", "caked", "fake", "lake"];
        let dawg = build_dawg(input).unwrap();
        assert_eq!(strings(&dawg), input);
    }

    #[test]
    fn no_shared_suffixes_means_trie_size() {
        let dawg = build_dawg(["ab", "cd", "ef"]).unwrap();
        // Leaves are always shared; here they are the only thing shared.
        assert_eq!(dawg.node_count() + 1, dawg.trie_node_count() - 2);

        let dawg = build_dawg(["abc"]).unwrap();
        assert_eq!(dawg.node_count() + 1, dawg.trie_node_count());
    }

    #[test]
    fn canonical_children_precede_parents() {
        let dawg = build_dawg(["tap", "taps", "top", "tops", "zap"]).unwrap();
        for (id, node) in dawg.nodes() {
            for (_, child) in node.children() {
                assert!(child < id, "{child} is not before {id}");
            }
        }
    }

    #[test]
    fn dawg_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dawg<char>>();
        assert_send_sync::<Dawg<u8>>();
    }

    #[test]
    fn stats_display() {
        let dawg = build_dawg(["cat", "cats", "dog"]).unwrap();
        assert_eq!(
            dawg.stats().to_string(),
            "3 words into 6 nodes and 7 edges (trie: 8 nodes)"
        );
    }
}
