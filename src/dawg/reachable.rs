//! Reachability annotation: how many words end at or below each node.
//!
//! Only used for statistics. Shared suffixes make naive counting exponential,
//! so every node is counted once, in interning order, without recursion.

use super::char_trait::DawgChar;
use super::node::{DawgNode, NodeId};

/// Per-node count of accepting nodes reachable from it, itself included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reachability {
    counts: Vec<usize>,
    root: usize,
}

impl Reachability {
    /// Counts every node in one forward pass. Children are always interned
    /// before their parents, so by the time a node is reached all of its
    /// children are already counted.
    pub(crate) fn annotate<C: DawgChar>(root: &DawgNode<C>, nodes: &[DawgNode<C>]) -> Self {
        let mut counts = Vec::with_capacity(nodes.len());
        for node in nodes {
            let count = num_reachable(node, &counts);
            counts.push(count);
        }
        let root = num_reachable(root, &counts);
        Reachability { counts, root }
    }

    /// Count for the root, which is the number of words in the DAWG.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Count for a canonical node.
    pub fn node(&self, id: NodeId) -> usize {
        self.counts[id.index()]
    }
}

/// One for the node itself if it is accepting, plus the known counts of its
/// children.
fn num_reachable<C: DawgChar>(node: &DawgNode<C>, counts: &[usize]) -> usize {
    usize::from(node.is_word())
        + node
            .children()
            .map(|(_, child)| counts[child.index()])
            .sum::<usize>()
}

#[cfg(test)]
mod test {
    use crate::dawg::builder::build_dawg;

    #[test]
    fn root_count_is_word_count() {
        let dawg = build_dawg(["bake", "baked", "baker", "cake", "caked", "fake", "lake"]).unwrap();
        assert_eq!(dawg.reachability().root(), 7);
    }

    #[test]
    fn shared_nodes_report_their_own_subtree() {
        let dawg = build_dawg(["bake", "baked", "baker", "cake", "caked"]).unwrap();
        let reach = dawg.reachability();
        let bak = dawg.follow_id("bak").unwrap();
        let cak = dawg.follow_id("cak").unwrap();
        // "bak" leads to bake, baked, baker; "cak" to cake, caked.
        assert_eq!(reach.node(bak), 3);
        assert_eq!(reach.node(cak), 2);

        let leaf = dawg.follow_id("baked").unwrap();
        assert_eq!(leaf, dawg.follow_id("baker").unwrap());
        assert_eq!(reach.node(leaf), 1);
    }

    #[test]
    fn deep_sharing_stays_linear() {
        // 512 distinct prefixes all funnel into one long shared suffix.
        let words: Vec<String> = (0..512u32)
            .map(|i| format!("{:09b}", i).replace('0', "a").replace('1', "b") + "zzzzzzzzzzz")
            .collect();
        let dawg = build_dawg(&words).unwrap();
        assert_eq!(dawg.reachability().root(), 512);
    }

    #[test]
    fn very_long_word_does_not_recurse() {
        let word = "a".repeat(200_000);
        let dawg = build_dawg([word.as_str()]).unwrap();
        assert_eq!(dawg.node_count(), 200_000);
        assert_eq!(dawg.reachability().root(), 1);
        assert_eq!(dawg.reachability().node(dawg.follow_id("a").unwrap()), 1);
        assert!(dawg.contains(word.as_str()));
    }

    #[test]
    fn empty_dawg_reaches_nothing() {
        let dawg = build_dawg(Vec::<&str>::new()).unwrap();
        assert_eq!(dawg.reachability().root(), 0);
    }
}
