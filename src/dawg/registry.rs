//! Hash-consing store for canonical DAWG nodes.
//!
//! Every node that survives minimization lives here exactly once. Nodes are
//! addressed by [`NodeId`], which is their position in interning order.

use hashbrown::HashMap;

use super::char_trait::DawgChar;
use super::node::{DawgNode, NodeId};

/// The set of canonical nodes, keyed by structural signature.
#[derive(Clone, Debug)]
pub struct Registry<C: DawgChar> {
    nodes: Vec<DawgNode<C>>,
    classes: HashMap<DawgNode<C>, NodeId>,
}

impl<C: DawgChar> Default for Registry<C> {
    fn default() -> Self {
        Registry {
            nodes: Vec::new(),
            classes: HashMap::new(),
        }
    }
}

impl<C: DawgChar> Registry<C> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical node equivalent to `node`, interning `node` as a
    /// new representative if no equivalent exists yet.
    ///
    /// The boolean is true when `node` was newly interned and false when it was
    /// replaced by an existing equivalent.
    pub fn intern(&mut self, node: DawgNode<C>) -> (NodeId, bool) {
        debug_assert!(
            node.children().all(|(_, child)| child.index() < self.nodes.len()),
            "Cannot canonicalize unless all children are canonical"
        );

        if let Some(&id) = self.classes.get(&node) {
            (id, false)
        } else {
            let id = NodeId::new(self.nodes.len());
            self.nodes.push(node.clone());
            self.classes.insert(node, id);
            (id, true)
        }
    }

    /// Returns the node with the given identifier.
    ///
    /// Panics if `id` did not come from this registry.
    #[inline]
    pub fn node(&self, id: NodeId) -> &DawgNode<C> {
        &self.nodes[id.index()]
    }

    /// Returns the number of canonical nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all canonical nodes in interning order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeId, &DawgNode<C>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }

    /// Drops the signature index. The node list is all that lookups, the
    /// annotator and the encoder need once construction is over.
    pub(crate) fn freeze(mut self) -> Vec<DawgNode<C>> {
        self.classes = HashMap::new();
        self.nodes
    }
}
