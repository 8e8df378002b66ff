//! Dense numbering of the frozen node set.
//!
//! The encoder lays out edge lists in numbering order. Identifier 0 is the
//! root; canonical nodes follow in registry order as `1..=N`. The numbering is
//! a pure function of the frozen DAWG, so encoding the same DAWG twice yields
//! the same bytes.

use crate::dawg::{Dawg, DawgChar, DawgNode, NodeId};

/// A node of the frozen DAWG as seen by the encoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The root, which is never interned.
    Root,
    /// A canonical node.
    Node(NodeId),
}

/// Dense identifiers for the root and every canonical node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Numbering {
    order: Vec<Slot>,
    dense: Vec<usize>,
}

impl Numbering {
    /// Numbers the nodes of `dawg`.
    pub fn new<C: DawgChar>(dawg: &Dawg<C>) -> Self {
        let mut order = Vec::with_capacity(dawg.node_count() + 1);
        let mut dense = vec![0; dawg.node_count()];
        order.push(Slot::Root);
        for (id, _) in dawg.nodes() {
            dense[id.index()] = order.len();
            order.push(Slot::Node(id));
        }
        Numbering { order, dense }
    }

    /// Dense identifier of a canonical node. The root is always 0.
    pub fn id(&self, node: NodeId) -> usize {
        self.dense[node.index()]
    }

    /// Number of identifiers handed out, root included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false: the root is numbered even in an empty DAWG.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Slots in identifier order.
    pub fn order(&self) -> &[Slot] {
        &self.order
    }

    /// Resolves a slot to its node.
    pub fn resolve<'d, C: DawgChar>(&self, dawg: &'d Dawg<C>, slot: Slot) -> &'d DawgNode<C> {
        match slot {
            Slot::Root => dawg.root(),
            Slot::Node(id) => dawg.node(id),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dawg::build_dawg;

    #[test]
    fn root_comes_first() {
        let dawg = build_dawg(["cat", "cats", "dog"]).unwrap();
        let numbering = Numbering::new(&dawg);
        assert_eq!(numbering.len(), 7);
        assert_eq!(numbering.order()[0], Slot::Root);
        for (position, slot) in numbering.order().iter().enumerate().skip(1) {
            let Slot::Node(id) = *slot else {
                panic!("root numbered twice");
            };
            assert_eq!(numbering.id(id), position);
        }
    }

    #[test]
    fn identifiers_are_dense_and_unique() {
        let dawg = build_dawg(["tap", "taps", "top", "tops", "zap"]).unwrap();
        let numbering = Numbering::new(&dawg);
        let mut ids: Vec<_> = dawg.nodes().map(|(id, _)| numbering.id(id)).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=dawg.node_count()).collect::<Vec<_>>());
    }

    #[test]
    fn numbering_is_stable() {
        let words = ["alpha", "alphabet", "beta", "gamma", "gammas"];
        let a = Numbering::new(&build_dawg(words).unwrap());
        let b = Numbering::new(&build_dawg(words).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn empty_dawg_numbers_only_the_root() {
        let dawg = build_dawg(Vec::<&str>::new()).unwrap();
        let numbering = Numbering::new(&dawg);
        assert_eq!(numbering.order(), [Slot::Root]);
        assert!(!numbering.is_empty());
        assert!(numbering.resolve(&dawg, Slot::Root).is_leaf());
    }
}
