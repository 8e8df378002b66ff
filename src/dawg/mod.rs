/// DAWG builder: sorted insertion with incremental suffix minimization.
pub mod builder;
/// Trait for types that can serve as DAWG edge labels.
pub mod char_trait;
/// The frozen, minimal automaton.
pub mod automaton;
/// DAWG nodes and their structural signature.
pub mod node;
/// Reachable-word counts per node.
pub mod reachable;
/// Hash-consing registry of canonical nodes.
pub mod registry;

pub use automaton::{Dawg, DawgStats, Words};
pub use builder::{build_dawg, build_dawg_from_file, BuildError, Builder, IntoWord};
pub use char_trait::DawgChar;
pub use node::{DawgNode, NodeId};
pub use reachable::Reachability;
pub use registry::Registry;
