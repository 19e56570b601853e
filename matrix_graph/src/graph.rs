mod directed;
pub mod matrix;

pub use directed::DirectedGraph;

use crate::index;

/// Index-level view of a graph, for algorithms that work on dense node ids.
pub trait Topology {
    type Node: index::Idx;

    /// Upper bound of node ids; every node is `< num_nodes()`.
    fn num_nodes(&self) -> usize;
}

pub trait Successors: Topology {
    fn successors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node>;
}

pub trait Predecessors: Topology {
    fn predecessors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node>;
}
