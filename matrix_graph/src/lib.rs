//! A weighted directed graph backed by a dense adjacency matrix.
//!
//! Vertices may be of any `Eq + Hash + Clone` type; they are mapped to dense
//! matrix indices by a [`Bijection`], and indices of removed vertices are
//! reused. The matrix grows geometrically once the live vertex count passes a
//! load threshold (see [`GraphConfig`]).
//!
//! ```
//! use matrix_graph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_vertex("a");
//! graph.add_vertex("b");
//! assert_eq!(graph.add_edge("a", "b", 3), Ok(true));
//! assert_eq!(graph.edge_weight("a", "b"), Ok(3));
//! ```
pub mod bijection;
pub mod config;
pub mod edge;
pub mod error;
pub mod graph;
pub mod index;

pub use bijection::Bijection;
pub use config::GraphConfig;
pub use edge::Edge;
pub use error::{BijectionError, GraphError};
pub use graph::DirectedGraph;
pub use index::VertexIndex;

pub use bitvec::vec::BitVec;
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;

/// Edge weights are non-negative; the signed type lets callers pass a
/// negative value and get [`GraphError::NegativeWeight`] back.
pub type Weight = i32;
