use std::{borrow::Borrow, hash::Hash};

use super::{matrix::AdjacencyMatrix, Predecessors, Successors, Topology};
use crate::{
    bijection::Bijection,
    config::{GraphConfig, MAX_CAPACITY},
    edge::Edge,
    error::{GraphError, Result},
    index::{Idx, VertexIndex},
    FxHashSet, Weight,
};

/// A weighted directed graph stored as a dense adjacency matrix.
///
/// Vertices of any hashable type are mapped to dense matrix indices through a
/// [`Bijection`]. Indices of removed vertices are recycled through a free
/// stack, so the matrix only grows with the number of vertices alive at the
/// same time, not with the number of vertices ever inserted.
///
/// Edge lookup is O(1); enumerating vertices is O(V) and enumerating edges is
/// O(N²) in the matrix dimension.
#[derive(Clone)]
pub struct DirectedGraph<V> {
    matrix: AdjacencyMatrix,
    index_map: Bijection<V, VertexIndex>,
    /// The bottom element is always the lowest index never handed out yet.
    free_indices: Vec<VertexIndex>,
    vertex_count: usize,
    edge_count: usize,
    config: GraphConfig,
}

impl<V> DirectedGraph<V> {
    /// Creates a graph with [`DEFAULT_CAPACITY`](crate::config::DEFAULT_CAPACITY) vertex slots.
    pub fn new() -> Self {
        Self::from_valid_config(GraphConfig::default())
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero or above [`MAX_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity > 0 && capacity <= MAX_CAPACITY,
            "graph capacity must lie in 1..={MAX_CAPACITY}"
        );
        Self::from_valid_config(GraphConfig::with_capacity(capacity))
    }

    pub fn from_config(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GraphConfig) -> Self {
        Self {
            matrix: AdjacencyMatrix::new(config.capacity),
            index_map: Bijection::new(),
            free_indices: vec![VertexIndex::ZERO],
            vertex_count: 0,
            edge_count: 0,
            config,
        }
    }

    pub fn vertex_size(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_size(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// The matrix dimension, i.e. the number of index slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.matrix.dimension()
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Removes every vertex and edge. The capacity is kept.
    pub fn clear(&mut self) {
        self.index_map.clear();
        self.free_indices.clear();
        self.free_indices.push(VertexIndex::ZERO);
        self.vertex_count = 0;
        self.edge_count = 0;
        self.matrix.clear();
    }

    /// Returns `false` once the matrix is at [`MAX_CAPACITY`].
    fn grow(&mut self) -> bool {
        let old = self.matrix.dimension();
        let new = self.config.grown_capacity(old);
        if new <= old {
            log::warn!("adjacency matrix is at its maximum dimension {old}");
            return false;
        }
        log::debug!("growing adjacency matrix from {old} to {new}");
        self.matrix.grow_to(new);
        true
    }

    fn take_free_index(&mut self) -> VertexIndex {
        let index = self
            .free_indices
            .pop()
            .expect("free index stack is never empty");
        if self.free_indices.is_empty() {
            self.free_indices.push(index.successor());
        }
        index
    }
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DirectedGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Inserts `vertex`; returns `false` if it is already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index_map.contains_key(&vertex) {
            return false;
        }
        while self
            .config
            .exceeds_threshold(self.vertex_count + 1, self.matrix.dimension())
            && self.grow()
        {}
        let index = self.take_free_index();
        while index.index() >= self.matrix.dimension() {
            assert!(self.grow(), "no vertex slot left for index {index}");
        }
        self.index_map
            .add(vertex, index)
            .expect("free indices are never mapped");
        self.vertex_count += 1;
        true
    }

    /// Inserts an edge of `weight` from `source` to `destination`.
    ///
    /// Returns `Ok(false)` if either endpoint is missing or the edge already
    /// exists. A zero weight is stored as a present edge.
    pub fn add_edge<Q>(&mut self, source: &Q, destination: &Q, weight: Weight) -> Result<bool>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if weight < 0 {
            return Err(GraphError::NegativeWeight(weight));
        }
        let Some((source, destination)) = self.endpoints(source, destination) else {
            return Ok(false);
        };
        if self.matrix.contains(source, destination) {
            return Ok(false);
        }
        self.matrix.insert(source, destination, weight);
        self.edge_count += 1;
        Ok(true)
    }

    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index_map.contains_key(vertex)
    }

    pub fn contains_edge<Q>(&self, source: &Q, destination: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.endpoints(source, destination)
            .is_some_and(|(source, destination)| self.matrix.contains(source, destination))
    }

    /// The weight stored from `source` to `destination`, or `0` if there is no edge.
    pub fn edge_weight<Q>(&self, source: &Q, destination: &Q) -> Result<Weight>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let (source, destination) = self
            .endpoints(source, destination)
            .ok_or(GraphError::VertexNotFound)?;
        Ok(self.matrix.get(source, destination).unwrap_or(0))
    }

    /// All vertices currently in the graph, isolated ones included.
    pub fn vertices(&self) -> FxHashSet<V> {
        self.index_map.keys().cloned().collect()
    }

    /// Vertices with at least one outgoing edge.
    pub fn sources(&self) -> FxHashSet<V> {
        self.matrix
            .iter()
            .filter_map(|(row, _, _)| self.index_map.get_key(row))
            .cloned()
            .collect()
    }

    pub fn edges(&self) -> FxHashSet<Edge<V>> {
        self.matrix
            .iter()
            .filter_map(|(row, column, weight)| self.edge_at(row, column, weight))
            .collect()
    }

    /// Edges leaving `vertex`; empty if the vertex is absent.
    pub fn out_edges<Q>(&self, vertex: &Q) -> Vec<Edge<V>>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(row) = self.index_map.get_value(vertex) else {
            return Vec::new();
        };
        self.matrix
            .row(row)
            .iter()
            .filter_map(|(column, weight)| self.edge_at(row, column, weight))
            .collect()
    }

    /// Edges entering `vertex`; empty if the vertex is absent.
    pub fn in_edges<Q>(&self, vertex: &Q) -> Vec<Edge<V>>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(column) = self.index_map.get_value(vertex) else {
            return Vec::new();
        };
        self.matrix
            .column(column)
            .filter_map(|(row, weight)| self.edge_at(row, column, weight))
            .collect()
    }

    /// Removes `vertex` together with every edge touching it.
    pub fn remove_vertex<Q>(&mut self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(index) = self.index_map.get_value(vertex) else {
            return false;
        };
        let removed_edges = self.matrix.clear_vertex(index);
        self.index_map.remove_key(vertex);
        self.free_indices.push(index);
        log::trace!("vertex index {index} released, {removed_edges} incident edges dropped");
        self.vertex_count -= 1;
        self.edge_count -= removed_edges;
        true
    }

    pub fn remove_edge<Q>(&mut self, source: &Q, destination: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some((source, destination)) = self.endpoints(source, destination) else {
            return false;
        };
        if self.matrix.remove(source, destination).is_none() {
            return false;
        }
        self.edge_count -= 1;
        true
    }

    pub fn vertex_at(&self, index: VertexIndex) -> Option<&V> {
        self.index_map.get_key(index)
    }

    pub fn index_of<Q>(&self, vertex: &Q) -> Option<VertexIndex>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index_map.get_value(vertex)
    }

    fn endpoints<Q>(&self, source: &Q, destination: &Q) -> Option<(VertexIndex, VertexIndex)>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        Some((
            self.index_map.get_value(source)?,
            self.index_map.get_value(destination)?,
        ))
    }

    fn edge_at(&self, row: VertexIndex, column: VertexIndex, weight: Weight) -> Option<Edge<V>> {
        let source = self.index_map.get_key(row)?;
        let destination = self.index_map.get_key(column)?;
        Some(Edge::new(source.clone(), destination.clone(), weight))
    }
}

impl<V> Topology for DirectedGraph<V> {
    type Node = VertexIndex;

    fn num_nodes(&self) -> usize {
        self.matrix.dimension()
    }
}

impl<V> Successors for DirectedGraph<V> {
    fn successors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> {
        self.matrix.row(node).iter().map(|(column, _)| column)
    }
}

impl<V> Predecessors for DirectedGraph<V> {
    fn predecessors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> {
        self.matrix.column(node).map(|(row, _)| row)
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for DirectedGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("matrix", &self.matrix)
            .field("free_indices", &self.free_indices)
            .field("index_map", &self.index_map)
            .field("capacity", &self.matrix.dimension())
            .field("vertices", &self.vertex_count)
            .field("edges", &self.edge_count)
            .finish()
    }
}
