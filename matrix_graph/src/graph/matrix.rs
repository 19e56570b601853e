//! Square weight storage with a presence bit per cell.
use crate::{
    index::{Idx, IndexVec, Indexable, VertexIndex},
    BitVec, Weight,
};

#[derive(Clone)]
pub struct MatrixRow {
    weights: Vec<Weight>,
    present: BitVec,
}

impl Indexable<VertexIndex> for MatrixRow {}

impl MatrixRow {
    fn new(dimension: usize) -> Self {
        Self {
            weights: vec![0; dimension],
            present: BitVec::repeat(false, dimension),
        }
    }

    pub fn get(&self, column: VertexIndex) -> Option<Weight> {
        let column = column.index();
        self.present[column].then(|| self.weights[column])
    }

    /// Iterates the present cells of this row.
    pub fn iter(&self) -> impl Iterator<Item = (VertexIndex, Weight)> + '_ {
        self.present
            .iter_ones()
            .map(|column| (VertexIndex::new(column), self.weights[column]))
    }

    fn set(&mut self, column: usize, weight: Option<Weight>) -> Option<Weight> {
        let old = self.present[column].then(|| self.weights[column]);
        self.present.set(column, weight.is_some());
        self.weights[column] = weight.unwrap_or(0);
        old
    }

    fn resize(&mut self, dimension: usize) {
        self.weights.resize(dimension, 0);
        self.present.resize(dimension, false);
    }

    fn clear(&mut self) {
        self.weights.fill(0);
        self.present.fill(false);
    }
}

/// A dense `n × n` adjacency matrix.
///
/// A cell is either absent or holds a weight; weight `0` is a valid present
/// value. The dimension only ever grows.
#[derive(Clone)]
pub struct AdjacencyMatrix {
    rows: IndexVec<VertexIndex, MatrixRow>,
}

impl AdjacencyMatrix {
    pub fn new(dimension: usize) -> Self {
        Self {
            rows: IndexVec::from_fn_n(dimension, |_| MatrixRow::new(dimension)),
        }
    }

    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, row: VertexIndex) -> &MatrixRow {
        &self.rows[row]
    }

    pub fn get(&self, row: VertexIndex, column: VertexIndex) -> Option<Weight> {
        self.rows[row].get(column)
    }

    pub fn contains(&self, row: VertexIndex, column: VertexIndex) -> bool {
        self.rows[row].present[column.index()]
    }

    /// Stores `weight` at `(row, column)` and returns the previous weight.
    pub fn insert(
        &mut self,
        row: VertexIndex,
        column: VertexIndex,
        weight: Weight,
    ) -> Option<Weight> {
        self.rows[row].set(column.index(), Some(weight))
    }

    pub fn remove(&mut self, row: VertexIndex, column: VertexIndex) -> Option<Weight> {
        self.rows[row].set(column.index(), None)
    }

    /// Iterates the present cells of `column`, top to bottom.
    pub fn column(
        &self,
        column: VertexIndex,
    ) -> impl Iterator<Item = (VertexIndex, Weight)> + '_ {
        self.rows
            .iter_enumerated()
            .filter_map(move |(row, cells)| cells.get(column).map(|weight| (row, weight)))
    }

    /// Iterates every present cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex, Weight)> + '_ {
        self.rows
            .iter_enumerated()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .map(move |(column, weight)| (row, column, weight))
            })
    }

    /// Enlarges the matrix to `dimension`; every cell keeps its coordinates.
    pub fn grow_to(&mut self, dimension: usize) {
        let old = self.dimension();
        if dimension <= old {
            return;
        }
        for row in &mut self.rows {
            row.resize(dimension);
        }
        for _ in old..dimension {
            self.rows.push(MatrixRow::new(dimension));
        }
    }

    /// Clears the whole row and column of `vertex`; returns how many cells were present.
    pub fn clear_vertex(&mut self, vertex: VertexIndex) -> usize {
        let row = &mut self.rows[vertex];
        let mut removed = row.present.count_ones();
        row.clear();
        let column = vertex.index();
        for (index, row) in self.rows.iter_enumerated_mut() {
            if index != vertex && row.set(column, None).is_some() {
                removed += 1;
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
    }
}

impl std::fmt::Debug for AdjacencyMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for row in &self.rows {
            let cells: Vec<_> = (0..row.weights.len())
                .map(|column| row.present[column].then(|| row.weights[column]))
                .collect();
            list.entry(&cells);
        }
        list.finish()
    }
}
