use thiserror::Error;

use crate::Weight;

pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("edge weight must not be negative, got {0}")]
    NegativeWeight(Weight),
    #[error("vertex is not present in the graph")]
    VertexNotFound,
    #[error("capacity must be positive, got {0}")]
    InvalidCapacity(usize),
    #[error("growth threshold must lie in (0, 1], got {0}")]
    InvalidThreshold(f64),
    #[error("growth factor must be greater than 1, got {0}")]
    InvalidGrowthFactor(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BijectionError {
    #[error("key is already mapped")]
    DuplicateKey,
    #[error("index {0} is already mapped")]
    DuplicateIndex(usize),
}
