pub mod vec;

pub use vec::{Idx, IndexVec};

/// A marker trait for types that can be indexed by `Idx`.
pub trait Indexable<Idx> {}

/// Position of a vertex in the adjacency matrix.
///
/// Indices are dense and recycled: once a vertex is removed its index goes
/// back to the free stack and may be handed to the next inserted vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct VertexIndex(u32);

impl VertexIndex {
    pub const ZERO: Self = Self(0);

    /// The index right after this one.
    pub fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Idx for VertexIndex {
    fn new(idx: usize) -> Self {
        assert!(idx <= u32::MAX as usize, "vertex index overflow");
        Self(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
