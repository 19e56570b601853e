use crate::Weight;

/// A snapshot of one stored edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<V> {
    source: V,
    destination: V,
    weight: Weight,
}

impl<V> Edge<V> {
    pub fn new(source: V, destination: V, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn destination(&self) -> &V {
        &self.destination
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl<V: std::fmt::Display> std::fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.destination, self.weight)
    }
}
