use serde::Deserialize;

use crate::error::{GraphError, Result};

pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;
/// Largest matrix dimension; every index must fit a [`VertexIndex`](crate::VertexIndex).
pub const MAX_CAPACITY: usize = u32::MAX as usize;

/// Sizing policy of a [`DirectedGraph`](crate::DirectedGraph).
///
/// The matrix grows to `ceil(capacity * growth_factor)` as soon as the
/// number of live vertices would exceed `capacity * threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    pub capacity: usize,
    pub threshold: f64,
    pub growth_factor: f64,
}

impl GraphConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY {
            return Err(GraphError::InvalidCapacity(self.capacity));
        }
        // NaN fails these comparisons as well
        if !(self.threshold.is_finite() && self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(GraphError::InvalidThreshold(self.threshold));
        }
        if !(self.growth_factor.is_finite()
            && self.growth_factor > 1.0
            && self.capacity as f64 * self.growth_factor <= MAX_CAPACITY as f64)
        {
            return Err(GraphError::InvalidGrowthFactor(self.growth_factor));
        }
        Ok(())
    }

    /// Whether a matrix of `capacity` must grow before holding `vertices`.
    pub(crate) fn exceeds_threshold(&self, vertices: usize, capacity: usize) -> bool {
        vertices as f64 > capacity as f64 * self.threshold
    }

    /// The next matrix dimension after `capacity`, capped at [`MAX_CAPACITY`].
    ///
    /// Strictly larger than `capacity` unless the cap has been reached.
    pub(crate) fn grown_capacity(&self, capacity: usize) -> usize {
        let grown = (capacity as f64 * self.growth_factor).ceil();
        if grown.is_nan() || grown >= MAX_CAPACITY as f64 {
            return MAX_CAPACITY;
        }
        (grown as usize).max(capacity + 1).min(MAX_CAPACITY)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            threshold: DEFAULT_THRESHOLD,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_policy() {
        let config = GraphConfig::default();
        assert!(!config.exceeds_threshold(5, 10));
        assert!(config.exceeds_threshold(6, 10));
        assert_eq!(config.grown_capacity(10), 15);
        assert_eq!(config.grown_capacity(15), 23);
        assert_eq!(config.grown_capacity(1), 2);
        assert_eq!(config.grown_capacity(MAX_CAPACITY), MAX_CAPACITY);
    }

    #[test]
    fn test_grown_capacity_is_capped() {
        let config = GraphConfig {
            growth_factor: 1e30,
            ..Default::default()
        };
        assert_eq!(config.grown_capacity(10), MAX_CAPACITY);
        let config = GraphConfig {
            growth_factor: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(config.grown_capacity(10), MAX_CAPACITY);
    }

    #[test]
    fn test_validate() {
        assert!(GraphConfig::default().validate().is_ok());
        assert_eq!(
            GraphConfig::with_capacity(0).validate(),
            Err(GraphError::InvalidCapacity(0))
        );
        let config = GraphConfig {
            threshold: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(GraphError::InvalidThreshold(0.0)));
        let config = GraphConfig {
            growth_factor: 1.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(GraphError::InvalidGrowthFactor(1.0))
        );
        let config = GraphConfig {
            growth_factor: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(GraphError::InvalidGrowthFactor(f64::INFINITY))
        );
        let config = GraphConfig {
            growth_factor: 1e30,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(GraphError::InvalidGrowthFactor(1e30)));
        let config = GraphConfig {
            growth_factor: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = GraphConfig {
            threshold: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(GraphError::InvalidThreshold(f64::INFINITY))
        );
        assert_eq!(
            GraphConfig::with_capacity(MAX_CAPACITY + 1).validate(),
            Err(GraphError::InvalidCapacity(MAX_CAPACITY + 1))
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let config: GraphConfig = toml::from_str("capacity = 4").unwrap();
        assert_eq!(config.capacity, 4);
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
        assert!(toml::from_str::<GraphConfig>("bogus = 1").is_err());
    }
}
