//! Space-time points recorded along simulated trajectories.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sentinel for an unset coordinate or time.
pub const INVALID_DOUBLE: f64 = f64::MAX;

/// A space-time point (x, y, z in cm, t in ns).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
    /// Time.
    pub t: f64,
}

impl Vertex {
    /// Creates a new vertex.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64, t: f64) -> Self {
        Self { x, y, z, t }
    }

    /// A vertex with every coordinate set to [`INVALID_DOUBLE`].
    #[inline]
    #[must_use]
    pub fn invalid() -> Self {
        Self::new(INVALID_DOUBLE, INVALID_DOUBLE, INVALID_DOUBLE, INVALID_DOUBLE)
    }

    /// Returns true if no coordinate holds the invalid sentinel.
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_valid(&self) -> bool {
        self.x != INVALID_DOUBLE
            && self.y != INVALID_DOUBLE
            && self.z != INVALID_DOUBLE
            && self.t != INVALID_DOUBLE
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::invalid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_vertex() {
        let v = Vertex::invalid();
        assert!(!v.is_valid());
        assert_eq!(v, Vertex::default());
        assert_eq!(v.t.to_bits(), INVALID_DOUBLE.to_bits());
    }

    #[test]
    fn test_partially_invalid_vertex() {
        let v = Vertex::new(1.0, 2.0, 3.0, INVALID_DOUBLE);
        assert!(!v.is_valid());
        assert!(Vertex::new(1.0, 2.0, 3.0, 0.0).is_valid());
    }
}
