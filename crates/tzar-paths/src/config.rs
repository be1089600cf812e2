/// Search algorithm selector for [`PathingSystem::find_path`](crate::PathingSystem::find_path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// A* over the fixed-capacity open heap.
    #[default]
    AStarHeap,
    /// Reserved for a two-front A*. Not implemented: always yields no path.
    AStarHeapBidirectional,
}

/// Construction-time options of a [`PathingSystem`](crate::PathingSystem).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathConfig {
    /// Reject start/target points outside the grid with
    /// [`PathError::OutOfBounds`](crate::PathError::OutOfBounds).
    /// When off, passing such points is a caller bug.
    pub check_bounds: bool,
    /// Preallocate the second tile arena and open/closed pair used by
    /// [`Algorithm::AStarHeapBidirectional`].
    pub mirror_storage: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            check_bounds: cfg!(debug_assertions),
            mirror_storage: true,
        }
    }
}

impl PathConfig {
    pub fn with_check_bounds(mut self, on: bool) -> Self {
        self.check_bounds = on;
        self
    }

    pub fn with_mirror_storage(mut self, on: bool) -> Self {
        self.mirror_storage = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = PathConfig::default();
        assert_eq!(c.check_bounds, cfg!(debug_assertions));
        assert!(c.mirror_storage);
        assert_eq!(Algorithm::default(), Algorithm::AStarHeap);
    }

    #[test]
    fn builders_override_fields() {
        let c = PathConfig::default()
            .with_check_bounds(true)
            .with_mirror_storage(false);
        assert!(c.check_bounds);
        assert!(!c.mirror_storage);
    }
}
