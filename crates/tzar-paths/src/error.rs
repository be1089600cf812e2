use std::fmt;

use tzar_core::{GridError, Point};

/// Errors surfaced by [`PathingSystem`](crate::PathingSystem).
///
/// An unreachable target is not an error: the search returns an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Search storage for the grid could not be reserved.
    Allocation { tiles: usize },
    /// Start or target lies outside the grid.
    OutOfBounds { pos: Point, size: Point },
    /// The grid handed to a search differs in shape from the one the engine
    /// was built for.
    GeometryMismatch {
        expected_size: Point,
        expected_chunk: Point,
        size: Point,
        chunk: Point,
    },
    /// The grid's geometry is invalid.
    Grid(GridError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { tiles } => {
                write!(f, "pathing: cannot reserve search state for {tiles} tiles")
            }
            Self::OutOfBounds { pos, size } => write!(
                f,
                "pathing: {pos} is outside the {}x{} grid",
                size.x, size.y
            ),
            Self::GeometryMismatch {
                expected_size,
                expected_chunk,
                size,
                chunk,
            } => write!(
                f,
                "pathing: engine built for a {}x{} grid with {}x{} chunks, got {}x{} with {}x{}",
                expected_size.x,
                expected_size.y,
                expected_chunk.x,
                expected_chunk.y,
                size.x,
                size.y,
                chunk.x,
                chunk.y
            ),
            Self::Grid(e) => write!(f, "pathing: {e}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for PathError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
