use std::fmt;

use crate::geom::Point;

/// Errors raised while building a [`SpatialGrid`](crate::SpatialGrid) or
/// [`ChunkLayout`](crate::ChunkLayout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Grid width or height is not positive.
    EmptyGrid { size: Point },
    /// Chunk width or height is not positive.
    EmptyChunk { chunk: Point },
    /// Grid dimensions are not multiples of the chunk dimensions.
    ChunkMismatch { size: Point, chunk: Point },
    /// A text row is not as wide as the first one.
    RaggedRow { row: usize },
    /// A character outside the occupancy alphabet.
    InvalidGlyph { ch: char, pos: Point },
    /// The tile count does not fit in `usize`.
    TooLarge { size: Point, chunk: Point },
    /// Serialized tile data does not match the declared geometry.
    TileCount { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { size } => {
                write!(f, "grid: size {}x{} must be positive", size.x, size.y)
            }
            Self::EmptyChunk { chunk } => {
                write!(f, "grid: chunk size {}x{} must be positive", chunk.x, chunk.y)
            }
            Self::ChunkMismatch { size, chunk } => write!(
                f,
                "grid: size {}x{} is not a multiple of chunk size {}x{}",
                size.x, size.y, chunk.x, chunk.y
            ),
            Self::TooLarge { size, chunk } => write!(
                f,
                "grid: {}x{} with {}x{} chunks has too many tiles to address",
                size.x, size.y, chunk.x, chunk.y
            ),
            Self::RaggedRow { row } => write!(f, "grid: row {row} has a different width"),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "grid: invalid tile \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::TileCount { expected, found } => {
                write!(f, "grid: expected {expected} tiles, found {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_both_sizes() {
        let e = GridError::ChunkMismatch {
            size: Point::new(10, 16),
            chunk: Point::new(8, 8),
        };
        assert_eq!(
            e.to_string(),
            "grid: size 10x16 is not a multiple of chunk size 8x8"
        );
        let e = GridError::TooLarge {
            size: Point::new(70_000, 70_000),
            chunk: Point::new(7, 7),
        };
        assert_eq!(
            e.to_string(),
            "grid: 70000x70000 with 7x7 chunks has too many tiles to address"
        );
    }
}
