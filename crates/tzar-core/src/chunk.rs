//! Chunk-major tile addressing.
//!
//! Tiles are stored chunk by chunk: every tile of chunk (0, 0) comes first,
//! then chunk (1, 0), and so on along the chunk row. Inside a chunk tiles are
//! row-major. Algorithms that work on a small neighbourhood then touch one or
//! two contiguous blocks instead of `height` scattered rows.

use crate::error::GridError;
use crate::geom::Point;

/// Map `p` to its chunk-major linear index.
///
/// `grid` and `chunk` are sizes in tiles; `grid` must be a multiple of
/// `chunk` on both axes. There is no bounds check: a point outside the grid
/// yields an unspecified index.
#[inline]
pub fn chunk_index(p: Point, grid: Point, chunk: Point) -> usize {
    let per_row = (grid.x / chunk.x) as usize;
    let chunk_len = (chunk.x as usize).wrapping_mul(chunk.y as usize);
    linear(p, chunk, per_row, chunk_len)
}

// Index math runs in `usize`; wrapping keeps out-of-grid points panic-free.
#[inline]
fn linear(p: Point, chunk: Point, per_row: usize, chunk_len: usize) -> usize {
    let (x, y) = (p.x as usize, p.y as usize);
    let (cw, ch) = (chunk.x as usize, chunk.y as usize);
    let chunk_linear = (x / cw).wrapping_add((y / ch).wrapping_mul(per_row));
    let offset = (x % cw).wrapping_add((y % ch).wrapping_mul(cw));
    chunk_linear.wrapping_mul(chunk_len).wrapping_add(offset)
}

/// Cached chunk geometry of a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChunkLayout {
    size: Point,
    chunk: Point,
    chunks: Point,
    chunk_len: usize,
    len: usize,
}

impl ChunkLayout {
    /// Validate and build the layout of a `size` grid cut in `chunk` blocks.
    pub fn new(size: Point, chunk: Point) -> Result<Self, GridError> {
        if size.x <= 0 || size.y <= 0 {
            return Err(GridError::EmptyGrid { size });
        }
        if chunk.x <= 0 || chunk.y <= 0 {
            return Err(GridError::EmptyChunk { chunk });
        }
        if size.x % chunk.x != 0 || size.y % chunk.y != 0 {
            return Err(GridError::ChunkMismatch { size, chunk });
        }
        let chunks = Point::new(size.x / chunk.x, size.y / chunk.y);
        let too_large = GridError::TooLarge { size, chunk };
        let chunk_len = (chunk.x as usize)
            .checked_mul(chunk.y as usize)
            .ok_or(too_large)?;
        let len = (chunks.x as usize)
            .checked_mul(chunks.y as usize)
            .and_then(|n| n.checked_mul(chunk_len))
            .ok_or(too_large)?;
        Ok(Self {
            size,
            chunk,
            chunks,
            chunk_len,
            len,
        })
    }

    /// Grid size in tiles.
    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    /// Chunk size in tiles.
    #[inline]
    pub fn chunk_size(&self) -> Point {
        self.chunk
    }

    /// Number of chunks along each axis.
    #[inline]
    pub fn chunk_grid_size(&self) -> Point {
        self.chunks
    }

    /// Tiles per chunk.
    #[inline]
    pub fn chunk_tile_count(&self) -> usize {
        self.chunk_len
    }

    /// Total number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: a layout cannot be built for an empty grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.size.x && p.y >= 0 && p.y < self.size.y
    }

    /// Chunk-major index of `p`. Unchecked, see [`chunk_index`].
    #[inline]
    pub fn index(&self, p: Point) -> usize {
        linear(p, self.chunk, self.chunks.x as usize, self.chunk_len)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn point(&self, index: usize) -> Point {
        let chunk_linear = index / self.chunk_len;
        let offset = index % self.chunk_len;
        let per_row = self.chunks.x as usize;
        let (cw, ch) = (self.chunk.x as usize, self.chunk.y as usize);
        let x = (chunk_linear % per_row) * cw + offset % cw;
        let y = (chunk_linear / per_row) * ch + offset / cw;
        Point::new(x as i32, y as i32)
    }

    /// Chunk coordinates containing `p`.
    #[inline]
    pub fn chunk_of(&self, p: Point) -> Point {
        Point::new(p.x / self.chunk.x, p.y / self.chunk.y)
    }

    /// Tile positions in storage order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.len()).map(|i| self.point(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Range;

    #[test]
    fn rejects_bad_geometry() {
        assert_eq!(
            ChunkLayout::new(Point::new(0, 8), Point::new(8, 8)),
            Err(GridError::EmptyGrid {
                size: Point::new(0, 8)
            })
        );
        assert_eq!(
            ChunkLayout::new(Point::new(8, 8), Point::new(0, 8)),
            Err(GridError::EmptyChunk {
                chunk: Point::new(0, 8)
            })
        );
        assert_eq!(
            ChunkLayout::new(Point::new(12, 8), Point::new(8, 8)),
            Err(GridError::ChunkMismatch {
                size: Point::new(12, 8),
                chunk: Point::new(8, 8)
            })
        );
    }

    #[test]
    fn huge_geometry_does_not_overflow() {
        let side = Point::new(50_000, 50_000);
        let layout = ChunkLayout::new(side, side).unwrap();
        assert_eq!(layout.len(), 2_500_000_000);
        assert_eq!(layout.chunk_tile_count(), 2_500_000_000);
        let last = Point::new(49_999, 49_999);
        assert_eq!(layout.index(last), 2_499_999_999);
        assert_eq!(layout.point(2_499_999_999), last);
        assert_eq!(chunk_index(last, side, side), 2_499_999_999);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn tile_counts_past_u32_are_addressable() {
        let wide = ChunkLayout::new(Point::new(70_000, 70_000), Point::new(7, 7)).unwrap();
        assert_eq!(wide.len(), 4_900_000_000);
        assert_eq!(wide.index(Point::new(69_999, 69_999)), 4_899_999_999);
        assert_eq!(wide.point(4_899_999_999), Point::new(69_999, 69_999));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn tile_count_past_usize_is_rejected() {
        let size = Point::new(70_000, 70_000);
        let chunk = Point::new(7, 7);
        assert_eq!(
            ChunkLayout::new(size, chunk),
            Err(GridError::TooLarge { size, chunk })
        );
    }

    #[test]
    fn index_is_a_bijection() {
        for (size, chunk) in [
            (Point::new(16, 16), Point::new(8, 8)),
            (Point::new(12, 6), Point::new(4, 3)),
            (Point::new(5, 7), Point::new(1, 7)),
            (Point::new(9, 4), Point::new(9, 4)),
        ] {
            let layout = ChunkLayout::new(size, chunk).unwrap();
            let mut seen = vec![false; layout.len()];
            for p in Range::with_size(size) {
                let i = layout.index(p);
                assert!(i < layout.len(), "{p} -> {i} out of range");
                assert!(!seen[i], "{p} -> {i} hit twice");
                seen[i] = true;
                assert_eq!(layout.point(i), p);
                assert_eq!(chunk_index(p, size, chunk), i);
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn chunks_are_contiguous() {
        let layout = ChunkLayout::new(Point::new(16, 16), Point::new(8, 8)).unwrap();
        assert_eq!(layout.chunk_tile_count(), 64);
        assert_eq!(layout.chunk_grid_size(), Point::new(2, 2));
        for p in Range::new(0, 0, 8, 8) {
            assert!(layout.index(p) < 64);
        }
        assert_eq!(layout.index(Point::new(8, 0)), 64);
        assert_eq!(layout.index(Point::new(0, 8)), 128);
        assert_eq!(layout.index(Point::new(8, 8)), 192);
        assert_eq!(layout.index(Point::new(15, 15)), 255);
    }

    #[test]
    fn in_chunk_offsets_are_row_major() {
        let layout = ChunkLayout::new(Point::new(8, 4), Point::new(4, 2)).unwrap();
        assert_eq!(layout.index(Point::new(1, 0)), 1);
        assert_eq!(layout.index(Point::new(0, 1)), 4);
        assert_eq!(layout.index(Point::new(4, 0)), 8);
        assert_eq!(layout.chunk_of(Point::new(5, 3)), Point::new(1, 1));
    }

    #[test]
    fn points_follow_storage_order() {
        let layout = ChunkLayout::new(Point::new(4, 2), Point::new(2, 2)).unwrap();
        let pts: Vec<_> = layout.points().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(2, 1),
                Point::new(3, 1),
            ]
        );
    }
}
