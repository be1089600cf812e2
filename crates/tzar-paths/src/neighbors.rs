use tzar_core::{ChunkLayout, Point};

use crate::tile::{CostTile, TileRef};

/// Scratch buffer for the up to eight tiles surrounding a tile.
///
/// Tiles are listed in raster order (top row left to right, then the middle
/// row, then the bottom row). Search tie-breaks depend on this order.
#[derive(Debug, Clone, Default)]
pub struct NeighborCollector {
    items: [TileRef; 8],
    len: usize,
}

impl NeighborCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refill with the in-grid neighbours of `tile`.
    pub fn collect(&mut self, tile: &CostTile, layout: &ChunkLayout) -> &[TileRef] {
        self.collect_at(tile.pos(), layout)
    }

    /// Refill with the in-grid neighbours of position `p`.
    pub fn collect_at(&mut self, p: Point, layout: &ChunkLayout) -> &[TileRef] {
        self.len = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let n = p.shift(dx, dy);
                if layout.contains(n) {
                    self.items[self.len] = TileRef::new(layout.index(n));
                    self.len += 1;
                }
            }
        }
        self.as_slice()
    }

    #[inline]
    pub fn as_slice(&self) -> &[TileRef] {
        &self.items[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = TileRef> + '_ {
        self.as_slice().iter().copied()
    }
}
