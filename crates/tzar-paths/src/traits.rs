use tzar_core::{Occupancy, Point, SpatialGrid};

/// Read-only view of a tile grid, as seen by the pathfinder.
///
/// Indices are chunk-major (see [`tzar_core::chunk_index`]).
pub trait TileGrid {
    /// Occupancy of the tile at chunk-major `index`.
    fn occupancy(&self, index: usize) -> Occupancy;

    /// Grid size in tiles.
    fn size(&self) -> Point;

    /// Chunk size in tiles.
    fn chunk_size(&self) -> Point;

    /// Tiles per chunk.
    fn chunk_tile_count(&self) -> usize;

    /// Whether a unit may step onto the tile at `index`.
    #[inline]
    fn is_walkable(&self, index: usize) -> bool {
        self.occupancy(index).is_walkable()
    }
}

impl TileGrid for SpatialGrid {
    #[inline]
    fn occupancy(&self, index: usize) -> Occupancy {
        SpatialGrid::occupancy(self, index)
    }

    #[inline]
    fn size(&self) -> Point {
        SpatialGrid::size(self)
    }

    #[inline]
    fn chunk_size(&self) -> Point {
        SpatialGrid::chunk_size(self)
    }

    #[inline]
    fn chunk_tile_count(&self) -> usize {
        SpatialGrid::chunk_tile_count(self)
    }
}
