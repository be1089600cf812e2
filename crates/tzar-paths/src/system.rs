use log::{debug, trace};
use tzar_core::{ChunkLayout, GridError, Point};

use crate::closed::ClosedSet;
use crate::config::{Algorithm, PathConfig};
use crate::error::PathError;
use crate::heap::OpenHeap;
use crate::neighbors::NeighborCollector;
use crate::tile::CostTile;
use crate::traits::TileGrid;

// ---------------------------------------------------------------------------
// Per-front search storage
// ---------------------------------------------------------------------------

/// Tile arena plus open/closed sets for one search front.
#[derive(Debug)]
pub(crate) struct SearchFront {
    pub(crate) tiles: Vec<CostTile>,
    pub(crate) open: OpenHeap,
    pub(crate) closed: ClosedSet,
}

impl SearchFront {
    fn new(layout: &ChunkLayout) -> Result<Self, PathError> {
        let len = layout.len();
        if len > u32::MAX as usize {
            return Err(PathError::Allocation { tiles: len });
        }
        let mut tiles = Vec::new();
        tiles
            .try_reserve_exact(len)
            .map_err(|_| PathError::Allocation { tiles: len })?;
        tiles.extend(
            layout
                .points()
                .map(|p| CostTile::new(p.x as u32, p.y as u32)),
        );
        Ok(Self {
            tiles,
            open: OpenHeap::new(len),
            closed: ClosedSet::new(len),
        })
    }

    pub(crate) fn cleanup(&mut self) {
        self.open.cleanup();
        self.closed.cleanup();
    }
}

// ---------------------------------------------------------------------------
// PathingSystem
// ---------------------------------------------------------------------------

/// Grid pathfinder with all search state allocated up front.
///
/// One `PathingSystem` serves any number of sequential searches on grids of
/// the shape it was built for; every search resets and reuses the same
/// storage, so no allocation happens during a search except for the
/// returned path.
#[derive(Debug)]
pub struct PathingSystem {
    pub(crate) layout: ChunkLayout,
    config: PathConfig,
    pub(crate) front: SearchFront,
    // Second front for the bidirectional search, not driven yet.
    mirror: Option<SearchFront>,
    pub(crate) neighbors: NeighborCollector,
    pub(crate) expanded: usize,
}

impl PathingSystem {
    /// Build a pathfinder for grids shaped like `grid`.
    pub fn new<G: TileGrid + ?Sized>(grid: &G, config: PathConfig) -> Result<Self, PathError> {
        let layout = ChunkLayout::new(grid.size(), grid.chunk_size()).map_err(|e| match e {
            GridError::TooLarge { size, .. } => PathError::Allocation {
                tiles: (size.x as usize).saturating_mul(size.y as usize),
            },
            e => PathError::Grid(e),
        })?;
        if layout.chunk_tile_count() != grid.chunk_tile_count() {
            return Err(Self::mismatch(&layout, grid));
        }
        let front = SearchFront::new(&layout)?;
        let mirror = if config.mirror_storage {
            Some(SearchFront::new(&layout)?)
        } else {
            None
        };
        debug!(
            "pathing: {}x{} grid, {}x{} chunks, mirror storage {}",
            layout.size().x,
            layout.size().y,
            layout.chunk_size().x,
            layout.chunk_size().y,
            mirror.is_some()
        );
        Ok(Self {
            layout,
            config,
            front,
            mirror,
            neighbors: NeighborCollector::new(),
            expanded: 0,
        })
    }

    /// [`new`](Self::new) with [`PathConfig::default`].
    pub fn with_defaults<G: TileGrid + ?Sized>(grid: &G) -> Result<Self, PathError> {
        Self::new(grid, PathConfig::default())
    }

    /// Find a path from `start` to `target` through walkable tiles.
    ///
    /// The result runs from `start` to `target`, both included, each step
    /// moving to one of the eight surrounding tiles. It is empty when the
    /// target cannot be reached. The start tile itself may be occupied.
    ///
    /// With [`PathConfig::check_bounds`] off the caller must keep both points
    /// inside the grid.
    pub fn find_path<G: TileGrid + ?Sized>(
        &mut self,
        grid: &G,
        start: Point,
        target: Point,
        algorithm: Algorithm,
    ) -> Result<Vec<Point>, PathError> {
        if grid.size() != self.layout.size() || grid.chunk_size() != self.layout.chunk_size() {
            return Err(Self::mismatch(&self.layout, grid));
        }
        if self.config.check_bounds {
            for pos in [start, target] {
                if !self.layout.contains(pos) {
                    return Err(PathError::OutOfBounds {
                        pos,
                        size: self.layout.size(),
                    });
                }
            }
        } else {
            debug_assert!(self.layout.contains(start), "start {start} outside grid");
            debug_assert!(self.layout.contains(target), "target {target} outside grid");
        }

        trace!("pathing: {algorithm:?} {start} -> {target}");
        match algorithm {
            Algorithm::AStarHeap => Ok(self.astar_heap(grid, start, target)),
            Algorithm::AStarHeapBidirectional => {
                debug!("pathing: bidirectional search is not available, no path");
                self.expanded = 0;
                if let Some(mirror) = &mut self.mirror {
                    mirror.cleanup();
                }
                Ok(Vec::new())
            }
        }
    }

    /// Grid size in tiles.
    #[inline]
    pub fn size(&self) -> Point {
        self.layout.size()
    }

    #[inline]
    pub fn layout(&self) -> &ChunkLayout {
        &self.layout
    }

    #[inline]
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Whether the bidirectional storage was allocated.
    #[inline]
    pub fn has_mirror_storage(&self) -> bool {
        self.mirror.as_ref().is_some_and(|m| m.tiles.len() == self.layout.len())
    }

    /// Tiles expanded by the last search.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Search state of the tile at `p`, as left by the last search.
    pub fn tile(&self, p: Point) -> Option<&CostTile> {
        if !self.layout.contains(p) {
            return None;
        }
        self.front.tiles.get(self.layout.index(p))
    }

    fn mismatch<G: TileGrid + ?Sized>(layout: &ChunkLayout, grid: &G) -> PathError {
        PathError::GeometryMismatch {
            expected_size: layout.size(),
            expected_chunk: layout.chunk_size(),
            size: grid.size(),
            chunk: grid.chunk_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tzar_core::SpatialGrid;

    fn grid(w: i32, h: i32, chunk: i32) -> SpatialGrid {
        SpatialGrid::new(Point::new(w, h), Point::new(chunk, chunk)).unwrap()
    }

    #[test]
    fn arena_follows_chunk_order() {
        let g = grid(16, 16, 8);
        let ps = PathingSystem::with_defaults(&g).unwrap();
        assert_eq!(ps.front.tiles.len(), 256);
        for (i, t) in ps.front.tiles.iter().enumerate() {
            assert_eq!(ps.layout.index(t.pos()), i);
        }
        assert_eq!(ps.front.tiles[64].pos(), Point::new(8, 0));
        assert_eq!(ps.front.open.capacity(), 256);
        assert_eq!(ps.front.closed.capacity(), 256);
    }

    struct Endless {
        side: Point,
    }

    impl TileGrid for Endless {
        fn occupancy(&self, _index: usize) -> tzar_core::Occupancy {
            tzar_core::Occupancy::None
        }
        fn size(&self) -> Point {
            self.side
        }
        fn chunk_size(&self) -> Point {
            self.side
        }
        fn chunk_tile_count(&self) -> usize {
            (self.side.x as usize).saturating_mul(self.side.y as usize)
        }
    }

    #[test]
    fn oversized_grid_fails_construction() {
        let huge = Endless {
            side: Point::new(70_000, 70_000),
        };
        let err = PathingSystem::with_defaults(&huge).unwrap_err();
        assert!(matches!(err, PathError::Allocation { .. }), "{err}");
        if let PathError::Allocation { tiles } = err {
            assert!(tiles > u32::MAX as usize || tiles == usize::MAX);
        }
    }

    #[test]
    fn mirror_storage_is_optional() {
        let g = grid(8, 8, 8);
        let ps = PathingSystem::new(&g, PathConfig::default()).unwrap();
        assert!(ps.has_mirror_storage());
        let ps = PathingSystem::new(&g, PathConfig::default().with_mirror_storage(false)).unwrap();
        assert!(!ps.has_mirror_storage());
    }

    #[test]
    fn out_of_bounds_endpoints_are_rejected_when_checked() {
        let g = grid(8, 8, 4);
        let mut ps = PathingSystem::new(&g, PathConfig::default().with_check_bounds(true)).unwrap();
        let err = ps
            .find_path(&g, Point::new(0, 0), Point::new(8, 2), Algorithm::AStarHeap)
            .unwrap_err();
        assert_eq!(
            err,
            PathError::OutOfBounds {
                pos: Point::new(8, 2),
                size: Point::new(8, 8)
            }
        );
        assert!(
            ps.find_path(&g, Point::new(-1, 0), Point::new(1, 1), Algorithm::AStarHeap)
                .is_err()
        );
        assert_eq!(err.to_string(), "pathing: (8, 2) is outside the 8x8 grid");
    }

    #[test]
    fn differently_shaped_grid_is_rejected() {
        let mut ps = PathingSystem::with_defaults(&grid(16, 16, 8)).unwrap();
        let other = grid(16, 16, 4);
        let err = ps
            .find_path(&other, Point::new(0, 0), Point::new(1, 1), Algorithm::AStarHeap)
            .unwrap_err();
        assert!(matches!(err, PathError::GeometryMismatch { .. }));
    }

    #[test]
    fn tile_view_is_bounds_checked() {
        let ps = PathingSystem::with_defaults(&grid(8, 8, 8)).unwrap();
        assert_eq!(ps.tile(Point::new(3, 5)).map(|t| t.pos()), Some(Point::new(3, 5)));
        assert!(ps.tile(Point::new(8, 0)).is_none());
        assert_eq!(ps.size(), Point::new(8, 8));
        assert_eq!(ps.layout().chunk_tile_count(), 64);
        assert!(ps.config().mirror_storage);
    }

    #[test]
    fn bidirectional_selector_yields_no_path() {
        let g = grid(8, 8, 8);
        let mut ps = PathingSystem::with_defaults(&g).unwrap();
        let path = ps
            .find_path(
                &g,
                Point::new(0, 0),
                Point::new(7, 7),
                Algorithm::AStarHeapBidirectional,
            )
            .unwrap();
        assert!(path.is_empty());
        assert_eq!(ps.last_expanded(), 0);
    }
}
