//! Grid pathfinding for the tzar RTS prototype.
//!
//! [`PathingSystem`] runs A* over a [`TileGrid`] (usually a
//! [`tzar_core::SpatialGrid`]). Units move to any of the eight surrounding
//! tiles at the same cost, so both the step cost and the heuristic are the
//! [`chebyshev`] distance. Tiles holding a unit, tree or building block
//! movement.
//!
//! All search state is sized to the full grid when the system is built:
//!
//! | Piece | Type |
//! |---|---|
//! | per-tile costs and parent links, chunk-major | [`CostTile`] arena |
//! | open set | [`OpenHeap`], a fixed-capacity binary heap with a membership bitset |
//! | closed set | [`ClosedSet`], a [`TileBitSet`] |
//! | neighbour scratch | [`NeighborCollector`], at most eight entries |
//!
//! Each search cleans and reuses that storage.
//!
//! ```
//! use tzar_core::{Occupancy, Point, Range, SpatialGrid};
//! use tzar_paths::{Algorithm, PathingSystem};
//!
//! let mut grid = SpatialGrid::new(Point::new(16, 16), Point::new(8, 8)).unwrap();
//! grid.fill_range(Range::new(8, 0, 9, 15), Occupancy::Tree);
//!
//! let mut pathing = PathingSystem::with_defaults(&grid).unwrap();
//! let path = pathing
//!     .find_path(&grid, Point::new(0, 0), Point::new(15, 0), Algorithm::AStarHeap)
//!     .unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(15, 0)));
//! assert!(path.contains(&Point::new(8, 15)));
//! ```

mod astar;
mod bitset;
mod closed;
mod config;
mod distance;
mod error;
mod heap;
mod neighbors;
mod system;
mod tile;
mod traits;

pub use bitset::TileBitSet;
pub use closed::ClosedSet;
pub use config::{Algorithm, PathConfig};
pub use distance::chebyshev;
pub use error::PathError;
pub use heap::OpenHeap;
pub use neighbors::NeighborCollector;
pub use system::PathingSystem;
pub use tile::{CostTile, TileRef};
pub use traits::TileGrid;
