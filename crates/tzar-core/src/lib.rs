//! **tzar-core** — core types of the tzar RTS prototype.
//!
//! Geometry primitives, the chunk-major tile addressing scheme, and the
//! [`SpatialGrid`] that records what occupies every battlefield tile.

pub mod chunk;
pub mod error;
pub mod geom;
pub mod grid;

pub use chunk::{ChunkLayout, chunk_index};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{DEFAULT_CHUNK_SIZE, DEFAULT_GRID_SIZE, Occupancy, SpatialGrid};
