//! The battlefield tile grid.
//!
//! [`SpatialGrid`] stores one [`Occupancy`] per tile in chunk-major order
//! (see [`ChunkLayout`]). Gameplay code mutates occupancy as units move and
//! buildings go up; pathfinding only reads it.

use std::fmt;

use crate::chunk::ChunkLayout;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Width and height of a chunk used by [`SpatialGrid::with_default_chunks`].
pub const DEFAULT_CHUNK_SIZE: i32 = 8;

/// Side length of the prototype's square battlefield.
pub const DEFAULT_GRID_SIZE: i32 = 256;

/// What currently stands on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupancy {
    #[default]
    None,
    Unit,
    Tree,
    Building,
}

impl Occupancy {
    /// Only empty tiles can be walked through.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        matches!(self, Self::None)
    }

    /// Map glyph used by [`SpatialGrid::from_rows`] and `Display`.
    pub const fn glyph(self) -> char {
        match self {
            Self::None => '.',
            Self::Unit => 'u',
            Self::Tree => 'T',
            Self::Building => '#',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::None),
            'u' => Some(Self::Unit),
            'T' => Some(Self::Tree),
            '#' => Some(Self::Building),
            _ => None,
        }
    }
}

/// Fixed-size tile grid cut into equally sized chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct SpatialGrid {
    layout: ChunkLayout,
    tiles: Vec<Occupancy>,
}

impl SpatialGrid {
    /// Create an empty grid of `size` tiles cut into `chunk` blocks.
    pub fn new(size: Point, chunk: Point) -> Result<Self, GridError> {
        let layout = ChunkLayout::new(size, chunk)?;
        Ok(Self {
            tiles: vec![Occupancy::None; layout.len()],
            layout,
        })
    }

    /// Create an empty grid using [`DEFAULT_CHUNK_SIZE`] chunks.
    pub fn with_default_chunks(size: Point) -> Result<Self, GridError> {
        Self::new(size, Point::new(DEFAULT_CHUNK_SIZE, DEFAULT_CHUNK_SIZE))
    }

    /// Build a grid from text rows using the [`Occupancy::glyph`] alphabet.
    pub fn from_rows(rows: &[&str], chunk: Point) -> Result<Self, GridError> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let mut grid = Self::new(Point::new(width, height), chunk)?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as i32 != width {
                return Err(GridError::RaggedRow { row: y });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let occ = Occupancy::from_glyph(ch).ok_or(GridError::InvalidGlyph { ch, pos })?;
                grid.set(pos, occ);
            }
        }
        Ok(grid)
    }

    /// Occupancy of the tile at chunk-major `index`.
    ///
    /// Panics if `index` is not below [`len`](Self::len).
    #[inline]
    pub fn occupancy(&self, index: usize) -> Occupancy {
        self.tiles[index]
    }

    /// Overwrite the tile at chunk-major `index`.
    #[inline]
    pub fn set_occupancy(&mut self, index: usize, occ: Occupancy) {
        self.tiles[index] = occ;
    }

    /// Occupancy at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Occupancy> {
        if !self.layout.contains(p) {
            return None;
        }
        Some(self.tiles[self.layout.index(p)])
    }

    /// Set the occupancy at `p`. Returns `false` and does nothing when out of
    /// bounds.
    pub fn set(&mut self, p: Point, occ: Occupancy) -> bool {
        if !self.layout.contains(p) {
            return false;
        }
        let i = self.layout.index(p);
        self.tiles[i] = occ;
        true
    }

    /// Set every tile of `rng` (clipped to the grid).
    pub fn fill_range(&mut self, rng: Range, occ: Occupancy) {
        for p in rng {
            self.set(p, occ);
        }
    }

    /// Set every tile.
    pub fn fill(&mut self, occ: Occupancy) {
        self.tiles.fill(occ);
    }

    /// Grid size in tiles.
    #[inline]
    pub fn size(&self) -> Point {
        self.layout.size()
    }

    /// Chunk size in tiles.
    #[inline]
    pub fn chunk_size(&self) -> Point {
        self.layout.chunk_size()
    }

    /// Number of chunks along each axis.
    #[inline]
    pub fn chunk_grid_size(&self) -> Point {
        self.layout.chunk_grid_size()
    }

    /// Tiles per chunk.
    #[inline]
    pub fn chunk_tile_count(&self) -> usize {
        self.layout.chunk_tile_count()
    }

    /// Total number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false, see [`ChunkLayout::is_empty`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// `[0, size)` as a range.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.size())
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.layout.contains(p)
    }

    /// Chunk-major index of `p` (unchecked).
    #[inline]
    pub fn index(&self, p: Point) -> usize {
        self.layout.index(p)
    }

    /// The grid's chunk geometry.
    #[inline]
    pub fn layout(&self) -> &ChunkLayout {
        &self.layout
    }
}

impl fmt::Display for SpatialGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for y in 0..size.y {
            for x in 0..size.x {
                let occ = self.tiles[self.layout.index(Point::new(x, y))];
                write!(f, "{}", occ.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serialized form: geometry plus tiles in chunk-major order.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    size: Point,
    chunk: Point,
    tiles: Vec<Occupancy>,
}

#[cfg(feature = "serde")]
impl From<SpatialGrid> for GridRepr {
    fn from(g: SpatialGrid) -> Self {
        Self {
            size: g.size(),
            chunk: g.chunk_size(),
            tiles: g.tiles,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for SpatialGrid {
    type Error = GridError;

    fn try_from(r: GridRepr) -> Result<Self, GridError> {
        let layout = ChunkLayout::new(r.size, r.chunk)?;
        if r.tiles.len() != layout.len() {
            return Err(GridError::TileCount {
                expected: layout.len(),
                found: r.tiles.len(),
            });
        }
        Ok(Self {
            layout,
            tiles: r.tiles,
        })
    }
}
