use std::cmp::Ordering;

use tzar_core::Point;

/// Offset of a [`CostTile`] in the engine's chunk-major tile arena.
///
/// The arena is laid out like the grid, so the offset is also the tile's
/// chunk-major grid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileRef(u32);

impl TileRef {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index as u32)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-tile search state.
///
/// Position is fixed at construction; costs and parent are rewritten by
/// every search that reaches the tile.
#[derive(Debug, Clone)]
pub struct CostTile {
    x: u32,
    y: u32,
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: Option<TileRef>,
}

impl CostTile {
    pub fn new(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            g: 0,
            h: 0,
            parent: None,
        }
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }

    #[inline]
    pub fn pos(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }

    /// Cost of the best known route from the start.
    #[inline]
    pub fn g(&self) -> i32 {
        self.g
    }

    /// Heuristic estimate of the remaining cost to the target.
    #[inline]
    pub fn h(&self) -> i32 {
        self.h
    }

    /// Estimated total cost `g + h`.
    #[inline]
    pub fn f(&self) -> i32 {
        self.g + self.h
    }

    /// Tile this one was reached from, `None` for the search origin.
    #[inline]
    pub fn parent(&self) -> Option<TileRef> {
        self.parent
    }

    /// Search priority: lower `f` first, ties go to the tile closer to the
    /// target (lower `h`).
    #[inline]
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.f().cmp(&other.f()).then(self.h.cmp(&other.h))
    }

    /// Whether `self` must be expanded strictly before `other`.
    #[inline]
    pub fn ranks_before(&self, other: &Self) -> bool {
        self.cmp_cost(other) == Ordering::Less
    }
}
