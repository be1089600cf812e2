//! Fixed-capacity binary min-heap of tiles (the A* open set).
//!
//! Slots hold [`TileRef`]s into the engine's tile arena; the arena itself is
//! passed to every mutating call so that comparisons read the current costs.
//! A membership bitset answers "is this tile queued" in O(1), and a per-tile
//! slot table lets a queued tile move up in place when its cost drops.

use crate::bitset::TileBitSet;
use crate::tile::{CostTile, TileRef};

#[derive(Debug, Clone)]
pub struct OpenHeap {
    slots: Vec<TileRef>,
    len: usize,
    members: TileBitSet,
    // Valid only for tiles whose membership bit is set.
    slot_of: Vec<u32>,
}

impl OpenHeap {
    /// A heap able to hold every one of `capacity` tiles at once.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![TileRef::default(); capacity],
            len: 0,
            members: TileBitSet::new(capacity),
            slot_of: vec![0; capacity],
        }
    }

    /// Queue `tile`.
    ///
    /// The tile must not already be queued; use
    /// [`decrease_key`](Self::decrease_key) to reprioritise it instead.
    pub fn add(&mut self, tile: TileRef, tiles: &[CostTile]) {
        debug_assert!(self.len < self.slots.len(), "open set is full");
        debug_assert!(!self.find(tile), "tile {} queued twice", tile.index());
        let slot = self.len;
        self.len += 1;
        self.members.set(tile.index());
        self.place(slot, tile);
        self.sift_up(slot, tiles);
    }

    /// Remove the tile in `slot` and return it.
    ///
    /// The last tile takes the vacated slot and sinks to its place.
    pub fn remove(&mut self, slot: usize, tiles: &[CostTile]) -> TileRef {
        debug_assert!(slot < self.len, "slot {slot} past len {}", self.len);
        let removed = self.slots[slot];
        self.members.clear(removed.index());
        self.len -= 1;
        if slot < self.len {
            let last = self.slots[self.len];
            self.place(slot, last);
            let settled = self.sift_down(slot, tiles);
            self.sift_up(settled, tiles);
        }
        removed
    }

    /// Remove and return the cheapest tile.
    pub fn pop(&mut self, tiles: &[CostTile]) -> Option<TileRef> {
        if self.len == 0 {
            return None;
        }
        Some(self.remove(0, tiles))
    }

    /// Restore heap order after the cost of queued `tile` went down.
    pub fn decrease_key(&mut self, tile: TileRef, tiles: &[CostTile]) {
        debug_assert!(self.find(tile), "tile {} is not queued", tile.index());
        let slot = self.slot_of[tile.index()] as usize;
        self.sift_up(slot, tiles);
    }

    /// The cheapest tile, without removing it.
    #[inline]
    pub fn front(&self) -> Option<TileRef> {
        (self.len > 0).then(|| self.slots[0])
    }

    /// The tile in the last occupied slot.
    #[inline]
    pub fn back(&self) -> Option<TileRef> {
        self.len.checked_sub(1).map(|i| self.slots[i])
    }

    /// Whether `tile` is currently queued.
    #[inline]
    pub fn find(&self, tile: TileRef) -> bool {
        self.members.test(tile.index())
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
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Queued tiles in slot order.
    #[inline]
    pub fn as_slice(&self) -> &[TileRef] {
        &self.slots[..self.len]
    }

    /// Empty the heap, keeping the storage.
    pub fn cleanup(&mut self) {
        self.len = 0;
        self.members.clear_all();
    }

    #[inline]
    fn place(&mut self, slot: usize, tile: TileRef) {
        self.slots[slot] = tile;
        self.slot_of[tile.index()] = slot as u32;
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.slot_of[self.slots[a].index()] = a as u32;
        self.slot_of[self.slots[b].index()] = b as u32;
    }

    #[inline]
    fn less(&self, a: usize, b: usize, tiles: &[CostTile]) -> bool {
        tiles[self.slots[a].index()].ranks_before(&tiles[self.slots[b].index()])
    }

    fn sift_up(&mut self, mut slot: usize, tiles: &[CostTile]) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent, tiles) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize, tiles: &[CostTile]) -> usize {
        loop {
            let left = 2 * slot + 1;
            if left >= self.len {
                return slot;
            }
            let right = left + 1;
            // On equal children the right one wins.
            let child = if right < self.len && !self.less(left, right, tiles) {
                right
            } else {
                left
            };
            if !self.less(child, slot, tiles) {
                return slot;
            }
            self.swap(child, slot);
            slot = child;
        }
    }
}
